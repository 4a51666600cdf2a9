//! Auswertung der Spline: Parameter-Abbildung, Position/Geschwindigkeit und
//! Neuberechnung der abgeleiteten Längen- und Bounding-Daten.

use super::BezierSpline;
use crate::core::bezier::{self, SegmentParam};
use crate::core::{ArcLengthCache, BoundingBox};
use glam::Vec3;

impl BezierSpline {
    /// Bildet `t ∈ [0, 1]` gleichmäßig auf die Segmente ab (gleicher
    /// Parameterbereich pro Segment, nicht gleiche Länge).
    pub fn calc_index(&self, t: f32) -> SegmentParam {
        bezier::uniform_param(t, self.segment_count())
    }

    /// Bildet einen Distanz-Anteil `t ∈ [0, 1]` auf Segment + lokalen Parameter ab.
    ///
    /// Ohne aktuellen Bogenlängen-Cache (Edit seit `calc_bezier_length`) wird
    /// auf die gleichmäßige Abbildung zurückgefallen.
    pub fn calc_index_normalized(&self, t: f32) -> SegmentParam {
        match &self.arc_length {
            Some(cache) => cache.locate(t),
            None => {
                log::warn!(
                    "Bogenlänge veraltet: calc_bezier_length() vor normierten Abfragen aufrufen"
                );
                self.calc_index(t)
            }
        }
    }

    /// Position bei gleichmäßiger Parametrisierung
    pub fn position(&self, t: f32) -> Vec3 {
        self.point_at(self.calc_index(t))
    }

    /// Geschwindigkeit bei gleichmäßiger Parametrisierung
    pub fn velocity(&self, t: f32) -> Vec3 {
        self.velocity_at(self.calc_index(t))
    }

    /// Normierte Bewegungsrichtung.
    ///
    /// Bei degenerierten Segmenten (Geschwindigkeit 0) ist das Ergebnis NaN;
    /// Aufrufer müssen das selbst abfangen.
    pub fn direction(&self, t: f32) -> Vec3 {
        self.velocity(t).normalize()
    }

    /// Position bei konstanter Geschwindigkeit (Bogenlänge)
    pub fn position_normalized(&self, t: f32) -> Vec3 {
        self.point_at(self.calc_index_normalized(t))
    }

    /// Geschwindigkeit bei konstanter Geschwindigkeit (Bogenlänge)
    pub fn velocity_normalized(&self, t: f32) -> Vec3 {
        self.velocity_at(self.calc_index_normalized(t))
    }

    /// Normierte Richtung bei konstanter Geschwindigkeit
    pub fn direction_normalized(&self, t: f32) -> Vec3 {
        self.velocity_normalized(t).normalize()
    }

    /// Verteilt `count` Punkte in gleichen Distanzen entlang der gesamten Spline.
    pub fn distribute(&self, count: usize) -> Vec<Vec3> {
        match count {
            0 => Vec::new(),
            1 => vec![self.position_normalized(0.0)],
            _ => {
                let step = 1.0 / (count - 1) as f32;
                (0..count)
                    .map(|i| self.position_normalized(i as f32 * step))
                    .collect()
            }
        }
    }

    fn point_at(&self, param: SegmentParam) -> Vec3 {
        bezier::point(self.segment(param.segment), param.t)
    }

    fn velocity_at(&self, param: SegmentParam) -> Vec3 {
        bezier::first_derivative(self.segment(param.segment), param.t)
    }

    /// Berechnet Segment-Längen, Längenanteile und LUTs neu.
    ///
    /// Muss nach jedem Edit vor normierten Abfragen aufgerufen werden.
    /// Gibt die Gesamtlänge zurück.
    pub fn calc_bezier_length(&mut self) -> f32 {
        let cache = ArcLengthCache::build(
            (0..self.segment_count()).map(|i| self.segment(i)),
            self.options.length_steps,
            self.options.lut_divisions,
        );
        let total = cache.total_length();
        log::debug!(
            "Bogenlänge neu berechnet: {:.3} über {} Segment(e)",
            total,
            cache.segment_count()
        );
        self.arc_length = Some(cache);
        total
    }

    /// Tastet die Kurve ab und berechnet die achsenparallele Bounding-Box.
    pub fn calc_bounding_box(&mut self) -> BoundingBox {
        let steps = (self.options.bounds_steps.max(1) * self.segment_count()).max(1);
        let bounds =
            BoundingBox::from_points((0..=steps).map(|i| self.position(i as f32 / steps as f32)));
        self.bounds = Some(bounds);
        bounds
    }

    /// Bogenlängen-Cache, falls seit dem letzten Edit berechnet
    pub fn arc_length(&self) -> Option<&ArcLengthCache> {
        self.arc_length.as_ref()
    }

    /// Gibt an, ob `calc_bezier_length` nach einem Edit noch aussteht
    pub fn is_length_dirty(&self) -> bool {
        self.arc_length.is_none()
    }

    /// Gesamtlänge aus der letzten Berechnung
    pub fn total_length(&self) -> Option<f32> {
        self.arc_length.as_ref().map(ArcLengthCache::total_length)
    }

    /// Segment-Längen aus der letzten Berechnung
    pub fn segment_lengths(&self) -> Option<&[f32]> {
        self.arc_length.as_ref().map(ArcLengthCache::segment_lengths)
    }

    /// Bounding-Box aus der letzten Berechnung
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        self.bounds
    }
}

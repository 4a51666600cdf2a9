//! Die zentrale Spline-Datenstruktur mit Kontrollpunkten, Tangenten-Modi und Loop-Flag.
//!
//! Layout: Segment `i` nutzt die Punkte `3i..=3i+3`. Jeder dritte Punkt ist ein
//! Joint (liegt auf der Kurve), die Punkte dazwischen sind Tangenten-Handles.
//! Pro Joint gibt es genau einen `TangentMode`.

mod sampling;
mod topology;


use super::{ArcLengthCache, BoundingBox, ControlPoint, TangentMode};
use crate::shared::SplineOptions;
use glam::Vec3;

/// Stückweise kubische Bézier-Spline
///
/// Abgeleitete Daten (Bogenlänge, Bounding-Box) werden bei jedem Edit
/// verworfen und erst durch `calc_bezier_length` / `calc_bounding_box`
/// neu aufgebaut.
#[derive(Debug, Clone, PartialEq)]
pub struct BezierSpline {
    /// Kontrollpunkte, Länge immer `3k + 1`
    points: Vec<ControlPoint>,
    /// Ein Modus pro Joint, Länge immer `k + 1`
    modes: Vec<TangentMode>,
    /// Geschlossener Pfad: letzter Punkt/Modus spiegelt den ersten
    looped: bool,
    /// Numerische Parameter für Abtastung und Edits
    options: SplineOptions,
    /// Bogenlängen-Cache (None = seit dem letzten Edit nicht neu berechnet)
    arc_length: Option<ArcLengthCache>,
    /// Zuletzt berechnete Bounding-Box
    bounds: Option<BoundingBox>,
}

impl BezierSpline {
    /// Erstellt eine neue Spline mit einem Segment ab `origin`
    pub fn new(origin: Vec3) -> Self {
        Self::with_options(origin, SplineOptions::default())
    }

    /// Erstellt eine neue Spline mit eigenen Optionen
    pub fn with_options(origin: Vec3, options: SplineOptions) -> Self {
        let mut spline = Self {
            points: Vec::new(),
            modes: Vec::new(),
            looped: false,
            options,
            arc_length: None,
            bounds: None,
        };
        spline.reset(origin);
        spline
    }

    /// Übernimmt bereits validierte Rohdaten (siehe `json::SplineData`).
    pub(crate) fn from_parts(
        points: Vec<ControlPoint>,
        modes: Vec<TangentMode>,
        looped: bool,
        options: SplineOptions,
    ) -> Self {
        debug_assert!(points.len() >= 4 && (points.len() - 1) % 3 == 0);
        debug_assert_eq!(modes.len(), (points.len() - 1) / 3 + 1);
        Self {
            points,
            modes,
            looped,
            options,
            arc_length: None,
            bounds: None,
        }
    }

    /// Setzt auf ein einzelnes gerades Segment zurück: vier Punkte im Abstand 1
    /// entlang +X, beide Modi `Free`, kein Loop.
    pub fn reset(&mut self, origin: Vec3) {
        self.points = (0..4)
            .map(|i| ControlPoint::new(origin + Vec3::X * i as f32))
            .collect();
        self.modes = vec![TangentMode::Free, TangentMode::Free];
        self.looped = false;
        self.invalidate();
        self.calc_bezier_length();
    }

    /// Alle Kontrollpunkte (read-only)
    pub fn points(&self) -> &[ControlPoint] {
        &self.points
    }

    /// Alle Tangenten-Modi (read-only), einer pro Joint
    pub fn modes(&self) -> &[TangentMode] {
        &self.modes
    }

    /// Anzahl der Kurvensegmente
    pub fn segment_count(&self) -> usize {
        (self.points.len() - 1) / 3
    }

    /// Anzahl der Joints (= Segmente + 1)
    pub fn joint_count(&self) -> usize {
        self.modes.len()
    }

    /// Index des letzten Kontrollpunkts
    pub fn last_index(&self) -> usize {
        self.points.len() - 1
    }

    /// Gibt an, ob der Pfad geschlossen ist
    pub fn is_loop(&self) -> bool {
        self.looped
    }

    /// Öffnet oder schließt den Pfad.
    ///
    /// Beim Schließen übernimmt der letzte Joint Position und Modus des ersten.
    pub fn set_loop(&mut self, looped: bool) {
        self.looped = looped;
        if looped {
            let last_mode = self.modes.len() - 1;
            self.modes[last_mode] = self.modes[0];
            let first = self.points[0].position;
            self.set_control_point(0, first);
        }
        self.invalidate();
    }

    /// Löst einen beliebigen Index auf einen gültigen Punkt-Index auf:
    /// negative Werte laufen vom Ende her, zu große werden auf den letzten geklemmt.
    pub fn resolve_index(&self, index: isize) -> usize {
        let len = self.points.len() as isize;
        let index = if index < 0 { index.rem_euclid(len) } else { index };
        (index as usize).min(self.last_index())
    }

    /// Position eines Kontrollpunkts (Index wird per `resolve_index` aufgelöst)
    pub fn control_point(&self, index: isize) -> Vec3 {
        self.points[self.resolve_index(index)].position
    }

    /// Globaler Parameter, an dem ein Kontrollpunkt-Index liegt (`index / last`)
    pub fn param_at_index(&self, index: usize) -> f32 {
        let last = self.last_index();
        index.min(last) as f32 / last as f32
    }

    /// Die vier Kontrollpunkte eines Segments
    pub fn segment(&self, segment: usize) -> [Vec3; 4] {
        let first = segment * 3;
        [
            self.points[first].position,
            self.points[first + 1].position,
            self.points[first + 2].position,
            self.points[first + 3].position,
        ]
    }

    /// Setzt die Position eines Kontrollpunkts.
    ///
    /// Ein verschobener Joint nimmt seine angrenzenden Handles mit, damit die
    /// Kurvenform am Joint erhalten bleibt. Am Loop-Rand bewegen sich erster
    /// und letzter Joint gemeinsam. Danach wird der Tangenten-Modus durchgesetzt.
    pub fn set_control_point(&mut self, index: usize, position: Vec3) {
        if index % 3 == 0 {
            let delta = position - self.points[index].position;
            let last = self.last_index();
            if self.looped {
                if index == 0 {
                    self.points[1].position += delta;
                    self.points[last - 1].position += delta;
                    self.points[last].position = position;
                } else if index == last {
                    self.points[0].position = position;
                    self.points[1].position += delta;
                    self.points[index - 1].position += delta;
                } else {
                    self.points[index - 1].position += delta;
                    self.points[index + 1].position += delta;
                }
            } else {
                if index > 0 {
                    self.points[index - 1].position += delta;
                }
                if index < last {
                    self.points[index + 1].position += delta;
                }
            }
        }

        self.points[index].position = position;
        self.enforce_mode(index);
        self.invalidate();
    }

    /// Tangenten-Modus des Joints, zu dem `index` gehört
    pub fn control_point_mode(&self, index: usize) -> TangentMode {
        self.modes[(index + 1) / 3]
    }

    /// Setzt den Modus des Joints, zu dem `index` gehört (am Loop-Rand für beide Enden).
    pub fn set_control_point_mode(&mut self, index: usize, mode: TangentMode) {
        let mode_index = (index + 1) / 3;
        let last_mode = self.modes.len() - 1;
        self.modes[mode_index] = mode;
        if self.looped {
            if mode_index == 0 {
                self.modes[last_mode] = mode;
            } else if mode_index == last_mode {
                self.modes[0] = mode;
            }
        }
        self.enforce_mode(index);
        self.invalidate();
    }

    /// Verschiebt alle Kontrollpunkte um `offset`
    pub fn translate(&mut self, offset: Vec3) {
        for point in &mut self.points {
            point.position += offset;
        }
        self.invalidate();
    }

    /// Skaliert alle Kontrollpunkte komponentenweise (bezogen auf den Ursprung)
    pub fn scale(&mut self, factors: Vec3) {
        for point in &mut self.points {
            point.position *= factors;
        }
        self.invalidate();
    }

    /// Setzt den Modus des Joints durch, nachdem `index` bearbeitet wurde.
    ///
    /// Das Handle auf der bearbeiteten Seite ist fest, das gegenüberliegende wird
    /// durch den Joint gespiegelt (`Mirrored`) bzw. nur in der Richtung
    /// gespiegelt (`Aligned`, eigener Abstand bleibt). Offene Endpunkte haben
    /// nur ein Handle und bleiben unberührt.
    fn enforce_mode(&mut self, index: usize) {
        let mode_index = (index + 1) / 3;
        let mode = self.modes[mode_index];
        let last_mode = self.modes.len() - 1;
        let open_end = !self.looped && (mode_index == 0 || mode_index == last_mode);
        if !mode.is_constrained() || open_end {
            return;
        }

        let last = self.last_index();
        let middle_index = mode_index * 3;
        // Am Loop-Rand liegt das Nachbar-Handle am anderen Ende des Arrays
        let before = if middle_index == 0 { last - 1 } else { middle_index - 1 };
        let after = if middle_index == last { 1 } else { middle_index + 1 };
        let (fixed_index, enforced_index) = if index <= middle_index {
            (before, after)
        } else {
            (after, before)
        };

        let middle = self.points[middle_index].position;
        let mut tangent = middle - self.points[fixed_index].position;
        if mode == TangentMode::Aligned {
            let length = middle.distance(self.points[enforced_index].position);
            tangent = tangent.normalize_or_zero() * length;
        }
        self.points[enforced_index].position = middle + tangent;
    }

    /// Zieht nach einem Edit den letzten Joint wieder auf den ersten (nur im Loop).
    fn snap_loop_end(&mut self) {
        if !self.looped {
            return;
        }
        let last = self.last_index();
        let last_mode = self.modes.len() - 1;
        self.points[last].position = self.points[0].position;
        self.modes[last_mode] = self.modes[0];
        self.enforce_mode(0);
    }

    /// Verwirft abgeleitete Daten nach einem Edit
    fn invalidate(&mut self) {
        self.arc_length = None;
        self.bounds = None;
    }
}

impl Default for BezierSpline {
    fn default() -> Self {
        Self::new(Vec3::ZERO)
    }
}

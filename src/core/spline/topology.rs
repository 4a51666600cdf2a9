//! Topologie-Edits: Segmente anhängen, einfügen, entfernen und Splines zusammenfügen.
//!
//! Alle Edits halten die Form `3k + 1` Punkte / `k + 1` Modi ein und ziehen im
//! Loop den letzten Joint wieder auf den ersten.

use super::BezierSpline;
use crate::core::{bezier, ControlPoint, TangentMode};
use crate::shared::Splice;
use glam::Vec3;

impl BezierSpline {
    /// Hängt ein Segment an. Die drei neuen Punkte liegen als Platzhalter
    /// entlang +X hinter dem bisherigen Endpunkt.
    pub fn add_curve(&mut self) {
        let spacing = Vec3::X * self.options.add_curve_spacing;
        let end = self.points[self.last_index()].position;
        self.points
            .extend((1..=3).map(|i| ControlPoint::new(end + spacing * i as f32)));

        let previous_mode = self.modes[self.modes.len() - 1];
        self.modes.push(previous_mode);
        let previous_joint = self.points.len() - 4;
        self.enforce_mode(previous_joint);

        self.snap_loop_end();
        self.invalidate();
        log::debug!("Segment angehängt, jetzt {} Segment(e)", self.segment_count());
    }

    /// Fügt hinter dem Joint `index` ein neues Segment ein.
    ///
    /// Am letzten Joint entspricht das `add_curve`. Sonst entsteht ein neuer
    /// Joint in der Mitte des folgenden Segments (gleichmäßiger Parameter 0.5)
    /// mit zwei kurzen Handles entlang der lokalen Geschwindigkeit.
    pub fn insert_next_point(&mut self, index: usize) {
        debug_assert!(index % 3 == 0, "Index {} ist kein Joint", index);
        if index == self.last_index() {
            self.add_curve();
            return;
        }

        let segment = self.segment(index / 3);
        let middle = bezier::point(segment, 0.5);
        let handle = bezier::first_derivative(segment, 0.5) * self.options.insert_handle_scale;
        self.points.insert_slice_at(
            index + 2,
            &[
                ControlPoint::new(middle - handle),
                ControlPoint::new(middle),
                ControlPoint::new(middle + handle),
            ],
        );

        let mode_index = (index + 1) / 3;
        self.modes.insert(mode_index + 1, TangentMode::Free);

        self.snap_loop_end();
        self.invalidate();
        log::debug!(
            "Joint nach Index {} eingefügt, jetzt {} Segment(e)",
            index,
            self.segment_count()
        );
    }

    /// Gibt an, ob `remove_point` erlaubt ist (mindestens ein Segment muss bleiben).
    pub fn can_remove_point(&self) -> bool {
        self.segment_count() > 1
    }

    /// Entfernt das Segment am Joint `index`.
    ///
    /// Entfernte Punkte je nach Lage des Joints:
    /// - erster Joint: `0..=2`
    /// - letzter Joint: `index-2..=index`
    /// - innerer Joint: `index-1..=index+1` (Joint samt beiden Handles)
    ///
    /// # Panics
    /// Wenn nur noch ein Segment vorhanden ist.
    pub fn remove_point(&mut self, index: usize) {
        assert!(
            self.can_remove_point(),
            "Letztes Segment kann nicht entfernt werden"
        );
        debug_assert!(index % 3 == 0, "Index {} ist kein Joint", index);

        let window = if index == 0 {
            0..=2
        } else if index == self.last_index() {
            index - 2..=index
        } else {
            index - 1..=index + 1
        };
        self.points.remove_range(window);
        self.modes.remove((index + 1) / 3);

        if self.looped {
            self.set_loop(true);
        }
        self.invalidate();
        log::debug!(
            "Joint {} entfernt, jetzt {} Segment(e)",
            index,
            self.segment_count()
        );
    }

    /// Hängt eine andere Spline an das Ende an.
    ///
    /// Zwischen altem Endpunkt und neuem Startpunkt entstehen zwei Brücken-Handles,
    /// die jeweils in Verlängerung des inneren Handles liegen. Beide Joints an der
    /// Naht werden `Aligned`. Das innere Handle des alten Endes bleibt unverändert.
    pub fn add_bezier_data(&mut self, other: &BezierSpline) {
        let old_last = self.last_index();
        let tail_mode = self.modes.len() - 1;
        let offset = self.options.bridge_handle_offset;

        let tail = self.points[old_last].position;
        let tail_handle = self.points[old_last - 1].position;
        let head = other.points[0].position;
        let head_handle = other.points[1].position;
        let bridge_out = tail + (tail - tail_handle).normalize_or_zero() * offset;
        let bridge_in = head + (head - head_handle).normalize_or_zero() * offset;

        self.points.push(ControlPoint::new(bridge_out));
        self.points.push(ControlPoint::new(bridge_in));
        self.points.extend_from_slice(&other.points);
        self.modes.extend_from_slice(&other.modes);
        debug_assert_eq!(self.modes.len(), self.segment_count() + 1);

        self.set_control_point_mode(old_last + 1, TangentMode::Aligned);
        self.set_control_point_mode(old_last + 2, TangentMode::Aligned);
        self.set_control_point(old_last + 1, bridge_out);
        self.set_control_point(old_last + 2, bridge_in);
        self.set_control_point(old_last - 1, tail_handle);

        self.snap_loop_end();
        self.invalidate();
        log::debug!(
            "Spline mit {} Segment(en) angehängt an Joint {}, jetzt {} Segment(e)",
            other.segment_count(),
            tail_mode,
            self.segment_count()
        );
    }
}

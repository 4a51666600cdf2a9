//! Persistiertes Layout einer Spline.

use crate::core::{BezierSpline, ControlPoint, SplineError, TangentMode};
use crate::shared::SplineOptions;
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Die drei Felder, die eine Spline vollständig bestimmen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplineData {
    /// Kontrollpunkt-Positionen in Reihenfolge
    pub points: Vec<Vec3>,
    /// Ein Tangenten-Modus pro Joint
    pub modes: Vec<TangentMode>,
    /// Geschlossener Pfad
    #[serde(rename = "loop", default)]
    pub looped: bool,
}

impl SplineData {
    /// Prüft die Form: `3k + 1` Punkte, `k + 1` Modi, nur endliche Koordinaten.
    pub fn validate(&self) -> Result<(), SplineError> {
        let count = self.points.len();
        if count < 4 || (count - 1) % 3 != 0 {
            return Err(SplineError::InvalidPointCount(count));
        }

        let segments = (count - 1) / 3;
        if self.modes.len() != segments + 1 {
            return Err(SplineError::ModeCountMismatch {
                segments,
                found: self.modes.len(),
            });
        }

        if let Some(index) = self.points.iter().position(|p| !p.is_finite()) {
            return Err(SplineError::NonFinitePosition(index));
        }
        Ok(())
    }

    /// Baut eine Spline inklusive Längendaten auf.
    ///
    /// Ein inkonsistenter Loop-Rand (erster ≠ letzter Punkt oder Modus) wird
    /// repariert, indem der letzte Joint auf den ersten gezogen wird.
    pub fn into_spline(self, options: SplineOptions) -> Result<BezierSpline, SplineError> {
        self.validate()?;

        let boundary_mismatch = self.looped
            && (self.points.first() != self.points.last()
                || self.modes.first() != self.modes.last());

        let points = self.points.into_iter().map(ControlPoint::new).collect();
        let mut spline = BezierSpline::from_parts(points, self.modes, self.looped, options);
        if boundary_mismatch {
            log::warn!("Loop-Rand inkonsistent, letzter Joint wird auf den ersten gesetzt");
            spline.set_loop(true);
        }
        spline.calc_bezier_length();
        Ok(spline)
    }
}

impl From<&BezierSpline> for SplineData {
    fn from(spline: &BezierSpline) -> Self {
        Self {
            points: spline.points().iter().map(|p| p.position).collect(),
            modes: spline.modes().to_vec(),
            looped: spline.is_loop(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data(points: usize, modes: usize) -> SplineData {
        SplineData {
            points: (0..points).map(|i| Vec3::X * i as f32).collect(),
            modes: vec![TangentMode::Free; modes],
            looped: false,
        }
    }

    #[test]
    fn test_validate_accepts_valid_shapes() {
        assert_eq!(data(4, 2).validate(), Ok(()));
        assert_eq!(data(10, 4).validate(), Ok(()));
    }

    #[test]
    fn test_validate_rejects_point_counts() {
        assert_eq!(data(1, 1).validate(), Err(SplineError::InvalidPointCount(1)));
        assert_eq!(data(5, 2).validate(), Err(SplineError::InvalidPointCount(5)));
        assert_eq!(data(0, 0).validate(), Err(SplineError::InvalidPointCount(0)));
    }

    #[test]
    fn test_validate_rejects_mode_count() {
        assert_eq!(
            data(7, 2).validate(),
            Err(SplineError::ModeCountMismatch {
                segments: 2,
                found: 2
            })
        );
    }

    #[test]
    fn test_validate_rejects_nan() {
        let mut d = data(4, 2);
        d.points[2].y = f32::NAN;
        assert_eq!(d.validate(), Err(SplineError::NonFinitePosition(2)));
    }

    #[test]
    fn test_into_spline_repairs_loop_boundary() {
        let mut d = data(7, 3);
        d.looped = true;
        d.modes[0] = TangentMode::Mirrored;

        let spline = d.into_spline(SplineOptions::default()).expect("gültige Daten");
        assert!(spline.is_loop());
        assert_eq!(spline.control_point(6), spline.control_point(0));
        assert_eq!(spline.modes()[2], TangentMode::Mirrored);
        assert!(!spline.is_length_dirty());
    }

    #[test]
    fn test_from_spline() {
        let mut spline = BezierSpline::default();
        spline.set_control_point_mode(0, TangentMode::Aligned);
        let d = SplineData::from(&spline);
        assert_eq!(d.points.len(), 4);
        assert_eq!(d.modes, vec![TangentMode::Aligned, TangentMode::Free]);
        assert!(!d.looped);
    }
}

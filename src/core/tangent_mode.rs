//! Tangenten-Modus eines Joints und der Kontrollpunkt-Typ.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Bedingung für die beiden Tangenten-Handles eines Joints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TangentMode {
    /// Handles sind unabhängig voneinander
    #[default]
    Free,
    /// Entgegengesetzte Richtung, eigene Länge bleibt erhalten
    Aligned,
    /// Entgegengesetzte Richtung und gleiche Länge
    Mirrored,
}

impl TangentMode {
    /// Gibt an, ob der Modus das gegenüberliegende Handle nachführt.
    pub fn is_constrained(self) -> bool {
        self != TangentMode::Free
    }
}

/// Ein Kontrollpunkt der Spline (Joint oder Tangenten-Handle)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ControlPoint {
    /// Position in Welt-Koordinaten
    pub position: Vec3,
}

impl ControlPoint {
    /// Erstellt einen Kontrollpunkt an der gegebenen Position
    pub fn new(position: Vec3) -> Self {
        Self { position }
    }
}

impl From<Vec3> for ControlPoint {
    fn from(position: Vec3) -> Self {
        Self::new(position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_mode_is_free() {
        assert_eq!(TangentMode::default(), TangentMode::Free);
        assert!(!TangentMode::Free.is_constrained());
        assert!(TangentMode::Aligned.is_constrained());
        assert!(TangentMode::Mirrored.is_constrained());
    }

    #[test]
    fn test_control_point_serializes_as_plain_vector() {
        let cp = ControlPoint::new(Vec3::new(1.0, 2.0, 3.0));
        let json = serde_json::to_string(&cp).expect("Serialisierung erwartet");
        assert_eq!(json, "[1.0,2.0,3.0]");
    }
}

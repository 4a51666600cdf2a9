//! Fehler beim Übernehmen persistierter Spline-Daten.

use thiserror::Error;

/// Ungültige Form persistierter Spline-Daten
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SplineError {
    /// Punktanzahl ist nicht `3k + 1` mit `k >= 1`
    #[error("ungültige Punktanzahl {0}: erwartet 3k+1 mit k >= 1")]
    InvalidPointCount(usize),
    /// Anzahl der Tangenten-Modi passt nicht zur Segment-Anzahl
    #[error("{found} Tangenten-Modi für {segments} Segment(e), erwartet {}", .segments + 1)]
    ModeCountMismatch { segments: usize, found: usize },
    /// Koordinate ist NaN oder unendlich
    #[error("Kontrollpunkt {0} hat eine nicht-endliche Koordinate")]
    NonFinitePosition(usize),
}

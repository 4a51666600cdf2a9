//! Geteilte Hilfsmittel: Konfiguration und Sequenz-Operationen.

pub mod options;
pub mod splice;

pub use options::SplineOptions;
pub use splice::Splice;

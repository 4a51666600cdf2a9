//! JSON Import/Export für Bézier-Splines.
//!
//! Persistiert werden nur die drei bestimmenden Felder (Punkte, Modi, Loop-Flag).
//! Längen, LUTs und Bounding-Box werden beim Laden neu berechnet.

pub mod data;
pub mod parser;
pub mod writer;

pub use data::SplineData;
pub use parser::{load_spline_file, parse_spline, parse_spline_with_options};
pub use writer::{save_spline_file, write_spline};

//! Bézier-Path Library.
//! Stückweise kubische Bézier-Splines mit Tangenten-Modi, Loop-Schluss und
//! Bogenlängen-Parametrisierung.

pub mod core;
pub mod json;
pub mod shared;

pub use core::{
    ArcLengthCache, BezierSpline, BoundingBox, ControlPoint, SegmentParam, SplineError,
    TangentMode,
};
pub use json::{load_spline_file, parse_spline, save_spline_file, write_spline, SplineData};
pub use shared::SplineOptions;

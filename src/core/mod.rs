//! Core-Domänentypen: Spline, Tangenten-Modi, Auswertung und Bogenlängen-Cache.

pub mod arc_length;
pub mod bezier;
pub mod bounds;
pub mod error;
/// Core-Datenmodell der Bézier-Spline
///
/// Dieses Modul definiert die Haupt-Datenstrukturen:
/// - BezierSpline: Kontrollpunkte, Modi und Loop-Flag samt Edits
/// - TangentMode: Bedingung für die Handles eines Joints
/// - ControlPoint: Einzelner Kontrollpunkt mit Position
pub mod spline;
pub mod tangent_mode;

pub use arc_length::{ArcLengthCache, LENGTH_EPSILON};
pub use bezier::SegmentParam;
pub use bounds::BoundingBox;
pub use error::SplineError;
pub use spline::BezierSpline;
pub use tangent_mode::{ControlPoint, TangentMode};

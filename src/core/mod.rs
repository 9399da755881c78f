//! Core-Domänentypen: Bézier-Pfad, Punkt-Rollen, Fehler.

pub mod error;
pub mod path;
pub mod point_role;

pub use error::{PathError, PathResult, PathStateError};
pub use path::{BezierPath, SampleStepping, TangentMode};
pub use point_role::PointRole;

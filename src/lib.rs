//! Path-Generator Library.
//! Editierbarer 2D-Pfad aus kubischen Bézier-Segmenten mit Auto-Tangenten
//! und gleichmäßigem Resampling (Bewegungspfade, prozedurale Meshes).

pub mod app;
pub mod core;
pub mod shared;

pub use crate::app::{PathCommand, PathHost};
pub use crate::core::{
    BezierPath, PathError, PathResult, PathStateError, PointRole, SampleStepping, TangentMode,
};
pub use crate::shared::PathOptions;

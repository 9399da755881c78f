//! Geteilte Bausteine ohne Pfad-Zustand: Kurvengeometrie und Konfiguration.

pub mod bezier_geometry;
pub mod options;

pub use options::PathOptions;
pub use options::{DEFAULT_RESOLUTION, DEFAULT_SPACING, SEED_HALF_WIDTH};

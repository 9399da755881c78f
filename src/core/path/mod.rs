//! Editierbarer 2D-Pfad aus aneinandergereihten kubischen Bézier-Segmenten.
//!
//! Aufgeteilt in:
//! - `state`    — Struct, Konstruktoren, Lese-Zugriffe (Punkte, Segmente)
//! - `editing`  — Mutationen (Segment anhängen, Punkt verschieben, Öffnen/Schließen)
//! - `tangents` — Tangenten-Modus und automatische Handle-Berechnung
//! - `sampling` — gleichmäßig verteilte Punkte entlang der Kurve

mod editing;
mod sampling;
mod state;
mod tangents;

pub use sampling::SampleStepping;
pub use state::BezierPath;
pub use tangents::TangentMode;

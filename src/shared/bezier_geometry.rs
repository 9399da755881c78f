//! Reine Geometrie-Funktionen für kubische Bézier-Segmente.
//!
//! Layer-neutral: wird vom `BezierPath` (Tangenten, Resampling) und von Tests
//! gleichermaßen genutzt, ohne Abhängigkeit zum Pfad-Zustand.

use glam::Vec2;

/// B(t) = (1-t)³·P0 + 3(1-t)²t·P1 + 3(1-t)t²·P2 + t³·P3
///
/// `t` wird nicht geklemmt: Werte leicht über 1.0 extrapolieren die Kurve
/// (relevant für das Legacy-Stepping beim Resampling).
pub fn cubic_bezier(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2, t: f32) -> Vec2 {
    let inv = 1.0 - t;
    let inv2 = inv * inv;
    let t2 = t * t;
    inv2 * inv * p0 + 3.0 * inv2 * t * p1 + 3.0 * inv * t2 * p2 + t2 * t * p3
}

/// Wertet ein Segment im Format `[anchor, handle, handle, next_anchor]` aus.
pub fn eval_segment(segment: &[Vec2; 4], t: f32) -> Vec2 {
    cubic_bezier(segment[0], segment[1], segment[2], segment[3], t)
}

/// Spiegelt `point` am Zentrum `center`: `2·center − point`.
pub fn mirror(point: Vec2, center: Vec2) -> Vec2 {
    center * 2.0 - point
}

/// Grobe Längenschätzung eines Segments für die Wahl der Schrittzahl.
///
/// Sehne + halbe Länge des Kontrollpolygons. Liegt zwischen unterer
/// (Sehne) und oberer Schranke (Polygon), ist aber keine echte Bogenlänge.
pub fn estimate_segment_length(segment: &[Vec2; 4]) -> f32 {
    let [p0, p1, p2, p3] = *segment;
    let control_net = p0.distance(p1) + p1.distance(p2) + p2.distance(p3);
    p0.distance(p3) + control_net * 0.5
}

/// Approximierte Länge einer Polyline.
pub fn polyline_length(points: &[Vec2]) -> f32 {
    points.windows(2).map(|w| w[0].distance(w[1])).sum()
}

//! Gleichmäßig verteilte Punkte entlang des Pfads (Sehnen-Abstand).
//!
//! Jedes Segment wird in feinen Parameterschritten ausgewertet; die Distanz
//! zwischen aufeinanderfolgenden Kurvenpunkten wird aufsummiert. Sobald sie den
//! Zielabstand erreicht, wird ein Ausgabepunkt per Rück-Interpolation auf der
//! letzten Teilsehne platziert.

use super::BezierPath;
use crate::core::error::{PathError, PathResult};
use crate::shared::bezier_geometry::{estimate_segment_length, eval_segment};
use crate::shared::options::DIVISIONS_PER_UNIT;
use glam::Vec2;

/// Schrittfolge des Kurvenparameters pro Segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SampleStepping {
    /// `t` wird vor jeder Auswertung erhöht, Schleife läuft solange `t <= 1`.
    /// Der letzte Schritt landet damit leicht hinter `t = 1`. Bricht das Segment
    /// ab, sobald der Schritt `t` in `f32` nicht mehr verändert.
    #[default]
    Legacy,
    /// `t = i / divisions` für `i = 1..=divisions`, endet exakt bei `t = 1`.
    Inclusive,
}

/// Summiert Kurvenabstände auf und setzt Ausgabepunkte im Zielabstand.
struct SpacingWalker {
    spacing: f32,
    previous: Vec2,
    distance: f32,
    output: Vec<Vec2>,
}

impl SpacingWalker {
    fn new(start: Vec2, spacing: f32) -> Self {
        Self {
            spacing,
            previous: start,
            distance: 0.0,
            output: vec![start],
        }
    }

    fn advance(&mut self, point_on_curve: Vec2) {
        self.distance += self.previous.distance(point_on_curve);
        // Nicht-endliche Koordinaten würden die innere Schleife nie verlassen
        if !self.distance.is_finite() {
            self.distance = 0.0;
            self.previous = point_on_curve;
            return;
        }

        while self.distance >= self.spacing {
            let overshoot = self.distance - self.spacing;
            let new_point =
                point_on_curve + (self.previous - point_on_curve).normalize_or_zero() * overshoot;
            self.output.push(new_point);
            self.distance = overshoot;
            self.previous = new_point;
        }
        self.previous = point_on_curve;
    }
}

impl BezierPath {
    /// Punkte entlang der Kurve im Abstand `spacing` (Legacy-Schrittfolge).
    ///
    /// Der erste Anker ist immer der erste Ausgabepunkt. `resolution` skaliert die
    /// Anzahl der Kurvenauswertungen pro Segment. Ein leerer Pfad ergibt eine leere Liste.
    pub fn sample_evenly_spaced(&self, spacing: f32, resolution: f32) -> PathResult<Vec<Vec2>> {
        self.sample_evenly_spaced_with(spacing, resolution, SampleStepping::Legacy)
    }

    /// Wie [`BezierPath::sample_evenly_spaced`], mit wählbarer Schrittfolge.
    pub fn sample_evenly_spaced_with(
        &self,
        spacing: f32,
        resolution: f32,
        stepping: SampleStepping,
    ) -> PathResult<Vec<Vec2>> {
        check_positive("spacing", spacing)?;
        check_positive("resolution", resolution)?;

        let Some(&start) = self.points.first() else {
            return Ok(Vec::new());
        };

        let mut walker = SpacingWalker::new(start, spacing);
        for segment in self.segments() {
            let divisions = segment_divisions(&segment, resolution);
            match stepping {
                SampleStepping::Legacy => {
                    let step = 1.0 / divisions as f32;
                    let mut t = 0.0f32;
                    while t <= 1.0 {
                        let next = t + step;
                        // Schrittweite unterhalb der f32-Auflösung: `t` käme nie über 1
                        if next == t {
                            break;
                        }
                        t = next;
                        walker.advance(eval_segment(&segment, t));
                    }
                }
                SampleStepping::Inclusive => {
                    for i in 1..=divisions {
                        let t = i as f32 / divisions as f32;
                        walker.advance(eval_segment(&segment, t));
                    }
                }
            }
        }

        log::trace!(
            "Resampling: {} Segmente → {} Punkte (Abstand {})",
            self.segment_count(),
            walker.output.len(),
            spacing
        );
        Ok(walker.output)
    }
}

/// Anzahl der Parameterschritte für ein Segment (mindestens 1).
fn segment_divisions(segment: &[Vec2; 4], resolution: f32) -> usize {
    let estimated = estimate_segment_length(segment);
    let divisions = (estimated * resolution * DIVISIONS_PER_UNIT).ceil();
    if divisions.is_finite() && divisions >= 1.0 {
        divisions as usize
    } else {
        1
    }
}

fn check_positive(name: &'static str, value: f32) -> PathResult<()> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(PathError::InvalidArgument { name, value })
    }
}

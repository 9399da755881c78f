//! `BezierPath`-Struct, Konstruktoren und Lese-Zugriffe.

use super::TangentMode;
use crate::core::error::{PathError, PathResult, PathStateError};
use crate::core::point_role::{neighbor_index, wrap_index, PointRole};
use crate::shared::options::SEED_HANDLE_OFFSET;
use glam::Vec2;

/// Pfad aus kubischen Bézier-Segmenten in einem flachen Punkt-Array.
///
/// Layout: `[A0, H, H, A1, H, H, A2, …]`. Ein offener Pfad mit `S` Segmenten
/// hat `3S + 1` Punkte, ein geschlossener `3S` (das letzte Handle-Paar führt
/// zurück zu `A0`).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BezierPath {
    pub(super) points: Vec<Vec2>,
    pub(super) is_closed: bool,
    pub(super) tangent_mode: TangentMode,
}

impl BezierPath {
    /// Erstellt einen leeren Pfad ohne Punkte.
    ///
    /// Nur als Zwischenzustand gedacht (z.B. vor `from_raw_parts`); Mutationen
    /// auf einem leeren Pfad schlagen mit `PathStateError::EmptyPath` fehl.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Erstellt ein offenes Segment zwischen `anchor_a` und `anchor_b`.
    ///
    /// Die Handles liegen fest diagonal versetzt (`+0.5·(1, 1)` bzw. `−0.5·(1, 1)`),
    /// unabhängig von der Lage der Anker.
    pub fn new(anchor_a: Vec2, anchor_b: Vec2) -> Self {
        let offset = Vec2::ONE * SEED_HANDLE_OFFSET;
        Self {
            points: vec![anchor_a, anchor_a + offset, anchor_b - offset, anchor_b],
            is_closed: false,
            tangent_mode: TangentMode::Manual,
        }
    }

    /// Baut einen Pfad aus bereits vorhandenen Punkten auf.
    ///
    /// Die Punktanzahl muss zur Topologie passen (offen: `3n + 1` mit `n ≥ 1`,
    /// geschlossen: `3n` mit `n ≥ 2`); ein leeres offenes Array ergibt den leeren Pfad.
    /// Mit `auto_set` werden alle Handles sofort neu berechnet.
    pub fn from_raw_parts(points: Vec<Vec2>, is_closed: bool, auto_set: bool) -> PathResult<Self> {
        let len = points.len();
        let valid = match (is_closed, len) {
            (false, 0) => true,
            (false, n) => n >= 4 && n % 3 == 1,
            (true, n) => n >= 6 && n % 3 == 0,
        };
        if !valid {
            return Err(PathStateError::InvalidPointCount {
                len,
                closed: is_closed,
            }
            .into());
        }

        let mut path = Self {
            points,
            is_closed,
            tangent_mode: TangentMode::Manual,
        };
        path.set_auto_set(auto_set);
        Ok(path)
    }

    /// Anzahl aller Punkte (Anker + Handles).
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Anzahl der Bézier-Segmente.
    pub fn segment_count(&self) -> usize {
        self.points.len() / 3
    }

    /// `true` wenn der Pfad leer ist.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Alle Punkte in Speicherreihenfolge.
    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    /// Punkt an `index` oder `IndexOutOfBounds`.
    pub fn point(&self, index: usize) -> PathResult<Vec2> {
        self.points
            .get(index)
            .copied()
            .ok_or(PathError::IndexOutOfBounds {
                index,
                len: self.points.len(),
            })
    }

    /// Rolle des Punkts an `index` (Anker oder Handle).
    pub fn point_role(&self, index: usize) -> PathResult<PointRole> {
        self.check_index(index)?;
        Ok(PointRole::of_index(index))
    }

    /// Geschlossener Pfad (letztes Segment führt zurück zum ersten Anker)?
    pub fn is_closed(&self) -> bool {
        self.is_closed
    }

    /// Werden die Handles automatisch aus den Ankern berechnet?
    pub fn auto_set(&self) -> bool {
        self.tangent_mode.is_auto()
    }

    /// Aktueller Tangenten-Modus.
    pub fn tangent_mode(&self) -> TangentMode {
        self.tangent_mode
    }

    /// Die vier Kontrollpunkte eines Segments: `[anchor, handle, handle, next_anchor]`.
    ///
    /// Beim letzten Segment eines geschlossenen Pfads ist `next_anchor` der erste Anker.
    pub fn segment_points(&self, segment: usize) -> PathResult<[Vec2; 4]> {
        let count = self.segment_count();
        if segment >= count {
            return Err(PathError::SegmentOutOfBounds { segment, count });
        }
        Ok(self.segment_unchecked(segment))
    }

    /// Iterator über alle Segmente in Ankerreihenfolge.
    pub fn segments(&self) -> impl Iterator<Item = [Vec2; 4]> + '_ {
        (0..self.segment_count()).map(move |segment| self.segment_unchecked(segment))
    }

    /// Iterator über alle Anker-Positionen.
    pub fn anchors(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.points.iter().step_by(3).copied()
    }

    pub(super) fn segment_unchecked(&self, segment: usize) -> [Vec2; 4] {
        let i = segment * 3;
        [
            self.points[i],
            self.points[i + 1],
            self.points[i + 2],
            self.points[wrap_index(i as isize + 3, self.points.len())],
        ]
    }

    /// Nachbar-Index `index + offset` unter Beachtung von Offen/Geschlossen.
    pub(super) fn neighbor(&self, index: usize, offset: isize) -> Option<usize> {
        neighbor_index(index, offset, self.points.len(), self.is_closed)
    }

    pub(super) fn check_index(&self, index: usize) -> PathResult<()> {
        if index < self.points.len() {
            Ok(())
        } else {
            Err(PathError::IndexOutOfBounds {
                index,
                len: self.points.len(),
            })
        }
    }

    pub(super) fn check_not_empty(&self) -> PathResult<()> {
        if self.points.is_empty() {
            Err(PathStateError::EmptyPath.into())
        } else {
            Ok(())
        }
    }
}

impl std::ops::Index<usize> for BezierPath {
    type Output = Vec2;

    /// Direkter Punkt-Zugriff; panikt wie Slice-Indexing bei ungültigem Index.
    fn index(&self, index: usize) -> &Vec2 {
        &self.points[index]
    }
}

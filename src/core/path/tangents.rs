//! Tangenten-Modus und automatische Handle-Berechnung.
//!
//! Im Modus `Auto` sind die Handles abgeleitete Werte: jede Anker-Änderung
//! überschreibt die Handles in der Umgebung. Die Richtung eines Ankers ist die
//! Winkelhalbierende zu seinen Nachbarankern, die Länge jedes Handles die halbe
//! Distanz zum jeweiligen Nachbarn (Catmull-Rom-ähnlich).

use super::BezierPath;
use crate::core::error::{PathError, PathResult};
use crate::core::point_role::PointRole;
use glam::Vec2;

/// Wie die Handles eines Pfads gepflegt werden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TangentMode {
    /// Handles sind frei editierbar; Anker nehmen ihre Handles beim Verschieben mit
    #[default]
    Manual,
    /// Handles werden aus den Nachbarankern berechnet und sind nicht direkt editierbar
    Auto,
}

impl TangentMode {
    /// `true` für [`TangentMode::Auto`].
    pub fn is_auto(self) -> bool {
        self == TangentMode::Auto
    }
}

impl From<bool> for TangentMode {
    fn from(auto_set: bool) -> Self {
        if auto_set {
            TangentMode::Auto
        } else {
            TangentMode::Manual
        }
    }
}

impl BezierPath {
    /// Schaltet die automatische Handle-Berechnung um.
    ///
    /// Beim Einschalten werden sofort alle Handles neu berechnet.
    /// Setzen des bereits aktiven Werts ändert nichts.
    pub fn set_auto_set(&mut self, auto_set: bool) {
        self.set_tangent_mode(TangentMode::from(auto_set));
    }

    /// Setzt den Tangenten-Modus (siehe [`BezierPath::set_auto_set`]).
    pub fn set_tangent_mode(&mut self, mode: TangentMode) {
        if mode == self.tangent_mode {
            return;
        }
        self.tangent_mode = mode;
        log::trace!("Tangenten-Modus: {:?}", mode);
        if mode.is_auto() {
            self.recompute_all_tangents();
        }
    }

    /// Berechnet die beiden Handles eines einzelnen Ankers neu.
    pub fn recompute_tangents_at(&mut self, anchor: usize) -> PathResult<()> {
        if self.point_role(anchor)? != PointRole::Anchor {
            return Err(PathError::NotAnAnchor { index: anchor });
        }
        self.auto_set_anchor(anchor);
        Ok(())
    }

    /// Minimaler Neuberechnungsbereich nach einer lokalen Änderung:
    /// der Anker an `anchor`, seine beiden Nachbaranker und die offenen Enden.
    pub fn recompute_neighborhood(&mut self, anchor: usize) -> PathResult<()> {
        if self.point_role(anchor)? != PointRole::Anchor {
            return Err(PathError::NotAnAnchor { index: anchor });
        }
        self.auto_set_neighborhood(anchor);
        Ok(())
    }

    /// Berechnet die Handles aller Anker neu, danach die offenen Enden.
    pub fn recompute_all_tangents(&mut self) {
        for anchor in (0..self.points.len()).step_by(3) {
            self.auto_set_anchor(anchor);
        }
        self.auto_set_open_ends();
    }

    /// Setzt die Handles an den freien Enden eines offenen Pfads auf die
    /// Mitte zwischen End-Anker und nächstem inneren Punkt.
    ///
    /// Keine Wirkung bei geschlossenen oder leeren Pfaden.
    pub fn recompute_open_end_tangents(&mut self) {
        self.auto_set_open_ends();
    }

    /// Winkelhalbierende-Tangente für `anchor` (ohne Bereichsprüfung).
    pub(super) fn auto_set_anchor(&mut self, anchor: usize) {
        let anchor_pos = self.points[anchor];
        let mut direction = Vec2::ZERO;
        // Vorzeichen der zweiten Seite ist negativ: Handle zeigt vom Nachbarn weg
        let mut neighbor_distance = [0.0f32; 2];

        if let Some(prev) = self.neighbor(anchor, -3) {
            let offset = self.points[prev] - anchor_pos;
            direction += offset.normalize_or_zero();
            neighbor_distance[0] = offset.length();
        }
        if let Some(next) = self.neighbor(anchor, 3) {
            let offset = self.points[next] - anchor_pos;
            direction -= offset.normalize_or_zero();
            neighbor_distance[1] = -offset.length();
        }

        let direction = direction.normalize_or_zero();

        for (side, distance) in neighbor_distance.into_iter().enumerate() {
            let offset = side as isize * 2 - 1;
            if let Some(handle) = self.neighbor(anchor, offset) {
                self.points[handle] = anchor_pos + direction * distance * 0.5;
            }
        }
    }

    /// Anker `index` und seine beiden Nachbaranker neu berechnen, danach offene Enden.
    pub(super) fn auto_set_neighborhood(&mut self, index: usize) {
        for offset in [-3, 0, 3] {
            if let Some(anchor) = self.neighbor(index, offset) {
                self.auto_set_anchor(anchor);
            }
        }
        self.auto_set_open_ends();
    }

    pub(super) fn auto_set_open_ends(&mut self) {
        let len = self.points.len();
        if self.is_closed || len < 4 {
            return;
        }
        self.points[1] = (self.points[0] + self.points[2]) * 0.5;
        self.points[len - 2] = (self.points[len - 1] + self.points[len - 3]) * 0.5;
    }
}

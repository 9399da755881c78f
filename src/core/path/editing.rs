//! Mutationen: Segment anhängen, Punkt verschieben, Öffnen/Schließen.

use super::BezierPath;
use crate::core::error::{PathResult, PathStateError};
use crate::core::point_role::PointRole;
use crate::shared::bezier_geometry::mirror;
use glam::Vec2;

impl BezierPath {
    /// Hängt ein neues Segment vom letzten Anker zu `anchor` an.
    ///
    /// Nur für offene Pfade erlaubt (`PathStateError::SegmentOnClosedPath`).
    /// Das erste neue Handle spiegelt das letzte Handle am letzten Anker
    /// (stetige Tangente), das zweite liegt mittig zwischen diesem und `anchor`.
    pub fn add_segment(&mut self, anchor: Vec2) -> PathResult<()> {
        self.check_not_empty()?;
        if self.is_closed {
            return Err(PathStateError::SegmentOnClosedPath.into());
        }

        let len = self.points.len();
        let outgoing = mirror(self.points[len - 2], self.points[len - 1]);
        self.points.push(outgoing);
        self.points.push((outgoing + anchor) * 0.5);
        self.points.push(anchor);

        if self.tangent_mode.is_auto() {
            self.auto_set_neighborhood(self.points.len() - 1);
        }
        log::trace!("Segment angehängt, Segmente: {}", self.segment_count());
        Ok(())
    }

    /// Verschiebt den Punkt an `index` nach `position`.
    ///
    /// - Handle im Auto-Modus: keine Änderung, Rückgabe `false`
    /// - Auto-Modus: Handles der Umgebung werden neu berechnet
    /// - Anker (manuell): beide Handles werden um dieselbe Verschiebung mitgenommen
    /// - Handle (manuell): das gegenüberliegende Handle desselben Ankers wird
    ///   gespiegelt ausgerichtet, behält aber seine eigene Länge
    ///
    /// Gibt `true` zurück, wenn der Pfad verändert wurde.
    pub fn move_point(&mut self, index: usize, position: Vec2) -> PathResult<bool> {
        self.check_index(index)?;
        let role = PointRole::of_index(index);
        if role == PointRole::Handle && self.tangent_mode.is_auto() {
            return Ok(false);
        }

        let delta = position - self.points[index];
        self.points[index] = position;

        if self.tangent_mode.is_auto() {
            self.auto_set_neighborhood(index);
            return Ok(true);
        }

        match role {
            PointRole::Anchor => {
                for offset in [1, -1] {
                    if let Some(handle) = self.neighbor(index, offset) {
                        self.points[handle] += delta;
                    }
                }
            }
            PointRole::Handle => self.mirror_paired_handle(index, position),
        }
        Ok(true)
    }

    /// Richtet das Partner-Handle (Index ±2, über den Anker bei Index ±1) neu aus.
    fn mirror_paired_handle(&mut self, index: usize, position: Vec2) {
        let next_is_anchor = (index + 1) % 3 == 0;
        let (other_offset, anchor_offset) = if next_is_anchor { (2, 1) } else { (-2, -1) };

        let (Some(other), Some(anchor)) = (
            self.neighbor(index, other_offset),
            self.neighbor(index, anchor_offset),
        ) else {
            return;
        };

        let anchor_pos = self.points[anchor];
        let distance = anchor_pos.distance(self.points[other]);
        let direction = (anchor_pos - position).normalize_or_zero();
        self.points[other] = anchor_pos + direction * distance;
    }

    /// Schaltet zwischen offenem und geschlossenem Pfad um.
    ///
    /// Schließen hängt zwei Handles an (Spiegelung am letzten bzw. ersten Anker),
    /// Öffnen entfernt genau diese beiden wieder. Im Auto-Modus werden die
    /// betroffenen Tangenten neu berechnet; ein doppeltes Umschalten kann dann
    /// Handle-Positionen verändern.
    pub fn toggle_closed(&mut self) -> PathResult<()> {
        self.check_not_empty()?;
        self.is_closed = !self.is_closed;

        if self.is_closed {
            let len = self.points.len();
            let closing_out = mirror(self.points[len - 2], self.points[len - 1]);
            let closing_in = mirror(self.points[1], self.points[0]);
            self.points.push(closing_out);
            self.points.push(closing_in);

            if self.tangent_mode.is_auto() {
                let last_anchor = self.points.len() - 3;
                self.auto_set_anchor(0);
                self.auto_set_anchor(last_anchor);
            }
        } else {
            let len = self.points.len();
            self.points.truncate(len - 2);
            if self.tangent_mode.is_auto() {
                self.auto_set_open_ends();
            }
        }

        log::trace!(
            "Pfad {}, Punkte: {}",
            if self.is_closed { "geschlossen" } else { "geöffnet" },
            self.points.len()
        );
        Ok(())
    }
}

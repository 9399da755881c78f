//! Commands der Editor-Schicht an den Pfad.

use glam::Vec2;

/// Mutierende Schritte, die der Editor als Reaktion auf Benutzer-Gesten auslöst.
#[derive(Debug, Clone, PartialEq)]
pub enum PathCommand {
    /// Neues Segment vom letzten Anker zur Weltposition anhängen
    AddSegment { anchor: Vec2 },
    /// Punkt (Anker oder Handle) an neue Position ziehen
    MovePoint { index: usize, position: Vec2 },
    /// Pfad öffnen bzw. schließen
    ToggleClosed,
    /// Automatische Handle-Berechnung ein-/ausschalten
    SetAutoSet { enabled: bool },
    /// Pfad verwerfen und neuen Standard-Pfad am Host-Ursprung erzeugen
    ResetPath,
}

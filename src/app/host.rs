//! Host-Komponente: besitzt genau einen Pfad und führt Editor-Commands aus.

use super::PathCommand;
use crate::core::BezierPath;
use crate::shared::PathOptions;
use anyhow::Context;
use glam::Vec2;

/// Besitzer eines `BezierPath`, positioniert an einem Ursprung in der Welt.
#[derive(Debug, Clone)]
pub struct PathHost {
    origin: Vec2,
    options: PathOptions,
    path: BezierPath,
}

impl PathHost {
    /// Erstellt einen Host und erzeugt direkt den Standard-Pfad am `origin`.
    pub fn new(origin: Vec2, options: PathOptions) -> Self {
        let path = Self::seed_path(origin, &options);
        Self {
            origin,
            options,
            path,
        }
    }

    /// Ursprung des Hosts in Weltkoordinaten.
    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    /// Verschiebt den Ursprung; der bestehende Pfad bleibt unverändert.
    pub fn set_origin(&mut self, origin: Vec2) {
        self.origin = origin;
    }

    /// Aktive Optionen.
    pub fn options(&self) -> &PathOptions {
        &self.options
    }

    /// Read-only Zugriff für Darstellung und Export.
    pub fn path(&self) -> &BezierPath {
        &self.path
    }

    /// Ersetzt den Pfad durch einen neuen Standard-Pfad `origin ± (half_width, 0)`.
    pub fn generate_path(&mut self) {
        self.path = Self::seed_path(self.origin, &self.options);
        log::info!(
            "Neuer Pfad bei ({:.2}, {:.2}), Auto-Tangenten: {}",
            self.origin.x,
            self.origin.y,
            self.options.auto_set
        );
    }

    fn seed_path(origin: Vec2, options: &PathOptions) -> BezierPath {
        let half = Vec2::new(options.seed_half_width, 0.0);
        let mut path = BezierPath::new(origin - half, origin + half);
        path.set_auto_set(options.auto_set);
        path
    }

    /// Führt einen Editor-Command auf dem Pfad aus.
    pub fn handle_command(&mut self, command: PathCommand) -> anyhow::Result<()> {
        log::debug!("PathCommand: {:?}", command);

        match command {
            PathCommand::AddSegment { anchor } => self
                .path
                .add_segment(anchor)
                .context("Segment anhängen fehlgeschlagen")?,
            PathCommand::MovePoint { index, position } => self.move_point(index, position)?,
            PathCommand::ToggleClosed => self
                .path
                .toggle_closed()
                .context("Öffnen/Schließen fehlgeschlagen")?,
            PathCommand::SetAutoSet { enabled } => self.path.set_auto_set(enabled),
            PathCommand::ResetPath => self.generate_path(),
        }

        Ok(())
    }

    fn move_point(&mut self, index: usize, position: Vec2) -> anyhow::Result<()> {
        let current = self
            .path
            .point(index)
            .with_context(|| format!("Punkt {} kann nicht verschoben werden", index))?;
        if current == position {
            return Ok(());
        }

        let changed = self.path.move_point(index, position)?;
        if !changed {
            log::debug!(
                "Handle {} ignoriert: Auto-Tangenten sind aktiv",
                index
            );
        }
        Ok(())
    }

    /// Gleichmäßig verteilte Punkte mit Abstand und Auflösung aus den Optionen.
    pub fn sample(&self) -> anyhow::Result<Vec<Vec2>> {
        self.path
            .sample_evenly_spaced(self.options.spacing, self.options.resolution)
            .with_context(|| {
                format!(
                    "Resampling mit Abstand {} / Auflösung {} fehlgeschlagen",
                    self.options.spacing, self.options.resolution
                )
            })
    }
}

//! Zentrale Konfiguration für den Path-Generator.
//!
//! `PathOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

// ── Seed-Pfad ───────────────────────────────────────────────────────

/// Halber Abstand der beiden Seed-Anker zum Ursprung des Hosts (entlang X).
pub const SEED_HALF_WIDTH: f32 = 0.5;
/// Diagonaler Versatz der Standard-Handles relativ zu ihrem Anker.
pub const SEED_HANDLE_OFFSET: f32 = 0.5;

// ── Resampling ──────────────────────────────────────────────────────

/// Standard-Abstand zwischen zwei Ausgabepunkten (Sehnenlänge).
pub const DEFAULT_SPACING: f32 = 1.0;
/// Standard-Auflösungsfaktor der Schrittweite pro Segment.
pub const DEFAULT_RESOLUTION: f32 = 1.0;
/// Kurvenauswertungen pro geschätzter Längeneinheit bei Auflösung 1.0.
pub const DIVISIONS_PER_UNIT: f32 = 10.0;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Optionen.
/// Wird als `path_generator.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PathOptions {
    /// Halber Ankerabstand beim Erzeugen eines neuen Pfads
    pub seed_half_width: f32,
    /// Neue Pfade direkt mit Auto-Tangenten anlegen
    pub auto_set: bool,
    /// Zielabstand der Ausgabepunkte
    pub spacing: f32,
    /// Auflösungsfaktor für das Resampling
    pub resolution: f32,
}

impl Default for PathOptions {
    fn default() -> Self {
        Self {
            seed_half_width: SEED_HALF_WIDTH,
            auto_set: false,
            spacing: DEFAULT_SPACING,
            resolution: DEFAULT_RESOLUTION,
        }
    }
}

impl PathOptions {
    /// Dateiname der Optionen neben der Binary.
    pub const FILE_NAME: &'static str = "path_generator.toml";

    /// Liest und parst eine Optionen-Datei.
    pub fn try_load(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Optionen nicht lesbar: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Optionen fehlerhaft: {}", path.display()))
    }

    /// Lädt Optionen; fehlt die Datei oder ist sie ungültig, gelten die Standardwerte.
    pub fn load_from_file(path: &Path) -> Self {
        if !path.exists() {
            log::info!("Keine Optionen unter {}, Standardwerte aktiv", path.display());
            return Self::default();
        }
        Self::try_load(path).unwrap_or_else(|e| {
            log::warn!("{:#}; Standardwerte aktiv", e);
            Self::default()
        })
    }

    /// Schreibt die Optionen als TOML.
    pub fn save_to_file(&self, path: &Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self).context("Optionen nicht serialisierbar")?;
        fs::write(path, content)
            .with_context(|| format!("Optionen nicht schreibbar: {}", path.display()))?;
        log::info!("Optionen gespeichert: {}", path.display());
        Ok(())
    }

    /// `path_generator.toml` im Verzeichnis der laufenden Binary (Fallback: `.`).
    pub fn config_path() -> PathBuf {
        let dir = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
            .unwrap_or_else(|| PathBuf::from("."));
        dir.join(Self::FILE_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_toml_falls_back_to_defaults() {
        let opts: PathOptions = toml::from_str("spacing = 0.25").expect("TOML gültig");
        assert_eq!(opts.spacing, 0.25);
        assert_eq!(opts.resolution, DEFAULT_RESOLUTION);
        assert_eq!(opts.seed_half_width, SEED_HALF_WIDTH);
        assert!(!opts.auto_set);
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = std::env::temp_dir().join(format!("path_generator_opts_{}", std::process::id()));
        std::fs::create_dir_all(&dir).expect("Temp-Verzeichnis");
        let file = dir.join("path_generator.toml");

        let opts = PathOptions {
            seed_half_width: 2.0,
            auto_set: true,
            spacing: 0.5,
            resolution: 3.0,
        };
        opts.save_to_file(&file).expect("Speichern");
        let loaded = PathOptions::load_from_file(&file);
        assert_eq!(loaded, opts);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let loaded = PathOptions::load_from_file(std::path::Path::new(
            "/nonexistent/path_generator.toml",
        ));
        assert_eq!(loaded, PathOptions::default());
    }

    #[test]
    fn test_invalid_toml_reports_error_and_falls_back() {
        let dir = std::env::temp_dir().join(format!("path_generator_bad_{}", std::process::id()));
        std::fs::create_dir_all(&dir).expect("Temp-Verzeichnis");
        let file = dir.join(PathOptions::FILE_NAME);
        std::fs::write(&file, "spacing = \"breit\"").expect("Schreiben");

        assert!(PathOptions::try_load(&file).is_err());
        assert_eq!(PathOptions::load_from_file(&file), PathOptions::default());

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_config_path_uses_file_name() {
        assert!(PathOptions::config_path().ends_with(PathOptions::FILE_NAME));
    }
}

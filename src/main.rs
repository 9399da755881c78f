//! Path-Generator CLI.
//!
//! Erzeugt den Standard-Pfad am Ursprung, hängt optional weitere Anker an
//! (`x,y` je Argument) und gibt die gleichmäßig verteilten Punkte aus.
//!
//! Aufruf: `path-generator [--closed] [x,y ...]`

use anyhow::{bail, Context, Result};
use glam::Vec2;
use path_generator::shared::bezier_geometry::polyline_length;
use path_generator::{PathCommand, PathHost, PathOptions};

fn main() -> Result<()> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Path-Generator v{} startet...", env!("CARGO_PKG_VERSION"));

    let options = PathOptions::load_from_file(&PathOptions::config_path());
    let mut host = PathHost::new(Vec2::ZERO, options);

    let mut close = false;
    for arg in std::env::args().skip(1) {
        if arg == "--closed" {
            close = true;
            continue;
        }
        let anchor = parse_point(&arg).with_context(|| format!("Ungültiger Anker: {}", arg))?;
        host.handle_command(PathCommand::AddSegment { anchor })?;
    }
    if close {
        host.handle_command(PathCommand::ToggleClosed)?;
    }

    let samples = host.sample()?;
    log::info!(
        "{} Segmente, {} Punkte → {} Samples, Länge ≈ {:.2}",
        host.path().segment_count(),
        host.path().point_count(),
        samples.len(),
        polyline_length(&samples)
    );
    for p in samples {
        println!("{:.4} {:.4}", p.x, p.y);
    }
    Ok(())
}

/// Parst `x,y` in einen `Vec2`.
fn parse_point(text: &str) -> Result<Vec2> {
    let Some((x, y)) = text.split_once(',') else {
        bail!("Format `x,y` erwartet");
    };
    Ok(Vec2::new(x.trim().parse()?, y.trim().parse()?))
}

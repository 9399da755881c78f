//! Integrationstests für den Editier-Ablauf über die öffentliche API:
//! - Host erzeugt Standard-Pfad, Editor-Commands verändern ihn
//! - Punktanzahl-Invarianten über Öffnen/Schließen
//! - Resampling des bearbeiteten Pfads

use glam::Vec2;
use path_generator::{BezierPath, PathCommand, PathError, PathHost, PathOptions, PointRole};

fn assert_counts(path: &BezierPath) {
    let expected = if path.is_closed() {
        3 * path.segment_count()
    } else {
        3 * path.segment_count() + 1
    };
    assert_eq!(path.point_count(), expected);
}

/// Host am Ursprung mit drei angehängten Segmenten.
fn edited_host(auto_set: bool) -> PathHost {
    let options = PathOptions {
        auto_set,
        spacing: 0.5,
        ..PathOptions::default()
    };
    let mut host = PathHost::new(Vec2::ZERO, options);
    for anchor in [
        Vec2::new(4.0, 3.0),
        Vec2::new(8.0, -1.0),
        Vec2::new(12.0, 2.0),
    ] {
        host.handle_command(PathCommand::AddSegment { anchor })
            .expect("AddSegment auf offenem Pfad");
        assert_counts(host.path());
    }
    host
}

// ─── Topologie ───────────────────────────────────────────────────────────────

#[test]
fn test_close_reopen_manual_restores_points() {
    let mut host = PathHost::new(Vec2::ZERO, PathOptions::default());
    host.handle_command(PathCommand::AddSegment {
        anchor: Vec2::new(3.0, 0.0),
    })
    .unwrap();
    let before = host.path().points().to_vec();
    assert_eq!(before.len(), 7);

    host.handle_command(PathCommand::ToggleClosed).unwrap();
    assert_eq!(host.path().point_count(), 9);
    assert_counts(host.path());

    host.handle_command(PathCommand::ToggleClosed).unwrap();
    assert_eq!(host.path().points(), before.as_slice());
}

#[test]
fn test_closed_path_rejects_add_segment_via_core_error() {
    let mut path = BezierPath::new(Vec2::ZERO, Vec2::new(5.0, 0.0));
    path.toggle_closed().unwrap();
    let err = path.add_segment(Vec2::ONE).unwrap_err();
    assert!(matches!(err, PathError::InvalidState(_)));
}

// ─── Editieren ───────────────────────────────────────────────────────────────

#[test]
fn test_manual_drag_of_every_anchor_moves_its_handles() {
    let mut host = edited_host(false);
    let count = host.path().point_count();

    for index in (0..count).step_by(3) {
        assert_eq!(host.path().point_role(index), Ok(PointRole::Anchor));
        let before = host.path().points().to_vec();
        let delta = Vec2::new(0.25, -0.75);
        host.handle_command(PathCommand::MovePoint {
            index,
            position: before[index] + delta,
        })
        .unwrap();

        let after = host.path().points();
        for handle in [index.checked_sub(1), Some(index + 1)].into_iter().flatten() {
            if handle < count {
                assert!(after[handle].abs_diff_eq(before[handle] + delta, 1e-4));
            }
        }
    }
}

#[test]
fn test_auto_mode_edit_session_stays_smooth() {
    let mut host = edited_host(true);
    host.handle_command(PathCommand::MovePoint {
        index: 6,
        position: Vec2::new(7.0, -4.0),
    })
    .unwrap();
    host.handle_command(PathCommand::ToggleClosed).unwrap();
    host.handle_command(PathCommand::MovePoint {
        index: 0,
        position: Vec2::new(-1.0, 1.0),
    })
    .unwrap();

    let path = host.path();
    let p = path.points();
    let len = p.len();
    for anchor in (0..len).step_by(3) {
        let a = p[(anchor + len - 1) % len] - p[anchor];
        let b = p[(anchor + 1) % len] - p[anchor];
        let cross = a.x * b.y - a.y * b.x;
        assert!(cross.abs() < 1e-3, "Anker {} nicht glatt", anchor);
    }
}

#[test]
fn test_auto_mode_ignores_handle_drag() {
    let mut host = edited_host(true);
    let before = host.path().clone();
    host.handle_command(PathCommand::MovePoint {
        index: 5,
        position: Vec2::new(50.0, 50.0),
    })
    .unwrap();
    assert_eq!(host.path(), &before);
}

#[test]
fn test_toggle_auto_set_off_keeps_handles() {
    let mut host = edited_host(true);
    let before = host.path().points().to_vec();
    host.handle_command(PathCommand::SetAutoSet { enabled: false })
        .unwrap();
    assert!(!host.path().auto_set());
    assert_eq!(host.path().points(), before.as_slice());
}

// ─── Resampling ─────────────────────────────────────────────────────────────

#[test]
fn test_sample_default_straight_path() {
    let path = BezierPath::new(Vec2::ZERO, Vec2::new(10.0, 0.0));
    let samples = path.sample_evenly_spaced(1.0, 1.0).unwrap();
    assert_eq!(samples[0], Vec2::ZERO);
    assert!((10..=12).contains(&samples.len()));
}

#[test]
fn test_host_sample_uses_options() {
    let host = edited_host(true);
    let samples = host.sample().unwrap();
    assert_eq!(samples[0], host.path()[0]);
    // Sehne ist nie länger als der aufsummierte Kurvenabstand
    for w in samples.windows(2) {
        let d = w[0].distance(w[1]);
        assert!(d <= 0.5 + 1e-3 && d > 0.45, "Abstand {}", d);
    }
}

#[test]
fn test_host_sample_reports_invalid_spacing() {
    let options = PathOptions {
        spacing: 0.0,
        ..PathOptions::default()
    };
    let host = PathHost::new(Vec2::ZERO, options);
    let err = host.sample().unwrap_err();
    assert!(err.downcast_ref::<PathError>().is_some());
}

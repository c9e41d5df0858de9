//! Chart rendering and PNG export.
//!
//! Text layout in plotters needs a system sans-serif font. Tests that draw
//! a chart check for one first and return early when none is installed.

use damped_oscillator::{
    evaluate, export_charts, render_svg, ChartView, Error, ExportConfig, OscillatorParameters,
};

/// Draw a tiny chart; false when the host has no usable font.
fn fonts_available() -> bool {
    let params = OscillatorParameters {
        samples: 8,
        ..Default::default()
    };
    let traj = evaluate(&params).unwrap();
    match render_svg(&traj, &params, ChartView::Zoom, (320, 240)) {
        Ok(_) => true,
        Err(Error::Render(reason)) => {
            eprintln!("skipping chart test, no usable system font: {reason}");
            false
        }
        Err(other) => panic!("unexpected render failure: {other}"),
    }
}

#[test]
fn test_export_writes_both_charts() {
    if !fonts_available() {
        return;
    }
    let dir = tempfile::tempdir().unwrap();
    let params = OscillatorParameters::default();
    let traj = evaluate(&params).unwrap();

    let config = ExportConfig {
        out_dir: dir.path().join("nested").join("plots"),
        width: 900,
        height: 600,
        ..Default::default()
    };

    let files = export_charts(&traj, &params, &config).unwrap();
    assert_eq!(files.full, config.out_dir.join("vibrations_full.png"));
    assert_eq!(files.zoom, config.out_dir.join("vibrations_zoom.png"));

    for path in [&files.full, &files.zoom] {
        let bytes = std::fs::read(path).unwrap();
        assert!(
            bytes.starts_with(b"\x89PNG\r\n\x1a\n"),
            "{} is not a PNG",
            path.display()
        );
    }
}

#[test]
fn test_export_into_file_path_fails_before_drawing() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("plots");
    std::fs::write(&blocker, b"not a directory").unwrap();

    let params = OscillatorParameters::default();
    let traj = evaluate(&params).unwrap();
    let config = ExportConfig {
        out_dir: blocker.join("charts"),
        ..Default::default()
    };

    match export_charts(&traj, &params, &config) {
        Err(Error::Io(_)) => {}
        other => panic!("expected an I/O error, got {other:?}"),
    }
    assert!(!config.full_path().exists());
}

#[test]
fn test_svg_contains_titles_and_legend() {
    if !fonts_available() {
        return;
    }
    let params = OscillatorParameters::default();
    let traj = evaluate(&params).unwrap();

    let full = render_svg(&traj, &params, ChartView::Full, (1200, 800)).unwrap();
    assert!(full.contains("<svg"));
    assert!(full.contains("Solutions of the equation of motion"));
    assert!(full.contains("Underdamped (ξ = 0.2)"));
    assert!(full.contains("Exponential envelope"));
    assert!(full.contains("Critically damped"));

    let zoom = render_svg(&traj, &params, ChartView::Zoom, (1200, 800)).unwrap();
    assert!(zoom.contains("Initial behaviour (zoom)"));
    // Callouts are drawn on the full view only
    assert!(full.matches("Overdamped").count() > zoom.matches("Overdamped").count());
}

#[test]
fn test_short_horizon_zoom() {
    if !fonts_available() {
        return;
    }
    let params = OscillatorParameters {
        t_max: 2.0,
        samples: 100,
        ..Default::default()
    };
    let traj = evaluate(&params).unwrap();
    let svg = render_svg(&traj, &params, ChartView::Zoom, (600, 400)).unwrap();
    assert!(svg.contains("Initial behaviour (zoom)"));
}

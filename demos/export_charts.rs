//! Render the full and zoomed charts for a stiff, lightly damped oscillator.
//!
//! Run with:
//!   cargo run --example export_charts -- [OUT_DIR]

use std::path::PathBuf;

use damped_oscillator::{evaluate, export_charts, ExportConfig, OscillatorParameters};

fn main() {
    let out_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("plots"));

    let params = OscillatorParameters {
        omega0: 5.0,
        x0: 2.0,
        v0: -3.0,
        xi_under: 0.05,
        xi_over: 2.5,
        t_max: 12.0,
        ..Default::default()
    };
    let traj = evaluate(&params).unwrap();

    let config = ExportConfig {
        out_dir,
        width: 1800,
        height: 1200,
        ..Default::default()
    };

    match export_charts(&traj, &params, &config) {
        Ok(files) => {
            println!("Peak amplitude: {:.3} m", traj.peak_amplitude);
            println!("  {}", files.full.display());
            println!("  {}", files.zoom.display());
        }
        Err(e) => eprintln!("Export failed: {}", e),
    }
}

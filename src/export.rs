//! PNG export of both chart variants.

use std::path::{Path, PathBuf};

use plotters::prelude::*;
use tracing::info;

use crate::config::ExportConfig;
use crate::error::{Error, Result};
use crate::evaluator::Trajectory;
use crate::params::OscillatorParameters;
use crate::render::{draw_chart, ChartView};

/// Paths written by [`export_charts`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedCharts {
    /// Full-horizon chart
    pub full: PathBuf,
    /// Zoomed chart
    pub zoom: PathBuf,
}

/// Render one chart variant to a PNG file of `size` pixels.
///
/// The bitmap is flushed by `present` before the backend is dropped, so a
/// successful return means the file is complete on disk.
pub fn render_png(
    path: &Path,
    trajectory: &Trajectory,
    params: &OscillatorParameters,
    view: ChartView,
    size: (u32, u32),
) -> Result<()> {
    let root = BitMapBackend::new(path, size).into_drawing_area();
    draw_chart(&root, trajectory, params, view)?;
    root.present().map_err(|e| Error::Render(e.to_string()))?;
    Ok(())
}

/// Write the full and zoomed charts into `config.out_dir`.
pub fn export_charts(
    trajectory: &Trajectory,
    params: &OscillatorParameters,
    config: &ExportConfig,
) -> Result<ExportedCharts> {
    std::fs::create_dir_all(&config.out_dir)?;

    let size = (config.width, config.height);
    let full = config.full_path();
    let zoom = config.zoom_path();

    render_png(&full, trajectory, params, ChartView::Full, size)?;
    render_png(&zoom, trajectory, params, ChartView::Zoom, size)?;

    info!(
        full = %full.display(),
        zoom = %zoom.display(),
        width = config.width,
        height = config.height,
        "charts saved"
    );

    Ok(ExportedCharts { full, zoom })
}

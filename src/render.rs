//! Chart Rendering
//!
//! Draws a [`Trajectory`] as one of two chart variants with `plotters`:
//!
//! - [`ChartView::Full`]: the whole horizon [0, t_max], with one callout per
//!   regime pointing at its curve.
//! - [`ChartView::Zoom`]: the initial behaviour, t ∈ [0, min(3, t_max)].
//!
//! Both show the four displacement curves, the dashed underdamped envelope,
//! a zero reference line and a legend. The y axis is symmetric around zero
//! and scaled from the peak amplitude with a 10% margin.
//!
//! Drawing is generic over the plotters [`DrawingBackend`], so the same code
//! produces PNG files ([`BitMapBackend`]) and in-memory SVG
//! ([`render_svg`]). Layout decisions (axis limits, callout placement,
//! arrowheads) are plain functions that can be checked without a backend.

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::series::DashedLineSeries;

use crate::error::{Error, Result};
use crate::evaluator::Trajectory;
use crate::params::OscillatorParameters;
use crate::regime::Regime;

/// Upper time bound of the zoomed view [s]
pub const ZOOM_HORIZON: f64 = 3.0;

/// Relative margin added above and below the peak amplitude
pub const Y_MARGIN: f64 = 0.1;

const FONT: &str = "sans-serif";

/// Reference height the style sizes below were chosen for [px]
const REFERENCE_HEIGHT: f64 = 800.0;

/// Which portion of the trajectory a chart shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartView {
    /// Whole horizon, with annotations
    Full,
    /// Initial behaviour only
    Zoom,
}

impl ChartView {
    /// Chart title
    pub fn title(self) -> &'static str {
        match self {
            ChartView::Full => "Solutions of the equation of motion",
            ChartView::Zoom => "Initial behaviour (zoom)",
        }
    }

    /// Visible time interval for a horizon of `t_max`.
    pub fn time_window(self, t_max: f64) -> (f64, f64) {
        match self {
            ChartView::Full => (0.0, t_max),
            ChartView::Zoom => (0.0, ZOOM_HORIZON.min(t_max)),
        }
    }
}

/// Symmetric y limits ±(A + 0.1·A). A zero or non-finite peak maps to A = 1.
pub fn y_limits(peak_amplitude: f64) -> (f64, f64) {
    let a = if peak_amplitude.is_finite() && peak_amplitude > 0.0 {
        peak_amplitude
    } else {
        1.0
    };
    let half = a * (1.0 + Y_MARGIN);
    (-half, half)
}

/// A labelled callout pointing at one regime's curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Annotation {
    /// Curve being annotated
    pub regime: Regime,
    /// Point on the curve the connector ends at
    pub anchor: (f64, f64),
    /// Top-left corner of the label box
    pub label_at: (f64, f64),
}

/// (sample index, x fraction of t_max, y fraction of 2A) per regime
const CALLOUTS: [(Regime, usize, f64, f64); 4] = [
    (Regime::Undamped, 200, 0.4, 0.7),
    (Regime::Underdamped, 300, 0.5, 0.5),
    (Regime::CriticallyDamped, 150, 0.3, 0.2),
    (Regime::Overdamped, 250, 0.6, 0.3),
];

/// Callout placement for the full view.
///
/// Anchors sit on grid samples (clamped to the last sample for short
/// grids). Labels are spread across the upper half of the chart and kept
/// inside the visible y range.
pub fn annotations(trajectory: &Trajectory, t_max: f64) -> Vec<Annotation> {
    if trajectory.is_empty() {
        return Vec::new();
    }
    let last = trajectory.len() - 1;
    let (_, y_top) = y_limits(trajectory.peak_amplitude);
    let y_range = 2.0 * y_top / (1.0 + Y_MARGIN);

    CALLOUTS
        .iter()
        .map(|&(regime, index, fx, fy)| {
            let i = index.min(last);
            let anchor = (trajectory.time[i], trajectory.displacement(regime)[i]);
            let label_y = (fy * y_range).min(0.95 * y_top);
            Annotation {
                regime,
                anchor,
                label_at: (fx * t_max, label_y),
            }
        })
        .collect()
}

/// Triangle of an arrowhead at `tip`, pointing away from `from`.
///
/// `px_per_unit` converts data units to pixels on each axis so the head
/// keeps its shape on charts with very different x and y scales. The head
/// is `size` pixels long and `size` pixels wide; the result is in data
/// coordinates.
pub fn arrow_head(
    from: (f64, f64),
    tip: (f64, f64),
    px_per_unit: (f64, f64),
    size: f64,
) -> [(f64, f64); 3] {
    let (sx, sy) = px_per_unit;
    let dx = (tip.0 - from.0) * sx;
    let dy = (tip.1 - from.1) * sy;
    let len = dx.hypot(dy);
    if len < f64::EPSILON || sx <= 0.0 || sy <= 0.0 {
        return [tip; 3];
    }
    let (ux, uy) = (dx / len, dy / len);
    let back = (-ux * size, -uy * size);
    let side = (-uy * size * 0.5, ux * size * 0.5);
    let to_data = |px: f64, py: f64| (tip.0 + px / sx, tip.1 + py / sy);
    [
        tip,
        to_data(back.0 + side.0, back.1 + side.1),
        to_data(back.0 - side.0, back.1 - side.1),
    ]
}

fn line_color(regime: Regime) -> RGBColor {
    match regime {
        Regime::Undamped => RGBColor(0, 128, 0),
        Regime::Underdamped => RGBColor(191, 0, 191),
        Regime::CriticallyDamped => RGBColor(0, 0, 255),
        Regime::Overdamped => RGBColor(255, 0, 0),
    }
}

fn arrow_color(regime: Regime) -> RGBColor {
    match regime {
        Regime::Underdamped => RGBColor(128, 0, 128),
        other => line_color(other),
    }
}

fn label_fill(regime: Regime) -> RGBColor {
    match regime {
        Regime::Undamped => RGBColor(144, 238, 144),
        Regime::Underdamped => RGBColor(230, 230, 250),
        Regime::CriticallyDamped => RGBColor(173, 216, 230),
        Regime::Overdamped => RGBColor(255, 228, 225),
    }
}

/// Legend entry for a regime, e.g. `Underdamped (ξ = 0.2)`.
pub fn legend_label(regime: Regime, params: &OscillatorParameters) -> String {
    let xi = match regime {
        Regime::Undamped => 0.0,
        Regime::Underdamped => params.xi_under,
        Regime::CriticallyDamped => 1.0,
        Regime::Overdamped => params.xi_over,
    };
    format!("{} (ξ = {})", regime.name(), xi)
}

fn render_err<E: std::fmt::Display>(e: E) -> Error {
    Error::Render(e.to_string())
}

fn px(scale: f64, size: f64) -> u32 {
    (size * scale).round().max(1.0) as u32
}

/// Draw one chart variant onto `area`.
pub fn draw_chart<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    trajectory: &Trajectory,
    params: &OscillatorParameters,
    view: ChartView,
) -> Result<()> {
    let (_, height) = area.dim_in_pixel();
    let scale = (f64::from(height) / REFERENCE_HEIGHT).max(0.25);

    let (t0, t1) = view.time_window(params.t_max);
    let (y0, y1) = y_limits(trajectory.peak_amplitude);

    area.fill(&WHITE).map_err(render_err)?;

    let mut chart = ChartBuilder::on(area)
        .caption(view.title(), (FONT, 28.0 * scale))
        .margin(px(scale, 15.0))
        .x_label_area_size(px(scale, 50.0))
        .y_label_area_size(px(scale, 70.0))
        .build_cartesian_2d(t0..t1, y0..y1)
        .map_err(render_err)?;

    chart
        .configure_mesh()
        .x_desc("Time (s)")
        .y_desc("Displacement x(t) (m)")
        .axis_desc_style((FONT, 22.0 * scale))
        .label_style((FONT, 16.0 * scale))
        .bold_line_style(BLACK.mix(0.15))
        .light_line_style(BLACK.mix(0.05))
        .draw()
        .map_err(render_err)?;

    let n = match view {
        ChartView::Full => trajectory.len(),
        ChartView::Zoom => trajectory.samples_until(t1),
    };
    let series = |values: &[f64]| -> Vec<(f64, f64)> {
        trajectory.time[..n]
            .iter()
            .copied()
            .zip(values[..n].iter().copied())
            .collect()
    };

    for regime in Regime::ALL {
        let width = match regime {
            Regime::Undamped => 3.0,
            _ => 2.0,
        };
        let style = line_color(regime).stroke_width(px(scale, width));
        chart
            .draw_series(LineSeries::new(series(trajectory.displacement(regime)), style))
            .map_err(render_err)?
            .label(legend_label(regime, params))
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], style));
    }

    let envelope_style = line_color(Regime::Underdamped)
        .mix(0.7)
        .stroke_width(px(scale, 1.0));
    let dash = px(scale, 8.0);
    chart
        .draw_series(DashedLineSeries::new(
            series(&trajectory.envelope_upper),
            dash,
            dash,
            envelope_style,
        ))
        .map_err(render_err)?
        .label("Exponential envelope")
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], envelope_style));
    chart
        .draw_series(DashedLineSeries::new(
            series(&trajectory.envelope_lower),
            dash,
            dash,
            envelope_style,
        ))
        .map_err(render_err)?;

    chart
        .draw_series(std::iter::once(PathElement::new(
            vec![(t0, 0.0), (t1, 0.0)],
            BLACK.mix(0.3),
        )))
        .map_err(render_err)?;

    if view == ChartView::Full {
        let (w_px, h_px) = chart.plotting_area().dim_in_pixel();
        let px_per_unit = (
            f64::from(w_px) / (t1 - t0),
            f64::from(h_px) / (y1 - y0),
        );
        let font_size = 18.0 * scale;
        let pad = px(scale, 6.0) as i32;

        for note in annotations(trajectory, params.t_max) {
            let color = arrow_color(note.regime);
            let text = note.regime.name();
            let box_w = (text.chars().count() as f64 * font_size * 0.6) as i32 + 2 * pad;
            let box_h = font_size as i32 + 2 * pad;
            // Connector leaves from the middle of the label's lower edge
            let start = (
                note.label_at.0 + f64::from(box_w / 2) / px_per_unit.0,
                note.label_at.1 - f64::from(box_h) / px_per_unit.1,
            );

            chart
                .draw_series(std::iter::once(PathElement::new(
                    vec![start, note.anchor],
                    color.stroke_width(px(scale, 1.5)),
                )))
                .map_err(render_err)?;
            chart
                .draw_series(std::iter::once(Polygon::new(
                    arrow_head(start, note.anchor, px_per_unit, 12.0 * scale).to_vec(),
                    color.filled(),
                )))
                .map_err(render_err)?;
            chart
                .draw_series(std::iter::once(
                    EmptyElement::at(note.label_at)
                        + Rectangle::new(
                            [(0, 0), (box_w, box_h)],
                            label_fill(note.regime).mix(0.7).filled(),
                        )
                        + Text::new(
                            text,
                            (pad, pad),
                            (FONT, font_size).into_font().color(&BLACK),
                        ),
                ))
                .map_err(render_err)?;
        }
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .label_font((FONT, 18.0 * scale))
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(render_err)?;

    Ok(())
}

/// Render one chart variant to an SVG document held in memory.
pub fn render_svg(
    trajectory: &Trajectory,
    params: &OscillatorParameters,
    view: ChartView,
    size: (u32, u32),
) -> Result<String> {
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, size).into_drawing_area();
        draw_chart(&root, trajectory, params, view)?;
        root.present().map_err(render_err)?;
    }
    Ok(svg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluator::evaluate;

    #[test]
    fn test_time_windows() {
        assert_eq!(ChartView::Full.time_window(8.0), (0.0, 8.0));
        assert_eq!(ChartView::Zoom.time_window(8.0), (0.0, 3.0));
        assert_eq!(ChartView::Zoom.time_window(2.0), (0.0, 2.0));
    }

    #[test]
    fn test_y_limits() {
        let (lo, hi) = y_limits(2.0);
        assert!((hi - 2.2).abs() < 1e-12);
        assert_eq!(lo, -hi);
        assert_eq!(y_limits(0.0), (-1.1, 1.1));
        assert_eq!(y_limits(f64::NAN), (-1.1, 1.1));
    }

    #[test]
    fn test_annotations_anchor_on_samples() {
        let params = OscillatorParameters::default();
        let traj = evaluate(&params).unwrap();
        let notes = annotations(&traj, params.t_max);
        assert_eq!(notes.len(), 4);

        let under = notes
            .iter()
            .find(|n| n.regime == Regime::Underdamped)
            .unwrap();
        assert_eq!(under.anchor, (traj.time[300], traj.underdamped[300]));
        assert!((under.label_at.0 - 4.0).abs() < 1e-12);

        let (_, top) = y_limits(traj.peak_amplitude);
        for n in &notes {
            assert!(n.label_at.1 <= top, "{:?} label above the chart", n.regime);
            assert!(n.label_at.1 >= 0.0);
        }
    }

    #[test]
    fn test_annotations_on_short_grid() {
        let params = OscillatorParameters {
            samples: 50,
            ..Default::default()
        };
        let traj = evaluate(&params).unwrap();
        for n in annotations(&traj, params.t_max) {
            assert_eq!(n.anchor.0, params.t_max);
            assert_eq!(n.anchor.1, traj.displacement(n.regime)[49]);
        }
    }

    #[test]
    fn test_arrow_head_points_along_connector() {
        // Horizontal connector, one pixel per unit on both axes
        let head = arrow_head((0.0, 0.0), (10.0, 0.0), (1.0, 1.0), 4.0);
        assert_eq!(head[0], (10.0, 0.0));
        assert!((head[1].0 - 6.0).abs() < 1e-12);
        assert!((head[2].0 - 6.0).abs() < 1e-12);
        assert!((head[1].1 + head[2].1).abs() < 1e-12);
        assert!(((head[1].1 - head[2].1).abs() - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_arrow_head_respects_axis_scale() {
        // 100 px per unit horizontally: a 10 px head spans 0.1 units
        let head = arrow_head((0.0, 0.0), (1.0, 0.0), (100.0, 1.0), 10.0);
        assert!((head[1].0 - 0.9).abs() < 1e-12);
    }

    #[test]
    fn test_arrow_head_degenerate() {
        let head = arrow_head((1.0, 1.0), (1.0, 1.0), (1.0, 1.0), 5.0);
        assert_eq!(head, [(1.0, 1.0); 3]);
    }

    #[test]
    fn test_legend_labels() {
        let params = OscillatorParameters::default();
        assert_eq!(legend_label(Regime::Undamped, &params), "Undamped (ξ = 0)");
        assert_eq!(legend_label(Regime::Underdamped, &params), "Underdamped (ξ = 0.2)");
        assert_eq!(
            legend_label(Regime::CriticallyDamped, &params),
            "Critically damped (ξ = 1)"
        );
        assert_eq!(legend_label(Regime::Overdamped, &params), "Overdamped (ξ = 1.5)");
    }
}

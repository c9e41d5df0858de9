//! # Damped Oscillator: Closed-Form Damping Regimes
//!
//! Evaluates the free response of a damped harmonic oscillator
//!
//! ```text
//! x'' + 2ξω₀x' + ω₀²x = 0,   x(0) = x₀,   x'(0) = v₀
//! ```
//!
//! under four damping regimes side by side and renders the result as
//! charts.
//!
//! ## Features
//!
//! - Closed-form solutions for the undamped, underdamped, critically damped
//!   and overdamped cases; no numerical integration
//! - Exponential envelope of the underdamped response
//! - Peak amplitude for axis scaling and derived readouts (damped
//!   frequencies, period, critical decay rate)
//! - Validation of the damping ratios before any sample is computed
//! - Full and zoomed charts via `plotters`, exported as PNG
//!
//! ## Basic Usage
//!
//! ```rust
//! use damped_oscillator::{evaluate, OscillatorParameters};
//!
//! let params = OscillatorParameters {
//!     omega0: 2.0,
//!     x0: 1.0,
//!     v0: 0.5,
//!     xi_under: 0.2,
//!     xi_over: 1.5,
//!     t_max: 8.0,
//!     samples: 2000,
//! };
//!
//! let traj = evaluate(&params).unwrap();
//! assert_eq!(traj.len(), 2000);
//! assert_eq!(traj.underdamped[0], 1.0);
//! ```
//!
//! ## Invalid Ratios
//!
//! The underdamped and overdamped formulas divide by the damped frequency
//! ω_d, which vanishes at ξ = 1 and becomes imaginary on the wrong side of
//! it. Such inputs are rejected with [`Error::InvalidParameter`]:
//!
//! ```rust
//! use damped_oscillator::{evaluate, Error, OscillatorParameters};
//!
//! let params = OscillatorParameters { xi_over: 1.0, ..Default::default() };
//! assert!(matches!(
//!     evaluate(&params),
//!     Err(Error::InvalidParameter { name: "xi_over", .. })
//! ));
//! ```
//!
//! ## Interactive Use
//!
//! [`Session`] keeps the current parameters and trajectory. Each
//! [`Session::set`] clamps the new value into its input range, re-evaluates
//! and replaces the trajectory, mirroring a slider-driven interface:
//!
//! ```rust
//! use damped_oscillator::{Parameter, Session, OscillatorParameters};
//!
//! let mut session = Session::new(OscillatorParameters::default()).unwrap();
//! let applied = session.set(Parameter::XiUnder, 1.0).unwrap();
//! assert_eq!(applied, 0.99);
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod evaluator;
pub mod export;
pub mod metrics;
pub mod params;
pub mod regime;
pub mod render;
pub mod session;

pub use config::{Config, ExportConfig};
pub use error::{Error, Result};
pub use evaluator::{evaluate, peak_amplitude, time_grid, Trajectory};
pub use export::{export_charts, render_png, ExportedCharts};
pub use metrics::{DerivedMetrics, THEORY};
pub use params::{OscillatorParameters, ParamRange, Parameter, DEFAULT_SAMPLES};
pub use regime::{CriticallyDamped, Overdamped, Regime, Response, Undamped, Underdamped};
pub use render::{annotations, draw_chart, render_svg, Annotation, ChartView};
pub use session::Session;

//! Oscillator Evaluator
//!
//! Samples the four closed-form regimes on a shared time grid and derives
//! the underdamped envelope and the peak amplitude used for axis scaling.
//!
//! [`evaluate`] is pure: the same parameters always produce the same
//! [`Trajectory`], and nothing is cached between calls. Every parameter
//! change is expected to re-run it in full; the cost is O(N) per regime.

use tracing::debug;

use crate::error::{Error, Result};
use crate::params::OscillatorParameters;
use crate::regime::{CriticallyDamped, Overdamped, Regime, Response, Undamped, Underdamped};

/// Sampled displacement of all four regimes over one time grid.
///
/// Every sequence has the same length as [`Trajectory::time`].
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    /// Evenly spaced samples over [0, t_max]
    pub time: Vec<f64>,
    /// ξ = 0
    pub undamped: Vec<f64>,
    /// 0 < ξ_u < 1
    pub underdamped: Vec<f64>,
    /// ξ = 1
    pub critical: Vec<f64>,
    /// ξ_o > 1
    pub overdamped: Vec<f64>,
    /// +A(t), upper envelope of the underdamped response
    pub envelope_upper: Vec<f64>,
    /// −A(t), lower envelope of the underdamped response
    pub envelope_lower: Vec<f64>,
    /// max |x| over the four displacement sequences
    pub peak_amplitude: f64,
}

impl Trajectory {
    /// Number of grid samples
    pub fn len(&self) -> usize {
        self.time.len()
    }

    /// True when the grid holds no samples
    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    /// Displacement sequence of one regime
    pub fn displacement(&self, regime: Regime) -> &[f64] {
        match regime {
            Regime::Undamped => &self.undamped,
            Regime::Underdamped => &self.underdamped,
            Regime::CriticallyDamped => &self.critical,
            Regime::Overdamped => &self.overdamped,
        }
    }

    /// Number of leading samples with t ≤ `t_end`.
    ///
    /// One extra sample past `t_end` is included when available so that a
    /// clipped curve reaches the edge of the window.
    pub fn samples_until(&self, t_end: f64) -> usize {
        let inside = self.time.partition_point(|&t| t <= t_end);
        (inside + 1).min(self.len())
    }
}

/// N evenly spaced points over [0, t_max], both ends included.
pub fn time_grid(t_max: f64, samples: usize) -> Vec<f64> {
    match samples {
        0 => Vec::new(),
        1 => vec![0.0],
        n => {
            let last = (n - 1) as f64;
            (0..n).map(|i| t_max * (i as f64 / last)).collect()
        }
    }
}

/// Largest absolute value over a set of sequences (0 for empty input).
pub fn peak_amplitude<'a, I>(sequences: I) -> f64
where
    I: IntoIterator<Item = &'a [f64]>,
{
    sequences
        .into_iter()
        .flat_map(|s| s.iter())
        .fold(0.0_f64, |acc, x| acc.max(x.abs()))
}

fn sample<R: Response>(response: &R, time: &[f64]) -> Vec<f64> {
    time.iter().map(|&t| response.displacement(t)).collect()
}

fn ensure_finite(sequence: &'static str, time: &[f64], values: &[f64]) -> Result<()> {
    match values.iter().position(|x| !x.is_finite()) {
        Some(i) => Err(Error::NonFinite {
            sequence,
            time: time[i],
        }),
        None => Ok(()),
    }
}

/// Evaluate all four regimes for `params`.
///
/// Parameters are validated first; invalid damping ratios, a non-positive
/// natural frequency or horizon, non-finite inputs and grids shorter than
/// two samples are rejected with [`Error::InvalidParameter`](crate::Error)
/// before any sample is computed.
///
/// Inputs that are valid but extreme (a horizon near `f64::MAX`, a natural
/// frequency in the subnormal range) can still overflow a closed form.
/// Every sequence is checked after sampling and the first non-finite one is
/// reported as [`Error::NonFinite`](crate::Error), so a returned
/// [`Trajectory`] never holds NaN or infinity.
pub fn evaluate(params: &OscillatorParameters) -> Result<Trajectory> {
    params.validate()?;

    let OscillatorParameters { omega0, x0, v0, .. } = *params;

    let time = time_grid(params.t_max, params.samples);

    let undamped = sample(&Undamped::new(omega0, x0, v0)?, &time);

    let under = Underdamped::new(omega0, params.xi_under, x0, v0)?;
    let underdamped = sample(&under, &time);
    let envelope_upper: Vec<f64> = time.iter().map(|&t| under.envelope(t)).collect();
    let envelope_lower = envelope_upper.iter().map(|a| -a).collect();

    let critical = sample(&CriticallyDamped::new(omega0, x0, v0)?, &time);
    let overdamped = sample(&Overdamped::new(omega0, params.xi_over, x0, v0)?, &time);

    for (sequence, values) in [
        ("undamped", &undamped),
        ("underdamped", &underdamped),
        ("critical", &critical),
        ("overdamped", &overdamped),
        ("envelope", &envelope_upper),
    ] {
        ensure_finite(sequence, &time, values)?;
    }

    let peak_amplitude = peak_amplitude([
        undamped.as_slice(),
        underdamped.as_slice(),
        critical.as_slice(),
        overdamped.as_slice(),
    ]);

    debug!(
        samples = time.len(),
        t_max = params.t_max,
        peak_amplitude,
        "evaluated damping regimes"
    );

    Ok(Trajectory {
        time,
        undamped,
        underdamped,
        critical,
        overdamped,
        envelope_upper,
        envelope_lower,
        peak_amplitude,
    })
}

//! Derived metrics and the theory readout shown next to the charts.

use std::fmt;

use crate::evaluator::Trajectory;
use crate::params::OscillatorParameters;

/// Scalar readouts derived from one evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedMetrics {
    /// max |x| over the four regimes [m]
    pub peak_amplitude: f64,
    /// ω₀ [rad/s]
    pub natural_frequency: f64,
    /// ω_d of the underdamped case [rad/s]
    pub underdamped_frequency: f64,
    /// 2π/ω_d of the underdamped case [s]
    pub underdamped_period: f64,
    /// ω₀√(ξ_o² − 1) of the overdamped case [rad/s]
    pub overdamped_rate: f64,
    /// Decay rate of the critically damped case, equal to ω₀ [1/s]
    pub critical_decay_rate: f64,
}

impl DerivedMetrics {
    /// Compute the readouts for `params` and the trajectory evaluated from them.
    pub fn new(params: &OscillatorParameters, trajectory: &Trajectory) -> Self {
        let underdamped_frequency = params.underdamped_frequency();
        Self {
            peak_amplitude: trajectory.peak_amplitude,
            natural_frequency: params.omega0,
            underdamped_frequency,
            underdamped_period: 2.0 * std::f64::consts::PI / underdamped_frequency,
            overdamped_rate: params.overdamped_rate(),
            critical_decay_rate: params.omega0,
        }
    }
}

impl fmt::Display for DerivedMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  Peak amplitude:        {:.3} m", self.peak_amplitude)?;
        writeln!(f, "  Natural frequency:     {:.2} rad/s", self.natural_frequency)?;
        writeln!(f, "  Underdamped period:    {:.3} s", self.underdamped_period)?;
        writeln!(f, "  ω_d underdamped:       {:.3} rad/s", self.underdamped_frequency)?;
        writeln!(f, "  ω_d overdamped:        {:.3} rad/s", self.overdamped_rate)?;
        write!(f, "  Critical decay rate:   {:.2}", self.critical_decay_rate)
    }
}

/// Closed-form solutions in plain text.
pub const THEORY: &str = "\
Solutions of x'' + 2ξω₀x' + ω₀²x = 0 with x(0) = x₀, x'(0) = v₀

Undamped (ξ = 0):
  x(t) = x₀·cos(ω₀t) + (v₀/ω₀)·sin(ω₀t)

Underdamped (0 < ξ < 1):
  x(t) = e^(−ξω₀t)·[x₀·cos(ω_d t) + (v₀ + x₀ξω₀)/ω_d·sin(ω_d t)]
  with ω_d = ω₀√(1 − ξ²)

Critically damped (ξ = 1):
  x(t) = e^(−ω₀t)·[x₀(1 + ω₀t) + v₀t]

Overdamped (ξ > 1):
  x(t) = e^(−ξω₀t)·[x₀·cosh(ω_d t) + (v₀ + x₀ξω₀)/ω_d·sinh(ω_d t)]
  with ω_d = ω₀√(ξ² − 1)
";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluator::evaluate;

    #[test]
    fn test_default_metrics() {
        let params = OscillatorParameters::default();
        let traj = evaluate(&params).unwrap();
        let m = DerivedMetrics::new(&params, &traj);

        assert_eq!(m.natural_frequency, 2.0);
        assert_eq!(m.critical_decay_rate, 2.0);
        assert!((m.underdamped_frequency - 1.9596).abs() < 1e-4);
        assert!((m.overdamped_rate - 2.2361).abs() < 1e-4);
        assert!((m.underdamped_period - 3.2064).abs() < 1e-4);
        assert_eq!(m.peak_amplitude, traj.peak_amplitude);
    }

    #[test]
    fn test_display_precision() {
        let params = OscillatorParameters::default();
        let traj = evaluate(&params).unwrap();
        let text = DerivedMetrics::new(&params, &traj).to_string();

        assert!(text.contains("1.960 rad/s"), "{text}");
        assert!(text.contains("2.236 rad/s"), "{text}");
        assert!(text.contains("3.206 s"), "{text}");
        assert!(text.contains("2.00 rad/s"), "{text}");
    }

    #[test]
    fn test_theory_lists_all_regimes() {
        for name in ["Undamped", "Underdamped", "Critically damped", "Overdamped"] {
            assert!(THEORY.contains(name));
        }
    }
}

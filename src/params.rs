//! Oscillator Parameters
//!
//! Physical inputs for one evaluation together with the ranges and step
//! sizes of the interactive input surface.
//!
//! The closed-form solutions are only defined on part of the parameter
//! space: the underdamped ratio must lie strictly inside (0, 1), the
//! overdamped ratio strictly above 1, and the natural frequency must be
//! positive. [`OscillatorParameters::validate`] enforces that domain.
//! [`Parameter::clamp`] enforces the narrower slider ranges that the CLI and
//! the interactive session accept.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default grid resolution
pub const DEFAULT_SAMPLES: usize = 2000;

/// Inputs for one evaluation of the four damping regimes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OscillatorParameters {
    /// Natural angular frequency ω₀ [rad/s]
    pub omega0: f64,
    /// Initial displacement x₀ [m]
    pub x0: f64,
    /// Initial velocity v₀ [m/s]
    pub v0: f64,
    /// Damping ratio of the underdamped case, 0 < ξ < 1
    pub xi_under: f64,
    /// Damping ratio of the overdamped case, ξ > 1
    pub xi_over: f64,
    /// Time horizon [s]
    pub t_max: f64,
    /// Number of grid samples over [0, t_max]
    pub samples: usize,
}

impl Default for OscillatorParameters {
    fn default() -> Self {
        Self {
            omega0: 2.0,
            x0: 1.0,
            v0: 0.5,
            xi_under: 0.2,
            xi_over: 1.5,
            t_max: 8.0,
            samples: DEFAULT_SAMPLES,
        }
    }
}

impl OscillatorParameters {
    /// Check that every closed form is defined for these inputs.
    ///
    /// Rejects non-finite values, ω₀ ≤ 0, ξ_u outside (0, 1), ξ_o ≤ 1,
    /// t_max ≤ 0 and grids with fewer than two samples.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("omega0", self.omega0),
            ("x0", self.x0),
            ("v0", self.v0),
            ("xi_under", self.xi_under),
            ("xi_over", self.xi_over),
            ("t_max", self.t_max),
        ] {
            if !value.is_finite() {
                return Err(Error::invalid(name, value, "must be finite"));
            }
        }
        if self.omega0 <= 0.0 {
            return Err(Error::invalid("omega0", self.omega0, "must be > 0"));
        }
        if self.xi_under <= 0.0 || self.xi_under >= 1.0 {
            return Err(Error::invalid(
                "xi_under",
                self.xi_under,
                "must lie strictly inside (0, 1)",
            ));
        }
        if self.xi_over <= 1.0 {
            return Err(Error::invalid("xi_over", self.xi_over, "must be > 1"));
        }
        if self.t_max <= 0.0 {
            return Err(Error::invalid("t_max", self.t_max, "must be > 0"));
        }
        if self.samples < 2 {
            return Err(Error::invalid(
                "samples",
                self.samples as f64,
                "at least 2 samples are required",
            ));
        }
        Ok(())
    }

    /// Current value of an adjustable parameter.
    pub fn get(&self, parameter: Parameter) -> f64 {
        match parameter {
            Parameter::Omega0 => self.omega0,
            Parameter::X0 => self.x0,
            Parameter::V0 => self.v0,
            Parameter::TMax => self.t_max,
            Parameter::XiUnder => self.xi_under,
            Parameter::XiOver => self.xi_over,
        }
    }

    /// Copy of `self` with one parameter replaced. No clamping or validation.
    pub fn with(mut self, parameter: Parameter, value: f64) -> Self {
        match parameter {
            Parameter::Omega0 => self.omega0 = value,
            Parameter::X0 => self.x0 = value,
            Parameter::V0 => self.v0 = value,
            Parameter::TMax => self.t_max = value,
            Parameter::XiUnder => self.xi_under = value,
            Parameter::XiOver => self.xi_over = value,
        }
        self
    }

    /// Damped frequency of the underdamped case: ω₀·√(1 − ξ_u²)
    pub fn underdamped_frequency(&self) -> f64 {
        self.omega0 * (1.0 - self.xi_under * self.xi_under).sqrt()
    }

    /// Hyperbolic rate of the overdamped case: ω₀·√(ξ_o² − 1)
    pub fn overdamped_rate(&self) -> f64 {
        self.omega0 * (self.xi_over * self.xi_over - 1.0).sqrt()
    }
}

/// User-adjustable parameters, in input-surface order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Parameter {
    /// Natural frequency ω₀
    Omega0,
    /// Initial displacement x₀
    X0,
    /// Initial velocity v₀
    V0,
    /// Time horizon
    TMax,
    /// Underdamped ratio
    XiUnder,
    /// Overdamped ratio
    XiOver,
}

/// Closed interval and step of one input control.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamRange {
    /// Lowest accepted value
    pub min: f64,
    /// Highest accepted value
    pub max: f64,
    /// Step between selectable values, counted from `min`
    pub step: f64,
}

impl ParamRange {
    /// Whether `value` lies inside `[min, max]`
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

impl Parameter {
    /// All parameters, in input-surface order.
    pub const ALL: [Parameter; 6] = [
        Parameter::Omega0,
        Parameter::X0,
        Parameter::V0,
        Parameter::TMax,
        Parameter::XiUnder,
        Parameter::XiOver,
    ];

    /// Key used by the CLI, the config file and the interactive session.
    pub fn key(self) -> &'static str {
        match self {
            Parameter::Omega0 => "omega0",
            Parameter::X0 => "x0",
            Parameter::V0 => "v0",
            Parameter::TMax => "t_max",
            Parameter::XiUnder => "xi_under",
            Parameter::XiOver => "xi_over",
        }
    }

    /// Human-readable label with unit.
    pub fn label(self) -> &'static str {
        match self {
            Parameter::Omega0 => "Natural frequency ω₀ (rad/s)",
            Parameter::X0 => "Initial displacement x₀ (m)",
            Parameter::V0 => "Initial velocity v₀ (m/s)",
            Parameter::TMax => "Maximum time (s)",
            Parameter::XiUnder => "Underdamped ratio ξ",
            Parameter::XiOver => "Overdamped ratio ξ",
        }
    }

    /// Accepted interval and step size.
    pub fn range(self) -> ParamRange {
        let (min, max, step) = match self {
            Parameter::Omega0 => (0.1, 10.0, 0.1),
            Parameter::X0 => (0.1, 10.0, 0.1),
            Parameter::V0 => (-5.0, 5.0, 0.1),
            Parameter::TMax => (2.0, 20.0, 1.0),
            Parameter::XiUnder => (0.01, 0.99, 0.01),
            Parameter::XiOver => (1.01, 3.0, 0.1),
        };
        ParamRange { min, max, step }
    }

    /// Snap `value` to the nearest multiple of the step, then clamp it into
    /// the range.
    ///
    /// Steps are counted from zero, not from the range minimum: ξ_o = 1.5
    /// stays 1.5 and 1.04 clamps up to 1.01. Returns `None` for non-finite
    /// input.
    pub fn clamp(self, value: f64) -> Option<f64> {
        if !value.is_finite() {
            return None;
        }
        let r = self.range();
        let snapped = (value / r.step).round() * r.step;
        // Strip accumulated binary noise (0.1 * 3 = 0.30000000000000004)
        let snapped = (snapped * 1e9).round() / 1e9;
        Some(snapped.clamp(r.min, r.max))
    }

    /// Look a parameter up by its [`key`](Self::key).
    ///
    /// A few short aliases are accepted for interactive use.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "omega0" | "w0" | "omega" => Some(Parameter::Omega0),
            "x0" => Some(Parameter::X0),
            "v0" => Some(Parameter::V0),
            "t_max" | "tmax" => Some(Parameter::TMax),
            "xi_under" | "xi_u" => Some(Parameter::XiUnder),
            "xi_over" | "xi_o" => Some(Parameter::XiOver),
            _ => None,
        }
    }
}

impl std::fmt::Display for Parameter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

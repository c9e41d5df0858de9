//! Interactive session state.
//!
//! Holds the current parameters and the trajectory derived from them.
//! Every change flows one way: clamp the input, rebuild the parameters,
//! re-evaluate, then publish. A change that fails evaluation leaves the
//! previous state in place.

use tracing::debug;

use crate::error::{Error, Result};
use crate::evaluator::{evaluate, Trajectory};
use crate::metrics::DerivedMetrics;
use crate::params::{OscillatorParameters, Parameter};

/// Current parameters plus the trajectory evaluated from them.
#[derive(Debug, Clone)]
pub struct Session {
    params: OscillatorParameters,
    trajectory: Trajectory,
}

impl Session {
    /// Start a session from an initial parameter set.
    pub fn new(params: OscillatorParameters) -> Result<Self> {
        let trajectory = evaluate(&params)?;
        Ok(Self { params, trajectory })
    }

    /// Current parameters
    pub fn parameters(&self) -> &OscillatorParameters {
        &self.params
    }

    /// Trajectory for the current parameters
    pub fn trajectory(&self) -> &Trajectory {
        &self.trajectory
    }

    /// Derived readouts for the current state
    pub fn metrics(&self) -> DerivedMetrics {
        DerivedMetrics::new(&self.params, &self.trajectory)
    }

    /// Change one parameter and recompute.
    ///
    /// The value is clamped into the parameter's range and snapped to its
    /// step before evaluation. Returns the value actually applied.
    pub fn set(&mut self, parameter: Parameter, value: f64) -> Result<f64> {
        let applied = parameter
            .clamp(value)
            .ok_or_else(|| Error::invalid(parameter.key(), value, "must be finite"))?;

        let params = self.params.with(parameter, applied);
        let trajectory = evaluate(&params)?;

        debug!(%parameter, requested = value, applied, "parameter changed");
        self.params = params;
        self.trajectory = trajectory;
        Ok(applied)
    }
}

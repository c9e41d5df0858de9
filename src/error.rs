//! Error types shared by evaluation, rendering and export.

use thiserror::Error;

/// Root error type for the crate.
#[derive(Error, Debug)]
pub enum Error {
    /// A parameter lies outside the domain where the closed forms are defined.
    #[error("invalid parameter {name} = {value}: {reason}")]
    InvalidParameter {
        /// Parameter name as shown to the user
        name: &'static str,
        /// Offending value
        value: f64,
        /// Constraint that was violated
        reason: &'static str,
    },

    /// Parameters passed validation but a closed form overflowed while sampling.
    #[error("{sequence} is not finite at t = {time}; parameters are outside the representable range")]
    NonFinite {
        /// Sequence that overflowed
        sequence: &'static str,
        /// First grid time with a non-finite sample
        time: f64,
    },

    /// The plotting backend failed while drawing a chart.
    #[error("render error: {0}")]
    Render(String),

    /// Filesystem failure while exporting charts or reading configuration.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed configuration file.
    #[error("config error: {0}")]
    Config(String),
}

impl Error {
    pub(crate) fn invalid(name: &'static str, value: f64, reason: &'static str) -> Self {
        Error::InvalidParameter {
            name,
            value,
            reason,
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

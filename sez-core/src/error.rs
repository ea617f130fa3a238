use std::num::ParseFloatError;

use thiserror::Error;

/// Errors surfaced by an ECEF to SEZ conversion run
#[derive(Error, Debug)]
pub enum SezError {
    #[error("Usage error: expected 6 arguments, got {got}")]
    Usage { got: usize },

    #[error("Invalid argument {name} (position {position}): {token:?} is not a number")]
    Parse {
        position: usize,
        name: &'static str,
        token: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("Invalid argument {name} (position {position}): {value} is not finite")]
    NonFiniteArgument {
        position: usize,
        name: &'static str,
        value: f64,
    },

    #[error("Coordinate transform error: {0}")]
    Coordinate(#[from] CoordinateError),
}

impl SezError {
    /// Usage errors are recoverable: the caller prints usage and exits cleanly.
    pub fn is_usage(&self) -> bool {
        matches!(self, SezError::Usage { .. })
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum CoordinateError {
    #[error("Observer lies at the Earth's center; geodetic latitude is undefined")]
    AtEarthCenter,

    #[error("Observer lies on the polar axis (z = {z_km} km); geodetic longitude is undefined")]
    OnPolarAxis { z_km: f64 },

    #[error("Non-finite ECEF position: ({x}, {y}, {z})")]
    NonFinite { x: f64, y: f64, z: f64 },
}

pub type Result<T> = std::result::Result<T, SezError>;

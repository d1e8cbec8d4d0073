//! Moist-air property errors.

use ps_core::PsError;
use thiserror::Error;

/// Result type for air property operations.
pub type AirResult<T> = Result<T, AirError>;

/// Errors raised when validating air-state inputs.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AirError {
    /// Non-finite or otherwise non-physical input.
    #[error("Non-physical value for {what}: {value}")]
    NonPhysical { what: &'static str, value: f64 },

    /// Value outside the domain the relations are defined on.
    #[error("Value out of range for {what}: {value}")]
    OutOfRange { what: &'static str, value: f64 },
}

impl From<AirError> for PsError {
    fn from(err: AirError) -> Self {
        match err {
            AirError::NonPhysical { what, value } => PsError::NonFinite { what, value },
            AirError::OutOfRange { what, value } => PsError::OutOfRange { what, value },
        }
    }
}

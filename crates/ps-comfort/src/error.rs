//! Comfort envelope errors.

use ps_core::PsError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ComfortError {
    /// Lower bound above upper bound.
    #[error("Inverted comfort bounds for {what}: min {min} > max {max}")]
    InvertedBounds {
        what: &'static str,
        min: f64,
        max: f64,
    },

    /// Non-finite bound or parameter.
    #[error("Non-finite value for {what}")]
    NonFinite { what: &'static str },
}

impl From<ComfortError> for PsError {
    fn from(err: ComfortError) -> Self {
        match err {
            ComfortError::InvertedBounds { what, .. } => PsError::Invariant { what },
            ComfortError::NonFinite { what } => PsError::NonFinite {
                what,
                value: f64::NAN,
            },
        }
    }
}

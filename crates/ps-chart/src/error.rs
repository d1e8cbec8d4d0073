//! Chart errors.

use ps_core::PsError;
use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ChartError {
    /// Canvas dimensions must be positive and finite.
    #[error("Invalid canvas size: {width}x{height}")]
    InvalidCanvas { width: f64, height: f64 },
}

impl From<ChartError> for PsError {
    fn from(err: ChartError) -> Self {
        match err {
            ChartError::InvalidCanvas { .. } => PsError::InvalidArg {
                what: "canvas size",
            },
        }
    }
}

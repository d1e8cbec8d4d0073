//! Raw air-state input.

use crate::error::{AirError, AirResult};
use serde::{Deserialize, Serialize};

/// Measured dry-bulb temperature and relative humidity.
///
/// This is the only independent input; every other property is derived from
/// it via [`crate::MoistAirProperties`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AirState {
    temperature: f64,
    relative_humidity: f64,
}

impl AirState {
    /// Create a state without validation.
    ///
    /// Out-of-domain inputs are allowed and flow into the property relations
    /// as-is (possibly producing non-finite results).
    pub const fn new(temperature: f64, relative_humidity: f64) -> Self {
        Self {
            temperature,
            relative_humidity,
        }
    }

    /// Create a state, rejecting readings the relations cannot handle.
    ///
    /// Temperature must be finite; relative humidity must be finite and in
    /// `(0, 100]`.
    pub fn try_new(temperature: f64, relative_humidity: f64) -> AirResult<Self> {
        if !temperature.is_finite() {
            return Err(AirError::NonPhysical {
                what: "temperature",
                value: temperature,
            });
        }
        if !relative_humidity.is_finite() {
            return Err(AirError::NonPhysical {
                what: "relative humidity",
                value: relative_humidity,
            });
        }
        if relative_humidity <= 0.0 || relative_humidity > 100.0 {
            return Err(AirError::OutOfRange {
                what: "relative humidity",
                value: relative_humidity,
            });
        }
        Ok(Self::new(temperature, relative_humidity))
    }

    /// Dry-bulb temperature [°C].
    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    /// Relative humidity [%].
    pub fn relative_humidity(&self) -> f64 {
        self.relative_humidity
    }
}

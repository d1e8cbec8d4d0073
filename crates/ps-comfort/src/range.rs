//! Comfort envelope.

use crate::error::ComfortError;
use serde::{Deserialize, Serialize};

/// Rectangle in (temperature, relative humidity) space deemed comfortable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComfortRange {
    /// Lower temperature bound [°C].
    pub temp_min: f64,
    /// Upper temperature bound [°C].
    pub temp_max: f64,
    /// Lower relative humidity bound [%].
    pub rh_min: f64,
    /// Upper relative humidity bound [%].
    pub rh_max: f64,
}

impl Default for ComfortRange {
    fn default() -> Self {
        Self {
            temp_min: 20.0,
            temp_max: 26.0,
            rh_min: 40.0,
            rh_max: 60.0,
        }
    }
}

impl ComfortRange {
    pub fn new(temp_min: f64, temp_max: f64, rh_min: f64, rh_max: f64) -> Self {
        Self {
            temp_min,
            temp_max,
            rh_min,
            rh_max,
        }
    }

    /// Check bounds are finite and ordered.
    pub fn validate(&self) -> Result<(), ComfortError> {
        let bounds = [
            ("comfortRange.tempMin", self.temp_min),
            ("comfortRange.tempMax", self.temp_max),
            ("comfortRange.rhMin", self.rh_min),
            ("comfortRange.rhMax", self.rh_max),
        ];
        for (what, v) in bounds {
            if !v.is_finite() {
                return Err(ComfortError::NonFinite { what });
            }
        }
        if self.temp_min > self.temp_max {
            return Err(ComfortError::InvertedBounds {
                what: "temperature",
                min: self.temp_min,
                max: self.temp_max,
            });
        }
        if self.rh_min > self.rh_max {
            return Err(ComfortError::InvertedBounds {
                what: "relative humidity",
                min: self.rh_min,
                max: self.rh_max,
            });
        }
        Ok(())
    }

    /// Closed-interval membership on both axes.
    pub fn contains(&self, temperature: f64, relative_humidity: f64) -> bool {
        temperature >= self.temp_min
            && temperature <= self.temp_max
            && relative_humidity >= self.rh_min
            && relative_humidity <= self.rh_max
    }

    /// Centre of the rectangle as `(temperature, relative_humidity)`.
    pub fn center(&self) -> (f64, f64) {
        (
            (self.temp_min + self.temp_max) / 2.0,
            (self.rh_min + self.rh_max) / 2.0,
        )
    }

    /// Corners in drawing order: (Tmin,RHmin), (Tmax,RHmin), (Tmax,RHmax), (Tmin,RHmax).
    pub fn corners(&self) -> [(f64, f64); 4] {
        [
            (self.temp_min, self.rh_min),
            (self.temp_max, self.rh_min),
            (self.temp_max, self.rh_max),
            (self.temp_min, self.rh_max),
        ]
    }
}

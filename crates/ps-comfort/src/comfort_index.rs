//! Simplified Fanger-style comfort index (PMV-like).
//!
//! A heavily reduced form of the Fanger balance: radiant temperature equals
//! air temperature, and clothing/metabolic/air-velocity inputs are fixed by
//! default. Not ISO 7730. The result is clamped to `[-3, 3]`.

use serde::{Deserialize, Serialize};

/// Fixed occupant/environment parameters of the index.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComfortIndexParams {
    /// Clothing insulation [clo].
    pub clothing: f64,
    /// Metabolic rate [met].
    pub metabolic_rate: f64,
    /// Relative air velocity [m/s].
    pub air_velocity: f64,
}

impl Default for ComfortIndexParams {
    fn default() -> Self {
        Self {
            clothing: 0.7,
            metabolic_rate: 1.2,
            air_velocity: 0.1,
        }
    }
}

/// Comfort index with the default parameters.
pub fn comfort_index(t: f64, rh: f64) -> f64 {
    comfort_index_with(&ComfortIndexParams::default(), t, rh)
}

/// Comfort index with explicit parameters.
pub fn comfort_index_with(params: &ComfortIndexParams, t: f64, rh: f64) -> f64 {
    let ta = t;
    let tr = t;
    let met = params.metabolic_rate;
    let clo = params.clothing;
    let vel = params.air_velocity;

    // water vapour partial pressure, Fanger's fit
    let pa = (rh / 100.0) * 10.0 * (16.6536 - 4030.183 / (ta + 235.0)).exp();

    let mut pmv = 0.303 * (-0.036 * met).exp() + 0.028;
    pmv *= (met - 58.15)
        - 0.42 * (met - 50.0)
        - 0.0173 * met * (5.87 - pa)
        - 0.0014 * met * (34.0 - ta)
        - 3.96 * 10f64.powf(-8.0) * clo * ((tr + 273.0).powi(4) - (ta + 273.0).powi(4))
        - 0.072 * clo * (34.0 - ta)
        - 0.054 * (5.87 - pa);

    if vel > 0.1 {
        pmv -= 0.2223 * (1.0 - (-1.387 * vel).exp());
    }

    pmv.clamp(-3.0, 3.0)
}

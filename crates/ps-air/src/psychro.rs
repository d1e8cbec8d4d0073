//! Closed-form psychrometric relations.
//!
//! Temperatures in °C, relative humidity in percent (0–100], pressures in kPa.
//! Total pressure is fixed at standard atmosphere.

use ps_core::constants::{KELVIN_OFFSET, P_ATM_KPA};

/// Magnus/Tetens coefficient A (dimensionless).
pub const MAGNUS_A: f64 = 17.27;
/// Magnus/Tetens coefficient B [°C].
pub const MAGNUS_B: f64 = 237.3;
/// Tetens reference pressure [kPa].
pub const TETENS_P0_KPA: f64 = 0.61078;

/// Ratio of molar masses water/dry air.
pub const EPSILON: f64 = 0.622;
/// Specific heat of dry air [kJ/(kg·K)].
pub const CP_DRY_AIR: f64 = 1.006;
/// Specific heat of water vapour [kJ/(kg·K)].
pub const CP_VAPOR: f64 = 1.84;
/// Latent heat of vaporisation at 0 °C [kJ/kg].
pub const LATENT_HEAT: f64 = 2501.0;

/// Specific gas constant of dry air [J/(kg·K)].
pub const R_DRY_AIR: f64 = 287.058;
/// Specific gas constant of water vapour [J/(kg·K)].
pub const R_VAPOR: f64 = 461.5;

/// Saturation vapour pressure over water [kPa] (Tetens).
#[inline]
pub fn saturation_pressure(t: f64) -> f64 {
    TETENS_P0_KPA * ((MAGNUS_A * t) / (t + MAGNUS_B)).exp()
}

/// Partial pressure of water vapour [kPa].
#[inline]
pub fn vapor_pressure(t: f64, rh: f64) -> f64 {
    (rh / 100.0) * saturation_pressure(t)
}

/// Dew point temperature [°C] (Magnus inversion).
///
/// Non-finite for `rh <= 0`.
pub fn dew_point(t: f64, rh: f64) -> f64 {
    let alpha = (MAGNUS_A * t) / (MAGNUS_B + t) + (rh / 100.0).ln();
    (MAGNUS_B * alpha) / (MAGNUS_A - alpha)
}

/// Humidity ratio [kg water / kg dry air] for a given vapour pressure [kPa].
#[inline]
pub fn humidity_ratio_from_vapor_pressure(pv: f64) -> f64 {
    EPSILON * (pv / (P_ATM_KPA - pv))
}

/// Humidity ratio [kg water / kg dry air].
///
/// Diverges as the vapour pressure approaches atmospheric pressure.
pub fn humidity_ratio(t: f64, rh: f64) -> f64 {
    humidity_ratio_from_vapor_pressure(vapor_pressure(t, rh))
}

/// Specific enthalpy of moist air [kJ/kg dry air].
#[inline]
pub fn enthalpy(t: f64, w: f64) -> f64 {
    CP_DRY_AIR * t + w * (LATENT_HEAT + CP_VAPOR * t)
}

/// Water vapour density [g/m³].
pub fn absolute_humidity(t: f64, rh: f64) -> f64 {
    let pv_pa = vapor_pressure(t, rh) * 1000.0;
    let rho_kg_m3 = pv_pa / (R_VAPOR * (t + KELVIN_OFFSET));
    rho_kg_m3 * 1000.0
}

/// Wet-bulb temperature [°C] from Stull's empirical fit.
///
/// Fitted for RH in roughly 5–99 %. Inputs outside that band are not clamped.
pub fn wet_bulb_temperature(t: f64, rh: f64) -> f64 {
    t * (0.151977 * (rh + 8.313659).powf(0.5)).atan() + (t + rh).atan() - (rh - 1.676331).atan()
        + 0.00391838 * rh.powf(1.5) * (0.023101 * rh).atan()
        - 4.686035
}

/// Specific volume of moist air.
///
/// The gas constant is in J/(kg·K) while the pressures are in kPa, so the
/// result is not in m³/kg; the mixed-unit form is kept so values line up with
/// existing dashboards.
pub fn specific_volume(t: f64, rh: f64) -> f64 {
    let t_k = t + KELVIN_OFFSET;
    let pv = vapor_pressure(t, rh);
    let w = humidity_ratio(t, rh);
    (R_DRY_AIR * t_k) / (P_ATM_KPA - pv) * (1.0 + 1.608 * w)
}

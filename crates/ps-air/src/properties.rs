//! Derived moist-air properties.

use crate::psychro;
use crate::state::AirState;
use serde::{Deserialize, Serialize};

/// Every quantity derived from an [`AirState`].
///
/// All fields are pure functions of `(temperature, relative_humidity)`; build a
/// new value with [`MoistAirProperties::from_state`] whenever the state changes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MoistAirProperties {
    /// Saturation vapour pressure [kPa].
    pub saturation_pressure: f64,
    /// Vapour partial pressure [kPa].
    pub vapor_pressure: f64,
    /// Dew point [°C].
    pub dew_point: f64,
    /// Humidity ratio [kg/kg dry air].
    pub humidity_ratio: f64,
    /// Specific enthalpy [kJ/kg dry air].
    pub enthalpy: f64,
    /// Vapour density [g/m³].
    pub absolute_humidity: f64,
    /// Wet-bulb temperature [°C].
    pub wet_bulb_temperature: f64,
    /// Specific volume (mixed-unit form, see [`psychro::specific_volume`]).
    pub specific_volume: f64,
}

impl MoistAirProperties {
    pub fn from_state(state: &AirState) -> Self {
        let t = state.temperature();
        let rh = state.relative_humidity();

        let humidity_ratio = psychro::humidity_ratio(t, rh);
        Self {
            saturation_pressure: psychro::saturation_pressure(t),
            vapor_pressure: psychro::vapor_pressure(t, rh),
            dew_point: psychro::dew_point(t, rh),
            humidity_ratio,
            enthalpy: psychro::enthalpy(t, humidity_ratio),
            absolute_humidity: psychro::absolute_humidity(t, rh),
            wet_bulb_temperature: psychro::wet_bulb_temperature(t, rh),
            specific_volume: psychro::specific_volume(t, rh),
        }
    }

    /// True when every field is finite.
    pub fn is_finite(&self) -> bool {
        [
            self.saturation_pressure,
            self.vapor_pressure,
            self.dew_point,
            self.humidity_ratio,
            self.enthalpy,
            self.absolute_humidity,
            self.wet_bulb_temperature,
            self.specific_volume,
        ]
        .iter()
        .all(|v| v.is_finite())
    }
}

impl From<&AirState> for MoistAirProperties {
    fn from(state: &AirState) -> Self {
        Self::from_state(state)
    }
}

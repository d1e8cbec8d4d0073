//! Energy-saving target state.

use crate::range::ComfortRange;
use ps_air::AirState;
use serde::{Deserialize, Serialize};

/// Above this temperature the state is treated as summer.
pub const SUMMER_THRESHOLD_C: f64 = 23.0;

/// Offset from the humidity bound used when nudging an already comfortable state.
const HUMIDITY_NUDGE: f64 = 5.0;

/// Target state inside the comfort envelope.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IdealSetpoint {
    pub temperature: f64,
    pub relative_humidity: f64,
}

/// Clamp each axis into the envelope; when nothing had to move, bias humidity
/// toward the cheaper side for the season (drier in summer, moister in winter).
pub fn ideal_setpoint(state: &AirState, range: &ComfortRange) -> IdealSetpoint {
    let t = state.temperature();
    let rh = state.relative_humidity();

    let mut temperature = t;
    let mut relative_humidity = rh;

    if t < range.temp_min {
        temperature = range.temp_min;
    } else if t > range.temp_max {
        temperature = range.temp_max;
    }

    if rh < range.rh_min {
        relative_humidity = range.rh_min;
    } else if rh > range.rh_max {
        relative_humidity = range.rh_max;
    }

    if temperature == t && relative_humidity == rh {
        if t > SUMMER_THRESHOLD_C {
            temperature = t.min(range.temp_max);
            relative_humidity = range.rh_min.max(rh.min(range.rh_min + HUMIDITY_NUDGE));
        } else {
            temperature = t.max(range.temp_min);
            relative_humidity = range.rh_max.min(rh.max(range.rh_max - HUMIDITY_NUDGE));
        }
    }

    IdealSetpoint {
        temperature,
        relative_humidity,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setpoint(t: f64, rh: f64) -> IdealSetpoint {
        ideal_setpoint(&AirState::new(t, rh), &ComfortRange::default())
    }

    #[test]
    fn cold_dry_state_clamps_to_lower_bounds() {
        let s = setpoint(15.0, 30.0);
        assert_eq!(s.temperature, 20.0);
        assert_eq!(s.relative_humidity, 40.0);
    }

    #[test]
    fn hot_humid_state_clamps_to_upper_bounds() {
        let s = setpoint(30.0, 75.0);
        assert_eq!(s.temperature, 26.0);
        assert_eq!(s.relative_humidity, 60.0);
    }

    #[test]
    fn single_axis_clamp_skips_seasonal_bias() {
        let s = setpoint(22.0, 70.0);
        assert_eq!(s.temperature, 22.0);
        assert_eq!(s.relative_humidity, 60.0);
    }

    #[test]
    fn comfortable_summer_state_dries_toward_lower_bound() {
        let s = setpoint(24.0, 55.0);
        assert_eq!(s.temperature, 24.0);
        assert_eq!(s.relative_humidity, 45.0);
    }

    #[test]
    fn comfortable_winter_state_moistens_toward_upper_bound() {
        let s = setpoint(21.0, 45.0);
        assert_eq!(s.temperature, 21.0);
        assert_eq!(s.relative_humidity, 55.0);
    }

    #[test]
    fn already_biased_humidity_is_kept() {
        // winter, already above rhMax - 5
        assert_eq!(setpoint(21.0, 58.0).relative_humidity, 58.0);
        // summer, already below rhMin + 5
        assert_eq!(setpoint(24.0, 42.0).relative_humidity, 42.0);
    }
}

//! HVAC action classification and corrective power.
//!
//! Temperature and humidity are classified independently against the comfort
//! envelope. At most one action fires per axis, actions on the two axes
//! combine (e.g. heat and humidify).

use crate::range::ComfortRange;
use ps_air::AirState;
use ps_air::psychro::{CP_DRY_AIR, LATENT_HEAT, humidity_ratio};
use ps_core::units::{MassRate, Power, as_kgps, watts};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Default supply air mass flow [kg/s].
pub const DEFAULT_MASS_FLOW_KGPS: f64 = 0.5;

/// Corrective action on one axis of the comfort envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HvacAction {
    Heat,
    Cool,
    Humidify,
    Dehumidify,
}

impl fmt::Display for HvacAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Heat => write!(f, "heat"),
            Self::Cool => write!(f, "cool"),
            Self::Humidify => write!(f, "humidify"),
            Self::Dehumidify => write!(f, "dehumidify"),
        }
    }
}

/// Outcome of classifying one air state against the envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComfortResult {
    /// Temperature action first, humidity action second.
    pub actions: Vec<HvacAction>,
    pub heating_power: Power,
    pub cooling_power: Power,
    pub humidification_power: Power,
    pub dehumidification_power: Power,
    pub total_power: Power,
    pub in_comfort_zone: bool,
}

impl ComfortResult {
    pub fn has_action(&self, action: HvacAction) -> bool {
        self.actions.contains(&action)
    }

    /// Actions joined with " and ", empty when already comfortable.
    pub fn describe_actions(&self) -> String {
        self.actions
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" and ")
    }
}

/// Sensible power to bring `temperature` up to `target` [W].
///
/// Negative when `target < temperature`.
pub fn heating_power(temperature: f64, target: f64, mass_flow: MassRate) -> Power {
    watts(as_kgps(mass_flow) * CP_DRY_AIR * (target - temperature) * 1000.0)
}

/// Sensible power to bring `temperature` down to `target` [W], always non-negative.
pub fn cooling_power(temperature: f64, target: f64, mass_flow: MassRate) -> Power {
    let p = heating_power(temperature, target, mass_flow);
    watts(p.value.abs())
}

/// Latent power to move relative humidity from `rh` to `target_rh` at constant
/// temperature [W], always non-negative.
pub fn humidity_power(temperature: f64, rh: f64, target_rh: f64, mass_flow: MassRate) -> Power {
    let w_actual = humidity_ratio(temperature, rh);
    let w_target = humidity_ratio(temperature, target_rh);
    let delta_w = w_target - w_actual;
    watts((delta_w * as_kgps(mass_flow) * LATENT_HEAT * 1000.0).abs())
}

/// Classify `state` against `range` and size the corrective powers.
pub fn evaluate_comfort(
    state: &AirState,
    range: &ComfortRange,
    mass_flow: MassRate,
) -> ComfortResult {
    let t = state.temperature();
    let rh = state.relative_humidity();

    let mut actions = Vec::with_capacity(2);
    let mut heating = watts(0.0);
    let mut cooling = watts(0.0);
    let mut humidification = watts(0.0);
    let mut dehumidification = watts(0.0);

    if t < range.temp_min {
        actions.push(HvacAction::Heat);
        heating = heating_power(t, range.temp_min, mass_flow);
    } else if t > range.temp_max {
        actions.push(HvacAction::Cool);
        cooling = cooling_power(t, range.temp_max, mass_flow);
    }

    if rh < range.rh_min {
        actions.push(HvacAction::Humidify);
        humidification = humidity_power(t, rh, range.rh_min, mass_flow);
    } else if rh > range.rh_max {
        actions.push(HvacAction::Dehumidify);
        dehumidification = humidity_power(t, rh, range.rh_max, mass_flow);
    }

    let total = heating + cooling + humidification + dehumidification;

    ComfortResult {
        actions,
        heating_power: heating,
        cooling_power: cooling,
        humidification_power: humidification,
        dehumidification_power: dehumidification,
        total_power: total,
        in_comfort_zone: range.contains(t, rh),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ps_core::units::{as_watts, kgps};

    fn default_flow() -> MassRate {
        kgps(DEFAULT_MASS_FLOW_KGPS)
    }

    #[test]
    fn comfortable_state_needs_nothing() {
        let r = evaluate_comfort(
            &AirState::new(22.0, 50.0),
            &ComfortRange::default(),
            default_flow(),
        );
        assert!(r.in_comfort_zone);
        assert!(r.actions.is_empty());
        assert_eq!(as_watts(r.total_power), 0.0);
        assert_eq!(r.describe_actions(), "");
    }

    #[test]
    fn cold_state_heats() {
        let r = evaluate_comfort(
            &AirState::new(15.0, 50.0),
            &ComfortRange::default(),
            default_flow(),
        );
        assert_eq!(r.actions, vec![HvacAction::Heat]);
        assert!((as_watts(r.heating_power) - 2515.0).abs() < 1e-6);
        assert_eq!(as_watts(r.cooling_power), 0.0);
        assert!(!r.in_comfort_zone);
    }

    #[test]
    fn hot_state_cools_with_positive_power() {
        let r = evaluate_comfort(
            &AirState::new(30.0, 50.0),
            &ComfortRange::default(),
            default_flow(),
        );
        assert_eq!(r.actions, vec![HvacAction::Cool]);
        // 0.5 * 1.006 * 4 K * 1000
        assert!((as_watts(r.cooling_power) - 2012.0).abs() < 1e-6);
        assert_eq!(as_watts(r.heating_power), 0.0);
    }

    #[test]
    fn actions_combine_across_axes() {
        let r = evaluate_comfort(
            &AirState::new(15.0, 30.0),
            &ComfortRange::default(),
            default_flow(),
        );
        assert_eq!(r.actions, vec![HvacAction::Heat, HvacAction::Humidify]);
        assert_eq!(r.describe_actions(), "heat and humidify");
        let sum = as_watts(r.heating_power) + as_watts(r.humidification_power);
        assert!((as_watts(r.total_power) - sum).abs() < 1e-9);
    }

    #[test]
    fn humid_state_dehumidifies_toward_upper_bound() {
        let range = ComfortRange::default();
        let r = evaluate_comfort(&AirState::new(22.0, 80.0), &range, default_flow());
        assert!(r.has_action(HvacAction::Dehumidify));
        let expected = humidity_power(22.0, 80.0, range.rh_max, default_flow());
        assert_eq!(r.dehumidification_power, expected);
        assert!(as_watts(expected) > 0.0);
    }

    #[test]
    fn power_scales_with_mass_flow() {
        let p1 = heating_power(15.0, 20.0, kgps(0.5));
        let p2 = heating_power(15.0, 20.0, kgps(1.0));
        assert!((as_watts(p2) - 2.0 * as_watts(p1)).abs() < 1e-6);
    }

    #[test]
    fn heating_power_sign_follows_target() {
        assert!(as_watts(heating_power(25.0, 20.0, default_flow())) < 0.0);
        assert!(as_watts(cooling_power(25.0, 20.0, default_flow())) > 0.0);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use ps_core::units::{as_watts, kgps};

    proptest! {
        #[test]
        fn strictly_inside_is_comfortable(t in 20.01_f64..25.99, rh in 40.01_f64..59.99) {
            let r = evaluate_comfort(&AirState::new(t, rh), &ComfortRange::default(), kgps(0.5));
            prop_assert!(r.in_comfort_zone);
            prop_assert_eq!(as_watts(r.total_power), 0.0);
        }

        #[test]
        fn powers_are_non_negative(t in -10.0_f64..=50.0, rh in 1.0_f64..=100.0) {
            let r = evaluate_comfort(&AirState::new(t, rh), &ComfortRange::default(), kgps(0.5));
            prop_assert!(as_watts(r.heating_power) >= 0.0);
            prop_assert!(as_watts(r.cooling_power) >= 0.0);
            prop_assert!(as_watts(r.humidification_power) >= 0.0);
            prop_assert!(as_watts(r.dehumidification_power) >= 0.0);
            prop_assert!(r.actions.len() <= 2);
        }
    }
}

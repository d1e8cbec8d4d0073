//! End-to-end comfort scenarios over the default envelope.

use ps_air::AirState;
use ps_comfort::{
    ComfortRange, DEFAULT_MASS_FLOW_KGPS, HvacAction, MoldRiskLevel, comfort_index,
    evaluate_comfort, ideal_setpoint, mold_risk,
};
use ps_core::units::{as_watts, kgps};

#[test]
fn office_air_is_comfortable() {
    let state = AirState::try_new(22.0, 50.0).unwrap();
    let range = ComfortRange::new(20.0, 26.0, 40.0, 60.0);
    let result = evaluate_comfort(&state, &range, kgps(DEFAULT_MASS_FLOW_KGPS));

    assert!(result.in_comfort_zone);
    assert_eq!(as_watts(result.total_power), 0.0);
    assert!(result.actions.is_empty());
}

#[test]
fn cool_damp_room_needs_heating() {
    let state = AirState::try_new(15.0, 70.0).unwrap();
    let range = ComfortRange::default();
    let result = evaluate_comfort(&state, &range, kgps(DEFAULT_MASS_FLOW_KGPS));

    assert!(result.has_action(HvacAction::Heat));
    assert!(result.has_action(HvacAction::Dehumidify));
    assert!((as_watts(result.heating_power) - 2515.0).abs() < 1e-6);
    assert!(as_watts(result.total_power) > as_watts(result.heating_power));

    let target = ideal_setpoint(&state, &range);
    assert_eq!(target.temperature, 20.0);
    assert_eq!(target.relative_humidity, 60.0);

    // 15 °C band (2) + 70 % band (2); dew point ≈ 9.6 °C, no bonus
    assert_eq!(mold_risk(15.0, 70.0).score(), 4.0);
    assert_eq!(mold_risk(15.0, 70.0).level(), MoldRiskLevel::High);
}

#[test]
fn comfort_index_stays_in_band_across_domain() {
    for t in [-10.0, 0.0, 20.0, 35.0, 50.0] {
        for rh in [10.0, 50.0, 100.0] {
            let v = comfort_index(t, rh);
            assert!((-3.0..=3.0).contains(&v));
        }
    }
}

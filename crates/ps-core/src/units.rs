// ps-core/src/units.rs

use uom::si::f64::{MassRate as UomMassRate, Power as UomPower};

// Public canonical unit types (SI, f64)
pub type MassRate = UomMassRate;
pub type Power = UomPower;

#[inline]
pub fn kgps(v: f64) -> MassRate {
    use uom::si::mass_rate::kilogram_per_second;
    MassRate::new::<kilogram_per_second>(v)
}

#[inline]
pub fn watts(v: f64) -> Power {
    use uom::si::power::watt;
    Power::new::<watt>(v)
}

#[inline]
pub fn as_kgps(m: MassRate) -> f64 {
    use uom::si::mass_rate::kilogram_per_second;
    m.get::<kilogram_per_second>()
}

#[inline]
pub fn as_watts(p: Power) -> f64 {
    use uom::si::power::watt;
    p.get::<watt>()
}

pub mod constants {
    /// Standard atmospheric pressure [kPa].
    pub const P_ATM_KPA: f64 = 101.325;

    /// Celsius to Kelvin offset.
    pub const KELVIN_OFFSET: f64 = 273.15;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_round_trip() {
        assert_eq!(as_kgps(kgps(0.5)), 0.5);
        assert_eq!(as_watts(watts(2515.0)), 2515.0);
    }

    #[test]
    fn power_is_stored_in_watts() {
        // base SI unit, no scaling applied
        assert_eq!(watts(1234.5).value, 1234.5);
    }
}

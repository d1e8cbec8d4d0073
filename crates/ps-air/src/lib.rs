//! ps-air: moist-air property calculations.
//!
//! Provides:
//! - Closed-form psychrometric relations at standard atmospheric pressure
//!   (Tetens saturation pressure, Magnus dew point, Stull wet bulb, ...)
//! - `AirState`: the raw (temperature, relative humidity) input pair
//! - `MoistAirProperties`: every derived quantity, recomputed from an `AirState`
//!
//! All relations work in °C, percent relative humidity and kPa. They are
//! deliberately unguarded: RH ≤ 0 or vapour pressure reaching the total
//! pressure propagate as non-finite values. Use [`AirState::try_new`] at the
//! input boundary to reject readings the relations cannot handle.
//!
//! # Example
//!
//! ```
//! use ps_air::{AirState, MoistAirProperties};
//!
//! let state = AirState::try_new(22.0, 50.0).unwrap();
//! let props = MoistAirProperties::from_state(&state);
//! assert!((props.dew_point - 11.1).abs() < 0.05);
//! ```

pub mod error;
pub mod properties;
pub mod psychro;
pub mod state;

// Re-exports for ergonomics
pub use error::{AirError, AirResult};
pub use properties::MoistAirProperties;
pub use psychro::{
    absolute_humidity, dew_point, enthalpy, humidity_ratio, humidity_ratio_from_vapor_pressure,
    saturation_pressure, specific_volume, vapor_pressure, wet_bulb_temperature,
};
pub use state::AirState;

//! ps-comfort: comfort and energy heuristics on top of the moist-air relations.
//!
//! - `ComfortRange`: rectangular comfort envelope in (T, RH) space
//! - `evaluate_comfort`: HVAC action classification and corrective power
//! - `mold_risk`: 0–6 heuristic mould growth score
//! - `comfort_index`: simplified Fanger-style PMV in [-3, 3]
//! - `ideal_setpoint`: energy-biased target state inside the envelope
//!
//! None of these are standards-compliant models. They reproduce the
//! dashboard heuristics exactly, simplifications included.

pub mod comfort_index;
pub mod error;
pub mod evaluator;
pub mod mold;
pub mod range;
pub mod setpoint;

pub use comfort_index::{ComfortIndexParams, comfort_index, comfort_index_with};
pub use error::ComfortError;
pub use evaluator::{
    ComfortResult, DEFAULT_MASS_FLOW_KGPS, HvacAction, cooling_power, evaluate_comfort,
    heating_power, humidity_power,
};
pub use mold::{MoldRisk, MoldRiskLevel, mold_risk};
pub use range::ComfortRange;
pub use setpoint::{IdealSetpoint, SUMMER_THRESHOLD_C, ideal_setpoint};

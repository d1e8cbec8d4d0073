//! Evaluation pipeline: sensor readings to fully evaluated points.

use crate::config::{CardConfig, PointConfig};
use crate::error::{CardError, CardResult};
use crate::sensor::SensorSource;
use ps_air::{AirState, MoistAirProperties};
use ps_chart::PlotPoint;
use ps_comfort::{
    ComfortRange, ComfortResult, IdealSetpoint, MoldRisk, comfort_index, evaluate_comfort,
    ideal_setpoint, mold_risk,
};
use ps_core::units::MassRate;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// One sensor pair after full evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasurementPoint {
    pub label: String,
    pub color: String,
    pub icon: String,
    pub temp_entity: String,
    pub humidity_entity: String,
    pub state: AirState,
    pub properties: MoistAirProperties,
    pub comfort: ComfortResult,
    pub mold_risk: MoldRisk,
    /// Simplified PMV in [−3, 3].
    pub comfort_index: f64,
    pub ideal_setpoint: IdealSetpoint,
}

impl MeasurementPoint {
    pub fn in_comfort_zone(&self) -> bool {
        self.comfort.in_comfort_zone
    }

    pub fn to_plot_point(&self) -> PlotPoint {
        PlotPoint {
            temperature: self.state.temperature(),
            relative_humidity: self.state.relative_humidity(),
            dew_point: self.properties.dew_point,
            label: self.label.clone(),
            color: self.color.clone(),
        }
    }
}

/// Evaluate a single validated reading.
pub fn evaluate_point(
    config: &PointConfig,
    state: AirState,
    range: &ComfortRange,
    mass_flow: MassRate,
) -> MeasurementPoint {
    let (t, rh) = (state.temperature(), state.relative_humidity());
    MeasurementPoint {
        label: config.label(),
        color: config.color().to_string(),
        icon: config.icon().to_string(),
        temp_entity: config.temp.clone(),
        humidity_entity: config.humidity.clone(),
        state,
        properties: MoistAirProperties::from_state(&state),
        comfort: evaluate_comfort(&state, range, mass_flow),
        mold_risk: mold_risk(t, rh),
        comfort_index: comfort_index(t, rh),
        ideal_setpoint: ideal_setpoint(&state, range),
    }
}

/// Read one sensor pair. `None` drops the point.
pub fn read_state<S: SensorSource + ?Sized>(point: &PointConfig, source: &S) -> Option<AirState> {
    let (Some(t), Some(rh)) = (
        source.numeric_state(&point.temp),
        source.numeric_state(&point.humidity),
    ) else {
        warn!(
            temp = %point.temp,
            humidity = %point.humidity,
            "entities unavailable, point dropped"
        );
        return None;
    };
    match AirState::try_new(t, rh) {
        Ok(state) => Some(state),
        Err(e) => {
            warn!(
                temp = %point.temp,
                humidity = %point.humidity,
                error = %e,
                "invalid reading, point dropped"
            );
            None
        }
    }
}

/// Evaluate every configured point that has a usable reading.
///
/// Points with a missing or invalid reading are skipped; if none are left
/// the result is [`CardError::NoValidEntity`].
pub fn evaluate_points<S: SensorSource + ?Sized>(
    config: &CardConfig,
    source: &S,
) -> CardResult<Vec<MeasurementPoint>> {
    let mass_flow = config.mass_flow();
    let points: Vec<MeasurementPoint> = config
        .points
        .iter()
        .filter_map(|p| {
            read_state(p, source)
                .map(|state| evaluate_point(p, state, &config.comfort_range, mass_flow))
        })
        .collect();
    debug!(
        valid = points.len(),
        configured = config.points.len(),
        "evaluated points"
    );
    if points.is_empty() {
        return Err(CardError::NoValidEntity {
            configured: config.points.len(),
        });
    }
    Ok(points)
}

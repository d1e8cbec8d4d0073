//! Mould growth risk heuristic.
//!
//! Band scores for temperature and humidity plus a dew-point bonus. This is a
//! dashboard heuristic, not a VTT/IEA Annex 55 growth model.

use ps_air::psychro::dew_point;
use serde::{Deserialize, Serialize};

/// Upper bound of the score.
pub const MAX_SCORE: f64 = 6.0;

/// Continuous risk score in `[0, 6]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MoldRisk(f64);

impl MoldRisk {
    pub fn score(self) -> f64 {
        self.0
    }

    pub fn level(self) -> MoldRiskLevel {
        MoldRiskLevel::from_score(self.0)
    }
}

/// Discrete risk level: `floor(score)`, capped at 6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoldRiskLevel {
    None,
    VeryLow,
    Low,
    Moderate,
    High,
    VeryHigh,
    Critical,
}

impl MoldRiskLevel {
    pub const ALL: [MoldRiskLevel; 7] = [
        Self::None,
        Self::VeryLow,
        Self::Low,
        Self::Moderate,
        Self::High,
        Self::VeryHigh,
        Self::Critical,
    ];

    pub fn from_score(score: f64) -> Self {
        // NaN and negatives land on the lowest level
        let idx = if score.is_nan() || score < 0.0 {
            0
        } else {
            (score.floor() as usize).min(6)
        };
        Self::ALL[idx]
    }

    /// Badge colour.
    pub fn color(self) -> &'static str {
        match self {
            Self::None => "#4CAF50",
            Self::VeryLow => "#8BC34A",
            Self::Low => "#CDDC39",
            Self::Moderate => "#FFEB3B",
            Self::High => "#FFC107",
            Self::VeryHigh => "#FF9800",
            Self::Critical => "#FF5722",
        }
    }
}

fn temperature_band(t: f64) -> f64 {
    if t < 5.0 {
        0.0
    } else if t < 15.0 {
        1.0
    } else if t < 20.0 {
        2.0
    } else if t < 25.0 {
        3.0
    } else {
        2.5
    }
}

fn humidity_band(rh: f64) -> f64 {
    if rh < 60.0 {
        0.0
    } else if rh < 70.0 {
        1.0
    } else if rh < 80.0 {
        2.0
    } else if rh < 90.0 {
        2.5
    } else {
        3.0
    }
}

/// Mould risk score for the given state.
pub fn mold_risk(t: f64, rh: f64) -> MoldRisk {
    let mut risk = temperature_band(t) + humidity_band(rh);
    if dew_point(t, rh) > 12.0 {
        risk += 0.5;
    }
    MoldRisk(risk.clamp(0.0, MAX_SCORE))
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn score_within_bounds(t in -10.0_f64..=50.0, rh in 1.0_f64..=100.0) {
            let s = mold_risk(t, rh).score();
            prop_assert!((0.0..=MAX_SCORE).contains(&s));
        }

        #[test]
        fn non_decreasing_in_humidity(
            t in -10.0_f64..=50.0,
            rh in 1.0_f64..99.0,
            step in 0.0_f64..1.0
        ) {
            let lo = mold_risk(t, rh).score();
            let hi = mold_risk(t, rh + step).score();
            prop_assert!(hi >= lo);
        }
    }
}

//! Constant-RH isopleths and constant-enthalpy isenthalps.
//!
//! RH isopleths are evaluated directly. Isenthalps have no closed-form
//! inverse on this chart, so they come from a brute-force grid search over
//! (T, RH): T in 0.5 °C steps, RH in 5 % steps, first RH within
//! [`ENTHALPY_TOLERANCE`] of the target wins. Changing any of those three
//! numbers changes the curve shape.

use crate::geometry::ProjectedPoint;
use crate::projector::{ChartProjector, T_MAX, T_MIN};
use ps_air::psychro::{enthalpy, humidity_ratio, vapor_pressure};
use serde::{Deserialize, Serialize};

/// Max |h(T, RH) − h_target| [kJ/kg] for a grid point to join an isenthalp.
pub const ENTHALPY_TOLERANCE: f64 = 0.5;

const ISENTHALP_T_STEP: f64 = 0.5;
const ISENTHALP_RH_START: f64 = 10.0;
const ISENTHALP_RH_STEP: f64 = 5.0;
const ISENTHALP_RH_STEPS: usize = 18;

/// Visible label band on the design surface (y strictly between, x beyond).
const LABEL_BAND_TOP: f64 = 70.0;
const LABEL_BAND_BOTTOM: f64 = 500.0;
const LABEL_PREFERRED_X: f64 = 400.0;
const LABEL_TANGENT_LOOKBACK: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum IsolineKind {
    RelativeHumidity { rh: u32 },
    Enthalpy { h: u32 },
}

/// Where and how an isoline label is drawn.
///
/// The text is placed at `offset` after translating to `anchor` and
/// rotating by `angle` radians.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IsolineLabel {
    pub anchor: ProjectedPoint,
    pub angle: f64,
    pub offset: (f64, f64),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Isoline {
    pub kind: IsolineKind,
    pub points: Vec<ProjectedPoint>,
    pub label: Option<IsolineLabel>,
    /// Drawn with the heavier line weight.
    pub emphasized: bool,
}

impl Isoline {
    pub fn label_text(&self) -> String {
        match self.kind {
            IsolineKind::RelativeHumidity { rh } => format!("{rh}%"),
            IsolineKind::Enthalpy { h } => format!("{h} kJ/kg"),
        }
    }

    pub fn is_saturation(&self) -> bool {
        matches!(self.kind, IsolineKind::RelativeHumidity { rh: 100 })
    }
}

/// RH isopleths for 10 % … 100 %, sampled at every whole degree.
pub fn rh_isopleths(proj: &ChartProjector) -> Vec<Isoline> {
    (1..=10u32)
        .map(|step| {
            let rh = step * 10;
            let points: Vec<ProjectedPoint> = (T_MIN as i32..=T_MAX as i32)
                .map(|t| {
                    let t = f64::from(t);
                    proj.project_pv(t, vapor_pressure(t, f64::from(rh)))
                })
                .collect();
            let label = points.last().map(|last| IsolineLabel {
                anchor: last.offset(5.0 * proj.scale_x, 0.0),
                angle: 0.0,
                offset: (0.0, 0.0),
            });
            Isoline {
                kind: IsolineKind::RelativeHumidity { rh },
                points,
                label,
                emphasized: rh % 20 == 0,
            }
        })
        .collect()
}

/// Grid states `(T, RH)` accepted for the isenthalp at `h` kJ/kg, in
/// ascending T order. At most one state per sampled temperature.
pub fn find_isenthalp_states(h: f64) -> Vec<(f64, f64)> {
    let t_steps = ((T_MAX - T_MIN) / ISENTHALP_T_STEP) as usize;
    (0..=t_steps)
        .filter_map(|i| {
            let t = T_MIN + i as f64 * ISENTHALP_T_STEP;
            (0..=ISENTHALP_RH_STEPS)
                .map(|j| ISENTHALP_RH_START + j as f64 * ISENTHALP_RH_STEP)
                .find(|&rh| (enthalpy(t, humidity_ratio(t, rh)) - h).abs() < ENTHALPY_TOLERANCE)
                .map(|rh| (t, rh))
        })
        .collect()
}

/// Isenthalps for 0 … 100 kJ/kg in 10 kJ/kg steps.
///
/// Targets with no accepted grid state are omitted.
pub fn isenthalps(proj: &ChartProjector) -> Vec<Isoline> {
    (0..=10u32)
        .filter_map(|step| {
            let h = step * 10;
            let points: Vec<ProjectedPoint> = find_isenthalp_states(f64::from(h))
                .into_iter()
                .map(|(t, rh)| proj.project(t, rh))
                .collect();
            if points.is_empty() {
                return None;
            }
            let label = isenthalp_label(proj, &points);
            Some(Isoline {
                kind: IsolineKind::Enthalpy { h },
                points,
                label,
                emphasized: false,
            })
        })
        .collect()
}

fn isenthalp_label(proj: &ChartProjector, points: &[ProjectedPoint]) -> Option<IsolineLabel> {
    let mut sorted = points.to_vec();
    sorted.sort_by(|a, b| b.x.total_cmp(&a.x));

    let in_band = |p: &ProjectedPoint| {
        p.y > LABEL_BAND_TOP * proj.scale_y && p.y < LABEL_BAND_BOTTOM * proj.scale_y
    };
    let idx = sorted
        .iter()
        .position(|p| in_band(p) && p.x > LABEL_PREFERRED_X * proj.scale_x)
        .or_else(|| sorted.iter().position(in_band))?;

    let anchor = sorted[idx];
    let neighbor = sorted[idx.saturating_sub(LABEL_TANGENT_LOOKBACK)];
    Some(IsolineLabel {
        anchor,
        angle: (neighbor.y - anchor.y).atan2(neighbor.x - anchor.x),
        offset: (5.0 * proj.scale, -5.0 * proj.scale),
    })
}

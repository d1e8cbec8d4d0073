//! Dashed background grid with axis labels.

use crate::geometry::ProjectedPoint;
use crate::projector::{ChartProjector, PV_MAX_KPA, T_MAX, T_MIN};
use serde::{Deserialize, Serialize};

const PRESSURE_STEP_KPA: f64 = 0.5;
const TEMPERATURE_STEP_C: i32 = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridLine {
    pub from: ProjectedPoint,
    pub to: ProjectedPoint,
    pub label: String,
    pub label_pos: ProjectedPoint,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxesGrid {
    /// Horizontal lines, 0 … 4 kPa.
    pub pressure_lines: Vec<GridLine>,
    /// Vertical lines, −10 … 50 °C.
    pub temperature_lines: Vec<GridLine>,
}

impl AxesGrid {
    pub fn lines(&self) -> impl Iterator<Item = &GridLine> {
        self.pressure_lines.iter().chain(&self.temperature_lines)
    }
}

pub fn axes_grid(proj: &ChartProjector) -> AxesGrid {
    let pressure_steps = (PV_MAX_KPA / PRESSURE_STEP_KPA) as usize;
    let pressure_lines = (0..=pressure_steps)
        .map(|i| {
            let pv = i as f64 * PRESSURE_STEP_KPA;
            let y = proj.pressure_to_y(pv);
            GridLine {
                from: ProjectedPoint::new(proj.left_padding, y),
                to: ProjectedPoint::new(proj.right_edge, y),
                label: format!("{pv:.1} kPa"),
                label_pos: ProjectedPoint::new(10.0 * proj.scale_x, y + 5.0 * proj.scale_y),
            }
        })
        .collect();

    let temperature_lines = (T_MIN as i32..=T_MAX as i32)
        .step_by(TEMPERATURE_STEP_C as usize)
        .map(|t| {
            let x = proj.project_x(f64::from(t));
            GridLine {
                from: ProjectedPoint::new(x, proj.bottom_edge),
                to: ProjectedPoint::new(x, proj.top_padding),
                label: format!("{t}°C"),
                label_pos: ProjectedPoint::new(
                    x - 10.0 * proj.scale_x,
                    proj.bottom_edge + 20.0 * proj.scale_y,
                ),
            }
        })
        .collect();

    AxesGrid {
        pressure_lines,
        temperature_lines,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projector::CanvasSize;

    #[test]
    fn grid_line_counts_and_labels() {
        let grid = axes_grid(&ChartProjector::new(CanvasSize::default()));
        assert_eq!(grid.pressure_lines.len(), 9);
        assert_eq!(grid.temperature_lines.len(), 13);
        assert_eq!(grid.pressure_lines[0].label, "0.0 kPa");
        assert_eq!(grid.pressure_lines[8].label, "4.0 kPa");
        assert_eq!(grid.temperature_lines[0].label, "-10°C");
        assert_eq!(grid.temperature_lines[12].label, "50°C");
        assert_eq!(grid.lines().count(), 22);
    }

    #[test]
    fn top_pressure_line_hits_top_padding() {
        let p = ChartProjector::new(CanvasSize::default());
        let grid = axes_grid(&p);
        assert_eq!(grid.pressure_lines[8].from.y, p.top_padding);
        assert_eq!(grid.pressure_lines[0].from.y, p.bottom_edge);
    }
}

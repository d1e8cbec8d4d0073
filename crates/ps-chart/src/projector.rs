//! Temperature / vapour-pressure → pixel projection.
//!
//! Layout constants live on a canonical 800×600 design surface and are scaled
//! independently along x and y to the actual canvas.

use crate::error::{ChartError, ChartResult};
use crate::geometry::ProjectedPoint;
use ps_air::psychro::vapor_pressure;
use serde::{Deserialize, Serialize};

pub const DESIGN_WIDTH: f64 = 800.0;
pub const DESIGN_HEIGHT: f64 = 600.0;

pub const LEFT_PADDING: f64 = 50.0;
pub const RIGHT_EDGE: f64 = 750.0;
pub const TOP_PADDING: f64 = 50.0;
pub const BOTTOM_EDGE: f64 = 550.0;

/// Temperature domain [°C].
pub const T_MIN: f64 = -10.0;
pub const T_MAX: f64 = 50.0;
/// Vapour pressure domain upper bound [kPa].
pub const PV_MAX_KPA: f64 = 4.0;
/// Design pixels per kelvin along x.
pub const PX_PER_DEGREE: f64 = 12.0;

const MIN_CANVAS_WIDTH: f64 = 300.0;
const MAX_CANVAS_WIDTH: f64 = 1200.0;
const CONTAINER_MARGIN: f64 = 40.0;
const ASPECT: f64 = 0.75;

/// Canvas pixel dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasSize {
    pub width: f64,
    pub height: f64,
}

impl Default for CanvasSize {
    fn default() -> Self {
        Self {
            width: DESIGN_WIDTH,
            height: DESIGN_HEIGHT,
        }
    }
}

impl CanvasSize {
    pub fn new(width: f64, height: f64) -> ChartResult<Self> {
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(ChartError::InvalidCanvas { width, height });
        }
        Ok(Self { width, height })
    }

    /// Responsive size for a container of the given CSS width: 40 px margin,
    /// width clamped to 300–1200, 4:3 aspect.
    pub fn for_container(container_width: f64) -> Self {
        let width = (container_width - CONTAINER_MARGIN).clamp(MIN_CANVAS_WIDTH, MAX_CANVAS_WIDTH);
        Self {
            width,
            height: (width * ASPECT).floor(),
        }
    }
}

/// Scaled chart layout for one canvas size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartProjector {
    pub size: CanvasSize,
    pub scale_x: f64,
    pub scale_y: f64,
    /// Uniform scale for line widths, radii and fonts.
    pub scale: f64,
    pub left_padding: f64,
    pub right_edge: f64,
    pub top_padding: f64,
    pub bottom_edge: f64,
    pub chart_width: f64,
    pub chart_height: f64,
}

impl ChartProjector {
    pub fn new(size: CanvasSize) -> Self {
        let scale_x = size.width / DESIGN_WIDTH;
        let scale_y = size.height / DESIGN_HEIGHT;
        let left_padding = LEFT_PADDING * scale_x;
        let right_edge = RIGHT_EDGE * scale_x;
        let top_padding = TOP_PADDING * scale_y;
        let bottom_edge = BOTTOM_EDGE * scale_y;
        Self {
            size,
            scale_x,
            scale_y,
            scale: scale_x.min(scale_y),
            left_padding,
            right_edge,
            top_padding,
            bottom_edge,
            chart_width: right_edge - left_padding,
            chart_height: bottom_edge - top_padding,
        }
    }

    /// x pixel for a temperature [°C].
    #[inline]
    pub fn project_x(&self, t: f64) -> f64 {
        self.left_padding + (t + 10.0) * PX_PER_DEGREE * self.scale_x
    }

    /// y pixel for a vapour pressure [kPa].
    #[inline]
    pub fn pressure_to_y(&self, pv: f64) -> f64 {
        self.bottom_edge - (pv / PV_MAX_KPA) * self.chart_height
    }

    /// y pixel for a (temperature, relative humidity) pair.
    #[inline]
    pub fn project_y(&self, t: f64, rh: f64) -> f64 {
        self.pressure_to_y(vapor_pressure(t, rh))
    }

    pub fn project(&self, t: f64, rh: f64) -> ProjectedPoint {
        ProjectedPoint::new(self.project_x(t), self.project_y(t, rh))
    }

    /// Project a temperature with an already computed vapour pressure.
    pub fn project_pv(&self, t: f64, pv: f64) -> ProjectedPoint {
        ProjectedPoint::new(self.project_x(t), self.pressure_to_y(pv))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ps_air::psychro::saturation_pressure;

    #[test]
    fn design_surface_is_identity_scale() {
        let p = ChartProjector::new(CanvasSize::default());
        assert_eq!(p.scale_x, 1.0);
        assert_eq!(p.scale_y, 1.0);
        assert_eq!(p.chart_height, 500.0);
        assert_eq!(p.chart_width, 700.0);
    }

    #[test]
    fn temperature_axis_is_linear() {
        let p = ChartProjector::new(CanvasSize::default());
        assert_eq!(p.project_x(-10.0), 50.0);
        assert_eq!(p.project_x(50.0), 770.0);
        assert_eq!(p.project_x(0.0) - p.project_x(-1.0), 12.0);
    }

    #[test]
    fn pressure_axis_spans_plot_height() {
        let p = ChartProjector::new(CanvasSize::default());
        assert_eq!(p.pressure_to_y(0.0), 550.0);
        assert_eq!(p.pressure_to_y(4.0), 50.0);
    }

    #[test]
    fn y_uses_vapour_pressure() {
        let p = ChartProjector::new(CanvasSize::default());
        let y = p.project_y(22.0, 100.0);
        assert_eq!(y, 550.0 - (saturation_pressure(22.0) / 4.0) * 500.0);
    }

    #[test]
    fn axes_scale_independently() {
        let p = ChartProjector::new(CanvasSize::new(400.0, 600.0).unwrap());
        assert_eq!(p.scale_x, 0.5);
        assert_eq!(p.scale_y, 1.0);
        assert_eq!(p.scale, 0.5);
        assert_eq!(p.project_x(-10.0), 25.0);
        assert_eq!(p.pressure_to_y(0.0), 550.0);
    }

    #[test]
    fn container_sizing_clamps_and_keeps_aspect() {
        assert_eq!(
            CanvasSize::for_container(840.0),
            CanvasSize {
                width: 800.0,
                height: 600.0
            }
        );
        assert_eq!(CanvasSize::for_container(100.0).width, 300.0);
        assert_eq!(CanvasSize::for_container(100.0).height, 225.0);
        assert_eq!(CanvasSize::for_container(5000.0).width, 1200.0);
        assert_eq!(CanvasSize::for_container(555.0).height, 386.0);
    }

    #[test]
    fn invalid_canvas_rejected() {
        assert!(CanvasSize::new(0.0, 600.0).is_err());
        assert!(CanvasSize::new(800.0, f64::NAN).is_err());
    }
}

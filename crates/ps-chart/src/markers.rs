//! Measurement-point marker geometry.

use crate::geometry::ProjectedPoint;
use crate::projector::ChartProjector;
use ps_air::psychro::saturation_pressure;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointMarker {
    pub center: ProjectedPoint,
    pub radius: f64,
    pub halo_radius: f64,
    /// Dashed guide from the temperature axis up to the point.
    pub vertical_guide: [ProjectedPoint; 2],
    /// Dashed guide from the pressure axis across to the point.
    pub horizontal_guide: [ProjectedPoint; 2],
    /// Dew point on the saturation curve, when shown.
    pub dew_point: Option<ProjectedPoint>,
    pub dew_radius: f64,
    pub label_pos: ProjectedPoint,
}

/// Marker for a reading at `(t, rh)`. `dew_point` is the dew-point
/// temperature to mark on the saturation curve, if any.
pub fn point_marker(
    proj: &ChartProjector,
    t: f64,
    rh: f64,
    dew_point: Option<f64>,
) -> PointMarker {
    let center = proj.project(t, rh);
    let s = proj.scale;
    PointMarker {
        center,
        radius: 6.0 * s,
        halo_radius: 10.0 * s,
        vertical_guide: [ProjectedPoint::new(center.x, proj.bottom_edge), center],
        horizontal_guide: [ProjectedPoint::new(proj.left_padding, center.y), center],
        dew_point: dew_point.map(|td| proj.project_pv(td, saturation_pressure(td))),
        dew_radius: 4.0 * s,
        label_pos: center.offset(10.0 * proj.scale_x, -10.0 * proj.scale_y),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projector::CanvasSize;
    use ps_air::psychro::dew_point;

    #[test]
    fn marker_sizes_scale_with_canvas() {
        let p = ChartProjector::new(CanvasSize::new(400.0, 600.0).unwrap());
        let m = point_marker(&p, 22.0, 50.0, None);
        assert_eq!(m.radius, 3.0);
        assert_eq!(m.halo_radius, 5.0);
        assert_eq!(m.label_pos.x, m.center.x + 5.0);
        assert_eq!(m.label_pos.y, m.center.y - 10.0);
        assert!(m.dew_point.is_none());
    }

    #[test]
    fn dew_marker_lies_at_same_height() {
        // Pv(T, RH) = Psat(Td), so the dew marker shares the point's y.
        let p = ChartProjector::new(CanvasSize::default());
        let td = dew_point(22.0, 50.0);
        let m = point_marker(&p, 22.0, 50.0, Some(td));
        let dew = m.dew_point.unwrap();
        assert!((dew.y - m.center.y).abs() < 1e-6);
        assert!(dew.x < m.center.x);
    }

    #[test]
    fn guides_reach_axes() {
        let p = ChartProjector::new(CanvasSize::default());
        let m = point_marker(&p, 10.0, 60.0, None);
        assert_eq!(m.vertical_guide[0].y, p.bottom_edge);
        assert_eq!(m.horizontal_guide[0].x, p.left_padding);
    }
}

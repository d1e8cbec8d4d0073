//! Comfort-zone quadrilateral.
//!
//! The four range corners are projected and joined by straight chords, so
//! the upper and lower edges do not follow the real RH isopleths.

use crate::geometry::ProjectedPoint;
use crate::projector::{ChartProjector, PX_PER_DEGREE};
use ps_comfort::ComfortRange;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComfortZone {
    /// (tMin, rhMin), (tMax, rhMin), (tMax, rhMax), (tMin, rhMax).
    pub vertices: [ProjectedPoint; 4],
    pub label_anchor: ProjectedPoint,
}

pub fn comfort_zone(proj: &ChartProjector, range: &ComfortRange) -> ComfortZone {
    let vertices = range.corners().map(|(t, rh)| proj.project(t, rh));
    let (avg_t, avg_rh) = range.center();
    // The label x omits the +10 °C axis shift used by project_x.
    let label_x = proj.left_padding + avg_t * PX_PER_DEGREE * proj.scale_x + 10.0 * proj.scale_x
        - 45.0 * proj.scale;
    ComfortZone {
        vertices,
        label_anchor: ProjectedPoint::new(label_x, proj.project_y(avg_t, avg_rh)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projector::CanvasSize;

    #[test]
    fn vertices_follow_corner_order() {
        let p = ChartProjector::new(CanvasSize::default());
        let zone = comfort_zone(&p, &ComfortRange::default());
        assert_eq!(zone.vertices[0], p.project(20.0, 40.0));
        assert_eq!(zone.vertices[1], p.project(26.0, 40.0));
        assert_eq!(zone.vertices[2], p.project(26.0, 60.0));
        assert_eq!(zone.vertices[3], p.project(20.0, 60.0));
    }

    #[test]
    fn zone_is_not_axis_aligned() {
        let p = ChartProjector::new(CanvasSize::default());
        let zone = comfort_zone(&p, &ComfortRange::default());
        // Same RH, different T: different vapour pressure.
        assert!(zone.vertices[0].y != zone.vertices[1].y);
        assert!(zone.vertices[2].y < zone.vertices[1].y);
    }

    #[test]
    fn label_anchor_on_design_surface() {
        let p = ChartProjector::new(CanvasSize::default());
        let zone = comfort_zone(&p, &ComfortRange::default());
        // 50 + 23 * 12 + 10 - 45
        assert!((zone.label_anchor.x - 291.0).abs() < 1e-9);
        assert!((zone.label_anchor.y - p.project_y(23.0, 50.0)).abs() < 1e-12);
    }
}

//! Full chart frame: geometry assembly and draw order.

use crate::axes::{AxesGrid, axes_grid};
use crate::comfort_zone::{ComfortZone, comfort_zone};
use crate::geometry::ProjectedPoint;
use crate::hit_test::hit_test;
use crate::isolines::{Isoline, isenthalps, rh_isopleths};
use crate::markers::{PointMarker, point_marker};
use crate::projector::{CanvasSize, ChartProjector};
use crate::surface::{RenderSurface, Stroke, TextStyle};
use crate::theme::Palette;
use ps_comfort::ComfortRange;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    #[default]
    Standard,
    /// Suppresses the isenthalp and dew-point overlays.
    Minimal,
    Advanced,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChartOptions {
    pub show_enthalpy: bool,
    pub show_dew_point: bool,
    pub show_point_labels: bool,
    pub display_mode: DisplayMode,
    /// Text drawn inside the comfort zone.
    pub comfort_zone_label: String,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            show_enthalpy: true,
            show_dew_point: true,
            show_point_labels: true,
            display_mode: DisplayMode::Standard,
            comfort_zone_label: "Comfort zone".into(),
        }
    }
}

impl ChartOptions {
    pub fn draws_isenthalps(&self) -> bool {
        self.show_enthalpy && self.display_mode != DisplayMode::Minimal
    }

    pub fn draws_dew_points(&self) -> bool {
        self.show_dew_point && self.display_mode != DisplayMode::Minimal
    }
}

/// A measurement to plot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotPoint {
    pub temperature: f64,
    pub relative_humidity: f64,
    pub dew_point: f64,
    pub label: String,
    pub color: String,
}

/// A plotted point together with its index in the input slice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedMarker {
    pub index: usize,
    pub point: PlotPoint,
    pub marker: PointMarker,
}

/// Everything needed to draw one frame. Built from scratch per render.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartScene {
    pub projector: ChartProjector,
    pub options: ChartOptions,
    pub grid: AxesGrid,
    pub isopleths: Vec<Isoline>,
    pub isenthalps: Vec<Isoline>,
    pub comfort_zone: ComfortZone,
    pub markers: Vec<PlacedMarker>,
}

impl ChartScene {
    pub fn build(
        size: CanvasSize,
        range: &ComfortRange,
        points: &[PlotPoint],
        options: ChartOptions,
    ) -> Self {
        let projector = ChartProjector::new(size);
        let isenthalps = if options.draws_isenthalps() {
            isenthalps(&projector)
        } else {
            Vec::new()
        };

        let show_dew = options.draws_dew_points();
        let markers = points
            .iter()
            .enumerate()
            .filter_map(|(index, p)| {
                let dew = (show_dew && p.dew_point.is_finite()).then_some(p.dew_point);
                let marker = point_marker(&projector, p.temperature, p.relative_humidity, dew);
                if !marker.center.is_finite() {
                    debug!(label = %p.label, t = p.temperature, rh = p.relative_humidity,
                        "skipping point with non-finite projection");
                    return None;
                }
                Some(PlacedMarker {
                    index,
                    point: p.clone(),
                    marker,
                })
            })
            .collect();

        Self {
            grid: axes_grid(&projector),
            isopleths: rh_isopleths(&projector),
            isenthalps,
            comfort_zone: comfort_zone(&projector, range),
            markers,
            projector,
            options,
        }
    }

    /// Input index of the point under `pointer`, if any.
    pub fn hover(&self, pointer: ProjectedPoint) -> Option<usize> {
        let centers: Vec<ProjectedPoint> = self.markers.iter().map(|m| m.marker.center).collect();
        hit_test(pointer, &centers).map(|i| self.markers[i].index)
    }

    pub fn draw<S: RenderSurface + ?Sized>(&self, surface: &mut S, palette: &Palette) {
        let proj = &self.projector;
        let s = proj.scale;
        let small_font = (12.0 * s).max(10.0);

        surface.fill_rect(
            ProjectedPoint::default(),
            proj.size.width,
            proj.size.height,
            &palette.background,
        );

        let grid_stroke = Stroke::dashed(palette.grid.as_str(), s, 5.0 * s, 5.0 * s);
        for line in self.grid.lines() {
            surface.stroke_path(&[line.from, line.to], &grid_stroke);
            surface.text(
                &line.label,
                &TextStyle::at(line.label_pos, palette.text.as_str(), small_font),
            );
        }

        for line in &self.isopleths {
            let color = if line.is_saturation() {
                &palette.saturation
            } else {
                &palette.curve
            };
            let width = s * if line.emphasized { 1.5 } else { 0.8 };
            surface.stroke_path(&line.points, &Stroke::solid(color.as_str(), width));
            if let Some(label) = &line.label {
                surface.text(
                    &line.label_text(),
                    &TextStyle::at(label.anchor, palette.text.as_str(), small_font),
                );
            }
        }

        let isenthalp_stroke = Stroke::dashed(palette.isenthalp.as_str(), s, 2.0 * s, 3.0 * s);
        for line in &self.isenthalps {
            surface.stroke_path(&line.points, &isenthalp_stroke);
            if let Some(label) = &line.label {
                let style =
                    TextStyle::at(label.anchor, palette.isenthalp_label.as_str(), small_font)
                        .rotated(label.angle, label.offset);
                surface.text(&line.label_text(), &style);
            }
        }

        surface.fill_polygon(&self.comfort_zone.vertices, &palette.comfort);
        surface.text(
            &self.options.comfort_zone_label,
            &TextStyle::at(
                self.comfort_zone.label_anchor,
                palette.comfort_label.as_str(),
                (14.0 * s).max(12.0),
            ),
        );

        for placed in &self.markers {
            self.draw_marker(surface, palette, placed);
        }
    }

    fn draw_marker<S: RenderSurface + ?Sized>(
        &self,
        surface: &mut S,
        palette: &Palette,
        placed: &PlacedMarker,
    ) {
        let s = self.projector.scale;
        let m = &placed.marker;
        let color = placed.point.color.as_str();

        surface.fill_circle(m.center, m.radius, color);
        surface.stroke_circle(
            m.center,
            m.radius,
            &Stroke::solid(palette.point_outline.as_str(), 2.0 * s),
        );
        surface.stroke_circle(
            m.center,
            m.halo_radius,
            &Stroke::solid(format!("{color}40"), 3.0 * s),
        );

        let guide = Stroke::dashed(color, s, 5.0 * s, 5.0 * s);
        surface.stroke_path(&m.vertical_guide, &guide);
        surface.stroke_path(&m.horizontal_guide, &guide);

        if let Some(dew) = m.dew_point {
            surface.fill_circle(dew, m.dew_radius, &palette.dew_marker);
            surface.stroke_path(
                &[m.center, dew],
                &Stroke::dashed(palette.dew_marker.as_str(), s, 3.0 * s, 3.0 * s),
            );
        }

        if self.options.show_point_labels {
            surface.text(
                &placed.point.label,
                &TextStyle::at(m.label_pos, palette.text.as_str(), (10.0 * s).max(10.0)),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{DrawCommand, RecordingSurface};
    use ps_air::psychro::dew_point;

    fn point(t: f64, rh: f64, label: &str) -> PlotPoint {
        PlotPoint {
            temperature: t,
            relative_humidity: rh,
            dew_point: dew_point(t, rh),
            label: label.into(),
            color: "#ff0000".into(),
        }
    }

    #[test]
    fn minimal_mode_drops_overlays() {
        let options = ChartOptions {
            display_mode: DisplayMode::Minimal,
            ..ChartOptions::default()
        };
        let scene = ChartScene::build(
            CanvasSize::default(),
            &ComfortRange::default(),
            &[point(22.0, 50.0, "Salon")],
            options,
        );
        assert!(scene.isenthalps.is_empty());
        assert!(scene.markers[0].marker.dew_point.is_none());
    }

    #[test]
    fn standard_mode_has_overlays() {
        let scene = ChartScene::build(
            CanvasSize::default(),
            &ComfortRange::default(),
            &[point(22.0, 50.0, "Salon")],
            ChartOptions::default(),
        );
        assert!(!scene.isenthalps.is_empty());
        assert!(scene.markers[0].marker.dew_point.is_some());
    }

    #[test]
    fn non_finite_points_are_skipped_and_indices_kept() {
        let bad = PlotPoint {
            temperature: f64::NAN,
            ..point(20.0, 50.0, "bad")
        };
        let scene = ChartScene::build(
            CanvasSize::default(),
            &ComfortRange::default(),
            &[bad, point(22.0, 50.0, "good")],
            ChartOptions::default(),
        );
        assert_eq!(scene.markers.len(), 1);
        assert_eq!(scene.markers[0].index, 1);
        let center = scene.markers[0].marker.center;
        assert_eq!(scene.hover(center), Some(1));
    }

    #[test]
    fn draw_emits_labels_and_background_first() {
        let scene = ChartScene::build(
            CanvasSize::default(),
            &ComfortRange::default(),
            &[point(22.0, 50.0, "Salon")],
            ChartOptions::default(),
        );
        let mut surface = RecordingSurface::new(CanvasSize::default());
        scene.draw(&mut surface, &Palette::light());
        assert!(matches!(
            &surface.commands[0],
            DrawCommand::FillRect { color, .. } if color == "#ffffff"
        ));
        let texts: Vec<&str> = surface.texts().collect();
        assert!(texts.contains(&"100%"));
        assert!(texts.contains(&"Comfort zone"));
        assert!(texts.contains(&"Salon"));
        assert!(texts.iter().any(|t| t.ends_with("kJ/kg")));
        assert_eq!(texts.last(), Some(&"Salon"));
    }

    #[test]
    fn point_labels_can_be_hidden() {
        let options = ChartOptions {
            show_point_labels: false,
            ..ChartOptions::default()
        };
        let scene = ChartScene::build(
            CanvasSize::default(),
            &ComfortRange::default(),
            &[point(22.0, 50.0, "Salon")],
            options,
        );
        let mut surface = RecordingSurface::new(CanvasSize::default());
        scene.draw(&mut surface, &Palette::dark());
        assert!(!surface.texts().any(|t| t == "Salon"));
    }

    #[test]
    fn halo_uses_translucent_point_colour() {
        let scene = ChartScene::build(
            CanvasSize::default(),
            &ComfortRange::default(),
            &[point(22.0, 50.0, "Salon")],
            ChartOptions::default(),
        );
        let mut surface = RecordingSurface::new(CanvasSize::default());
        scene.draw(&mut surface, &Palette::light());
        assert!(surface.commands.iter().any(|c| matches!(
            c,
            DrawCommand::StrokeCircle { stroke, radius, .. }
                if stroke.color == "#ff000040" && *radius == 10.0
        )));
    }
}

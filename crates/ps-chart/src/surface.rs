//! Drawing seam between chart geometry and a concrete 2D canvas.
//!
//! The chart code only talks to [`RenderSurface`]; it never touches a
//! platform canvas API directly.

use crate::geometry::ProjectedPoint;
use crate::projector::CanvasSize;
use serde::{Deserialize, Serialize};

/// Line style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub color: String,
    pub width: f64,
    /// `(dash, gap)` lengths; `None` for a solid line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dash: Option<(f64, f64)>,
}

impl Stroke {
    pub fn solid(color: impl Into<String>, width: f64) -> Self {
        Self {
            color: color.into(),
            width,
            dash: None,
        }
    }

    pub fn dashed(color: impl Into<String>, width: f64, dash: f64, gap: f64) -> Self {
        Self {
            color: color.into(),
            width,
            dash: Some((dash, gap)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Text placement: translate to `anchor`, rotate by `angle` (radians), then
/// draw at `offset` in the rotated frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    pub anchor: ProjectedPoint,
    #[serde(default)]
    pub angle: f64,
    #[serde(default)]
    pub offset: (f64, f64),
    pub color: String,
    pub font_px: f64,
    #[serde(default)]
    pub align: TextAlign,
}

impl TextStyle {
    pub fn at(anchor: ProjectedPoint, color: impl Into<String>, font_px: f64) -> Self {
        Self {
            anchor,
            angle: 0.0,
            offset: (0.0, 0.0),
            color: color.into(),
            font_px,
            align: TextAlign::Left,
        }
    }

    pub fn rotated(mut self, angle: f64, offset: (f64, f64)) -> Self {
        self.angle = angle;
        self.offset = offset;
        self
    }

    pub fn aligned(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }
}

/// A drawable 2D surface.
pub trait RenderSurface {
    fn size(&self) -> CanvasSize;

    fn fill_rect(&mut self, origin: ProjectedPoint, width: f64, height: f64, color: &str);

    /// Stroke an open polyline through `points`.
    fn stroke_path(&mut self, points: &[ProjectedPoint], stroke: &Stroke);

    /// Fill the closed polygon through `points`.
    fn fill_polygon(&mut self, points: &[ProjectedPoint], color: &str);

    fn fill_circle(&mut self, center: ProjectedPoint, radius: f64, color: &str);

    fn stroke_circle(&mut self, center: ProjectedPoint, radius: f64, stroke: &Stroke);

    fn text(&mut self, text: &str, style: &TextStyle);
}

/// One recorded drawing primitive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum DrawCommand {
    FillRect {
        origin: ProjectedPoint,
        width: f64,
        height: f64,
        color: String,
    },
    StrokePath {
        points: Vec<ProjectedPoint>,
        stroke: Stroke,
    },
    FillPolygon {
        points: Vec<ProjectedPoint>,
        color: String,
    },
    FillCircle {
        center: ProjectedPoint,
        radius: f64,
        color: String,
    },
    StrokeCircle {
        center: ProjectedPoint,
        radius: f64,
        stroke: Stroke,
    },
    Text {
        text: String,
        style: TextStyle,
    },
}

/// Surface that records every primitive instead of rasterising it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordingSurface {
    pub size: CanvasSize,
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new(size: CanvasSize) -> Self {
        Self {
            size,
            commands: Vec::new(),
        }
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// All recorded text strings, in draw order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl RenderSurface for RecordingSurface {
    fn size(&self) -> CanvasSize {
        self.size
    }

    fn fill_rect(&mut self, origin: ProjectedPoint, width: f64, height: f64, color: &str) {
        self.commands.push(DrawCommand::FillRect {
            origin,
            width,
            height,
            color: color.to_string(),
        });
    }

    fn stroke_path(&mut self, points: &[ProjectedPoint], stroke: &Stroke) {
        self.commands.push(DrawCommand::StrokePath {
            points: points.to_vec(),
            stroke: stroke.clone(),
        });
    }

    fn fill_polygon(&mut self, points: &[ProjectedPoint], color: &str) {
        self.commands.push(DrawCommand::FillPolygon {
            points: points.to_vec(),
            color: color.to_string(),
        });
    }

    fn fill_circle(&mut self, center: ProjectedPoint, radius: f64, color: &str) {
        self.commands.push(DrawCommand::FillCircle {
            center,
            radius,
            color: color.to_string(),
        });
    }

    fn stroke_circle(&mut self, center: ProjectedPoint, radius: f64, stroke: &Stroke) {
        self.commands.push(DrawCommand::StrokeCircle {
            center,
            radius,
            stroke: stroke.clone(),
        });
    }

    fn text(&mut self, text: &str, style: &TextStyle) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            style: style.clone(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_in_order() {
        let mut s = RecordingSurface::new(CanvasSize::default());
        s.fill_rect(ProjectedPoint::new(0.0, 0.0), 800.0, 600.0, "#ffffff");
        s.text(
            "hello",
            &TextStyle::at(ProjectedPoint::new(1.0, 2.0), "#333333", 12.0),
        );
        assert_eq!(s.commands.len(), 2);
        assert!(matches!(s.commands[0], DrawCommand::FillRect { .. }));
        assert_eq!(s.texts().collect::<Vec<_>>(), vec!["hello"]);
    }

    #[test]
    fn commands_serialize_with_type_tag() {
        let cmd = DrawCommand::FillCircle {
            center: ProjectedPoint::new(1.0, 2.0),
            radius: 6.0,
            color: "#ff0000".into(),
        };
        let json = serde_json::to_string(&cmd).unwrap();
        assert!(json.contains("\"type\":\"FillCircle\""));
    }
}

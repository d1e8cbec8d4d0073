//! History statistics and the history plot.
//!
//! Samples are spaced by index, not by elapsed time: a gap of hours
//! between two readings takes the same horizontal space as a gap of
//! seconds.

use crate::axes::GridLine;
use crate::geometry::ProjectedPoint;
use crate::projector::CanvasSize;
use crate::surface::{RenderSurface, Stroke, TextAlign, TextStyle};
use crate::theme::Palette;
use chrono::{DateTime, TimeZone, Utc};
use ps_core::lerp;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const PLOT_HEIGHT: f64 = 300.0;
pub const PLOT_PADDING: f64 = 50.0;
const GRID_DIVISIONS: usize = 5;
const DOT_RADIUS: f64 = 3.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistorySample {
    pub timestamp: DateTime<Utc>,
    pub value: f64,
}

/// Which sensor a history belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoryKind {
    Temperature,
    Humidity,
}

impl HistoryKind {
    pub fn unit(self) -> &'static str {
        match self {
            HistoryKind::Temperature => "°C",
            HistoryKind::Humidity => "%",
        }
    }

    /// Series colour.
    pub fn color(self) -> &'static str {
        match self {
            HistoryKind::Temperature => "#FF5722",
            HistoryKind::Humidity => "#2196F3",
        }
    }
}

impl fmt::Display for HistoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HistoryKind::Temperature => write!(f, "temperature"),
            HistoryKind::Humidity => write!(f, "humidity"),
        }
    }
}

/// Summary of a series. `min`, `max` and `avg` are `None` when no finite
/// sample exists.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct HistoryStats {
    pub count: usize,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub avg: Option<f64>,
}

impl HistoryStats {
    pub fn from_values(values: impl IntoIterator<Item = f64>) -> Self {
        let mut count = 0usize;
        let mut sum = 0.0;
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for v in values.into_iter().filter(|v| v.is_finite()) {
            count += 1;
            sum += v;
            min = min.min(v);
            max = max.max(v);
        }
        if count == 0 {
            return Self::default();
        }
        Self {
            count,
            min: Some(min),
            max: Some(max),
            avg: Some(sum / count as f64),
        }
    }

    pub fn from_samples(samples: &[HistorySample]) -> Self {
        Self::from_values(samples.iter().map(|s| s.value))
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// One decimal, or `"N/A"` for a missing statistic.
pub fn format_stat(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.1}"),
        None => "N/A".to_string(),
    }
}

/// Laid-out history plot for a non-empty series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryPlot {
    pub kind: HistoryKind,
    pub size: CanvasSize,
    pub grid: Vec<GridLine>,
    pub series: Vec<ProjectedPoint>,
    pub time_labels: Vec<(String, ProjectedPoint)>,
}

impl HistoryPlot {
    /// Lay out `samples` on a plot `width` pixels wide.
    ///
    /// Non-finite samples are dropped and the rest sorted by timestamp.
    /// Returns `None` when nothing is left to plot. Time labels are
    /// formatted as `HH:MM` in `tz`.
    pub fn build<Tz>(
        samples: &[HistorySample],
        width: f64,
        kind: HistoryKind,
        tz: &Tz,
    ) -> Option<Self>
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        let mut data: Vec<HistorySample> = samples
            .iter()
            .copied()
            .filter(|s| s.value.is_finite())
            .collect();
        if data.is_empty() {
            return None;
        }
        data.sort_by_key(|s| s.timestamp);

        let stats = HistoryStats::from_samples(&data);
        let (min, max) = (stats.min?, stats.max?);
        let range = if max - min == 0.0 { 1.0 } else { max - min };

        let height = PLOT_HEIGHT;
        let pad = PLOT_PADDING;
        let inner_h = height - 2.0 * pad;

        let grid = (0..=GRID_DIVISIONS)
            .map(|i| {
                let frac = i as f64 / GRID_DIVISIONS as f64;
                let y = lerp(pad, height - pad, frac);
                let value = max - range * frac;
                GridLine {
                    from: ProjectedPoint::new(pad, y),
                    to: ProjectedPoint::new(width - pad, y),
                    label: format!("{value:.1}{}", kind.unit()),
                    label_pos: ProjectedPoint::new(pad - 10.0, y + 4.0),
                }
            })
            .collect();

        let n = data.len();
        // A lone sample sits on the left padding.
        let x_at = |i: usize| {
            if n > 1 {
                lerp(pad, width - pad, i as f64 / (n - 1) as f64)
            } else {
                pad
            }
        };
        let series = data
            .iter()
            .enumerate()
            .map(|(i, s)| {
                ProjectedPoint::new(x_at(i), pad + inner_h * (1.0 - (s.value - min) / range))
            })
            .collect();

        let mut indices = vec![0, n / 2, n - 1];
        indices.dedup();
        let time_labels = indices
            .into_iter()
            .map(|i| {
                let text = data[i]
                    .timestamp
                    .with_timezone(tz)
                    .format("%H:%M")
                    .to_string();
                (text, ProjectedPoint::new(x_at(i), height - pad + 20.0))
            })
            .collect();

        Some(Self {
            kind,
            size: CanvasSize { width, height },
            grid,
            series,
            time_labels,
        })
    }
}

/// Draw a history plot, or the centred `no_data` message when `plot` is
/// `None`.
pub fn draw_history<S: RenderSurface + ?Sized>(
    surface: &mut S,
    plot: Option<&HistoryPlot>,
    palette: &Palette,
    no_data: &str,
) {
    let size = surface.size();
    surface.fill_rect(
        ProjectedPoint::default(),
        size.width,
        size.height,
        &palette.history_background,
    );

    let Some(plot) = plot else {
        let style = TextStyle::at(
            ProjectedPoint::new(size.width / 2.0, size.height / 2.0),
            palette.text.as_str(),
            16.0,
        )
        .aligned(TextAlign::Center);
        surface.text(no_data, &style);
        return;
    };

    let grid_stroke = Stroke::dashed(palette.history_grid.as_str(), 1.0, 2.0, 2.0);
    for line in &plot.grid {
        surface.stroke_path(&[line.from, line.to], &grid_stroke);
        let style = TextStyle::at(line.label_pos, palette.text.as_str(), 12.0)
            .aligned(TextAlign::Right);
        surface.text(&line.label, &style);
    }

    let color = plot.kind.color();
    surface.stroke_path(&plot.series, &Stroke::solid(color, 2.0));
    for p in &plot.series {
        surface.fill_circle(*p, DOT_RADIUS, color);
    }

    for (text, pos) in &plot.time_labels {
        let style = TextStyle::at(*pos, palette.text.as_str(), 11.0).aligned(TextAlign::Center);
        surface.text(text, &style);
    }
}

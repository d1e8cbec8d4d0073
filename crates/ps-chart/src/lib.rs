//! ps-chart: psychrometric chart geometry and drawing.
//!
//! The chart plots dry-bulb temperature (x, −10…50 °C) against water vapour
//! partial pressure (y, 0…4 kPa) on a canonical 800×600 design surface that
//! is rescaled to the actual canvas.
//!
//! Provides:
//! - `ChartProjector`: (T, RH) / (T, Pv) → pixel mapping for the current canvas
//! - isoline synthesis: RH isopleths and enthalpy isenthalps with label anchors
//! - comfort-zone polygon, axes grid and measurement-point markers
//! - hit-testing of pointer positions against projected points
//! - history statistics and the history plot layout
//! - `RenderSurface`: the drawing seam; `RecordingSurface` records draw commands
//!
//! Geometry is rebuilt from scratch for every frame; nothing here caches
//! across renders.

pub mod axes;
pub mod comfort_zone;
pub mod error;
pub mod geometry;
pub mod history;
pub mod isolines;
pub mod markers;
pub mod projector;
pub mod scene;
pub mod surface;
pub mod theme;

// Re-exports for ergonomics
pub use axes::{AxesGrid, GridLine, axes_grid};
pub use comfort_zone::{ComfortZone, comfort_zone};
pub use error::{ChartError, ChartResult};
pub use geometry::ProjectedPoint;
pub use hit_test::{HOVER_RADIUS_PX, ViewRect, hit_test, pointer_to_canvas};
pub use history::{
    HistoryKind, HistoryPlot, HistorySample, HistoryStats, draw_history, format_stat,
};
pub use isolines::{
    ENTHALPY_TOLERANCE, Isoline, IsolineKind, IsolineLabel, find_isenthalp_states, isenthalps,
    rh_isopleths,
};
pub use markers::{PointMarker, point_marker};
pub use projector::{CanvasSize, ChartProjector};
pub use scene::{ChartOptions, ChartScene, DisplayMode, PlacedMarker, PlotPoint};
pub use surface::{DrawCommand, RecordingSurface, RenderSurface, Stroke, TextAlign, TextStyle};
pub use theme::Palette;

//! ps-card: the psychrometric chart card.
//!
//! Ties the property engine, comfort evaluation and chart geometry to a
//! configuration and to live sensor data:
//! - `CardConfig`: typed card options with defaults and validation
//! - `SensorSource`: entity state lookup (`StateSnapshot`, plain maps)
//! - `ChangeGate`: caller-owned change detection in front of re-renders
//! - `evaluate_points`: readings to `MeasurementPoint`s
//! - `HistoryProvider` and `load_history`: the 24 h history view
//! - `PsychroCard`: event handling (state update, resize, hover, history)

pub mod card;
pub mod config;
pub mod error;
pub mod gate;
pub mod history;
pub mod panel;
pub mod point;
pub mod sensor;
pub mod text;

pub use card::{PsychroCard, RenderOutcome};
pub use config::{CardConfig, PointConfig, load_config, load_json, load_yaml};
pub use error::{CardError, CardResult};
pub use gate::{ChangeGate, HUMIDITY_THRESHOLD_PCT, TEMPERATURE_THRESHOLD_C};
pub use history::{
    HISTORY_WINDOW_HOURS, HistoryError, HistoryProvider, HistoryView, RawHistoryEntry,
    RecordedHistory, load_history, parse_history,
};
pub use panel::{
    CardPanel, HistorySummary, Legend, LegendEntry, PanelRow, PointPanel, draw_history_view,
};
pub use point::{MeasurementPoint, evaluate_point, evaluate_points, read_state};
pub use sensor::{EntityAttributes, EntityState, SensorSource, StateSnapshot, parse_state};
pub use text::{BuiltinTranslator, Language, TextKey, Translator};

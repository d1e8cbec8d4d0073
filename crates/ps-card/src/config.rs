//! Card configuration.
//!
//! Keys are camelCase to match the dashboard card options. Every option
//! has an explicit default; only `points` is required to be non-empty.

use crate::error::{CardError, CardResult};
use crate::text::Language;
use ps_chart::{ChartOptions, DisplayMode, Palette};
use ps_comfort::{ComfortRange, DEFAULT_MASS_FLOW_KGPS};
use ps_core::ensure_finite;
use ps_core::units::{MassRate, kgps};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_POINT_COLOR: &str = "#ff0000";
pub const DEFAULT_POINT_ICON: &str = "mdi:thermometer";

/// One temperature/humidity sensor pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointConfig {
    /// Temperature entity id.
    pub temp: String,
    /// Relative humidity entity id.
    pub humidity: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl PointConfig {
    pub fn new(temp: impl Into<String>, humidity: impl Into<String>) -> Self {
        Self {
            temp: temp.into(),
            humidity: humidity.into(),
            label: None,
            color: None,
            icon: None,
        }
    }

    /// Configured label, or `"<temp> & <humidity>"`.
    pub fn label(&self) -> String {
        self.label
            .clone()
            .unwrap_or_else(|| format!("{} & {}", self.temp, self.humidity))
    }

    pub fn color(&self) -> &str {
        self.color.as_deref().unwrap_or(DEFAULT_POINT_COLOR)
    }

    pub fn icon(&self) -> &str {
        self.icon.as_deref().unwrap_or(DEFAULT_POINT_ICON)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardConfig {
    #[serde(default)]
    pub points: Vec<PointConfig>,
    #[serde(default)]
    pub comfort_range: ComfortRange,
    /// Air mass flow through the HVAC unit [kg/s].
    #[serde(default = "default_mass_flow_rate")]
    pub mass_flow_rate: f64,

    #[serde(default = "default_chart_title")]
    pub chart_title: String,
    #[serde(default = "default_true")]
    pub show_calculated_data: bool,
    #[serde(default = "default_true")]
    pub show_enthalpy: bool,
    #[serde(default = "default_true")]
    pub show_wet_bulb: bool,
    #[serde(default = "default_true")]
    pub show_dew_point: bool,
    #[serde(default = "default_true")]
    pub show_legend: bool,
    #[serde(default = "default_true")]
    pub show_mold_risk: bool,
    #[serde(default = "default_true")]
    pub show_point_labels: bool,
    #[serde(default)]
    pub dark_mode: bool,
    #[serde(default)]
    pub display_mode: DisplayMode,
    /// Language code; anything but `en` reads as French.
    #[serde(default = "default_language")]
    pub language: String,

    #[serde(default = "default_bg_color")]
    pub bg_color: String,
    #[serde(default = "default_grid_color")]
    pub grid_color: String,
    #[serde(default = "default_curve_color")]
    pub curve_color: String,
    #[serde(default = "default_text_color")]
    pub text_color: String,
    #[serde(default = "default_comfort_color")]
    pub comfort_color: String,
}

fn default_mass_flow_rate() -> f64 {
    DEFAULT_MASS_FLOW_KGPS
}

fn default_chart_title() -> String {
    "Diagramme Psychrométrique".to_string()
}

fn default_true() -> bool {
    true
}

fn default_language() -> String {
    "fr".to_string()
}

fn default_bg_color() -> String {
    Palette::light().background
}

fn default_grid_color() -> String {
    Palette::light().grid
}

fn default_curve_color() -> String {
    Palette::light().curve
}

fn default_text_color() -> String {
    Palette::light().text
}

fn default_comfort_color() -> String {
    Palette::light().comfort
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            points: Vec::new(),
            comfort_range: ComfortRange::default(),
            mass_flow_rate: default_mass_flow_rate(),
            chart_title: default_chart_title(),
            show_calculated_data: true,
            show_enthalpy: true,
            show_wet_bulb: true,
            show_dew_point: true,
            show_legend: true,
            show_mold_risk: true,
            show_point_labels: true,
            dark_mode: false,
            display_mode: DisplayMode::Standard,
            language: default_language(),
            bg_color: default_bg_color(),
            grid_color: default_grid_color(),
            curve_color: default_curve_color(),
            text_color: default_text_color(),
            comfort_color: default_comfort_color(),
        }
    }
}

impl CardConfig {
    pub fn with_points(points: Vec<PointConfig>) -> Self {
        Self {
            points,
            ..Self::default()
        }
    }

    /// Reject configurations the card cannot run with.
    pub fn validate(&self) -> CardResult<()> {
        if self.points.is_empty() {
            return Err(CardError::NoPointsConfigured);
        }
        for (i, p) in self.points.iter().enumerate() {
            if p.temp.trim().is_empty() || p.humidity.trim().is_empty() {
                return Err(CardError::InvalidConfig {
                    what: format!("points[{i}] needs both a temp and a humidity entity"),
                });
            }
        }
        ensure_finite(self.mass_flow_rate, "massFlowRate")?;
        if self.mass_flow_rate <= 0.0 {
            return Err(CardError::InvalidConfig {
                what: format!("massFlowRate must be positive, got {}", self.mass_flow_rate),
            });
        }
        self.comfort_range.validate()?;
        Ok(())
    }

    pub fn mass_flow(&self) -> MassRate {
        kgps(self.mass_flow_rate)
    }

    pub fn language(&self) -> Language {
        Language::from_code(&self.language)
    }

    /// Resolved palette: configured colours, then dark-mode substitutions.
    pub fn palette(&self) -> Palette {
        Palette {
            background: self.bg_color.clone(),
            grid: self.grid_color.clone(),
            curve: self.curve_color.clone(),
            text: self.text_color.clone(),
            comfort: self.comfort_color.clone(),
            ..Palette::light()
        }
        .with_dark_mode(self.dark_mode)
    }

    pub fn chart_options(&self, comfort_zone_label: impl Into<String>) -> ChartOptions {
        ChartOptions {
            show_enthalpy: self.show_enthalpy,
            show_dew_point: self.show_dew_point,
            show_point_labels: self.show_point_labels,
            display_mode: self.display_mode,
            comfort_zone_label: comfort_zone_label.into(),
        }
    }

    pub fn from_yaml_str(s: &str) -> CardResult<Self> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_str(s: &str) -> CardResult<Self> {
        let config: Self = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }
}

/// Load and validate a YAML card configuration.
pub fn load_yaml(path: &Path) -> CardResult<CardConfig> {
    let content = std::fs::read_to_string(path)?;
    CardConfig::from_yaml_str(&content)
}

/// Load and validate a JSON card configuration.
pub fn load_json(path: &Path) -> CardResult<CardConfig> {
    let content = std::fs::read_to_string(path)?;
    CardConfig::from_json_str(&content)
}

/// Pick the loader from the file extension; anything but `.json` is YAML.
pub fn load_config(path: &Path) -> CardResult<CardConfig> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => load_json(path),
        _ => load_yaml(path),
    }
}

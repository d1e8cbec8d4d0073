//! Colours used by the chart renderer.

use serde::{Deserialize, Serialize};

/// Chart colours. Strings are CSS colour literals passed through to the
/// surface untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Palette {
    pub background: String,
    pub grid: String,
    pub curve: String,
    pub text: String,
    pub comfort: String,
    pub saturation: String,
    pub isenthalp: String,
    pub isenthalp_label: String,
    pub comfort_label: String,
    pub point_outline: String,
    pub dew_marker: String,
    pub history_background: String,
    pub history_grid: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self::light()
    }
}

impl Palette {
    pub fn light() -> Self {
        Self {
            background: "#ffffff".into(),
            grid: "#cccccc".into(),
            curve: "#1f77b4".into(),
            text: "#333333".into(),
            comfort: "rgba(144, 238, 144, 0.5)".into(),
            saturation: "rgba(30, 144, 255, 0.8)".into(),
            isenthalp: "rgba(255, 99, 71, 0.7)".into(),
            isenthalp_label: "rgba(255, 99, 71, 0.9)".into(),
            comfort_label: "rgba(0, 0, 0, 0.7)".into(),
            point_outline: "#000000".into(),
            dew_marker: "rgba(0, 0, 255, 0.5)".into(),
            history_background: "#ffffff".into(),
            history_grid: "#e0e0e0".into(),
        }
    }

    pub fn dark() -> Self {
        Self::light().with_dark_mode(true)
    }

    /// Apply dark-mode substitutions on top of `self`.
    ///
    /// Dark mode forces background, text and grid; user-chosen curve and
    /// comfort colours survive.
    pub fn with_dark_mode(mut self, dark: bool) -> Self {
        if !dark {
            return self;
        }
        self.background = "#121212".into();
        self.text = "#ffffff".into();
        self.grid = "#333333".into();
        self.isenthalp = "rgba(255, 165, 0, 0.7)".into();
        self.isenthalp_label = "rgba(255, 165, 0, 0.9)".into();
        self.comfort_label = "rgba(255, 255, 255, 0.7)".into();
        self.point_outline = "#ffffff".into();
        self.history_background = "#1a1a1a".into();
        self.history_grid = "#333".into();
        self
    }
}

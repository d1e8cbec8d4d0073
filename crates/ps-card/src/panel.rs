//! Text shown around the chart: title, legend, per-point readouts and the
//! history summary.
//!
//! Display toggles from [`CardConfig`] decide which blocks and rows exist;
//! every label goes through the [`Translator`].

use crate::config::CardConfig;
use crate::history::HistoryView;
use crate::point::MeasurementPoint;
use crate::text::{TextKey, Translator};
use ps_chart::{Palette, RenderSurface, draw_history, format_stat};
use ps_core::units::as_watts;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendEntry {
    pub label: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub heading: String,
    pub entries: Vec<LegendEntry>,
}

/// One labelled value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanelRow {
    pub key: TextKey,
    pub label: String,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Entity whose history opens when the value is clicked.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub history_entity: Option<String>,
}

impl PanelRow {
    fn new(t: &dyn Translator, key: TextKey, value: String) -> Self {
        Self {
            key,
            label: t.text(key).to_string(),
            value,
            color: None,
            history_entity: None,
        }
    }

    fn colored(mut self, color: &str) -> Self {
        self.color = Some(color.to_string());
        self
    }

    fn opens_history(mut self, entity_id: &str) -> Self {
        self.history_entity = Some(entity_id.to_string());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PointPanel {
    pub label: String,
    pub color: String,
    pub icon: String,
    pub in_comfort_zone: bool,
    /// "Optimal comfort" or "Out of comfort", localized.
    pub status: String,
    /// Tooltip for the rows that open a history view.
    pub history_hint: String,
    pub rows: Vec<PanelRow>,
    /// Corrective action block; empty inside the comfort zone.
    pub actions: Vec<PanelRow>,
}

impl PointPanel {
    pub fn build(config: &CardConfig, t: &dyn Translator, p: &MeasurementPoint) -> Self {
        let props = &p.properties;
        let color = p.color.as_str();

        let mut rows = vec![
            PanelRow::new(
                t,
                TextKey::Temperature,
                format!("{:.1}°C", p.state.temperature()),
            )
            .colored(color)
            .opens_history(&p.temp_entity),
            PanelRow::new(
                t,
                TextKey::Humidity,
                format!("{:.1}%", p.state.relative_humidity()),
            )
            .colored(color)
            .opens_history(&p.humidity_entity),
            PanelRow::new(t, TextKey::DewPoint, format!("{:.1}°C", props.dew_point)),
        ];
        if config.show_wet_bulb {
            rows.push(PanelRow::new(
                t,
                TextKey::WetBulbTemp,
                format!("{:.1}°C", props.wet_bulb_temperature),
            ));
        }
        rows.extend([
            PanelRow::new(t, TextKey::Enthalpy, format!("{:.1} kJ/kg", props.enthalpy)),
            PanelRow::new(
                t,
                TextKey::WaterContent,
                format!("{:.4} kg/kg", props.humidity_ratio),
            ),
            PanelRow::new(
                t,
                TextKey::AbsoluteHumidity,
                format!("{:.2} g/m³", props.absolute_humidity),
            ),
            PanelRow::new(
                t,
                TextKey::SpecificVolume,
                format!("{:.3} m³/kg", props.specific_volume),
            ),
            PanelRow::new(t, TextKey::PmvIndex, format!("{:.2}", p.comfort_index)),
        ]);
        if config.show_mold_risk {
            let level = p.mold_risk.level();
            rows.push(
                PanelRow::new(t, TextKey::MoldRisk, t.text(level.into()).to_string())
                    .colored(level.color()),
            );
        }

        let c = &p.comfort;
        let mut actions = Vec::new();
        if !c.actions.is_empty() {
            actions.push(PanelRow::new(
                t,
                TextKey::Action,
                t.describe_actions(&c.actions),
            ));
            actions.push(
                PanelRow::new(
                    t,
                    TextKey::TotalPower,
                    format!("{:.1} W", as_watts(c.total_power)),
                )
                .colored(color),
            );
            for (key, power) in [
                (TextKey::Heating, c.heating_power),
                (TextKey::Cooling, c.cooling_power),
                (TextKey::Humidification, c.humidification_power),
                (TextKey::Dehumidification, c.dehumidification_power),
            ] {
                let w = as_watts(power);
                if w > 0.0 {
                    actions.push(PanelRow::new(t, key, format!("{w:.1} W")));
                }
            }
            actions.push(PanelRow::new(
                t,
                TextKey::IdealSetpoint,
                format!(
                    "{:.1}°C, {:.0}%",
                    p.ideal_setpoint.temperature, p.ideal_setpoint.relative_humidity
                ),
            ));
        }

        let status = if p.in_comfort_zone() {
            TextKey::OptimalComfort
        } else {
            TextKey::OutOfComfort
        };
        Self {
            label: p.label.clone(),
            color: p.color.clone(),
            icon: p.icon.clone(),
            in_comfort_zone: p.in_comfort_zone(),
            status: t.text(status).to_string(),
            history_hint: t.text(TextKey::ClickToViewHistory).to_string(),
            rows,
            actions,
        }
    }
}

/// Everything the card shows besides the canvas.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardPanel {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend: Option<Legend>,
    /// Empty when calculated data is hidden.
    pub points: Vec<PointPanel>,
}

impl CardPanel {
    pub fn build(config: &CardConfig, t: &dyn Translator, points: &[MeasurementPoint]) -> Self {
        let legend = config.show_legend.then(|| Legend {
            heading: t.text(TextKey::Legend).to_string(),
            entries: points
                .iter()
                .map(|p| LegendEntry {
                    label: p.label.clone(),
                    color: p.color.clone(),
                })
                .collect(),
        });
        let points = if config.show_calculated_data {
            points
                .iter()
                .map(|p| PointPanel::build(config, t, p))
                .collect()
        } else {
            Vec::new()
        };
        Self {
            title: config.chart_title.clone(),
            legend,
            points,
        }
    }
}

/// Localized min/avg/max block of the history view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistorySummary {
    /// Empty when there is no data.
    pub rows: Vec<PanelRow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_data: Option<String>,
    /// Period line, e.g. "Last 24 hours history (42 data points)".
    pub period: String,
}

impl HistorySummary {
    pub fn build(t: &dyn Translator, view: &HistoryView) -> Self {
        let unit = view.kind.unit();
        let stats = &view.stats;
        let period = format!(
            "{} ({} {})",
            t.text(TextKey::HistoryPeriod),
            stats.count,
            t.text(TextKey::DataPoints)
        );
        if stats.is_empty() {
            return Self {
                rows: Vec::new(),
                no_data: Some(t.text(TextKey::NoDataAvailable).to_string()),
                period,
            };
        }
        let rows = [
            (TextKey::Minimum, stats.min),
            (TextKey::Average, stats.avg),
            (TextKey::Maximum, stats.max),
        ]
        .into_iter()
        .map(|(key, v)| PanelRow::new(t, key, format!("{}{unit}", format_stat(v))))
        .collect();
        Self {
            rows,
            no_data: None,
            period,
        }
    }
}

/// Draw the history plot of `view`, or the localized "no data" message.
pub fn draw_history_view<S: RenderSurface + ?Sized>(
    surface: &mut S,
    view: &HistoryView,
    palette: &Palette,
    t: &dyn Translator,
) {
    draw_history(
        surface,
        view.plot.as_ref(),
        palette,
        t.text(TextKey::NoDataAvailable),
    );
}

use chrono::{TimeZone, Utc};
use futures::executor::block_on;
use ps_card::*;
use ps_chart::{DrawCommand, RecordingSurface};
use ps_comfort::{HvacAction, MoldRiskLevel};

const CONFIG: &str = r##"
points:
  - temp: sensor.salon_temperature
    humidity: sensor.salon_humidity
    label: Salon
    color: "#e91e63"
  - temp: sensor.cave_temperature
    humidity: sensor.cave_humidity
    label: Cave
  - temp: sensor.garage_temperature
    humidity: sensor.garage_humidity
language: en
displayMode: advanced
"##;

fn states() -> StateSnapshot {
    StateSnapshot::new()
        .with("sensor.salon_temperature", "22.0")
        .with("sensor.salon_humidity", "50")
        .with("sensor.cave_temperature", "15")
        .with("sensor.cave_humidity", "70")
        .with("sensor.garage_temperature", "unavailable")
        .with("sensor.garage_humidity", "60")
}

#[test]
fn renders_valid_points_and_drops_missing() {
    let config = CardConfig::from_yaml_str(CONFIG).unwrap();
    let mut card = PsychroCard::new(config).unwrap();
    let mut surface = RecordingSurface::new(card.canvas());
    let outcome = card.render(&states(), &mut surface).unwrap();
    assert_eq!(outcome, RenderOutcome::Rendered { valid_points: 2 });

    let salon = &card.points()[0];
    assert!(salon.in_comfort_zone());
    assert_eq!(salon.comfort.actions, Vec::<HvacAction>::new());

    let cave = &card.points()[1];
    assert!(cave.comfort.has_action(HvacAction::Heat));
    assert_eq!(cave.mold_risk.level(), MoldRiskLevel::High);
    assert_eq!(
        card.translator().describe_actions(&cave.comfort.actions),
        "Heat and Dehumidify"
    );

    let texts: Vec<&str> = surface.texts().collect();
    assert!(texts.contains(&"Comfort zone"));
    assert!(texts.contains(&"Salon"));
    assert!(texts.contains(&"Cave"));
}

#[test]
fn frame_exports_as_json() {
    let config = CardConfig::from_yaml_str(CONFIG).unwrap();
    let mut card = PsychroCard::new(config).unwrap();
    let mut surface = RecordingSurface::new(card.canvas());
    card.render(&states(), &mut surface).unwrap();
    let json = serde_json::to_string(&surface).unwrap();
    let back: RecordingSurface = serde_json::from_str(&json).unwrap();
    assert_eq!(back.commands.len(), surface.commands.len());
    assert!(matches!(back.commands[0], DrawCommand::FillRect { .. }));
}

#[test]
fn history_modal_for_clicked_sensor() {
    let config = CardConfig::from_yaml_str(CONFIG).unwrap();
    let card = PsychroCard::new(config).unwrap();
    let now = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
    let mut history = RecordedHistory::new();
    history.insert(
        "sensor.cave_temperature",
        (0..6)
            .map(|i| {
                RawHistoryEntry::new(
                    format!("{}", 14.0 + i as f64 * 0.5),
                    now - chrono::Duration::hours(i),
                )
            })
            .collect(),
    );

    let view = block_on(card.open_history(&history, "sensor.cave_temperature", now, 600.0));
    assert_eq!(view.kind, ps_chart::HistoryKind::Temperature);
    assert_eq!(view.stats.count, 6);
    assert_eq!(view.stats.min, Some(14.0));
    assert_eq!(view.stats.max, Some(16.5));
    let plot = view.plot.unwrap();
    assert_eq!(plot.series.len(), 6);
    // Oldest sample (highest value) first after sorting.
    assert!(plot.series[0].y < plot.series[5].y);

    let empty = block_on(card.open_history(&history, "sensor.cave_humidity", now, 600.0));
    assert!(empty.plot.is_none());
    assert_eq!(ps_chart::format_stat(empty.stats.avg), "N/A");
}

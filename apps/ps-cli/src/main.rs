use chrono::{DateTime, Local, Utc};
use clap::{Parser, Subcommand, ValueEnum};
use futures::executor::block_on;
use ps_card::{
    BuiltinTranslator, CardError, CardPanel, HistoryError, HistorySummary, Language,
    PanelRow, PointPanel, PsychroCard, RecordedHistory, SensorSource, StateSnapshot, Translator,
    draw_history_view, load_config, load_history,
};
use ps_chart::history::PLOT_HEIGHT;
use ps_chart::{CanvasSize, HistoryKind, Palette, RecordingSurface};
use ps_core::units::as_kgps;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

#[derive(Error, Debug)]
enum CliError {
    #[error(transparent)]
    Card(#[from] CardError),

    /// A card condition with its localized message.
    #[error("{message}")]
    Reported {
        message: String,
        #[source]
        source: CardError,
    },

    #[error(transparent)]
    History(#[from] HistoryError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

type CliResult<T> = Result<T, CliError>;

#[derive(Parser)]
#[command(name = "ps-cli")]
#[command(
    about = "Psychrometric chart CLI - evaluate sensor pairs and render chart frames",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a card configuration file
    Validate {
        /// Path to the card YAML (or .json) file
        config_path: PathBuf,
    },
    /// Evaluate every configured point against a state snapshot
    Evaluate {
        /// Path to the card YAML (or .json) file
        config_path: PathBuf,
        /// Entity states as JSON: {"sensor.x": {"state": "21.5"}, ...}
        #[arg(long)]
        states: PathBuf,
        /// Print the evaluated points as JSON
        #[arg(long)]
        json: bool,
    },
    /// Render one chart frame as JSON draw commands
    Render {
        /// Path to the card YAML (or .json) file
        config_path: PathBuf,
        /// Entity states as JSON
        #[arg(long)]
        states: PathBuf,
        /// Container width in CSS pixels (default: 800x600 canvas)
        #[arg(long)]
        width: Option<f64>,
        /// Output file (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Summarize the last 24 h of a saved history response
    History {
        /// History API response (JSON, one list per entity)
        history_path: PathBuf,
        /// Entity to summarize
        #[arg(long)]
        entity: String,
        /// Series kind
        #[arg(long, value_enum, default_value_t = Kind::Temperature)]
        kind: Kind,
        /// End of the 24 h window, RFC 3339 (defaults to now)
        #[arg(long)]
        now: Option<DateTime<Utc>>,
        /// Plot width in pixels
        #[arg(long, default_value_t = 600.0)]
        width: f64,
        /// Language of the summary labels
        #[arg(long, default_value = "fr")]
        language: String,
        /// Also write the history plot frame (JSON draw commands) here
        #[arg(long)]
        frame: Option<PathBuf>,
        /// Print the full history view as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Kind {
    Temperature,
    Humidity,
}

impl From<Kind> for HistoryKind {
    fn from(k: Kind) -> Self {
        match k {
            Kind::Temperature => HistoryKind::Temperature,
            Kind::Humidity => HistoryKind::Humidity,
        }
    }
}

fn main() -> CliResult<()> {
    // Logs go to stderr so JSON output on stdout stays clean
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { config_path } => cmd_validate(&config_path),
        Commands::Evaluate {
            config_path,
            states,
            json,
        } => cmd_evaluate(&config_path, &states, json),
        Commands::Render {
            config_path,
            states,
            width,
            output,
        } => cmd_render(&config_path, &states, width, output.as_deref()),
        Commands::History {
            history_path,
            entity,
            kind,
            now,
            width,
            language,
            frame,
            json,
        } => cmd_history(
            &history_path,
            &entity,
            kind.into(),
            now.unwrap_or_else(Utc::now),
            width,
            Language::from_code(&language),
            frame.as_deref(),
            json,
        ),
    }
}

/// Replace the card's own conditions with their localized message.
fn localized(t: &dyn Translator, err: CardError) -> CliError {
    match err.text_key() {
        Some(key) => CliError::Reported {
            message: t.text(key).to_string(),
            source: err,
        },
        None => CliError::Card(err),
    }
}

/// Load a config; an empty point list is reported in the default language
/// since the configured one is not trusted yet.
fn load_card(config_path: &Path) -> CliResult<PsychroCard> {
    let config =
        load_config(config_path).map_err(|e| localized(&BuiltinTranslator::default(), e))?;
    Ok(PsychroCard::new(config)?)
}

fn load_states(path: &Path) -> CliResult<StateSnapshot> {
    let content = std::fs::read_to_string(path)?;
    Ok(StateSnapshot::from_json_str(&content)?)
}

fn cmd_validate(config_path: &Path) -> CliResult<()> {
    println!("Validating card config: {}", config_path.display());
    let card = load_card(config_path)?;
    let config = card.config();
    println!("✓ Config is valid");
    println!("  Points: {}", config.points.len());
    let r = &config.comfort_range;
    println!(
        "  Comfort range: {}–{} °C, {}–{} %",
        r.temp_min, r.temp_max, r.rh_min, r.rh_max
    );
    println!("  Mass flow: {:.2} kg/s", as_kgps(config.mass_flow()));
    Ok(())
}

fn cmd_evaluate(config_path: &Path, states_path: &Path, json: bool) -> CliResult<()> {
    let card = load_card(config_path)?;
    let states = load_states(states_path)?;
    let t = card.translator();
    let points = card.evaluate(&states).map_err(|e| localized(t, e))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&points)?);
        return Ok(());
    }

    let panel = CardPanel::build(card.config(), t, &points);
    println!("{}", panel.title);
    if let Some(legend) = &panel.legend {
        println!("{}:", legend.heading);
        for entry in &legend.entries {
            println!("  ● {} ({})", entry.label, entry.color);
        }
    }
    for (p, block) in points.iter().zip(&panel.points) {
        let name = states
            .friendly_name(&p.temp_entity)
            .unwrap_or(block.label.as_str());
        print_point(name, block);
    }
    Ok(())
}

fn print_point(name: &str, p: &PointPanel) {
    println!();
    println!("{name}  [{}]", p.status);
    for row in &p.rows {
        print_row("  ", row);
    }
    for row in &p.actions {
        print_row("    ", row);
    }
}

fn print_row(indent: &str, row: &PanelRow) {
    println!("{indent}{}: {}", row.label, row.value);
}

fn cmd_render(
    config_path: &Path,
    states_path: &Path,
    width: Option<f64>,
    output: Option<&Path>,
) -> CliResult<()> {
    let mut card = load_card(config_path)?;
    let states = load_states(states_path)?;

    let rendered = match width {
        Some(w) => {
            let mut surface = RecordingSurface::new(CanvasSize::for_container(w));
            card.on_resize(w, &states, &mut surface).map(|_| surface)
        }
        None => {
            let mut surface = RecordingSurface::new(card.canvas());
            card.render(&states, &mut surface).map(|_| surface)
        }
    };
    let surface = rendered.map_err(|e| localized(card.translator(), e))?;
    tracing::debug!(commands = surface.commands.len(), "frame recorded");

    let content = serde_json::to_string_pretty(&surface)?;
    match output {
        Some(path) => {
            std::fs::write(path, content)?;
            eprintln!(
                "✓ Wrote {} draw commands to {}",
                surface.commands.len(),
                path.display()
            );
        }
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{content}")?;
        }
    }
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn cmd_history(
    history_path: &Path,
    entity: &str,
    kind: HistoryKind,
    now: DateTime<Utc>,
    width: f64,
    language: Language,
    frame: Option<&Path>,
    json: bool,
) -> CliResult<()> {
    let content = std::fs::read_to_string(history_path)?;
    let history = RecordedHistory::from_json_str(&content)?;
    let view = block_on(load_history(&history, entity, kind, now, width, &Local));
    let t = BuiltinTranslator::new(language);

    if let Some(path) = frame {
        let mut surface = RecordingSurface::new(CanvasSize {
            width,
            height: PLOT_HEIGHT,
        });
        draw_history_view(&mut surface, &view, &Palette::light(), &t);
        std::fs::write(path, serde_json::to_string_pretty(&surface)?)?;
        eprintln!("✓ Wrote history frame to {}", path.display());
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    let summary = HistorySummary::build(&t, &view);
    println!("{entity} ({kind})");
    if let Some(no_data) = &summary.no_data {
        println!("  {no_data}");
        return Ok(());
    }
    for row in &summary.rows {
        print_row("  ", row);
    }
    println!("  {}", summary.period);
    Ok(())
}

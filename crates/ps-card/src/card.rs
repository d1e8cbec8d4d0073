//! Card controller: reacts to state updates, resizes and pointer events.

use crate::config::CardConfig;
use crate::error::CardResult;
use crate::gate::ChangeGate;
use crate::history::{HistoryProvider, HistoryView, load_history};
use crate::panel::{CardPanel, HistorySummary, draw_history_view};
use crate::point::{MeasurementPoint, evaluate_points};
use crate::sensor::SensorSource;
use crate::text::{BuiltinTranslator, TextKey, Translator};
use chrono::{DateTime, Local, Utc};
use ps_chart::{
    CanvasSize, ChartScene, HistoryKind, Palette, PlotPoint, ProjectedPoint, RenderSurface,
    ViewRect, pointer_to_canvas,
};
use tracing::{debug, info};

/// Outcome of an update event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
    /// The change gate found nothing worth redrawing.
    Skipped,
    Rendered { valid_points: usize },
}

pub struct PsychroCard {
    config: CardConfig,
    palette: Palette,
    translator: Box<dyn Translator>,
    canvas: CanvasSize,
    points: Vec<MeasurementPoint>,
    scene: Option<ChartScene>,
}

impl PsychroCard {
    /// Build a card from a validated configuration.
    pub fn new(config: CardConfig) -> CardResult<Self> {
        config.validate()?;
        let translator = Box::new(BuiltinTranslator::new(config.language()));
        Ok(Self {
            palette: config.palette(),
            config,
            translator,
            canvas: CanvasSize::default(),
            points: Vec::new(),
            scene: None,
        })
    }

    pub fn with_translator(mut self, translator: Box<dyn Translator>) -> Self {
        self.translator = translator;
        self
    }

    pub fn config(&self) -> &CardConfig {
        &self.config
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn translator(&self) -> &dyn Translator {
        self.translator.as_ref()
    }

    /// Current canvas size; surfaces passed to the card should match it.
    pub fn canvas(&self) -> CanvasSize {
        self.canvas
    }

    /// Points accepted by the last successful render.
    pub fn points(&self) -> &[MeasurementPoint] {
        &self.points
    }

    pub fn scene(&self) -> Option<&ChartScene> {
        self.scene.as_ref()
    }

    /// Evaluate without drawing or touching card state.
    pub fn evaluate<S: SensorSource + ?Sized>(
        &self,
        source: &S,
    ) -> CardResult<Vec<MeasurementPoint>> {
        evaluate_points(&self.config, source)
    }

    /// Title, legend and readouts for the points of the last render.
    pub fn panel(&self) -> CardPanel {
        CardPanel::build(&self.config, self.translator.as_ref(), &self.points)
    }

    /// Evaluate and draw unconditionally.
    pub fn render<S, R>(&mut self, source: &S, surface: &mut R) -> CardResult<RenderOutcome>
    where
        S: SensorSource + ?Sized,
        R: RenderSurface + ?Sized,
    {
        let points = evaluate_points(&self.config, source)?;
        let plot_points: Vec<PlotPoint> = points
            .iter()
            .map(MeasurementPoint::to_plot_point)
            .collect();
        let options = self
            .config
            .chart_options(self.translator.text(TextKey::ComfortZone));
        let scene = ChartScene::build(
            self.canvas,
            &self.config.comfort_range,
            &plot_points,
            options,
        );
        scene.draw(surface, &self.palette);

        let valid_points = points.len();
        info!(
            valid_points,
            width = self.canvas.width,
            height = self.canvas.height,
            "chart rendered"
        );
        self.points = points;
        self.scene = Some(scene);
        Ok(RenderOutcome::Rendered { valid_points })
    }

    /// New sensor states. Redraws only when `gate` reports a significant
    /// change, and records the new baseline after a successful render.
    pub fn on_state_update<S, R>(
        &mut self,
        source: &S,
        gate: &mut ChangeGate,
        surface: &mut R,
    ) -> CardResult<RenderOutcome>
    where
        S: SensorSource + ?Sized,
        R: RenderSurface + ?Sized,
    {
        if !gate.should_update(&self.config.points, source) {
            debug!("no significant sensor change, render skipped");
            return Ok(RenderOutcome::Skipped);
        }
        let outcome = self.render(source, surface)?;
        gate.record(&self.config.points, source);
        Ok(outcome)
    }

    /// Container resized. Always redraws.
    pub fn on_resize<S, R>(
        &mut self,
        container_width: f64,
        source: &S,
        surface: &mut R,
    ) -> CardResult<RenderOutcome>
    where
        S: SensorSource + ?Sized,
        R: RenderSurface + ?Sized,
    {
        self.canvas = CanvasSize::for_container(container_width);
        debug!(
            width = self.canvas.width,
            height = self.canvas.height,
            "canvas resized"
        );
        self.render(source, surface)
    }

    /// Point under a canvas-space pointer position.
    pub fn hover(&self, pointer: ProjectedPoint) -> Option<&MeasurementPoint> {
        let index = self.scene.as_ref()?.hover(pointer)?;
        self.points.get(index)
    }

    /// Point under a client-space pointer position on a CSS-scaled canvas.
    pub fn hover_client(
        &self,
        client_x: f64,
        client_y: f64,
        view: &ViewRect,
    ) -> Option<&MeasurementPoint> {
        let pointer = pointer_to_canvas(client_x, client_y, view, self.canvas)?;
        self.hover(pointer)
    }

    /// Which history series an entity belongs to: temperature if any point
    /// uses it as its temperature sensor, humidity otherwise.
    pub fn history_kind(&self, entity_id: &str) -> HistoryKind {
        if self.config.points.iter().any(|p| p.temp == entity_id) {
            HistoryKind::Temperature
        } else {
            HistoryKind::Humidity
        }
    }

    /// Load the 24 h history shown when a sensor value is clicked.
    pub async fn open_history<P: HistoryProvider>(
        &self,
        provider: &P,
        entity_id: &str,
        now: DateTime<Utc>,
        plot_width: f64,
    ) -> HistoryView {
        load_history(
            provider,
            entity_id,
            self.history_kind(entity_id),
            now,
            plot_width,
            &Local,
        )
        .await
    }

    /// Min/avg/max block of a loaded history view.
    pub fn history_summary(&self, view: &HistoryView) -> HistorySummary {
        HistorySummary::build(self.translator.as_ref(), view)
    }

    /// Draw the history plot, or the localized "no data" message when the
    /// view has nothing to plot.
    pub fn draw_history<R: RenderSurface + ?Sized>(&self, view: &HistoryView, surface: &mut R) {
        draw_history_view(surface, view, &self.palette, self.translator.as_ref());
    }
}

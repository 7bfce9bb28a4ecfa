// File: crates/chart-core/src/chart.rs
// Summary: UsageChart owns the pipeline state (generate -> scale -> layout -> build -> attach) and its entry points.

use std::time::Instant;

use crate::axis::{compute_axis, AxisSpec};
use crate::config::ChartConfig;
use crate::error::{ChartError, ChartResult};
use crate::generator::{SampleSource, Series};
use crate::geometry::{self, Geometry};
use crate::interaction::{HoverChange, HoverState, InteractionController, PointerEvent, Tooltip};
use crate::layout::layout;
use crate::render::{Frame, RenderTarget};
use crate::scheduler::Debouncer;
use crate::theme::Theme;
use crate::types::Viewport;

pub struct UsageChart {
    config: ChartConfig,
    theme: Theme,
    source: Box<dyn SampleSource>,
    range: u32,
    series: Series,
    axis: AxisSpec,
    /// Snapshot from the last render, replaced wholesale on the next.
    geometry: Option<Geometry>,
    viewport: Viewport,
    interaction: InteractionController,
    resize: Debouncer,
}

impl UsageChart {
    /// Loads the initial range; nothing is drawn until the first `render`.
    pub fn new(config: ChartConfig, theme: Theme, source: Box<dyn SampleSource>) -> ChartResult<Self> {
        validate_range(&config, config.initial_range)?;
        let range = config.initial_range;
        let series = source.series(range)?;
        let axis = compute_axis(series.max_value() as f64);
        let interaction = InteractionController::new(config.tooltip_offset, config.value_unit.clone());
        let resize = Debouncer::new(config.resize_debounce);
        Ok(Self {
            config,
            theme,
            source,
            range,
            series,
            axis,
            geometry: None,
            viewport: Viewport::default(),
            interaction,
            resize,
        })
    }

    /// Swap the data window and redraw synchronously.
    pub fn set_range(&mut self, days: u32, target: &mut dyn RenderTarget) -> ChartResult<()> {
        if let Err(e) = validate_range(&self.config, days) {
            tracing::warn!(days, error = %e, "rejected range change");
            return Err(e);
        }
        let series = self.source.series(days)?;
        let axis = compute_axis(series.max_value() as f64);
        tracing::debug!(days, nice_max = axis.nice_max, step = axis.step, "range changed");
        self.range = days;
        self.series = series;
        self.axis = axis;
        self.interaction.reset();
        self.render(target)
    }

    /// Re-layout against the target's current size and present the new frame.
    pub fn render(&mut self, target: &mut dyn RenderTarget) -> ChartResult<()> {
        self.viewport = target.size();
        self.geometry = layout(self.viewport, &self.series, &self.axis, &self.config.layout)
            .map(|l| geometry::build(&l, &self.series, &self.config.geometry));
        let zones = self.geometry.as_ref().map(|g| g.hover_zones.clone()).unwrap_or_default();
        let hover = self.interaction.attach(zones, &self.series);
        tracing::debug!(
            viewport = ?self.viewport,
            bars = self.geometry.as_ref().map_or(0, |g| g.bars.len()),
            ?hover,
            "frame built"
        );
        self.present(target)
    }

    /// Present the current snapshot again without re-layout (hover highlight, tooltip).
    pub fn present(&self, target: &mut dyn RenderTarget) -> ChartResult<()> {
        let frame = Frame {
            viewport: self.viewport,
            geometry: self.geometry.as_ref(),
            highlighted: self.interaction.active_index(),
            tooltip: self.interaction.tooltip(),
        };
        target.present(&frame, &self.theme)
    }

    pub fn pointer_moved(&mut self, x: f32, y: f32) -> HoverChange {
        self.interaction.handle(PointerEvent::Moved { x, y }, &self.series)
    }

    pub fn pointer_left(&mut self) -> HoverChange {
        self.interaction.handle(PointerEvent::Left, &self.series)
    }

    /// Container was resized; the redraw happens in `poll` once resizing settles.
    pub fn notify_resize(&mut self, now: Instant) {
        self.resize.trigger(now);
    }

    /// Run the debounced redraw if it is due. Returns true when a redraw happened.
    pub fn poll(&mut self, now: Instant, target: &mut dyn RenderTarget) -> ChartResult<bool> {
        if self.resize.poll(now) {
            self.render(target)?;
            return Ok(true);
        }
        Ok(false)
    }

    /// When the host loop should next call `poll`.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.resize.deadline()
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    pub fn theme(&self) -> &Theme { &self.theme }
    pub fn config(&self) -> &ChartConfig { &self.config }
    pub fn range(&self) -> u32 { self.range }
    pub fn series(&self) -> &Series { &self.series }
    pub fn axis(&self) -> AxisSpec { self.axis }
    pub fn geometry(&self) -> Option<&Geometry> { self.geometry.as_ref() }
    pub fn hover(&self) -> HoverState { self.interaction.state() }
    pub fn tooltip(&self) -> &Tooltip { self.interaction.tooltip() }
}

fn validate_range(config: &ChartConfig, days: u32) -> ChartResult<()> {
    if days == 0 || !config.is_supported(days) {
        return Err(ChartError::InvalidRange { days, supported: config.supported_ranges.clone() });
    }
    Ok(())
}

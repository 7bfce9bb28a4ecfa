// File: crates/chart-core/src/layout.rs
// Summary: Chart layout engine; bar slots, tick positions and label thinning for one viewport.

use std::collections::BTreeMap;

use crate::axis::AxisSpec;
use crate::generator::Series;
use crate::scale::{BandScale, ValueScale};
use crate::types::{Insets, RectF, Viewport};

/// How many x labels to skip per range size. Coarser windows get larger strides.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LabelCadence {
    every: BTreeMap<u32, usize>,
}

impl LabelCadence {
    pub fn new(entries: impl IntoIterator<Item = (u32, usize)>) -> Self {
        Self { every: entries.into_iter().map(|(range, n)| (range, n.max(1))).collect() }
    }

    pub fn with_entry(mut self, range: u32, every: usize) -> Self {
        self.every.insert(range, every.max(1));
        self
    }

    /// Label stride for `range` days; 1 for ranges not in the table.
    pub fn every(&self, range: u32) -> usize {
        self.every.get(&range).copied().unwrap_or(1)
    }
}

impl Default for LabelCadence {
    fn default() -> Self {
        Self::new([(1, 1), (7, 1), (14, 2), (30, 5), (90, 15)])
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LayoutConfig {
    pub insets: Insets,
    /// Fraction of the slot left empty between bars.
    pub bar_gap_ratio: f32,
    /// Bars never grow wider than this; extra slot space becomes gap.
    pub max_bar_width: f32,
    pub label_cadence: LabelCadence,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            insets: Insets::default(),
            bar_gap_ratio: 0.02,
            max_bar_width: 80.0,
            label_cadence: LabelCadence::default(),
        }
    }
}

/// Pointer hit region for one sample: the whole slot column.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HoverZone {
    pub rect: RectF,
    pub index: usize,
}

/// Horizontal gridline position for an axis tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tick {
    pub y: f32,
    pub value: f64,
}

/// Pixel placement of one series on one viewport.
#[derive(Clone, Debug)]
pub struct Layout {
    pub viewport: Viewport,
    /// Usable chart area inside the margins.
    pub plot: RectF,
    pub band: BandScale,
    pub values: ValueScale,
    /// One rect per sample, bottom-aligned to `plot.bottom()`.
    pub bars: Vec<RectF>,
    pub hover_zones: Vec<HoverZone>,
    /// Ascending by value, so the first tick sits on the baseline.
    pub ticks: Vec<Tick>,
    /// Sample indices that get an x label.
    pub labelled: Vec<usize>,
    pub label_every: usize,
}

impl Layout {
    pub fn slot_width(&self) -> f32 {
        self.band.slot_width
    }
}

/// Lay out `series` on `viewport`. `None` when there is nothing to draw yet
/// (collapsed container, margins eating the whole surface, or no samples).
pub fn layout(viewport: Viewport, series: &Series, axis: &AxisSpec, config: &LayoutConfig) -> Option<Layout> {
    if viewport.is_empty() {
        tracing::debug!(?viewport, "empty viewport, skipping layout");
        return None;
    }
    let insets = config.insets;
    let plot_w = viewport.width as f32 - insets.hsum() as f32;
    let plot_h = viewport.height as f32 - insets.vsum() as f32;
    if plot_w <= 0.0 || plot_h <= 0.0 || series.is_empty() {
        tracing::debug!(?viewport, samples = series.len(), "no room for bars, skipping layout");
        return None;
    }

    let plot = RectF::new(insets.left as f32, insets.top as f32, plot_w, plot_h);
    let band = BandScale::new(plot.x, plot.width, series.len());
    let values = ValueScale::new(plot.y, plot.bottom(), axis.nice_max);

    let slot = band.slot_width;
    let bar_w = (slot * (1.0 - config.bar_gap_ratio)).min(config.max_bar_width).max(0.0);
    let bars = series
        .iter()
        .enumerate()
        .map(|(i, s)| {
            let h = values.length(s.value as f64);
            RectF::new(band.slot_center(i) - bar_w * 0.5, plot.bottom() - h, bar_w, h)
        })
        .collect::<Vec<_>>();

    // Each zone ends where the next begins, so the columns tile the plot exactly.
    let hover_zones = (0..series.len())
        .map(|i| {
            let left = band.slot_left(i);
            let right = if i + 1 == series.len() { plot.right() } else { band.slot_left(i + 1) };
            HoverZone { rect: RectF::new(left, plot.y, right - left, plot.height), index: i }
        })
        .collect::<Vec<_>>();

    let ticks = axis
        .ticks()
        .into_iter()
        .map(|value| Tick { y: values.to_px(value), value })
        .collect::<Vec<_>>();

    let label_every = config.label_cadence.every(series.len() as u32);
    let last = series.len() - 1;
    let labelled = (0..series.len()).filter(|i| (last - i) % label_every == 0).collect::<Vec<_>>();

    Some(Layout { viewport, plot, band, values, bars, hover_zones, ticks, labelled, label_every })
}

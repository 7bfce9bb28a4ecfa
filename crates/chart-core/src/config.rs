// File: crates/chart-core/src/config.rs
// Summary: Chart configuration: selectable ranges, layout constants, tooltip and resize behavior.

use std::time::Duration;

use crate::geometry::GeometryStyle;
use crate::layout::{LabelCadence, LayoutConfig};
use crate::scheduler::DEFAULT_RESIZE_DEBOUNCE;
use crate::types::Insets;

/// Default range offered by the selector on first render.
pub const DEFAULT_RANGE: u32 = 30;

#[derive(Clone, Debug, PartialEq)]
pub struct ChartConfig {
    /// Range sizes (in days) the selector offers; `set_range` rejects anything else.
    pub supported_ranges: Vec<u32>,
    pub initial_range: u32,
    pub layout: LayoutConfig,
    pub geometry: GeometryStyle,
    /// Tooltip position relative to the pointer.
    pub tooltip_offset: (f32, f32),
    pub resize_debounce: Duration,
    /// Suffix of the tooltip value, e.g. `12,345 tokens`.
    pub value_unit: String,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            supported_ranges: vec![7, 30, 90],
            initial_range: DEFAULT_RANGE,
            layout: LayoutConfig::default(),
            geometry: GeometryStyle::default(),
            tooltip_offset: (12.0, -28.0),
            resize_debounce: DEFAULT_RESIZE_DEBOUNCE,
            value_unit: "tokens".to_string(),
        }
    }
}

impl ChartConfig {
    pub fn with_supported_ranges(mut self, ranges: impl Into<Vec<u32>>) -> Self {
        self.supported_ranges = ranges.into();
        self
    }

    pub fn with_initial_range(mut self, days: u32) -> Self {
        self.initial_range = days;
        self
    }

    pub fn with_insets(mut self, insets: Insets) -> Self {
        self.layout.insets = insets;
        self
    }

    pub fn with_label_cadence(mut self, cadence: LabelCadence) -> Self {
        self.layout.label_cadence = cadence;
        self
    }

    pub fn with_corner_radius(mut self, radius: f32) -> Self {
        self.geometry.corner_radius = radius;
        self
    }

    pub fn with_resize_debounce_ms(mut self, ms: u64) -> Self {
        self.resize_debounce = Duration::from_millis(ms);
        self
    }

    pub fn with_value_unit(mut self, unit: impl Into<String>) -> Self {
        self.value_unit = unit.into();
        self
    }

    pub fn is_supported(&self, days: u32) -> bool {
        self.supported_ranges.contains(&days)
    }
}

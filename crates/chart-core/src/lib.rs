// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports the usage chart pipeline and its building blocks.

pub mod axis;
pub mod chart;
pub mod config;
pub mod error;
pub mod format;
pub mod generator;
pub mod geometry;
pub mod interaction;
pub mod layout;
pub mod render;
pub mod scale;
pub mod scheduler;
pub mod telemetry;
pub mod text;
pub mod theme;
pub mod types;

pub use axis::{compute_axis, AxisSpec};
pub use chart::UsageChart;
pub use config::ChartConfig;
pub use error::{ChartError, ChartResult};
pub use generator::{generate, Sample, SampleSource, Series, SyntheticUsage};
pub use geometry::{BarShape, Geometry, GeometryStyle};
pub use interaction::{locate_pointer, transition, HoverChange, HoverState, InteractionController, PointerEvent, Tooltip};
pub use layout::{layout, LabelCadence, Layout, LayoutConfig};
pub use render::{Frame, RasterSurface, RecordingTarget, RenderTarget};
pub use scheduler::{Debouncer, TaskHandle, TimerQueue};
pub use theme::Theme;
pub use types::{Insets, RectF, Viewport};

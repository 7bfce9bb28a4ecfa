// File: crates/chart-core/src/error.rs
// Summary: Error taxonomy for the chart engine.

use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    /// Zero days, or a window the range selector does not offer.
    /// `supported` is empty when any positive range would do.
    #[error("invalid range: {days} days")]
    InvalidRange { days: u32, supported: Vec<u32> },

    #[error("series dates are not consecutive at index {index}")]
    NonConsecutiveDates { index: usize },

    #[error("render failed: {0}")]
    Render(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

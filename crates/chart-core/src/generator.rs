// File: crates/chart-core/src/generator.rs
// Summary: Dated usage samples and the deterministic synthetic source that stands in for a metrics backend.
// Notes:
// - Every value is a pure function of its calendar date, so a window redrawn
//   later in the session (or in a test) shows the same bars.
// - `SampleSource` is the seam a real backend plugs into; nothing downstream
//   knows the data is synthetic.

use chrono::{Datelike, Days, Local, NaiveDate, Weekday};

use crate::error::{ChartError, ChartResult};

/// `num_days_from_ce()` of 1970-01-01.
const EPOCH_DAYS_FROM_CE: i64 = 719_163;

const WEEKEND_BASE: f64 = 600.0;
const WEEKEND_JITTER: f64 = 600.0;
const WEEKDAY_BASE: f64 = 2_400.0;
const WEEKDAY_JITTER: f64 = 1_600.0;

const LARGE_SPIKE: u64 = 6_000;
const MEDIUM_SPIKE: u64 = 3_000;
const SMALL_SPIKE: u64 = 1_200;

/// One day of usage.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sample {
    pub date: NaiveDate,
    pub value: u64,
    /// Axis label, e.g. `Mon 12`.
    pub short_label: String,
    /// Tooltip title, e.g. `Monday, October 12, 2026`.
    pub long_label: String,
}

impl Sample {
    pub fn new(date: NaiveDate, value: u64) -> Self {
        Self {
            date,
            value,
            short_label: date.format("%a %-d").to_string(),
            long_label: date.format("%A, %B %-d, %Y").to_string(),
        }
    }
}

/// Ordered, gap-free run of daily samples, oldest first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Series {
    samples: Vec<Sample>,
}

impl Series {
    /// Wrap samples from an external source, enforcing one sample per consecutive day.
    pub fn from_samples(samples: Vec<Sample>) -> ChartResult<Self> {
        for (i, pair) in samples.windows(2).enumerate() {
            if pair[0].date.succ_opt() != Some(pair[1].date) {
                return Err(ChartError::NonConsecutiveDates { index: i + 1 });
            }
        }
        Ok(Self { samples })
    }

    pub fn len(&self) -> usize { self.samples.len() }
    pub fn is_empty(&self) -> bool { self.samples.is_empty() }
    pub fn get(&self, index: usize) -> Option<&Sample> { self.samples.get(index) }
    pub fn iter(&self) -> std::slice::Iter<'_, Sample> { self.samples.iter() }
    pub fn samples(&self) -> &[Sample] { &self.samples }

    /// Largest value in the window, 0 when empty.
    pub fn max_value(&self) -> u64 {
        self.samples.iter().map(|s| s.value).max().unwrap_or(0)
    }
}

impl<'a> IntoIterator for &'a Series {
    type Item = &'a Sample;
    type IntoIter = std::slice::Iter<'a, Sample>;
    fn into_iter(self) -> Self::IntoIter { self.samples.iter() }
}

/// Where the chart gets its data.
pub trait SampleSource {
    /// `days` samples ending today (inclusive), oldest first.
    fn series(&self, days: u32) -> ChartResult<Series>;
}

/// Synthetic daily usage keyed on the calendar date.
#[derive(Clone, Copy, Debug, Default)]
pub struct SyntheticUsage {
    today: Option<NaiveDate>,
}

impl SyntheticUsage {
    /// Windows end on the local current date.
    pub fn new() -> Self { Self { today: None } }

    /// Windows always end on `today`.
    pub fn pinned(today: NaiveDate) -> Self { Self { today: Some(today) } }

    pub fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }
}

impl SampleSource for SyntheticUsage {
    fn series(&self, days: u32) -> ChartResult<Series> {
        generate(days, self.today())
    }
}

/// Build `days` samples ending at `today`, oldest first.
pub fn generate(days: u32, today: NaiveDate) -> ChartResult<Series> {
    if days == 0 {
        return Err(ChartError::InvalidRange { days, supported: Vec::new() });
    }
    let start = today
        .checked_sub_days(Days::new(u64::from(days) - 1))
        .ok_or_else(|| ChartError::InvalidRange { days, supported: Vec::new() })?;
    let samples = start
        .iter_days()
        .take(days as usize)
        .map(|date| Sample::new(date, value_for(date)))
        .collect::<Vec<_>>();
    tracing::debug!(days, %start, %today, "generated synthetic series");
    Ok(Series { samples })
}

/// Usage for a single date: weekday/weekend baseline plus jitter plus at most one spike.
pub fn value_for(date: NaiveDate) -> u64 {
    let weekday = !is_weekend(date);
    let noise = unit_noise(date_seed(date));
    let base = if weekday {
        WEEKDAY_BASE + noise * WEEKDAY_JITTER
    } else {
        WEEKEND_BASE + noise * WEEKEND_JITTER
    };
    base.round() as u64 + spike_for(ordinal_day(date), weekday).amount()
}

/// Periodic bumps layered on the baseline. Only the first matching rule applies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Spike {
    None,
    Small,
    Medium,
    Large,
}

impl Spike {
    pub const fn amount(self) -> u64 {
        match self {
            Spike::None => 0,
            Spike::Small => SMALL_SPIKE,
            Spike::Medium => MEDIUM_SPIKE,
            Spike::Large => LARGE_SPIKE,
        }
    }
}

pub fn spike_for(ordinal: i64, weekday: bool) -> Spike {
    if ordinal.rem_euclid(37) == 0 {
        Spike::Large
    } else if ordinal.rem_euclid(11) == 0 {
        Spike::Medium
    } else if ordinal.rem_euclid(5) == 0 && weekday {
        Spike::Small
    } else {
        Spike::None
    }
}

/// Days since 1970-01-01.
pub fn ordinal_day(date: NaiveDate) -> i64 {
    i64::from(date.num_days_from_ce()) - EPOCH_DAYS_FROM_CE
}

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// `yyyymmdd` as an integer.
fn date_seed(date: NaiveDate) -> u64 {
    let encoded = i64::from(date.year()) * 10_000 + i64::from(date.month()) * 100 + i64::from(date.day());
    encoded as u64
}

/// splitmix64 finaliser mapped onto [0, 1).
fn unit_noise(seed: u64) -> f64 {
    let mut z = seed.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^= z >> 31;
    (z >> 11) as f64 / (1u64 << 53) as f64
}

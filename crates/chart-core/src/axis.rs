// File: crates/chart-core/src/axis.rs
// Summary: Y axis scaling; snaps the data maximum to a "nice" bound and tick step.

/// Target number of grid intervals between 0 and the data maximum.
const TARGET_INTERVALS: f64 = 4.0;

/// Bound used when every sample is zero, so the chart keeps a usable scale.
pub const DEFAULT_NICE_MAX: f64 = 5_000.0;
pub const DEFAULT_STEP: f64 = 1_250.0;

/// Y axis extent and gridline spacing.
/// Invariant: `nice_max > 0`, `nice_max` is a whole multiple of `step`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisSpec {
    pub nice_max: f64,
    pub step: f64,
}

impl AxisSpec {
    /// Number of gaps between gridlines.
    pub fn intervals(&self) -> usize {
        (self.nice_max / self.step).round() as usize
    }

    /// Tick values `0, step, ..., nice_max`. Computed by multiplication so the
    /// last tick is exactly `nice_max`.
    pub fn ticks(&self) -> Vec<f64> {
        let n = self.intervals();
        (0..=n).map(|i| if i == n { self.nice_max } else { i as f64 * self.step }).collect()
    }
}

impl Default for AxisSpec {
    fn default() -> Self {
        Self { nice_max: DEFAULT_NICE_MAX, step: DEFAULT_STEP }
    }
}

/// Pick a 1 / 2.5 / 5 / 10 x 10^n step giving roughly four intervals over `[0, max_value]`.
///
/// Inputs whose step or bound cannot be represented (subnormals, values near
/// `f64::MAX`) get the default axis, so the result is always finite and positive.
pub fn compute_axis(max_value: f64) -> AxisSpec {
    if !max_value.is_finite() || max_value <= 0.0 {
        tracing::debug!(max_value, "degenerate series, using default axis");
        return AxisSpec::default();
    }
    let step = nice_step(max_value / TARGET_INTERVALS);
    if !step.is_finite() || step <= 0.0 {
        // subnormal maxima: 10^exponent underflows
        tracing::debug!(max_value, step, "step out of range, using default axis");
        return AxisSpec::default();
    }
    let mut nice_max = (max_value / step).ceil() * step;
    if nice_max < max_value {
        // quotient rounded down to an integer in floating point
        nice_max += step;
    }
    if !nice_max.is_finite() {
        // no multiple of step above max_value fits in an f64
        tracing::debug!(max_value, step, "nice max overflows, using default axis");
        return AxisSpec::default();
    }
    AxisSpec { nice_max, step }
}

fn nice_step(rough: f64) -> f64 {
    let exponent = rough.log10().floor() as i32;
    let magnitude = pow10(exponent);
    let r = rough / magnitude;
    let multiplier = if r < 1.5 {
        1.0
    } else if r < 3.0 {
        2.5
    } else if r < 7.0 {
        5.0
    } else {
        10.0
    };
    if exponent < 0 {
        // 0.1 is not representable; dividing keeps e.g. 2.5 * 10^-1 at exactly 0.25
        multiplier / 10f64.powi(-exponent)
    } else {
        multiplier * magnitude
    }
}

fn pow10(exponent: i32) -> f64 {
    if exponent < 0 { 1.0 / 10f64.powi(-exponent) } else { 10f64.powi(exponent) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nice_step_thresholds() {
        assert_eq!(nice_step(1.4), 1.0);
        assert_eq!(nice_step(1.5), 2.5);
        assert_eq!(nice_step(2.9), 2.5);
        assert_eq!(nice_step(3.0), 5.0);
        assert_eq!(nice_step(6.9), 5.0);
        assert_eq!(nice_step(7.0), 10.0);
        assert_eq!(nice_step(2_250.0), 2_500.0);
        assert_eq!(nice_step(0.25), 0.25);
    }
}

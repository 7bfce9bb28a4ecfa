// File: crates/chart-core/tests/generator.rs
// Purpose: Synthetic series shape, determinism, and spike priority.

use chrono::{Datelike, NaiveDate, Weekday};
use usage_chart_core::generator::{generate, is_weekend, ordinal_day, spike_for, value_for, Sample, Spike};
use usage_chart_core::{ChartError, SampleSource, Series, SyntheticUsage};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
}

#[test]
fn window_ends_today_with_consecutive_dates() {
    for days in [1u32, 7, 30, 90] {
        let series = generate(days, today()).expect("valid range");
        assert_eq!(series.len(), days as usize);
        assert_eq!(series.samples().last().unwrap().date, today());
        for pair in series.samples().windows(2) {
            assert_eq!(pair[0].date.succ_opt(), Some(pair[1].date));
        }
    }
}

#[test]
fn zero_days_is_invalid() {
    let err = generate(0, today()).unwrap_err();
    assert!(matches!(err, ChartError::InvalidRange { days: 0, .. }));
}

#[test]
fn values_are_a_function_of_the_date() {
    let a = generate(90, today()).unwrap();
    let b = generate(90, today()).unwrap();
    assert_eq!(a, b);

    // Overlapping windows agree on shared dates.
    let short = generate(7, today()).unwrap();
    for s in short.iter() {
        let same = a.iter().find(|o| o.date == s.date).unwrap();
        assert_eq!(same.value, s.value);
    }
}

#[test]
fn pinned_source_matches_free_function() {
    let source = SyntheticUsage::pinned(today());
    assert_eq!(source.series(30).unwrap(), generate(30, today()).unwrap());
}

#[test]
fn weekends_stay_below_weekdays_without_spikes() {
    let series = generate(90, today()).unwrap();
    for s in series.iter() {
        let spike = spike_for(ordinal_day(s.date), !is_weekend(s.date));
        let base = s.value - spike.amount();
        if is_weekend(s.date) {
            assert!((600..=1_200).contains(&base), "{} -> {}", s.date, base);
        } else {
            assert!((2_400..=4_000).contains(&base), "{} -> {}", s.date, base);
        }
    }
}

#[test]
fn spike_rules_apply_in_priority_order() {
    assert_eq!(spike_for(37, true), Spike::Large);
    assert_eq!(spike_for(22, true), Spike::Medium);
    assert_eq!(spike_for(10, true), Spike::Small);
    assert_eq!(spike_for(10, false), Spike::None);
    assert_eq!(spike_for(13, true), Spike::None);
    // 55 is a multiple of both 11 and 5.
    assert_eq!(spike_for(55, true), Spike::Medium);
    // 185 is a multiple of both 37 and 5.
    assert_eq!(spike_for(185, true), Spike::Large);
}

#[test]
fn day_divisible_by_37_and_11_gets_only_the_large_spike() {
    let date = NaiveDate::from_ymd_opt(2024, 8, 8).unwrap();
    assert_eq!(ordinal_day(date) % 407, 0);
    assert_eq!(date.weekday(), Weekday::Thu);
    assert_eq!(spike_for(ordinal_day(date), true), Spike::Large);

    let v = value_for(date);
    // Weekday ceiling plus the large spike; stacking the medium one would exceed it.
    assert!(v >= 2_400 + 6_000 && v <= 4_000 + 6_000, "got {v}");
}

#[test]
fn labels_are_deterministic() {
    let s = Sample::new(today(), 1_234);
    assert_eq!(s.short_label, "Mon 19");
    assert_eq!(s.long_label, "Monday, October 19, 2026");
}

#[test]
fn external_series_must_be_consecutive() {
    let d0 = today();
    let d2 = d0.succ_opt().unwrap().succ_opt().unwrap();
    let err = Series::from_samples(vec![Sample::new(d0, 1), Sample::new(d2, 2)]).unwrap_err();
    assert!(matches!(err, ChartError::NonConsecutiveDates { index: 1 }));

    let ok = Series::from_samples(vec![Sample::new(d0, 1), Sample::new(d0.succ_opt().unwrap(), 5)]).unwrap();
    assert_eq!(ok.max_value(), 5);
}

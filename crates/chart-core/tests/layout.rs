// File: crates/chart-core/tests/layout.rs
// Purpose: Slot/bar geometry, hover-zone tiling, ticks and label thinning on concrete viewports.

use approx::assert_abs_diff_eq;
use chrono::NaiveDate;
use usage_chart_core::{compute_axis, generate, layout, AxisSpec, LabelCadence, LayoutConfig, Series, Viewport};

fn series(days: u32) -> Series {
    generate(days, NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()).unwrap()
}

#[test]
fn thirty_days_on_800_by_300() {
    let s = series(30);
    let axis = compute_axis(s.max_value() as f64);
    let l = layout(Viewport::new(800, 300), &s, &axis, &LayoutConfig::default()).expect("layout");

    assert_eq!(l.hover_zones.len(), 30);
    for z in &l.hover_zones {
        assert_abs_diff_eq!(z.rect.width, (800.0 - 60.0) / 30.0, epsilon = 1e-3);
        assert_abs_diff_eq!(z.rect.height, l.plot.height);
    }

    let top = l.ticks.last().unwrap();
    let expected = (s.max_value() as f64 / axis.step).ceil() * axis.step;
    assert_eq!(top.value, expected);
    assert_abs_diff_eq!(top.y, l.plot.y, epsilon = 1e-3);
    assert_abs_diff_eq!(l.ticks[0].y, l.plot.bottom(), epsilon = 1e-3);
}

#[test]
fn hover_zones_tile_the_chart_width() {
    for days in [1u32, 7, 30, 90] {
        let s = series(days);
        let axis = compute_axis(s.max_value() as f64);
        let l = layout(Viewport::new(1013, 377), &s, &axis, &LayoutConfig::default()).unwrap();

        let total: f32 = l.hover_zones.iter().map(|z| z.rect.width).sum();
        assert_abs_diff_eq!(total, l.plot.width, epsilon = 1e-2);
        assert_eq!(l.hover_zones[0].rect.x, l.plot.x);
        assert_abs_diff_eq!(l.hover_zones.last().unwrap().rect.right(), l.plot.right(), epsilon = 1e-3);
        for pair in l.hover_zones.windows(2) {
            assert_abs_diff_eq!(pair[0].rect.right(), pair[1].rect.x, epsilon = 1e-3);
        }
    }
}

#[test]
fn bar_heights_are_proportional_to_values() {
    let s = series(90);
    let axis = compute_axis(s.max_value() as f64);
    let l = layout(Viewport::new(800, 300), &s, &axis, &LayoutConfig::default()).unwrap();

    for (bar, sample) in l.bars.iter().zip(s.iter()) {
        let expected = (sample.value as f64 / axis.nice_max) as f32 * l.plot.height;
        assert!(bar.height >= 0.0);
        assert_abs_diff_eq!(bar.height, expected, epsilon = 1e-3);
        assert_abs_diff_eq!(bar.bottom(), l.plot.bottom(), epsilon = 1e-3);
    }
}

#[test]
fn bars_leave_a_proportional_gap() {
    let s = series(30);
    let axis = compute_axis(s.max_value() as f64);
    let l = layout(Viewport::new(800, 300), &s, &axis, &LayoutConfig::default()).unwrap();
    let slot = l.slot_width();
    for (i, bar) in l.bars.iter().enumerate() {
        assert_abs_diff_eq!(bar.width, slot * 0.98, epsilon = 1e-3);
        assert_abs_diff_eq!(bar.center_x(), l.band.slot_center(i), epsilon = 1e-3);
    }
}

#[test]
fn wide_slots_cap_bar_width_and_center_it() {
    let s = series(7);
    let axis = compute_axis(s.max_value() as f64);
    let l = layout(Viewport::new(1600, 300), &s, &axis, &LayoutConfig::default()).unwrap();
    assert!(l.slot_width() > 80.0);
    for (i, bar) in l.bars.iter().enumerate() {
        assert_eq!(bar.width, 80.0);
        assert_abs_diff_eq!(bar.center_x(), l.band.slot_center(i), epsilon = 1e-3);
    }
}

#[test]
fn empty_viewport_produces_nothing() {
    let s = series(30);
    let axis = compute_axis(s.max_value() as f64);
    let config = LayoutConfig::default();
    assert!(layout(Viewport::new(0, 300), &s, &axis, &config).is_none());
    assert!(layout(Viewport::new(800, 0), &s, &axis, &config).is_none());
    // margins alone are wider than the surface
    assert!(layout(Viewport::new(40, 40), &s, &axis, &config).is_none());
}

#[test]
fn all_zero_series_still_has_ticks() {
    let s = series(7);
    let zeros = Series::from_samples(
        s.iter().map(|x| usage_chart_core::Sample::new(x.date, 0)).collect(),
    )
    .unwrap();
    let axis = compute_axis(zeros.max_value() as f64);
    let l = layout(Viewport::new(800, 300), &zeros, &axis, &LayoutConfig::default()).unwrap();
    assert_eq!(l.ticks.len(), 5);
    assert!(l.bars.iter().all(|b| b.height == 0.0));
}

#[test]
fn ticks_cover_every_step() {
    let s = series(30);
    let axis = AxisSpec { nice_max: 10_000.0, step: 2_500.0 };
    let l = layout(Viewport::new(800, 300), &s, &axis, &LayoutConfig::default()).unwrap();
    let values = l.ticks.iter().map(|t| t.value).collect::<Vec<_>>();
    assert_eq!(values, vec![0.0, 2_500.0, 5_000.0, 7_500.0, 10_000.0]);
    for pair in l.ticks.windows(2) {
        assert!(pair[1].y < pair[0].y, "higher values sit higher on screen");
    }
}

#[test]
fn label_thinning_follows_range_table() {
    let config = LayoutConfig::default();
    let s = series(30);
    let axis = compute_axis(s.max_value() as f64);
    let l = layout(Viewport::new(800, 300), &s, &axis, &config).unwrap();
    assert_eq!(l.label_every, 5);
    assert_eq!(l.labelled, vec![4, 9, 14, 19, 24, 29]);

    let s7 = series(7);
    let l7 = layout(Viewport::new(800, 300), &s7, &axis, &config).unwrap();
    assert_eq!(l7.labelled, (0..7).collect::<Vec<_>>());

    // Unknown range: every label.
    let s12 = series(12);
    let l12 = layout(Viewport::new(800, 300), &s12, &axis, &config).unwrap();
    assert_eq!(l12.label_every, 1);

    let custom = LayoutConfig { label_cadence: LabelCadence::default().with_entry(12, 4), ..LayoutConfig::default() };
    let l12 = layout(Viewport::new(800, 300), &s12, &axis, &custom).unwrap();
    assert_eq!(l12.labelled, vec![3, 7, 11]);
}

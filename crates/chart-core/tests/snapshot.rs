// File: crates/chart-core/tests/snapshot.rs
// Purpose: Golden snapshot harness with bless flow, one image per selectable range.
// Behavior:
// - Renders a pinned-date chart to PNG bytes with labels off (fonts vary by platform).
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if snapshot exists, compares decoded pixels for exact match.
// - Else, logs a note and returns (skips) without failing to ease first run.

use chrono::NaiveDate;
use usage_chart_core::{ChartConfig, RasterSurface, SyntheticUsage, Theme, UsageChart, Viewport};

fn bless_mode() -> bool {
    std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true")).unwrap_or(false)
}

fn render_bytes(days: u32, theme: Theme) -> Vec<u8> {
    let source = SyntheticUsage::pinned(NaiveDate::from_ymd_opt(2026, 10, 19).unwrap());
    let config = ChartConfig::default().with_initial_range(days);
    let mut chart = UsageChart::new(config, theme, Box::new(source)).expect("chart");
    let mut surface = RasterSurface::new(Viewport::new(800, 300)).without_labels();
    chart.render(&mut surface).expect("render");
    surface.png_bytes().expect("png bytes")
}

fn write_or_compare(name: &str, bytes: &[u8]) {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__").join(name);
    if bless_mode() {
        if let Some(parent) = path.parent() { std::fs::create_dir_all(parent).ok(); }
        std::fs::write(&path, bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", path.display(), bytes.len());
        return;
    }
    if path.exists() {
        let want = std::fs::read(&path).expect("read snapshot");
        // Compare decoded pixel buffers to avoid PNG encoder variance
        let got_img = image::load_from_memory(bytes).expect("decode got").to_rgba8();
        let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
        assert_eq!(got_img.as_raw(), want_img.as_raw(), "Pixels differ: {}", path.display());
    } else {
        eprintln!("[snapshot] Missing {}; set UPDATE_SNAPSHOTS=1 to bless.", path.display());
    }
}

#[test]
fn golden_week() {
    write_or_compare("usage_7d.png", &render_bytes(7, Theme::dark()));
}

#[test]
fn golden_month() {
    write_or_compare("usage_30d.png", &render_bytes(30, Theme::dark()));
}

#[test]
fn golden_quarter_light() {
    write_or_compare("usage_90d_light.png", &render_bytes(90, Theme::light()));
}

#[test]
fn rendering_is_deterministic() {
    let a = image::load_from_memory(&render_bytes(30, Theme::dark())).unwrap().to_rgba8();
    let b = image::load_from_memory(&render_bytes(30, Theme::dark())).unwrap().to_rgba8();
    assert_eq!(a.as_raw(), b.as_raw());
}

// File: crates/demo/src/main.rs
// Summary: Demo renders the synthetic usage chart per range to PNGs and prints a simulated hover tooltip.
//
// Usage: usage-chart-demo [RANGE|all] [OUT_DIR] [THEME]

use anyhow::{Context, Result};
use std::path::PathBuf;
use usage_chart_core::{theme, ChartConfig, RasterSurface, RenderTarget, SyntheticUsage, UsageChart, Viewport};

fn main() -> Result<()> {
    let _ = usage_chart_core::telemetry::init_default_tracing();

    let mut args = std::env::args().skip(1);
    let range_arg = args.next().unwrap_or_else(|| "all".to_string());
    let out_dir = PathBuf::from(args.next().unwrap_or_else(|| "target/out".to_string()));
    let theme = theme::find(&args.next().unwrap_or_else(|| "dark".to_string()));

    let config = ChartConfig::default();
    let ranges = if range_arg.eq_ignore_ascii_case("all") {
        config.supported_ranges.clone()
    } else {
        vec![range_arg.parse::<u32>().with_context(|| format!("invalid range '{range_arg}'"))?]
    };

    let mut surface = RasterSurface::new(Viewport::new(usage_chart_core::types::WIDTH, usage_chart_core::types::HEIGHT));
    let mut chart = UsageChart::new(config, theme, Box::new(SyntheticUsage::new()))
        .context("failed to create chart")?;
    println!("Theme: {}", chart.theme().name);

    for days in ranges {
        chart
            .set_range(days, &mut surface)
            .with_context(|| format!("failed to render {days}-day range"))?;
        let axis = chart.axis();
        println!(
            "{} days: {} samples, peak {}, axis 0..{} step {}",
            days,
            chart.series().len(),
            chart.series().max_value(),
            axis.nice_max,
            axis.step
        );

        let out = out_dir.join(format!("usage_{days}d.png"));
        surface.write_png(&out).with_context(|| format!("writing {}", out.display()))?;
        println!("Wrote {}", out.display());

        simulate_hover(&mut chart, &mut surface, days, &out_dir)?;
    }
    Ok(())
}

/// Hover the tallest bar, print what the tooltip shows, and save the highlighted frame.
fn simulate_hover(chart: &mut UsageChart, surface: &mut RasterSurface, days: u32, out_dir: &std::path::Path) -> Result<()> {
    let Some(geometry) = chart.geometry() else {
        tracing::warn!(days, "viewport too small, nothing to hover");
        return Ok(());
    };
    let peak = chart
        .series()
        .iter()
        .enumerate()
        .max_by_key(|(_, s)| s.value)
        .map(|(i, _)| i)
        .unwrap_or(0);
    let Some(zone) = geometry.hover_zones.get(peak).copied() else {
        return Ok(());
    };

    let change = chart.pointer_moved(zone.rect.center_x(), zone.rect.y + zone.rect.height * 0.5);
    tracing::debug!(?change, index = peak, "simulated hover");
    chart.present(surface).context("failed to present hover frame")?;

    let tooltip = chart.tooltip();
    if tooltip.visible {
        println!("  hover #{peak}: {} | {} @ ({:.0}, {:.0})", tooltip.title, tooltip.body, tooltip.x, tooltip.y);
    }
    let out = out_dir.join(format!("usage_{days}d_hover.png"));
    surface.write_png(&out).with_context(|| format!("writing {}", out.display()))?;
    println!("Wrote {}", out.display());

    chart.pointer_left();
    let size = surface.size();
    tracing::debug!(width = size.width, height = size.height, "hover cleared");
    Ok(())
}

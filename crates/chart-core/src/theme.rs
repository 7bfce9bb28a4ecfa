// File: crates/chart-core/src/theme.rs
// Summary: Color tokens injected into the renderer; layout math never reads these.

use skia_safe as skia;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub grid: skia::Color,
    pub axis_label: skia::Color,
    pub bar: skia::Color,
    pub bar_hover: skia::Color,
    pub tooltip_background: skia::Color,
    pub tooltip_text: skia::Color,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            grid: skia::Color::from_argb(255, 52, 52, 58),
            axis_label: skia::Color::from_argb(255, 160, 160, 170),
            bar: skia::Color::from_argb(255, 96, 156, 255),
            bar_hover: skia::Color::from_argb(255, 150, 192, 255),
            tooltip_background: skia::Color::from_argb(235, 36, 36, 42),
            tooltip_text: skia::Color::from_argb(255, 235, 235, 245),
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 250, 250, 252),
            grid: skia::Color::from_argb(255, 226, 226, 232),
            axis_label: skia::Color::from_argb(255, 100, 100, 110),
            bar: skia::Color::from_argb(255, 40, 120, 200),
            bar_hover: skia::Color::from_argb(255, 20, 84, 150),
            tooltip_background: skia::Color::from_argb(240, 255, 255, 255),
            tooltip_text: skia::Color::from_argb(255, 20, 20, 30),
        }
    }

    pub fn high_contrast_dark() -> Self {
        Self {
            name: "high-contrast-dark",
            background: skia::Color::from_argb(255, 0x00, 0x00, 0x00),
            grid: skia::Color::from_argb(255, 0x44, 0x44, 0x44),
            axis_label: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            bar: skia::Color::from_argb(255, 0x00, 0xaa, 0xff),
            bar_hover: skia::Color::from_argb(255, 0xff, 0xff, 0x00),
            tooltip_background: skia::Color::from_argb(255, 0x22, 0x22, 0x22),
            tooltip_text: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Self::dark() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::dark(), Theme::light(), Theme::high_contrast_dark()]
}

/// Find a theme by its `name`, falling back to dark.
pub fn find(name: &str) -> Theme {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_else(Theme::dark)
}

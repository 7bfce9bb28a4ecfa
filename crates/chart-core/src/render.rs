// File: crates/chart-core/src/render.rs
// Summary: Render targets; a Skia CPU raster surface with PNG/RGBA export, and a recorder for tests.

use skia_safe as skia;

use crate::error::{ChartError, ChartResult};
use crate::geometry::{BarShape, Geometry, PathCmd, TextAlign};
use crate::interaction::Tooltip;
use crate::text::TextShaper;
use crate::theme::Theme;
use crate::types::{clamp, Viewport};

const LABEL_SIZE: f32 = 11.0;
const TOOLTIP_TITLE_SIZE: f32 = 12.0;
const TOOLTIP_BODY_SIZE: f32 = 13.0;
const TOOLTIP_PADDING: f32 = 8.0;
const TOOLTIP_LINE_GAP: f32 = 4.0;

/// Immutable snapshot handed to a target once per draw.
#[derive(Clone, Copy, Debug)]
pub struct Frame<'a> {
    pub viewport: Viewport,
    /// `None` when the viewport had no room for a chart.
    pub geometry: Option<&'a Geometry>,
    pub highlighted: Option<usize>,
    pub tooltip: &'a Tooltip,
}

/// A surface the chart draws onto. `size` is asked again on every render
/// because the host may resize the container at any time.
pub trait RenderTarget {
    fn size(&self) -> Viewport;
    fn present(&mut self, frame: &Frame<'_>, theme: &Theme) -> ChartResult<()>;
}

/// CPU raster target backed by Skia.
pub struct RasterSurface {
    size: Viewport,
    shaper: TextShaper,
    draw_labels: bool,
    surface: Option<skia::Surface>,
}

impl RasterSurface {
    pub fn new(size: Viewport) -> Self {
        Self { size, shaper: TextShaper::new(), draw_labels: true, surface: None }
    }

    /// Skip text; keeps pixel output independent of installed fonts.
    pub fn without_labels(mut self) -> Self {
        self.draw_labels = false;
        self
    }

    /// Container size changed; takes effect on the next render.
    pub fn resize(&mut self, size: Viewport) {
        self.size = size;
    }

    /// True once something has been drawn on a non-empty viewport.
    pub fn has_frame(&self) -> bool {
        self.surface.is_some()
    }

    pub fn png_bytes(&mut self) -> ChartResult<Vec<u8>> {
        let surface = self.surface.as_mut().ok_or_else(|| ChartError::Render("nothing rendered yet".into()))?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| ChartError::Render("encode PNG failed".into()))?;
        Ok(data.as_bytes().to_vec())
    }

    pub fn write_png(&mut self, path: impl AsRef<std::path::Path>) -> ChartResult<()> {
        let bytes = self.png_bytes()?;
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, bytes)?;
        Ok(())
    }

    /// Unpremultiplied RGBA8 pixels of the last frame: `(pixels, width, height, stride)`.
    pub fn rgba8(&mut self) -> ChartResult<(Vec<u8>, u32, u32, usize)> {
        let surface = self.surface.as_mut().ok_or_else(|| ChartError::Render("nothing rendered yet".into()))?;
        let (w, h) = (surface.width(), surface.height());
        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let stride = w as usize * 4;
        let mut pixels = vec![0u8; stride * h as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            return Err(ChartError::Render("read pixels failed".into()));
        }
        Ok((pixels, w as u32, h as u32, stride))
    }
}

impl RenderTarget for RasterSurface {
    fn size(&self) -> Viewport {
        self.size
    }

    fn present(&mut self, frame: &Frame<'_>, theme: &Theme) -> ChartResult<()> {
        if frame.viewport.is_empty() {
            self.surface = None;
            return Ok(());
        }
        let dims = (frame.viewport.width as i32, frame.viewport.height as i32);
        let mut surface = skia::surfaces::raster_n32_premul(dims)
            .ok_or_else(|| ChartError::Render("failed to create raster surface".into()))?;
        let canvas = surface.canvas();
        canvas.clear(theme.background);

        if let Some(geometry) = frame.geometry {
            draw_grid(canvas, geometry, theme);
            draw_bars(canvas, geometry, frame.highlighted, theme);
            if self.draw_labels {
                draw_labels(canvas, &self.shaper, geometry, theme);
            }
        }
        if frame.tooltip.visible && self.draw_labels {
            draw_tooltip(canvas, &self.shaper, frame.tooltip, frame.viewport, theme);
        }

        self.surface = Some(surface);
        Ok(())
    }
}

/// Keeps owned copies of every presented frame.
#[derive(Clone, Debug, Default)]
pub struct RecordingTarget {
    pub size: Viewport,
    pub frames: Vec<RecordedFrame>,
}

#[derive(Clone, Debug)]
pub struct RecordedFrame {
    pub viewport: Viewport,
    pub geometry: Option<Geometry>,
    pub highlighted: Option<usize>,
    pub tooltip: Tooltip,
}

impl RecordingTarget {
    pub fn new(size: Viewport) -> Self {
        Self { size, frames: Vec::new() }
    }

    pub fn last(&self) -> Option<&RecordedFrame> {
        self.frames.last()
    }
}

impl RenderTarget for RecordingTarget {
    fn size(&self) -> Viewport {
        self.size
    }

    fn present(&mut self, frame: &Frame<'_>, _theme: &Theme) -> ChartResult<()> {
        self.frames.push(RecordedFrame {
            viewport: frame.viewport,
            geometry: frame.geometry.cloned(),
            highlighted: frame.highlighted,
            tooltip: frame.tooltip.clone(),
        });
        Ok(())
    }
}

// ---- helpers ----------------------------------------------------------------

fn to_path(cmds: &[PathCmd]) -> skia::Path {
    let mut path = skia::Path::new();
    for cmd in cmds {
        match *cmd {
            PathCmd::MoveTo(x, y) => { path.move_to((x, y)); }
            PathCmd::LineTo(x, y) => { path.line_to((x, y)); }
            PathCmd::QuadTo(cx, cy, x, y) => { path.quad_to((cx, cy), (x, y)); }
            PathCmd::Close => { path.close(); }
        }
    }
    path
}

fn draw_grid(canvas: &skia::Canvas, geometry: &Geometry, theme: &Theme) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.grid);
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(1.0);
    paint.set_path_effect(skia::PathEffect::dash(&geometry.dash, 0.0));

    for line in &geometry.grid_lines {
        // Half-pixel offset keeps 1px lines crisp.
        let y = line.y.round() + 0.5;
        canvas.draw_line((line.x0, y), (line.x1, y), &paint);
    }
}

fn draw_bars(canvas: &skia::Canvas, geometry: &Geometry, highlighted: Option<usize>, theme: &Theme) {
    let mut body = skia::Paint::default();
    body.set_anti_alias(true);
    body.set_style(skia::paint::Style::Fill);

    for (i, bar) in geometry.bars.iter().enumerate() {
        let color = if highlighted == Some(i) { theme.bar_hover } else { theme.bar };
        body.set_color(color);
        match bar {
            BarShape::Rect(r) if r.height <= 0.0 => {}
            BarShape::Rect(r) => {
                canvas.draw_rect(skia::Rect::from_xywh(r.x, r.y, r.width, r.height), &body);
            }
            BarShape::RoundedTop { .. } => {
                canvas.draw_path(&to_path(&bar.path()), &body);
            }
        }
    }
}

fn draw_labels(canvas: &skia::Canvas, shaper: &TextShaper, geometry: &Geometry, theme: &Theme) {
    for label in geometry.y_labels.iter().chain(geometry.x_labels.iter()) {
        shaper.draw_aligned(canvas, &label.text, label.x, label.y, label.align, LABEL_SIZE, theme.axis_label, false);
    }
}

fn draw_tooltip(canvas: &skia::Canvas, shaper: &TextShaper, tooltip: &Tooltip, viewport: Viewport, theme: &Theme) {
    let title_w = shaper.measure_width(&tooltip.title, TOOLTIP_TITLE_SIZE, false);
    let body_w = shaper.measure_width(&tooltip.body, TOOLTIP_BODY_SIZE, true);
    let w = title_w.max(body_w) + TOOLTIP_PADDING * 2.0;
    let h = TOOLTIP_TITLE_SIZE + TOOLTIP_BODY_SIZE + TOOLTIP_LINE_GAP + TOOLTIP_PADDING * 2.0;

    // Keep the box on the surface when the pointer is near an edge.
    let x = clamp(tooltip.x, 0.0, (viewport.width as f32 - w).max(0.0));
    let y = clamp(tooltip.y, 0.0, (viewport.height as f32 - h).max(0.0));

    let mut bg = skia::Paint::default();
    bg.set_anti_alias(true);
    bg.set_color(theme.tooltip_background);
    canvas.draw_round_rect(skia::Rect::from_xywh(x, y, w, h), 4.0, 4.0, &bg);

    let title_y = y + TOOLTIP_PADDING + TOOLTIP_TITLE_SIZE * 0.5;
    let body_y = title_y + TOOLTIP_TITLE_SIZE * 0.5 + TOOLTIP_LINE_GAP + TOOLTIP_BODY_SIZE * 0.5;
    let left = x + TOOLTIP_PADDING;
    shaper.draw_aligned(canvas, &tooltip.title, left, title_y, TextAlign::Left, TOOLTIP_TITLE_SIZE, theme.tooltip_text, false);
    shaper.draw_aligned(canvas, &tooltip.body, left, body_y, TextAlign::Left, TOOLTIP_BODY_SIZE, theme.tooltip_text, true);
}

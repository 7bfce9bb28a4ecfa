// File: crates/window-demo/src/main.rs
// Summary: Windowed host that drives UsageChart from winit events and blits frames via softbuffer.
//
// Keys: 1/2/3 select the 7/30/90 day range, T cycles themes, Esc quits.

use anyhow::{anyhow, Context, Result};
use std::num::NonZeroU32;
use std::time::Instant;
use usage_chart_core::{
    theme, ChartConfig, ChartResult, Frame, HoverChange, RasterSurface, RenderTarget, SyntheticUsage, Theme,
    UsageChart, Viewport,
};
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, Event, KeyboardInput, VirtualKeyCode, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

/// Raster target that remembers whether the window needs a new blit.
struct WindowCanvas {
    raster: RasterSurface,
    background: u32,
    dirty: bool,
}

impl WindowCanvas {
    fn new(size: PhysicalSize<u32>) -> Self {
        Self { raster: RasterSurface::new(viewport_of(size)), background: 0, dirty: false }
    }
}

impl RenderTarget for WindowCanvas {
    fn size(&self) -> Viewport {
        self.raster.size()
    }

    fn present(&mut self, frame: &Frame<'_>, theme: &Theme) -> ChartResult<()> {
        self.raster.present(frame, theme)?;
        let bg = theme.background;
        self.background = pack_rgb(bg.r(), bg.g(), bg.b());
        self.dirty = true;
        Ok(())
    }
}

fn main() -> Result<()> {
    let _ = usage_chart_core::telemetry::init_default_tracing();

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("Token usage")
        .with_inner_size(PhysicalSize::new(usage_chart_core::types::WIDTH, usage_chart_core::types::HEIGHT))
        .build(&event_loop)
        .context("build window")?;

    let context = unsafe { softbuffer::Context::new(&window) }.map_err(|e| anyhow!("softbuffer context: {e}"))?;
    let mut surface =
        unsafe { softbuffer::Surface::new(&context, &window) }.map_err(|e| anyhow!("softbuffer surface: {e}"))?;

    let config = ChartConfig::default();
    let ranges = config.supported_ranges.clone();
    let themes = theme::presets();
    let mut theme_index = 0usize;

    let mut canvas = WindowCanvas::new(window.inner_size());
    let mut chart = UsageChart::new(config, themes[theme_index], Box::new(SyntheticUsage::new()))
        .context("failed to create chart")?;
    chart.render(&mut canvas).context("initial render")?;
    window.set_title(&format!("Token usage ({} days)", chart.range()));

    event_loop.run(move |event, _, control_flow| match event {
        Event::WindowEvent { event, window_id } if window_id == window.id() => match event {
            WindowEvent::CloseRequested => *control_flow = ControlFlow::Exit,
            WindowEvent::Resized(size) => {
                canvas.raster.resize(viewport_of(size));
                chart.notify_resize(Instant::now());
                // Old frame stays up until resizing settles.
                window.request_redraw();
            }
            WindowEvent::CursorMoved { position, .. } => {
                let change = chart.pointer_moved(position.x as f32, position.y as f32);
                if change != HoverChange::Idle {
                    report(chart.present(&mut canvas), control_flow);
                }
            }
            WindowEvent::CursorLeft { .. } => {
                if chart.pointer_left() != HoverChange::Idle {
                    report(chart.present(&mut canvas), control_flow);
                }
            }
            WindowEvent::KeyboardInput {
                input: KeyboardInput { state: ElementState::Pressed, virtual_keycode: Some(key), .. },
                ..
            } => match key {
                VirtualKeyCode::Escape => *control_flow = ControlFlow::Exit,
                VirtualKeyCode::Key1 | VirtualKeyCode::Key2 | VirtualKeyCode::Key3 => {
                    let slot = match key {
                        VirtualKeyCode::Key1 => 0,
                        VirtualKeyCode::Key2 => 1,
                        _ => 2,
                    };
                    if let Some(&days) = ranges.get(slot) {
                        // A rejected range leaves the current chart on screen.
                        if chart.set_range(days, &mut canvas).is_ok() {
                            window.set_title(&format!("Token usage ({days} days)"));
                        }
                    }
                }
                VirtualKeyCode::T => {
                    theme_index = (theme_index + 1) % themes.len();
                    chart.set_theme(themes[theme_index]);
                    tracing::info!(theme = %chart.theme().name, "theme changed");
                    report(chart.present(&mut canvas), control_flow);
                }
                _ => {}
            },
            _ => {}
        },
        Event::MainEventsCleared => {
            match chart.poll(Instant::now(), &mut canvas) {
                Ok(true) => tracing::debug!(viewport = ?canvas.size(), "debounced redraw"),
                Ok(false) => {}
                Err(e) => {
                    tracing::error!(error = %e, "redraw failed");
                    *control_flow = ControlFlow::Exit;
                    return;
                }
            }
            if canvas.dirty {
                window.request_redraw();
            }
            *control_flow = match chart.next_deadline() {
                Some(deadline) => ControlFlow::WaitUntil(deadline),
                None => ControlFlow::Wait,
            };
        }
        Event::RedrawRequested(_) => {
            if let Err(e) = blit(&mut surface, &mut canvas, window.inner_size()) {
                tracing::error!(error = %e, "blit failed");
            }
        }
        _ => {}
    });
}

fn viewport_of(size: PhysicalSize<u32>) -> Viewport {
    Viewport::new(size.width, size.height)
}

fn report(result: ChartResult<()>, control_flow: &mut ControlFlow) {
    if let Err(e) = result {
        tracing::error!(error = %e, "present failed");
        *control_flow = ControlFlow::Exit;
    }
}

/// softbuffer pixels are 0RGB.
fn pack_rgb(r: u8, g: u8, b: u8) -> u32 {
    ((r as u32) << 16) | ((g as u32) << 8) | b as u32
}

/// Copy the last chart frame into the window, padding with the theme background
/// where window and frame sizes disagree (mid-resize).
fn blit(surface: &mut softbuffer::Surface, canvas: &mut WindowCanvas, size: PhysicalSize<u32>) -> Result<()> {
    let (Some(w), Some(h)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height)) else {
        return Ok(());
    };
    surface.resize(w, h).map_err(|e| anyhow!("resize: {e}"))?;
    let mut buffer = surface.buffer_mut().map_err(|e| anyhow!("buffer: {e}"))?;
    buffer.fill(canvas.background);

    if canvas.raster.has_frame() {
        let (rgba, fw, fh, stride) = canvas.raster.rgba8()?;
        let (win_w, win_h) = (size.width as usize, size.height as usize);
        let cols = win_w.min(fw as usize);
        for row in 0..win_h.min(fh as usize) {
            let src = &rgba[row * stride..row * stride + cols * 4];
            let dst = &mut buffer[row * win_w..row * win_w + cols];
            for (px, out) in src.chunks_exact(4).zip(dst.iter_mut()) {
                *out = pack_rgb(px[0], px[1], px[2]);
            }
        }
    }
    buffer.present().map_err(|e| anyhow!("present: {e}"))?;
    canvas.dirty = false;
    Ok(())
}

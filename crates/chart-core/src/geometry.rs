// File: crates/chart-core/src/geometry.rs
// Summary: Turns layout rectangles into drawable outlines, gridline segments and label anchors.

use crate::format::format_axis_value;
use crate::generator::Series;
use crate::layout::{HoverZone, Layout};
use crate::types::RectF;

/// Renderer-agnostic path command, y growing downwards.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCmd {
    MoveTo(f32, f32),
    LineTo(f32, f32),
    /// Control point, then end point.
    QuadTo(f32, f32, f32, f32),
    Close,
}

/// Outline of one bar.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BarShape {
    Rect(RectF),
    /// Top corners rounded with `radius`, bottom corners square.
    RoundedTop { rect: RectF, radius: f32 },
}

impl BarShape {
    /// Bars shorter than the corner radius fall back to a plain rect so the
    /// corner curves never get a negative extent.
    pub fn outline(rect: RectF, radius: f32) -> Self {
        if rect.height < radius || radius <= 0.0 {
            BarShape::Rect(rect)
        } else {
            BarShape::RoundedTop { rect, radius }
        }
    }

    pub fn rect(&self) -> RectF {
        match *self {
            BarShape::Rect(rect) | BarShape::RoundedTop { rect, .. } => rect,
        }
    }

    pub fn is_rounded(&self) -> bool {
        matches!(self, BarShape::RoundedTop { .. })
    }

    pub fn path(&self) -> Vec<PathCmd> {
        match *self {
            BarShape::Rect(r) => vec![
                PathCmd::MoveTo(r.x, r.y),
                PathCmd::LineTo(r.right(), r.y),
                PathCmd::LineTo(r.right(), r.bottom()),
                PathCmd::LineTo(r.x, r.bottom()),
                PathCmd::Close,
            ],
            BarShape::RoundedTop { rect: r, radius } => {
                // Narrow bars: corners meet in the middle instead of crossing.
                let rad = radius.min(r.width * 0.5);
                vec![
                    PathCmd::MoveTo(r.x, r.bottom()),
                    PathCmd::LineTo(r.x, r.y + rad),
                    PathCmd::QuadTo(r.x, r.y, r.x + rad, r.y),
                    PathCmd::LineTo(r.right() - rad, r.y),
                    PathCmd::QuadTo(r.right(), r.y, r.right(), r.y + rad),
                    PathCmd::LineTo(r.right(), r.bottom()),
                    PathCmd::Close,
                ]
            }
        }
    }
}

/// Dashed horizontal gridline across the chart width.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridLine {
    pub x0: f32,
    pub x1: f32,
    pub y: f32,
    pub value: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

/// Text placed at `(x, y)`; `y` is the vertical center of the text line.
#[derive(Clone, Debug, PartialEq)]
pub struct LabelAnchor {
    pub x: f32,
    pub y: f32,
    pub text: String,
    pub align: TextAlign,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeometryStyle {
    pub corner_radius: f32,
    /// Gap between the y labels' right edge and the chart's left edge.
    pub y_label_gap: f32,
    /// Distance from the chart bottom to the x labels' center line.
    pub x_label_gap: f32,
    /// Dash on/off lengths for gridlines.
    pub dash: [f32; 2],
}

impl Default for GeometryStyle {
    fn default() -> Self {
        Self { corner_radius: 4.0, y_label_gap: 8.0, x_label_gap: 14.0, dash: [3.0, 3.0] }
    }
}

/// Everything one render pass draws. Built once, never mutated.
#[derive(Clone, Debug)]
pub struct Geometry {
    pub plot: RectF,
    pub bars: Vec<BarShape>,
    pub hover_zones: Vec<HoverZone>,
    pub grid_lines: Vec<GridLine>,
    pub x_labels: Vec<LabelAnchor>,
    pub y_labels: Vec<LabelAnchor>,
    pub dash: [f32; 2],
}

pub fn build(layout: &Layout, series: &Series, style: &GeometryStyle) -> Geometry {
    let plot = layout.plot;
    let bars = layout
        .bars
        .iter()
        .map(|&rect| BarShape::outline(rect, style.corner_radius))
        .collect::<Vec<_>>();

    let grid_lines = layout
        .ticks
        .iter()
        .map(|t| GridLine { x0: plot.x, x1: plot.right(), y: t.y, value: t.value })
        .collect::<Vec<_>>();

    let y_labels = layout
        .ticks
        .iter()
        .map(|t| LabelAnchor {
            x: plot.x - style.y_label_gap,
            y: t.y,
            text: format_axis_value(t.value),
            align: TextAlign::Right,
        })
        .collect::<Vec<_>>();

    let x_labels = layout
        .labelled
        .iter()
        .filter_map(|&i| {
            let sample = series.get(i)?;
            let bar = layout.bars.get(i)?;
            Some(LabelAnchor {
                x: bar.center_x(),
                y: plot.bottom() + style.x_label_gap,
                text: sample.short_label.clone(),
                align: TextAlign::Center,
            })
        })
        .collect::<Vec<_>>();

    Geometry {
        plot,
        bars,
        hover_zones: layout.hover_zones.clone(),
        grid_lines,
        x_labels,
        y_labels,
        dash: style.dash,
    }
}

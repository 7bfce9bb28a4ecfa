// File: crates/chart-core/src/scale.rs
// Summary: Value (Y) and band (X) scale transforms used by the layout engine.

/// Logical X coordinate: sample index within the series.
pub type Logical = usize;
/// Value Y coordinate (usage amount).
pub type Value = f64;

/// Horizontal band scale: `count` equal slots starting at `left_px`.
#[derive(Clone, Copy, Debug)]
pub struct BandScale {
    pub left_px: f32,
    pub slot_width: f32,
}

impl BandScale {
    pub fn new(left_px: f32, width_px: f32, count: usize) -> Self {
        let slot_width = if count == 0 { 0.0 } else { width_px / count as f32 };
        Self { left_px, slot_width }
    }
    /// Left edge of slot `i`.
    #[inline]
    pub fn slot_left(&self, i: Logical) -> f32 {
        self.left_px + i as f32 * self.slot_width
    }
    #[inline]
    pub fn slot_center(&self, i: Logical) -> f32 {
        self.slot_left(i) + self.slot_width * 0.5
    }
}

/// Vertical value scale mapping `[0, vmax]` to `[bottom, top]` pixels.
#[derive(Clone, Copy, Debug)]
pub struct ValueScale {
    pub top_px: f32,
    pub bottom_px: f32,
    pub vmax: Value,
}

impl ValueScale {
    pub fn new(top_px: f32, bottom_px: f32, vmax: Value) -> Self {
        Self { top_px, bottom_px, vmax: vmax.max(1e-12) }
    }
    pub fn span_px(&self) -> f32 {
        self.bottom_px - self.top_px
    }
    /// Pixel length of a bar for `v`, never negative.
    #[inline]
    pub fn length(&self, v: Value) -> f32 {
        ((v / self.vmax) as f32 * self.span_px()).max(0.0)
    }
    #[inline]
    pub fn to_px(&self, v: Value) -> f32 {
        self.bottom_px - ((v / self.vmax) as f32) * self.span_px()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_slots_tile_the_width() {
        let b = BandScale::new(50.0, 740.0, 30);
        assert!((b.slot_left(30) - 790.0).abs() < 1e-3);
        assert!((b.slot_center(0) - (50.0 + 740.0 / 60.0)).abs() < 1e-4);
        assert_eq!(BandScale::new(50.0, 740.0, 0).slot_width, 0.0);
    }

    #[test]
    fn value_scale_maps_range() {
        let s = ValueScale::new(20.0, 270.0, 5_000.0);
        assert_eq!(s.to_px(0.0), 270.0);
        assert_eq!(s.to_px(5_000.0), 20.0);
        assert_eq!(s.to_px(2_500.0), 145.0);
        assert_eq!(s.length(-10.0), 0.0);
    }
}

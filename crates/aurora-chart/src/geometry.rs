// File: crates/aurora-chart/src/geometry.rs
// Summary: Viewport model and the pure index/value -> pixel mapping.

/// Plot-area padding, in logical pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Insets {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Insets {
    pub const fn new(left: f64, right: f64, top: f64, bottom: f64) -> Self {
        Self { left, right, top, bottom }
    }

    pub const fn uniform(pad: f64) -> Self {
        Self::new(pad, pad, pad, pad)
    }
}

impl Default for Insets {
    fn default() -> Self {
        Self::uniform(40.0)
    }
}

/// Logical drawing region plus padding insets defining the plot area.
/// Recomputed from the surface bounding box every render pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub insets: Insets,
}

impl Viewport {
    pub const fn new(width: f64, height: f64, insets: Insets) -> Self {
        Self { width, height, insets }
    }

    pub fn plot_width(&self) -> f64 {
        self.width - self.insets.left - self.insets.right
    }

    pub fn plot_height(&self) -> f64 {
        self.height - self.insets.top - self.insets.bottom
    }

    pub fn plot_left(&self) -> f64 {
        self.insets.left
    }

    pub fn plot_right(&self) -> f64 {
        self.width - self.insets.right
    }

    pub fn plot_top(&self) -> f64 {
        self.insets.top
    }

    pub fn plot_bottom(&self) -> f64 {
        self.height - self.insets.bottom
    }
}

/// Map a data point to logical pixel coordinates.
///
/// x interpolates linearly across the horizontal plot span; a single-point
/// series maps to the horizontal midpoint instead of dividing by zero.
/// y is inverted (screen-space); a flat series (max == min) collapses every
/// value to the vertical plot midpoint instead of producing NaN.
pub fn map_point(
    index: usize,
    value: f64,
    series_len: usize,
    min: f64,
    max: f64,
    viewport: &Viewport,
) -> (f64, f64) {
    let x = if series_len < 2 {
        viewport.plot_left() + viewport.plot_width() / 2.0
    } else {
        viewport.plot_left() + (viewport.plot_width() / (series_len - 1) as f64) * index as f64
    };
    let y = if max == min {
        viewport.plot_top() + viewport.plot_height() / 2.0
    } else {
        viewport.plot_bottom() - ((value - min) / (max - min)) * viewport.plot_height()
    };
    (x, y)
}

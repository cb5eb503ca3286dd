// File: crates/aurora-chart/src/surface.rs
// Summary: The injectable 2D drawing surface and its retained paint/path types.

use crate::color::Color;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCmd {
    MoveTo(f64, f64),
    LineTo(f64, f64),
    Circle { cx: f64, cy: f64, radius: f64 },
    Close,
}

/// A retained path, built in logical coordinates and handed to the surface.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    pub cmds: Vec<PathCmd>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(&mut self, x: f64, y: f64) -> &mut Self {
        self.cmds.push(PathCmd::MoveTo(x, y));
        self
    }

    pub fn line_to(&mut self, x: f64, y: f64) -> &mut Self {
        self.cmds.push(PathCmd::LineTo(x, y));
        self
    }

    pub fn circle(&mut self, cx: f64, cy: f64, radius: f64) -> &mut Self {
        self.cmds.push(PathCmd::Circle { cx, cy, radius });
        self
    }

    pub fn close(&mut self) -> &mut Self {
        self.cmds.push(PathCmd::Close);
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
    /// Position along the gradient axis in [0, 1].
    pub offset: f64,
    pub color: Color,
    pub alpha: f64,
}

impl GradientStop {
    pub const fn new(offset: f64, color: Color, alpha: f64) -> Self {
        Self { offset, color, alpha }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Paint {
    Solid {
        color: Color,
        alpha: f64,
    },
    LinearGradient {
        from: (f64, f64),
        to: (f64, f64),
        stops: Vec<GradientStop>,
    },
}

impl Paint {
    pub fn solid(color: Color) -> Self {
        Self::Solid { color, alpha: 1.0 }
    }

    pub fn linear_gradient(from: (f64, f64), to: (f64, f64), stops: Vec<GradientStop>) -> Self {
        Self::LinearGradient { from, to, stops }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineCap {
    Butt,
    Round,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokeStyle {
    pub width: f64,
    /// Round applies to both caps and joins.
    pub cap: LineCap,
}

impl StrokeStyle {
    pub const fn thin() -> Self {
        Self { width: 1.0, cap: LineCap::Butt }
    }

    pub const fn round(width: f64) -> Self {
        Self { width, cap: LineCap::Round }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextBaseline {
    Top,
    Middle,
    Alphabetic,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    pub size: f64,
    pub color: Color,
    pub align: TextAlign,
    pub baseline: TextBaseline,
}

/// Capability set of a host drawing surface: logical bounding box, settable
/// backing-store resolution, transform scale, and draw primitives. The scene
/// renderer is written against this trait only, so it can be unit-tested with
/// a recording implementation.
pub trait Surface {
    /// Logical (CSS) bounding box, width and height.
    fn bounding_box(&self) -> (f64, f64);

    /// Set the backing-store resolution in device pixels, independent of the
    /// logical size.
    fn set_resolution(&mut self, width_px: u32, height_px: u32);

    /// Scale the draw transform so unit coordinates stay logical pixels.
    fn set_scale(&mut self, ratio: f64);

    /// Set the displayed (logical) size.
    fn set_logical_size(&mut self, width: f64, height: f64);

    /// Clear the entire surface.
    fn clear(&mut self, width: f64, height: f64);

    fn fill_path(&mut self, path: &Path, paint: &Paint);

    fn stroke_path(&mut self, path: &Path, paint: &Paint, style: &StrokeStyle);

    fn fill_text(&mut self, text: &str, x: f64, y: f64, style: &TextStyle);
}

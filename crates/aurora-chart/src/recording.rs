// File: crates/aurora-chart/src/recording.rs
// Summary: Headless Surface implementation that records draw operations for tests.

use crate::surface::{Paint, Path, StrokeStyle, Surface, TextStyle};

#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    SetResolution { width_px: u32, height_px: u32 },
    SetScale { ratio: f64 },
    SetLogicalSize { width: f64, height: f64 },
    Clear { width: f64, height: f64 },
    Fill { path: Path, paint: Paint },
    Stroke { path: Path, paint: Paint, style: StrokeStyle },
    Text { text: String, x: f64, y: f64, style: TextStyle },
}

/// Records every operation issued against it, in order.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    logical: (f64, f64),
    pub ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self { logical: (width, height), ops: Vec::new() }
    }

    /// Drain recorded operations, leaving the surface empty.
    pub fn take_ops(&mut self) -> Vec<DrawOp> {
        std::mem::take(&mut self.ops)
    }

    /// Number of full render passes recorded so far (one clear per pass).
    pub fn render_count(&self) -> usize {
        self.ops.iter().filter(|op| matches!(op, DrawOp::Clear { .. })).count()
    }
}

impl Surface for RecordingSurface {
    fn bounding_box(&self) -> (f64, f64) {
        self.logical
    }

    fn set_resolution(&mut self, width_px: u32, height_px: u32) {
        self.ops.push(DrawOp::SetResolution { width_px, height_px });
    }

    fn set_scale(&mut self, ratio: f64) {
        self.ops.push(DrawOp::SetScale { ratio });
    }

    fn set_logical_size(&mut self, width: f64, height: f64) {
        self.logical = (width, height);
        self.ops.push(DrawOp::SetLogicalSize { width, height });
    }

    fn clear(&mut self, width: f64, height: f64) {
        self.ops.push(DrawOp::Clear { width, height });
    }

    fn fill_path(&mut self, path: &Path, paint: &Paint) {
        self.ops.push(DrawOp::Fill { path: path.clone(), paint: paint.clone() });
    }

    fn stroke_path(&mut self, path: &Path, paint: &Paint, style: &StrokeStyle) {
        self.ops.push(DrawOp::Stroke { path: path.clone(), paint: paint.clone(), style: *style });
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64, style: &TextStyle) {
        self.ops.push(DrawOp::Text { text: text.to_string(), x, y, style: *style });
    }
}

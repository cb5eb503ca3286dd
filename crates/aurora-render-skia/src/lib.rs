// File: crates/aurora-render-skia/src/lib.rs
// Summary: Skia CPU raster surface implementing the core Surface trait, with PNG output.

use skia_safe as skia;
use thiserror::Error;

use aurora_chart::surface::{
    LineCap, Paint, Path, PathCmd, StrokeStyle, Surface, TextAlign, TextBaseline, TextStyle,
};
use aurora_chart::Color;

#[derive(Debug, Error)]
pub enum RasterError {
    #[error("failed to allocate {width}x{height} raster surface")]
    SurfaceAlloc { width: u32, height: u32 },
    #[error("PNG encode failed")]
    Encode,
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Headless raster implementation of the host surface: a Skia CPU surface
/// whose backing-store resolution is set independently of its logical size.
pub struct RasterSurface {
    surface: skia::Surface,
    logical: (f64, f64),
    background: skia::Color,
}

impl RasterSurface {
    /// Allocate at the given logical size. The sizing controller re-sizes
    /// the backing store for the device pixel ratio before each render.
    pub fn new(width: f64, height: f64) -> Result<Self, RasterError> {
        let surface = skia::surfaces::raster_n32_premul((width as i32, height as i32)).ok_or(
            RasterError::SurfaceAlloc { width: width as u32, height: height as u32 },
        )?;
        Ok(Self { surface, logical: (width, height), background: skia::Color::TRANSPARENT })
    }

    /// Color the surface clears to (the host page background).
    pub fn with_background(mut self, color: Color) -> Self {
        self.set_background(color);
        self
    }

    pub fn set_background(&mut self, color: Color) {
        self.background = skia::Color::from_argb(255, color.r, color.g, color.b);
    }

    /// Encode the current pixels as PNG bytes.
    pub fn png_bytes(&mut self) -> Result<Vec<u8>, RasterError> {
        let image = self.surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or(RasterError::Encode)?;
        Ok(data.as_bytes().to_vec())
    }

    /// Write the current pixels to a PNG file, creating parent directories.
    pub fn write_png(&mut self, path: impl AsRef<std::path::Path>) -> Result<(), RasterError> {
        let bytes = self.png_bytes()?;
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, bytes)?;
        Ok(())
    }
}

impl Surface for RasterSurface {
    fn bounding_box(&self) -> (f64, f64) {
        self.logical
    }

    fn set_resolution(&mut self, width_px: u32, height_px: u32) {
        match skia::surfaces::raster_n32_premul((width_px as i32, height_px as i32)) {
            Some(surface) => self.surface = surface,
            None => {
                // Keep drawing into the old backing store rather than
                // losing the surface mid-pass.
                tracing::error!(width_px, height_px, "raster reallocation failed, keeping previous backing store");
            }
        }
    }

    fn set_scale(&mut self, ratio: f64) {
        let canvas = self.surface.canvas();
        canvas.reset_matrix();
        canvas.scale((ratio as f32, ratio as f32));
    }

    fn set_logical_size(&mut self, width: f64, height: f64) {
        self.logical = (width, height);
    }

    fn clear(&mut self, _width: f64, _height: f64) {
        self.surface.canvas().clear(self.background);
    }

    fn fill_path(&mut self, path: &Path, paint: &Paint) {
        let skia_path = build_path(path);
        let mut skia_paint = build_paint(paint);
        skia_paint.set_style(skia::paint::Style::Fill);
        self.surface.canvas().draw_path(&skia_path, &skia_paint);
    }

    fn stroke_path(&mut self, path: &Path, paint: &Paint, style: &StrokeStyle) {
        let skia_path = build_path(path);
        let mut skia_paint = build_paint(paint);
        skia_paint.set_style(skia::paint::Style::Stroke);
        skia_paint.set_stroke_width(style.width as f32);
        if style.cap == LineCap::Round {
            skia_paint.set_stroke_cap(skia::paint::Cap::Round);
            skia_paint.set_stroke_join(skia::paint::Join::Round);
        }
        self.surface.canvas().draw_path(&skia_path, &skia_paint);
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64, style: &TextStyle) {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_color(to_skia_color(style.color, 1.0));

        let mut font = skia::Font::default();
        font.set_size(style.size as f32);

        let (advance, _bounds) = font.measure_str(text, Some(&paint));
        let x = match style.align {
            TextAlign::Left => x as f32,
            TextAlign::Center => x as f32 - advance / 2.0,
            TextAlign::Right => x as f32 - advance,
        };
        // draw_str positions the alphabetic baseline; shift by glyph-height
        // approximations for the other baselines.
        let y = match style.baseline {
            TextBaseline::Alphabetic => y as f32,
            TextBaseline::Middle => y as f32 + style.size as f32 * 0.35,
            TextBaseline::Top => y as f32 + style.size as f32 * 0.8,
        };
        self.surface.canvas().draw_str(text, (x, y), &font, &paint);
    }
}

fn to_skia_color(color: Color, alpha: f64) -> skia::Color {
    let a = (alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
    skia::Color::from_argb(a, color.r, color.g, color.b)
}

fn build_path(path: &Path) -> skia::Path {
    let mut out = skia::Path::new();
    for cmd in &path.cmds {
        match *cmd {
            PathCmd::MoveTo(x, y) => {
                out.move_to((x as f32, y as f32));
            }
            PathCmd::LineTo(x, y) => {
                out.line_to((x as f32, y as f32));
            }
            PathCmd::Circle { cx, cy, radius } => {
                out.add_circle((cx as f32, cy as f32), radius as f32, None);
            }
            PathCmd::Close => {
                out.close();
            }
        }
    }
    out
}

fn build_paint(paint: &Paint) -> skia::Paint {
    let mut out = skia::Paint::default();
    out.set_anti_alias(true);
    match paint {
        Paint::Solid { color, alpha } => {
            out.set_color(to_skia_color(*color, *alpha));
        }
        Paint::LinearGradient { from, to, stops } => {
            let colors: Vec<skia::Color> =
                stops.iter().map(|s| to_skia_color(s.color, s.alpha)).collect();
            let positions: Vec<f32> = stops.iter().map(|s| s.offset as f32).collect();
            let shader = skia::gradient_shader::linear(
                (
                    skia::Point::new(from.0 as f32, from.1 as f32),
                    skia::Point::new(to.0 as f32, to.1 as f32),
                ),
                colors.as_slice(),
                Some(positions.as_slice()),
                skia::TileMode::Clamp,
                None,
                None,
            );
            out.set_shader(shader);
        }
    }
    out
}

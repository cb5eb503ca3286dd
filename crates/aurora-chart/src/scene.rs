// File: crates/aurora-chart/src/scene.rs
// Summary: Ordered drawing pass: grid, area fill, line, markers, axis labels.

use crate::geometry::{map_point, Viewport};
use crate::palette::Palette;
use crate::series::{RenderFrame, Series};
use crate::surface::{
    GradientStop, Paint, Path, StrokeStyle, Surface, TextAlign, TextBaseline, TextStyle,
};

const GRID_INTERVALS: usize = 5;
const MARKER_RADIUS: f64 = 4.0;
const LABEL_SIZE: f64 = 11.0;
const LABEL_GAP: f64 = 10.0;
const X_LABEL_STEP: usize = 5;

/// Render one full frame. Layers draw in a fixed order; each layer is fully
/// drawn before the next begins, so later layers occlude earlier ones.
pub fn render<S: Surface>(surface: &mut S, series: &Series, palette: &Palette, viewport: &Viewport) {
    let frame = RenderFrame::of(series);
    let n = series.len();

    surface.clear(viewport.width, viewport.height);

    draw_grid(surface, palette, viewport);
    if n > 0 {
        draw_area_fill(surface, series, &frame, palette, viewport);
        draw_line(surface, series, &frame, palette, viewport);
        draw_markers(surface, series, &frame, palette, viewport);
    }
    draw_y_labels(surface, &frame, palette, viewport);
    draw_x_labels(surface, n, &frame, palette, viewport);
}

fn draw_grid<S: Surface>(surface: &mut S, palette: &Palette, viewport: &Viewport) {
    let paint = Paint::solid(palette.background);
    // 6 lines, top padding to bottom padding inclusive
    for i in 0..=GRID_INTERVALS {
        let y = viewport.plot_top() + (viewport.plot_height() / GRID_INTERVALS as f64) * i as f64;
        let mut path = Path::new();
        path.move_to(viewport.plot_left(), y);
        path.line_to(viewport.plot_right(), y);
        surface.stroke_path(&path, &paint, &StrokeStyle::thin());
    }
}

fn draw_area_fill<S: Surface>(
    surface: &mut S,
    series: &Series,
    frame: &RenderFrame,
    palette: &Palette,
    viewport: &Viewport,
) {
    let mut path = Path::new();
    path.move_to(viewport.plot_left(), viewport.plot_bottom());
    for (i, &v) in series.samples().iter().enumerate() {
        let (x, y) = map_point(i, v, series.len(), frame.min, frame.max, viewport);
        path.line_to(x, y);
    }
    path.line_to(viewport.plot_right(), viewport.plot_bottom());
    path.close();

    let gradient = Paint::linear_gradient(
        (0.0, viewport.plot_top()),
        (0.0, viewport.plot_bottom()),
        vec![
            GradientStop::new(0.0, palette.primary, 0.3),
            GradientStop::new(1.0, palette.primary, 0.0),
        ],
    );
    surface.fill_path(&path, &gradient);
}

fn draw_line<S: Surface>(
    surface: &mut S,
    series: &Series,
    frame: &RenderFrame,
    palette: &Palette,
    viewport: &Viewport,
) {
    let mut path = Path::new();
    for (i, &v) in series.samples().iter().enumerate() {
        let (x, y) = map_point(i, v, series.len(), frame.min, frame.max, viewport);
        if i == 0 {
            path.move_to(x, y);
        } else {
            path.line_to(x, y);
        }
    }

    let gradient = Paint::linear_gradient(
        (viewport.plot_left(), 0.0),
        (viewport.plot_right(), 0.0),
        vec![
            GradientStop::new(0.0, palette.primary, 1.0),
            GradientStop::new(1.0, palette.secondary, 1.0),
        ],
    );
    surface.stroke_path(&path, &gradient, &StrokeStyle::round(3.0));
}

fn draw_markers<S: Surface>(
    surface: &mut S,
    series: &Series,
    frame: &RenderFrame,
    palette: &Palette,
    viewport: &Viewport,
) {
    let fill = Paint::solid(palette.primary);
    let outline = Paint::solid(palette.background_primary);
    let outline_style = StrokeStyle { width: 2.0, cap: crate::surface::LineCap::Butt };
    for (i, &v) in series.samples().iter().enumerate() {
        let (x, y) = map_point(i, v, series.len(), frame.min, frame.max, viewport);
        let mut path = Path::new();
        path.circle(x, y, MARKER_RADIUS);
        surface.fill_path(&path, &fill);
        surface.stroke_path(&path, &outline, &outline_style);
    }
}

fn draw_y_labels<S: Surface>(
    surface: &mut S,
    frame: &RenderFrame,
    palette: &Palette,
    viewport: &Viewport,
) {
    let style = TextStyle {
        size: LABEL_SIZE,
        color: palette.text,
        align: TextAlign::Right,
        baseline: TextBaseline::Middle,
    };
    // Interpolated max (top) to min (bottom), one label per gridline.
    for i in 0..=GRID_INTERVALS {
        let value = frame.max - (frame.range / GRID_INTERVALS as f64) * i as f64;
        let y = viewport.plot_top() + (viewport.plot_height() / GRID_INTERVALS as f64) * i as f64;
        let text = format!("${}K", value.round() as i64);
        surface.fill_text(&text, viewport.plot_left() - LABEL_GAP, y, &style);
    }
}

fn draw_x_labels<S: Surface>(
    surface: &mut S,
    n: usize,
    frame: &RenderFrame,
    palette: &Palette,
    viewport: &Viewport,
) {
    let style = TextStyle {
        size: LABEL_SIZE,
        color: palette.text,
        align: TextAlign::Center,
        baseline: TextBaseline::Top,
    };
    let y = viewport.plot_bottom() + LABEL_GAP;
    for i in 0..n {
        if i % X_LABEL_STEP != 0 && i != n - 1 {
            continue;
        }
        let (x, _) = map_point(i, frame.min, n, frame.min, frame.max, viewport);
        surface.fill_text(&format!("Day {}", i + 1), x, y, &style);
    }
}

// File: crates/aurora-render-skia/tests/snapshot.rs
// Purpose: Full pipeline render through the Skia raster backend; PNG shape checks.

use aurora_chart::{Chart, Color, NoopStore, Series, ThemeManager};
use aurora_render_skia::RasterSurface;

fn revenue_chart(width: f64, height: f64, dpr: f64) -> Chart<RasterSurface> {
    let background = Color::from_hex("#0B0E14").unwrap();
    let surface = RasterSurface::new(width, height)
        .expect("raster surface")
        .with_background(background);
    Chart::new(
        surface,
        Series::sample_revenue(),
        ThemeManager::new(Box::new(NoopStore), true),
        dpr,
    )
    .expect("non-empty series")
}

#[test]
fn render_revenue_png_at_dpr_2() {
    let mut chart = revenue_chart(320.0, 200.0, 2.0);
    chart.on_visibility(1.0).expect("reveal triggers first paint");

    let bytes = chart.surface_mut().png_bytes().expect("encode png");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");

    // Backing store is logical size x device pixel ratio.
    let img = image::load_from_memory(&bytes).expect("decode png").to_rgba8();
    assert_eq!((img.width(), img.height()), (640, 400));

    // Top-left sits outside the plot padding: background only.
    let px = img.get_pixel(0, 0);
    assert_eq!(px[3], 255);
    assert_eq!((px[0], px[1], px[2]), (0x0B, 0x0E, 0x14));
}

#[test]
fn write_png_file() {
    let mut chart = revenue_chart(320.0, 200.0, 1.0);
    chart.on_visibility(1.0).expect("reveal triggers first paint");

    let out = std::path::PathBuf::from("target/test_out/revenue.png");
    chart.surface_mut().write_png(&out).expect("write png");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");
}

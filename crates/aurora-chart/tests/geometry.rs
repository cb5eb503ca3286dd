// File: crates/aurora-chart/tests/geometry.rs
// Purpose: Point mapping math, including degenerate (flat/single-point) series.

use aurora_chart::{map_point, Insets, Viewport};

fn viewport() -> Viewport {
    Viewport::new(300.0, 200.0, Insets::uniform(40.0))
}

#[test]
fn x_is_monotonic_in_index() {
    let vp = viewport();
    let values = [10.0, 20.0, 10.0, 15.0, 12.0];
    let mut last_x = f64::NEG_INFINITY;
    for (i, &v) in values.iter().enumerate() {
        let (x, _) = map_point(i, v, values.len(), 10.0, 20.0, &vp);
        assert!(x > last_x, "x must strictly increase with index (i={i})");
        last_x = x;
    }
}

#[test]
fn y_is_monotonic_in_value() {
    let vp = viewport();
    let mut last_y = f64::INFINITY;
    for step in 0..5 {
        let value = 10.0 + step as f64 * 2.5;
        let (_, y) = map_point(2, value, 5, 10.0, 20.0, &vp);
        assert!(y < last_y, "y must strictly decrease as value increases");
        last_y = y;
    }
}

#[test]
fn spike_series_hits_plot_edges() {
    // Series [10, 20, 10] on a 300x200 viewport with 40px padding.
    let vp = viewport();
    let (x0, y0) = map_point(0, 10.0, 3, 10.0, 20.0, &vp);
    let (x1, y1) = map_point(1, 20.0, 3, 10.0, 20.0, &vp);
    let (x2, y2) = map_point(2, 10.0, 3, 10.0, 20.0, &vp);

    assert_eq!((x0, y0), (40.0, 160.0));
    assert_eq!((x1, y1), (150.0, 40.0));
    assert_eq!((x2, y2), (260.0, 160.0));
}

#[test]
fn flat_series_collapses_to_vertical_midpoint() {
    let vp = viewport();
    for i in 0..4 {
        let (_, y) = map_point(i, 7.0, 4, 7.0, 7.0, &vp);
        assert_eq!(y, 100.0, "flat series must map to plot-area midpoint");
    }
}

#[test]
fn single_point_centers_horizontally() {
    let vp = viewport();
    let (x, _) = map_point(0, 3.0, 1, 3.0, 3.0, &vp);
    assert_eq!(x, 150.0);
}

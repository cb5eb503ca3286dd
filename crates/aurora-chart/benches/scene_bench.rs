// File: crates/aurora-chart/benches/scene_bench.rs
// Summary: Criterion benchmark for the scene render hot path on a recording surface.

use aurora_chart::theme::Theme;
use aurora_chart::{scene, Insets, Palette, RecordingSurface, Series, Viewport};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn synthetic_series(n: usize) -> Series {
    let samples = (0..n)
        .map(|i| (i as f64 * 0.05).sin() * 40.0 + 100.0 + i as f64 * 0.01)
        .collect();
    Series::new(samples)
}

fn bench_scene(c: &mut Criterion) {
    let palette = Palette::resolve(&Theme::dark());
    let viewport = Viewport::new(800.0, 400.0, Insets::uniform(40.0));
    let mut group = c.benchmark_group("scene_render");
    for &n in &[30usize, 1_000, 10_000] {
        let series = synthetic_series(n);
        group.bench_function(format!("points_{n}"), |b| {
            b.iter(|| {
                let mut surface = RecordingSurface::new(800.0, 400.0);
                scene::render(&mut surface, &series, &palette, &viewport);
                black_box(surface.ops.len());
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_scene);
criterion_main!(benches);

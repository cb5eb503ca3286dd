// File: crates/aurora-chart/src/series.rs
// Summary: Ordered numeric series and the per-render (min, max, range) frame.

/// Ordered numeric samples forming the chart's plotted data.
///
/// Position is the x-axis domain (1-indexed "day" labels); samples are
/// read-only for the renderer's lifetime.
#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    samples: Vec<f64>,
}

impl Series {
    pub fn new(samples: Vec<f64>) -> Self {
        Self { samples }
    }

    /// The literal 30-day revenue series the dashboard ships with.
    pub fn sample_revenue() -> Self {
        Self::new(vec![
            45.0, 52.0, 48.0, 58.0, 65.0, 72.0, 68.0, 75.0, 82.0, 88.0, 95.0, 103.0, 98.0, 105.0,
            112.0, 118.0, 125.0, 132.0, 128.0, 135.0, 142.0, 138.0, 145.0, 152.0, 148.0, 155.0,
            162.0, 168.0, 175.0, 180.0,
        ])
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn samples(&self) -> &[f64] {
        &self.samples
    }
}

/// Ephemeral value bounds derived from a [`Series`] for one render pass.
/// Never cached across renders.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderFrame {
    pub min: f64,
    pub max: f64,
    pub range: f64,
}

impl RenderFrame {
    pub fn of(series: &Series) -> Self {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for &v in series.samples() {
            min = min.min(v);
            max = max.max(v);
        }
        if !min.is_finite() || !max.is_finite() {
            return Self { min: 0.0, max: 0.0, range: 0.0 };
        }
        Self { min, max, range: max - min }
    }
}

// File: crates/demo/src/main.rs
// Summary: Demo loads a daily revenue CSV (or the built-in sample) and renders
// the chart in both themes through the full reveal -> sizing -> scene pipeline.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use aurora_chart::{Chart, Color, PrefStore, Series, ThemeManager, ThemeMode};
use aurora_render_skia::RasterSurface;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const LOGICAL_WIDTH: f64 = 800.0;
const LOGICAL_HEIGHT: f64 = 400.0;
const DPR: f64 = 2.0;

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "aurora_demo=info,aurora_chart=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let series = match std::env::args().nth(1) {
        Some(path) => {
            let path = PathBuf::from(path);
            let series = load_revenue_csv(&path)
                .with_context(|| format!("failed to load CSV '{}'", path.display()))?;
            tracing::info!(samples = series.len(), path = %path.display(), "loaded revenue series");
            series
        }
        None => {
            tracing::info!("no CSV given, using the built-in 30-day sample");
            Series::sample_revenue()
        }
    };

    let out_dir = PathBuf::from("target/out");
    let store = FileStore::open(out_dir.join("theme.prefs"))?;
    let themes = ThemeManager::new(Box::new(store), true);
    let start_mode = themes.mode();
    tracing::info!(mode = themes.theme().name, "resolved theme preference");

    let surface = RasterSurface::new(LOGICAL_WIDTH, LOGICAL_HEIGHT)?;
    let mut chart = Chart::new(surface, series, themes, DPR)?;

    // Reveal gates the first paint, exactly like the page observer would.
    set_background_for(&mut chart, start_mode)?;
    chart
        .on_visibility(1.0)
        .context("visibility gate should fire on first reveal")?;
    let first = out_dir.join(format!("revenue_{}.png", chart.theme().name));
    chart.surface_mut().write_png(&first)?;
    println!("Wrote {}", first.display());

    // Toggle: persists the new mode and redraws with the other palette.
    let next = start_mode.toggled();
    set_background_for(&mut chart, next)?;
    chart.set_theme(next);
    let second = out_dir.join(format!("revenue_{}.png", chart.theme().name));
    chart.surface_mut().write_png(&second)?;
    println!("Wrote {}", second.display());

    tracing::info!(mode = chart.theme().name, "persisted toggled theme");
    Ok(())
}

fn set_background_for(chart: &mut Chart<RasterSurface>, mode: ThemeMode) -> Result<()> {
    let theme = aurora_chart::theme::Theme::for_mode(mode);
    let background = Color::from_hex(theme.bg_primary)
        .with_context(|| format!("theme '{}' has a bad background", theme.name))?;
    chart.surface_mut().set_background(background);
    Ok(())
}

/// Load daily values from a CSV with a `revenue` column (falls back to the
/// last column when no such header exists).
fn load_revenue_csv(path: &Path) -> Result<Series> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)?;

    let headers = reader.headers()?.clone();
    let column = headers
        .iter()
        .position(|h| h.eq_ignore_ascii_case("revenue"))
        .unwrap_or(headers.len().saturating_sub(1));

    let mut samples = Vec::new();
    for record in reader.records() {
        let record = record?;
        let field = record
            .get(column)
            .with_context(|| format!("row {} is missing column {column}", samples.len() + 1))?;
        let value: f64 = field
            .parse()
            .with_context(|| format!("'{field}' is not a number"))?;
        samples.push(value);
    }

    if samples.is_empty() {
        anyhow::bail!("no samples in '{}'", path.display());
    }
    Ok(Series::new(samples))
}

/// File-backed preference store: one `key=value` per line. Proves the
/// persistence seam the library only ships memory/no-op stores for.
struct FileStore {
    path: PathBuf,
    entries: HashMap<String, String>,
}

impl FileStore {
    fn open(path: PathBuf) -> Result<Self> {
        let entries = match std::fs::read_to_string(&path) {
            Ok(text) => text
                .lines()
                .filter_map(|line| {
                    let (k, v) = line.split_once('=')?;
                    Some((k.to_string(), v.to_string()))
                })
                .collect(),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(err) => {
                return Err(err).with_context(|| format!("failed to read '{}'", path.display()))
            }
        };
        Ok(Self { path, entries })
    }

    fn flush(&self) {
        let mut lines: Vec<String> =
            self.entries.iter().map(|(k, v)| format!("{k}={v}")).collect();
        lines.sort();
        let body = lines.join("\n");
        if let Some(parent) = self.path.parent() {
            if let Err(err) = std::fs::create_dir_all(parent) {
                tracing::warn!(error = %err, "could not create preference directory");
                return;
            }
        }
        if let Err(err) = std::fs::write(&self.path, body) {
            tracing::warn!(error = %err, path = %self.path.display(), "could not persist preferences");
        }
    }
}

impl PrefStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush();
    }
}

// File: crates/aurora-chart/src/lib.rs
// Summary: Core library entry point; exports public API for the chart pipeline.

pub mod chart;
pub mod color;
pub mod geometry;
pub mod palette;
pub mod recording;
pub mod scene;
pub mod series;
pub mod sizing;
pub mod store;
pub mod surface;
pub mod theme;
pub mod visibility;

pub use chart::{Chart, ChartError};
pub use color::{hex_to_rgba, Color, ColorError};
pub use geometry::{map_point, Insets, Viewport};
pub use palette::Palette;
pub use recording::{DrawOp, RecordingSurface};
pub use series::{RenderFrame, Series};
pub use sizing::{Debouncer, SizingController, RESIZE_DEBOUNCE};
pub use store::{MemoryStore, NoopStore, PrefStore};
pub use surface::{Paint, Path, StrokeStyle, Surface, TextStyle};
pub use theme::{Theme, ThemeManager, ThemeMode, THEME_KEY};
pub use visibility::{EntryAnimation, VisibilityGate, REVEAL_THRESHOLD};

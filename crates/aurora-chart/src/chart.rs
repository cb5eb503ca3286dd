// File: crates/aurora-chart/src/chart.rs
// Summary: Chart coordinator: wires sizing, theming, visibility, and the scene pass.

use std::time::Instant;

use thiserror::Error;

use crate::palette::Palette;
use crate::scene;
use crate::series::Series;
use crate::sizing::{Debouncer, SizingController, RESIZE_DEBOUNCE};
use crate::surface::Surface;
use crate::theme::{Theme, ThemeManager, ThemeMode};
use crate::visibility::{EntryAnimation, VisibilityGate};

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("cannot chart an empty series")]
    EmptySeries,
}

/// The render entry point exposed to the host page. Owns the surface, the
/// series, and the persisted theme mode; consumes discrete host events
/// (visibility, resize, theme change) plus a clock via [`Chart::poll`].
///
/// The first paint is gated behind the visibility observer; resize events
/// that arrive before the reveal never render.
pub struct Chart<S: Surface> {
    surface: S,
    series: Series,
    themes: ThemeManager,
    sizing: SizingController,
    debounce: Debouncer,
    gate: VisibilityGate,
    revealed: bool,
}

impl<S: Surface> Chart<S> {
    pub fn new(
        surface: S,
        series: Series,
        themes: ThemeManager,
        dpr: f64,
    ) -> Result<Self, ChartError> {
        if series.is_empty() {
            return Err(ChartError::EmptySeries);
        }
        Ok(Self {
            surface,
            series,
            themes,
            sizing: SizingController::new(dpr),
            debounce: Debouncer::new(RESIZE_DEBOUNCE),
            gate: VisibilityGate::new(),
            revealed: false,
        })
    }

    /// Host reports the surface's visibility ratio. The first qualifying
    /// ratio triggers the entry animation and the first full render; all
    /// later reports are ignored.
    pub fn on_visibility(&mut self, ratio: f64) -> Option<EntryAnimation> {
        let animation = self.gate.observe(ratio)?;
        self.revealed = true;
        self.render_now();
        Some(animation)
    }

    /// Host reports a resize. Debounced 100 ms trailing-edge; the redraw
    /// fires from [`Chart::poll`] once the burst quiesces.
    pub fn on_resize(&mut self, now: Instant) {
        self.debounce.schedule(now);
    }

    /// Drive pending deadlines. Returns true when a debounced redraw ran.
    pub fn poll(&mut self, now: Instant) -> bool {
        if self.debounce.fire(now) && self.revealed {
            self.render_now();
            return true;
        }
        false
    }

    /// Switch theme mode, persist it, and redraw if already revealed.
    pub fn set_theme(&mut self, mode: ThemeMode) {
        self.themes.set_mode(mode);
        if self.revealed {
            self.render_now();
        }
    }

    pub fn toggle_theme(&mut self) -> ThemeMode {
        let mode = self.themes.toggle();
        if self.revealed {
            self.render_now();
        }
        mode
    }

    pub fn theme(&self) -> Theme {
        self.themes.theme()
    }

    pub fn theme_mode(&self) -> ThemeMode {
        self.themes.mode()
    }

    pub fn series(&self) -> &Series {
        &self.series
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    fn render_now(&mut self) {
        let viewport = self.sizing.apply(&mut self.surface);
        // Palette is resolved fresh every pass so theme switches are
        // picked up without caching.
        let palette = Palette::resolve(&self.themes.theme());
        tracing::debug!(
            width = viewport.width,
            height = viewport.height,
            theme = self.themes.theme().name,
            "render pass"
        );
        scene::render(&mut self.surface, &self.series, &palette, &viewport);
    }
}

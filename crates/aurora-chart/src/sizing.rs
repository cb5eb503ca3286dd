// File: crates/aurora-chart/src/sizing.rs
// Summary: Device-pixel-ratio reconciliation and trailing-edge resize debounce.

use std::time::{Duration, Instant};

use crate::geometry::{Insets, Viewport};
use crate::surface::Surface;

/// Resize bursts quiesce for this long before a redraw fires.
pub const RESIZE_DEBOUNCE: Duration = Duration::from_millis(100);

/// Trailing-edge debounce over a single pending deadline. Each schedule
/// cancels and replaces the previous one, so at most one redraw is
/// outstanding and only the last event of a burst fires.
#[derive(Clone, Copy, Debug)]
pub struct Debouncer {
    window: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    pub fn new(window: Duration) -> Self {
        Self { window, deadline: None }
    }

    pub fn schedule(&mut self, now: Instant) {
        self.deadline = Some(now + self.window);
    }

    /// True exactly once per elapsed deadline.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    pub fn pending(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }
}

/// Reconciles the surface backing store with the device pixel ratio so unit
/// coordinates remain logical pixels.
#[derive(Clone, Copy, Debug)]
pub struct SizingController {
    dpr: f64,
    insets: Insets,
}

impl SizingController {
    pub fn new(dpr: f64) -> Self {
        let dpr = if dpr.is_finite() && dpr > 0.0 { dpr } else { 1.0 };
        Self { dpr, insets: Insets::default() }
    }

    pub fn with_insets(mut self, insets: Insets) -> Self {
        self.insets = insets;
        self
    }

    pub fn dpr(&self) -> f64 {
        self.dpr
    }

    /// Read the surface bounding box, size the backing store at device
    /// resolution, scale the transform back to logical pixels, and return
    /// the viewport for this pass.
    pub fn apply<S: Surface>(&self, surface: &mut S) -> Viewport {
        let (width, height) = surface.bounding_box();
        surface.set_resolution(
            (width * self.dpr).round() as u32,
            (height * self.dpr).round() as u32,
        );
        surface.set_scale(self.dpr);
        surface.set_logical_size(width, height);
        Viewport::new(width, height, self.insets)
    }
}

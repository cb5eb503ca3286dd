// File: crates/aurora-chart/src/visibility.rs
// Summary: Fire-once visibility gate and the entry animation descriptor.

use std::time::Duration;

/// Fraction of the surface that must be visible before the first paint.
pub const REVEAL_THRESHOLD: f64 = 0.3;

/// Opacity/translate transition the host applies when the chart first
/// becomes visible.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EntryAnimation {
    pub duration: Duration,
    pub delay: Duration,
    /// Vertical travel, in logical pixels (starts low, rises into place).
    pub rise_px: f64,
    pub from_opacity: f64,
    pub to_opacity: f64,
}

impl EntryAnimation {
    pub const fn descriptor() -> Self {
        Self {
            duration: Duration::from_millis(600),
            delay: Duration::from_millis(100),
            rise_px: 20.0,
            from_opacity: 0.0,
            to_opacity: 1.0,
        }
    }
}

/// Watches visibility ratios and fires exactly once, on the first ratio at
/// or above the threshold. Disarms itself afterwards; later ratios return
/// nothing.
#[derive(Clone, Copy, Debug)]
pub struct VisibilityGate {
    threshold: f64,
    armed: bool,
}

impl Default for VisibilityGate {
    fn default() -> Self {
        Self::new()
    }
}

impl VisibilityGate {
    pub fn new() -> Self {
        Self { threshold: REVEAL_THRESHOLD, armed: true }
    }

    pub fn with_threshold(threshold: f64) -> Self {
        Self { threshold, armed: true }
    }

    pub fn observe(&mut self, ratio: f64) -> Option<EntryAnimation> {
        if self.armed && ratio >= self.threshold {
            self.armed = false;
            Some(EntryAnimation::descriptor())
        } else {
            None
        }
    }

    pub fn fired(&self) -> bool {
        !self.armed
    }
}

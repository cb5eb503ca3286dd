// File: crates/aurora-chart/src/palette.rs
// Summary: Per-render resolution of theme custom properties into typed colors.

use crate::color::Color;
use crate::theme::Theme;

// Role defaults, used when a theme property is missing or unparseable.
// These match the dark preset.
const FALLBACK_BACKGROUND: Color = Color { r: 0x1F, g: 0x24, b: 0x30 };
const FALLBACK_TEXT: Color = Color { r: 0x8A, g: 0x93, b: 0xA6 };
const FALLBACK_PRIMARY: Color = Color { r: 0x63, g: 0x66, b: 0xF1 };
const FALLBACK_SECONDARY: Color = Color { r: 0x22, g: 0xD3, b: 0xEE };
const FALLBACK_BG_PRIMARY: Color = Color { r: 0x0B, g: 0x0E, b: 0x14 };

/// Resolved set of theme-derived colors used for one render pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    /// Gridline color (`--bg-tertiary`).
    pub background: Color,
    /// Axis label color (`--text-tertiary`).
    pub text: Color,
    pub primary: Color,
    pub secondary: Color,
    /// Point-marker outline color (`--bg-primary`).
    pub background_primary: Color,
}

impl Palette {
    /// Read the named custom properties from the active theme. Resolved
    /// fresh every render so external theme switches are picked up.
    pub fn resolve(theme: &Theme) -> Self {
        Self {
            background: role(theme, "--bg-tertiary", FALLBACK_BACKGROUND),
            text: role(theme, "--text-tertiary", FALLBACK_TEXT),
            primary: role(theme, "--primary", FALLBACK_PRIMARY),
            secondary: role(theme, "--secondary", FALLBACK_SECONDARY),
            background_primary: role(theme, "--bg-primary", FALLBACK_BG_PRIMARY),
        }
    }
}

fn role(theme: &Theme, property: &str, fallback: Color) -> Color {
    match theme.property(property) {
        Some(hex) => match Color::from_hex(hex) {
            Ok(color) => color,
            Err(err) => {
                tracing::warn!(property, hex, error = %err, "unparseable theme color, using role default");
                fallback
            }
        },
        None => {
            tracing::warn!(property, "missing theme property, using role default");
            fallback
        }
    }
}

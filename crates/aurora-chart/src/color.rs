// File: crates/aurora-chart/src/color.rs
// Summary: Hex color parsing and rgba string conversion.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorError {
    #[error("expected 6 hex digits, got {0}")]
    Length(usize),
    #[error("invalid hex digit in color")]
    Digit,
}

/// An opaque RGB color; alpha is applied at paint time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Parse a 6-digit hex string, with or without the leading `#`.
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 {
            return Err(ColorError::Length(digits.len()));
        }
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorError::Digit);
        }
        let r = u8::from_str_radix(&digits[0..2], 16).map_err(|_| ColorError::Digit)?;
        let g = u8::from_str_radix(&digits[2..4], 16).map_err(|_| ColorError::Digit)?;
        let b = u8::from_str_radix(&digits[4..6], 16).map_err(|_| ColorError::Digit)?;
        Ok(Self { r, g, b })
    }

    /// Format as a CSS-style rgba string, e.g. `rgba(255, 0, 0, 0.5)`.
    pub fn rgba(&self, alpha: f64) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
    }
}

/// Convert a hex color to an rgba string.
///
/// Malformed input (wrong length, non-hex digits) returns the transparent
/// sentinel `rgba(0, 0, 0, 0)` with a logged warning rather than letting a
/// parse failure leak into the drawing surface.
pub fn hex_to_rgba(hex: &str, alpha: f64) -> String {
    match Color::from_hex(hex) {
        Ok(color) => color.rgba(alpha),
        Err(err) => {
            tracing::warn!(hex, error = %err, "malformed hex color, substituting transparent");
            String::from("rgba(0, 0, 0, 0)")
        }
    }
}

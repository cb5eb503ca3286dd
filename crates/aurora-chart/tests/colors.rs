// File: crates/aurora-chart/tests/colors.rs
// Purpose: Hex parsing and rgba conversion, including the malformed-input sentinel.

use aurora_chart::color::ColorError;
use aurora_chart::{hex_to_rgba, Color};

#[test]
fn hex_to_rgba_with_hash() {
    assert_eq!(hex_to_rgba("#FF0000", 0.5), "rgba(255, 0, 0, 0.5)");
}

#[test]
fn hex_to_rgba_without_hash() {
    assert_eq!(hex_to_rgba("00FF00", 1.0), "rgba(0, 255, 0, 1)");
}

#[test]
fn mixed_case_digits_parse() {
    let c = Color::from_hex("#0a0B0c").expect("valid hex");
    assert_eq!(c, Color { r: 10, g: 11, b: 12 });
}

#[test]
fn wrong_length_is_rejected() {
    assert_eq!(Color::from_hex("#12345"), Err(ColorError::Length(5)));
    assert_eq!(Color::from_hex("1234567"), Err(ColorError::Length(7)));
}

#[test]
fn non_hex_digits_are_rejected() {
    assert_eq!(Color::from_hex("zzzzzz"), Err(ColorError::Digit));
}

#[test]
fn malformed_input_yields_transparent_sentinel() {
    // Never rgba(NaN, NaN, NaN, a).
    assert_eq!(hex_to_rgba("#12345", 1.0), "rgba(0, 0, 0, 0)");
    assert_eq!(hex_to_rgba("not-hex", 0.3), "rgba(0, 0, 0, 0)");
}

//! Grammars for composite token values.
//!
//! Editors work with structured values ([`ShadowValue`], [`TransitionValue`],
//! [`DimensionValue`], [`RadiusValue`], [`ColorValue`]) and store the flat CSS
//! string each one encodes to. Every `decode` reads back what the matching
//! `encode` produced; arbitrary external strings are read best-effort and
//! rejected with [`ParseError::Grammar`](crate::tokens::errors::ParseError::Grammar)
//! when they do not fit.

pub mod color;
pub mod dimension;
pub mod shadow;
pub mod transition;

pub use color::{ColorMode, ColorValue};
pub use dimension::{DimensionUnit, DimensionValue, RadiusValue};
pub use shadow::ShadowValue;
pub use transition::{TimingFunction, TransitionProperty, TransitionValue};

use tokensmith_core::types::color::parse_unsigned_decimal;

/// Font stacks offered by the typography editor.
pub const PRESET_FONT_FAMILIES: [&str; 4] = [
    "'Inter', -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif",
    "'Roboto', -apple-system, BlinkMacSystemFont, sans-serif",
    "'JetBrains Mono', 'Fira Code', monospace",
    "Georgia, 'Times New Roman', serif",
];

/// Parses an optionally negative plain decimal (`-1.5`, `.5`, `12`).
pub(crate) fn parse_decimal(s: &str) -> Option<f64> {
    match s.strip_prefix('-') {
        Some(magnitude) => parse_unsigned_decimal(magnitude).map(|v| -v),
        None => parse_unsigned_decimal(s),
    }
}

/// Shortest decimal form of `value`: `2.0` prints as `2`, `-0.0` as `0`.
pub(crate) fn format_number(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("12", Some(12.0))]
    #[case("-1.5", Some(-1.5))]
    #[case(".5", Some(0.5))]
    #[case("", None)]
    #[case("-", None)]
    #[case("1e3", None)]
    #[case("+2", None)]
    #[case("--2", None)]
    fn test_decimal_parsing(#[case] input: &str, #[case] expected: Option<f64>) {
        assert_eq!(parse_decimal(input), expected);
    }

    #[rstest]
    #[case(2.0, "2")]
    #[case(-0.0, "0")]
    #[case(0.25, "0.25")]
    #[case(-3.5, "-3.5")]
    fn test_number_formatting(#[case] value: f64, #[case] expected: &str) {
        assert_eq!(format_number(value), expected);
    }

    #[test]
    fn test_font_presets_are_distinct() {
        let mut presets = PRESET_FONT_FAMILIES.to_vec();
        presets.sort_unstable();
        presets.dedup();
        assert_eq!(presets.len(), PRESET_FONT_FAMILIES.len());
    }
}

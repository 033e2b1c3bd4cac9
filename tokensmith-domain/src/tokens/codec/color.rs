//! Editing state for color tokens.

use std::fmt;

use serde::{Deserialize, Serialize};
use tokensmith_core::types::color::{
    compose_hsl, compose_rgba, contrast_class, hsl_to_rgb, parse_hex, parse_hsl, parse_rgb_channels,
    rgb_to_hsl,
};
use tokensmith_core::types::{ContrastClass, Rgb};

use crate::tokens::errors::ParseError;

/// Notation a color token is rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Hex,
    Rgb,
    Hsl,
}

impl ColorMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ColorMode::Hex => "hex",
            ColorMode::Rgb => "rgb",
            ColorMode::Hsl => "hsl",
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorValue {
    pub rgb: Rgb,
    /// 0.0-1.0. Only the rgb notation carries it.
    pub alpha: f64,
    pub mode: ColorMode,
}

impl Default for ColorValue {
    fn default() -> Self {
        ColorValue::opaque(Rgb::BLACK, ColorMode::Hex)
    }
}

impl ColorValue {
    pub fn opaque(rgb: Rgb, mode: ColorMode) -> Self {
        ColorValue { rgb, alpha: 1.0, mode }
    }

    pub fn with_mode(self, mode: ColorMode) -> Self {
        ColorValue { mode, ..self }
    }

    pub fn with_alpha(self, alpha: f64) -> Self {
        ColorValue {
            alpha: alpha.clamp(0.0, 1.0),
            ..self
        }
    }

    /// The token string for the current mode.
    ///
    /// Hex and hsl drop the alpha channel.
    pub fn render(&self) -> String {
        match self.mode {
            ColorMode::Hex => self.rgb.to_hex(),
            ColorMode::Rgb => compose_rgba(self.rgb, self.alpha),
            ColorMode::Hsl => compose_hsl(rgb_to_hsl(self.rgb)),
        }
    }

    /// Reads a hex, `rgb()`/`rgba()` or `hsl()` token back into editing state.
    pub fn decode(input: &str) -> Result<Self, ParseError> {
        let s = input.trim();
        if s.starts_with('#') {
            Ok(ColorValue::opaque(parse_hex(s)?, ColorMode::Hex))
        } else if s.starts_with("rgb") {
            let (rgb, alpha) = parse_rgb_channels(s)?;
            Ok(ColorValue::opaque(rgb, ColorMode::Rgb).with_alpha(alpha.unwrap_or(1.0)))
        } else if s.starts_with("hsl") {
            Ok(ColorValue::opaque(hsl_to_rgb(parse_hsl(s)?), ColorMode::Hsl))
        } else {
            Err(ParseError::grammar("color", input, "expected a hex, rgb() or hsl() color"))
        }
    }

    /// Foreground class for text drawn on this color.
    pub fn contrast(&self) -> ContrastClass {
        contrast_class(&self.rgb.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(ColorMode::Hex, "#2563eb")]
    #[case(ColorMode::Rgb, "rgba(37, 99, 235, 0.50)")]
    #[case(ColorMode::Hsl, "hsl(221, 83%, 53%)")]
    fn test_render_per_mode(#[case] mode: ColorMode, #[case] expected: &str) {
        let value = ColorValue::opaque(Rgb::new(0x25, 0x63, 0xeb), mode).with_alpha(0.5);
        assert_eq!(value.render(), expected);
    }

    #[test]
    fn test_decode_hex_is_opaque() {
        let value = ColorValue::decode("#FF8800").unwrap();
        assert_eq!(value, ColorValue::opaque(Rgb::new(255, 136, 0), ColorMode::Hex));
        assert_eq!(value.render(), "#ff8800");
    }

    #[test]
    fn test_decode_rgba_keeps_alpha() {
        let value = ColorValue::decode("rgba(10, 20, 30, 0.25)").unwrap();
        assert_eq!(value.mode, ColorMode::Rgb);
        assert_eq!(value.rgb, Rgb::new(10, 20, 30));
        assert_eq!(value.alpha, 0.25);
        assert_eq!(value.render(), "rgba(10, 20, 30, 0.25)");
    }

    #[test]
    fn test_decode_hsl_converts_to_rgb() {
        let value = ColorValue::decode("hsl(0, 100%, 50%)").unwrap();
        assert_eq!(value, ColorValue::opaque(Rgb::new(255, 0, 0), ColorMode::Hsl));
        assert_eq!(value.render(), "hsl(0, 100%, 50%)");
    }

    #[rstest]
    #[case("red")]
    #[case("")]
    #[case("#12")]
    #[case("rgb(300, 0, 0)")]
    #[case("hsl(10, 200%, 50%)")]
    fn test_decode_rejects(#[case] input: &str) {
        assert!(ColorValue::decode(input).is_err());
    }

    #[test]
    fn test_switching_mode_keeps_channels() {
        let value = ColorValue::decode("#059669").unwrap().with_mode(ColorMode::Rgb);
        assert_eq!(value.render(), "rgba(5, 150, 105, 1.00)");
        assert_eq!(value.contrast(), ContrastClass::Light);
    }
}

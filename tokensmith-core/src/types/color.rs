//! Color parsing, composition and classification.
//!
//! This module provides the pure color codec used when editing color tokens
//! and shadow colors:
//!
//! - [`parse_hex`] reads a 6-digit hex color (with or without the leading `#`)
//!   into an [`Rgb`] triple.
//! - [`compose_rgba`] and [`compose_hsl`] render the CSS functional notations.
//! - [`rgb_to_hsl`] / [`hsl_to_rgb`] convert between the two color models with
//!   integer rounding on the HSL side.
//! - [`parse_rgb_channels`] and [`parse_hsl`] read the functional notations back.
//! - [`contrast_class`] decides whether light or dark foreground text should be
//!   drawn on top of a color.
//!
//! # Examples
//!
//! ```
//! use tokensmith_core::types::color::{compose_rgba, contrast_class, parse_hex, ContrastClass};
//!
//! let rgb = parse_hex("#2563eb").unwrap();
//! assert_eq!(compose_rgba(rgb, 0.5), "rgba(37, 99, 235, 0.50)");
//! assert_eq!(rgb.to_hex(), "#2563eb");
//! assert_eq!(contrast_class("#2563eb"), ContrastClass::Light);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// The swatches offered by color editors.
pub const PRESET_COLORS: [&str; 15] = [
    "#2563eb", "#7c3aed", "#059669", "#d97706", "#dc2626",
    "#0891b2", "#7e22ce", "#059669", "#ea580c", "#e11d48",
    "#64748b", "#374151", "#111827", "#f3f4f6", "#ffffff",
];

/// Luminance at or above which a background counts as bright.
const LUMINANCE_THRESHOLD: f64 = 128.0;

/// Error type for color parsing operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    /// The input is not shaped like a hex color at all.
    #[error("Invalid hex color string format: '{0}'. Expected #RRGGBB.")]
    InvalidHexFormat(String),

    /// A channel pair contains a character that is not a hex digit.
    #[error("Invalid hex digit in '{0}'")]
    InvalidHexDigit(String),

    /// The hex color does not have exactly six digits.
    #[error("Invalid hex color string length: '{0}'. Expected 6 characters after '#'.")]
    InvalidHexLength(String),

    /// A functional notation (`rgb()`, `rgba()`, `hsl()`) is malformed.
    #[error("Invalid color string format: {0}")]
    InvalidFormat(String),
}

/// An opaque color as three 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }

    /// Renders the color as lowercase `#rrggbb`.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Perceived brightness on a 0-255 scale (ITU-R BT.601 weights).
    pub fn luminance(&self) -> f64 {
        0.299 * f64::from(self.r) + 0.587 * f64::from(self.g) + 0.114 * f64::from(self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

/// A color in HSL space with integer components.
///
/// `h` is in degrees `[0, 360)`, `s` and `l` are percentages `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Hsl {
    pub h: u16,
    pub s: u8,
    pub l: u8,
}

/// Which foreground should be drawn on top of a color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContrastClass {
    /// The color is dark; use light text on it.
    Light,
    /// The color is bright (or unknown); use dark text on it.
    Dark,
}

impl ContrastClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContrastClass::Light => "light",
            ContrastClass::Dark => "dark",
        }
    }
}

impl fmt::Display for ContrastClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses a 6-digit hex color, optionally prefixed with `#`.
///
/// Hex digits are case-insensitive. Shorthand (`#abc`) and alpha (`#rrggbbaa`)
/// forms are rejected.
///
/// # Errors
/// Returns [`ColorParseError::InvalidHexLength`] when the digit count is not 6,
/// [`ColorParseError::InvalidHexFormat`] for non-ASCII input and
/// [`ColorParseError::InvalidHexDigit`] when a channel is not hexadecimal.
pub fn parse_hex(hex: &str) -> Result<Rgb, ColorParseError> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if !digits.is_ascii() {
        return Err(ColorParseError::InvalidHexFormat(hex.to_string()));
    }
    if digits.len() != 6 {
        return Err(ColorParseError::InvalidHexLength(hex.to_string()));
    }

    let channel = |pair: &str| {
        if !pair.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorParseError::InvalidHexDigit(pair.to_string()));
        }
        u8::from_str_radix(pair, 16).map_err(|_| ColorParseError::InvalidHexDigit(pair.to_string()))
    };

    Ok(Rgb {
        r: channel(&digits[0..2])?,
        g: channel(&digits[2..4])?,
        b: channel(&digits[4..6])?,
    })
}

/// Renders `rgba(r, g, b, a)` with the alpha fixed to two decimals.
pub fn compose_rgba(rgb: Rgb, alpha: f64) -> String {
    format!("rgba({}, {}, {}, {:.2})", rgb.r, rgb.g, rgb.b, alpha.clamp(0.0, 1.0))
}

/// Renders `hsl(h, s%, l%)`.
pub fn compose_hsl(hsl: Hsl) -> String {
    format!("hsl({}, {}%, {}%)", hsl.h, hsl.s, hsl.l)
}

/// Converts 8-bit RGB to integer HSL.
///
/// Achromatic colors (all channels equal) yield `h = 0, s = 0`.
pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let r = f64::from(rgb.r) / 255.0;
    let g = f64::from(rgb.g) / 255.0;
    let b = f64::from(rgb.b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    let (h, s) = if max == min {
        (0.0, 0.0)
    } else {
        let d = max - min;
        let s = if l > 0.5 { d / (2.0 - max - min) } else { d / (max + min) };
        let h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };
        (h / 6.0, s)
    };

    Hsl {
        h: ((h * 360.0).round() as u16) % 360,
        s: (s * 100.0).round() as u8,
        l: (l * 100.0).round() as u8,
    }
}

/// Converts integer HSL back to 8-bit RGB.
///
/// Lossy: HSL components are whole degrees and percents, so a color that went
/// through [`rgb_to_hsl`] may come back a channel step away.
pub fn hsl_to_rgb(hsl: Hsl) -> Rgb {
    let h = f64::from(hsl.h % 360) / 360.0;
    let s = (f64::from(hsl.s) / 100.0).clamp(0.0, 1.0);
    let l = (f64::from(hsl.l) / 100.0).clamp(0.0, 1.0);

    let to_u8 = |v: f64| (v * 255.0).round().clamp(0.0, 255.0) as u8;

    if s == 0.0 {
        let v = to_u8(l);
        return Rgb::new(v, v, v);
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    Rgb::new(
        to_u8(hue_to_rgb(p, q, h + 1.0 / 3.0)),
        to_u8(hue_to_rgb(p, q, h)),
        to_u8(hue_to_rgb(p, q, h - 1.0 / 3.0)),
    )
}

fn hue_to_rgb(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        return p + (q - p) * 6.0 * t;
    }
    if t < 1.0 / 2.0 {
        return q;
    }
    if t < 2.0 / 3.0 {
        return p + (q - p) * (2.0 / 3.0 - t) * 6.0;
    }
    p
}

/// Reads `rgb(r, g, b)` or `rgba(r, g, b[, a])`.
///
/// Channels must be integers in `0..=255`; the optional alpha is a plain
/// decimal (`0.5`, `.25`, `1`). Whitespace around components is ignored.
pub fn parse_rgb_channels(input: &str) -> Result<(Rgb, Option<f64>), ColorParseError> {
    let s = input.trim();
    let body = s
        .strip_prefix("rgba(")
        .or_else(|| s.strip_prefix("rgb("))
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or_else(|| ColorParseError::InvalidFormat(format!("Not an rgb()/rgba() color: {}", input)))?;

    let parts: Vec<&str> = body.split(',').map(str::trim).collect();
    if parts.len() != 3 && parts.len() != 4 {
        return Err(ColorParseError::InvalidFormat(format!(
            "Expected 3 or 4 components in '{}', found {}",
            input,
            parts.len()
        )));
    }

    let channel = |part: &str, name: &str| {
        if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ColorParseError::InvalidFormat(format!("Invalid {} component in '{}'", name, input)));
        }
        part.parse::<u8>()
            .map_err(|e| ColorParseError::InvalidFormat(format!("Invalid {} component in '{}': {}", name, input, e)))
    };

    let rgb = Rgb {
        r: channel(parts[0], "red")?,
        g: channel(parts[1], "green")?,
        b: channel(parts[2], "blue")?,
    };

    let alpha = match parts.get(3) {
        Some(a) => Some(parse_unsigned_decimal(a).ok_or_else(|| {
            ColorParseError::InvalidFormat(format!("Invalid alpha component in '{}'", input))
        })?),
        None => None,
    };

    Ok((rgb, alpha))
}

/// Reads `hsl(h, s%, l%)`; the percent signs are optional.
pub fn parse_hsl(input: &str) -> Result<Hsl, ColorParseError> {
    let s = input.trim();
    let body = s
        .strip_prefix("hsl(")
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or_else(|| ColorParseError::InvalidFormat(format!("Not an hsl() color: {}", input)))?;

    let parts: Vec<&str> = body.split(',').map(str::trim).collect();
    if parts.len() != 3 {
        return Err(ColorParseError::InvalidFormat(format!("Invalid HSL format: {}", input)));
    }

    let h = parts[0]
        .parse::<u16>()
        .map_err(|e| ColorParseError::InvalidFormat(format!("Invalid hue component in '{}': {}", input, e)))?;
    let percent = |part: &str, name: &str| {
        part.strip_suffix('%')
            .unwrap_or(part)
            .parse::<u8>()
            .ok()
            .filter(|v| *v <= 100)
            .ok_or_else(|| ColorParseError::InvalidFormat(format!("Invalid {} component in '{}'", name, input)))
    };

    Ok(Hsl {
        h: h % 360,
        s: percent(parts[1], "saturation")?,
        l: percent(parts[2], "lightness")?,
    })
}

/// Classifies a color string by the foreground it needs.
///
/// Accepts a leading `#rrggbb` (extra trailing digits such as an alpha pair
/// are ignored) or an `rgb(...)`/`rgba(...)` form. Named colors and anything
/// unparsable fall back to [`ContrastClass::Dark`].
pub fn contrast_class(color: &str) -> ContrastClass {
    let color = color.trim();
    let rgb = if let Some(digits) = color.strip_prefix('#') {
        digits.get(..6).and_then(|leading| parse_hex(leading).ok())
    } else if color.starts_with("rgb") {
        color
            .find(')')
            .and_then(|end| parse_rgb_channels(&color[..=end]).ok())
            .map(|(rgb, _)| rgb)
    } else {
        None
    };

    match rgb {
        Some(rgb) if rgb.luminance() < LUMINANCE_THRESHOLD => ContrastClass::Light,
        _ => ContrastClass::Dark,
    }
}

/// Parses `[0-9.]+` as a float, refusing exponents, signs and `inf`/`nan`.
pub fn parse_unsigned_decimal(s: &str) -> Option<f64> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit() || b == b'.') {
        return None;
    }
    s.parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("#2563eb", Rgb::new(0x25, 0x63, 0xeb))]
    #[case("2563eb", Rgb::new(0x25, 0x63, 0xeb))]
    #[case("#FFFFFF", Rgb::new(255, 255, 255))]
    #[case("#000000", Rgb::BLACK)]
    fn test_parse_hex_valid(#[case] input: &str, #[case] expected: Rgb) {
        assert_eq!(parse_hex(input), Ok(expected));
    }

    #[test]
    fn test_parse_hex_errors() {
        assert!(matches!(parse_hex("#fff"), Err(ColorParseError::InvalidHexLength(_))));
        assert!(matches!(parse_hex("#2563ebcc"), Err(ColorParseError::InvalidHexLength(_))));
        assert!(matches!(parse_hex("#12345g"), Err(ColorParseError::InvalidHexDigit(ref p)) if p == "5g"));
        assert!(matches!(parse_hex("#+f0000"), Err(ColorParseError::InvalidHexDigit(_))));
        assert!(matches!(parse_hex("#ééé"), Err(ColorParseError::InvalidHexFormat(_))));
        assert!(parse_hex("").is_err());
    }

    #[test]
    fn test_hex_round_trip_is_case_insensitive() {
        for hex in ["#2563EB", "#7c3aed", "#0A0b0C", "#ffffff", "#000000", "#D97706"] {
            let rgb = parse_hex(hex).expect("valid hex");
            assert_eq!(rgb.to_hex(), hex.to_lowercase());
        }
    }

    #[test]
    fn test_compose_rgba_formats_alpha_to_two_decimals() {
        let rgb = Rgb::new(37, 99, 235);
        assert_eq!(compose_rgba(rgb, 1.0), "rgba(37, 99, 235, 1.00)");
        assert_eq!(compose_rgba(rgb, 0.5), "rgba(37, 99, 235, 0.50)");
        assert_eq!(compose_rgba(rgb, 0.57), "rgba(37, 99, 235, 0.57)");
        assert_eq!(compose_rgba(rgb, 0.0), "rgba(37, 99, 235, 0.00)");
    }

    #[test]
    fn test_compose_rgba_channels_round_trip() {
        for hex in PRESET_COLORS {
            let rgb = parse_hex(hex).unwrap();
            let (back, alpha) = parse_rgb_channels(&compose_rgba(rgb, 0.33)).unwrap();
            assert_eq!(back, rgb);
            assert_eq!(back.to_hex(), hex);
            assert_eq!(alpha, Some(0.33));
        }
    }

    #[rstest]
    #[case(Rgb::new(255, 0, 0), Hsl { h: 0, s: 100, l: 50 })]
    #[case(Rgb::new(0, 255, 0), Hsl { h: 120, s: 100, l: 50 })]
    #[case(Rgb::new(0, 0, 255), Hsl { h: 240, s: 100, l: 50 })]
    #[case(Rgb::new(37, 99, 235), Hsl { h: 221, s: 83, l: 53 })]
    #[case(Rgb::new(128, 128, 128), Hsl { h: 0, s: 0, l: 50 })]
    #[case(Rgb::new(255, 255, 255), Hsl { h: 0, s: 0, l: 100 })]
    fn test_rgb_to_hsl(#[case] rgb: Rgb, #[case] expected: Hsl) {
        assert_eq!(rgb_to_hsl(rgb), expected);
    }

    #[test]
    fn test_rgb_to_hsl_hue_stays_below_360() {
        // Hue just under a full turn rounds up to 360 and must wrap.
        let hsl = rgb_to_hsl(Rgb::new(255, 0, 1));
        assert!(hsl.h < 360);
    }

    #[test]
    fn test_hsl_to_rgb_primaries_and_gray() {
        assert_eq!(hsl_to_rgb(Hsl { h: 0, s: 100, l: 50 }), Rgb::new(255, 0, 0));
        assert_eq!(hsl_to_rgb(Hsl { h: 120, s: 100, l: 50 }), Rgb::new(0, 255, 0));
        assert_eq!(hsl_to_rgb(Hsl { h: 240, s: 100, l: 50 }), Rgb::new(0, 0, 255));
        assert_eq!(hsl_to_rgb(Hsl { h: 0, s: 0, l: 50 }), Rgb::new(128, 128, 128));
    }

    #[test]
    fn test_parse_rgb_channels() {
        assert_eq!(parse_rgb_channels("rgb(1, 2, 3)"), Ok((Rgb::new(1, 2, 3), None)));
        assert_eq!(parse_rgb_channels("rgba(0,0,0,0.05)"), Ok((Rgb::BLACK, Some(0.05))));
        assert_eq!(parse_rgb_channels("rgba(10, 20, 30)"), Ok((Rgb::new(10, 20, 30), None)));
        assert!(parse_rgb_channels("rgba(10, 20, 30, 1e2)").is_err());
        assert!(parse_rgb_channels("rgb(256, 0, 0)").is_err());
        assert!(parse_rgb_channels("rgb(-1, 0, 0)").is_err());
        assert!(parse_rgb_channels("rgb(1, 2)").is_err());
        assert!(parse_rgb_channels("hsl(1, 2%, 3%)").is_err());
    }

    #[test]
    fn test_parse_hsl() {
        assert_eq!(parse_hsl("hsl(221, 83%, 53%)"), Ok(Hsl { h: 221, s: 83, l: 53 }));
        assert_eq!(parse_hsl("hsl(10, 20, 30)"), Ok(Hsl { h: 10, s: 20, l: 30 }));
        assert!(parse_hsl("hsl(10, 120%, 30%)").is_err());
        assert!(parse_hsl("hsl(bad, 20%, 30%)").is_err());
        assert_eq!(compose_hsl(Hsl { h: 221, s: 83, l: 53 }), "hsl(221, 83%, 53%)");
    }

    #[rstest]
    #[case("#000000", ContrastClass::Light)]
    #[case("#ffffff", ContrastClass::Dark)]
    #[case("#2563eb", ContrastClass::Light)]
    #[case("#f3f4f6", ContrastClass::Dark)]
    #[case("#f3f4f6cc", ContrastClass::Dark)]
    #[case("rgba(0, 0, 0, 0.5)", ContrastClass::Light)]
    #[case("rgb(250, 250, 250)", ContrastClass::Dark)]
    #[case("rebeccapurple", ContrastClass::Dark)]
    #[case("#fff", ContrastClass::Dark)]
    #[case("rgb(oops)", ContrastClass::Dark)]
    #[case("", ContrastClass::Dark)]
    fn test_contrast_class(#[case] input: &str, #[case] expected: ContrastClass) {
        assert_eq!(contrast_class(input), expected);
    }

    #[test]
    fn test_contrast_threshold_boundary() {
        assert_eq!(contrast_class("#818181"), ContrastClass::Dark);
        assert_eq!(contrast_class("#7f7f7f"), ContrastClass::Light);
    }

    #[test]
    fn test_contrast_class_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&ContrastClass::Light).unwrap(), "\"light\"");
        assert_eq!(ContrastClass::Dark.to_string(), "dark");
    }
}

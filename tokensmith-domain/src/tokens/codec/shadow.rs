//! Box-shadow grammar: `<x>px <y>px <blur>px <spread>px <color>`.

use serde::{Deserialize, Serialize};
use tokensmith_core::types::color::{compose_rgba, parse_hex, parse_rgb_channels};

use super::{format_number, parse_decimal};
use crate::tokens::errors::{ParseError, TokenError};

/// A single-layer box shadow as edited field by field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShadowValue {
    pub x: f64,
    pub y: f64,
    pub blur: f64,
    pub spread: f64,
    /// `#rrggbb`.
    pub color: String,
    /// Percent, 0-100.
    pub opacity: u8,
}

impl Default for ShadowValue {
    fn default() -> Self {
        ShadowValue {
            x: 0.0,
            y: 4.0,
            blur: 6.0,
            spread: 0.0,
            color: "#000000".to_string(),
            opacity: 10,
        }
    }
}

impl ShadowValue {
    /// Builds a shadow with its color in canonical `#rrggbb` form.
    ///
    /// # Errors
    ///
    /// `TokenError::Parse` for a color that is not 6-digit hex;
    /// `TokenError::Validation` for a non-finite length or an opacity above 100.
    pub fn new(x: f64, y: f64, blur: f64, spread: f64, color: &str, opacity: u8) -> Result<Self, TokenError> {
        let value = ShadowValue {
            x,
            y,
            blur,
            spread,
            color: String::new(),
            opacity,
        }
        .with_color(color)?;
        value.validate()?;
        Ok(value)
    }

    /// Replaces the color, accepting any case and an optional `#`.
    pub fn with_color(self, color: &str) -> Result<Self, ParseError> {
        Ok(ShadowValue {
            color: parse_hex(color)?.to_hex(),
            ..self
        })
    }

    fn validate(&self) -> Result<(), TokenError> {
        let lengths = [("x", self.x), ("y", self.y), ("blur", self.blur), ("spread", self.spread)];
        if let Some((field, value)) = lengths.iter().find(|(_, v)| !v.is_finite()) {
            return Err(TokenError::validation(format!(
                "Shadow {} must be a finite length, got {}",
                field, value
            )));
        }
        if self.opacity > 100 {
            return Err(TokenError::validation(format!(
                "Shadow opacity must be 0-100, got {}",
                self.opacity
            )));
        }
        Ok(())
    }

    /// Renders the shadow with opacity folded into an `rgba()` color.
    ///
    /// Only values [`decode`](Self::decode) can return are accepted, so the
    /// color must already be lowercase `#rrggbb`; use [`with_color`](Self::with_color)
    /// to normalize one.
    ///
    /// # Errors
    ///
    /// `TokenError::Parse` when `color` is not a hex color,
    /// `TokenError::Validation` when it is not canonical, a length is not
    /// finite or the opacity exceeds 100.
    pub fn encode(&self) -> Result<String, TokenError> {
        self.validate()?;
        let rgb = parse_hex(&self.color).map_err(ParseError::from)?;
        if rgb.to_hex() != self.color {
            return Err(TokenError::validation(format!(
                "Shadow color '{}' is not in #rrggbb form; expected '{}'",
                self.color,
                rgb.to_hex()
            )));
        }
        Ok(format!(
            "{}px {}px {}px {}px {}",
            format_number(self.x),
            format_number(self.y),
            format_number(self.blur),
            format_number(self.spread),
            compose_rgba(rgb, f64::from(self.opacity) / 100.0)
        ))
    }

    /// Reads back a single-layer shadow.
    ///
    /// The first four fields must be `px` lengths. The rest must be exactly one
    /// color: `rgb()`/`rgba()` yields its hex and alpha as a percent, a hex
    /// color yields opacity 100. Unitless zeros and multi-layer shadows are
    /// rejected.
    pub fn decode(input: &str) -> Result<Self, ParseError> {
        let mut rest = input.trim();
        let mut lengths = [0.0_f64; 4];
        for slot in lengths.iter_mut() {
            let end = rest.find(char::is_whitespace).ok_or_else(|| {
                ParseError::grammar("shadow", input, "expected four px lengths followed by a color")
            })?;
            let field = &rest[..end];
            *slot = field
                .strip_suffix("px")
                .and_then(parse_decimal)
                .ok_or_else(|| ParseError::grammar("shadow", input, format!("'{}' is not a px length", field)))?;
            rest = rest[end..].trim_start();
        }

        let (color, opacity) = if rest.starts_with("rgb") {
            let (rgb, alpha) = parse_rgb_channels(rest)?;
            let percent = (alpha.unwrap_or(1.0).clamp(0.0, 1.0) * 100.0).round() as u8;
            (rgb.to_hex(), percent)
        } else if rest.starts_with('#') {
            (parse_hex(rest)?.to_hex(), 100)
        } else {
            return Err(ParseError::grammar(
                "shadow",
                input,
                format!("unsupported shadow color '{}'", rest),
            ));
        };

        let [x, y, blur, spread] = lengths;
        Ok(ShadowValue {
            x,
            y,
            blur,
            spread,
            color,
            opacity,
        })
    }
}

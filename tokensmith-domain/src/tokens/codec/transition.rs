//! Transition grammar: `<property> <duration>ms <timing>`.

use std::fmt;

use serde::{Deserialize, Serialize};
use tokensmith_core::types::color::parse_unsigned_decimal;

use super::format_number;
use crate::tokens::errors::{ParseError, TokenError};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransitionProperty {
    All,
    Opacity,
    Transform,
    BackgroundColor,
    BorderColor,
    Color,
    Custom(String),
}

impl TransitionProperty {
    pub const PRESETS: [TransitionProperty; 6] = [
        TransitionProperty::All,
        TransitionProperty::Opacity,
        TransitionProperty::Transform,
        TransitionProperty::BackgroundColor,
        TransitionProperty::BorderColor,
        TransitionProperty::Color,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            TransitionProperty::All => "all",
            TransitionProperty::Opacity => "opacity",
            TransitionProperty::Transform => "transform",
            TransitionProperty::BackgroundColor => "background-color",
            TransitionProperty::BorderColor => "border-color",
            TransitionProperty::Color => "color",
            TransitionProperty::Custom(s) => s,
        }
    }

    /// Maps a CSS property name to a preset, keeping anything else as a
    /// trimmed `Custom`.
    pub fn classify(s: &str) -> Self {
        let s = s.trim();
        Self::PRESETS
            .into_iter()
            .find(|preset| preset.as_str() == s)
            .unwrap_or_else(|| TransitionProperty::Custom(s.to_string()))
    }
}

impl fmt::Display for TransitionProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimingFunction {
    Ease,
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
    Custom(String),
}

impl TimingFunction {
    pub const PRESETS: [TimingFunction; 5] = [
        TimingFunction::Ease,
        TimingFunction::Linear,
        TimingFunction::EaseIn,
        TimingFunction::EaseOut,
        TimingFunction::EaseInOut,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            TimingFunction::Ease => "ease",
            TimingFunction::Linear => "linear",
            TimingFunction::EaseIn => "ease-in",
            TimingFunction::EaseOut => "ease-out",
            TimingFunction::EaseInOut => "ease-in-out",
            TimingFunction::Custom(s) => s,
        }
    }

    pub fn classify(s: &str) -> Self {
        let s = s.trim();
        Self::PRESETS
            .into_iter()
            .find(|preset| preset.as_str() == s)
            .unwrap_or_else(|| TimingFunction::Custom(s.to_string()))
    }
}

impl fmt::Display for TimingFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A transition as edited field by field.
///
/// A `Custom` property or timing that names a preset, or carries surrounding
/// whitespace, encodes to the same text as its canonical form and so reads
/// back canonical; see [`TransitionValue::normalized`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitionValue {
    pub property: TransitionProperty,
    pub duration_ms: f64,
    pub timing: TimingFunction,
}

impl Default for TransitionValue {
    fn default() -> Self {
        TransitionValue {
            property: TransitionProperty::All,
            duration_ms: 300.0,
            timing: TimingFunction::EaseInOut,
        }
    }
}

impl TransitionValue {
    /// The value `decode` returns for this value's encoding: custom parts
    /// trimmed and reclassified against the presets.
    pub fn normalized(&self) -> Self {
        TransitionValue {
            property: TransitionProperty::classify(self.property.as_str()),
            duration_ms: self.duration_ms,
            timing: TimingFunction::classify(self.timing.as_str()),
        }
    }

    /// # Errors
    ///
    /// `TokenError::Validation` when a custom property or timing is blank, or
    /// the duration is negative or not finite.
    pub fn encode(&self) -> Result<String, TokenError> {
        if !self.duration_ms.is_finite() || self.duration_ms < 0.0 {
            return Err(TokenError::validation(format!(
                "Transition duration must be a non-negative number of milliseconds, got {}",
                self.duration_ms
            )));
        }
        let property = self.property.as_str().trim();
        let timing = self.timing.as_str().trim();
        if property.is_empty() {
            return Err(TokenError::validation("Transition property must not be empty"));
        }
        if timing.is_empty() {
            return Err(TokenError::validation("Transition timing function must not be empty"));
        }
        Ok(format!("{} {}ms {}", property, format_number(self.duration_ms), timing))
    }

    /// Splits on the last space-delimited `<number>ms` field.
    ///
    /// Everything before it is the property and everything after it the
    /// timing function, each matched against the presets. The duration keeps
    /// any fractional part.
    pub fn decode(input: &str) -> Result<Self, ParseError> {
        let fields: Vec<&str> = input.trim().split(' ').collect();
        let (index, duration) = fields
            .iter()
            .enumerate()
            .take(fields.len().saturating_sub(1))
            .skip(1)
            .rev()
            .find_map(|(i, field)| {
                field
                    .strip_suffix("ms")
                    .and_then(parse_unsigned_decimal)
                    .map(|ms| (i, ms))
            })
            .ok_or_else(|| {
                ParseError::grammar("transition", input, "expected '<property> <duration>ms <timing>'")
            })?;

        let property = fields[..index].join(" ");
        let timing = fields[index + 1..].join(" ");
        if property.trim().is_empty() || timing.trim().is_empty() {
            return Err(ParseError::grammar(
                "transition",
                input,
                "property and timing function must not be empty",
            ));
        }

        Ok(TransitionValue {
            property: TransitionProperty::classify(&property),
            duration_ms: duration,
            timing: TimingFunction::classify(&timing),
        })
    }
}

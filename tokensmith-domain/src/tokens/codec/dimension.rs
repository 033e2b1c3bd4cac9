//! Length grammars: `<number><unit>` for spacing and font sizes, `<integer>px`
//! for corner radii.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{format_number, parse_decimal};
use crate::tokens::errors::ParseError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DimensionUnit {
    Rem,
    Em,
    Px,
}

impl DimensionUnit {
    pub const ALL: [DimensionUnit; 3] = [DimensionUnit::Rem, DimensionUnit::Em, DimensionUnit::Px];

    pub fn as_str(self) -> &'static str {
        match self {
            DimensionUnit::Rem => "rem",
            DimensionUnit::Em => "em",
            DimensionUnit::Px => "px",
        }
    }
}

impl fmt::Display for DimensionUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DimensionUnit {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DimensionUnit::ALL
            .into_iter()
            .find(|unit| unit.as_str() == s)
            .ok_or_else(|| ParseError::grammar("unit", s, "expected rem, em or px"))
    }
}

/// A spacing or font-size value such as `1.5rem`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DimensionValue {
    pub amount: f64,
    pub unit: DimensionUnit,
}

impl Default for DimensionValue {
    fn default() -> Self {
        DimensionValue {
            amount: 1.0,
            unit: DimensionUnit::Rem,
        }
    }
}

impl DimensionValue {
    pub fn new(amount: f64, unit: DimensionUnit) -> Self {
        DimensionValue { amount, unit }
    }

    pub fn encode(&self) -> String {
        format!("{}{}", format_number(self.amount), self.unit)
    }

    /// Splits the leading numeric run from the unit suffix.
    pub fn decode(input: &str) -> Result<Self, ParseError> {
        let s = input.trim();
        let split = s
            .char_indices()
            .find(|&(i, c)| !(c.is_ascii_digit() || c == '.' || (c == '-' && i == 0)))
            .map(|(i, _)| i)
            .unwrap_or(s.len());
        let (number, suffix) = s.split_at(split);

        let amount = parse_decimal(number)
            .ok_or_else(|| ParseError::grammar("dimension", input, "expected a leading number"))?;
        let unit = suffix
            .parse::<DimensionUnit>()
            .map_err(|_| ParseError::grammar("dimension", input, "expected a rem, em or px unit"))?;
        Ok(DimensionValue { amount, unit })
    }
}

impl fmt::Display for DimensionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

/// A corner radius in whole pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct RadiusValue(pub u32);

impl RadiusValue {
    pub fn encode(&self) -> String {
        format!("{}px", self.0)
    }

    pub fn decode(input: &str) -> Result<Self, ParseError> {
        let digits = input
            .trim()
            .strip_suffix("px")
            .filter(|d| !d.is_empty() && d.bytes().all(|b| b.is_ascii_digit()))
            .ok_or_else(|| ParseError::grammar("radius", input, "expected an integer followed by 'px'"))?;
        digits
            .parse::<u32>()
            .map(RadiusValue)
            .map_err(|e| ParseError::grammar("radius", input, e.to_string()))
    }
}

impl fmt::Display for RadiusValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

//! Renders a token set into each export format and reads canonical JSON back.
//!
//! All generators walk categories in emission order (colors, spacing,
//! typography, fontFamilies, radius, shadows, transitions) and names in
//! ascending order, so output is stable for a given set.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

use crate::tokens::errors::ParseError;
use crate::tokens::types::{ExportFormat, PartialTokenSet, TokenSet};

#[derive(Serialize)]
struct FigmaLeaf<'a> {
    value: &'a str,
    #[serde(rename = "type")]
    kind: &'static str,
}

/// Serializes categories in emission order rather than key order.
struct FigmaDocument<'a>(&'a TokenSet);

impl Serialize for FigmaDocument<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|(category, entries)| {
            let leaves: BTreeMap<&str, FigmaLeaf<'_>> = entries
                .iter()
                .map(|(name, value)| {
                    (
                        name.as_str(),
                        FigmaLeaf {
                            value,
                            kind: category.figma_type(),
                        },
                    )
                })
                .collect();
            (category.json_key(), leaves)
        }))
    }
}

/// A `:root` block of CSS custom properties.
pub fn to_css(tokens: &TokenSet) -> String {
    let mut css = String::from(":root {\n");
    for (category, entries) in tokens.iter() {
        for (name, value) in entries {
            css.push_str(&format!("  --{}-{}: {};\n", category.css_prefix(), name, value));
        }
    }
    css.push('}');
    css
}

/// SCSS variables, one line each, with a blank line between categories.
pub fn to_scss(tokens: &TokenSet) -> String {
    let mut scss = String::new();
    for (index, (category, entries)) in tokens.iter().enumerate() {
        if index > 0 {
            scss.push('\n');
        }
        for (name, value) in entries {
            scss.push_str(&format!("${}-{}: {};\n", category.css_prefix(), name, value));
        }
    }
    scss
}

/// The canonical document: all seven categories, 2-space indentation.
pub fn to_json(tokens: &TokenSet) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(tokens)
}

/// Figma Tokens layout: every leaf becomes `{ "value": ..., "type": ... }`.
pub fn to_figma_tokens(tokens: &TokenSet) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&FigmaDocument(tokens))
}

/// Reads a canonical JSON document into the categories it carries.
///
/// The top level must be an object; unknown keys are ignored and each known
/// key must map to an object of strings.
pub fn from_json(text: &str) -> Result<PartialTokenSet, ParseError> {
    let value: Value = serde_json::from_str(text)?;
    if !value.is_object() {
        return Err(ParseError::grammar(
            "token document",
            text,
            "expected a JSON object at the top level",
        ));
    }
    Ok(PartialTokenSet::deserialize(value)?)
}

pub fn render(tokens: &TokenSet, format: ExportFormat) -> Result<String, serde_json::Error> {
    match format {
        ExportFormat::Css => Ok(to_css(tokens)),
        ExportFormat::Scss => Ok(to_scss(tokens)),
        ExportFormat::Json => to_json(tokens),
        ExportFormat::Figma => to_figma_tokens(tokens),
    }
}

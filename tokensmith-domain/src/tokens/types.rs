use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::tokens::errors::TokenError;

/// Token name to token value, kept in lexicographic name order.
pub type TokenMap = BTreeMap<String, String>;

/// The seven token categories, in emission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TokenCategory {
    #[serde(rename = "colors")]
    Colors,
    #[serde(rename = "spacing")]
    Spacing,
    #[serde(rename = "typography")]
    Typography,
    #[serde(rename = "fontFamilies")]
    FontFamilies,
    #[serde(rename = "radius")]
    Radius,
    #[serde(rename = "shadows")]
    Shadows,
    #[serde(rename = "transitions")]
    Transitions,
}

impl TokenCategory {
    pub const ALL: [TokenCategory; 7] = [
        TokenCategory::Colors,
        TokenCategory::Spacing,
        TokenCategory::Typography,
        TokenCategory::FontFamilies,
        TokenCategory::Radius,
        TokenCategory::Shadows,
        TokenCategory::Transitions,
    ];

    /// Key of this category in the canonical JSON document.
    pub fn json_key(self) -> &'static str {
        match self {
            TokenCategory::Colors => "colors",
            TokenCategory::Spacing => "spacing",
            TokenCategory::Typography => "typography",
            TokenCategory::FontFamilies => "fontFamilies",
            TokenCategory::Radius => "radius",
            TokenCategory::Shadows => "shadows",
            TokenCategory::Transitions => "transitions",
        }
    }

    /// Variable prefix used by the CSS and SCSS outputs.
    pub fn css_prefix(self) -> &'static str {
        match self {
            TokenCategory::Colors => "color",
            TokenCategory::Spacing => "spacing",
            TokenCategory::Typography => "font-size",
            TokenCategory::FontFamilies => "font-family",
            TokenCategory::Radius => "radius",
            TokenCategory::Shadows => "shadow",
            TokenCategory::Transitions => "transition",
        }
    }

    /// `type` tag written into Figma token leaves.
    pub fn figma_type(self) -> &'static str {
        match self {
            TokenCategory::Colors => "color",
            TokenCategory::Spacing | TokenCategory::Radius => "dimension",
            TokenCategory::Typography => "fontSize",
            TokenCategory::FontFamilies => "fontFamily",
            TokenCategory::Shadows => "boxShadow",
            TokenCategory::Transitions => "transition",
        }
    }
}

impl fmt::Display for TokenCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.json_key())
    }
}

impl FromStr for TokenCategory {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TokenCategory::ALL
            .into_iter()
            .find(|category| category.json_key() == s)
            .ok_or_else(|| TokenError::validation(format!("Unknown token category '{}'", s)))
    }
}

/// The complete token set: every category is always present, possibly empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenSet {
    #[serde(default)]
    pub colors: TokenMap,
    #[serde(default)]
    pub spacing: TokenMap,
    #[serde(default)]
    pub typography: TokenMap,
    #[serde(default, rename = "fontFamilies")]
    pub font_families: TokenMap,
    #[serde(default)]
    pub radius: TokenMap,
    #[serde(default)]
    pub shadows: TokenMap,
    #[serde(default)]
    pub transitions: TokenMap,
}

impl TokenSet {
    /// A set with all seven categories empty.
    pub fn empty() -> Self {
        TokenSet {
            colors: TokenMap::new(),
            spacing: TokenMap::new(),
            typography: TokenMap::new(),
            font_families: TokenMap::new(),
            radius: TokenMap::new(),
            shadows: TokenMap::new(),
            transitions: TokenMap::new(),
        }
    }

    pub fn category(&self, category: TokenCategory) -> &TokenMap {
        match category {
            TokenCategory::Colors => &self.colors,
            TokenCategory::Spacing => &self.spacing,
            TokenCategory::Typography => &self.typography,
            TokenCategory::FontFamilies => &self.font_families,
            TokenCategory::Radius => &self.radius,
            TokenCategory::Shadows => &self.shadows,
            TokenCategory::Transitions => &self.transitions,
        }
    }

    pub fn category_mut(&mut self, category: TokenCategory) -> &mut TokenMap {
        match category {
            TokenCategory::Colors => &mut self.colors,
            TokenCategory::Spacing => &mut self.spacing,
            TokenCategory::Typography => &mut self.typography,
            TokenCategory::FontFamilies => &mut self.font_families,
            TokenCategory::Radius => &mut self.radius,
            TokenCategory::Shadows => &mut self.shadows,
            TokenCategory::Transitions => &mut self.transitions,
        }
    }

    /// Categories with their tokens, in emission order.
    pub fn iter(&self) -> impl Iterator<Item = (TokenCategory, &TokenMap)> + '_ {
        TokenCategory::ALL
            .into_iter()
            .map(move |category| (category, self.category(category)))
    }

    /// Total number of tokens across all categories.
    pub fn len(&self) -> usize {
        self.iter().map(|(_, tokens)| tokens.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A token document as read from an import: any category may be missing.
///
/// Unknown top-level keys are ignored during deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartialTokenSet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colors: Option<TokenMap>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spacing: Option<TokenMap>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub typography: Option<TokenMap>,
    #[serde(default, rename = "fontFamilies", skip_serializing_if = "Option::is_none")]
    pub font_families: Option<TokenMap>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius: Option<TokenMap>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shadows: Option<TokenMap>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transitions: Option<TokenMap>,
}

impl PartialTokenSet {
    pub fn category(&self, category: TokenCategory) -> Option<&TokenMap> {
        match category {
            TokenCategory::Colors => self.colors.as_ref(),
            TokenCategory::Spacing => self.spacing.as_ref(),
            TokenCategory::Typography => self.typography.as_ref(),
            TokenCategory::FontFamilies => self.font_families.as_ref(),
            TokenCategory::Radius => self.radius.as_ref(),
            TokenCategory::Shadows => self.shadows.as_ref(),
            TokenCategory::Transitions => self.transitions.as_ref(),
        }
    }

    /// Consumes the document, yielding the categories it carries in emission order.
    pub fn into_categories(self) -> Vec<(TokenCategory, TokenMap)> {
        let PartialTokenSet {
            colors,
            spacing,
            typography,
            font_families,
            radius,
            shadows,
            transitions,
        } = self;
        [
            (TokenCategory::Colors, colors),
            (TokenCategory::Spacing, spacing),
            (TokenCategory::Typography, typography),
            (TokenCategory::FontFamilies, font_families),
            (TokenCategory::Radius, radius),
            (TokenCategory::Shadows, shadows),
            (TokenCategory::Transitions, transitions),
        ]
        .into_iter()
        .filter_map(|(category, tokens)| tokens.map(|tokens| (category, tokens)))
        .collect()
    }

    /// True when no category is present at all.
    pub fn is_empty(&self) -> bool {
        TokenCategory::ALL
            .into_iter()
            .all(|category| self.category(category).is_none())
    }
}

impl From<TokenSet> for PartialTokenSet {
    fn from(set: TokenSet) -> Self {
        PartialTokenSet {
            colors: Some(set.colors),
            spacing: Some(set.spacing),
            typography: Some(set.typography),
            font_families: Some(set.font_families),
            radius: Some(set.radius),
            shadows: Some(set.shadows),
            transitions: Some(set.transitions),
        }
    }
}

/// Output formats the serializer can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Css,
    Scss,
    Json,
    Figma,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 4] = [
        ExportFormat::Css,
        ExportFormat::Scss,
        ExportFormat::Json,
        ExportFormat::Figma,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ExportFormat::Css => "css",
            ExportFormat::Scss => "scss",
            ExportFormat::Json => "json",
            ExportFormat::Figma => "figma",
        }
    }

    /// File extension for exported artifacts. Figma tokens are plain JSON.
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Json | ExportFormat::Figma => "json",
            ExportFormat::Scss => "scss",
            ExportFormat::Css => "css",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExportFormat {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_lowercase();
        ExportFormat::ALL
            .into_iter()
            .find(|format| format.as_str() == lowered)
            .ok_or_else(|| TokenError::validation(format!("Unknown export format '{}'", s)))
    }
}

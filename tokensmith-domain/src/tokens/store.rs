//! The authoritative in-memory token set.
//!
//! [`TokenStore`] is a plain value owned by its caller; every mutation goes
//! through `&mut self`. No operation ever removes a category, only tokens
//! inside one.

use serde::Serialize;
use tracing::debug;

use crate::tokens::defaults::default_token_set;
use crate::tokens::errors::TokenError;
use crate::tokens::types::{PartialTokenSet, TokenCategory, TokenMap, TokenSet};

/// What an import merged into the store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ImportSummary {
    /// Categories present in the imported document, in emission order.
    pub categories: Vec<TokenCategory>,
    /// Number of tokens written, counting overwrites.
    pub tokens: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenStore {
    tokens: TokenSet,
}

impl Default for TokenStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenStore {
    /// A store holding the built-in default set.
    pub fn new() -> Self {
        Self::with_tokens(default_token_set())
    }

    /// A store whose seven categories are all empty.
    pub fn empty() -> Self {
        Self::with_tokens(TokenSet::empty())
    }

    pub fn with_tokens(tokens: TokenSet) -> Self {
        TokenStore { tokens }
    }

    /// Inserts or overwrites `name` in `category`.
    pub fn add(&mut self, category: TokenCategory, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        debug!(%category, %name, %value, "Setting token");
        self.tokens.category_mut(category).insert(name, value);
    }

    /// Overwrites `name` in `category`. A missing token is added.
    pub fn update(&mut self, category: TokenCategory, name: impl Into<String>, value: impl Into<String>) {
        self.add(category, name, value);
    }

    /// Removes `name` from `category`, returning its old value. Missing names are ignored.
    pub fn remove(&mut self, category: TokenCategory, name: &str) -> Option<String> {
        let removed = self.tokens.category_mut(category).remove(name);
        if removed.is_some() {
            debug!(%category, name, "Removed token");
        }
        removed
    }

    /// Shallow-merges every category present in `partial` into the store.
    ///
    /// Imported names overwrite existing ones; names only in the store are
    /// kept; categories absent from `partial` are left alone.
    pub fn import_merge(&mut self, partial: PartialTokenSet) -> ImportSummary {
        let mut summary = ImportSummary::default();
        for (category, imported) in partial.into_categories() {
            summary.categories.push(category);
            summary.tokens += imported.len();
            self.tokens.category_mut(category).extend(imported);
        }
        debug!(
            categories = summary.categories.len(),
            tokens = summary.tokens,
            "Merged imported tokens"
        );
        summary
    }

    /// Replaces the whole set with the built-in defaults.
    pub fn reset(&mut self) {
        debug!("Resetting tokens to defaults");
        self.tokens = default_token_set();
    }

    /// Adds a token submitted from an editor.
    ///
    /// # Errors
    ///
    /// `TokenError::Validation` if `name` or `value` is empty or whitespace;
    /// the store is left untouched.
    pub fn submit(&mut self, category: TokenCategory, name: &str, value: &str) -> Result<(), TokenError> {
        if name.trim().is_empty() {
            return Err(TokenError::validation(format!("A {} token needs a name", category)));
        }
        if value.trim().is_empty() {
            return Err(TokenError::validation(format!(
                "Token '{}' in {} needs a value",
                name, category
            )));
        }
        self.add(category, name, value);
        Ok(())
    }

    pub fn get(&self, category: TokenCategory, name: &str) -> Option<&str> {
        self.tokens.category(category).get(name).map(String::as_str)
    }

    pub fn category(&self, category: TokenCategory) -> &TokenMap {
        self.tokens.category(category)
    }

    pub fn tokens(&self) -> &TokenSet {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Names in `category` containing `term`, ignoring case, in ascending order.
    pub fn search(&self, category: TokenCategory, term: &str) -> Vec<&str> {
        let needle = term.to_lowercase();
        self.tokens
            .category(category)
            .keys()
            .filter(|name| name.to_lowercase().contains(&needle))
            .map(String::as_str)
            .collect()
    }
}

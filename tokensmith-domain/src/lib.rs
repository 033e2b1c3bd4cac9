//! Domain layer for Tokensmith.
//!
//! Holds the design-token set in a [`TokenStore`], converts structured editor
//! values to and from their CSS strings ([`tokens::codec`]) and renders the set
//! as CSS custom properties, SCSS variables, canonical JSON or Figma tokens
//! ([`tokens::serializer`]).
//!
//! ```rust,ignore
//! use tokensmith_domain::{TokenCategory, TokenStore};
//! use tokensmith_domain::tokens::serializer::to_css;
//!
//! let mut store = TokenStore::new();
//! store.add(TokenCategory::Colors, "brand", "#ff5500");
//! println!("{}", to_css(store.tokens()));
//! ```

pub mod tokens;

pub use tokens::{
    ExportFormat, ImportSummary, ParseError, PartialTokenSet, TokenCategory, TokenError, TokenSet, TokenStore,
};

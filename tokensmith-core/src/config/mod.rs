//! Configuration management.
//!
//! - [`types`]: the schema ([`TokensmithConfig`], [`LoggingConfig`], [`ExportConfig`]).
//! - [`defaults`]: default values wired into the serde attributes.
//! - [`loader`]: [`ConfigLoader`], which finds, parses and validates `config.toml`.
//!
//! # Examples
//!
//! ```rust,ignore
//! use tokensmith_core::config::ConfigLoader;
//!
//! match ConfigLoader::load() {
//!     Ok(config) => println!("Exports go to {}", config.export.base_name),
//!     Err(e) => {
//!         tokensmith_core::logging::init_minimal_logging();
//!         tracing::error!("Configuration error: {}", e);
//!     }
//! }
//! ```

pub mod defaults;
pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{ExportConfig, LoggingConfig, TokensmithConfig};

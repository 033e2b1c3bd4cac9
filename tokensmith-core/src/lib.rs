//! # Tokensmith Core Library (`tokensmith-core`)
//!
//! Foundation shared by the Tokensmith crates:
//!
//! - **Error Handling**: [`CoreError`] and the more specific [`ConfigError`]
//!   and [`LoggingError`].
//! - **Color Types**: [`types::Rgb`], [`types::Hsl`] and the conversions in
//!   [`types::color`].
//! - **Configuration**: TOML-based settings loaded by [`config::ConfigLoader`].
//! - **Logging**: `tracing` setup for console and rolling file output.
//! - **Utilities**: filesystem helpers and platform directory resolution.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use tokensmith_core::config::ConfigLoader;
//! use tokensmith_core::logging::init_logging;
//! use tokensmith_core::error::CoreError;
//!
//! fn main() -> Result<(), CoreError> {
//!     let config = ConfigLoader::load()?;
//!     init_logging(&config.logging, false)?;
//!     tracing::info!("Tokensmith started");
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod types;
pub mod utils;

pub use config::{ConfigLoader, ExportConfig, LoggingConfig, TokensmithConfig};
pub use error::{ConfigError, CoreError, LoggingError};
pub use logging::{init_logging, init_minimal_logging};
pub use types::{ColorParseError, ContrastClass, Hsl, Rgb};

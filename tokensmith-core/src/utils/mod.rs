//! General utilities for Tokensmith core.
//!
//! - [`fs`]: directory creation and whole-file text I/O.
//! - [`paths`]: platform directories for configuration, data and state.

pub mod fs;
pub mod paths;

pub use fs::{ensure_dir_exists, read_to_string, write_string_to_file};

//! Core data types shared by the token tooling.
//!
//! - **Color**: [`Rgb`], [`Hsl`] and the hex/`rgba()`/`hsl()` conversions in
//!   [`color`], plus [`ContrastClass`] for picking readable text on a swatch.

pub mod color;

pub use color::{ColorParseError, ContrastClass, Hsl, Rgb};

//! colorpick converts colors between RGB, CMYK, HSL, Oklch and a canonical
//! floating point form, and parses free-form color literals.
//!
//! ```rust
//! use colorpick::{parse_color, Space};
//!
//! let color = parse_color("oklch(from #ff0000 l c 120)").unwrap();
//! println!("{} {}", color.to_space(Space::Hsl), color.hex());
//! ```

#![deny(missing_docs)]

mod color;
mod convert;
mod error;
mod format;
mod math;
pub mod models;
mod parse;

#[cfg(test)]
mod test;

pub use color::{Color, Component, Components, Space};
pub use error::{OklchError, ParseError, ScanError};
pub use format::{escaped_sequence, hex};
pub use parse::{parse_color, Parser, DEFAULT_MAX_DEPTH};

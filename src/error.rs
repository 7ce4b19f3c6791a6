//! Errors returned while parsing color literals.
//!
//! Malformed text is an expected outcome, so every failure is a value and
//! keeps the offending input for diagnostics.

use std::num::{ParseFloatError, ParseIntError};

use thiserror::Error;

/// A color literal could not be parsed.
///
/// # Examples
///
/// ```rust
/// use colorpick::{parse_color, ParseError};
///
/// let err = parse_color("rgb(abc,def,ghi)").unwrap_err();
/// assert!(matches!(err, ParseError::Rgb { .. }));
/// assert_eq!(err.input(), "rgb(abc,def,ghi)");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    /// None of the known notations matched.
    #[error("unrecognized color format: {input:?}")]
    UnknownFormat {
        /// The text that was parsed.
        input: String,
    },

    /// The literal looked like `#RRGGBB` but could not be scanned.
    #[error("failed to parse hex color {input:?}")]
    Hex {
        /// The text that was parsed.
        input: String,
        /// Where scanning failed.
        source: ScanError,
    },

    /// The literal looked like `rgb(R,G,B)` but could not be scanned.
    #[error("failed to parse RGB color {input:?}")]
    Rgb {
        /// The text that was parsed.
        input: String,
        /// Where scanning failed.
        source: ScanError,
    },

    /// The literal looked like `hsl(H,S,L)` but could not be scanned.
    #[error("failed to parse HSL color {input:?}")]
    Hsl {
        /// The text that was parsed.
        input: String,
        /// Where scanning failed.
        source: ScanError,
    },

    /// The literal looked like `cmyk(C,M,Y,K)` but could not be scanned.
    #[error("failed to parse CMYK color {input:?}")]
    Cmyk {
        /// The text that was parsed.
        input: String,
        /// Where scanning failed.
        source: ScanError,
    },

    /// The literal mentioned `oklch` but broke the absolute or relative
    /// grammar.
    #[error("failed to parse OKLCH color {input:?}")]
    Oklch {
        /// The text that was parsed.
        input: String,
        /// The grammar violation.
        source: OklchError,
    },
}

impl ParseError {
    /// Return the text that failed to parse.
    pub fn input(&self) -> &str {
        match self {
            ParseError::UnknownFormat { input }
            | ParseError::Hex { input, .. }
            | ParseError::Rgb { input, .. }
            | ParseError::Hsl { input, .. }
            | ParseError::Cmyk { input, .. }
            | ParseError::Oklch { input, .. } => input,
        }
    }
}

/// Positional scanning of a fixed-arity notation failed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScanError {
    /// The input ended before the notation was complete.
    #[error("unexpected end of input at {position}")]
    UnexpectedEnd {
        /// Byte offset into the scanned text.
        position: usize,
    },

    /// A literal character of the notation did not match.
    #[error("expected {expected:?} at {position}, found {found:?}")]
    Mismatch {
        /// Byte offset into the scanned text.
        position: usize,
        /// The character the notation requires.
        expected: char,
        /// The character in the input.
        found: char,
    },

    /// A number was expected but no digits were found.
    #[error("expected digits at {position}")]
    ExpectedDigits {
        /// Byte offset into the scanned text.
        position: usize,
    },

    /// The digits did not form a valid integer.
    #[error("invalid integer at {position}")]
    Integer {
        /// Byte offset into the scanned text.
        position: usize,
        /// The underlying conversion failure.
        source: ParseIntError,
    },
}

/// The OKLCH grammar was violated.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OklchError {
    /// Fewer than the three lightness, chroma and hue components.
    #[error("expected 3 components, found {found}")]
    NotEnoughComponents {
        /// The number of components found.
        found: usize,
    },

    /// More than the three components and an alpha.
    #[error("expected at most 4 components, found {found}")]
    TooManyComponents {
        /// The number of components found.
        found: usize,
    },

    /// A relative color with nothing after `from`.
    #[error("relative color is missing its origin")]
    MissingOrigin,

    /// The origin of a relative color failed to parse.
    #[error("invalid origin color")]
    Origin(#[source] Box<ParseError>),

    /// A component was empty.
    #[error("empty value")]
    EmptyValue,

    /// A component was not a number with an optional unit.
    #[error("invalid value {token:?}")]
    InvalidValue {
        /// The offending component.
        token: String,
        /// The underlying conversion failure.
        source: ParseFloatError,
    },

    /// Relative colors were nested deeper than the parser allows.
    #[error("relative colors nested deeper than {limit}")]
    NestingTooDeep {
        /// The configured limit.
        limit: usize,
    },
}

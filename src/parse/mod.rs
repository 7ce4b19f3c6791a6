//! Parse free-form color literals into a typed [`Color`].
//!
//! ```text
//! #RRGGBB                         hex RGB, 2 hex digits per channel
//! rgb(R,G,B)                      integers 0-255
//! hsl(H,S,L)                      integers, H in degrees, S/L in percent
//! cmyk(C,M,Y,K)                   integers 0-100
//! oklch(L C H [/ A])              L,C,H as number|percent|deg|rad|turn
//! oklch(from <color> Lx Cx Hx)    Lx/Cx/Hx := 'l'|'c'|'h'|<value>
//! ```
//!
//! Notations are matched case-insensitively, except for OKLCH literals whose
//! `from` keyword is matched before any normalization.

mod oklch;
mod scan;

use std::str::FromStr;

use log::{debug, trace};

use crate::{
    color::Color,
    error::ParseError,
    models::{Cmyk, Hsl, Rgb},
};

/// The deepest chain of relative origins accepted by [`Parser::default`].
pub const DEFAULT_MAX_DEPTH: usize = 16;

/// Parses color literals.
///
/// ```rust
/// use colorpick::{models::Oklch, Color, Parser};
/// let parser = Parser::new().with_max_depth(2);
/// assert_eq!(
///     parser.parse("oklch(50% 0.2 120)"),
///     Ok(Color::Oklch(Oklch::new(0.5, 0.2, 120.0)))
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Parser {
    max_depth: usize,
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

/// Remove the decorations users paste along with a color: quotes, percent
/// and degree signs and surrounding whitespace.
fn sanitize(text: &str) -> String {
    text.chars()
        .filter(|c| !matches!(c, '"' | '%' | '°'))
        .collect::<String>()
        .trim()
        .to_lowercase()
}

impl Parser {
    /// Create a parser allowing [`DEFAULT_MAX_DEPTH`] nested relative
    /// colors.
    pub const fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Limit how many relative OKLCH origins may be nested inside each other.
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Return the nesting limit for relative OKLCH origins.
    pub const fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Parse a color literal.
    pub fn parse(&self, text: &str) -> Result<Color, ParseError> {
        self.parse_at(text, 0)
    }

    fn parse_at(&self, text: &str, depth: usize) -> Result<Color, ParseError> {
        trace!("parsing color literal {text:?}");

        let result = self.dispatch(text, depth);
        if let Err(err) = &result {
            debug!("rejected color literal {text:?}: {err}");
        }
        result
    }

    fn dispatch(&self, text: &str, depth: usize) -> Result<Color, ParseError> {
        // Checked on the raw text, the relative grammar is case sensitive.
        if text.contains("oklch") {
            trace!("dispatching {text:?} to oklch");
            return self
                .parse_oklch(text, depth)
                .map(Color::from)
                .map_err(|source| ParseError::Oklch {
                    input: text.to_owned(),
                    source,
                });
        }

        let sanitized = sanitize(text);
        let input = || text.to_owned();

        if sanitized.contains('#') {
            trace!("dispatching {sanitized:?} to hex");
            let [red, green, blue] = scan::hex_triplet(&sanitized)
                .map_err(|source| ParseError::Hex { input: input(), source })?;
            Ok(Rgb::new(red, green, blue).into())
        } else if sanitized.contains("rgb") {
            trace!("dispatching {sanitized:?} to rgb");
            let [red, green, blue] = scan::function::<3>(&sanitized, "rgb")
                .map_err(|source| ParseError::Rgb { input: input(), source })?;
            Ok(Rgb::new(red, green, blue).into())
        } else if sanitized.contains("hsl") {
            trace!("dispatching {sanitized:?} to hsl");
            let [hue, saturation, lightness] = scan::function::<3>(&sanitized, "hsl")
                .map_err(|source| ParseError::Hsl { input: input(), source })?;
            Ok(Hsl::new(hue, saturation, lightness).into())
        } else if sanitized.contains("cmyk") {
            trace!("dispatching {sanitized:?} to cmyk");
            let [cyan, magenta, yellow, key] = scan::function::<4>(&sanitized, "cmyk")
                .map_err(|source| ParseError::Cmyk { input: input(), source })?;
            Ok(Cmyk::new(cyan, magenta, yellow, key).into())
        } else {
            Err(ParseError::UnknownFormat { input: input() })
        }
    }
}

/// Parse a color literal with the default [`Parser`].
///
/// ```rust
/// use colorpick::{parse_color, models::Rgb, Color};
/// assert_eq!(parse_color("#ff0000"), Ok(Color::Rgb(Rgb::new(255, 0, 0))));
/// assert!(parse_color("invalid").is_err());
/// ```
pub fn parse_color(text: &str) -> Result<Color, ParseError> {
    Parser::default().parse(text)
}

impl FromStr for Color {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_color(s)
    }
}

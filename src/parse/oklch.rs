//! The absolute and relative OKLCH grammars.
//!
//! ```text
//! oklch(<L> <C> <H> [/ <alpha>])
//! oklch(from <origin> <L|l> <C|c> <H|h> [/ <alpha>])
//! ```

use std::f64::consts::PI;

use log::trace;

use super::Parser;
use crate::{
    color::Component,
    error::OklchError,
    models::{FromCanonical, Oklch, ToCanonical},
};

const RELATIVE_PREFIX: &str = "oklch(from ";

/// A unit suffix on a component value.
#[derive(Clone, Copy, Debug, PartialEq)]
enum Unit {
    Percent,
    Degrees,
    Radians,
    Turns,
    Number,
}

impl Unit {
    /// Split the unit suffix from a token.
    fn split(token: &str) -> (&str, Unit) {
        const SUFFIXES: [(&str, Unit); 4] = [
            ("%", Unit::Percent),
            ("deg", Unit::Degrees),
            ("rad", Unit::Radians),
            ("turn", Unit::Turns),
        ];

        SUFFIXES
            .iter()
            .find_map(|&(suffix, unit)| token.strip_suffix(suffix).map(|number| (number, unit)))
            .unwrap_or((token, Unit::Number))
    }

    fn apply(self, value: Component) -> Component {
        match self {
            Unit::Percent => value / 100.0,
            Unit::Degrees | Unit::Number => value,
            Unit::Radians => value * 180.0 / PI,
            Unit::Turns => value * 360.0,
        }
    }
}

/// Parse a number with an optional `%`, `deg`, `rad` or `turn` suffix.
///
/// Any spelling [`f64`] accepts is a number, so `inf`, `NaN` and overflowing
/// exponents such as `1e400` come through as non-finite components.
pub fn parse_value(token: &str) -> Result<Component, OklchError> {
    let token = token.trim();
    if token.is_empty() {
        return Err(OklchError::EmptyValue);
    }

    let (number, unit) = Unit::split(token);
    let value = number
        .parse::<Component>()
        .map_err(|source| OklchError::InvalidValue {
            token: token.to_owned(),
            source,
        })?;

    Ok(unit.apply(value))
}

/// Split the body of the notation into its three components. A fourth alpha
/// component is validated and dropped.
fn components(body: &str) -> Result<[&str; 3], OklchError> {
    let tokens = body
        .split(|c: char| c.is_whitespace() || c == '/')
        .filter(|token| !token.is_empty())
        .collect::<Vec<_>>();

    match tokens.as_slice() {
        &[l, c, h] => Ok([l, c, h]),
        &[l, c, h, alpha] => {
            if alpha != "none" {
                parse_value(alpha)?;
            }
            Ok([l, c, h])
        }
        _ if tokens.len() < 3 => Err(OklchError::NotEnoughComponents {
            found: tokens.len(),
        }),
        _ => Err(OklchError::TooManyComponents {
            found: tokens.len(),
        }),
    }
}

/// Split the origin color from the components that follow it. The origin
/// ends at the first whitespace outside of parentheses.
fn split_origin(text: &str) -> (&str, &str) {
    let text = text.trim_start();

    let mut depth = 0_usize;
    for (i, c) in text.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            c if c.is_whitespace() && depth == 0 => return (&text[..i], &text[i..]),
            _ => {}
        }
    }

    (text, "")
}

fn strip_notation(text: &str) -> &str {
    let text = text.strip_prefix("oklch(").unwrap_or(text);
    text.strip_suffix(')').unwrap_or(text)
}

impl Parser {
    /// Parse either OKLCH grammar. `depth` counts the relative origins
    /// already being resolved.
    pub(super) fn parse_oklch(&self, text: &str, depth: usize) -> Result<Oklch, OklchError> {
        let text = text.trim();

        match text.strip_prefix(RELATIVE_PREFIX) {
            Some(relative) => self.parse_relative(relative, depth),
            None => {
                let [l, c, h] = components(strip_notation(text))?;
                Ok(Oklch::new(parse_value(l)?, parse_value(c)?, parse_value(h)?))
            }
        }
    }

    fn parse_relative(&self, text: &str, depth: usize) -> Result<Oklch, OklchError> {
        if depth >= self.max_depth {
            return Err(OklchError::NestingTooDeep {
                limit: self.max_depth,
            });
        }

        let text = text.strip_suffix(')').unwrap_or(text);
        let (origin, rest) = split_origin(text);
        if origin.is_empty() {
            return Err(OklchError::MissingOrigin);
        }

        trace!("resolving relative origin {origin:?} at depth {depth}");

        let origin = self
            .parse_at(origin, depth + 1)
            .map_err(|err| OklchError::Origin(Box::new(err)))?;
        let origin = Oklch::from_canonical(&origin.to_canonical());

        let [l, c, h] = components(rest)?;
        let resolve = |token: &str| match token {
            "l" => Ok(origin.lightness),
            "c" => Ok(origin.chroma),
            "h" => Ok(origin.hue),
            _ => parse_value(token),
        };

        Ok(Oklch::new(resolve(l)?, resolve(c)?, resolve(h)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_component_eq, error::ParseError};

    #[test]
    fn values_with_units() {
        assert_eq!(parse_value("50%"), Ok(0.5));
        assert_eq!(parse_value("120deg"), Ok(120.0));
        assert_eq!(parse_value("0.5turn"), Ok(180.0));
        assert_eq!(parse_value(" 0.25 "), Ok(0.25));
        assert_component_eq!(parse_value("2rad").unwrap(), 114.59155902616465, 1.0e-12);
    }

    #[test]
    fn non_finite_values_pass_through() {
        assert_eq!(parse_value("inf"), Ok(f64::INFINITY));
        assert_eq!(parse_value("-inf"), Ok(f64::NEG_INFINITY));
        assert_eq!(parse_value("1e400"), Ok(f64::INFINITY));
        assert!(parse_value("NaN").unwrap().is_nan());

        let oklch = Parser::default()
            .parse_oklch("oklch(inf NaN 1e400)", 0)
            .unwrap();
        assert!(oklch.lightness.is_infinite());
        assert!(oklch.chroma.is_nan());
        assert!(oklch.hue.is_infinite());
    }

    #[test]
    fn invalid_values() {
        assert_eq!(parse_value(""), Err(OklchError::EmptyValue));
        assert!(matches!(
            parse_value("abc"),
            Err(OklchError::InvalidValue { ref token, .. }) if token == "abc"
        ));
        assert!(matches!(
            parse_value("10grad"),
            Err(OklchError::InvalidValue { .. })
        ));
    }

    #[test]
    fn component_count() {
        assert_eq!(components("1 2 3"), Ok(["1", "2", "3"]));
        assert_eq!(components("1 2 3 / 0.5"), Ok(["1", "2", "3"]));
        assert_eq!(components("1 2 3 / none"), Ok(["1", "2", "3"]));
        assert_eq!(
            components("1 2"),
            Err(OklchError::NotEnoughComponents { found: 2 })
        );
        assert_eq!(
            components("1 2 3 / 4 5"),
            Err(OklchError::TooManyComponents { found: 5 })
        );
        assert!(matches!(
            components("1 2 3 / half"),
            Err(OklchError::InvalidValue { .. })
        ));
    }

    #[test]
    fn origin_keeps_parentheses_together() {
        assert_eq!(split_origin("#ff0000 l c h"), ("#ff0000", " l c h"));
        assert_eq!(
            split_origin("oklch(from #fff l c h) 0.5 c h"),
            ("oklch(from #fff l c h)", " 0.5 c h")
        );
        assert_eq!(split_origin("#ff0000"), ("#ff0000", ""));
    }

    #[test]
    fn absolute() {
        let parser = Parser::default();
        assert_eq!(
            parser.parse_oklch("oklch(0.5 0.2 120)", 0),
            Ok(Oklch::new(0.5, 0.2, 120.0))
        );
        assert_eq!(
            parser.parse_oklch("oklch(0.5 0.2 50%)", 0),
            Ok(Oklch::new(0.5, 0.2, 0.5))
        );
    }

    #[test]
    fn relative() {
        let parser = Parser::default();
        let oklch = parser
            .parse_oklch("oklch(from #ff0000 0.8 0.4 h)", 0)
            .unwrap();
        assert_eq!(oklch.lightness, 0.8);
        assert_eq!(oklch.chroma, 0.4);
        assert_component_eq!(oklch.hue, 29.227136);
    }

    #[test]
    fn relative_errors() {
        let parser = Parser::default();
        assert_eq!(
            parser.parse_oklch("oklch(from )", 0),
            Err(OklchError::MissingOrigin)
        );
        assert_eq!(
            parser.parse_oklch("oklch(from #ff0000)", 0),
            Err(OklchError::NotEnoughComponents { found: 0 })
        );
        assert!(matches!(
            parser.parse_oklch("oklch(from nope l c h)", 0),
            Err(OklchError::Origin(ref err)) if matches!(**err, ParseError::UnknownFormat { .. })
        ));
    }

    #[test]
    fn nesting_is_bounded() {
        let parser = Parser::new().with_max_depth(1);
        assert!(parser
            .parse_oklch("oklch(from #ff0000 l c h)", 0)
            .is_ok());
        assert!(matches!(
            parser.parse_oklch("oklch(from oklch(from #ff0000 l c h) l c h)", 0),
            Err(OklchError::Origin(ref err))
                if matches!(**err, ParseError::Oklch { source: OklchError::NestingTooDeep { limit: 1 }, .. })
        ));
    }
}

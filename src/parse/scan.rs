//! Strict positional scanning for the fixed-arity notations.
//!
//! Numbers may be preceded by whitespace, everything else must match the
//! notation exactly. Input after the notation is ignored.

use crate::error::ScanError;

struct Scanner<'a> {
    input: &'a str,
    position: usize,
}

impl<'a> Scanner<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, position: 0 }
    }

    fn rest(&self) -> &'a str {
        &self.input[self.position..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn skip_whitespace(&mut self) {
        let rest = self.rest();
        self.position += rest.len() - rest.trim_start().len();
    }

    fn literal(&mut self, expected: &str) -> Result<(), ScanError> {
        for expected in expected.chars() {
            match self.peek() {
                Some(found) if found == expected => self.position += found.len_utf8(),
                Some(found) => {
                    return Err(ScanError::Mismatch {
                        position: self.position,
                        expected,
                        found,
                    })
                }
                None => {
                    return Err(ScanError::UnexpectedEnd {
                        position: self.position,
                    })
                }
            }
        }
        Ok(())
    }

    /// Scan a decimal integer with an optional sign.
    fn integer(&mut self) -> Result<i32, ScanError> {
        self.skip_whitespace();

        let start = self.position;
        let rest = self.rest();
        if rest.is_empty() {
            return Err(ScanError::UnexpectedEnd { position: start });
        }

        let sign = usize::from(rest.starts_with(['+', '-']));
        let digits = rest[sign..]
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len() - sign);
        if digits == 0 {
            return Err(ScanError::ExpectedDigits { position: start });
        }

        let number = &rest[..sign + digits];
        self.position += number.len();
        number.parse().map_err(|source| ScanError::Integer {
            position: start,
            source,
        })
    }

    /// Scan one or two hexadecimal digits.
    fn hex_byte(&mut self) -> Result<i32, ScanError> {
        self.skip_whitespace();

        let start = self.position;
        let rest = self.rest();
        if rest.is_empty() {
            return Err(ScanError::UnexpectedEnd { position: start });
        }

        let digits = rest
            .chars()
            .take(2)
            .take_while(char::is_ascii_hexdigit)
            .count();
        if digits == 0 {
            return Err(ScanError::ExpectedDigits { position: start });
        }

        let number = &rest[..digits];
        self.position += digits;
        i32::from_str_radix(number, 16).map_err(|source| ScanError::Integer {
            position: start,
            source,
        })
    }
}

/// Scan `#RRGGBB`.
pub fn hex_triplet(input: &str) -> Result<[i32; 3], ScanError> {
    let mut scanner = Scanner::new(input);
    scanner.literal("#")?;

    let mut values = [0; 3];
    for value in values.iter_mut() {
        *value = scanner.hex_byte()?;
    }
    Ok(values)
}

/// Scan `name(v1,v2,...)` with exactly `N` integer arguments.
pub fn function<const N: usize>(input: &str, name: &str) -> Result<[i32; N], ScanError> {
    let mut scanner = Scanner::new(input);
    scanner.literal(name)?;
    scanner.literal("(")?;

    let mut values = [0; N];
    for (i, value) in values.iter_mut().enumerate() {
        if i > 0 {
            scanner.literal(",")?;
        }
        *value = scanner.integer()?;
    }

    scanner.literal(")")?;
    Ok(values)
}

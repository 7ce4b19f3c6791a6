//! A [`Color`] holds a value specified in any of the supported notations.

use crate::models::{Canonical, Cmyk, Hsl, Oklch, Rgb};

/// A 64-bit floating point value that all fractional components are stored
/// as.
pub type Component = f64;

/// Represent the three components that describe a color in a continuous
/// space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Components(pub Component, pub Component, pub Component);

impl Components {
    /// Return new components with each component mapped with the given
    /// function.
    pub fn map(&self, f: impl Fn(Component) -> Component) -> Self {
        Self(f(self.0), f(self.1), f(self.2))
    }
}

/// The notations a [`Color`] can be expressed in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Space {
    /// Floating point red, green and blue in `[0, 1]`. Every conversion
    /// passes through this space.
    Canonical = 0,
    /// 8-bit red, green and blue.
    Rgb = 1,
    /// Cyan, magenta, yellow and key (black) in percent.
    Cmyk = 2,
    /// Hue in degrees, saturation and lightness in percent.
    Hsl = 3,
    /// Perceptual lightness, chroma and hue over the Oklab space.
    Oklch = 4,
}

/// A color in one of the supported notations.
///
/// The set of notations is closed, so every consumer matches exhaustively and
/// adding a notation is checked at compile time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Color {
    /// See [`Canonical`].
    Canonical(Canonical),
    /// See [`Rgb`].
    Rgb(Rgb),
    /// See [`Cmyk`].
    Cmyk(Cmyk),
    /// See [`Hsl`].
    Hsl(Hsl),
    /// See [`Oklch`].
    Oklch(Oklch),
}

impl Color {
    /// Return the notation this color is expressed in.
    pub fn space(&self) -> Space {
        match self {
            Color::Canonical(_) => Space::Canonical,
            Color::Rgb(_) => Space::Rgb,
            Color::Cmyk(_) => Space::Cmyk,
            Color::Hsl(_) => Space::Hsl,
            Color::Oklch(_) => Space::Oklch,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn values_are_thread_safe() {
        assert_send_sync::<Color>();
        assert_send_sync::<Components>();
        assert_send_sync::<crate::Parser>();
        assert_send_sync::<crate::ParseError>();
        assert_send_sync::<crate::OklchError>();
        assert_send_sync::<crate::ScanError>();
    }

    #[test]
    fn components_map() {
        let c = Components(0.1, 0.2, 0.3).map(|v| v * 10.0);
        assert_eq!(c, Components(1.0, 2.0, 3.0));
    }

    #[test]
    fn models_convert_into_matching_variant() {
        assert_eq!(Color::from(Rgb::new(1, 2, 3)).space(), Space::Rgb);
        assert_eq!(Color::from(Cmyk::new(1, 2, 3, 4)).space(), Space::Cmyk);
        assert_eq!(Color::from(Hsl::new(1, 2, 3)).space(), Space::Hsl);
        assert_eq!(Color::from(Oklch::new(0.1, 0.2, 0.3)).space(), Space::Oklch);
        assert_eq!(
            Color::from(Canonical::new(0.1, 0.2, 0.3)).space(),
            Space::Canonical
        );
    }
}

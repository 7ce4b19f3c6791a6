//! Conversions between notations. Every path goes through [`Canonical`], so
//! each model only implements a conversion into and out of it.
//!
//! ```rust
//! use colorpick::{Color, Space};
//! use colorpick::models::{Hsl, Rgb};
//! let green = Color::from(Rgb::new(0, 255, 0));
//! assert_eq!(green.to_space(Space::Hsl), Color::Hsl(Hsl::new(120, 100, 50)));
//! ```

use crate::{
    color::{Color, Space},
    models::{Canonical, Cmyk, FromCanonical, Hsl, Oklch, Rgb, ToCanonical},
};

impl ToCanonical for Color {
    fn to_canonical(&self) -> Canonical {
        match self {
            Color::Canonical(c) => c.to_canonical(),
            Color::Rgb(c) => c.to_canonical(),
            Color::Cmyk(c) => c.to_canonical(),
            Color::Hsl(c) => c.to_canonical(),
            Color::Oklch(c) => c.to_canonical(),
        }
    }
}

impl Color {
    /// Convert a canonical color into the model of the given `space`.
    pub fn from_canonical(space: Space, canonical: &Canonical) -> Self {
        match space {
            Space::Canonical => Canonical::from_canonical(canonical).into(),
            Space::Rgb => Rgb::from_canonical(canonical).into(),
            Space::Cmyk => Cmyk::from_canonical(canonical).into(),
            Space::Hsl => Hsl::from_canonical(canonical).into(),
            Space::Oklch => Oklch::from_canonical(canonical).into(),
        }
    }

    /// Convert this color from its current notation to the specified one. A
    /// color already in `space` is returned unchanged.
    pub fn to_space(&self, space: Space) -> Self {
        if self.space() == space {
            return *self;
        }

        Self::from_canonical(space, &self.to_canonical())
    }
}

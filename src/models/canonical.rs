//! The floating point pivot every conversion passes through.

use super::{FromCanonical, ToCanonical};
use crate::color::{Component, Components};

colorpick_macros::gen_model! {
    /// Red, green and blue as fractions, nominally in `[0, 1]`.
    ///
    /// The extra precision keeps rounding errors out of conversions between
    /// the integer notations. Values outside the nominal range are kept as is
    /// and only clamped when formatted.
    pub struct Canonical {
        /// The red component.
        red: Component,
        /// The green component.
        green: Component,
        /// The blue component.
        blue: Component,
    }
}

impl Canonical {
    /// Return the three channels as generic components.
    pub fn to_components(&self) -> Components {
        Components(self.red, self.green, self.blue)
    }
}

impl From<Components> for Canonical {
    fn from(value: Components) -> Self {
        Self::new(value.0, value.1, value.2)
    }
}

impl ToCanonical for Canonical {
    fn to_canonical(&self) -> Canonical {
        *self
    }
}

impl FromCanonical for Canonical {
    fn from_canonical(canonical: &Canonical) -> Self {
        *canonical
    }
}

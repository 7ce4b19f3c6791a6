//! Model a color with 8-bit red, green and blue channels.

use super::{Canonical, FromCanonical, ToCanonical};
use crate::math::quantize;

colorpick_macros::gen_model! {
    /// A color with integer channels in `[0, 255]`.
    pub struct Rgb {
        /// The red channel.
        red: i32,
        /// The green channel.
        green: i32,
        /// The blue channel.
        blue: i32,
    }
}

impl ToCanonical for Rgb {
    fn to_canonical(&self) -> Canonical {
        Canonical::new(
            self.red as f64 / 255.0,
            self.green as f64 / 255.0,
            self.blue as f64 / 255.0,
        )
    }
}

impl FromCanonical for Rgb {
    fn from_canonical(canonical: &Canonical) -> Self {
        // Out of range values are not clamped here, only when formatting.
        Rgb::new(
            quantize(canonical.red, 255.0),
            quantize(canonical.green, 255.0),
            quantize(canonical.blue, 255.0),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn to_canonical() {
        assert_eq!(Rgb::new(255, 0, 51).to_canonical(), Canonical::new(1.0, 0.0, 0.2));
    }

    #[test]
    fn out_of_range_is_kept() {
        let rgb = Rgb::from_canonical(&Canonical::new(1.2, -0.1, 0.5));
        assert_eq!(rgb, Rgb::new(306, -26, 128));
    }

    proptest! {
        #[test]
        fn round_trip_is_exact(red in 0..=255, green in 0..=255, blue in 0..=255) {
            let rgb = Rgb::new(red, green, blue);
            prop_assert_eq!(Rgb::from_canonical(&rgb.to_canonical()), rgb);
        }
    }
}

//! Model a color with the HSL notation.

use super::{Canonical, FromCanonical, ToCanonical};
use crate::{color::Component, math::quantize};

colorpick_macros::gen_model! {
    /// A color with the HSL notation. The hue is in degrees, `[0, 360]`,
    /// saturation and lightness are in percent, `[0, 100]`.
    pub struct Hsl {
        /// The hue component of the color.
        hue: i32,
        /// The saturation component of the color.
        saturation: i32,
        /// The lightness component of the color.
        lightness: i32,
    }
}

/// Evaluate one channel for a hue offset `t` given in turns.
fn hue_to_channel(p: Component, q: Component, mut t: Component) -> Component {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

impl ToCanonical for Hsl {
    fn to_canonical(&self) -> Canonical {
        let hue = self.hue as Component / 360.0;
        let saturation = self.saturation as Component / 100.0;
        let lightness = self.lightness as Component / 100.0;

        if saturation == 0.0 {
            return Canonical::new(lightness, lightness, lightness);
        }

        let q = if lightness < 0.5 {
            lightness * (1.0 + saturation)
        } else {
            lightness + saturation - lightness * saturation
        };
        let p = 2.0 * lightness - q;

        Canonical::new(
            hue_to_channel(p, q, hue + 1.0 / 3.0),
            hue_to_channel(p, q, hue),
            hue_to_channel(p, q, hue - 1.0 / 3.0),
        )
    }
}

impl FromCanonical for Hsl {
    #[allow(clippy::float_cmp)]
    fn from_canonical(canonical: &Canonical) -> Self {
        let Canonical { red, green, blue } = *canonical;

        let max = red.max(green).max(blue);
        let min = red.min(green).min(blue);
        let delta = max - min;

        let lightness = (max + min) / 2.0;

        let (hue, saturation) = if delta == 0.0 {
            // Achromatic, hue is meaningless.
            (0.0, 0.0)
        } else {
            let saturation = if lightness < 0.5 {
                delta / (max + min)
            } else {
                delta / (2.0 - max - min)
            };

            let hue = if max == red {
                (green - blue) / delta + if green < blue { 6.0 } else { 0.0 }
            } else if max == green {
                (blue - red) / delta + 2.0
            } else {
                (red - green) / delta + 4.0
            };

            (hue / 6.0, saturation)
        };

        Hsl::new(
            quantize(hue, 360.0),
            quantize(saturation, 100.0),
            quantize(lightness, 100.0),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;
    use proptest::prelude::*;

    #[test]
    fn fixtures() {
        const TESTS: &[(f64, f64, f64, Hsl)] = &[
            (1.0, 1.0, 1.0, Hsl::new(0, 0, 100)),
            (0.0, 0.0, 0.0, Hsl::new(0, 0, 0)),
            (1.0, 0.0, 0.0, Hsl::new(0, 100, 50)),
            (0.0, 1.0, 0.0, Hsl::new(120, 100, 50)),
            (0.0, 0.0, 1.0, Hsl::new(240, 100, 50)),
            (0.0, 1.0, 1.0, Hsl::new(180, 100, 50)),
            (1.0, 0.0, 1.0, Hsl::new(300, 100, 50)),
            (1.0, 1.0, 0.0, Hsl::new(60, 100, 50)),
        ];

        for &(red, green, blue, hsl) in TESTS {
            let canonical = Canonical::new(red, green, blue);
            assert_eq!(Hsl::from_canonical(&canonical), hsl);

            let back = hsl.to_canonical();
            assert_component_eq!(back.red, red, 1.0e-9);
            assert_component_eq!(back.green, green, 1.0e-9);
            assert_component_eq!(back.blue, blue, 1.0e-9);
        }
    }

    #[test]
    fn gray_is_achromatic() {
        let hsl = Hsl::from_canonical(&Canonical::new(0.5, 0.5, 0.5));
        assert_eq!(hsl, Hsl::new(0, 0, 50));
        assert_eq!(hsl.to_canonical(), Canonical::new(0.5, 0.5, 0.5));
    }

    #[test]
    fn hue_wraps_when_blue_exceeds_green() {
        // rgb(255, 0, 128)
        let hsl = Hsl::from_canonical(&Canonical::new(1.0, 0.0, 0.5));
        assert_eq!(hsl, Hsl::new(330, 100, 50));
    }

    proptest! {
        #[test]
        fn round_trip_is_exact(hue in 0..360, saturation in 1..=100, lightness in 1..100) {
            let hsl = Hsl::new(hue, saturation, lightness);
            prop_assert_eq!(Hsl::from_canonical(&hsl.to_canonical()), hsl);
        }

        #[test]
        fn achromatic_round_trip(lightness in 0..=100) {
            let hsl = Hsl::new(0, 0, lightness);
            prop_assert_eq!(Hsl::from_canonical(&hsl.to_canonical()), hsl);
        }
    }
}

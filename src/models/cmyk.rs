//! Model a color with the subtractive CMYK notation.

use super::{Canonical, FromCanonical, ToCanonical};
use crate::math::quantize;

colorpick_macros::gen_model! {
    /// A color with cyan, magenta, yellow and key (black) in percent,
    /// `[0, 100]` each.
    pub struct Cmyk {
        /// The cyan component.
        cyan: i32,
        /// The magenta component.
        magenta: i32,
        /// The yellow component.
        yellow: i32,
        /// The key (black) component.
        key: i32,
    }
}

impl ToCanonical for Cmyk {
    fn to_canonical(&self) -> Canonical {
        let white = 1.0 - self.key as f64 / 100.0;

        Canonical::new(
            (1.0 - self.cyan as f64 / 100.0) * white,
            (1.0 - self.magenta as f64 / 100.0) * white,
            (1.0 - self.yellow as f64 / 100.0) * white,
        )
    }
}

impl FromCanonical for Cmyk {
    #[allow(clippy::float_cmp)]
    fn from_canonical(canonical: &Canonical) -> Self {
        let Canonical { red, green, blue } = *canonical;

        let key = 1.0 - red.max(green).max(blue);

        // Pure black, the other components would divide by zero.
        if key == 1.0 {
            return Cmyk::new(0, 0, 0, 100);
        }

        let cyan = (1.0 - red - key) / (1.0 - key);
        let magenta = (1.0 - green - key) / (1.0 - key);
        let yellow = (1.0 - blue - key) / (1.0 - key);

        Cmyk::new(
            quantize(cyan, 100.0),
            quantize(magenta, 100.0),
            quantize(yellow, 100.0),
            quantize(key, 100.0),
        )
    }
}

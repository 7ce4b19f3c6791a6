//! Model a color in the Oklch notation, the cylindrical form of Oklab.
//!
//! Conversions go through linear sRGB and CIE-XYZ (D65):
//!
//! ```text
//! sRGB -> linear sRGB -> XYZ -> LMS -> cube root -> Oklab -> Oklch
//! ```

use super::{Canonical, FromCanonical, ToCanonical};
use crate::{
    color::{Component, Components},
    math::{clamp_unit, normalize_hue, transform, transform_3x3, Transform},
};

/// Below this chroma the hue is noise and is reported as 0.
const ACHROMATIC_CHROMA: Component = 1.0e-4;

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const OKLAB_TO_LMS: Transform = transform_3x3(
    0.9999999984505197,  0.39633779217376786,  0.2158037580607588,
    1.0000000088817607, -0.10556134232365635, -0.06385417477170591,
    1.0000000546724108, -0.08948418209496575, -1.2914855378640917,
);

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const LMS_TO_XYZ: Transform = transform_3x3(
     1.2268798733741557,  -0.5578149965554813,   0.28139105017721583,
    -0.04057576262431372,  1.1122868293970594,  -0.07171106666151701,
    -0.07637294974672142, -0.4214933239627914,   1.5869240244272418,
);

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const XYZ_TO_LINEAR_SRGB: Transform = transform_3x3(
     3.2406254773200533,   -1.5372079722103187,  -0.4986285986588718,
    -0.9689307147293197,    1.8757560608852415,   0.041517523842953964,
     0.055710120445510616, -0.2040259135167538,   1.0569715142428784,
);

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const LINEAR_SRGB_TO_XYZ: Transform = transform_3x3(
    0.4124564390896922,   0.357576077643909,   0.18043748326639894,
    0.21267285140562253,  0.715152155287818,   0.07217499330655958,
    0.019333895582329317, 0.11919202588130297, 0.9503040785363677,
);

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const XYZ_TO_LMS: Transform = transform_3x3(
    0.8189330101, 0.3618667424, -0.1288597137,
    0.0329845436, 0.9293118715,  0.0361456387,
    0.0482003018, 0.2643662691,  0.6338517070,
);

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const LMS_TO_OKLAB: Transform = transform_3x3(
    0.2104542553,  0.7936177850, -0.0040720468,
    1.9779984951, -2.4285922050,  0.4505937099,
    0.0259040371,  0.7827717662, -0.8086757660,
);

fn to_gamma_encoded(value: Component) -> Component {
    if value <= 0.0031308 {
        12.92 * value
    } else {
        1.055 * value.powf(1.0 / 2.4) - 0.055
    }
}

fn to_linear_light(value: Component) -> Component {
    if value <= 0.04045 {
        value / 12.92
    } else {
        ((value + 0.055) / 1.055).powf(2.4)
    }
}

colorpick_macros::gen_model! {
    /// A color in the Oklch notation.
    pub struct Oklch {
        /// The perceptual lightness, `[0, 1]`.
        lightness: Component,
        /// The chroma, nominally `[0, 0.5]` but unbounded.
        chroma: Component,
        /// The hue in degrees, `[0, 360)`.
        hue: Component,
    }
}

impl ToCanonical for Oklch {
    fn to_canonical(&self) -> Canonical {
        let hue = self.hue.to_radians();
        let oklab = Components(
            self.lightness,
            self.chroma * hue.cos(),
            self.chroma * hue.sin(),
        );

        let lms = transform(&OKLAB_TO_LMS, oklab).map(|v| v * v * v);
        let xyz = transform(&LMS_TO_XYZ, lms);
        let linear = transform(&XYZ_TO_LINEAR_SRGB, xyz);

        linear
            .map(|v| clamp_unit(to_gamma_encoded(v)))
            .into()
    }
}

impl FromCanonical for Oklch {
    fn from_canonical(canonical: &Canonical) -> Self {
        let linear = canonical.to_components().map(to_linear_light);
        let xyz = transform(&LINEAR_SRGB_TO_XYZ, linear);
        let lms = transform(&XYZ_TO_LMS, xyz).map(|v| v.cbrt());
        let Components(lightness, a, b) = transform(&LMS_TO_OKLAB, lms);

        let chroma = (a * a + b * b).sqrt();
        let hue = if chroma < ACHROMATIC_CHROMA {
            0.0
        } else {
            normalize_hue(b.atan2(a).to_degrees())
        };

        Oklch::new(lightness, chroma, hue)
    }
}

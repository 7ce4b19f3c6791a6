//! Math utility functions.

use euclid::default::{Transform3D, Vector3D};
use num_traits::Float;

use crate::color::{Component, Components};

pub type Transform = Transform3D<Component>;

type Vector = Vector3D<Component>;

/// Build a [`Transform`] from a 3x3 matrix where each row produces one of the
/// output components.
#[allow(clippy::too_many_arguments)]
#[rustfmt::skip]
pub const fn transform_3x3(
    m11: Component, m12: Component, m13: Component,
    m21: Component, m22: Component, m23: Component,
    m31: Component, m32: Component, m33: Component,
) -> Transform {
    // euclid multiplies row vectors, so the matrix is stored transposed.
    Transform::new(
        m11, m21, m31, 0.0,
        m12, m22, m32, 0.0,
        m13, m23, m33, 0.0,
        0.0, 0.0, 0.0, 1.0,
    )
}

/// Multiply the given matrix in `transform` with the 3 components.
pub fn transform(transform: &Transform, components: Components) -> Components {
    let Vector { x, y, z, .. } =
        transform.transform_vector3d(Vector::new(components.0, components.1, components.2));
    Components(x, y, z)
}

/// Clamp a value into the `[0, 1]` range. NaN is passed through.
pub fn clamp_unit<T: Float>(value: T) -> T {
    if value < T::zero() {
        T::zero()
    } else if value > T::one() {
        T::one()
    } else {
        value
    }
}

/// Wrap a hue in degrees into `[0, 360)`.
pub fn normalize_hue(hue: Component) -> Component {
    let hue = hue.rem_euclid(360.0);
    // rem_euclid can round up to the modulus for tiny negative values.
    if hue >= 360.0 {
        0.0
    } else {
        hue
    }
}

/// Scale a fraction and round it to the nearest integer, halves away from
/// zero.
pub fn quantize(value: Component, scale: Component) -> i32 {
    (value * scale).round() as i32
}

/// Scale a fraction in `[0, 1]` to an 8-bit channel, clamping first.
pub fn to_channel(value: Component) -> u8 {
    (clamp_unit(value) * 255.0).round() as u8
}

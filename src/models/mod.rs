//! Each notation is modeled with its own value type. All conversions pass
//! through [`Canonical`], so every model only needs a conversion into and out
//! of the canonical form.
//!
//! ```rust
//! use colorpick::models::{Cmyk, FromCanonical, Oklch, Rgb, ToCanonical};
//! let red = Rgb::new(255, 0, 0).to_canonical();
//! assert_eq!(Cmyk::from_canonical(&red), Cmyk::new(0, 100, 100, 0));
//! let oklch = Oklch::from_canonical(&red);
//! assert!((oklch.hue - 29.23).abs() < 0.01);
//! ```

mod canonical;
mod cmyk;
mod hsl;
mod oklch;
mod rgb;

pub use canonical::Canonical;
pub use cmyk::Cmyk;
pub use hsl::Hsl;
pub use oklch::Oklch;
pub use rgb::Rgb;

/// Convert a model into the canonical form.
pub trait ToCanonical {
    /// Convert this color to [`Canonical`].
    fn to_canonical(&self) -> Canonical;
}

/// Build a model from the canonical form.
pub trait FromCanonical: Sized {
    /// Convert a [`Canonical`] color into this model.
    fn from_canonical(canonical: &Canonical) -> Self;
}

//! Render colors as text.

use std::fmt;

use crate::{
    color::Color,
    math::to_channel,
    models::{Canonical, Cmyk, Hsl, Oklch, Rgb, ToCanonical},
};

const ESC: char = '\x1b';

fn channels(color: &impl ToCanonical) -> [u8; 3] {
    let Canonical { red, green, blue } = color.to_canonical();
    [to_channel(red), to_channel(green), to_channel(blue)]
}

/// Render a color as an uppercase `#RRGGBB` string. Channels outside the
/// displayable range are clamped.
///
/// ```rust
/// use colorpick::{hex, models::Hsl};
/// assert_eq!(hex(&Hsl::new(120, 100, 50)), "#00FF00");
/// ```
pub fn hex(color: &impl ToCanonical) -> String {
    let [red, green, blue] = channels(color);
    format!("#{red:02X}{green:02X}{blue:02X}")
}

/// Render the ANSI true color escape sequence selecting `color` as the
/// foreground (`ESC[38;2;R;G;Bm`) or background (`ESC[48;2;R;G;Bm`).
pub fn escaped_sequence(color: &impl ToCanonical, foreground: bool) -> String {
    let [red, green, blue] = channels(color);
    let code = if foreground { 38 } else { 48 };
    format!("{ESC}[{code};2;{red};{green};{blue}m")
}

impl fmt::Display for Canonical {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "canonical({:.4}, {:.4}, {:.4})",
            self.red, self.green, self.blue
        )
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.red, self.green, self.blue)
    }
}

impl fmt::Display for Cmyk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cmyk({}%, {}%, {}%, {}%)",
            self.cyan, self.magenta, self.yellow, self.key
        )
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({}, {}%, {}%)", self.hue, self.saturation, self.lightness)
    }
}

impl fmt::Display for Oklch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "oklch({:.1}% {:.3} {:.2})",
            self.lightness * 100.0,
            self.chroma,
            self.hue
        )
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Canonical(c) => fmt::Display::fmt(c, f),
            Color::Rgb(c) => fmt::Display::fmt(c, f),
            Color::Cmyk(c) => fmt::Display::fmt(c, f),
            Color::Hsl(c) => fmt::Display::fmt(c, f),
            Color::Oklch(c) => fmt::Display::fmt(c, f),
        }
    }
}

impl Color {
    /// Render this color as an uppercase `#RRGGBB` string. See [`hex`].
    pub fn hex(&self) -> String {
        hex(self)
    }

    /// Render the ANSI true color escape sequence for this color. See
    /// [`escaped_sequence`].
    pub fn escaped_sequence(&self, foreground: bool) -> String {
        escaped_sequence(self, foreground)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_is_uppercase() {
        assert_eq!(hex(&Rgb::new(171, 205, 239)), "#ABCDEF");
        assert_eq!(hex(&Cmyk::new(0, 100, 100, 0)), "#FF0000");
        assert_eq!(Color::from(Oklch::new(1.0, 0.0, 0.0)).hex(), "#FFFFFF");
    }

    #[test]
    fn hex_clamps_out_of_range_channels() {
        assert_eq!(hex(&Rgb::new(300, -20, 16)), "#FF0010");
        assert_eq!(hex(&Canonical::new(1.5, 0.5, -1.0)), "#FF8000");
    }

    #[test]
    fn escaped_sequences() {
        let red = Rgb::new(255, 0, 0);
        assert_eq!(escaped_sequence(&red, true), "\x1b[38;2;255;0;0m");
        assert_eq!(escaped_sequence(&red, false), "\x1b[48;2;255;0;0m");
        assert_eq!(
            Color::from(Hsl::new(0, 0, 50)).escaped_sequence(true),
            "\x1b[38;2;128;128;128m"
        );
    }

    #[test]
    fn display() {
        assert_eq!(Rgb::new(1, 2, 3).to_string(), "rgb(1, 2, 3)");
        assert_eq!(Cmyk::new(0, 100, 100, 0).to_string(), "cmyk(0%, 100%, 100%, 0%)");
        assert_eq!(Hsl::new(0, 100, 50).to_string(), "hsl(0, 100%, 50%)");
        assert_eq!(
            Oklch::new(0.627987, 0.257640, 29.227136).to_string(),
            "oklch(62.8% 0.258 29.23)"
        );
        assert_eq!(
            Color::from(Canonical::new(1.0, 0.0, 0.5)).to_string(),
            "canonical(1.0000, 0.0000, 0.5000)"
        );
    }
}

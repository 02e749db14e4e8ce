//! Conversions between representations of a [`Color`].
//!
//! Each model only knows how to convert to the other two, so a [`Color`]
//! dispatches to the model it wraps. Conversions through the generic type
//! always round; use the methods on [`Rgb`](crate::Rgb) and
//! [`Cmyk`](crate::Cmyk) directly for precise results.
//!
//! ```rust
//! use colorix::{Color, Hex, Space};
//! let color = Color::from(Hex::new("#ff00ff").unwrap());
//! let cmyk = color.to_space(Space::Cmyk);
//! assert_eq!(cmyk.to_string(), "cmyk(0, 100, 0, 0)");
//! ```

use crate::{Cmyk, Color, Hex, Rgb, Space};

impl Color {
    /// Convert this color to the given representation. Returns an equal
    /// color when it is already in that representation.
    pub fn to_space(&self, space: Space) -> Self {
        if self.space() == space {
            return self.clone();
        }

        match space {
            Space::Rgb => self.to_rgb().into(),
            Space::Cmyk => self.to_cmyk().into(),
            Space::Hex => self.to_hex().into(),
        }
    }

    /// Return this color as RGB.
    pub fn to_rgb(&self) -> Rgb {
        match self {
            Color::Rgb(rgb) => *rgb,
            Color::Cmyk(cmyk) => cmyk.to_rgb(),
            Color::Hex(hex) => hex.to_rgb(),
        }
    }

    /// Return this color as CMYK.
    pub fn to_cmyk(&self) -> Cmyk {
        match self {
            Color::Rgb(rgb) => rgb.to_cmyk(),
            Color::Cmyk(cmyk) => *cmyk,
            Color::Hex(hex) => hex.to_cmyk(),
        }
    }

    /// Return this color as a hex value. This is what a display helper
    /// needs to paint the color.
    pub fn to_hex(&self) -> Hex {
        match self {
            Color::Rgb(rgb) => rgb.to_hex(),
            Color::Cmyk(cmyk) => cmyk.to_hex(),
            Color::Hex(hex) => *hex,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{Cmyk, Color, Hex, Rgb, Space};

    fn chocolate() -> [Color; 3] {
        [
            Rgb::new(210, 105, 30).unwrap().into(),
            Cmyk::new(0, 50, 86, 18).unwrap().into(),
            Hex::new("#d2691e").unwrap().into(),
        ]
    }

    #[test]
    fn test_conversions() {
        use Space as S;

        #[rustfmt::skip]
        const TESTS: &[(usize, Space, &str)] = &[
            (0, S::Rgb,  "rgb(210, 105, 30)"),
            (0, S::Cmyk, "cmyk(0, 50, 86, 18)"),
            (0, S::Hex,  "#d2691e"),
            (1, S::Rgb,  "rgb(209, 105, 29)"),
            (1, S::Cmyk, "cmyk(0, 50, 86, 18)"),
            (1, S::Hex,  "#d1691d"),
            (2, S::Rgb,  "rgb(210, 105, 30)"),
            (2, S::Cmyk, "cmyk(0, 50, 86, 18)"),
            (2, S::Hex,  "#d2691e"),
        ];

        let colors = chocolate();
        for (from, space, expected) in TESTS {
            let converted = colors[*from].to_space(*space);
            assert_eq!(converted.space(), *space);
            assert_eq!(
                converted.to_string(),
                *expected,
                "{} -> {}",
                colors[*from],
                space
            );
        }
    }

    #[test]
    fn same_space_is_identity() {
        for color in chocolate() {
            assert_eq!(color.to_space(color.space()), color);
        }
    }

    #[test]
    fn hex_round_trips_through_rgb() {
        let color = Color::from(Hex::new("#0a0b0c").unwrap());
        let back = color.to_space(Space::Rgb).to_space(Space::Hex);
        assert_eq!(back, color);
    }
}

//! Model a color with red, green and blue channels.

use crate::{
    color::{Component, HasSpace, Space},
    math::{round_if, to_byte, widen, CMYK_SCALE, RGB_SCALE},
    Cmyk, Hex,
};

colorix_macros::gen_model! {
    /// A color made of red, green and blue channels, each `0..=255`.
    ///
    /// Channels created through [`Rgb::new`] or a rounded conversion are
    /// whole numbers, and [`Rgb::new`] rejects fractional input. Precise
    /// conversions may produce fractional channels, which should be rounded
    /// before being used as a pixel value.
    #[scale = RGB_SCALE]
    pub struct Rgb {
        /// The red channel of the color.
        red: Component,
        /// The green channel of the color.
        green: Component,
        /// The blue channel of the color.
        blue: Component,
    }
}

impl HasSpace for Rgb {
    const SPACE: Space = Space::Rgb;
}

impl Rgb {
    /// Convert to the `#rrggbb` notation.
    pub fn to_hex(&self) -> Hex {
        Hex::from_bytes([to_byte(self.red), to_byte(self.green), to_byte(self.blue)])
    }

    /// Convert to CMYK, rounding each channel to a whole number.
    pub fn to_cmyk(&self) -> Cmyk {
        self.to_cmyk_with(false)
    }

    /// Convert to CMYK, keeping the fractional part of each channel.
    pub fn to_cmyk_precise(&self) -> Cmyk {
        self.to_cmyk_with(true)
    }

    /// Convert to CMYK. Channels are rounded unless `precise` is set.
    pub fn to_cmyk_with(&self, precise: bool) -> Cmyk {
        // Pure black would divide by zero below.
        if self.red == 0.0 && self.green == 0.0 && self.blue == 0.0 {
            return Cmyk::new_unchecked(0.0, 0.0, 0.0, CMYK_SCALE);
        }

        let [red, green, blue] = self.to_components().map(|v| widen(v) / widen(RGB_SCALE));

        let key = 1.0 - red.max(green).max(blue);

        let cyan = (1.0 - red - key) / (1.0 - key);
        let magenta = (1.0 - green - key) / (1.0 - key);
        let yellow = (1.0 - blue - key) / (1.0 - key);

        let [cyan, magenta, yellow, key] =
            [cyan, magenta, yellow, key].map(|v| round_if(v * widen(CMYK_SCALE), precise));

        Cmyk::new_unchecked(cyan, magenta, yellow, key)
    }
}

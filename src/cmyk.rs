//! Model a color with cyan, magenta, yellow and key (black) channels.

use crate::{
    color::{Component, HasSpace, Space},
    math::{round_if, widen, CMYK_SCALE, RGB_SCALE},
    Hex, Rgb,
};

colorix_macros::gen_model! {
    /// A color made of cyan, magenta, yellow and key channels, each
    /// `0..=100`.
    #[scale = CMYK_SCALE]
    pub struct Cmyk {
        /// The cyan channel of the color.
        cyan: Component,
        /// The magenta channel of the color.
        magenta: Component,
        /// The yellow channel of the color.
        yellow: Component,
        /// The key (black) channel of the color.
        key: Component,
    }
}

impl HasSpace for Cmyk {
    const SPACE: Space = Space::Cmyk;
}

impl Cmyk {
    /// Convert to RGB, rounding each channel to a whole number.
    pub fn to_rgb(&self) -> Rgb {
        self.to_rgb_with(false)
    }

    /// Convert to RGB, keeping the fractional part of each channel.
    pub fn to_rgb_precise(&self) -> Rgb {
        self.to_rgb_with(true)
    }

    /// Convert to RGB. Channels are rounded unless `precise` is set.
    pub fn to_rgb_with(&self, precise: bool) -> Rgb {
        let [cyan, magenta, yellow, key] =
            self.to_components().map(|v| widen(v) / widen(CMYK_SCALE));

        let [red, green, blue] = [cyan, magenta, yellow]
            .map(|v| round_if(widen(RGB_SCALE) * (1.0 - v) * (1.0 - key), precise));

        Rgb::new_unchecked(red, green, blue)
    }

    /// Convert to the `#rrggbb` notation. This always goes through the
    /// rounded RGB value.
    pub fn to_hex(&self) -> Hex {
        self.to_rgb().to_hex()
    }
}

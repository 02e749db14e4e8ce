//! A [`Color`] holds a value in any of the supported representations.

use std::fmt;
use std::str::FromStr;

use crate::{Cmyk, Error, Hex, Rgb};

#[cfg(not(feature = "f64"))]
/// A 32-bit floating point value that all channels are stored as.
pub type Component = f32;

#[cfg(feature = "f64")]
/// A 64-bit floating point value that all channels are stored as.
pub type Component = f64;

/// The representations a color can be expressed in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Space {
    /// Red, green and blue channels, each `0..=255`.
    Rgb = 0,
    /// Cyan, magenta, yellow and key (black) channels, each `0..=100`.
    Cmyk = 1,
    /// Six hexadecimal digits, two per RGB channel.
    Hex = 2,
}

impl Space {
    /// Every supported representation.
    pub const ALL: [Space; 3] = [Space::Rgb, Space::Cmyk, Space::Hex];

    /// The lowercase name of the representation, as accepted by
    /// [`Space::from_str`].
    pub fn name(&self) -> &'static str {
        match self {
            Space::Rgb => "rgb",
            Space::Cmyk => "cmyk",
            Space::Hex => "hex",
        }
    }
}

impl fmt::Display for Space {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Space {
    type Err = Error;

    /// Parse a mode name, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let folded = s.to_lowercase();
        Space::ALL
            .into_iter()
            .find(|space| space.name() == folded)
            .ok_or_else(|| Error::ModeNotSupported(s.to_string()))
    }
}

/// Implemented by every model to name the representation it belongs to.
pub trait HasSpace {
    /// The representation of the model.
    const SPACE: Space;
}

/// A color in any of the supported representations.
#[derive(Clone, Debug, PartialEq)]
pub enum Color {
    /// A color made of red, green and blue channels.
    Rgb(Rgb),
    /// A color made of cyan, magenta, yellow and key channels.
    Cmyk(Cmyk),
    /// A color written as a hexadecimal string.
    Hex(Hex),
}

impl Color {
    /// The representation this color is currently in.
    pub fn space(&self) -> Space {
        match self {
            Color::Rgb(_) => Space::Rgb,
            Color::Cmyk(_) => Space::Cmyk,
            Color::Hex(_) => Space::Hex,
        }
    }

    /// Return the wrapped RGB value, if that is the representation.
    pub fn as_rgb(&self) -> Option<&Rgb> {
        match self {
            Color::Rgb(rgb) => Some(rgb),
            _ => None,
        }
    }

    /// Return the wrapped CMYK value, if that is the representation.
    pub fn as_cmyk(&self) -> Option<&Cmyk> {
        match self {
            Color::Cmyk(cmyk) => Some(cmyk),
            _ => None,
        }
    }

    /// Return the wrapped hex value, if that is the representation.
    pub fn as_hex(&self) -> Option<&Hex> {
        match self {
            Color::Hex(hex) => Some(hex),
            _ => None,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Rgb(rgb) => rgb.fmt(f),
            Color::Cmyk(cmyk) => cmyk.fmt(f),
            Color::Hex(hex) => hex.fmt(f),
        }
    }
}

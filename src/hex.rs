//! Model a color written as six hexadecimal digits.

use std::fmt;
use std::str::FromStr;

use crate::{
    color::{Color, HasSpace, Space},
    error::{Error, Result},
    Cmyk, Rgb,
};

/// A color in the `#rrggbb` notation.
///
/// Input may use either case and may omit the leading `#`. Only the first
/// six digits are read. The value is always rendered lowercase with the `#`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Hex {
    bytes: [u8; 3],
}

impl HasSpace for Hex {
    const SPACE: Space = Space::Hex;
}

impl Hex {
    /// Parse a hex color such as `#ff00ff` or `FF00FF`. Fails when fewer
    /// than six characters follow the `#` or when one of the first six is
    /// not a hexadecimal digit.
    pub fn new(value: impl AsRef<str>) -> Result<Self> {
        let value = value.as_ref();
        // Only the first six digits are read, anything after them is ignored.
        let Some(digits) = value.trim_start_matches('#').get(..6) else {
            tracing::debug!(value, "Rejected hex color, too short");
            return Err(Error::InvalidHexFormat(value.to_string()));
        };

        let mut bytes = [0_u8; 3];
        match hex::decode_to_slice(digits, &mut bytes) {
            Ok(()) => Ok(Self { bytes }),
            Err(err) => {
                tracing::debug!(value, error = %err, "Rejected hex color");
                Err(Error::InvalidHexFormat(value.to_string()))
            }
        }
    }

    pub(crate) fn from_bytes(bytes: [u8; 3]) -> Self {
        Self { bytes }
    }

    /// The color as `#rrggbb`.
    pub fn hexval(&self) -> String {
        format!("#{}", hex::encode(self.bytes))
    }

    /// The red, green and blue bytes.
    pub fn to_bytes(&self) -> [u8; 3] {
        self.bytes
    }

    /// Convert to RGB. This is lossless.
    pub fn to_rgb(&self) -> Rgb {
        let [red, green, blue] = self.bytes;
        Rgb::new_unchecked(red.into(), green.into(), blue.into())
    }

    /// Convert to CMYK. The result is always rounded.
    pub fn to_cmyk(&self) -> Cmyk {
        self.to_rgb().to_cmyk()
    }
}

impl FromStr for Hex {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl fmt::Display for Hex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hexval())
    }
}

impl From<Hex> for Color {
    fn from(value: Hex) -> Self {
        Color::Hex(value)
    }
}

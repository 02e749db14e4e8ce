//! colorix converts colors between the RGB, CMYK and hexadecimal
//! representations and generates random colors in any of them.
//!
//! ```rust
//! use colorix::{Hex, Rgb};
//! let magenta = Rgb::new(255, 0, 255).unwrap();
//! assert_eq!(magenta.to_hex().hexval(), "#ff00ff");
//! assert_eq!(Hex::new("ff00ff").unwrap().to_rgb(), magenta);
//! ```

#![deny(missing_docs)]

mod cmyk;
mod color;
mod convert;
mod error;
mod hex;
mod math;
mod random;
mod rgb;


pub use cmyk::Cmyk;
pub use color::{Color, Component, HasSpace, Space};
pub use error::{Error, Result};
pub use crate::hex::Hex;
pub use math::{CMYK_SCALE, RGB_SCALE};
pub use random::{random_color, random_color_with, random_in};
pub use rgb::Rgb;

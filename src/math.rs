//! Scale constants and channel helpers shared by all models.

use std::fmt::Display;

use num_traits::ToPrimitive;

use crate::{color::Space, error::Error, Component};

/// Upper bound of an RGB channel.
pub const RGB_SCALE: Component = 255.0;

/// Upper bound of a CMYK channel.
pub const CMYK_SCALE: Component = 100.0;

/// Coerce a caller supplied channel value and check it is a whole number
/// within `0..=scale`.
pub(crate) fn channel<T: ToPrimitive + Display>(
    space: Space,
    name: &'static str,
    value: T,
    scale: Component,
) -> Result<Component, Error> {
    #[cfg(not(feature = "f64"))]
    let coerced = value.to_f32();
    #[cfg(feature = "f64")]
    let coerced = value.to_f64();

    match coerced {
        Some(v) if v.is_finite() && v.fract() == 0.0 && (0.0..=scale).contains(&v) => Ok(v),
        _ => {
            tracing::debug!(%space, channel = name, %value, "Rejected channel value");
            Err(Error::InvalidChannelValue {
                space,
                channel: name,
                value: value.to_string(),
                scale,
            })
        }
    }
}

/// Widen a channel to double precision. Conversion formulas run in `f64`
/// whatever `Component` is, so rounding sees the same value either way.
pub(crate) fn widen(value: Component) -> f64 {
    f64::from(value)
}

/// Round to the nearest integer, ties to even, unless `precise` is set,
/// then narrow back to a channel.
#[allow(clippy::unnecessary_cast)]
pub(crate) fn round_if(value: f64, precise: bool) -> Component {
    if precise {
        value as Component
    } else {
        value.round_ties_even() as Component
    }
}

/// Convert a channel on the RGB scale to a byte, rounding fractional values.
pub(crate) fn to_byte(value: Component) -> u8 {
    num_traits::cast::<Component, u8>(value.round_ties_even().clamp(0.0, RGB_SCALE)).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_accepts_any_primitive() {
        assert_eq!(channel(Space::Rgb, "red", 255_u8, RGB_SCALE), Ok(255.0));
        assert_eq!(channel(Space::Rgb, "red", 0_i64, RGB_SCALE), Ok(0.0));
        assert_eq!(channel(Space::Cmyk, "key", 12.0_f64, CMYK_SCALE), Ok(12.0));
    }

    #[test]
    fn channel_rejects_out_of_range() {
        let err = channel(Space::Rgb, "green", 256, RGB_SCALE).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid rgb channel 'green' value 256 (expected a whole number from 0 to 255)"
        );

        assert!(channel(Space::Cmyk, "cyan", -1, CMYK_SCALE).is_err());
        assert!(channel(Space::Cmyk, "cyan", 101.0, CMYK_SCALE).is_err());
        assert!(channel(Space::Rgb, "blue", f64::NAN, RGB_SCALE).is_err());
        assert!(channel(Space::Rgb, "blue", f64::INFINITY, RGB_SCALE).is_err());
    }

    #[test]
    fn channel_rejects_fractions() {
        let err = channel(Space::Rgb, "red", 12.7, RGB_SCALE).unwrap_err();
        assert!(matches!(err, Error::InvalidChannelValue { channel: "red", .. }));
        assert!(channel(Space::Cmyk, "key", 12.5, CMYK_SCALE).is_err());
        assert!(channel(Space::Cmyk, "key", 99.999, CMYK_SCALE).is_err());
    }

    #[test]
    fn rounding() {
        assert_eq!(round_if(49.8, false), 50.0);
        assert_eq!(round_if(49.75, true), 49.75);
        assert_eq!(round_if(0.5, false), 0.0);
        assert_eq!(round_if(1.5, false), 2.0);
        // Values a hair past the tie in double precision collapse onto it in
        // single precision, so the rounding has to happen before narrowing.
        assert_eq!(round_if(62.500000000000135, false), 63.0);
        assert_eq!(round_if(76.50000000000001, false), 77.0);
    }

    #[test]
    fn bytes() {
        assert_eq!(to_byte(0.0), 0);
        assert_eq!(to_byte(254.6), 255);
        assert_eq!(to_byte(127.5), 128);
        assert_eq!(to_byte(300.0), 255);
    }
}

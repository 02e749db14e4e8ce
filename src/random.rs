//! Generate random colors.
//!
//! Every channel is drawn independently and uniformly over its whole range.
//! Pass a seeded generator to [`random_color_with`] for reproducible output.

use rand::Rng;

use crate::{
    color::{Color, Component, Space},
    error::Result,
    math::{CMYK_SCALE, RGB_SCALE},
    Cmyk, Rgb,
};

/// Generate a random color in the representation named by `mode` (`rgb`,
/// `cmyk` or `hex`, in any case) using the thread local generator.
pub fn random_color(mode: &str) -> Result<Color> {
    random_color_with(&mut rand::thread_rng(), mode)
}

/// Generate a random color in the representation named by `mode` using the
/// given generator.
pub fn random_color_with<R: Rng + ?Sized>(rng: &mut R, mode: &str) -> Result<Color> {
    let space = mode.parse::<Space>()?;
    Ok(random_in(rng, space))
}

/// Generate a random color in the given representation.
pub fn random_in<R: Rng + ?Sized>(rng: &mut R, space: Space) -> Color {
    let color = match space {
        Space::Rgb => random_rgb(rng).into(),
        Space::Cmyk => random_cmyk(rng).into(),
        Space::Hex => random_rgb(rng).to_hex().into(),
    };
    tracing::trace!(%space, %color, "Generated random color");
    color
}

fn random_rgb<R: Rng + ?Sized>(rng: &mut R) -> Rgb {
    let [red, green, blue] = draw::<R, 3>(rng, RGB_SCALE);
    Rgb::new_unchecked(red, green, blue)
}

fn random_cmyk<R: Rng + ?Sized>(rng: &mut R) -> Cmyk {
    let [cyan, magenta, yellow, key] = draw::<R, 4>(rng, CMYK_SCALE);
    Cmyk::new_unchecked(cyan, magenta, yellow, key)
}

/// Draw `N` whole numbers uniformly from `0..=scale`.
fn draw<R: Rng + ?Sized, const N: usize>(rng: &mut R, scale: Component) -> [Component; N] {
    let max = num_traits::cast::<Component, u16>(scale).unwrap_or_default();
    std::array::from_fn(|_| Component::from(rng.gen_range(0..=max)))
}

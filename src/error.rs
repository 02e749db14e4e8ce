//! Errors surfaced by constructors and the random generator.

use thiserror::Error;

use crate::color::{Component, Space};

/// Result type alias for colorix operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong is a problem with the caller's input.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A channel was not a whole number within `0..=scale`.
    #[error("invalid {space} channel '{channel}' value {value} (expected a whole number from 0 to {scale})")]
    InvalidChannelValue {
        /// The model being constructed.
        space: Space,
        /// Name of the offending channel.
        channel: &'static str,
        /// The value as the caller passed it.
        value: String,
        /// Upper bound of the channel.
        scale: Component,
    },

    /// A string could not be read as six hexadecimal digits.
    #[error("invalid hex color '{0}'")]
    InvalidHexFormat(String),

    /// The random generator was asked for a mode it does not know.
    #[error("color mode '{0}' not supported")]
    ModeNotSupported(String),
}

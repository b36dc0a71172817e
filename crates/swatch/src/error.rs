//! Error types for color parsing, validation and conversion.

use std::fmt;

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ColorError>;

/// One of the four channels stored in a [`Color`](crate::Color).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Channel {
    Red,
    Green,
    Blue,
    Alpha,
}

impl Channel {
    /// All channels in storage order.
    pub const ALL: [Channel; 4] = [Channel::Red, Channel::Green, Channel::Blue, Channel::Alpha];
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Channel::Red => "red",
            Channel::Green => "green",
            Channel::Blue => "blue",
            Channel::Alpha => "alpha",
        };
        f.write_str(name)
    }
}

/// Errors that can occur when building, parsing or resolving a color.
///
/// No variant ever accompanies a partially built color: a failure means
/// nothing was constructed or, for setters, nothing was changed.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ColorError {
    /// The text does not match any supported functional form, or the
    /// alpha marker and the token count disagree (`rgba(1,2,3)`, `rgb(1,2,3,4)`).
    #[error("invalid color format: {0}")]
    Format(String),

    /// A token has no leading numeric literal.
    #[error("invalid number: {0:?}")]
    NumberFormat(String),

    /// A numeric token fell outside `[0, max]` for its scale.
    #[error("value {value} out of range (0-{max})")]
    ValueRange { value: f64, max: f64 },

    /// A channel value rounded to something outside `[0, 255]`.
    #[error("{channel} channel out of range (0-255): {value}")]
    ChannelRange { channel: Channel, value: f64 },

    /// A channel value was not a finite number (NaN or infinite).
    #[error("{channel} channel is not a number: {value}")]
    InvalidChannelType { channel: Channel, value: f64 },

    /// Invalid hex digit or unsupported digit count.
    #[error("invalid hex color: {0}")]
    HexFormat(String),

    /// The injected name resolver could not resolve an identifier.
    #[error("could not resolve color name: {0}")]
    Resolution(String),
}

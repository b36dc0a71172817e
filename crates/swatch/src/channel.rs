//! Channel normalization.
//!
//! Every write into a [`Color`](crate::Color) goes through [`normalize_channel`],
//! which is the only place the `[0, 255]` channel range is enforced.

use crate::error::{Channel, ColorError, Result};

/// Largest value a channel can hold.
pub const CHANNEL_MAX: f64 = 255.0;

/// Validates a numeric value and rounds it into an integer channel.
///
/// Rounding is half away from zero (`127.5` becomes `128`). Non-finite input
/// is rejected with [`ColorError::InvalidChannelType`]; anything that rounds
/// outside `[0, 255]` is rejected with [`ColorError::ChannelRange`].
///
/// # Examples
///
/// ```
/// use swatch::{normalize_channel, Channel};
///
/// assert_eq!(normalize_channel(Channel::Red, 127.5).unwrap(), 128);
/// assert!(normalize_channel(Channel::Red, 255.6).is_err());
/// ```
pub fn normalize_channel(channel: Channel, value: f64) -> Result<u8> {
    if !value.is_finite() {
        return Err(ColorError::InvalidChannelType { channel, value });
    }

    let rounded = value.round();
    if !(0.0..=CHANNEL_MAX).contains(&rounded) {
        return Err(ColorError::ChannelRange { channel, value });
    }

    // In range and integral, so the cast is exact.
    Ok(rounded as u8)
}

//! The [`Color`] value type.
//!
//! A color holds four integer channels in `[0, 255]`: red, green, blue and
//! alpha (255 is fully opaque). Every way of building or changing a color
//! validates through [`normalize_channel`], so an out-of-range color can
//! never be observed.
//!
//! ## Text forms
//!
//! | Form | Read by | Written by |
//! |------|---------|------------|
//! | `rgb(r, g, b)`, `rgba(r, g, b, a)` | [`Color::from_rgb_str`] | [`Color::to_rgb_string`] |
//! | `hsl(h, s%, l%)`, `hsla(h, s%, l%, a)` | [`Color::from_hsl_str`] | [`Color::to_hsl_string`] |
//! | `#rgb`, `#rrggbb`, `#rrggbbaa` | [`Color::from_hex`] | [`Color::to_hex`] |
//!
//! ```
//! use swatch::Color;
//!
//! let red = Color::from_hsl_str("hsla(0, 100%, 50%, 1)").unwrap();
//! assert_eq!(red, Color::rgb(255, 0, 0).unwrap());
//! assert_eq!(red.to_hsl_string(false), "hsl(0, 100%, 50%)");
//! assert_eq!(red.to_hex(true), "#ff0000ff");
//! ```

use std::fmt;
use std::str::FromStr;

use crate::channel::{CHANNEL_MAX, normalize_channel};
use crate::convert::{Hsl, hsl_to_rgb, rgb_to_hsl};
use crate::error::{Channel, ColorError, Result};
use crate::grammar::{match_hsl, match_rgb};
use crate::hex::{HexCase, decode_hex, encode_hex};
use crate::number::parse_number_token;
use crate::resolve::ColorNameResolver;

/// An RGBA color with validated 0-255 channels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    red: u8,
    green: u8,
    blue: u8,
    alpha: u8,
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl Color {
    pub const BLACK: Color = Color::from_u8(0, 0, 0, 255);
    pub const WHITE: Color = Color::from_u8(255, 255, 255, 255);
    /// Fully transparent black.
    pub const TRANSPARENT: Color = Color::from_u8(0, 0, 0, 0);

    /// Creates a color from four numeric channel values.
    ///
    /// Values are rounded half away from zero and must land in `[0, 255]`.
    ///
    /// # Errors
    ///
    /// [`ColorError::ChannelRange`] or [`ColorError::InvalidChannelType`]
    /// for the first channel that fails validation.
    ///
    /// # Examples
    ///
    /// ```
    /// use swatch::Color;
    ///
    /// let teal = Color::new(0, 127.6, 128, 255).unwrap();
    /// assert_eq!(teal.rgba(), (0, 128, 128, 255));
    ///
    /// assert!(Color::new(256, 0, 0, 255).is_err());
    /// assert!(Color::new(-1, 0, 0, 255).is_err());
    /// ```
    pub fn new(
        red: impl Into<f64>,
        green: impl Into<f64>,
        blue: impl Into<f64>,
        alpha: impl Into<f64>,
    ) -> Result<Self> {
        Ok(Self {
            red: normalize_channel(Channel::Red, red.into())?,
            green: normalize_channel(Channel::Green, green.into())?,
            blue: normalize_channel(Channel::Blue, blue.into())?,
            alpha: normalize_channel(Channel::Alpha, alpha.into())?,
        })
    }

    /// Creates a fully opaque color.
    ///
    /// # Errors
    ///
    /// Same as [`Color::new`].
    pub fn rgb(red: impl Into<f64>, green: impl Into<f64>, blue: impl Into<f64>) -> Result<Self> {
        Self::new(red, green, blue, CHANNEL_MAX)
    }

    /// Creates a color from bytes, which are always in range.
    pub const fn from_u8(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    pub fn red(&self) -> u8 {
        self.red
    }

    pub fn green(&self) -> u8 {
        self.green
    }

    pub fn blue(&self) -> u8 {
        self.blue
    }

    pub fn alpha(&self) -> u8 {
        self.alpha
    }

    /// Returns `(red, green, blue, alpha)`.
    pub fn rgba(&self) -> (u8, u8, u8, u8) {
        (self.red, self.green, self.blue, self.alpha)
    }

    /// Reads a channel by name.
    pub fn channel(&self, channel: Channel) -> u8 {
        match channel {
            Channel::Red => self.red,
            Channel::Green => self.green,
            Channel::Blue => self.blue,
            Channel::Alpha => self.alpha,
        }
    }

    /// Validates and writes one channel. On error the color is unchanged.
    ///
    /// # Errors
    ///
    /// Same as [`normalize_channel`].
    pub fn set_channel(&mut self, channel: Channel, value: impl Into<f64>) -> Result<()> {
        let value = normalize_channel(channel, value.into())?;
        let slot = match channel {
            Channel::Red => &mut self.red,
            Channel::Green => &mut self.green,
            Channel::Blue => &mut self.blue,
            Channel::Alpha => &mut self.alpha,
        };
        *slot = value;
        Ok(())
    }

    /// # Errors
    ///
    /// Same as [`normalize_channel`]; the color is unchanged on error.
    pub fn set_red(&mut self, value: impl Into<f64>) -> Result<()> {
        self.set_channel(Channel::Red, value)
    }

    /// # Errors
    ///
    /// Same as [`normalize_channel`]; the color is unchanged on error.
    pub fn set_green(&mut self, value: impl Into<f64>) -> Result<()> {
        self.set_channel(Channel::Green, value)
    }

    /// # Errors
    ///
    /// Same as [`normalize_channel`]; the color is unchanged on error.
    pub fn set_blue(&mut self, value: impl Into<f64>) -> Result<()> {
        self.set_channel(Channel::Blue, value)
    }

    /// # Errors
    ///
    /// Same as [`normalize_channel`]; the color is unchanged on error.
    pub fn set_alpha(&mut self, value: impl Into<f64>) -> Result<()> {
        self.set_channel(Channel::Alpha, value)
    }

    /// Returns a copy with a new alpha channel (0-255).
    ///
    /// # Errors
    ///
    /// Same as [`normalize_channel`].
    pub fn with_alpha(&self, alpha: impl Into<f64>) -> Result<Self> {
        let mut color = *self;
        color.set_alpha(alpha)?;
        Ok(color)
    }

    /// Returns true if the alpha channel is zero.
    pub fn is_transparent(&self) -> bool {
        self.alpha == 0
    }

    // ---------------------------------------------------------------------
    // Parsing
    // ---------------------------------------------------------------------

    /// Parses `rgb(r, g, b)` or `rgba(r, g, b, a)`.
    ///
    /// Channel tokens are on a 0-255 scale (`100%` is 255). The alpha token
    /// is a fraction (`0.5` or `50%`) and defaults to fully opaque.
    ///
    /// # Errors
    ///
    /// - [`ColorError::Format`] if the text is not an RGB functional form or
    ///   the alpha marker disagrees with the token count.
    /// - [`ColorError::NumberFormat`] / [`ColorError::ValueRange`] for a bad token.
    /// - Channel errors after rounding.
    pub fn from_rgb_str(text: &str) -> Result<Self> {
        let parsed = match_rgb(text)?;
        let [r, g, b] = parsed.components();

        let red = parse_number_token(r, CHANNEL_MAX)?;
        let green = parse_number_token(g, CHANNEL_MAX)?;
        let blue = parse_number_token(b, CHANNEL_MAX)?;
        let alpha = match parsed.alpha() {
            Some(a) => parse_number_token(a, 1.0)? * CHANNEL_MAX,
            None => CHANNEL_MAX,
        };

        let color = Self::new(red, green, blue, alpha)?;
        log::trace!("parsed {text:?} -> {color:?}");
        Ok(color)
    }

    /// Parses `hsl(h, s, l)` or `hsla(h, s, l, a)`.
    ///
    /// Hue is in degrees (`0`-`360`, or a percentage of a turn). Saturation,
    /// lightness and alpha are fractions, usually written as percentages.
    ///
    /// # Errors
    ///
    /// As [`Color::from_rgb_str`], for the HSL forms.
    pub fn from_hsl_str(text: &str) -> Result<Self> {
        let parsed = match_hsl(text)?;
        let [h, s, l] = parsed.components();

        let hue = parse_number_token(h, 360.0)? / 360.0;
        let saturation = parse_number_token(s, 1.0)?;
        let lightness = parse_number_token(l, 1.0)?;
        let alpha = match parsed.alpha() {
            Some(a) => parse_number_token(a, 1.0)?,
            None => 1.0,
        };

        let hsl = Hsl::new(hue, saturation, lightness).with_alpha(alpha);
        let color = hsl_to_rgb(&hsl)?;
        log::trace!("parsed {text:?} -> {color:?}");
        Ok(color)
    }

    /// Parses `#rgb`, `#rrggbb` or `#rrggbbaa`; the `#` is optional.
    ///
    /// # Errors
    ///
    /// [`ColorError::HexFormat`] for a bad digit or digit count.
    pub fn from_hex(text: &str) -> Result<Self> {
        decode_hex(text)
    }

    /// Builds a color from an [`Hsl`] value.
    ///
    /// # Errors
    ///
    /// Channel errors if a component is far enough outside `[0, 1]`.
    pub fn from_hsl_value(hsl: &Hsl) -> Result<Self> {
        hsl_to_rgb(hsl)
    }

    /// Resolves a symbolic name through `resolver` and parses its answer
    /// as RGB functional text.
    ///
    /// # Errors
    ///
    /// [`ColorError::Resolution`] from the resolver, or any
    /// [`Color::from_rgb_str`] error for a malformed answer.
    pub fn from_name<R>(name: &str, resolver: &R) -> Result<Self>
    where
        R: ColorNameResolver + ?Sized,
    {
        let name = name.trim();
        let resolved = resolver.resolve(name).inspect_err(|err| {
            log::debug!("name resolution failed for {name:?}: {err}");
        })?;
        Self::from_rgb_str(&resolved)
    }

    /// Parses any supported notation: hex (with or without `#`), `rgb`,
    /// `rgba`, `hsl` or `hsla`.
    ///
    /// Bare text made of 3, 6 or 8 hex digits is read as hex.
    ///
    /// # Errors
    ///
    /// [`ColorError::Format`] for text in none of these forms, otherwise
    /// whatever the matching parser reports.
    pub fn parse(text: &str) -> Result<Self> {
        match Notation::detect(text) {
            Notation::Hex => Self::from_hex(text),
            Notation::Rgb => Self::from_rgb_str(text),
            Notation::Hsl => Self::from_hsl_str(text),
            Notation::Other => Err(ColorError::Format(format!(
                "unrecognized color notation: {:?}",
                text.trim()
            ))),
        }
    }

    /// Like [`Color::parse`], but hands unrecognized text to `resolver`.
    ///
    /// # Errors
    ///
    /// As [`Color::parse`] and [`Color::from_name`].
    pub fn parse_with<R>(text: &str, resolver: &R) -> Result<Self>
    where
        R: ColorNameResolver + ?Sized,
    {
        match Notation::detect(text) {
            Notation::Other => Self::from_name(text, resolver),
            _ => Self::parse(text),
        }
    }

    // ---------------------------------------------------------------------
    // Conversion and serialization
    // ---------------------------------------------------------------------

    /// Converts to hue-saturation-lightness fractions.
    pub fn to_hsl(&self) -> Hsl {
        rgb_to_hsl(self)
    }

    /// Writes `rgb(r, g, b)`, or `rgba(r, g, b, a)` with alpha as a
    /// fraction when `alpha` is set.
    pub fn to_rgb_string(&self, alpha: bool) -> String {
        let (r, g, b, a) = self.rgba();
        if alpha {
            format!(
                "rgba({r}, {g}, {b}, {})",
                format_fraction(f64::from(a) / CHANNEL_MAX)
            )
        } else {
            format!("rgb({r}, {g}, {b})")
        }
    }

    /// Writes `hsl(h, s%, l%)`, or `hsla(h, s%, l%, a)` when `alpha` is set.
    ///
    /// Hue is whole degrees; saturation and lightness are whole percents.
    pub fn to_hsl_string(&self, alpha: bool) -> String {
        let hsl = self.to_hsl();
        let hue = hsl.hue_degrees().round() % 360.0;
        let saturation = (hsl.saturation * 100.0).round();
        let lightness = (hsl.lightness * 100.0).round();
        if alpha {
            format!(
                "hsla({hue}, {saturation}%, {lightness}%, {})",
                format_fraction(hsl.alpha)
            )
        } else {
            format!("hsl({hue}, {saturation}%, {lightness}%)")
        }
    }

    /// Writes `#rrggbb`, or `#rrggbbaa` when `alpha` is set.
    pub fn to_hex(&self, alpha: bool) -> String {
        self.to_hex_with(alpha, HexCase::default())
    }

    /// Writes hex with the chosen digit case.
    pub fn to_hex_with(&self, alpha: bool, case: HexCase) -> String {
        encode_hex(self, alpha, case)
    }
}

/// Alpha fractions keep three decimals: enough to survive a trip back
/// through the 0-255 scale.
fn format_fraction(value: f64) -> String {
    let rounded = (value * 1000.0).round() / 1000.0;
    format!("{rounded}")
}

/// Which parser a piece of text belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Notation {
    Hex,
    Rgb,
    Hsl,
    Other,
}

impl Notation {
    fn detect(text: &str) -> Self {
        let text = text.trim();
        let lower = text.to_ascii_lowercase();

        if text.starts_with('#') {
            Notation::Hex
        } else if lower.starts_with("rgb") {
            Notation::Rgb
        } else if lower.starts_with("hsl") {
            Notation::Hsl
        } else if matches!(text.len(), 3 | 6 | 8) && text.chars().all(|c| c.is_ascii_hexdigit()) {
            Notation::Hex
        } else {
            Notation::Other
        }
    }
}

impl fmt::Display for Color {
    /// Prints the RGB functional form, with alpha only when not opaque.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_rgb_string(self.alpha != u8::MAX))
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl From<Color> for (u8, u8, u8, u8) {
    fn from(color: Color) -> Self {
        color.rgba()
    }
}

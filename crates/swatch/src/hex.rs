//! Hexadecimal color notation: `#RGB`, `#RRGGBB`, `#RRGGBBAA`.
//!
//! The leading `#` is optional on input and always written on output.
//! Shorthand digits are doubled, so `#f80` is `#ff8800`.

use nom::{
    IResult,
    bytes::complete::take_while_m_n,
    combinator::{all_consuming, map_res},
    multi::many_m_n,
};

use crate::color::Color;
use crate::error::{ColorError, Result};

/// Digit case used when writing hex colors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HexCase {
    #[default]
    Lower,
    Upper,
}

/// Parse one channel written with `W` hex digits.
fn hex_channel<const W: usize>(input: &str) -> IResult<&str, u8> {
    map_res(
        take_while_m_n(W, W, |c: char| c.is_ascii_hexdigit()),
        |s: &str| u8::from_str_radix(s, 16),
    )(input)
}

fn channels<const W: usize>(min: usize, max: usize, input: &str) -> Result<Vec<u8>> {
    let (_, values) = all_consuming(many_m_n(min, max, hex_channel::<W>))(input)
        .map_err(|_| ColorError::HexFormat(format!("invalid hex digit in {input:?}")))?;
    Ok(values)
}

/// Parses a hex color with an optional leading `#`.
///
/// Accepts exactly 3, 6 or 8 digits. A missing alpha pair means fully
/// opaque.
///
/// # Errors
///
/// [`ColorError::HexFormat`] for any other digit count or a non-hex digit.
///
/// # Examples
///
/// ```
/// use swatch::hex::decode_hex;
///
/// assert_eq!(decode_hex("#FF000080").unwrap().rgba(), (255, 0, 0, 128));
/// assert_eq!(decode_hex("0f0").unwrap().rgba(), (0, 255, 0, 255));
/// ```
pub fn decode_hex(text: &str) -> Result<Color> {
    let text = text.trim();
    let digits = text.strip_prefix('#').unwrap_or(text);

    let values: Vec<u8> = match digits.len() {
        3 => channels::<1>(3, 3, digits)?
            .into_iter()
            .map(|nibble| nibble * 17)
            .collect(),
        6 | 8 => channels::<2>(3, 4, digits)?,
        len => {
            return Err(ColorError::HexFormat(format!(
                "expected 3, 6 or 8 digits, found {len}: {text:?}"
            )));
        }
    };

    let alpha = values.get(3).copied().unwrap_or(u8::MAX);
    let color = Color::from_u8(values[0], values[1], values[2], alpha);
    log::trace!("decoded {text:?} -> {color:?}");
    Ok(color)
}

/// Writes a color as `#rrggbb`, or `#rrggbbaa` when `alpha` is set.
pub fn encode_hex(color: &Color, alpha: bool, case: HexCase) -> String {
    let (r, g, b, a) = color.rgba();
    let mut out = if alpha {
        format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
    } else {
        format!("#{r:02x}{g:02x}{b:02x}")
    };
    if case == HexCase::Upper {
        out.make_ascii_uppercase();
    }
    out
}

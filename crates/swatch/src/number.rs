//! Numeric token parsing.
//!
//! A token is a decimal literal with an optional `%` suffix, e.g. `255`,
//! `0.5`, `50%`. Percentages are scaled onto the caller's maximum; bare
//! literals are taken to already be on that scale.

use nom::{
    IResult,
    branch::alt,
    character::complete::{char, digit0, digit1, one_of},
    combinator::{map_res, opt, recognize},
    sequence::{pair, tuple},
};

use crate::error::{ColorError, Result};

/// Default scale for channel tokens.
pub const DEFAULT_MAX: f64 = 255.0;

/// Parse a leading floating point literal (`12`, `-3.5`, `.5`, `1e2`).
fn float_literal(input: &str) -> IResult<&str, f64> {
    map_res(
        recognize(tuple((
            opt(one_of("+-")),
            alt((
                recognize(pair(digit1, opt(pair(char('.'), digit0)))),
                recognize(pair(char('.'), digit1)),
            )),
            opt(tuple((one_of("eE"), opt(one_of("+-")), digit1))),
        ))),
        |s: &str| s.parse::<f64>(),
    )(input)
}

/// Parses one numeric token scaled to `max`.
///
/// Whitespace around the token is ignored. Only the leading literal has to be
/// numeric: `12px` reads as `12`. A trailing `%` multiplies the literal by
/// `max / 100`.
///
/// # Errors
///
/// - [`ColorError::NumberFormat`] when the token has no numeric prefix.
/// - [`ColorError::ValueRange`] when the scaled value is below `0` or above `max`.
///
/// # Examples
///
/// ```
/// use swatch::parse_number_token;
///
/// assert_eq!(parse_number_token(" 50% ", 255.0).unwrap(), 127.5);
/// assert_eq!(parse_number_token("0.25", 1.0).unwrap(), 0.25);
/// assert!(parse_number_token("2", 1.0).is_err());
/// ```
pub fn parse_number_token(token: &str, max: f64) -> Result<f64> {
    let token = token.trim();
    let (_, literal) =
        float_literal(token).map_err(|_| ColorError::NumberFormat(token.to_string()))?;

    let value = if token.ends_with('%') {
        // Multiply first: `100% of 255` must come out as exactly 255.
        literal * max / 100.0
    } else {
        literal
    };

    if value < 0.0 || value > max {
        return Err(ColorError::ValueRange { value, max });
    }
    Ok(value)
}

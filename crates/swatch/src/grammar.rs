//! Functional color notation matching.
//!
//! Recognizes the four functional forms and hands back their raw tokens:
//!
//! - `rgb(<n>, <n>, <n>)` and `rgba(<n>, <n>, <n>, <n>)`
//! - `hsl(<n>, <n>, <n>)` and `hsla(<n>, <n>, <n>, <n>)`
//!
//! Keywords are case-insensitive. A token is any run of characters other
//! than `,`, `(` and `)`, trimmed of surrounding whitespace; turning tokens
//! into numbers is left to [`parse_number_token`](crate::parse_number_token).
//!
//! The alpha marker (the trailing `a` of the keyword) must coincide exactly
//! with a fourth token. `rgba(1, 2, 3)` and `rgb(1, 2, 3, 4)` are both
//! format errors.
//!
//! The parsers are plain functions over the input slice, so matching keeps
//! no state between calls and is safe to use from any number of threads.

use nom::{
    IResult,
    branch::alt,
    bytes::complete::{tag_no_case, take_while1},
    character::complete::char,
    combinator::{all_consuming, map, value, verify},
    multi::separated_list1,
    sequence::{delimited, pair},
};

use crate::error::{ColorError, Result};

/// The color model named by a functional keyword.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorModel {
    Rgb,
    Hsl,
}

/// A structurally valid functional color with its raw tokens.
#[derive(Clone, Debug, PartialEq)]
pub struct FunctionalColor<'a> {
    pub model: ColorModel,
    /// Whether the keyword carried the alpha marker (`rgba`, `hsla`).
    pub alpha_marker: bool,
    /// Three tokens, or four when `alpha_marker` is set.
    pub tokens: Vec<&'a str>,
}

impl<'a> FunctionalColor<'a> {
    /// The first three tokens.
    pub fn components(&self) -> [&'a str; 3] {
        [self.tokens[0], self.tokens[1], self.tokens[2]]
    }

    /// The fourth token, present only in the alpha forms.
    pub fn alpha(&self) -> Option<&'a str> {
        self.tokens.get(3).copied()
    }
}

// Longer keywords first so `rgba` is not read as `rgb` followed by `a(`.
fn keyword(input: &str) -> IResult<&str, (ColorModel, bool)> {
    alt((
        value((ColorModel::Rgb, true), tag_no_case("rgba")),
        value((ColorModel::Rgb, false), tag_no_case("rgb")),
        value((ColorModel::Hsl, true), tag_no_case("hsla")),
        value((ColorModel::Hsl, false), tag_no_case("hsl")),
    ))(input)
}

fn raw_token(input: &str) -> IResult<&str, &str> {
    verify(
        map(take_while1(|c: char| !matches!(c, ',' | '(' | ')')), str::trim),
        |s: &str| !s.is_empty(),
    )(input)
}

fn argument_list(input: &str) -> IResult<&str, Vec<&str>> {
    delimited(char('('), separated_list1(char(','), raw_token), char(')'))(input)
}

fn functional(input: &str) -> IResult<&str, ((ColorModel, bool), Vec<&str>)> {
    pair(keyword, argument_list)(input)
}

/// Matches any of the four functional forms.
///
/// # Errors
///
/// [`ColorError::Format`] when the text is not a functional color at all, or
/// when the alpha marker does not agree with the number of tokens.
///
/// # Examples
///
/// ```
/// use swatch::grammar::{match_functional, ColorModel};
///
/// let parsed = match_functional("HSLA(120, 50%, 25%, 0.5)").unwrap();
/// assert_eq!(parsed.model, ColorModel::Hsl);
/// assert_eq!(parsed.tokens, vec!["120", "50%", "25%", "0.5"]);
///
/// assert!(match_functional("hsl(120, 50%, 25%, 0.5)").is_err());
/// ```
pub fn match_functional(text: &str) -> Result<FunctionalColor<'_>> {
    let trimmed = text.trim();
    let (_, ((model, alpha_marker), tokens)) = all_consuming(functional)(trimmed)
        .map_err(|_| ColorError::Format(format!("not a functional color: {trimmed:?}")))?;

    match (alpha_marker, tokens.len()) {
        (false, 3) | (true, 4) => Ok(FunctionalColor {
            model,
            alpha_marker,
            tokens,
        }),
        (true, count) => Err(ColorError::Format(format!(
            "alpha form expects 4 components, found {count}: {trimmed:?}"
        ))),
        (false, count) => Err(ColorError::Format(format!(
            "expected 3 components, found {count}: {trimmed:?}"
        ))),
    }
}

/// Matches `rgb(...)` or `rgba(...)` only.
///
/// # Errors
///
/// As [`match_functional`], plus [`ColorError::Format`] for an `hsl` form.
pub fn match_rgb(text: &str) -> Result<FunctionalColor<'_>> {
    expect_model(match_functional(text)?, ColorModel::Rgb)
}

/// Matches `hsl(...)` or `hsla(...)` only.
///
/// # Errors
///
/// As [`match_functional`], plus [`ColorError::Format`] for an `rgb` form.
pub fn match_hsl(text: &str) -> Result<FunctionalColor<'_>> {
    expect_model(match_functional(text)?, ColorModel::Hsl)
}

fn expect_model(parsed: FunctionalColor<'_>, model: ColorModel) -> Result<FunctionalColor<'_>> {
    if parsed.model == model {
        Ok(parsed)
    } else {
        Err(ColorError::Format(format!(
            "expected {model:?} notation, found {:?}",
            parsed.model
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_bare_triplet() {
        let parsed = match_functional("rgb(255,0,0)").unwrap();
        assert_eq!(parsed.model, ColorModel::Rgb);
        assert!(!parsed.alpha_marker);
        assert_eq!(parsed.components(), ["255", "0", "0"]);
        assert_eq!(parsed.alpha(), None);
    }

    #[test]
    fn tokens_are_trimmed() {
        let parsed = match_functional("  rgba( 10 , 20%,30 ,  0.5 )  ").unwrap();
        assert_eq!(parsed.tokens, vec!["10", "20%", "30", "0.5"]);
        assert_eq!(parsed.alpha(), Some("0.5"));
    }

    #[test]
    fn keywords_are_case_insensitive() {
        assert_eq!(match_functional("RGB(1,2,3)").unwrap().model, ColorModel::Rgb);
        assert_eq!(match_functional("Hsl(1,2,3)").unwrap().model, ColorModel::Hsl);
    }

    #[test]
    fn alpha_marker_must_match_token_count() {
        assert!(matches!(
            match_functional("rgba(255,0,0)"),
            Err(ColorError::Format(_))
        ));
        assert!(matches!(
            match_functional("rgb(255,0,0,1)"),
            Err(ColorError::Format(_))
        ));
        assert!(matches!(
            match_functional("hsla(0,100%,50%)"),
            Err(ColorError::Format(_))
        ));
        assert!(matches!(
            match_functional("hsl(0,100%,50%,1)"),
            Err(ColorError::Format(_))
        ));
    }

    #[test]
    fn rejects_malformed_text() {
        for text in [
            "",
            "rgb",
            "rgb(",
            "rgb()",
            "rgb(1,2)",
            "rgb(1,,3)",
            "rgb(1, ,3)",
            "rgb(1,2,3",
            "rgb (1,2,3)",
            "rgb(1,2,3) x",
            "rgba(1,2,3,4,5)",
            "cmyk(1,2,3,4)",
            "red",
        ] {
            assert!(
                matches!(match_functional(text), Err(ColorError::Format(_))),
                "expected format error for {text:?}"
            );
        }
    }

    #[test]
    fn model_filters() {
        assert!(match_rgb("rgb(1,2,3)").is_ok());
        assert!(matches!(match_rgb("hsl(1,2,3)"), Err(ColorError::Format(_))));
        assert!(match_hsl("hsla(1,2,3,0.5)").is_ok());
        assert!(matches!(match_hsl("rgba(1,2,3,1)"), Err(ColorError::Format(_))));
    }
}

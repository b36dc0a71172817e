//! Color parsing with CSS color keywords included.
//!
//! This package ties [`swatch`] to the CSS keyword table from
//! [`swatch_names`], so one call accepts every notation a stylesheet might
//! contain.
//!
//! ```rust
//! use swatch_rs::parse_color;
//!
//! assert_eq!(parse_color("rebeccapurple").unwrap().to_hex(false), "#663399");
//! assert_eq!(parse_color("hsl(0, 100%, 50%)").unwrap().to_hex(false), "#ff0000");
//! assert!(parse_color("blurple").is_err());
//! ```

pub use swatch::*;
pub use swatch_names::CssNames;

/// Parses hex, `rgb`/`rgba`, `hsl`/`hsla` or a CSS color keyword.
///
/// # Errors
///
/// Whatever [`Color::parse_with`] reports; unknown keywords give
/// [`ColorError::Resolution`].
pub fn parse_color(text: &str) -> Result<Color> {
    Color::parse_with(text, &CssNames)
}

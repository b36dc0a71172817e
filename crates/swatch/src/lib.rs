//! # Swatch - color parsing and conversion
//!
//! Parses textual color notations into a validated [`Color`], converts
//! between RGB and HSL, and writes colors back out as text.
//!
//! ## Quick Start
//!
//! ```rust
//! use swatch::Color;
//!
//! let color = Color::from_rgb_str("rgba(255, 128, 0, 50%)").unwrap();
//! assert_eq!(color.rgba(), (255, 128, 0, 128));
//!
//! assert_eq!(color.to_hex(true), "#ff800080");
//! assert_eq!(color.to_hsl_string(false), "hsl(30, 100%, 50%)");
//! ```
//!
//! ## Supported Notations
//!
//! - RGB: `rgb(r, g, b)`, `rgba(r, g, b, a)`
//! - HSL: `hsl(h, s%, l%)`, `hsla(h, s%, l%, a)`
//! - Hex: `#RGB`, `#RRGGBB`, `#RRGGBBAA` (the `#` is optional when reading)
//!
//! Tokens are decimal literals with an optional `%`. Keywords are
//! case-insensitive.
//!
//! ## Named Colors
//!
//! Names like `tomato` are not resolved here. Pass a [`ColorNameResolver`]
//! to [`Color::from_name`] or [`Color::parse_with`]; any
//! `Fn(&str) -> Option<String>` closure returning `rgb(...)` text will do.
//!
//! ## Modules
//!
//! - [`channel`]: channel validation and rounding
//! - [`number`]: numeric token parsing
//! - [`grammar`]: functional notation matching
//! - [`convert`]: RGB <-> HSL conversion
//! - [`hex`]: hex notation codec
//! - [`color`]: the [`Color`] type and its serializers
//! - [`resolve`]: the name resolution boundary
//! - [`error`]: error types

pub mod channel;
pub mod color;
pub mod convert;
pub mod error;
pub mod grammar;
pub mod hex;
pub mod number;
pub mod resolve;

pub use channel::normalize_channel;
pub use color::Color;
pub use convert::Hsl;
pub use error::{Channel, ColorError, Result};
pub use hex::HexCase;
pub use number::parse_number_token;
pub use resolve::ColorNameResolver;

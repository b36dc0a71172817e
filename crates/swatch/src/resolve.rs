//! The boundary for symbolic color names.
//!
//! Turning a name like `rebeccapurple` into channels depends on whatever
//! style engine or palette the caller has, so this crate only defines the
//! seam. A resolver answers with functional RGB text (`rgb(...)` or
//! `rgba(...)`) which is then parsed like any other input.

use crate::error::{ColorError, Result};

/// Resolves a color identifier into `rgb(...)` / `rgba(...)` text.
pub trait ColorNameResolver {
    /// Returns the RGB text for `name`.
    ///
    /// # Errors
    ///
    /// [`ColorError::Resolution`] when the name is unknown to this resolver.
    fn resolve(&self, name: &str) -> Result<String>;
}

/// Any `Fn(&str) -> Option<String>` can act as a resolver.
///
/// ```
/// use swatch::{Color, ColorNameResolver};
///
/// let lookup = |name: &str| (name == "brand").then(|| "rgb(12, 34, 56)".to_string());
/// assert_eq!(lookup.resolve("brand").unwrap(), "rgb(12, 34, 56)");
///
/// let brand = Color::from_name("brand", &lookup).unwrap();
/// assert_eq!(brand.rgba(), (12, 34, 56, 255));
/// ```
impl<F> ColorNameResolver for F
where
    F: Fn(&str) -> Option<String>,
{
    fn resolve(&self, name: &str) -> Result<String> {
        self(name).ok_or_else(|| ColorError::Resolution(name.to_string()))
    }
}

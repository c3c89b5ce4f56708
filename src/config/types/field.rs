//! Type-safe config field path.

use owo_colors::{OwoColorize, Stream};
use std::{borrow::Cow, fmt};

/// A wrapper for config field paths.
///
/// Used with `#[derive(Config)]` to generate compile-time checked
/// field path accessors. Tables without a fixed header (page records,
/// `[[socials]]` entries) are placed with [`FieldPath::scoped`].
///
/// # Example
///
/// ```ignore
/// #[derive(Config)]
/// #[config(section = "site")]
/// pub struct SiteInfoConfig {
///     pub name: String,
/// }
///
/// diag.error(SiteInfoConfig::FIELDS.name, "must not be empty");
/// diag.error(SocialConfig::FIELDS.href.scoped("socials[1]"), "invalid URL");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPath(Cow<'static, str>);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(Cow::Borrowed(path))
    }

    /// Prefix this path with a parent table, e.g. `title` -> `pages.home.title`.
    pub fn scoped(&self, parent: impl fmt::Display) -> Self {
        Self(Cow::Owned(format!("{parent}.{}", self.0)))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            format_args!("`{}`", self.0).if_supports_color(Stream::Stderr, |t| t.bright_blue())
        )
    }
}

impl From<String> for FieldPath {
    fn from(path: String) -> Self {
        Self(Cow::Owned(path))
    }
}

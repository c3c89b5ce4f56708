//! `[site]` section configuration.
//!
//! Site identity and how many entries of each listing the homepage shows.
//!
//! # Example
//!
//! ```toml
//! [site]
//! name = "Nicolas Lelièvre"
//! num_posts_on_homepage = 4
//! num_works_on_homepage = 3
//! num_projects_on_homepage = 0
//! ```

use super::PageKind;
use crate::config::ConfigDiagnostics;
use crate::consts;
use macros::Config;
use serde::{Deserialize, Serialize};

/// Site identity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "site")]
pub struct SiteInfoConfig {
    /// Site owner name, appended to every document title.
    #[config(inline_doc)]
    pub name: String,

    /// Number of blog posts listed on the homepage.
    #[config(inline_doc)]
    pub num_posts_on_homepage: usize,

    /// Number of work entries listed on the homepage.
    #[config(inline_doc)]
    pub num_works_on_homepage: usize,

    /// Number of projects listed on the homepage (0 hides the section).
    #[config(inline_doc)]
    pub num_projects_on_homepage: usize,
}

impl From<consts::Site> for SiteInfoConfig {
    fn from(site: consts::Site) -> Self {
        Self {
            name: site.name.into(),
            num_posts_on_homepage: site.num_posts_on_homepage,
            num_works_on_homepage: site.num_works_on_homepage,
            num_projects_on_homepage: site.num_projects_on_homepage,
        }
    }
}

impl SiteInfoConfig {
    /// Values used when `[site]` is absent.
    pub fn builtin() -> Self {
        consts::SITE.into()
    }

    /// How many entries of `kind`'s listing the homepage shows.
    ///
    /// `None` for the homepage itself, which has no listing of its own.
    pub const fn homepage_limit(&self, kind: PageKind) -> Option<usize> {
        match kind {
            PageKind::Home => None,
            PageKind::Blog => Some(self.num_posts_on_homepage),
            PageKind::Work => Some(self.num_works_on_homepage),
            PageKind::Projects => Some(self.num_projects_on_homepage),
        }
    }

    /// Leading slice of `items` shown on the homepage for `kind`.
    pub fn take_for_homepage<'a, T>(&self, kind: PageKind, items: &'a [T]) -> &'a [T] {
        let limit = self.homepage_limit(kind).unwrap_or(0);
        &items[..limit.min(items.len())]
    }

    /// Validate site identity.
    ///
    /// Counts are unsigned, so negative values are already rejected by the parser.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.name.trim().is_empty() {
            diag.error_with_hint(
                Self::FIELDS.name,
                "site name must not be empty",
                format!("set {}, e.g.: name = \"Jane Doe\"", Self::FIELDS.name),
            );
        }
    }
}

//! `[pages.*]` section configuration.
//!
//! One title/description record per top-level page.
//!
//! # Example
//!
//! ```toml
//! [pages.blog]
//! title = "Blog"
//! description = "A collection of articles on topics I am passionate about."
//! ```

use crate::config::ConfigDiagnostics;
use crate::config::template;
use crate::consts;
use macros::Config;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Top-level pages that carry metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PageKind {
    Home,
    Blog,
    Work,
    Projects,
}

impl PageKind {
    pub const ALL: [Self; 4] = [Self::Home, Self::Blog, Self::Work, Self::Projects];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Blog => "blog",
            Self::Work => "work",
            Self::Projects => "projects",
        }
    }

    /// Built-in record for this page.
    pub const fn builtin(self) -> consts::Metadata {
        match self {
            Self::Home => consts::HOME,
            Self::Blog => consts::BLOG,
            Self::Work => consts::WORK,
            Self::Projects => consts::PROJECTS,
        }
    }
}

impl fmt::Display for PageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Page record
// ============================================================================

/// Page metadata record. The table header is chosen by [`PagesConfig`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "")]
pub struct PageMetaConfig {
    /// Page title, shown in the browser tab and page heading.
    #[config(inline_doc)]
    pub title: String,

    /// Page description, used for `<meta name="description">`.
    #[config(inline_doc)]
    pub description: String,
}

impl From<consts::Metadata> for PageMetaConfig {
    fn from(meta: consts::Metadata) -> Self {
        Self {
            title: meta.title.into(),
            description: meta.description.into(),
        }
    }
}

impl PageMetaConfig {
    /// Title for the `<title>` element, e.g. `Blog | Jane Doe`.
    pub fn document_title(&self, site_name: &str) -> String {
        format!("{} | {}", self.title, site_name)
    }

    fn validate(&self, kind: PageKind, diag: &mut ConfigDiagnostics) {
        let table = format!("pages.{kind}");
        if self.title.trim().is_empty() {
            diag.error(
                Self::FIELDS.title.scoped(&table),
                "page title must not be empty",
            );
        }
        if self.description.trim().is_empty() {
            diag.error_with_hint(
                Self::FIELDS.description.scoped(&table),
                "page description must not be empty",
                "a section that is present must set every field; remove the section to use the built-in text",
            );
        }
    }
}

// ============================================================================
// Pages section
// ============================================================================

/// Page records; a page table left out of the file keeps its built-in text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PagesConfig {
    #[serde(default = "PagesConfig::builtin_home")]
    pub home: PageMetaConfig,
    #[serde(default = "PagesConfig::builtin_blog")]
    pub blog: PageMetaConfig,
    #[serde(default = "PagesConfig::builtin_work")]
    pub work: PageMetaConfig,
    #[serde(default = "PagesConfig::builtin_projects")]
    pub projects: PageMetaConfig,
}

impl Default for PagesConfig {
    fn default() -> Self {
        Self {
            home: Self::builtin_home(),
            blog: Self::builtin_blog(),
            work: Self::builtin_work(),
            projects: Self::builtin_projects(),
        }
    }
}

impl PagesConfig {
    fn builtin_home() -> PageMetaConfig {
        PageKind::Home.builtin().into()
    }

    fn builtin_blog() -> PageMetaConfig {
        PageKind::Blog.builtin().into()
    }

    fn builtin_work() -> PageMetaConfig {
        PageKind::Work.builtin().into()
    }

    fn builtin_projects() -> PageMetaConfig {
        PageKind::Projects.builtin().into()
    }

    pub const fn get(&self, kind: PageKind) -> &PageMetaConfig {
        match kind {
            PageKind::Home => &self.home,
            PageKind::Blog => &self.blog,
            PageKind::Work => &self.work,
            PageKind::Projects => &self.projects,
        }
    }

    /// Records in navigation order.
    pub fn iter(&self) -> impl Iterator<Item = (PageKind, &PageMetaConfig)> {
        PageKind::ALL.into_iter().map(|kind| (kind, self.get(kind)))
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        for (kind, page) in self.iter() {
            page.validate(kind, diag);
        }
    }

    /// Render every page as its own `[pages.<kind>]` table.
    pub fn template(&self) -> String {
        self.iter()
            .map(|(kind, page)| {
                template::table("", &format!("pages.{kind}"), &page.template())
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

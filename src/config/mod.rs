//! Site metadata configuration for `folio.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── site       # [site]
//! │   ├── pages      # [pages.<kind>]
//! │   └── socials    # [[socials]]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   ├── field      # FieldPath
//! │   └── handle     # Global config handle
//! ├── template       # Commented TOML rendering
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! Every section is optional. A section left out of the file takes its
//! value from [`crate::consts`]; a section that is present must spell out
//! all of its fields.

pub mod section;
pub mod template;
pub mod types;
mod util;

use util::{expand_tilde, find_config_file};

pub use section::{PageKind, PageMetaConfig, PagesConfig, SiteInfoConfig, SocialConfig};
pub use types::{ConfigDiagnostics, ConfigError, FieldPath, cfg, init_config};

use crate::{cli::Cli, debug};
use anyhow::{Context, Result, bail};
use section::{builtin_socials, validate_socials};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing folio.toml
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// CLI arguments reference (internal use only)
    #[serde(skip)]
    pub cli: Option<&'static Cli>,

    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Keys present in the file that no section understands (internal use only)
    #[serde(skip)]
    pub unknown_fields: Vec<String>,

    /// Site identity and homepage counts
    #[serde(default = "SiteInfoConfig::builtin")]
    pub site: SiteInfoConfig,

    /// Per-page metadata
    #[serde(default)]
    pub pages: PagesConfig,

    /// Profile links, in display order
    #[serde(default = "builtin_socials")]
    pub socials: Vec<SocialConfig>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            cli: None,
            config_path: PathBuf::new(),
            root: PathBuf::new(),
            unknown_fields: Vec::new(),
            site: SiteInfoConfig::builtin(),
            pages: PagesConfig::default(),
            socials: builtin_socials(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from CLI arguments.
    ///
    /// For non-init commands, searches upward from cwd to find the config
    /// file and validates it. `init` starts from the built-in values.
    pub fn load(cli: &'static Cli) -> Result<Self> {
        let (config_path, exists) = Self::resolve_config_path(cli)?;

        let mut config = if cli.is_init() {
            Self::default()
        } else if exists {
            Self::from_path(&config_path)?
        } else {
            bail!(ConfigError::NotFound(config_path));
        };

        config.config_path = config_path;
        config.cli = Some(cli);
        config.finalize();

        if !cli.is_init() {
            debug!("config"; "loaded {}", config.config_path.display());
            config.validate()?;
        }

        Ok(config)
    }

    /// Resolve config file path based on command.
    fn resolve_config_path(cli: &Cli) -> Result<(PathBuf, bool)> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;
        let config = expand_tilde(&cli.config);

        if cli.is_init() {
            let path = cwd.join(&config);
            let exists = path.exists();
            return Ok((path, exists));
        }

        // Search upward from cwd
        match find_config_file(&config, &cwd) {
            Some(path) => Ok((path, true)),
            None => Ok((cwd.join(&config), false)),
        }
    }

    /// Derive the project root from the config location.
    fn finalize(&mut self) {
        let root = self
            .config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        self.set_root(&root);
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Toml)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (mut config, ignored) = Self::parse_with_ignored(&content)
            .with_context(|| format!("Failed to parse '{}'", path.display()))?;
        config.unknown_fields = ignored;

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    pub(crate) fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((config, ignored))
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        &self.root
    }

    /// Set the root directory path
    pub fn set_root(&mut self, path: &Path) {
        self.root = path.to_path_buf();
    }

    /// Get path relative to the site root
    pub fn root_relative(&self, path: impl AsRef<Path>) -> PathBuf {
        path.as_ref()
            .strip_prefix(&self.root)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| path.as_ref().to_path_buf())
    }

    /// Render this configuration as a commented `folio.toml`.
    pub fn template(&self) -> String {
        template::generate_config_template(self)
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate all sections.
    ///
    /// Collects all validation errors and returns them at once.
    pub fn validate(&self) -> Result<()> {
        let diag = self.diagnostics();
        diag.print_warnings();
        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }

    /// Run every check without printing anything.
    pub fn diagnostics(&self) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();

        self.site.validate(&mut diag);
        self.pages.validate(&mut diag);
        validate_socials(&self.socials, &mut diag);
        self.check_unknown_fields(&mut diag);

        diag
    }

    /// Unknown keys warn by default and fail with `check --strict`.
    fn check_unknown_fields(&self, diag: &mut ConfigDiagnostics) {
        let strict = self.cli.is_some_and(Cli::is_strict);
        for field in &self.unknown_fields {
            let path = FieldPath::from(field.clone());
            if strict {
                diag.error_with_hint(path, "unknown field", "remove it or check for typos");
            } else {
                diag.warn(path, "unknown field, ignored");
            }
        }
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config, panicking on unknown fields (to catch typos in tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> SiteConfig {
    let (parsed, ignored) = SiteConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts;
    use clap::Parser;
    use tempfile::TempDir;

    fn leak_cli(args: &[&str]) -> &'static Cli {
        Box::leak(Box::new(Cli::try_parse_from(args).unwrap()))
    }

    #[test]
    fn test_from_str_invalid_toml() {
        // Invalid TOML syntax - unclosed bracket
        assert!(SiteConfig::from_str("[site\nname = \"Me\"").is_err());
    }

    #[test]
    fn test_empty_file_uses_builtin() {
        let config = test_parse_config("");
        assert_eq!(config.site, SiteInfoConfig::builtin());
        assert_eq!(config.pages, PagesConfig::default());
        assert_eq!(config.socials, builtin_socials());
        assert!(config.diagnostics().is_empty());
    }

    #[test]
    fn test_site_overrides() {
        let config = test_parse_config(
            r#"[site]
name = "Alice"
num_posts_on_homepage = 6
num_works_on_homepage = 2
num_projects_on_homepage = 1"#,
        );
        assert_eq!(config.site.name, "Alice");
        assert_eq!(config.site.homepage_limit(PageKind::Blog), Some(6));
        assert_eq!(config.site.homepage_limit(PageKind::Projects), Some(1));
        // untouched sections keep built-in text
        assert_eq!(config.pages.home.title, consts::HOME.title);
    }

    #[test]
    fn test_present_site_missing_counts_default_to_zero() {
        let config = test_parse_config("[site]\nname = \"Alice\"");
        assert_eq!(config.site.num_posts_on_homepage, 0);
        assert!(config.diagnostics().is_empty());
    }

    #[test]
    fn test_negative_count_rejected_by_parser() {
        let result = SiteConfig::from_str("[site]\nname = \"Alice\"\nnum_posts_on_homepage = -1");
        assert!(result.is_err());
    }

    #[test]
    fn test_socials_cleared_explicitly() {
        let config = test_parse_config("socials = []");
        assert!(config.socials.is_empty());
        assert!(config.diagnostics().is_empty());
    }

    #[test]
    fn test_socials_order_preserved() {
        let config = test_parse_config(
            r#"[[socials]]
name = "mastodon"
href = "https://mastodon.social/@alice"

[[socials]]
name = "github"
href = "https://github.com/alice""#,
        );
        let names: Vec<_> = config.socials.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["mastodon", "github"]);
    }

    #[test]
    fn test_all_errors_collected() {
        let config = test_parse_config(
            r#"[site]
name = ""

[pages.blog]
title = ""
description = ""

[[socials]]
name = "github"
href = "not a url""#,
        );
        let diag = config.diagnostics();
        let fields: Vec<_> = diag.errors().iter().map(|e| e.field.as_str()).collect();
        assert_eq!(
            fields,
            [
                "site.name",
                "pages.blog.title",
                "pages.blog.description",
                "socials[0].href"
            ]
        );
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content = "[site]\nname = \"Alice\"\ntagline = \"hi\"\n[unknown_section]\nfield = \"value\"";
        let (config, ignored) = SiteConfig::parse_with_ignored(content).unwrap();

        assert_eq!(config.site.name, "Alice");
        assert!(ignored.iter().any(|f| f == "site.tagline"));
        assert!(ignored.iter().any(|f| f.contains("unknown_section")));
    }

    #[test]
    fn test_unknown_fields_warn_without_cli() {
        let mut config = test_parse_config("");
        config.unknown_fields = vec!["site.tagline".into()];
        let diag = config.diagnostics();
        assert!(diag.is_empty());
        assert_eq!(diag.warnings()[0].0.as_str(), "site.tagline");
    }

    #[test]
    fn test_root_relative() {
        let mut config = SiteConfig::default();
        config.set_root(Path::new("/site"));
        assert_eq!(config.root_relative("/site/folio.toml"), PathBuf::from("folio.toml"));
        assert_eq!(config.get_root(), Path::new("/site"));
    }

    #[test]
    fn test_unknown_fields_error_when_strict() {
        let mut config = test_parse_config("");
        config.cli = Some(leak_cli(&["folio", "check", "--strict"]));
        config.unknown_fields = vec!["site.tagline".into()];

        let diag = config.diagnostics();
        assert_eq!(diag.errors().len(), 1);
        assert_eq!(diag.errors()[0].field.as_str(), "site.tagline");
        assert!(diag.warnings().is_empty());
    }

    #[test]
    fn test_load_missing_file_points_at_init() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("folio.toml");

        for command in ["check", "show"] {
            let cli = leak_cli(&["folio", "-C", path.to_str().unwrap(), command]);
            let err = SiteConfig::load(cli).unwrap_err();
            assert!(
                matches!(err.downcast_ref::<ConfigError>(), Some(ConfigError::NotFound(p)) if p == &path)
            );
            assert!(err.to_string().contains("folio init"));
        }
    }

    #[test]
    fn test_load_existing_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("folio.toml");
        fs::write(&path, "[site]\nname = \"Alice\"\nnum_posts_on_homepage = 2\n").unwrap();

        let cli = leak_cli(&["folio", "-C", path.to_str().unwrap(), "check"]);
        let config = SiteConfig::load(cli).unwrap();

        assert_eq!(config.config_path, path);
        assert_eq!(config.get_root(), temp.path());
        assert!(config.cli.is_some());
        assert_eq!(config.site.name, "Alice");
        assert_eq!(config.site.num_posts_on_homepage, 2);
        assert_eq!(config.socials, builtin_socials());
    }

    #[test]
    fn test_load_strict_rejects_unknown_fields() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("folio.toml");
        fs::write(&path, "[site]\nname = \"Alice\"\ntagline = \"hi\"\n").unwrap();
        let path_arg = path.to_str().unwrap();

        assert!(SiteConfig::load(leak_cli(&["folio", "-C", path_arg, "check"])).is_ok());

        let err = SiteConfig::load(leak_cli(&["folio", "-C", path_arg, "check", "--strict"]))
            .unwrap_err();
        let Some(ConfigError::Diagnostics(diag)) = err.downcast_ref::<ConfigError>() else {
            panic!("expected diagnostics, got {err}");
        };
        assert_eq!(diag.errors()[0].field.as_str(), "site.tagline");
    }

    #[test]
    fn test_load_init_starts_from_builtin() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("folio.toml");
        let config = SiteConfig::load(leak_cli(&["folio", "-C", path.to_str().unwrap(), "init"]))
            .unwrap();
        assert_eq!(config.config_path, path);
        assert_eq!(config.site, SiteInfoConfig::builtin());
    }
}

//! `[[socials]]` configuration.
//!
//! Ordered list of external profile links. The file order is the order
//! in which templates render them.
//!
//! # Example
//!
//! ```toml
//! [[socials]]
//! name = "github"
//! href = "https://github.com/alice"
//!
//! [[socials]]
//! name = "email"
//! href = "mailto:alice@example.com"
//! ```

use crate::config::ConfigDiagnostics;
use crate::config::template;
use crate::consts;
use macros::Config;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// Schemes accepted for profile links.
const ALLOWED_SCHEMES: &[&str] = &["http", "https", "mailto"];

/// External profile link.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "")]
pub struct SocialConfig {
    /// Platform name (e.g. "github"), usually mapped to an icon.
    #[config(inline_doc)]
    pub name: String,

    /// Profile URL.
    #[config(inline_doc)]
    pub href: String,
}

impl From<consts::Social> for SocialConfig {
    fn from(social: consts::Social) -> Self {
        Self {
            name: social.name.into(),
            href: social.href.into(),
        }
    }
}

impl SocialConfig {
    fn validate(&self, index: usize, diag: &mut ConfigDiagnostics) {
        let entry = format!("socials[{index}]");

        if self.name.trim().is_empty() {
            diag.error(
                Self::FIELDS.name.scoped(&entry),
                "social name must not be empty",
            );
        }

        if self.href.trim().is_empty() {
            diag.error(
                Self::FIELDS.href.scoped(&entry),
                "social link must not be empty",
            );
            return;
        }

        // URL format check using url crate for strict validation
        match url::Url::parse(&self.href) {
            Ok(parsed) => {
                if !ALLOWED_SCHEMES.contains(&parsed.scheme()) {
                    diag.error_with_hint(
                        Self::FIELDS.href.scoped(&entry),
                        format!(
                            "scheme '{}' not supported, must be one of: {}",
                            parsed.scheme(),
                            ALLOWED_SCHEMES.join(", ")
                        ),
                        "use format like https://example.com/me",
                    );
                } else if parsed.scheme() != "mailto" && parsed.host_str().is_none() {
                    diag.error_with_hint(
                        Self::FIELDS.href.scoped(&entry),
                        "URL must have a valid host",
                        "use format like https://example.com/me",
                    );
                }
            }
            Err(e) => {
                diag.error_with_hint(
                    Self::FIELDS.href.scoped(&entry),
                    format!("invalid URL: {}", e),
                    "use format like https://example.com/me",
                );
            }
        }
    }
}

/// Values used when `socials` is absent.
pub fn builtin_socials() -> Vec<SocialConfig> {
    consts::SOCIALS.iter().copied().map(Into::into).collect()
}

/// Validate every entry; repeated names only warn.
pub fn validate_socials(socials: &[SocialConfig], diag: &mut ConfigDiagnostics) {
    let mut seen = FxHashSet::default();
    for (index, social) in socials.iter().enumerate() {
        social.validate(index, diag);
        let name = social.name.trim().to_ascii_lowercase();
        if !name.is_empty() && !seen.insert(name) {
            diag.warn(
                SocialConfig::FIELDS.name.scoped(format_args!("socials[{index}]")),
                format!("'{}' is listed more than once", social.name),
            );
        }
    }
}

/// Render the list as `[[socials]]` tables.
pub fn socials_template(socials: &[SocialConfig]) -> String {
    if socials.is_empty() {
        return "socials = []\n".to_string();
    }
    socials
        .iter()
        .map(|social| template::array_table("socials", &social.template()))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn social(name: &str, href: &str) -> SocialConfig {
        SocialConfig {
            name: name.into(),
            href: href.into(),
        }
    }

    fn check(socials: &[SocialConfig]) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();
        validate_socials(socials, &mut diag);
        diag
    }

    #[test]
    fn test_builtin_socials_valid() {
        let socials = builtin_socials();
        assert_eq!(socials.len(), 2);
        assert_eq!(socials[0].name, "github");
        let diag = check(&socials);
        assert!(diag.is_empty());
        assert!(diag.warnings().is_empty());
    }

    #[test]
    fn test_mailto_allowed() {
        assert!(check(&[social("email", "mailto:me@example.com")]).is_empty());
    }

    #[test]
    fn test_invalid_links() {
        let diag = check(&[
            social("github", "github.com/alice"),
            social("ftp", "ftp://example.com/me"),
            social("", ""),
        ]);
        let fields: Vec<_> = diag.errors().iter().map(|e| e.field.as_str()).collect();
        assert_eq!(
            fields,
            [
                "socials[0].href",
                "socials[1].href",
                "socials[2].name",
                "socials[2].href"
            ]
        );
        assert!(diag.errors()[1].message.contains("ftp"));
    }

    #[test]
    fn test_duplicate_names_warn() {
        let diag = check(&[
            social("github", "https://github.com/alice"),
            social("GitHub", "https://github.com/alice-work"),
        ]);
        assert!(diag.is_empty());
        assert_eq!(diag.warnings().len(), 1);
        assert_eq!(diag.warnings()[0].0.as_str(), "socials[1].name");
    }

    #[test]
    fn test_template_preserves_order() {
        let template = socials_template(&builtin_socials());
        let github = template.find("github").unwrap();
        let linkedin = template.find("linkedin").unwrap();
        assert!(github < linkedin);
        assert_eq!(template.matches("[[socials]]").count(), 2);
        assert_eq!(socials_template(&[]), "socials = []\n");
    }
}

//! `folio check` - validate the metadata file.
//!
//! Validation itself runs while loading; reaching this point means the
//! file is valid.

use crate::{config::SiteConfig, debug, log};
use anyhow::Result;

pub fn check_config(config: &SiteConfig) -> Result<()> {
    for (kind, page) in config.pages.iter() {
        debug!("check"; "{kind}: {}", page.document_title(&config.site.name));
    }
    log!("check"; "{}", summary(config));
    Ok(())
}

fn summary(config: &SiteConfig) -> String {
    let path = config.root_relative(&config.config_path);
    let socials = config.socials.len();
    format!(
        "{} is valid: {} pages, {} social link{}",
        path.display(),
        config.pages.iter().count(),
        socials,
        if socials == 1 { "" } else { "s" }
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_summary() {
        let mut config = SiteConfig {
            config_path: PathBuf::from("/site/folio.toml"),
            ..SiteConfig::default()
        };
        config.set_root(std::path::Path::new("/site"));
        assert_eq!(summary(&config), "folio.toml is valid: 4 pages, 2 social links");

        config.socials.truncate(1);
        assert!(summary(&config).ends_with("1 social link"));
    }
}

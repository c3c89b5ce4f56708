//! Config file generation.
//!
//! Writes a commented `folio.toml` holding the built-in metadata, ready
//! to be edited.

use crate::{config::SiteConfig, log};
use anyhow::{Context, Result, bail};
use std::{fs, path::Path};

/// Write (or with `dry_run`, print) the config template.
pub fn new_config(config: &SiteConfig, dry_run: bool, force: bool) -> Result<()> {
    let content = config.template();

    if dry_run {
        print!("{content}");
        return Ok(());
    }

    write_config(&config.config_path, &content, force)?;
    log!("init"; "wrote {}", config.config_path.display());
    Ok(())
}

/// Write `content` to `path`, refusing to replace an existing file unless `force`.
fn write_config(path: &Path, content: &str, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "config file '{}' already exists, use --force to overwrite",
            path.display()
        );
    }

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory '{}'", parent.display()))?;
    }

    fs::write(path, content)
        .with_context(|| format!("Failed to write config file '{}'", path.display()))?;

    Ok(())
}

//! `folio show` - emit metadata as JSON for a templating layer.

use super::ShowArgs;
use crate::config::{PageKind, SiteConfig};
use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;

/// Metadata of a single page, with values derived from the site section.
#[derive(Debug, Serialize)]
struct PageView<'a> {
    kind: PageKind,
    title: &'a str,
    description: &'a str,
    document_title: String,
    homepage_count: Option<usize>,
}

impl<'a> PageView<'a> {
    fn new(config: &'a SiteConfig, kind: PageKind) -> Self {
        let page = config.pages.get(kind);
        Self {
            kind,
            title: &page.title,
            description: &page.description,
            document_title: page.document_title(&config.site.name),
            homepage_count: config.site.homepage_limit(kind),
        }
    }
}

pub fn show_metadata(args: &ShowArgs, config: &SiteConfig) -> Result<()> {
    let json = render(config, args.page, args.pretty)?;

    match &args.output {
        Some(path) => fs::write(path, json + "\n")
            .with_context(|| format!("Failed to write '{}'", path.display()))?,
        None => println!("{json}"),
    }
    Ok(())
}

fn render(config: &SiteConfig, page: Option<PageKind>, pretty: bool) -> Result<String> {
    let value = match page {
        Some(kind) => serde_json::to_value(PageView::new(config, kind))?,
        None => serde_json::to_value(config)?,
    };

    let json = if pretty {
        serde_json::to_string_pretty(&value)?
    } else {
        serde_json::to_string(&value)?
    };
    Ok(json)
}

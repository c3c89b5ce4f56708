//! Commented TOML rendering.
//!
//! Helpers called by `#[derive(Config)]` output, plus the full
//! `folio.toml` template written by `folio init`.

use super::SiteConfig;
use super::section::socials_template;
use serde::Serialize;

/// Render a single value as inline TOML, `None` if it has no TOML form.
pub fn render_value<T: Serialize + ?Sized>(value: &T) -> Option<String> {
    toml::Value::try_from(value).ok().map(|v| v.to_string())
}

/// Append `key = value` with its doc comment.
///
/// Single-line docs marked `inline` become a trailing comment; otherwise
/// each doc line is written above the field.
pub fn push_field<T: Serialize + ?Sized>(
    out: &mut String,
    key: &str,
    doc: &str,
    inline: bool,
    value: &T,
) {
    if !inline {
        for line in doc.lines() {
            out.push_str("# ");
            out.push_str(line);
            out.push('\n');
        }
    }

    match render_value(value) {
        Some(rendered) => {
            out.push_str(key);
            out.push_str(" = ");
            out.push_str(&rendered);
        }
        None => {
            out.push_str("# ");
            out.push_str(key);
            out.push_str(" =");
        }
    }

    if inline && !doc.is_empty() {
        out.push_str("  # ");
        out.push_str(doc);
    }
    out.push('\n');
}

/// Wrap a rendered body in a `[header]` table with a leading doc comment.
pub fn table(doc: &str, header: &str, body: &str) -> String {
    let mut out = String::new();
    for line in doc.lines() {
        out.push_str("# ");
        out.push_str(line);
        out.push('\n');
    }
    if !header.is_empty() {
        out.push('[');
        out.push_str(header);
        out.push_str("]\n");
    }
    out.push_str(body);
    out
}

/// Wrap a rendered body in a `[[header]]` array-of-tables entry.
pub fn array_table(header: &str, body: &str) -> String {
    format!("[[{header}]]\n{body}")
}

/// Generate `folio.toml` content from `config`, with comments.
pub fn generate_config_template(config: &SiteConfig) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "# folio configuration file (v{})\n",
        env!("CARGO_PKG_VERSION")
    ));
    out.push_str("# Leave out a section to use the built-in value.\n\n");

    // A bare `socials = []` must come before the first table header,
    // otherwise it is read as a key of that table.
    if config.socials.is_empty() {
        out.push_str("# No profile links.\n");
        out.push_str(&socials_template(&config.socials));
        out.push('\n');
    }

    out.push_str(&config.site.template_with_header());
    out.push('\n');

    out.push_str(&config.pages.template());

    if !config.socials.is_empty() {
        out.push('\n');
        out.push_str("# Profile links, rendered in this order.\n");
        out.push_str(&socials_template(&config.socials));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_field_inline_doc() {
        let mut out = String::new();
        push_field(&mut out, "count", "How many.", true, &3usize);
        assert_eq!(out, "count = 3  # How many.\n");
    }

    #[test]
    fn test_push_field_block_doc() {
        let mut out = String::new();
        push_field(&mut out, "title", "First.\nSecond.", false, "Blog");
        assert_eq!(out, "# First.\n# Second.\ntitle = \"Blog\"\n");
    }

    #[test]
    fn test_table_without_header() {
        assert_eq!(table("", "", "a = 1\n"), "a = 1\n");
        assert_eq!(table("Doc.", "site", "a = 1\n"), "# Doc.\n[site]\na = 1\n");
    }

    #[test]
    fn test_default_template_round_trips() {
        let config = SiteConfig::default();
        let content = generate_config_template(&config);
        let (parsed, ignored) = SiteConfig::parse_with_ignored(&content).unwrap();
        assert!(ignored.is_empty(), "unknown fields: {ignored:?}");
        assert_eq!(parsed.site, config.site);
        assert_eq!(parsed.pages, config.pages);
        assert_eq!(parsed.socials, config.socials);
    }

    #[test]
    fn test_empty_socials_template_round_trips() {
        let mut config = SiteConfig::default();
        config.socials.clear();
        let content = generate_config_template(&config);

        let (parsed, ignored) = SiteConfig::parse_with_ignored(&content).unwrap();
        assert!(ignored.is_empty(), "unknown fields: {ignored:?}");
        assert!(parsed.socials.is_empty());
        assert!(content.find("socials = []").unwrap() < content.find("[site]").unwrap());
    }
}

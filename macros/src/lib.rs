//! Proc macros for folio.
//!
//! # Config derive macro
//!
//! Generates field path accessors and a documented TOML template
//! rendered from the current field values.
//!
//! ```ignore
//! #[derive(Config)]
//! #[config(section = "site")]
//! /// Site identity.
//! pub struct SiteInfoConfig {
//!     /// Site owner name.
//!     #[config(inline_doc)]
//!     pub name: String,
//!
//!     /// Internal field.
//!     #[config(skip)]
//!     pub internal: String,
//! }
//!
//! // Generates:
//! // - SiteInfoConfig::FIELDS.name -> FieldPath("site.name")
//! // - config.template() -> `name = "..."  # Site owner name.`
//! // - config.template_with_header() -> with [site] header
//! ```
//!
//! # Attributes
//!
//! Struct-level:
//! - `#[config(section = "path")]` - TOML section path (empty for tables
//!   whose header is chosen by the caller)
//!
//! Field-level:
//! - `#[config(skip)]` - Skip from FIELDS and template
//! - `#[config(hidden)]` - Keep in FIELDS, hide from template output
//! - `#[config(name = "x")]` - Custom TOML field name
//! - `#[config(inline_doc)]` - Render a single-line doc as trailing comment
//!
//! # Section inference
//!
//! Without `section` attribute, inferred from struct name:
//! - `SiteInfoConfig` → `site_info`
//! - `PagesConfig` → `pages`

mod config;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Derive macro that generates FIELDS and template().
#[proc_macro_derive(Config, attributes(config))]
pub fn derive_config(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    config::derive(&input).into()
}

//! Configuration section definitions.
//!
//! Each module corresponds to a section in `folio.toml`:
//!
//! | Module    | TOML Section     | Purpose                               |
//! |-----------|------------------|---------------------------------------|
//! | `site`    | `[site]`         | Site name and homepage listing counts |
//! | `pages`   | `[pages.<kind>]` | Per-page title and description        |
//! | `socials` | `[[socials]]`    | Ordered profile links                 |

mod pages;
mod site;
mod socials;

pub use pages::{PageKind, PageMetaConfig, PagesConfig};
pub use site::SiteInfoConfig;
pub use socials::{SocialConfig, builtin_socials, socials_template, validate_socials};

//! Built-in site metadata.
//!
//! These are the values the site ships with. Any section left out of
//! `folio.toml` falls back to the matching constant here.

/// Site identity and homepage listing sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Site {
    pub name: &'static str,
    pub num_posts_on_homepage: usize,
    pub num_works_on_homepage: usize,
    pub num_projects_on_homepage: usize,
}

/// Title and description of a single page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Metadata {
    pub title: &'static str,
    pub description: &'static str,
}

/// External profile link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Social {
    pub name: &'static str,
    pub href: &'static str,
}

pub const SITE: Site = Site {
    name: "Nicolas Lelièvre",
    num_posts_on_homepage: 4,
    num_works_on_homepage: 3,
    num_projects_on_homepage: 0,
};

pub const HOME: Metadata = Metadata {
    title: "Home",
    description: "Nicolas Lelièvre is an Analytics Engineering Tech Lead blending strong business insight with modern data engineering practices.",
};

pub const BLOG: Metadata = Metadata {
    title: "Blog",
    description: "A collection of articles on topics I am passionate about.",
};

pub const WORK: Metadata = Metadata {
    title: "Work",
    description: "Where I have worked and what I have done.",
};

pub const PROJECTS: Metadata = Metadata {
    title: "Projects",
    description: "A collection of my projects, with links to repositories and demos.",
};

pub const SOCIALS: &[Social] = &[
    Social {
        name: "github",
        href: "https://github.com/nicolaslelievre",
    },
    Social {
        name: "linkedin",
        href: "https://www.linkedin.com/in/nicolaslelievre-ca/",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_metadata_not_empty() {
        for meta in [HOME, BLOG, WORK, PROJECTS] {
            assert!(!meta.title.trim().is_empty());
            assert!(!meta.description.trim().is_empty());
        }
    }

    #[test]
    fn test_socials_are_well_formed_links() {
        assert!(!SOCIALS.is_empty());
        for social in SOCIALS {
            assert!(!social.name.is_empty());
            let url = url::Url::parse(social.href).unwrap();
            assert_eq!(url.scheme(), "https");
            assert!(url.host_str().is_some());
        }
    }

    #[test]
    fn test_socials_order() {
        let names: Vec<_> = SOCIALS.iter().map(|s| s.name).collect();
        assert_eq!(names, ["github", "linkedin"]);
    }

    #[test]
    fn test_homepage_counts() {
        assert_eq!(SITE.num_posts_on_homepage, 4);
        assert_eq!(SITE.num_works_on_homepage, 3);
        assert_eq!(SITE.num_projects_on_homepage, 0);
    }
}

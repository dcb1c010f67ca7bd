//! Static portfolio content
//!
//! Everything here is a compile-time literal. Nothing is mutated after
//! definition; identity is array position (projects also carry an id used
//! for lookup).

pub mod data;
pub mod models;

pub use data::PORTFOLIO;
pub use models::{
    AboutCard, ContactInfo, ExperienceEntry, Icon, NavItem, Portfolio, Profile, Project, SectionId,
    SkillCategory, SkillGroup, SkillLevel, SocialLink,
};

/// Kind of outbound link, decided by URL scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    Web,
    Mail,
}

/// Parse a literal link and classify it
pub fn link_kind(link: &str) -> crate::Result<LinkKind> {
    let url = url::Url::parse(link)?;
    match url.scheme() {
        "mailto" => Ok(LinkKind::Mail),
        "http" | "https" => Ok(LinkKind::Web),
        other => Err(crate::Error::Other(format!("unsupported link scheme: {}", other))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_hex_color(s: &str) -> bool {
        s.len() == 7 && s.starts_with('#') && s[1..].chars().all(|c| c.is_ascii_hexdigit())
    }

    #[test]
    fn test_lists_are_non_empty() {
        assert!(!PORTFOLIO.projects.is_empty());
        assert!(!PORTFOLIO.experience.is_empty());
        assert!(!PORTFOLIO.skill_categories.is_empty());
        assert!(!PORTFOLIO.contact.is_empty());
        for project in PORTFOLIO.projects {
            assert!(!project.features.is_empty(), "{} has no features", project.id);
            assert!(!project.tech.is_empty(), "{} has no tech", project.id);
        }
    }

    #[test]
    fn test_nav_targets_are_anchors() {
        for item in PORTFOLIO.nav {
            assert_eq!(SectionId::from_anchor(item.target.anchor()), Some(item.target));
            assert_ne!(item.target, SectionId::Hero, "hero is reached via the logo, not the nav");
        }
        assert_eq!(PORTFOLIO.nav.len(), SectionId::ALL.len() - 1);
    }

    #[test]
    fn test_colors_are_hex() {
        let colors = PORTFOLIO
            .experience
            .iter()
            .map(|e| e.color)
            .chain(PORTFOLIO.skill_categories.iter().map(|c| c.color))
            .chain(PORTFOLIO.skill_groups.iter().map(|g| g.color))
            .chain(PORTFOLIO.projects.iter().map(|p| p.color));
        for color in colors {
            assert!(is_hex_color(color), "bad color literal {}", color);
        }
    }

    #[test]
    fn test_links_parse() {
        for project in PORTFOLIO.projects {
            assert_eq!(link_kind(project.repo_url).unwrap(), LinkKind::Web);
            assert_eq!(link_kind(project.demo_url).unwrap(), LinkKind::Web);
            assert!(url::Url::parse(project.image_url).is_ok());
        }
        for link in PORTFOLIO.profile.links {
            assert!(link_kind(link.url).is_ok(), "{}", link.url);
        }
        for info in PORTFOLIO.contact.iter().filter_map(|c| c.link) {
            assert!(link_kind(info).is_ok(), "{}", info);
        }
        assert_eq!(link_kind("mailto:someone@example.com").unwrap(), LinkKind::Mail);
        assert!(link_kind("ftp://example.com").is_err());
    }

    #[test]
    fn test_project_ids_unique_and_lookup() {
        for (idx, project) in PORTFOLIO.projects.iter().enumerate() {
            assert_eq!(PORTFOLIO.project_index(project.id), Some(idx));
        }
        assert_eq!(PORTFOLIO.project_index("missing"), None);
    }

    #[test]
    fn test_skill_levels_in_range_and_grouped() {
        for skill in PORTFOLIO.skill_levels {
            assert!((0.0..=1.0).contains(&skill.level));
            assert!(PORTFOLIO.skill_groups.iter().any(|g| g.id == skill.group));
        }
        assert_eq!(PORTFOLIO.skills_in(None).len(), PORTFOLIO.skill_levels.len());
        let frontend = PORTFOLIO.skills_in(Some("frontend"));
        assert!(!frontend.is_empty());
        assert!(frontend.iter().all(|s| s.group == "frontend"));
    }

    #[test]
    fn test_tech_preview() {
        let project = &PORTFOLIO.projects[0];
        let (shown, hidden) = project.tech_preview(2);
        assert_eq!(shown.len(), 2);
        assert_eq!(hidden, project.tech.len() - 2);
        let (all, none) = project.tech_preview(99);
        assert_eq!(all.len(), project.tech.len());
        assert_eq!(none, 0);
    }
}

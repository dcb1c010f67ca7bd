use std::fmt;

use serde::Serialize;

/// Named in-page anchors, in page order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    Hero,
    About,
    Experience,
    Skills,
    Projects,
    Contact,
}

impl SectionId {
    /// All anchors in page (and active-section priority) order
    pub const ALL: [SectionId; 6] = [
        SectionId::Hero,
        SectionId::About,
        SectionId::Experience,
        SectionId::Skills,
        SectionId::Projects,
        SectionId::Contact,
    ];

    pub fn anchor(self) -> &'static str {
        match self {
            SectionId::Hero => "hero",
            SectionId::About => "about",
            SectionId::Experience => "experience",
            SectionId::Skills => "skills",
            SectionId::Projects => "projects",
            SectionId::Contact => "contact",
        }
    }

    pub fn from_anchor(anchor: &str) -> Option<Self> {
        let anchor = anchor.trim_start_matches('#');
        Self::ALL.into_iter().find(|s| s.anchor() == anchor)
    }

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }

    pub fn next(self) -> Option<Self> {
        Self::ALL.get(self.index() + 1).copied()
    }

    pub fn prev(self) -> Option<Self> {
        self.index().checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.anchor())
    }
}

/// Icon references, drawn as glyphs by the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Icon {
    Code,
    Database,
    Layers,
    Workflow,
    Lightbulb,
    Cpu,
    Wrench,
    Award,
    Mail,
    MapPin,
    Linkedin,
    Github,
    User,
    Briefcase,
    Languages,
}

#[derive(Debug, Clone, Serialize)]
pub struct NavItem {
    pub label: &'static str,
    pub target: SectionId,
}

#[derive(Debug, Clone, Serialize)]
pub struct SocialLink {
    pub label: &'static str,
    pub icon: Icon,
    pub url: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct AboutCard {
    pub title: &'static str,
    pub icon: Icon,
    pub body: &'static str,
}

/// Hero / about copy for the portfolio owner
#[derive(Debug, Clone, Serialize)]
pub struct Profile {
    pub name: &'static str,
    pub headline: &'static str,
    pub summary: &'static str,
    pub about_heading: &'static str,
    pub about: &'static [AboutCard],
    pub links: &'static [SocialLink],
    /// Short labels floating around the hero scene
    pub highlights: &'static [&'static str],
}

#[derive(Debug, Clone, Serialize)]
pub struct ExperienceEntry {
    pub title: &'static str,
    pub organization: &'static str,
    pub location: &'static str,
    pub period: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub color: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct SkillCategory {
    pub name: &'static str,
    pub icon: Icon,
    pub skills: &'static [&'static str],
    pub color: &'static str,
}

/// Filter group for the skill orbit
#[derive(Debug, Clone, Serialize)]
pub struct SkillGroup {
    pub id: &'static str,
    pub name: &'static str,
    pub color: &'static str,
}

/// A single skill with a cosmetic level in [0, 1]
#[derive(Debug, Clone, Serialize)]
pub struct SkillLevel {
    pub name: &'static str,
    pub group: &'static str,
    pub level: f32,
}

#[derive(Debug, Clone, Serialize)]
pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub repo_url: &'static str,
    pub demo_url: &'static str,
    pub image_url: &'static str,
    pub features: &'static [&'static str],
    pub color: &'static str,
}

impl Project {
    /// First `shown` tech tags plus the count of the hidden rest
    pub fn tech_preview(&self, shown: usize) -> (&'static [&'static str], usize) {
        let shown = shown.min(self.tech.len());
        (&self.tech[..shown], self.tech.len() - shown)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ContactInfo {
    pub icon: Icon,
    pub label: &'static str,
    pub value: &'static str,
    /// `None` for entries that are display-only (e.g. location)
    pub link: Option<&'static str>,
}

/// Everything the page renders
#[derive(Debug, Clone, Serialize)]
pub struct Portfolio {
    pub profile: &'static Profile,
    pub nav: &'static [NavItem],
    pub experience: &'static [ExperienceEntry],
    pub skill_categories: &'static [SkillCategory],
    pub skill_groups: &'static [SkillGroup],
    pub skill_levels: &'static [SkillLevel],
    pub projects: &'static [Project],
    pub contact: &'static [ContactInfo],
}

impl Portfolio {
    pub fn project_index(&self, id: &str) -> Option<usize> {
        self.projects.iter().position(|p| p.id == id)
    }

    /// Skills visible under an optional group filter
    pub fn skills_in(&self, group: Option<&str>) -> Vec<&'static SkillLevel> {
        self.skill_levels
            .iter()
            .filter(|s| group.map_or(true, |g| s.group == g))
            .collect()
    }
}

mod about;
mod contact;
mod experience;
mod footer;
mod header;
mod hero;
pub mod page;
mod popup;
mod projects;
mod scroll_progress;
mod skills;
mod splash;
mod status_bar;
pub mod text;

use std::ops::Range;

use ratatui::text::Line;

pub use about::AboutSection;
pub use contact::ContactSection;
pub use experience::ExperienceSection;
pub use footer::FooterSection;
pub use header::HeaderWidget;
pub use hero::HeroSection;
pub use page::{PageWidget, ENTRANCE_WINDOW};
pub use popup::PopupWidget;
pub use projects::ProjectsSection;
pub use scroll_progress::ScrollProgressWidget;
pub use skills::SkillsSection;
pub use splash::SplashWidget;
pub use status_bar::StatusBarWidget;

/// Terminals at least this wide get two-column layouts and the full nav
pub const WIDE: u16 = 80;

/// Pre-wrapped rows of one page block
#[derive(Debug, Clone, Default)]
pub struct SectionView {
    pub lines: Vec<Line<'static>>,
    /// Rows of the carousel card, relative to the block
    pub hotspot: Option<Range<u16>>,
}

impl SectionView {
    pub fn new(lines: Vec<Line<'static>>) -> Self {
        Self { lines, hotspot: None }
    }

    pub fn height(&self) -> u16 {
        u16::try_from(self.lines.len()).unwrap_or(u16::MAX)
    }
}

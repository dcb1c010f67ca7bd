use super::SectionBounds;
use crate::config::UiConfig;
use crate::content::SectionId;

/// Derives the header style flag and the active nav section from scroll
#[derive(Debug, Clone)]
pub struct ScrollTracker {
    threshold: u16,
    reference_line: i32,
    scrolled: bool,
    active: SectionId,
}

impl ScrollTracker {
    pub fn new(threshold: u16, reference_line: u16) -> Self {
        Self {
            threshold,
            reference_line: i32::from(reference_line),
            scrolled: false,
            active: SectionId::Hero,
        }
    }

    pub fn from_config(config: &UiConfig) -> Self {
        Self::new(config.header_threshold_rows, config.reference_line_rows)
    }

    /// Recompute both facts for a scroll offset and the current layout.
    ///
    /// The first section in page order whose box straddles the reference
    /// line becomes active. If none does, the previous value is kept.
    pub fn on_scroll(&mut self, offset: u16, sections: &[SectionBounds]) -> SectionId {
        self.scrolled = offset > self.threshold;

        let hit = SectionId::ALL.into_iter().find(|id| {
            sections
                .iter()
                .any(|b| b.id == *id && b.straddles(self.reference_line))
        });
        if let Some(id) = hit {
            self.active = id;
        }
        self.active
    }

    /// Header should switch to its elevated style
    pub fn scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn active(&self) -> SectionId {
        self.active
    }
}

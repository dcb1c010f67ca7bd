//! Scroll-derived page state: reveal latches, header state and progress
//!
//! All offsets and boxes are measured in terminal rows. Section boxes are
//! relative to the top of the viewport, so a section scrolled above the
//! screen has a negative `top`.

mod progress;
mod reveal;
mod tracker;

pub use progress::ScrollProgress;
pub use reveal::{Reveal, RevealSet};
pub use tracker::ScrollTracker;

use crate::content::SectionId;

/// Viewport-relative box of one section; `bottom` is one past the last row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionBounds {
    pub id: SectionId,
    pub top: i32,
    pub bottom: i32,
}

impl SectionBounds {
    /// Box for a section laid out at `page_top` with `height` rows, seen
    /// from scroll position `offset`
    pub fn at(id: SectionId, page_top: u16, height: u16, offset: u16) -> Self {
        let top = i32::from(page_top) - i32::from(offset);
        Self {
            id,
            top,
            bottom: top + i32::from(height),
        }
    }

    /// Whether any row of the box falls inside a viewport of `height` rows
    pub fn intersects(&self, viewport_height: u16) -> bool {
        self.bottom > 0 && self.top < i32::from(viewport_height)
    }

    /// Whether the box straddles a horizontal line at `line` rows
    pub fn straddles(&self, line: i32) -> bool {
        self.top <= line && self.bottom >= line
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_at_offset() {
        let b = SectionBounds::at(SectionId::Skills, 40, 20, 50);
        assert_eq!(b.top, -10);
        assert_eq!(b.bottom, 10);
        assert!(b.intersects(24));
        assert!(b.straddles(3));
    }

    #[test]
    fn test_bounds_outside_viewport() {
        let above = SectionBounds::at(SectionId::About, 0, 10, 10);
        assert!(!above.intersects(24));
        let below = SectionBounds::at(SectionId::Contact, 100, 10, 0);
        assert!(!below.intersects(24));
        assert!(SectionBounds::at(SectionId::Contact, 23, 10, 0).intersects(24));
    }
}

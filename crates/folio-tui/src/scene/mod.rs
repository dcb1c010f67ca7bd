//! Decorative hero scene
//!
//! `HeroScene` draws a lit, slowly rotating wireframe sphere with an
//! orbiting particle field. It sits behind a `FallbackBoundary` so that an
//! unsupported terminal or a bad frame leaves a static illustration instead.

mod canvas;
mod fallback;
mod sphere;

use std::time::Duration;

use folio_core::boundary::FallbackBoundary;
use ratatui::style::Color;
use ratatui::text::Line;

pub use fallback::StaticHero;
pub use sphere::{HeroScene, SceneSupport};

/// Everything a scene frame depends on
#[derive(Debug, Clone, Copy)]
pub struct SceneViewport {
    pub width: u16,
    pub height: u16,
    /// Time since the scene was created
    pub elapsed: Duration,
    pub primary: Color,
    pub secondary: Color,
    pub dim: Color,
}

/// Rendered rows, ready to be placed into a section
pub type SceneFrame = Vec<Line<'static>>;

pub type SceneBoundary = FallbackBoundary<HeroScene, StaticHero>;

/// Build the hero boundary; `enabled = false` goes straight to the fallback
pub fn boundary(enabled: bool, support: &SceneSupport) -> SceneBoundary {
    if enabled {
        FallbackBoundary::new("hero-scene", || HeroScene::new(support), StaticHero)
    } else {
        FallbackBoundary::disabled("hero-scene", StaticHero)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> SceneViewport {
        SceneViewport {
            width: 30,
            height: 12,
            elapsed: Duration::from_millis(1500),
            primary: Color::Blue,
            secondary: Color::Magenta,
            dim: Color::DarkGray,
        }
    }

    #[test]
    fn test_unsupported_terminal_uses_fallback() {
        let support = SceneSupport { term: Some("dumb".to_string()) };
        let mut boundary = boundary(true, &support);
        assert!(boundary.is_failed());
        let expected = {
            use folio_core::boundary::Fallback;
            StaticHero.fallback(&viewport())
        };
        assert_eq!(boundary.render(&viewport()), expected);
    }

    #[test]
    fn test_disabled_uses_fallback() {
        let support = SceneSupport { term: Some("xterm-256color".to_string()) };
        let mut boundary = boundary(false, &support);
        assert!(boundary.is_failed());
        assert_eq!(boundary.render(&viewport()).len(), 12);
    }

    #[test]
    fn test_supported_terminal_animates() {
        let support = SceneSupport { term: Some("xterm-256color".to_string()) };
        let mut boundary = boundary(true, &support);
        assert!(!boundary.is_failed());
        let first = boundary.render(&viewport());
        let later = boundary.render(&SceneViewport {
            elapsed: Duration::from_millis(4000),
            ..viewport()
        });
        assert_eq!(first.len(), 12);
        assert_ne!(first, later);
    }
}

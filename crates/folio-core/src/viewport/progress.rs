/// Page scroll progress for the top-of-screen indicator
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollProgress {
    threshold: u16,
    ratio: f64,
    visible: bool,
}

impl ScrollProgress {
    pub fn new(threshold: u16) -> Self {
        Self {
            threshold,
            ratio: 0.0,
            visible: false,
        }
    }

    /// `offset / (content_height - viewport_height)`, clamped to [0, 1]
    pub fn ratio_for(offset: u16, content_height: u16, viewport_height: u16) -> f64 {
        let scrollable = content_height.saturating_sub(viewport_height);
        if scrollable == 0 {
            return 0.0;
        }
        (f64::from(offset) / f64::from(scrollable)).clamp(0.0, 1.0)
    }

    pub fn update(&mut self, offset: u16, content_height: u16, viewport_height: u16) {
        self.ratio = Self::ratio_for(offset, content_height, viewport_height);
        self.visible = offset > self.threshold;
    }

    pub fn ratio(&self) -> f64 {
        self.ratio
    }

    pub fn visible(&self) -> bool {
        self.visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratio_clamps() {
        assert_eq!(ScrollProgress::ratio_for(0, 100, 20), 0.0);
        assert_eq!(ScrollProgress::ratio_for(40, 100, 20), 0.5);
        assert_eq!(ScrollProgress::ratio_for(80, 100, 20), 1.0);
        assert_eq!(ScrollProgress::ratio_for(500, 100, 20), 1.0);
        // content shorter than the screen
        assert_eq!(ScrollProgress::ratio_for(3, 10, 20), 0.0);
    }

    #[test]
    fn test_visibility_threshold() {
        let mut progress = ScrollProgress::new(5);
        progress.update(5, 100, 20);
        assert!(!progress.visible());
        progress.update(6, 100, 20);
        assert!(progress.visible());
        assert!(progress.ratio() > 0.0);
    }
}

use std::time::{Duration, Instant};

use super::config::{ScrollConfig, ScrollConfigExt};
use super::easing::{EasingType, EasingTypeExt};
use super::timing::{lerp_u16, progress};

#[derive(Debug, Clone)]
struct Glide {
    start: Instant,
    from: u16,
    to: u16,
    duration: Duration,
    easing: EasingType,
}

/// Page scroll context
///
/// Holds the scroll offset of the whole page in rows, the current content
/// and viewport extents, and an optional glide towards a target. Key presses
/// arriving within one frame are batched into a single glide.
#[derive(Debug, Clone)]
pub struct PageScroll {
    config: ScrollConfig,
    glide: Option<Glide>,
    offset: u16,
    pending: i32,
    content_height: u16,
    viewport_height: u16,
}

impl PageScroll {
    pub fn new(config: ScrollConfig) -> Self {
        Self {
            config,
            glide: None,
            offset: 0,
            pending: 0,
            content_height: 0,
            viewport_height: 0,
        }
    }

    pub fn config(&self) -> &ScrollConfig {
        &self.config
    }

    /// Record the laid-out page size. Called every frame before drawing.
    pub fn set_extent(&mut self, content_height: u16, viewport_height: u16) {
        self.content_height = content_height;
        self.viewport_height = viewport_height;
        let max = self.max_offset();
        self.offset = self.offset.min(max);
        if let Some(glide) = self.glide.as_mut() {
            glide.to = glide.to.min(max);
        }
    }

    pub fn max_offset(&self) -> u16 {
        self.content_height.saturating_sub(self.viewport_height)
    }

    #[inline]
    pub fn offset(&self) -> u16 {
        self.offset
    }

    pub fn content_height(&self) -> u16 {
        self.content_height
    }

    pub fn viewport_height(&self) -> u16 {
        self.viewport_height
    }

    /// Where the page will rest once the current glide finishes
    pub fn target(&self) -> u16 {
        self.glide.as_ref().map_or(self.offset, |g| g.to)
    }

    /// Whether the loop should run at animation frame rate
    pub fn needs_update(&self) -> bool {
        self.glide.is_some() || self.pending != 0
    }

    pub fn scroll_by(&mut self, delta: i32) {
        if self.config.is_smooth() {
            self.pending += delta;
        } else {
            self.offset = self.clamped(i32::from(self.offset) + delta);
            self.glide = None;
        }
    }

    pub fn line_down(&mut self) {
        self.scroll_by(self.config.step_lines());
    }

    pub fn line_up(&mut self) {
        self.scroll_by(-self.config.step_lines());
    }

    pub fn half_page_down(&mut self) {
        self.scroll_by(i32::from((self.viewport_height / 2).max(1)));
    }

    pub fn half_page_up(&mut self) {
        self.scroll_by(-i32::from((self.viewport_height / 2).max(1)));
    }

    pub fn page_down(&mut self) {
        self.scroll_by(i32::from(self.viewport_height.max(1)));
    }

    pub fn page_up(&mut self) {
        self.scroll_by(-i32::from(self.viewport_height.max(1)));
    }

    /// Glide to an absolute row (anchor navigation, back to top)
    pub fn glide_to(&mut self, row: u16, now: Instant) {
        self.pending = 0;
        let target = row.min(self.max_offset());
        self.start_glide(target, now);
    }

    pub fn top(&mut self, now: Instant) {
        self.glide_to(0, now);
    }

    pub fn bottom(&mut self, now: Instant) {
        self.glide_to(self.max_offset(), now);
    }

    /// Advance the glide and return the offset to draw with
    pub fn update(&mut self, now: Instant) -> u16 {
        if self.pending != 0 {
            let target = self.clamped(i32::from(self.target()) + self.pending);
            self.pending = 0;
            self.start_glide(target, now);
        }

        if let Some(glide) = &self.glide {
            let t = progress(glide.start, glide.duration, now);
            self.offset = lerp_u16(glide.from, glide.to, glide.easing.apply(t)).min(self.max_offset());
            if t >= 1.0 {
                self.offset = glide.to.min(self.max_offset());
                self.glide = None;
            }
        }
        self.offset
    }

    fn start_glide(&mut self, target: u16, now: Instant) {
        if !self.config.is_smooth() || target == self.offset {
            self.offset = target;
            self.glide = None;
            return;
        }
        self.glide = Some(Glide {
            start: now,
            from: self.offset,
            to: target,
            duration: self.config.animation_duration(),
            easing: self.config.easing,
        });
    }

    fn clamped(&self, row: i32) -> u16 {
        row.clamp(0, i32::from(self.max_offset())) as u16
    }
}

impl Default for PageScroll {
    fn default() -> Self {
        Self::new(ScrollConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(smooth: bool) -> PageScroll {
        let mut scroll = PageScroll::new(ScrollConfig {
            smooth_enabled: smooth,
            animation_duration_ms: 100,
            ..Default::default()
        });
        scroll.set_extent(200, 40);
        scroll
    }

    #[test]
    fn test_instant_when_not_smooth() {
        let mut scroll = page(false);
        scroll.page_down();
        assert_eq!(scroll.offset(), 40);
        scroll.scroll_by(1000);
        assert_eq!(scroll.offset(), 160);
        scroll.scroll_by(-1000);
        assert_eq!(scroll.offset(), 0);
        assert!(!scroll.needs_update());
    }

    #[test]
    fn test_batched_glide() {
        let start = Instant::now();
        let mut scroll = page(true);
        scroll.line_down();
        scroll.line_down();
        scroll.half_page_down();
        assert!(scroll.needs_update());

        scroll.update(start);
        assert_eq!(scroll.target(), 22);
        assert_eq!(scroll.offset(), 0);

        let mid = scroll.update(start + Duration::from_millis(50));
        assert!(mid > 0 && mid < 22);

        assert_eq!(scroll.update(start + Duration::from_millis(100)), 22);
        assert!(!scroll.needs_update());
    }

    #[test]
    fn test_glide_to_clamps() {
        let start = Instant::now();
        let mut scroll = page(true);
        scroll.glide_to(500, start);
        assert_eq!(scroll.target(), 160);
        scroll.update(start + Duration::from_secs(1));
        assert_eq!(scroll.offset(), 160);

        scroll.top(start + Duration::from_secs(1));
        scroll.update(start + Duration::from_secs(2));
        assert_eq!(scroll.offset(), 0);
    }

    #[test]
    fn test_shrinking_extent_clamps_offset() {
        let mut scroll = page(false);
        scroll.bottom(Instant::now());
        assert_eq!(scroll.offset(), 160);
        scroll.set_extent(100, 40);
        assert_eq!(scroll.offset(), 60);
        scroll.set_extent(30, 40);
        assert_eq!(scroll.offset(), 0);
        assert_eq!(scroll.max_offset(), 0);
    }
}

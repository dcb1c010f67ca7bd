use std::time::Duration;

pub use folio_core::{EasingType, ScrollConfig};

pub trait ScrollConfigExt {
    fn animation_duration(&self) -> Duration;

    /// Frame interval while an animation is running
    fn animation_tick_duration(&self) -> Duration;

    fn is_smooth(&self) -> bool;

    /// Rows moved by a single line-scroll
    fn step_lines(&self) -> i32;
}

impl ScrollConfigExt for ScrollConfig {
    #[inline]
    fn animation_duration(&self) -> Duration {
        Duration::from_millis(self.animation_duration_ms)
    }

    #[inline]
    fn animation_tick_duration(&self) -> Duration {
        if self.animation_fps == 0 {
            Duration::from_millis(16)
        } else {
            Duration::from_millis(1000 / u64::from(self.animation_fps)).max(Duration::from_millis(1))
        }
    }

    #[inline]
    fn is_smooth(&self) -> bool {
        self.smooth_enabled && self.animation_duration_ms > 0
    }

    #[inline]
    fn step_lines(&self) -> i32 {
        i32::from(self.scroll_lines.max(1))
    }
}

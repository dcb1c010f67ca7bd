use std::time::{Duration, Instant};

use tracing::debug;

use super::state::{AdvanceState, Direction};
use crate::config::CarouselConfig;
use crate::{Error, Result};

/// Rotation controller for a fixed, non-empty list of items
///
/// Only the index is tracked; callers keep the items. All operations take
/// the current instant so time can be simulated.
#[derive(Debug, Clone)]
pub struct CarouselController {
    len: usize,
    current: usize,
    direction: Direction,
    state: AdvanceState,
    interval: Duration,
    cooldown: Duration,
    /// When the current item became visible
    shown_at: Instant,
}

impl CarouselController {
    /// Create a controller with timing from config, auto-advancing from `now`
    pub fn new(len: usize, config: &CarouselConfig, now: Instant) -> Result<Self> {
        Self::with_timing(len, config.interval(), config.cooldown(), now)
    }

    pub fn with_timing(
        len: usize,
        interval: Duration,
        cooldown: Duration,
        now: Instant,
    ) -> Result<Self> {
        if len == 0 {
            return Err(Error::EmptyCarousel);
        }
        Ok(Self {
            len,
            current: 0,
            direction: Direction::Forward,
            state: AdvanceState::Auto {
                next_tick: now + interval,
            },
            interval,
            cooldown,
            shown_at: now,
        })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always false; construction rejects empty lists
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    #[inline]
    pub fn current(&self) -> usize {
        self.current
    }

    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[inline]
    pub fn state(&self) -> AdvanceState {
        self.state
    }

    #[inline]
    pub fn is_auto(&self) -> bool {
        self.state.is_auto()
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Show the next item and start the manual cooldown
    pub fn next(&mut self, now: Instant) {
        self.step_forward(now);
        self.start_cooldown(now);
    }

    /// Show the previous item and start the manual cooldown
    pub fn previous(&mut self, now: Instant) {
        let prev = (self.current + self.len - 1) % self.len;
        self.show(prev, Direction::Backward, now);
        self.start_cooldown(now);
    }

    /// Jump to `index` and start the manual cooldown
    pub fn go_to(&mut self, index: usize, now: Instant) -> Result<()> {
        if index >= self.len {
            return Err(Error::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        let direction = if index > self.current {
            Direction::Forward
        } else {
            Direction::Backward
        };
        self.show(index, direction, now);
        self.start_cooldown(now);
        Ok(())
    }

    /// Pointer entered the carousel region
    pub fn pause(&mut self) {
        self.state = match self.state {
            AdvanceState::Auto { .. } => AdvanceState::Held {
                cooldown_until: None,
            },
            AdvanceState::Cooldown { until } => AdvanceState::Held {
                cooldown_until: Some(until),
            },
            held @ AdvanceState::Held { .. } => held,
        };
    }

    /// Pointer left the carousel region
    pub fn resume(&mut self, now: Instant) {
        if let AdvanceState::Held { cooldown_until } = self.state {
            self.state = match cooldown_until {
                Some(until) if until > now => AdvanceState::Cooldown { until },
                _ => AdvanceState::Auto {
                    next_tick: now + self.interval,
                },
            };
        }
    }

    /// Drive the timers. Returns true if the visible item changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        if let AdvanceState::Cooldown { until } = self.state {
            if now < until {
                return false;
            }
            self.state = AdvanceState::Auto {
                next_tick: until + self.interval,
            };
        }

        let AdvanceState::Auto { next_tick } = self.state else {
            return false;
        };
        if now < next_tick {
            return false;
        }

        self.step_forward(now);
        let following = next_tick + self.interval;
        self.state = AdvanceState::Auto {
            next_tick: if following > now {
                following
            } else {
                now + self.interval
            },
        };
        true
    }

    /// Fraction of the auto-advance interval the current item has been shown,
    /// clamped to [0, 1]. Drives the progress indicators.
    pub fn progress(&self, now: Instant) -> f64 {
        if self.interval.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.shown_at);
        (elapsed.as_secs_f64() / self.interval.as_secs_f64()).clamp(0.0, 1.0)
    }

    /// Time since the current item became visible
    pub fn shown_for(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.shown_at)
    }

    fn step_forward(&mut self, now: Instant) {
        let next = (self.current + 1) % self.len;
        self.show(next, Direction::Forward, now);
    }

    fn show(&mut self, index: usize, direction: Direction, now: Instant) {
        self.direction = direction;
        if index != self.current {
            self.current = index;
            self.shown_at = now;
        }
    }

    /// Replace whatever deadline is pending with a fresh cooldown
    fn start_cooldown(&mut self, now: Instant) {
        let until = now + self.cooldown;
        self.state = match self.state {
            AdvanceState::Held { .. } => AdvanceState::Held {
                cooldown_until: Some(until),
            },
            _ => AdvanceState::Cooldown { until },
        };
        debug!(index = self.current, "Carousel manual navigation");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECOND: Duration = Duration::from_secs(1);

    fn controller(len: usize, now: Instant) -> CarouselController {
        CarouselController::with_timing(len, 5 * SECOND, 5 * SECOND, now).unwrap()
    }

    #[test]
    fn test_empty_rejected() {
        let err = CarouselController::with_timing(0, SECOND, SECOND, Instant::now()).unwrap_err();
        assert!(matches!(err, Error::EmptyCarousel));
    }

    #[test]
    fn test_next_cycles_back_to_start() {
        let now = Instant::now();
        for len in 2..7 {
            let mut c = controller(len, now);
            c.go_to(len / 2, now).unwrap();
            let start = c.current();
            for _ in 0..len {
                c.next(now);
            }
            assert_eq!(c.current(), start, "len {}", len);
        }
    }

    #[test]
    fn test_previous_then_next_restores() {
        let now = Instant::now();
        let mut c = controller(4, now);
        for start in 0..4 {
            c.go_to(start, now).unwrap();
            c.previous(now);
            c.next(now);
            assert_eq!(c.current(), start);
            c.next(now);
            c.previous(now);
            assert_eq!(c.current(), start);
        }
    }

    #[test]
    fn test_previous_wraps_from_zero() {
        let now = Instant::now();
        let mut c = controller(3, now);
        c.previous(now);
        assert_eq!(c.current(), 2);
        assert_eq!(c.direction(), Direction::Backward);
    }

    #[test]
    fn test_four_projects_sequence() {
        let now = Instant::now();
        let mut c = controller(4, now);
        let mut seen = Vec::new();
        for _ in 0..4 {
            c.next(now);
            seen.push(c.current());
        }
        assert_eq!(seen, vec![1, 2, 3, 0]);
    }

    #[test]
    fn test_go_to_sets_index_and_direction() {
        let now = Instant::now();
        let mut c = controller(5, now);
        c.go_to(3, now).unwrap();
        assert_eq!(c.current(), 3);
        assert_eq!(c.direction(), Direction::Forward);
        c.go_to(1, now).unwrap();
        assert_eq!(c.current(), 1);
        assert_eq!(c.direction(), Direction::Backward);
        for k in 0..5 {
            c.go_to(k, now).unwrap();
            assert_eq!(c.current(), k);
        }
    }

    #[test]
    fn test_go_to_out_of_range() {
        let now = Instant::now();
        let mut c = controller(3, now);
        c.go_to(1, now).unwrap();
        let err = c.go_to(3, now).unwrap_err();
        assert!(matches!(err, Error::IndexOutOfRange { index: 3, len: 3 }));
        assert_eq!(c.current(), 1);
    }

    #[test]
    fn test_auto_advance_every_interval() {
        let start = Instant::now();
        let mut c = controller(3, start);

        assert!(!c.tick(start + 4 * SECOND));
        assert_eq!(c.current(), 0);

        assert!(c.tick(start + 5 * SECOND));
        assert_eq!(c.current(), 1);
        assert!(c.is_auto());

        assert!(!c.tick(start + 9 * SECOND));
        assert!(c.tick(start + 10 * SECOND));
        assert_eq!(c.current(), 2);
        assert_eq!(c.direction(), Direction::Forward);
    }

    #[test]
    fn test_manual_navigation_blocks_ticks_until_cooldown() {
        let start = Instant::now();
        let mut c = controller(4, start);

        // manual jump just before the automatic tick was due
        let jump_at = start + Duration::from_millis(4900);
        c.next(jump_at);
        assert_eq!(c.current(), 1);
        assert!(!c.is_auto());

        let mut t = jump_at;
        while t < jump_at + 5 * SECOND {
            assert!(!c.tick(t));
            assert_eq!(c.current(), 1);
            t += Duration::from_millis(100);
        }

        // cooldown over: auto-advance re-enabled, first step one interval later
        assert!(!c.tick(jump_at + 5 * SECOND));
        assert!(c.is_auto());
        assert!(c.tick(jump_at + 10 * SECOND));
        assert_eq!(c.current(), 2);
    }

    #[test]
    fn test_repeated_manual_navigation_restarts_cooldown() {
        let start = Instant::now();
        let mut c = controller(4, start);

        c.next(start);
        c.next(start + 3 * SECOND);
        assert_eq!(c.state(), AdvanceState::Cooldown { until: start + 8 * SECOND });

        // the first cooldown's deadline must not fire
        assert!(!c.tick(start + 5 * SECOND));
        assert!(!c.is_auto());
        assert!(!c.tick(start + 8 * SECOND));
        assert!(c.is_auto());
    }

    #[test]
    fn test_single_item_still_resets_cooldown() {
        let start = Instant::now();
        let mut c = controller(1, start);

        c.next(start + SECOND);
        assert_eq!(c.current(), 0);
        assert_eq!(c.state(), AdvanceState::Cooldown { until: start + 6 * SECOND });

        c.previous(start + 2 * SECOND);
        assert_eq!(c.current(), 0);
        assert_eq!(c.state(), AdvanceState::Cooldown { until: start + 7 * SECOND });
    }

    #[test]
    fn test_pause_blocks_indefinitely() {
        let start = Instant::now();
        let mut c = controller(3, start);
        c.pause();

        for hours in 0..48u64 {
            assert!(!c.tick(start + Duration::from_secs(hours * 3600)));
        }
        assert_eq!(c.current(), 0);
        assert_eq!(c.state().deadline(), None);
    }

    #[test]
    fn test_resume_ticks_on_next_interval() {
        let start = Instant::now();
        let mut c = controller(3, start);
        c.pause();

        let resumed_at = start + Duration::from_secs(600);
        c.resume(resumed_at);
        assert!(c.is_auto());
        assert!(!c.tick(resumed_at + 4 * SECOND));
        assert!(c.tick(resumed_at + 5 * SECOND));
        assert_eq!(c.current(), 1);
    }

    #[test]
    fn test_pause_and_resume_do_not_touch_index() {
        let start = Instant::now();
        let mut c = controller(3, start);
        c.go_to(2, start).unwrap();
        c.pause();
        assert_eq!(c.current(), 2);
        c.resume(start + SECOND);
        assert_eq!(c.current(), 2);
    }

    #[test]
    fn test_manual_navigation_while_held_keeps_hold() {
        let start = Instant::now();
        let mut c = controller(3, start);
        c.pause();
        c.next(start + SECOND);
        assert!(c.state().is_held());

        // leaving early keeps the remainder of the cooldown
        c.resume(start + 2 * SECOND);
        assert_eq!(c.state(), AdvanceState::Cooldown { until: start + 6 * SECOND });

        // leaving after the cooldown resumes on the next interval
        let mut c = controller(3, start);
        c.pause();
        c.next(start + SECOND);
        c.resume(start + 20 * SECOND);
        assert_eq!(c.state(), AdvanceState::Auto { next_tick: start + 25 * SECOND });
    }

    #[test]
    fn test_long_gap_advances_once() {
        let start = Instant::now();
        let mut c = controller(5, start);
        assert!(c.tick(start + Duration::from_secs(60)));
        assert_eq!(c.current(), 1);
        assert!(!c.tick(start + Duration::from_secs(61)));
    }

    #[test]
    fn test_progress() {
        let start = Instant::now();
        let mut c = controller(3, start);
        assert!((c.progress(start) - 0.0).abs() < 1e-9);
        assert!((c.progress(start + Duration::from_millis(2500)) - 0.5).abs() < 1e-9);
        assert!((c.progress(start + 9 * SECOND) - 1.0).abs() < 1e-9);

        c.next(start + 9 * SECOND);
        assert!((c.progress(start + 9 * SECOND) - 0.0).abs() < 1e-9);
    }
}

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind, MouseEvent, MouseEventKind};
use folio_core::contact::Submission;

/// Polls the terminal for input with a tick fallback
pub struct EventHandler {
    tick_rate: Duration,
    animation_tick: Duration,
}

/// Outcome of a background contact submission
#[derive(Debug)]
pub enum SubmitResult {
    Sent(Submission),
    Failed { error: String },
}

impl EventHandler {
    pub fn new(tick_rate_ms: u64) -> Self {
        Self::with_animation_fps(tick_rate_ms, 60)
    }

    pub fn with_animation_fps(tick_rate_ms: u64, fps: u32) -> Self {
        let animation_tick = if fps == 0 {
            Duration::from_millis(16)
        } else {
            Duration::from_millis(1000 / u64::from(fps)).max(Duration::from_millis(1))
        };
        Self {
            tick_rate: Duration::from_millis(tick_rate_ms.max(1)),
            animation_tick,
        }
    }

    /// Wait up to the idle tick rate
    pub fn next(&self) -> Result<Option<AppEvent>> {
        self.poll(self.tick_rate)
    }

    /// Wait up to one animation frame
    pub fn next_animation(&self) -> Result<Option<AppEvent>> {
        self.poll(self.animation_tick)
    }

    fn poll(&self, timeout: Duration) -> Result<Option<AppEvent>> {
        if !event::poll(timeout)? {
            return Ok(Some(AppEvent::Tick));
        }
        let event = match event::read()? {
            // release/repeat events are reported by some terminals
            Event::Key(key) if key.kind == KeyEventKind::Press => Some(AppEvent::Key(key)),
            Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::Moved
                | MouseEventKind::ScrollDown
                | MouseEventKind::ScrollUp
                | MouseEventKind::Down(_) => Some(AppEvent::Mouse(mouse)),
                _ => None,
            },
            Event::Resize(w, h) => Some(AppEvent::Resize(w, h)),
            _ => None,
        };
        Ok(event)
    }
}

/// Application events
#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
    Tick,
}

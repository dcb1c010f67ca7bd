use std::time::{Duration, Instant};

use crate::content::SectionId;

/// One-shot visibility latch. Once revealed it stays revealed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Reveal {
    revealed_at: Option<Instant>,
}

impl Reveal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed_at.is_some()
    }

    pub fn revealed_at(&self) -> Option<Instant> {
        self.revealed_at
    }

    /// Feed the current visibility. Returns true only on the transition.
    pub fn observe(&mut self, visible: bool, now: Instant) -> bool {
        if visible && self.revealed_at.is_none() {
            self.revealed_at = Some(now);
            return true;
        }
        false
    }

    /// Time since the reveal, `None` while still hidden
    pub fn elapsed(&self, now: Instant) -> Option<Duration> {
        self.revealed_at
            .map(|at| now.saturating_duration_since(at))
    }
}

/// A reveal latch per page section
#[derive(Debug, Clone, Default)]
pub struct RevealSet {
    latches: [Reveal; SectionId::ALL.len()],
}

impl RevealSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: SectionId) -> Reveal {
        self.latches[id.index()]
    }

    pub fn observe(&mut self, id: SectionId, visible: bool, now: Instant) -> bool {
        let fired = self.latches[id.index()].observe(visible, now);
        if fired {
            tracing::debug!(section = %id, "Section revealed");
        }
        fired
    }
}

use std::time::Instant;

/// Which way the last transition went; picks the enter/exit animation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

impl Direction {
    /// +1 for forward, -1 for backward
    pub fn sign(self) -> i32 {
        match self {
            Direction::Forward => 1,
            Direction::Backward => -1,
        }
    }
}

/// Automatic-advance state. At most one deadline can fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceState {
    /// Advancing on its own; the next automatic step is due at `next_tick`
    Auto { next_tick: Instant },
    /// Suspended by manual navigation; auto-advance is re-enabled at `until`
    Cooldown { until: Instant },
    /// Held by the pointer. Nothing fires until `resume`. A cooldown started
    /// while held is remembered so resuming early does not cut it short.
    Held { cooldown_until: Option<Instant> },
}

impl AdvanceState {
    pub fn is_auto(&self) -> bool {
        matches!(self, AdvanceState::Auto { .. })
    }

    pub fn is_held(&self) -> bool {
        matches!(self, AdvanceState::Held { .. })
    }

    /// The pending deadline that `tick` acts on, if any
    pub fn deadline(&self) -> Option<Instant> {
        match *self {
            AdvanceState::Auto { next_tick } => Some(next_tick),
            AdvanceState::Cooldown { until } => Some(until),
            AdvanceState::Held { .. } => None,
        }
    }
}

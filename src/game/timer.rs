/// Per-question countdown
///
/// Driven by the session's virtual clock: the countdown only records when its
/// next tick is due and how many seconds remain.
use std::time::Duration;

pub const TICK: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    remaining: u32,
    next_tick_at: Duration,
}

impl Countdown {
    /// Start a countdown of `seconds` at virtual time `now`
    pub fn start(now: Duration, seconds: u32) -> Self {
        Self {
            remaining: seconds,
            next_tick_at: now + TICK,
        }
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn next_tick_at(&self) -> Duration {
        self.next_tick_at
    }

    /// Consume one tick, returns the seconds left
    pub fn tick(&mut self) -> u32 {
        self.remaining = self.remaining.saturating_sub(1);
        self.next_tick_at += TICK;
        self.remaining
    }
}

/// Deferred continuations
///
/// "Show a message, then advance the turn" is modelled as a continuation due
/// at a virtual time. Every continuation records the turn generation it was
/// scheduled in; bumping the generation turns all older ones into no-ops.
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Continuation {
    /// Clear the message and hand the board to the other player
    AdvanceTurn { reshuffle: bool },
}

/// Outcome of popping a due entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fired {
    Live(Continuation),
    /// Scheduled before the last generation bump
    Stale,
}

#[derive(Debug, Clone, Copy)]
struct Pending {
    due_at: Duration,
    generation: u64,
    continuation: Continuation,
}

#[derive(Debug, Default)]
pub struct Scheduler {
    pending: Vec<Pending>,
    generation: u64,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Invalidate every continuation scheduled so far
    pub fn bump(&mut self) {
        self.generation += 1;
    }

    pub fn schedule(&mut self, due_at: Duration, continuation: Continuation) {
        self.pending.push(Pending {
            due_at,
            generation: self.generation,
            continuation,
        });
    }

    /// Earliest due time among pending entries, stale ones included
    pub fn next_due(&self) -> Option<Duration> {
        self.pending.iter().map(|p| p.due_at).min()
    }

    /// Remove the earliest entry due at or before `now`
    pub fn pop_due(&mut self, now: Duration) -> Option<Fired> {
        let index = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, p)| p.due_at <= now)
            .min_by_key(|(_, p)| p.due_at)
            .map(|(i, _)| i)?;

        let entry = self.pending.remove(index);
        if entry.generation == self.generation {
            Some(Fired::Live(entry.continuation))
        } else {
            tracing::debug!(
                "Dropping stale continuation from generation {} (now {})",
                entry.generation,
                self.generation
            );
            Some(Fired::Stale)
        }
    }
}

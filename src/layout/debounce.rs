/// Trailing-edge debounce over a caller-supplied clock.
///
/// Each [`Debounce::trigger`] re-arms the deadline `quiet` time units ahead,
/// so a burst of events collapses to a single fire after the burst goes
/// quiet. Latest-wins: intermediate events are dropped, never queued.
#[derive(Clone, Copy, Debug)]
pub struct Debounce {
    quiet: f64,
    deadline: Option<f64>,
}

impl Debounce {
    /// Create a debounce with the given quiet period.
    pub fn new(quiet: f64) -> Self {
        Self {
            quiet,
            deadline: None,
        }
    }

    /// Record an event at time `now`, re-arming the deadline.
    pub fn trigger(&mut self, now: f64) {
        self.deadline = Some(now + self.quiet);
    }

    /// Poll at time `now`; returns true exactly once per armed deadline.
    pub fn fire(&mut self, now: f64) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Drop any pending deadline (used when a recompute happens immediately).
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Whether a deadline is armed.
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/debounce.rs"]
mod tests;

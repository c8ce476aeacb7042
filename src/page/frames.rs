/// Progress gained per unit of tick time.
const PROGRESS_RATE: f64 = 0.1;
/// Progress value at which a transition completes.
const PROGRESS_CAP: f64 = 2.0;
/// Progress value at which visibility flips from outgoing to incoming.
const MIDPOINT: f64 = 1.0;

#[derive(Clone, Copy, Debug, PartialEq)]
enum CycleState {
    Idle { current: usize },
    Transitioning { current: usize, target: usize, elapsed: f64 },
}

/// Per-tick output of a running frame transition.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameMotion {
    /// Frame the transition started from.
    pub outgoing: usize,
    /// Frame the transition is heading to.
    pub incoming: usize,
    /// Whether progress has passed the midpoint (incoming frame shown).
    pub incoming_visible: bool,
    /// Shrink/grow scale for the frame container: `|progress - midpoint|`.
    pub container_scale: f64,
    /// Whether the transition finished this tick.
    pub completed: bool,
}

/// State machine cycling a page's frames with a directional transition.
///
/// At rest exactly one frame is visible. During a transition visibility
/// flips exactly once, at the midpoint, so the outgoing and incoming frames
/// are never shown together. Requests during a transition are dropped, which
/// keeps rapid clicking glitch-free.
#[derive(Clone, Copy, Debug)]
pub struct FrameCycle {
    state: CycleState,
    frame_count: usize,
}

impl FrameCycle {
    /// Cycle over `frame_count` frames, starting at frame 0.
    pub fn new(frame_count: usize) -> Self {
        Self {
            state: CycleState::Idle { current: 0 },
            frame_count,
        }
    }

    /// Number of frames cycled over.
    pub fn frame_count(&self) -> usize {
        self.frame_count
    }

    /// Frame the cycle rests on (or started the current transition from).
    pub fn current(&self) -> usize {
        match self.state {
            CycleState::Idle { current } | CycleState::Transitioning { current, .. } => current,
        }
    }

    /// Frame that should be visible right now.
    pub fn visible_index(&self) -> usize {
        match self.state {
            CycleState::Idle { current } => current,
            CycleState::Transitioning {
                current,
                target,
                elapsed,
            } => {
                if elapsed * PROGRESS_RATE >= MIDPOINT {
                    target
                } else {
                    current
                }
            }
        }
    }

    /// Whether a transition is in flight.
    pub fn is_transitioning(&self) -> bool {
        matches!(self.state, CycleState::Transitioning { .. })
    }

    /// Start a transition `offset` frames away (negative wraps backward).
    ///
    /// No-op while a transition is running or with fewer than two frames;
    /// returns whether the request was accepted.
    pub fn request_advance(&mut self, offset: i64) -> bool {
        if self.frame_count <= 1 || self.is_transitioning() {
            return false;
        }
        let current = self.current();
        let target =
            (current as i64 + offset).rem_euclid(self.frame_count as i64) as usize;
        self.state = CycleState::Transitioning {
            current,
            target,
            elapsed: 0.0,
        };
        true
    }

    /// Advance a running transition; `None` while idle.
    pub fn tick(&mut self, dt: f64) -> Option<FrameMotion> {
        let CycleState::Transitioning {
            current,
            target,
            elapsed,
        } = &mut self.state
        else {
            return None;
        };

        *elapsed += dt;
        let progress = (*elapsed * PROGRESS_RATE).min(PROGRESS_CAP);
        let motion = FrameMotion {
            outgoing: *current,
            incoming: *target,
            incoming_visible: progress >= MIDPOINT,
            container_scale: (progress - MIDPOINT).abs(),
            completed: progress >= PROGRESS_CAP,
        };

        if motion.completed {
            self.state = CycleState::Idle {
                current: motion.incoming,
            };
        }
        Some(motion)
    }

    /// Force the cycle back to `Idle(0)`, dropping any transition.
    pub fn reset(&mut self) {
        self.state = CycleState::Idle { current: 0 };
    }
}

#[cfg(test)]
#[path = "../../tests/unit/page/frames.rs"]
mod tests;

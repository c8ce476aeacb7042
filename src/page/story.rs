use crate::foundation::core::INV_PHI;

/// Fraction of the dwell spent ramping alpha in (and, mirrored, out).
pub const FADE_FRACTION: f64 = 1.0 - INV_PHI;

/// State machine rotating through a story frame's content slides.
///
/// Slides advance automatically when the dwell elapses, carrying the time
/// remainder into the next slide so drift never accumulates, or immediately
/// on a user click. Alpha ramps in, holds, and ramps out symmetrically
/// around golden-ratio boundaries.
#[derive(Clone, Copy, Debug)]
pub struct StoryRotator {
    slide_count: usize,
    duration: f64,
    index: usize,
    elapsed: f64,
}

impl StoryRotator {
    /// Rotate over `slide_count` slides with the given per-slide dwell.
    ///
    /// The slide sequence is fixed and non-empty by construction.
    pub fn new(slide_count: usize, duration: f64) -> Self {
        debug_assert!(slide_count > 0);
        debug_assert!(duration > 0.0);
        Self {
            slide_count: slide_count.max(1),
            duration,
            index: 0,
            elapsed: 0.0,
        }
    }

    /// Number of slides.
    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    /// Currently displayed slide.
    pub fn current_index(&self) -> usize {
        self.index
    }

    /// Time spent on the current slide, always in `[0, duration)`.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Advance dwell time; wraps (not resets) past the duration, moving to
    /// the next slide. Returns whether an automatic advance happened.
    pub fn tick(&mut self, dt: f64) -> bool {
        self.elapsed += dt;
        if self.elapsed >= self.duration {
            self.elapsed %= self.duration;
            self.index = (self.index + 1) % self.slide_count;
            return true;
        }
        false
    }

    /// Skip to the next slide now, restarting the dwell from zero.
    pub fn advance_by_user(&mut self) {
        self.index = (self.index + 1) % self.slide_count;
        self.elapsed = 0.0;
    }

    /// Alpha of the active slide: ramps 0→1 over the first fade fraction,
    /// holds at 1, then ramps 1→0 over the last.
    pub fn current_alpha(&self) -> f64 {
        let f = self.elapsed / self.duration;
        if f < FADE_FRACTION {
            f / FADE_FRACTION
        } else if f > 1.0 - FADE_FRACTION {
            (1.0 - f) / FADE_FRACTION
        } else {
            1.0
        }
    }

    /// Back to slide 0 with a fresh dwell.
    pub fn reset(&mut self) {
        self.index = 0;
        self.elapsed = 0.0;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/page/story.rs"]
mod tests;

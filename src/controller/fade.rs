/// Fade progress gained per unit of tick time.
const FADE_RATE: f64 = 0.025;

#[derive(Clone, Debug, PartialEq)]
enum FadePhase {
    /// Overlay rising toward opaque; the swap happens when this leg wraps.
    FadingOut { target: String },
    /// Overlay falling back toward transparent over the swapped-in page.
    FadingIn,
}

/// Per-tick output of an active fade.
#[derive(Clone, Debug, PartialEq)]
pub struct FadeFrame {
    /// Overlay alpha for this tick, always in `[0, 1]`.
    pub overlay_alpha: f64,
    /// Page to swap in this tick, if the fade-out leg just completed.
    pub swap_to: Option<String>,
    /// Whether the whole fade finished this tick (overlay can hide).
    pub finished: bool,
}

/// The cross-page fade transition: a two-leg opacity animation masking the
/// page swap at its midpoint.
///
/// At most one fade is in flight. A new request while fading out retargets
/// the pending page without restarting progress, so the overlay keeps its
/// current opacity and the most recently requested page is what fades in —
/// last request wins, with no visual pop.
#[derive(Clone, Debug, Default)]
pub struct FadeTransition {
    state: Option<(FadePhase, f64)>,
}

impl FadeTransition {
    /// No fade in flight.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request a fade toward `target` given the currently displayed page.
    ///
    /// Already fading out: only the target is replaced. Target is already
    /// displayed: the overlay reveals it (fade-in leg only). Otherwise a
    /// fresh fade-out starts from transparent.
    pub fn begin(&mut self, target: &str, current: Option<&str>) {
        match &mut self.state {
            Some((FadePhase::FadingOut { target: pending }, _)) => {
                *pending = target.to_string();
            }
            _ if current == Some(target) => self.begin_reveal(),
            _ => {
                self.state = Some((
                    FadePhase::FadingOut {
                        target: target.to_string(),
                    },
                    0.0,
                ));
            }
        }
    }

    /// Start from an opaque overlay and reveal the current page. Used on
    /// first display, where there is nothing to fade out.
    pub fn begin_reveal(&mut self) {
        self.state = Some((FadePhase::FadingIn, 0.0));
    }

    /// Whether a fade is in flight.
    pub fn is_active(&self) -> bool {
        self.state.is_some()
    }

    /// Page the fade-out leg is heading to, if in that leg.
    pub fn pending_target(&self) -> Option<&str> {
        match &self.state {
            Some((FadePhase::FadingOut { target }, _)) => Some(target),
            _ => None,
        }
    }

    /// Advance the fade; `None` while inactive.
    pub fn tick(&mut self, dt: f64) -> Option<FadeFrame> {
        let (phase, progress) = self.state.as_mut()?;

        // Alpha from pre-increment progress, so each leg starts exactly at
        // its endpoint value.
        let overlay_alpha = match phase {
            FadePhase::FadingOut { .. } => *progress,
            FadePhase::FadingIn => 1.0 - *progress,
        };

        *progress += FADE_RATE * dt;

        let mut frame = FadeFrame {
            overlay_alpha,
            swap_to: None,
            finished: false,
        };

        if *progress >= 1.0 {
            *progress %= 1.0;
            match phase {
                FadePhase::FadingOut { target } => {
                    frame.swap_to = Some(std::mem::take(target));
                    *phase = FadePhase::FadingIn;
                }
                FadePhase::FadingIn => {
                    frame.finished = true;
                    self.state = None;
                }
            }
        }

        Some(frame)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/controller/fade.rs"]
mod tests;

/// A decaying emphasis multiplier.
///
/// Interactions bump the value; every tick it decays geometrically toward
/// zero with a dt-scaled factor, so the boost fades at the same speed
/// regardless of display refresh rate. Consumers read [`Accelerator::gain`]
/// as a rate multiplier for that tick.
#[derive(Clone, Copy, Debug)]
pub struct Accelerator {
    value: f64,
    base_factor: f64,
    dt_rate: f64,
}

impl Accelerator {
    /// Create an accelerator with a per-tick decay `base_factor - dt_rate * dt`.
    pub fn new(base_factor: f64, dt_rate: f64) -> Self {
        Self {
            value: 0.0,
            base_factor,
            dt_rate,
        }
    }

    /// Set the boost amount, replacing any remaining boost.
    pub fn bump(&mut self, amount: f64) {
        self.value = amount;
    }

    /// Decay the boost toward zero; the factor never goes negative.
    pub fn decay(&mut self, dt: f64) {
        let factor = (self.base_factor - self.dt_rate * dt).max(0.0);
        self.value *= factor;
    }

    /// Current raw boost value.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Rate multiplier for this tick: `1 + value`.
    pub fn gain(&self) -> f64 {
        1.0 + self.value
    }
}

/// Named visual emphases driven by user interaction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Emphasis {
    /// Title flash on title clicks.
    Title,
    /// Glow effect pulse.
    Glow,
    /// Slogan flash on slogan clicks.
    Slogan,
}

impl Emphasis {
    /// All emphases, in oscillator-pairing order.
    pub const ALL: [Emphasis; 3] = [Emphasis::Title, Emphasis::Glow, Emphasis::Slogan];

    /// Index of the oscillator this emphasis accelerates.
    pub fn oscillator_index(self) -> usize {
        match self {
            Emphasis::Title => 0,
            Emphasis::Glow => 1,
            Emphasis::Slogan => 2,
        }
    }
}

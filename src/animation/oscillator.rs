use crate::foundation::core::{Rgb, wrap_phase};

/// Per-channel angular velocity in phase units per time unit.
#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
pub struct ChannelSpec {
    /// Phase advance per unit of scaled tick time.
    pub velocity: f64,
}

#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
/// Configuration of one color oscillator: three channels over a shared period.
pub struct OscillatorSpec {
    /// Red channel velocity.
    pub r: ChannelSpec,
    /// Green channel velocity.
    pub g: ChannelSpec,
    /// Blue channel velocity.
    pub b: ChannelSpec,
    /// Period length; phases always stay in `[0, period)`.
    pub period: f64,
}

impl OscillatorSpec {
    /// Spec with the given channel velocities and the default period of 8.
    pub fn with_velocities(r: f64, g: f64, b: f64) -> Self {
        Self {
            r: ChannelSpec { velocity: r },
            g: ChannelSpec { velocity: g },
            b: ChannelSpec { velocity: b },
            period: 8.0,
        }
    }
}

/// A smoothly cycling color source.
///
/// Three independent phase accumulators (one per channel) advance at their
/// configured velocities and map through offset sinusoids, so the channels
/// drift in and out of alignment without ever being simultaneously equal.
/// Sampling is a pure function of accumulated phase.
#[derive(Clone, Debug)]
pub struct ColorOscillator {
    spec: OscillatorSpec,
    phases: [f64; 3],
}

impl ColorOscillator {
    /// Create an oscillator with channels staggered a third of a period apart.
    pub fn new(spec: OscillatorSpec) -> Self {
        let third = spec.period / 3.0;
        Self {
            spec,
            phases: [0.0, third, 2.0 * third],
        }
    }

    /// Advance every channel phase by `dt * velocity`, wrapped into the period.
    pub fn advance(&mut self, dt: f64) {
        let period = self.spec.period;
        let velocities = [
            self.spec.r.velocity,
            self.spec.g.velocity,
            self.spec.b.velocity,
        ];
        for (phase, velocity) in self.phases.iter_mut().zip(velocities) {
            *phase = wrap_phase(*phase + dt * velocity, period);
        }
    }

    /// Current phase of a channel, always in `[0, period)`.
    pub fn phase(&self, channel: usize) -> f64 {
        self.phases[channel]
    }

    /// Sample the current color.
    pub fn sample(&self) -> Rgb {
        let channel = |phase: f64| -> u8 {
            let angle = std::f64::consts::TAU * phase / self.spec.period;
            let unit = 0.5 + 0.5 * angle.sin();
            (unit * 255.0).round() as u8
        };
        Rgb::new(
            channel(self.phases[0]),
            channel(self.phases[1]),
            channel(self.phases[2]),
        )
    }

    /// Sample packed as `0xRRGGBB`, the form tint parameters take.
    pub fn sample_packed(&self) -> u32 {
        self.sample().packed()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/oscillator.rs"]
mod tests;

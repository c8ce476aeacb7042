use kurbo::Point;

use crate::foundation::core::Rng64;

const TAU: f64 = std::f64::consts::TAU;

/// Reference screen width the element scales are tuned against.
const REFERENCE_WIDTH: f64 = 1920.0;

/// Declarative configuration of the ambient background layer.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct AmbientSpec {
    /// Texture key for drifting elements (e.g. clouds).
    pub drifter_texture: String,
    /// Number of drifting elements.
    pub drifter_count: usize,
    /// Texture keys cycled across fluttering elements (e.g. leaves).
    pub flutter_textures: Vec<String>,
    /// Number of fluttering elements.
    pub flutter_count: usize,
    /// Texture key for the ground strip.
    pub ground_texture: String,
}

impl Default for AmbientSpec {
    fn default() -> Self {
        Self {
            drifter_texture: "cloud1".to_string(),
            drifter_count: 8,
            flutter_textures: vec![
                "leaf1".to_string(),
                "leaf2".to_string(),
                "leaf3".to_string(),
                "leaf4".to_string(),
            ],
            flutter_count: 8,
            ground_texture: "ground".to_string(),
        }
    }
}

/// An element drifting steadily across the screen with a vertical bob.
#[derive(Clone, Debug)]
pub struct Drifter {
    /// Current position.
    pub pos: Point,
    /// Uniform render scale.
    pub scale: f64,
    base_y: f64,
    velocity: f64,
    width: f64,
    index: usize,
}

/// An element fluttering down-wind: sine-modulated drift, bob and spin.
#[derive(Clone, Debug)]
pub struct Flutter {
    /// Current position.
    pub pos: Point,
    /// Current rotation in radians.
    pub rotation: f64,
    /// Uniform render scale.
    pub scale: f64,
    elapsed: f64,
    vx: f64,
    y_speed: f64,
    y_diff: f64,
    base_y: f64,
    width: f64,
}

/// Continuous background motion sampled once per controller tick.
///
/// Placement is randomized at (re)seed time from a deterministic generator,
/// so a given seed and screen size always produce the same field.
#[derive(Clone, Debug, Default)]
pub struct AmbientField {
    drifters: Vec<Drifter>,
    flutters: Vec<Flutter>,
}

impl AmbientField {
    /// Place all elements for the given screen size.
    ///
    /// `drifter_width` and `flutter_widths` are unscaled texture widths; the
    /// per-element on-screen width used for wraparound is derived from them.
    pub fn seed(
        &mut self,
        spec: &AmbientSpec,
        screen_width: f64,
        screen_height: f64,
        drifter_width: f64,
        flutter_widths: &[f64],
        rng: &mut Rng64,
    ) {
        let drifter_scale = (screen_width / REFERENCE_WIDTH).powf(0.75);
        self.drifters = (0..spec.drifter_count)
            .map(|i| {
                let count = spec.drifter_count.max(1) as f64;
                let x = i as f64 * 2.0 * screen_width / count + rng.next_f64(10.0);
                let y = (i as f64 * screen_height / count) % (screen_height / 5.0)
                    + rng.next_f64(10.0);
                Drifter {
                    pos: Point::new(x, y),
                    scale: drifter_scale,
                    base_y: y,
                    velocity: 0.5 * (i as f64 / 4.0 + 1.0 + rng.next_f64_01()) * drifter_scale,
                    width: drifter_width * drifter_scale,
                    index: i,
                }
            })
            .collect();

        let flutter_scale = 0.5 * (screen_width / REFERENCE_WIDTH).sqrt();
        let center_x = screen_width / 2.0;
        self.flutters = (0..spec.flutter_count)
            .map(|i| {
                let base_y = rng.next_f64(screen_height / 8.0) + 7.0 * screen_height / 8.0;
                let width = if flutter_widths.is_empty() {
                    0.0
                } else {
                    flutter_widths[i % flutter_widths.len()] * flutter_scale
                };
                Flutter {
                    pos: Point::new(rng.next_f64(3.0 * center_x) - center_x, base_y),
                    rotation: rng.next_f64(TAU),
                    scale: flutter_scale,
                    elapsed: rng.next_f64(15.0),
                    vx: -(rng.next_f64_01() + 0.5),
                    y_speed: rng.next_f64(0.25) + 0.25,
                    y_diff: rng.next_f64(screen_height / 8.0) + 4.0,
                    base_y,
                    width,
                }
            })
            .collect();
    }

    /// Advance all elements by one tick.
    pub fn tick(&mut self, dt: f64, total_time: f64, screen_width: f64, screen_height: f64) {
        for drifter in &mut self.drifters {
            drifter.pos.x -= drifter.velocity * dt;
            drifter.pos.y = drifter.base_y
                + (drifter.index as f64 + total_time / 100.0).sin() * screen_height / 20.0
                    * drifter.scale;
            if drifter.pos.x + drifter.width / 2.0 <= 0.0 {
                drifter.pos.x += screen_width + drifter.width;
            }
        }

        for flutter in &mut self.flutters {
            flutter.elapsed += dt / 100.0;
            flutter.pos.x += flutter.vx * (flutter.elapsed.sin() / 8.0 + 7.0 / 8.0);
            if flutter.pos.x + flutter.width / 2.0 < 0.0 {
                flutter.pos.x = screen_width + flutter.width;
            }
            flutter.pos.y =
                (flutter.base_y + (flutter.elapsed * flutter.y_speed).sin() * flutter.y_diff)
                    .floor();
            let spin = flutter.elapsed.sin() / 40.0;
            flutter.rotation = (flutter.rotation + spin) % TAU;
        }
    }

    /// Drifting elements in placement order.
    pub fn drifters(&self) -> &[Drifter] {
        &self.drifters
    }

    /// Fluttering elements in placement order.
    pub fn flutters(&self) -> &[Flutter] {
        &self.flutters
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ambient.rs"]
mod tests;

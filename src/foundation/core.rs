pub use kurbo::{Point, Vec2};

/// Reciprocal golden ratio, used for fade boundaries and vertical anchors.
pub const INV_PHI: f64 = 0.618_033_988_749_894_8;

/// Straight (non-premultiplied) 8-bit RGB color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Build a color from individual channels.
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Pack into `0xRRGGBB` form as consumed by tint/effect parameters.
    pub fn packed(self) -> u32 {
        (u32::from(self.r) << 16) | (u32::from(self.g) << 8) | u32::from(self.b)
    }

    /// Unpack from `0xRRGGBB` form.
    pub fn from_packed(raw: u32) -> Self {
        Self {
            r: ((raw >> 16) & 0xff) as u8,
            g: ((raw >> 8) & 0xff) as u8,
            b: (raw & 0xff) as u8,
        }
    }
}

/// Wrap `value` into `[0, period)` for phase accumulators.
pub fn wrap_phase(value: f64, period: f64) -> f64 {
    let wrapped = value % period;
    if wrapped < 0.0 { wrapped + period } else { wrapped }
}

#[derive(Clone, Copy, Debug)]
/// Small deterministic RNG (SplitMix64) used for ambient placement.
pub struct Rng64 {
    state: u64,
}

impl Rng64 {
    /// Seed the generator.
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Next raw 64-bit value.
    pub fn next_u64(&mut self) -> u64 {
        // SplitMix64
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    /// Next value uniform in `[0, 1)`.
    pub fn next_f64_01(&mut self) -> f64 {
        // 53 bits of precision.
        let v = self.next_u64() >> 11;
        (v as f64) * (1.0 / ((1u64 << 53) as f64))
    }

    /// Next value uniform in `[0, max)`.
    pub fn next_f64(&mut self, max: f64) -> f64 {
        self.next_f64_01() * max
    }
}

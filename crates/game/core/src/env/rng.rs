//! RNG oracle for deterministic random draws.
//!
//! Handlers never own random state. Each draw derives a seed from the level
//! seed, the tick counter, the snake id, and a per-purpose context value, so a
//! tick replayed with the same inputs makes the same choices.

/// RNG oracle for deterministic random number generation.
///
/// Implementations must produce the same value for the same seed.
pub trait RngOracle: Send + Sync {
    /// Generate a random u32 value from a seed.
    fn next_u32(&self, seed: u64) -> u32;

    /// Uniform float in `[0, 1)`.
    fn unit(&self, seed: u64) -> f32 {
        // 24 bits keep the value exactly representable as f32.
        (self.next_u32(seed) >> 8) as f32 / (1u32 << 24) as f32
    }

    /// Uniform float in `[min, max)`.
    fn range_f32(&self, seed: u64, min: f32, max: f32) -> f32 {
        if min >= max {
            return min;
        }
        min + (max - min) * self.unit(seed)
    }

    /// Index into a collection of `len` items; `0` for empty collections.
    fn pick(&self, seed: u64, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.next_u32(seed) as usize % len
    }
}

/// PCG random number generator (PCG-XSH-RR, 64-bit state, 32-bit output).
///
/// Stateless from the caller's point of view: the seed is the state.
#[derive(Clone, Copy, Debug, Default)]
pub struct PcgRng;

impl PcgRng {
    const MULTIPLIER: u64 = 6364136223846793005;
    const INCREMENT: u64 = 1442695040888963407;

    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&self, seed: u64) -> u32 {
        Self::pcg_output(Self::pcg_step(seed))
    }
}

/// Purpose tags mixed into [`compute_seed`] so independent draws made by the
/// same snake in the same tick do not share a seed.
pub mod roll {
    pub const WANDER_X: u32 = 1;
    pub const WANDER_Y: u32 = 2;
    pub const BOUNCE_DIRECTION: u32 = 3;
    pub const PIPE_EXIT: u32 = 4;
    pub const ROTATION_TILE: u32 = 5;
    pub const ROTATION_DELAY: u32 = 6;
}

/// Compute a deterministic seed for one random draw.
///
/// * `level_seed` - fixed when the level is loaded
/// * `tick` - frame counter supplied by the host
/// * `snake` - raw id of the snake making the draw
/// * `context` - one of the [`roll`] tags
pub fn compute_seed(level_seed: u64, tick: u64, snake: u32, context: u32) -> u64 {
    // SplitMix64 / FxHash style mixing constants.
    let mut hash = level_seed;
    hash ^= tick.wrapping_mul(0x9e3779b97f4a7c15);
    hash ^= (snake as u64).wrapping_mul(0x517cc1b727220a95);
    hash ^= (context as u64).wrapping_mul(0x85ebca6b);

    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;

    hash
}

#![forbid(unsafe_code)]

//! Dataset generation.
//!
//! Datasets come from a small seeded LCG rather than a crate dependency: the
//! engine needs reproducible classroom datasets, not cryptographic quality.
//! Seeded engines replay the same dataset sequence run after run; unseeded
//! engines derive their seed from the clock.

/// Deterministic pseudo-random generator for dataset values.
pub struct SeededRng {
    state: u64,
}

impl SeededRng {
    /// Generator with a fixed seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            state: seed.wrapping_add(1),
        }
    }

    /// Generator seeded from the system clock.
    #[must_use]
    pub fn from_entropy() -> Self {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0x5eed);
        Self::new(nanos)
    }

    /// Next raw draw.
    pub fn next_u64(&mut self) -> u64 {
        // LCG parameters from Numerical Recipes
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.state
    }

    /// Uniform draw from `[min, max]`, both ends inclusive.
    ///
    /// Degenerate bounds (`max <= min`) return `min`.
    pub fn value_between(&mut self, min: i32, max: i32) -> i32 {
        if max <= min {
            return min;
        }
        let span = (i64::from(max) - i64::from(min)) as u64 + 1;
        let offset = self.next_u64() % span;
        (i64::from(min) + offset as i64) as i32
    }
}

/// Draw `len` values uniformly from `[min, max]`.
pub fn draw_values(rng: &mut SeededRng, len: usize, min: i32, max: i32) -> Vec<i32> {
    (0..len).map(|_| rng.value_between(min, max)).collect()
}

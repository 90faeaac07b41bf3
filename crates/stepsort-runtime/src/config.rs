#![forbid(unsafe_code)]

//! Engine configuration.

use std::time::Duration;

/// Tunables for an [`Engine`](crate::engine::Engine).
///
/// Invalid combinations never fail construction: [`EngineConfig::normalized`]
/// repairs them (inverted bounds swap, a zero minimum size is raised to 1)
/// so the engine always starts from a usable configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EngineConfig {
    /// Initial pacing delay between steps. Zero means unpaced.
    pub speed: Duration,
    /// Smallest dataset `generate` will produce.
    pub min_size: usize,
    /// Largest dataset `generate` will produce.
    pub max_size: usize,
    /// Lower bound (inclusive) for generated values.
    pub min_value: i32,
    /// Upper bound (inclusive) for generated values.
    pub max_value: i32,
    /// Seed for reproducible datasets. `None` draws entropy from the clock.
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            speed: Duration::from_millis(100),
            min_size: 2,
            max_size: 256,
            min_value: 5,
            max_value: 500,
            seed: None,
        }
    }
}

impl EngineConfig {
    /// Default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial pacing delay.
    #[must_use]
    pub fn with_speed(mut self, speed: Duration) -> Self {
        self.speed = speed;
        self
    }

    /// Set the dataset size bounds.
    #[must_use]
    pub fn with_size_bounds(mut self, min: usize, max: usize) -> Self {
        self.min_size = min;
        self.max_size = max;
        self
    }

    /// Set the generated value bounds (inclusive).
    #[must_use]
    pub fn with_value_bounds(mut self, min: i32, max: i32) -> Self {
        self.min_value = min;
        self.max_value = max;
        self
    }

    /// Seed the dataset generator for reproducible runs.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Repair invalid combinations instead of failing.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        if self.min_size == 0 {
            self.min_size = 1;
        }
        if self.max_size < self.min_size {
            std::mem::swap(&mut self.min_size, &mut self.max_size);
            if self.min_size == 0 {
                self.min_size = 1;
            }
        }
        if self.max_value < self.min_value {
            std::mem::swap(&mut self.min_value, &mut self.max_value);
        }
        self
    }

    /// Clamp a requested dataset size into the configured bounds.
    #[must_use]
    pub fn clamp_size(&self, requested: usize) -> usize {
        requested.clamp(self.min_size, self.max_size)
    }
}

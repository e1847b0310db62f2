//! Randomness sources for the simulation
//!
//! The machine never touches a global generator. Play uses a seeded PCG
//! stream; tests script the exact draws they need.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Source of uniform draws in `[0, 1)`
pub trait RandomSource {
    fn next_unit(&mut self) -> f32;
}

/// Seeded PCG stream (reproducible for a given seed)
#[derive(Debug, Clone)]
pub struct SeededRandom {
    seed: u64,
    rng: Pcg32,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for SeededRandom {
    fn next_unit(&mut self) -> f32 {
        self.rng.random::<f32>()
    }
}

/// Replays a fixed list of draws, cycling when exhausted
///
/// An empty script always yields `0.0`.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandom {
    draws: Vec<f32>,
    cursor: usize,
}

impl ScriptedRandom {
    pub fn new(draws: Vec<f32>) -> Self {
        Self { draws, cursor: 0 }
    }

    /// Every draw returns `value`
    pub fn constant(value: f32) -> Self {
        Self::new(vec![value])
    }

    /// Number of draws taken so far
    pub fn draws_taken(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedRandom {
    fn next_unit(&mut self) -> f32 {
        if self.draws.is_empty() {
            self.cursor += 1;
            return 0.0;
        }
        let value = self.draws[self.cursor % self.draws.len()];
        self.cursor += 1;
        value
    }
}

//! Injectable randomness for the outcome models.
//!
//! Every draw the engine makes goes through [`MatchRng`], so a match can be
//! replayed from its seed or driven by a scripted sequence in tests.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal};

pub trait MatchRng: Send {
    /// Uniform draw in `[0, 1)`.
    fn next_f32(&mut self) -> f32;

    /// Uniform index in `0..len`. `len` must be non-zero.
    fn pick(&mut self, len: usize) -> usize {
        let idx = (self.next_f32() * len as f32) as usize;
        idx.min(len.saturating_sub(1))
    }

    fn range_f32(&mut self, lo: f32, hi: f32) -> f32 {
        lo + (hi - lo) * self.next_f32()
    }

    fn chance(&mut self, p: f32) -> bool {
        self.next_f32() < p
    }

    /// Gaussian sample. Sources without a distribution return the mean.
    fn normal(&mut self, mean: f32, _std_dev: f32) -> f32 {
        mean
    }
}

/// ChaCha8 generator; the same seed reproduces the same match.
#[derive(Debug, Clone)]
pub struct SeededRng {
    inner: ChaCha8Rng,
}

impl SeededRng {
    pub fn new(seed: u64) -> Self {
        Self { inner: ChaCha8Rng::seed_from_u64(seed) }
    }
}

impl MatchRng for SeededRng {
    fn next_f32(&mut self) -> f32 {
        self.inner.gen::<f32>()
    }

    fn normal(&mut self, mean: f32, std_dev: f32) -> f32 {
        match Normal::new(mean, std_dev) {
            Ok(dist) if std_dev > 0.0 => dist.sample(&mut self.inner),
            _ => mean,
        }
    }
}

/// Cycles over a fixed list of draws.
#[derive(Debug, Clone)]
pub struct ScriptedRng {
    draws: Vec<f32>,
    cursor: usize,
}

impl ScriptedRng {
    pub fn new(draws: Vec<f32>) -> Self {
        Self { draws, cursor: 0 }
    }

    /// Always returns `value`.
    pub fn constant(value: f32) -> Self {
        Self::new(vec![value])
    }
}

impl MatchRng for ScriptedRng {
    fn next_f32(&mut self) -> f32 {
        if self.draws.is_empty() {
            return 0.0;
        }
        let v = self.draws[self.cursor % self.draws.len()];
        self.cursor += 1;
        v
    }
}

//! Uniform random number sources for the generator.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A stream of uniform samples in `[0, 1)`.
pub trait UniformSource {
    /// Next sample in `[0, 1)`.
    fn uniform(&mut self) -> f32;

    /// `+1.0` when the next sample is below one half, otherwise `-1.0`.
    fn signed_unit(&mut self) -> f32 {
        if self.uniform() < 0.5 {
            1.0
        } else {
            -1.0
        }
    }
}

impl<S: UniformSource + ?Sized> UniformSource for &mut S {
    fn uniform(&mut self) -> f32 {
        (**self).uniform()
    }
}

/// Adapts any [`rand::Rng`] into a [`UniformSource`].
#[derive(Debug, Clone)]
pub struct RandomSource<R = StdRng> {
    rng: R,
}

impl<R: Rng> RandomSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomSource<StdRng> {
    /// Deterministic source: the same seed always yields the same galaxy.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Source seeded from operating-system entropy.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> UniformSource for RandomSource<R> {
    fn uniform(&mut self) -> f32 {
        self.rng.gen::<f32>()
    }
}

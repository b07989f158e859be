//! The single seedable random stream shared by generation, AI, and combat.
//! Every stochastic decision in the simulation draws from one `GameRng` in a
//! fixed call order, so a seed fully determines a run.

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::{RngCore, SeedableRng};

pub struct GameRng {
    inner: ChaCha8Rng,
}

impl GameRng {
    pub fn seed_from(seed: u64) -> Self {
        Self { inner: ChaCha8Rng::seed_from_u64(seed) }
    }

    /// Uniform integer in the inclusive range `[min, max]`.
    pub fn range_i32(&mut self, min: i32, max: i32) -> i32 {
        debug_assert!(min <= max);
        let span = u64::from((max - min) as u32) + 1;
        min + (self.inner.next_u64() % span) as i32
    }

    /// Uniform float in `[0, 1)`.
    pub fn unit(&mut self) -> f64 {
        (self.inner.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// One Bernoulli draw; always consumes exactly one stream value.
    pub fn chance(&mut self, probability: f64) -> bool {
        self.unit() < probability
    }

    /// Uniform index into a collection of `len` elements.
    pub fn pick_index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0);
        (self.inner.next_u64() % len as u64) as usize
    }

    /// `count` distinct indices from `0..len`, uniformly without replacement.
    /// Returns fewer than `count` when `len` is smaller.
    pub fn sample_indices(&mut self, len: usize, count: usize) -> Vec<usize> {
        let mut pool: Vec<usize> = (0..len).collect();
        let take = count.min(len);
        for chosen in 0..take {
            let offset = self.pick_index(len - chosen);
            pool.swap(chosen, chosen + offset);
        }
        pool.truncate(take);
        pool
    }
}

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;
use rand_core::RngCore;

use crate::distributions::Signal;

const MAXF64: f64 = 9007199254740992.0;

/// Deterministic pseudo-random stream used to synthesize transform inputs.
pub struct Source {
    source: ChaCha8Rng,
}

pub fn new_seed() -> [u8; 32] {
    let mut seed = [0u8; 32];
    rand::rng().fill_bytes(&mut seed);
    seed
}

impl Source {
    pub fn new(seed: [u8; 32]) -> Source {
        Source {
            source: ChaCha8Rng::from_seed(seed),
        }
    }

    pub fn new_seed(&mut self) -> [u8; 32] {
        let mut seed: [u8; 32] = [0u8; 32];
        self.source.fill_bytes(&mut seed);
        seed
    }

    pub fn branch(&mut self) -> Self {
        Source::new(self.new_seed())
    }

    #[inline(always)]
    pub fn next_f64(&mut self, min: f64, max: f64) -> f64 {
        min + ((self.next_u64() << 11 >> 11) as f64) / MAXF64 * (max - min)
    }

    pub fn fill_signal(&mut self, signal: &Signal, values: &mut [f64]) {
        signal.fill(self, values)
    }

    pub fn signal(&mut self, signal: &Signal, n: usize) -> Vec<f64> {
        let mut values: Vec<f64> = vec![0f64; n];
        self.fill_signal(signal, &mut values);
        values
    }

    /// Interleaved `[re, im, re, im, ...]` buffer of `n` complex samples.
    pub fn interleaved(&mut self, signal: &Signal, n: usize) -> Vec<f64> {
        self.signal(signal, n << 1)
    }
}

impl RngCore for Source {
    #[inline(always)]
    fn next_u32(&mut self) -> u32 {
        self.source.next_u32()
    }

    #[inline(always)]
    fn next_u64(&mut self) -> u64 {
        self.source.next_u64()
    }

    #[inline(always)]
    fn fill_bytes(&mut self, bytes: &mut [u8]) {
        self.source.fill_bytes(bytes)
    }
}

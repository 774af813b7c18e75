//! Reproducible pseudo-random source (mulberry32) and the entropy capability
//! used when the caller gives no seed.
//!
//! All state arithmetic is 32-bit with wraparound so a given seed yields the
//! same sequence on every platform.

use std::time::{SystemTime, UNIX_EPOCH};

use rand::RngCore;

use crate::error::{Result, RoadmapError};
use crate::study_engine::models::Seed;

const GOLDEN_GAMMA: u32 = 0x6D2B_79F5;
const TWO_POW_32: f64 = 4_294_967_296.0;

/// Hash a string seed into 32 bits: `h = h * 31 + unit` over UTF-16 code
/// units in signed 32-bit arithmetic, then the absolute value.
pub fn hash_seed(text: &str) -> u32 {
    let hash = text.encode_utf16().fold(0i32, |h, unit| {
        (h << 5).wrapping_sub(h).wrapping_add(i32::from(unit))
    });
    hash.unsigned_abs()
}

/// Initial 32-bit state for a seed. Numbers wrap into 32 bits.
pub fn seed_state(seed: &Seed) -> u32 {
    match seed {
        Seed::Number(n) => *n as u32,
        Seed::Text(s) => hash_seed(s),
    }
}

/// Deterministic generator; one instance per roadmap.
#[derive(Debug, Clone)]
pub struct SeededSource {
    state: u32,
}

impl SeededSource {
    pub fn new(seed: &Seed) -> Self {
        SeededSource { state: seed_state(seed) }
    }

    pub fn from_state(state: u32) -> Self {
        SeededSource { state }
    }

    /// Advance the state and return the mixed 32-bit output word.
    fn next_word(&mut self) -> u32 {
        self.state = self.state.wrapping_add(GOLDEN_GAMMA);
        let mut t = self.state;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        t ^ (t >> 14)
    }

    /// Uniform float in `[0, 1)`.
    pub fn next(&mut self) -> f64 {
        f64::from(self.next_word()) / TWO_POW_32
    }

    /// Uniform integer in `[min, max]`, both inclusive.
    pub fn next_int(&mut self, min: i64, max: i64) -> i64 {
        let span = (max - min + 1) as f64;
        (self.next() * span).floor() as i64 + min
    }

    /// Uniform index in `[0, len)`. `len` must be non-zero.
    fn next_index(&mut self, len: usize) -> usize {
        self.next_int(0, len as i64 - 1) as usize
    }

    /// Choose one element. Fails on an empty slice.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Result<&'a T> {
        if items.is_empty() {
            return Err(RoadmapError::EmptySequence);
        }
        let idx = self.next_index(items.len());
        Ok(&items[idx])
    }

    /// Fisher-Yates over a copy; the input is left untouched.
    pub fn shuffle<T: Clone>(&mut self, items: &[T]) -> Vec<T> {
        let mut out = items.to_vec();
        for i in (1..out.len()).rev() {
            let j = (self.next() * (i + 1) as f64).floor() as usize;
            out.swap(i, j);
        }
        out
    }
}

impl RngCore for SeededSource {
    fn next_u32(&mut self) -> u32 {
        self.next_word()
    }

    fn next_u64(&mut self) -> u64 {
        let hi = u64::from(self.next_word());
        let lo = u64::from(self.next_word());
        (hi << 32) | lo
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.next_word().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> std::result::Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Entropy for unseeded runs
// ---------------------------------------------------------------------------

/// Supplies a seed when the config does not carry one.
pub trait EntropySource {
    fn entropy_seed(&self) -> Seed;
}

/// Current Unix time in milliseconds.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl EntropySource for SystemClock {
    fn entropy_seed(&self) -> Seed {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as i64)
            .unwrap_or(0);
        Seed::Number(millis)
    }
}

/// Always the same value. Lets tests drive the unseeded path.
#[derive(Debug, Clone, Copy)]
pub struct FixedEntropy(pub i64);

impl EntropySource for FixedEntropy {
    fn entropy_seed(&self) -> Seed {
        Seed::Number(self.0)
    }
}

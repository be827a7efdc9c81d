//! Random sources for the fields the generators deliberately vary.
//!
//! Seed-derived values never touch these. Only the stats that fluctuate per
//! request (profile noise, prediction confidence, team records) draw from a
//! [`RandomSource`], so callers decide whether repeated requests agree.

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use super::identity::Seed;

pub trait RandomSource {
    /// Uniform value in `[0, 1)`.
    fn next_unit(&mut self) -> f64;

    /// Uniform value in `[min, max)`.
    fn range_f64(&mut self, min: f64, max: f64) -> f64 {
        if max <= min {
            return min;
        }
        min + self.next_unit() * (max - min)
    }

    /// Uniform integer in `[min, max]`.
    fn range_u32(&mut self, min: u32, max: u32) -> u32 {
        if max <= min {
            return min;
        }
        let span = (max - min + 1) as f64;
        min + ((self.next_unit() * span) as u32).min(max - min)
    }

    /// True with probability `p`.
    fn chance(&mut self, p: f64) -> bool {
        self.next_unit() < p
    }
}

/// Reproducible source keyed off an identity seed.
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    pub fn new(seed: Seed) -> Self {
        SeededRandom {
            rng: StdRng::seed_from_u64(seed.value()),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_unit(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}

/// Fresh values on every call.
pub struct EntropyRandom {
    rng: ThreadRng,
}

impl EntropyRandom {
    pub fn new() -> Self {
        EntropyRandom {
            rng: rand::thread_rng(),
        }
    }
}

impl Default for EntropyRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for EntropyRandom {
    fn next_unit(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RandomMode {
    Entropy,
    Seeded,
}

impl RandomMode {
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "entropy" | "random" => Some(RandomMode::Entropy),
            "seeded" | "deterministic" => Some(RandomMode::Seeded),
            _ => None,
        }
    }

    /// Build the source for a request identified by `seed`.
    pub fn source(&self, seed: Seed) -> Box<dyn RandomSource> {
        match self {
            RandomMode::Entropy => Box::new(EntropyRandom::new()),
            RandomMode::Seeded => Box::new(SeededRandom::new(seed)),
        }
    }
}

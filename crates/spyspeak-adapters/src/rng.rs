//! Random source adapters.
//!
//! `ThreadRngSource` is the production source. `StepSource` replays a fixed
//! sequence so tests can pin exact draws without touching the services.

use rand::{Rng, rngs::ThreadRng};

use spyspeak_core::application::ports::RandomSource;

/// `rand`-backed random source using the thread-local generator.
#[derive(Debug)]
pub struct ThreadRngSource {
    rng: ThreadRng,
}

impl ThreadRngSource {
    pub fn new() -> Self {
        Self {
            rng: rand::thread_rng(),
        }
    }
}

impl Default for ThreadRngSource {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for ThreadRngSource {
    fn pick_index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }

    fn number_between(&mut self, low: u32, high: u32) -> u32 {
        self.rng.gen_range(low..=high)
    }
}

/// Deterministic source cycling through a fixed sequence of draws.
///
/// `pick_index` folds the next value into `0..len`; `number_between` folds
/// it into the inclusive range. Useful wherever a test needs a real adapter
/// rather than a hand-rolled double.
#[derive(Debug, Clone)]
pub struct StepSource {
    sequence: Vec<usize>,
    cursor: usize,
}

impl StepSource {
    /// `sequence` must be non-empty.
    pub fn new(sequence: Vec<usize>) -> Self {
        debug_assert!(!sequence.is_empty());
        Self {
            sequence,
            cursor: 0,
        }
    }

    fn next_value(&mut self) -> usize {
        let value = self.sequence[self.cursor % self.sequence.len()];
        self.cursor += 1;
        value
    }
}

impl RandomSource for StepSource {
    fn pick_index(&mut self, len: usize) -> usize {
        self.next_value() % len
    }

    fn number_between(&mut self, low: u32, high: u32) -> u32 {
        let span = u64::from(high - low) + 1;
        let folded = (self.next_value() as u64 % span) as u32;
        low + folded
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

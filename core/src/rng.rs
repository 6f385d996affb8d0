//! Deterministic random number generation.
//!
//! RULE: Nothing in the generator may call a platform RNG (`thread_rng`,
//! `random()`). All randomness flows through `StreamRng` instances handed
//! out by the `RngBank` that the top-level run owns.
//!
//! A run is keyed by a seed pair: the general seed drives the record
//! streams, the fiction seed drives names and dates. Names and dates get
//! separate streams so a customer's name never depends on how many orders
//! earlier customers placed. Each stream is seeded from (seed XOR
//! slot-derived constant), so adding a stream never shifts the values drawn
//! by an existing one.

use rand::{Rng, RngCore, SeedableRng};
use rand_pcg::Pcg64Mcg;
use serde::{Deserialize, Serialize};

/// The two seeds that fully determine a run's output (together with `as_of`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedPair {
    pub general: u64,
    pub fiction: u64,
}

impl Default for SeedPair {
    fn default() -> Self {
        Self { general: 42, fiction: 42 }
    }
}

/// A named, deterministic RNG for one stream of the run.
pub struct StreamRng {
    pub name: &'static str,
    inner: Pcg64Mcg,
}

impl StreamRng {
    /// Create a stream RNG from a seed and a stable slot index.
    /// The index must never change once assigned.
    pub fn new(seed: u64, slot_index: u64) -> Self {
        let derived_seed = seed ^ (slot_index.wrapping_mul(0x9e37_79b9_7f4a_7c15));
        Self {
            name: "unnamed",
            inner: Pcg64Mcg::seed_from_u64(derived_seed),
        }
    }

    pub fn with_name(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    /// Roll a float in [0.0, 1.0).
    pub fn next_f64(&mut self) -> f64 {
        let bits = self.inner.next_u64();
        (bits >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    /// Roll a u64 in [0, n).
    pub fn next_u64_below(&mut self, n: u64) -> u64 {
        assert!(n > 0, "n must be > 0");
        self.inner.gen_range(0..n)
    }

    /// Roll an integer in [lo, hi], both ends inclusive.
    pub fn int_inclusive(&mut self, lo: i64, hi: i64) -> i64 {
        assert!(lo <= hi, "empty range {lo}..={hi}");
        self.inner.gen_range(lo..=hi)
    }

    /// Bernoulli trial: returns true with probability p.
    pub fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }

    /// Uniform pick from a non-empty slice.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        assert!(!items.is_empty(), "pick() from an empty slice");
        let index = self.next_u64_below(items.len() as u64) as usize;
        &items[index]
    }
}

/// Lets `rand` helpers (index sampling) draw from a stream directly.
impl RngCore for StreamRng {
    fn next_u32(&mut self) -> u32 {
        self.inner.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.inner.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.inner.try_fill_bytes(dest)
    }
}

/// Hands out the per-stream RNGs of a single run.
pub struct RngBank {
    seeds: SeedPair,
}

impl RngBank {
    pub fn new(seeds: SeedPair) -> Self {
        Self { seeds }
    }

    pub fn for_stream(&self, slot: StreamSlot) -> StreamRng {
        let seed = match slot {
            StreamSlot::Fiction | StreamSlot::Calendar => self.seeds.fiction,
            StreamSlot::General | StreamSlot::NullInjection => self.seeds.general,
        };
        StreamRng::new(seed, slot as u64).with_name(slot.name())
    }

    /// Fresh record-building streams, positioned at their seeds.
    pub fn record_streams(&self) -> RecordStreams {
        RecordStreams {
            general: self.for_stream(StreamSlot::General),
            names: self.for_stream(StreamSlot::Fiction),
            dates: self.for_stream(StreamSlot::Calendar),
        }
    }
}

/// The streams customer, order and payment builders draw from.
pub struct RecordStreams {
    pub general: StreamRng,
    pub names: StreamRng,
    pub dates: StreamRng,
}

/// Stable stream slot assignments.
/// NEVER reorder or remove entries; only append.
/// Reordering changes every stream's seed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u64)]
pub enum StreamSlot {
    General = 0,
    Fiction = 1,
    NullInjection = 2,
    Calendar = 3,
}

impl StreamSlot {
    pub fn name(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Fiction => "fiction",
            Self::NullInjection => "null_injection",
            Self::Calendar => "calendar",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_stream() {
        let bank = RngBank::new(SeedPair { general: 7, fiction: 9 });
        let mut a = bank.for_stream(StreamSlot::General);
        let mut b = bank.for_stream(StreamSlot::General);
        for _ in 0..32 {
            assert_eq!(a.next_u64(), b.next_u64());
        }
    }

    #[test]
    fn streams_are_independent() {
        let bank = RngBank::new(SeedPair { general: 7, fiction: 7 });
        let mut general = bank.for_stream(StreamSlot::General);
        let mut fiction = bank.for_stream(StreamSlot::Fiction);
        let g: Vec<u64> = (0..8).map(|_| general.next_u64()).collect();
        let f: Vec<u64> = (0..8).map(|_| fiction.next_u64()).collect();
        assert_ne!(g, f, "slots must derive different seeds");
    }

    #[test]
    fn fiction_seed_drives_names_and_dates_only() {
        let a = RngBank::new(SeedPair { general: 1, fiction: 5 });
        let b = RngBank::new(SeedPair { general: 2, fiction: 5 });
        let (mut sa, mut sb) = (a.record_streams(), b.record_streams());
        assert_eq!(sa.names.next_u64(), sb.names.next_u64());
        assert_eq!(sa.dates.next_u64(), sb.dates.next_u64());
        assert_ne!(sa.general.next_u64(), sb.general.next_u64());
    }

    #[test]
    fn int_inclusive_hits_both_ends() {
        let mut rng = StreamRng::new(1, 0);
        let mut seen_lo = false;
        let mut seen_hi = false;
        for _ in 0..2_000 {
            let v = rng.int_inclusive(1, 3);
            assert!((1..=3).contains(&v));
            seen_lo |= v == 1;
            seen_hi |= v == 3;
        }
        assert!(seen_lo && seen_hi);
    }

    #[test]
    fn next_f64_is_unit_interval() {
        let mut rng = StreamRng::new(99, 2);
        for _ in 0..1_000 {
            let x = rng.next_f64();
            assert!((0.0..1.0).contains(&x));
        }
    }
}

//! Explicit discrete distributions (value → weight) and the single
//! weighted-sampling primitive every generator uses.

use crate::{
    error::{GenError, GenResult},
    rng::StreamRng,
};

#[derive(Debug, Clone)]
pub struct Distribution<T> {
    entries: Vec<(T, f64)>,
    total_weight: f64,
}

impl<T> Distribution<T> {
    /// Build a table from (value, weight) pairs. Weights need not sum to 1.
    pub fn new(name: &'static str, entries: Vec<(T, f64)>) -> GenResult<Self> {
        if entries.is_empty() {
            return Err(GenError::InvalidDistribution {
                name,
                reason: "no entries".into(),
            });
        }
        if let Some((_, w)) = entries.iter().find(|(_, w)| !w.is_finite() || *w < 0.0) {
            return Err(GenError::InvalidDistribution {
                name,
                reason: format!("weight {w} is not a finite non-negative number"),
            });
        }
        let total_weight: f64 = entries.iter().map(|(_, w)| w).sum();
        if total_weight <= 0.0 {
            return Err(GenError::InvalidDistribution {
                name,
                reason: "weights sum to zero".into(),
            });
        }
        Ok(Self {
            entries,
            total_weight,
        })
    }

    /// Normalised probability of the entry at `index`.
    pub fn probability_at(&self, index: usize) -> f64 {
        self.entries[index].1 / self.total_weight
    }

    /// Draw one value: a single roll walked against the cumulative weights.
    pub fn sample(&self, rng: &mut StreamRng) -> &T {
        let roll = rng.next_f64() * self.total_weight;
        let mut cumulative = 0.0;
        for (value, weight) in &self.entries {
            cumulative += weight;
            if roll < cumulative {
                return value;
            }
        }
        // Float rounding can leave roll == total; the last entry owns that edge.
        &self.entries[self.entries.len() - 1].0
    }
}

impl<T: Copy> Distribution<T> {
    pub fn sample_copied(&self, rng: &mut StreamRng) -> T {
        *self.sample(rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_and_degenerate_tables() {
        assert!(Distribution::<u8>::new("empty", vec![]).is_err());
        assert!(Distribution::new("zero", vec![(1u8, 0.0), (2, 0.0)]).is_err());
        assert!(Distribution::new("neg", vec![(1u8, -1.0), (2, 2.0)]).is_err());
        assert!(Distribution::new("nan", vec![(1u8, f64::NAN)]).is_err());
    }

    #[test]
    fn zero_weight_entries_are_never_drawn() {
        let dist = Distribution::new("skewed", vec![("never", 0.0), ("always", 1.0)]).unwrap();
        let mut rng = StreamRng::new(5, 0);
        for _ in 0..500 {
            assert_eq!(*dist.sample(&mut rng), "always");
        }
    }

    #[test]
    fn empirical_frequencies_track_weights() {
        let dist = Distribution::new("counts", vec![(1u8, 0.7), (2, 0.2), (3, 0.1)]).unwrap();
        let mut rng = StreamRng::new(2024, 0);
        let mut hits = [0usize; 3];
        let draws = 100_000;
        for _ in 0..draws {
            hits[(dist.sample_copied(&mut rng) - 1) as usize] += 1;
        }
        for (i, h) in hits.iter().enumerate() {
            let observed = *h as f64 / draws as f64;
            let expected = dist.probability_at(i);
            assert!(
                (observed - expected).abs() < 0.01,
                "entry {i}: observed {observed:.4}, expected {expected:.4}"
            );
        }
    }
}

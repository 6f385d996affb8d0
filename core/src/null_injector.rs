//! Null injection: blank out fields on exact-size random row subsets.
//!
//! Each rule is an independent pass: `round(p × rows)` distinct rows are
//! drawn without replacement and the rule's field is cleared on each. Passes
//! never look at each other's picks, so a row can lose several fields and
//! rule order does not change the per-field counts.

use crate::{
    error::{GenError, GenResult},
    rng::StreamRng,
    table::NullableField,
};
use rand::seq::index;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NullRule<F> {
    pub field: F,
    pub probability: f64,
}

impl<F> NullRule<F> {
    pub fn new(field: F, probability: f64) -> Self {
        Self { field, probability }
    }

    /// Rows this rule blanks in a collection of `rows`.
    pub fn target_count(&self, rows: usize) -> usize {
        ((self.probability * rows as f64).round() as usize).min(rows)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InjectionOutcome {
    pub column: &'static str,
    pub rows_nulled: usize,
}

pub fn check_probability(column: &str, probability: f64) -> GenResult<()> {
    if probability.is_finite() && (0.0..=1.0).contains(&probability) {
        Ok(())
    } else {
        Err(GenError::InvalidProbability {
            field: column.to_string(),
            value: probability,
        })
    }
}

/// Apply every rule to `rows`. All probabilities are checked before any row
/// is touched.
pub fn inject_nulls<R, F>(
    rows: &mut [R],
    rules: &[NullRule<F>],
    rng: &mut StreamRng,
) -> GenResult<Vec<InjectionOutcome>>
where
    F: NullableField<R>,
{
    for rule in rules {
        check_probability(rule.field.column(), rule.probability)?;
    }

    let mut outcomes = Vec::with_capacity(rules.len());
    for rule in rules {
        let amount = rule.target_count(rows.len());
        for i in index::sample(rng, rows.len(), amount) {
            rule.field.clear(&mut rows[i]);
        }
        log::debug!(
            "null injection: {} cleared on {amount}/{} rows",
            rule.field.column(),
            rows.len()
        );
        outcomes.push(InjectionOutcome {
            column: rule.field.column(),
            rows_nulled: amount,
        });
    }
    Ok(outcomes)
}

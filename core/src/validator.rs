//! Email/name consistency check.
//!
//! Diagnostic only: a customer "matches" when the lower-cased local part of
//! the email contains the first name or its initial AND the last name or its
//! initial. Initial-based addresses only guarantee a one-letter hit, so the
//! rate is informative rather than a pass/fail gate.

use crate::customer::Customer;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct MatchReport {
    /// Customers with a present email.
    pub checked: usize,
    pub matched: usize,
}

impl MatchReport {
    /// Matched share in [0, 1]; zero when nothing was checked.
    pub fn fraction(&self) -> f64 {
        if self.checked == 0 {
            0.0
        } else {
            self.matched as f64 / self.checked as f64
        }
    }

    pub fn percentage(&self) -> f64 {
        self.fraction() * 100.0
    }
}

fn normalize(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_whitespace())
        .collect()
}

/// Does `email` look like it was derived from `name`?
pub fn email_matches_name(name: &str, email: &str) -> bool {
    let local = normalize(email.split('@').next().unwrap_or_default());
    let name = normalize(name);
    let tokens: Vec<&str> = name.split_whitespace().collect();
    let [first, .., last] = tokens.as_slice() else {
        return false;
    };

    let hit = |part: &str| {
        let initial = &part[..1];
        local.contains(part) || local.contains(initial)
    };
    hit(first) && hit(last)
}

pub fn check_customers(customers: &[Customer]) -> MatchReport {
    let mut report = MatchReport::default();
    for c in customers {
        let Some(email) = c.email.as_deref() else {
            continue;
        };
        report.checked += 1;
        if email_matches_name(&c.customer_name, email) {
            report.matched += 1;
        }
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_generated_layouts_match() {
        for email in [
            "jane.doe@gmail.com",
            "janedoe12@yahoo.com",
            "j.doe@icloud.com",
        ] {
            assert!(email_matches_name("Jane Doe", email), "{email}");
        }
    }

    #[test]
    fn unrelated_address_does_not_match() {
        assert!(!email_matches_name("Jane Doe", "bob.smith@gmail.com"));
    }

    #[test]
    fn single_token_names_never_match() {
        assert!(!email_matches_name("Cher", "cher@gmail.com"));
        assert!(!email_matches_name("", "user@gmail.com"));
    }

    #[test]
    fn punctuation_in_names_is_ignored() {
        assert!(email_matches_name("Sean O'Brien", "sean.obrien@outlook.com"));
    }

    #[test]
    fn local_part_is_normalized_before_matching() {
        assert!(email_matches_name("Sean O'Brien", "SEAN.O'BRIEN42@outlook.com"));
        assert!(email_matches_name("Amy Smith-Jones", "amy_smith-jones@gmail.com"));
        assert!(!email_matches_name("Amy Smith-Jones", "42.__@gmail.com"));
    }

    #[test]
    fn initials_on_both_sides_are_enough() {
        assert!(email_matches_name("Jane Doe", "jd@gmail.com"));
        assert!(!email_matches_name("Jane Doe", "jx@gmail.com"));
    }

    #[test]
    fn fraction_handles_empty_input() {
        assert_eq!(check_customers(&[]).fraction(), 0.0);
        let r = MatchReport { checked: 4, matched: 3 };
        assert_eq!(r.percentage(), 75.0);
    }
}

//! Contact details derived for each customer: a name-based email address and
//! a phone number in the customer's national format.

use crate::{
    error::GenResult,
    reference::{Country, EMAIL_DOMAINS},
    rng::StreamRng,
};

/// Share of addresses that get a numeric tail (`jane.doe417@...`).
pub const NUMERIC_SUFFIX_RATE: f64 = 0.3;

/// Local part used when a name has no letters at all.
pub const PLACEHOLDER_LOCAL_PART: &str = "user";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmailFormat {
    /// `first.last`
    Dotted,
    /// `firstlast`
    Joined,
    /// `f.last`
    Initial,
}

impl EmailFormat {
    pub const ALL: [EmailFormat; 3] =
        [EmailFormat::Dotted, EmailFormat::Joined, EmailFormat::Initial];

    pub fn local_part(&self, first: &str, last: &str) -> String {
        match self {
            Self::Dotted => format!("{first}.{last}"),
            Self::Joined => format!("{first}{last}"),
            Self::Initial => {
                let initial: String = first.chars().take(1).collect();
                format!("{initial}.{last}")
            }
        }
    }
}

/// Split a display name into ASCII-letter tokens, dropping punctuation,
/// digits and anything else that is not a letter or whitespace.
pub fn name_tokens(name: &str) -> Vec<String> {
    let cleaned: String = name
        .chars()
        .filter(|c| c.is_ascii_alphabetic() || c.is_whitespace())
        .collect();
    cleaned.split_whitespace().map(str::to_string).collect()
}

/// Build an email address from a customer's display name.
///
/// Two or more tokens use the first and last token in one of the
/// `EmailFormat`s; a single token is used as-is; no tokens fall back to
/// `PLACEHOLDER_LOCAL_PART`. The result always has exactly one `@` and a
/// non-empty local part.
pub fn email_from_name(full_name: &str, rng: &mut StreamRng) -> String {
    let tokens = name_tokens(full_name);
    let mut local = match tokens.as_slice() {
        [first, .., last] => {
            let format = *rng.pick(&EmailFormat::ALL);
            format.local_part(&first.to_lowercase(), &last.to_lowercase())
        }
        [only] => only.to_lowercase(),
        [] => PLACEHOLDER_LOCAL_PART.to_string(),
    };

    if rng.chance(NUMERIC_SUFFIX_RATE) {
        local.push_str(&rng.int_inclusive(1, 999).to_string());
    }

    let domain = rng.pick(EMAIL_DOMAINS);
    format!("{local}@{domain}")
}

/// Format a phone number in the national layout of `country`.
pub fn format_phone(country: Country, rng: &mut StreamRng) -> String {
    let code = country.dialing_code();
    let mut n = |lo: i64, hi: i64| rng.int_inclusive(lo, hi);
    match country {
        // +91 98765 43210
        Country::India => {
            let (a, b) = (n(70_000, 99_999), n(10_000, 99_999));
            format!("{code} {a} {b}")
        }
        // +1 (212) 555-0142
        Country::Usa => {
            let (area, exchange, line) = (n(200, 999), n(200, 999), n(1_000, 9_999));
            format!("{code} ({area}) {exchange}-{line}")
        }
        // +49 151 2345678
        Country::Germany => {
            let (a, b) = (n(100, 999), n(1_000_000, 9_999_999));
            format!("{code} {a} {b}")
        }
        // +44 7123 456789
        Country::Uk => {
            let (a, b) = (n(7_000, 7_999), n(100_000, 999_999));
            format!("{code} {a} {b}")
        }
        // +86 138 1234 5678
        Country::China => {
            let (a, b, c) = (n(100, 199), n(1_000, 9_999), n(1_000, 9_999));
            format!("{code} {a} {b} {c}")
        }
        // +971 50 123 4567
        Country::Uae => {
            let (a, b, c) = (n(50, 59), n(100, 999), n(1_000, 9_999));
            format!("{code} {a} {b} {c}")
        }
    }
}

/// Format a phone number for a country given by name.
/// Unknown names are a defect in the caller's reference data.
pub fn format_phone_for(country_name: &str, rng: &mut StreamRng) -> GenResult<String> {
    let country: Country = country_name.parse()?;
    Ok(format_phone(country, rng))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GenError;

    fn digit_groups(s: &str) -> Vec<usize> {
        s.split(|c: char| !c.is_ascii_digit())
            .filter(|g| !g.is_empty())
            .map(str::len)
            .collect()
    }

    #[test]
    fn jane_doe_uses_one_of_three_layouts() {
        let mut rng = StreamRng::new(11, 0);
        for _ in 0..300 {
            let email = email_from_name("Jane Doe", &mut rng);
            let (local, domain) = email.split_once('@').unwrap();
            assert!(EMAIL_DOMAINS.contains(&domain), "unexpected domain {domain}");
            let stem = local.trim_end_matches(|c: char| c.is_ascii_digit());
            let digits = local.len() - stem.len();
            assert!(digits <= 3, "suffix too long in {email}");
            assert!(
                ["jane.doe", "janedoe", "j.doe"].contains(&stem),
                "unexpected local part {local}"
            );
        }
    }

    #[test]
    fn punctuation_and_titles_are_cleaned() {
        assert_eq!(name_tokens("Dr. Sean O'Brien Jr."), vec!["Dr", "Sean", "OBrien", "Jr"]);
        assert_eq!(name_tokens("Amy Smith-Jones"), vec!["Amy", "SmithJones"]);
        assert!(name_tokens("123 !!").is_empty());
    }

    #[test]
    fn degenerate_names_still_yield_valid_addresses() {
        let mut rng = StreamRng::new(4, 0);
        for name in ["", "   ", "42", "Cher", "!!!"] {
            let email = email_from_name(name, &mut rng);
            assert_eq!(email.matches('@').count(), 1, "{email}");
            let local = email.split('@').next().unwrap();
            assert!(!local.is_empty(), "empty local part for {name:?}");
        }
        let mut rng = StreamRng::new(4, 0);
        let email = email_from_name("Cher", &mut rng);
        assert!(email.starts_with("cher"));
        let email = email_from_name("", &mut rng);
        assert!(email.starts_with(PLACEHOLDER_LOCAL_PART));
    }

    #[test]
    fn india_phone_is_five_plus_five() {
        let mut rng = StreamRng::new(21, 0);
        for _ in 0..200 {
            let phone = format_phone(Country::India, &mut rng);
            let rest = phone.strip_prefix("+91 ").unwrap();
            let groups: Vec<&str> = rest.split(' ').collect();
            assert_eq!(groups.len(), 2, "{phone}");
            assert!(groups.iter().all(|g| g.len() == 5 && g.chars().all(|c| c.is_ascii_digit())));
            assert!(groups[0].parse::<u32>().unwrap() >= 70_000);
        }
    }

    #[test]
    fn usa_phone_has_parenthesised_area_code() {
        let mut rng = StreamRng::new(22, 0);
        for _ in 0..200 {
            let phone = format_phone(Country::Usa, &mut rng);
            let rest = phone.strip_prefix("+1 (").unwrap();
            assert_eq!(&rest[3..5], ") ", "{phone}");
            assert_eq!(&rest[8..9], "-", "{phone}");
            assert_eq!(rest.len(), 13, "{phone}");
            assert_eq!(digit_groups(rest), vec![3, 3, 4]);
        }
    }

    #[test]
    fn every_country_uses_its_dialing_code() {
        let mut rng = StreamRng::new(23, 0);
        let expected = [
            (Country::Germany, vec![3, 7]),
            (Country::Uk, vec![4, 6]),
            (Country::China, vec![3, 4, 4]),
            (Country::Uae, vec![2, 3, 4]),
        ];
        for (country, groups) in expected {
            let phone = format_phone(country, &mut rng);
            let rest = phone
                .strip_prefix(country.dialing_code())
                .unwrap_or_else(|| panic!("missing code in {phone}"));
            assert_eq!(digit_groups(rest), groups, "{phone}");
        }
    }

    #[test]
    fn unknown_country_name_fails() {
        let mut rng = StreamRng::new(1, 0);
        assert!(matches!(
            format_phone_for("Narnia", &mut rng),
            Err(GenError::UnknownCountry { .. })
        ));
        assert!(format_phone_for("UAE", &mut rng).unwrap().starts_with("+971 "));
    }
}

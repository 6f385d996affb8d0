//! Deterministic customer name generation from curated name lists.
//!
//! Names are drawn from the fiction stream only, so changing how records
//! consume the general stream never changes who the customers are.
//! A small share of names carry an honorific or a post-nominal, and some
//! surnames contain apostrophes or hyphens: downstream email derivation has
//! to clean them the way real CRM exports would.

use crate::rng::StreamRng;

pub const PREFIX_RATE: f64 = 0.04;
pub const SUFFIX_RATE: f64 = 0.04;

/// Deterministic name generator using curated name lists
pub struct NameGenerator;

impl NameGenerator {
    /// Generate a display name: optional prefix, first, last, optional suffix.
    pub fn generate_full_name(rng: &mut StreamRng) -> String {
        let mut parts: Vec<&str> = Vec::with_capacity(4);
        if rng.chance(PREFIX_RATE) {
            parts.push(*rng.pick(Self::prefixes()));
        }
        parts.push(Self::generate_first_name(rng));
        parts.push(Self::generate_last_name(rng));
        if rng.chance(SUFFIX_RATE) {
            parts.push(*rng.pick(Self::suffixes()));
        }
        parts.join(" ")
    }

    /// Generate first name from curated list
    pub fn generate_first_name(rng: &mut StreamRng) -> &'static str {
        *rng.pick(Self::first_names())
    }

    /// Generate last name from curated list
    pub fn generate_last_name(rng: &mut StreamRng) -> &'static str {
        *rng.pick(Self::last_names())
    }

    fn prefixes() -> &'static [&'static str] {
        &["Mr.", "Mrs.", "Ms.", "Dr."]
    }

    fn suffixes() -> &'static [&'static str] {
        &["Jr.", "Sr.", "II", "III", "MD", "PhD", "DDS"]
    }

    fn first_names() -> &'static [&'static str] {
        &[
            "James", "John", "Robert", "Michael", "William", "David", "Richard", "Joseph",
            "Thomas", "Charles", "Christopher", "Daniel", "Matthew", "Anthony", "Mark",
            "Steven", "Paul", "Andrew", "Joshua", "Kevin", "Brian", "George", "Timothy",
            "Edward", "Jason", "Ryan", "Jacob", "Nicholas", "Eric", "Jonathan", "Justin",
            "Brandon", "Benjamin", "Samuel", "Gregory", "Alexander", "Patrick", "Tyler",
            "Aaron", "Nathan", "Henry", "Zachary", "Peter", "Kyle", "Noah", "Ethan",
            "Jeremy", "Christian", "Sean", "Dylan", "Jordan", "Gabriel", "Logan", "Victor",
            "Mary", "Patricia", "Jennifer", "Linda", "Barbara", "Elizabeth", "Susan",
            "Jessica", "Sarah", "Karen", "Lisa", "Nancy", "Margaret", "Sandra", "Ashley",
            "Kimberly", "Emily", "Donna", "Michelle", "Amanda", "Melissa", "Stephanie",
            "Rebecca", "Laura", "Amy", "Angela", "Anna", "Nicole", "Samantha", "Katherine",
            "Rachel", "Catherine", "Maria", "Heather", "Julie", "Olivia", "Victoria",
            "Kelly", "Lauren", "Megan", "Andrea", "Hannah", "Madison", "Sophia", "Grace",
            "Natalie", "Charlotte", "Alexis", "Ava", "Mia", "Ella", "Zoe",
        ]
    }

    fn last_names() -> &'static [&'static str] {
        &[
            "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis",
            "Rodriguez", "Martinez", "Hernandez", "Lopez", "Gonzalez", "Wilson", "Anderson",
            "Thomas", "Taylor", "Moore", "Jackson", "Martin", "Lee", "Perez", "Thompson",
            "White", "Harris", "Sanchez", "Clark", "Ramirez", "Lewis", "Robinson", "Walker",
            "Young", "Allen", "King", "Wright", "Scott", "Torres", "Nguyen", "Hill",
            "Flores", "Green", "Adams", "Nelson", "Baker", "Hall", "Rivera", "Campbell",
            "Mitchell", "Carter", "Roberts", "Phillips", "Evans", "Turner", "Parker",
            "Collins", "Edwards", "Stewart", "Morris", "Murphy", "Cook", "Rogers", "Morgan",
            "Cooper", "Peterson", "Bailey", "Reed", "Kelly", "Howard", "Kim", "Cox", "Ward",
            "Richardson", "Watson", "Brooks", "Wood", "Bennett", "Gray", "Hughes", "Price",
            "Sanders", "Patel", "Myers", "Long", "Ross", "Foster", "Powell", "Jenkins",
            "Perry", "Russell", "Sullivan", "Bell", "Coleman", "Butler", "Henderson",
            "Fisher", "Hamilton", "Graham", "Reynolds", "Griffin", "Wallace", "West", "Cole",
            "Hayes", "Gibson", "Ellis", "Chen", "Schmidt", "Wagner", "Meyer", "Shah",
            "O'Brien", "O'Connor", "McDonald", "Smith-Jones", "Lloyd-Davies", "D'Souza",
        ]
    }
}

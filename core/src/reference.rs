//! Static reference tables: vehicle models and prices, countries with their
//! cities, regions and dialing codes, and the small enumerations orders and
//! payments draw from.
//!
//! Every lookup is a `match` on a closed enum, so results are pure functions
//! of their input. The only way to meet an unknown country is parsing a
//! string, which reports `GenError::UnknownCountry`.

use crate::error::GenError;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

macro_rules! display_as_str {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )+
    };
}

pub const EMAIL_DOMAINS: &[&str] = &[
    "gmail.com",
    "yahoo.com",
    "outlook.com",
    "hotmail.com",
    "icloud.com",
];

// ── Geography ─────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Country {
    Germany,
    #[serde(rename = "USA")]
    Usa,
    India,
    #[serde(rename = "UK")]
    Uk,
    China,
    #[serde(rename = "UAE")]
    Uae,
}

impl Country {
    pub const ALL: [Country; 6] = [
        Country::Germany,
        Country::Usa,
        Country::India,
        Country::Uk,
        Country::China,
        Country::Uae,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Germany => "Germany",
            Self::Usa => "USA",
            Self::India => "India",
            Self::Uk => "UK",
            Self::China => "China",
            Self::Uae => "UAE",
        }
    }

    pub fn cities(&self) -> &'static [&'static str] {
        match self {
            Self::Germany => &["Munich", "Berlin", "Hamburg", "Frankfurt"],
            Self::Usa => &["New York", "Los Angeles", "Chicago", "Dallas"],
            Self::India => &["Mumbai", "Bangalore", "Delhi", "Chennai"],
            Self::Uk => &["London", "Manchester", "Birmingham"],
            Self::China => &["Beijing", "Shanghai", "Shenzhen"],
            Self::Uae => &["Dubai", "Abu Dhabi"],
        }
    }

    pub fn region(&self) -> Region {
        match self {
            Self::Germany | Self::Uk => Region::Europe,
            Self::Usa => Region::NorthAmerica,
            Self::India | Self::China => Region::Asia,
            Self::Uae => Region::MiddleEast,
        }
    }

    pub fn dialing_code(&self) -> &'static str {
        match self {
            Self::Germany => "+49",
            Self::Usa => "+1",
            Self::India => "+91",
            Self::Uk => "+44",
            Self::China => "+86",
            Self::Uae => "+971",
        }
    }
}

impl FromStr for Country {
    type Err = GenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| GenError::UnknownCountry { name: s.to_string() })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    Europe,
    #[serde(rename = "North America")]
    NorthAmerica,
    Asia,
    #[serde(rename = "Middle East")]
    MiddleEast,
}

impl Region {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Europe => "Europe",
            Self::NorthAmerica => "North America",
            Self::Asia => "Asia",
            Self::MiddleEast => "Middle East",
        }
    }
}

// ── Vehicles ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Model {
    #[serde(rename = "BMW X1")]
    X1,
    #[serde(rename = "BMW X3")]
    X3,
    #[serde(rename = "BMW X5")]
    X5,
    #[serde(rename = "BMW 3 Series")]
    Series3,
    #[serde(rename = "BMW 5 Series")]
    Series5,
    #[serde(rename = "BMW i4")]
    I4,
    #[serde(rename = "BMW iX")]
    IX,
}

impl Model {
    pub const ALL: [Model; 7] = [
        Model::X1,
        Model::X3,
        Model::X5,
        Model::Series3,
        Model::Series5,
        Model::I4,
        Model::IX,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::X1 => "BMW X1",
            Self::X3 => "BMW X3",
            Self::X5 => "BMW X5",
            Self::Series3 => "BMW 3 Series",
            Self::Series5 => "BMW 5 Series",
            Self::I4 => "BMW i4",
            Self::IX => "BMW iX",
        }
    }

    /// List price before the order-level adjustment.
    pub fn base_price(&self) -> i64 {
        match self {
            Self::X1 => 45_000,
            Self::X3 => 55_000,
            Self::X5 => 70_000,
            Self::Series3 => 42_000,
            Self::Series5 => 60_000,
            Self::I4 => 65_000,
            Self::IX => 85_000,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Variant {
    Petrol,
    Diesel,
    Electric,
}

impl Variant {
    pub const ALL: [Variant; 3] = [Variant::Petrol, Variant::Diesel, Variant::Electric];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Petrol => "Petrol",
            Self::Diesel => "Diesel",
            Self::Electric => "Electric",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dealer {
    #[serde(rename = "BMW AutoHub")]
    AutoHub,
    #[serde(rename = "Premium Motors")]
    PremiumMotors,
    #[serde(rename = "Elite BMW")]
    EliteBmw,
    #[serde(rename = "City Wheels")]
    CityWheels,
}

impl Dealer {
    pub const ALL: [Dealer; 4] = [
        Dealer::AutoHub,
        Dealer::PremiumMotors,
        Dealer::EliteBmw,
        Dealer::CityWheels,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AutoHub => "BMW AutoHub",
            Self::PremiumMotors => "Premium Motors",
            Self::EliteBmw => "Elite BMW",
            Self::CityWheels => "City Wheels",
        }
    }
}

// ── People ────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
        }
    }
}

// ── Payments ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentType {
    Cash,
    Loan,
    Lease,
}

impl PaymentType {
    pub const ALL: [PaymentType; 3] = [PaymentType::Cash, PaymentType::Loan, PaymentType::Lease];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cash => "Cash",
            Self::Loan => "Loan",
            Self::Lease => "Lease",
        }
    }

    /// Statuses a payment of this type may carry, with relative weights.
    pub fn status_weights(&self) -> &'static [(PaymentStatus, f64)] {
        use PaymentStatus::*;
        match self {
            Self::Cash => &[(Completed, 3.0), (Pending, 1.0)],
            Self::Loan => &[(Completed, 1.0), (InProgress, 1.0), (Pending, 1.0), (Delayed, 1.0)],
            Self::Lease => &[(Active, 1.0), (Completed, 1.0), (Terminated, 1.0), (Overdue, 1.0)],
        }
    }

    pub fn allows(&self, status: PaymentStatus) -> bool {
        self.status_weights().iter().any(|(s, _)| *s == status)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentStatus {
    Completed,
    Pending,
    #[serde(rename = "In Progress")]
    InProgress,
    Delayed,
    Active,
    Terminated,
    Overdue,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Completed => "Completed",
            Self::Pending => "Pending",
            Self::InProgress => "In Progress",
            Self::Delayed => "Delayed",
            Self::Active => "Active",
            Self::Terminated => "Terminated",
            Self::Overdue => "Overdue",
        }
    }
}

display_as_str!(Country, Region, Model, Variant, Dealer, Gender, PaymentType, PaymentStatus);

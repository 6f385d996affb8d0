//! Customer records: one per identity.

use crate::{
    clock::GenerationClock,
    contact::{email_from_name, format_phone},
    name_generator::NameGenerator,
    reference::{Country, Gender, Region},
    rng::RecordStreams,
    table::{NullableField, Table},
    types::{customer_id, CustomerId, IdentityIndex},
};
use chrono::NaiveDate;
use serde::Serialize;

pub const MIN_AGE: i64 = 18;
pub const MAX_AGE: i64 = 74;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Customer {
    pub customer_id: CustomerId,
    pub customer_name: String,
    pub customer_age: Option<u8>,
    pub gender: Option<Gender>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub country: Country,
    pub city: Option<&'static str>,
    pub region: Region,
    pub registration_date: NaiveDate,
}

impl Table for Customer {
    const NAME: &'static str = "customers";
    const COLUMNS: &'static [&'static str] = &[
        "customer_id",
        "customer_name",
        "customer_age",
        "gender",
        "email",
        "phone",
        "country",
        "city",
        "region",
        "registration_date",
    ];

    fn missing_flags(&self) -> Vec<bool> {
        vec![
            false,
            false,
            self.customer_age.is_none(),
            self.gender.is_none(),
            self.email.is_none(),
            self.phone.is_none(),
            false,
            self.city.is_none(),
            false,
            false,
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CustomerField {
    Email,
    Phone,
    Age,
    Gender,
    City,
}

impl NullableField<Customer> for CustomerField {
    fn column(&self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Age => "customer_age",
            Self::Gender => "gender",
            Self::City => "city",
        }
    }

    fn clear(&self, row: &mut Customer) {
        match self {
            Self::Email => row.email = None,
            Self::Phone => row.phone = None,
            Self::Age => row.customer_age = None,
            Self::Gender => row.gender = None,
            Self::City => row.city = None,
        }
    }
}

pub struct CustomerGenerator;

impl CustomerGenerator {
    /// Build the fully populated customer for identity `index`.
    ///
    /// Geography, contact details and demographics come from the general
    /// stream; the name and registration date from the fiction streams.
    pub fn build(
        index: IdentityIndex,
        clock: &GenerationClock,
        streams: &mut RecordStreams,
    ) -> Customer {
        let general = &mut streams.general;
        let country = *general.pick(&Country::ALL);
        let city = *general.pick(country.cities());
        let customer_name = NameGenerator::generate_full_name(&mut streams.names);
        let email = email_from_name(&customer_name, general);
        let phone = format_phone(country, general);
        let age = general.int_inclusive(MIN_AGE, MAX_AGE) as u8;
        let gender = *general.pick(&Gender::ALL);
        let registration_date = clock.registration_window().sample(&mut streams.dates);

        Customer {
            customer_id: customer_id(index),
            customer_name,
            customer_age: Some(age),
            gender: Some(gender),
            email: Some(email),
            phone: Some(phone),
            country,
            city: Some(city),
            region: country.region(),
            registration_date,
        }
    }
}

//! Generation clock: the fixed "today" every date in a run is relative to.

use crate::{
    error::{GenError, GenResult},
    rng::StreamRng,
};
use chrono::{Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// An inclusive span of calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Uniform day within the window, both ends included.
    pub fn sample(&self, rng: &mut StreamRng) -> NaiveDate {
        let span = (self.end - self.start).num_days();
        let offset = rng.int_inclusive(0, span);
        self.start + Days::new(offset as u64)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationClock {
    pub as_of: NaiveDate,
    registration: DateWindow,
    orders: DateWindow,
}

impl GenerationClock {
    pub fn new(as_of: NaiveDate) -> GenResult<Self> {
        let years_back = |years: u32| {
            as_of
                .checked_sub_months(Months::new(12 * years))
                .ok_or_else(|| GenError::InvalidConfig {
                    reason: format!("as_of {as_of} minus {years} years is out of range"),
                })
        };
        let five_years_ago = years_back(5)?;
        let three_years_ago = years_back(3)?;
        Ok(Self {
            as_of,
            registration: DateWindow {
                start: five_years_ago,
                end: three_years_ago,
            },
            orders: DateWindow {
                start: three_years_ago,
                end: as_of,
            },
        })
    }

    /// Customers registered between five and three years before `as_of`.
    pub fn registration_window(&self) -> DateWindow {
        self.registration
    }

    /// Orders fall within the last three years, `as_of` included.
    pub fn order_window(&self) -> DateWindow {
        self.orders
    }
}

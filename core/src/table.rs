//! The tabular shape shared by every exported record type.
//!
//! Column order here is the CSV header order and the order null counts are
//! reported in; it must match the record's serde field order.

use serde::Serialize;

pub trait Table: Serialize {
    /// Dataset name, also the export file stem.
    const NAME: &'static str;

    const COLUMNS: &'static [&'static str];

    /// One flag per entry of `COLUMNS`: true where the cell is missing.
    fn missing_flags(&self) -> Vec<bool>;
}

/// A column of `R` the null injector is allowed to blank out.
pub trait NullableField<R>: Copy + std::fmt::Debug {
    fn column(&self) -> &'static str;

    /// Replace the field's value with the missing marker.
    fn clear(&self, row: &mut R);
}

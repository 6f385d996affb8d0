//! Run summary: row counts, null counts, null density and an email sample.

use crate::{
    customer::Customer,
    engine::Dataset,
    table::Table,
    validator::{check_customers, MatchReport},
};
use serde::Serialize;

pub const EMAIL_SAMPLE_SIZE: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnNulls {
    pub column: &'static str,
    pub nulls: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatasetSummary {
    pub name: &'static str,
    pub rows: usize,
    /// In `Table::COLUMNS` order, including never-null columns.
    pub columns: Vec<ColumnNulls>,
}

impl DatasetSummary {
    pub fn of<T: Table>(rows: &[T]) -> Self {
        let mut counts = vec![0usize; T::COLUMNS.len()];
        for row in rows {
            for (count, missing) in counts.iter_mut().zip(row.missing_flags()) {
                *count += missing as usize;
            }
        }
        Self {
            name: T::NAME,
            rows: rows.len(),
            columns: T::COLUMNS
                .iter()
                .zip(counts)
                .map(|(&column, nulls)| ColumnNulls { column, nulls })
                .collect(),
        }
    }

    pub fn total_nulls(&self) -> usize {
        self.columns.iter().map(|c| c.nulls).sum()
    }

    pub fn nulls_in(&self, column: &str) -> Option<usize> {
        self.columns.iter().find(|c| c.column == column).map(|c| c.nulls)
    }

    /// Missing cells as a percentage of all cells.
    pub fn null_density_pct(&self) -> f64 {
        let cells = self.rows * self.columns.len();
        if cells == 0 {
            0.0
        } else {
            self.total_nulls() as f64 / cells as f64 * 100.0
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmailSample {
    pub name: String,
    pub email: String,
}

/// The first `limit` customers, in id order, that still have an email.
pub fn email_samples(customers: &[Customer], limit: usize) -> Vec<EmailSample> {
    customers
        .iter()
        .filter_map(|c| {
            c.email.as_ref().map(|email| EmailSample {
                name: c.customer_name.clone(),
                email: email.clone(),
            })
        })
        .take(limit)
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunReport {
    pub customers: DatasetSummary,
    pub orders: DatasetSummary,
    pub payments: DatasetSummary,
    pub email_match: MatchReport,
    pub email_samples: Vec<EmailSample>,
}

impl RunReport {
    pub fn build(dataset: &Dataset) -> Self {
        let email_match = check_customers(&dataset.customers);
        if email_match.checked > 0 && email_match.fraction() < 0.5 {
            log::warn!(
                "only {:.1}% of emails match their customer names",
                email_match.percentage()
            );
        }
        Self {
            customers: DatasetSummary::of(&dataset.customers),
            orders: DatasetSummary::of(&dataset.orders),
            payments: DatasetSummary::of(&dataset.payments),
            email_match,
            email_samples: email_samples(&dataset.customers, EMAIL_SAMPLE_SIZE),
        }
    }

    pub fn datasets(&self) -> [&DatasetSummary; 3] {
        [&self.customers, &self.orders, &self.payments]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{payment::Payment, reference::PaymentType};
    use chrono::NaiveDate;

    fn payment(n: u64, with_type: bool) -> Payment {
        Payment {
            payment_id: format!("PAY{n}"),
            order_id: format!("ORD{n}"),
            customer_id: "CUST10000".into(),
            payment_type: with_type.then_some(PaymentType::Loan),
            payment_status: None,
            payment_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        }
    }

    #[test]
    fn counts_and_density() {
        let rows = vec![payment(1, true), payment(2, false), payment(3, true), payment(4, true)];
        let summary = DatasetSummary::of(&rows);
        assert_eq!(summary.name, "payments");
        assert_eq!(summary.rows, 4);
        assert_eq!(summary.nulls_in("payment_type"), Some(1));
        assert_eq!(summary.nulls_in("payment_status"), Some(4));
        assert_eq!(summary.nulls_in("payment_id"), Some(0));
        assert_eq!(summary.total_nulls(), 5);
        // 5 of 24 cells
        assert!((summary.null_density_pct() - 20.833).abs() < 0.01);
    }

    #[test]
    fn empty_dataset_has_zero_density() {
        let summary = DatasetSummary::of::<Payment>(&[]);
        assert_eq!(summary.null_density_pct(), 0.0);
        assert_eq!(summary.columns.len(), Payment::COLUMNS.len());
    }
}

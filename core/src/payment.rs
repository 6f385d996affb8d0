//! Payments: exactly one per order, with a status conditioned on its type.

use crate::{
    distribution::Distribution,
    error::GenResult,
    order::Order,
    reference::{PaymentStatus, PaymentType},
    rng::StreamRng,
    table::{NullableField, Table},
    types::{payment_id, CustomerId, OrderId, PaymentId},
};
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Payment {
    pub payment_id: PaymentId,
    pub order_id: OrderId,
    pub customer_id: CustomerId,
    pub payment_type: Option<PaymentType>,
    pub payment_status: Option<PaymentStatus>,
    pub payment_date: NaiveDate,
}

impl Table for Payment {
    const NAME: &'static str = "payments";
    const COLUMNS: &'static [&'static str] = &[
        "payment_id",
        "order_id",
        "customer_id",
        "payment_type",
        "payment_status",
        "payment_date",
    ];

    fn missing_flags(&self) -> Vec<bool> {
        vec![
            false,
            false,
            false,
            self.payment_type.is_none(),
            self.payment_status.is_none(),
            false,
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentField {
    Status,
    Type,
}

impl NullableField<Payment> for PaymentField {
    fn column(&self) -> &'static str {
        match self {
            Self::Status => "payment_status",
            Self::Type => "payment_type",
        }
    }

    fn clear(&self, row: &mut Payment) {
        match self {
            Self::Status => row.payment_status = None,
            Self::Type => row.payment_type = None,
        }
    }
}

/// One status distribution per payment type.
#[derive(Debug, Clone)]
pub struct PaymentTables {
    cash: Distribution<PaymentStatus>,
    loan: Distribution<PaymentStatus>,
    lease: Distribution<PaymentStatus>,
}

impl PaymentTables {
    pub fn standard() -> GenResult<Self> {
        let table = |name, ty: PaymentType| Distribution::new(name, ty.status_weights().to_vec());
        Ok(Self {
            cash: table("cash_status", PaymentType::Cash)?,
            loan: table("loan_status", PaymentType::Loan)?,
            lease: table("lease_status", PaymentType::Lease)?,
        })
    }

    pub fn statuses_for(&self, payment_type: PaymentType) -> &Distribution<PaymentStatus> {
        match payment_type {
            PaymentType::Cash => &self.cash,
            PaymentType::Loan => &self.loan,
            PaymentType::Lease => &self.lease,
        }
    }
}

pub struct PaymentGenerator;

impl PaymentGenerator {
    /// Build payment number `sequence` settling `order`. The payment date is
    /// the order date.
    pub fn build(
        sequence: u64,
        order: &Order,
        tables: &PaymentTables,
        general: &mut StreamRng,
    ) -> Payment {
        let payment_type = *general.pick(&PaymentType::ALL);
        let payment_status = tables.statuses_for(payment_type).sample_copied(general);

        Payment {
            payment_id: payment_id(sequence),
            order_id: order.order_id.clone(),
            customer_id: order.customer_id.clone(),
            payment_type: Some(payment_type),
            payment_status: Some(payment_status),
            payment_date: order.order_date,
        }
    }
}

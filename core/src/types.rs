//! Shared primitive types used across the generator.

/// Zero-based position of an identity within a run.
pub type IdentityIndex = usize;

/// Rendered identifier of a customer, e.g. `CUST10000`.
pub type CustomerId = String;

/// Rendered identifier of an order, e.g. `ORD1000000`.
pub type OrderId = String;

/// Rendered identifier of a payment, e.g. `PAY1000000`.
pub type PaymentId = String;

pub const CUSTOMER_ID_BASE: usize = 10_000;
pub const ORDER_ID_BASE: u64 = 1_000_000;
pub const PAYMENT_ID_BASE: u64 = 1_000_000;

pub fn customer_id(index: IdentityIndex) -> CustomerId {
    format!("CUST{}", CUSTOMER_ID_BASE + index)
}

pub fn order_id(sequence: u64) -> OrderId {
    format!("ORD{}", ORDER_ID_BASE + sequence)
}

pub fn payment_id(sequence: u64) -> PaymentId {
    format!("PAY{}", PAYMENT_ID_BASE + sequence)
}

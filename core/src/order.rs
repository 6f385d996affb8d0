//! Orders: one to three per customer, each with a globally sequential id.

use crate::{
    clock::GenerationClock,
    customer::Customer,
    distribution::Distribution,
    error::GenResult,
    reference::{Dealer, Model, Variant},
    rng::RecordStreams,
    table::{NullableField, Table},
    types::{order_id, CustomerId, OrderId},
};
use chrono::NaiveDate;
use serde::Serialize;

/// Order-level price adjustment, half-open: [-5000, 8000).
pub const PRICE_OFFSET_MIN: i64 = -5_000;
pub const PRICE_OFFSET_MAX_EXCLUSIVE: i64 = 8_000;

/// Deliberately invalid quantity mixed into the quantity table.
pub const QUANTITY_SENTINEL: i32 = -1;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Order {
    pub order_id: OrderId,
    pub order_date: NaiveDate,
    pub customer_id: CustomerId,
    pub model: Model,
    pub variant: Option<Variant>,
    pub price: Option<i64>,
    pub quantity: Option<i32>,
    pub dealer: Option<Dealer>,
}

impl Table for Order {
    const NAME: &'static str = "orders";
    const COLUMNS: &'static [&'static str] = &[
        "order_id",
        "order_date",
        "customer_id",
        "model",
        "variant",
        "price",
        "quantity",
        "dealer",
    ];

    fn missing_flags(&self) -> Vec<bool> {
        vec![
            false,
            false,
            false,
            false,
            self.variant.is_none(),
            self.price.is_none(),
            self.quantity.is_none(),
            self.dealer.is_none(),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderField {
    Price,
    Quantity,
    Variant,
    Dealer,
}

impl NullableField<Order> for OrderField {
    fn column(&self) -> &'static str {
        match self {
            Self::Price => "price",
            Self::Quantity => "quantity",
            Self::Variant => "variant",
            Self::Dealer => "dealer",
        }
    }

    fn clear(&self, row: &mut Order) {
        match self {
            Self::Price => row.price = None,
            Self::Quantity => row.quantity = None,
            Self::Variant => row.variant = None,
            Self::Dealer => row.dealer = None,
        }
    }
}

/// Weighted tables the order builder samples from.
#[derive(Debug, Clone)]
pub struct OrderTables {
    pub orders_per_customer: Distribution<usize>,
    pub quantity: Distribution<i32>,
}

impl OrderTables {
    pub fn standard() -> GenResult<Self> {
        Ok(Self {
            orders_per_customer: Distribution::new(
                "orders_per_customer",
                vec![(1, 0.7), (2, 0.2), (3, 0.1)],
            )?,
            quantity: Distribution::new(
                "quantity",
                vec![(1, 3.0), (2, 1.0), (3, 1.0), (QUANTITY_SENTINEL, 1.0)],
            )?,
        })
    }
}

pub struct OrderGenerator;

impl OrderGenerator {
    /// Build order number `sequence` (zero-based across the whole run)
    /// for `customer`.
    pub fn build(
        sequence: u64,
        customer: &Customer,
        tables: &OrderTables,
        clock: &GenerationClock,
        streams: &mut RecordStreams,
    ) -> Order {
        let general = &mut streams.general;
        let model = *general.pick(&Model::ALL);
        let offset = general.int_inclusive(PRICE_OFFSET_MIN, PRICE_OFFSET_MAX_EXCLUSIVE - 1);
        let quantity = tables.quantity.sample_copied(general);
        let order_date = clock.order_window().sample(&mut streams.dates);
        let variant = *general.pick(&Variant::ALL);
        let dealer = *general.pick(&Dealer::ALL);

        Order {
            order_id: order_id(sequence),
            order_date,
            customer_id: customer.customer_id.clone(),
            model,
            variant: Some(variant),
            price: Some(model.base_price() + offset),
            quantity: Some(quantity),
            dealer: Some(dealer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        customer::CustomerGenerator,
        rng::{RngBank, SeedPair},
    };

    #[test]
    fn prices_stay_within_offset_band() {
        let mut streams = RngBank::new(SeedPair { general: 8, fiction: 9 }).record_streams();
        let clock = GenerationClock::new(NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()).unwrap();
        let tables = OrderTables::standard().unwrap();
        let customer = CustomerGenerator::build(0, &clock, &mut streams);

        let mut saw_sentinel = false;
        for seq in 0..2_000 {
            let order = OrderGenerator::build(seq, &customer, &tables, &clock, &mut streams);
            let base = order.model.base_price();
            let price = order.price.unwrap();
            assert!(price >= base + PRICE_OFFSET_MIN && price < base + PRICE_OFFSET_MAX_EXCLUSIVE);
            assert!(clock.order_window().contains(order.order_date));
            assert_eq!(order.customer_id, customer.customer_id);
            let q = order.quantity.unwrap();
            assert!([1, 2, 3, QUANTITY_SENTINEL].contains(&q));
            saw_sentinel |= q == QUANTITY_SENTINEL;
        }
        assert!(saw_sentinel, "the invalid quantity must show up in a large batch");
    }

    #[test]
    fn order_ids_are_offset_from_base() {
        assert_eq!(order_id(0), "ORD1000000");
        assert_eq!(order_id(41), "ORD1000041");
    }
}

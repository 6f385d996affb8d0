//! The generation engine: one sequential pass over N identities.
//!
//! EXECUTION ORDER (fixed, never reordered):
//!   1. For each identity: customer → 1..=3 orders → one payment per order
//!   2. Null injection: customers, then orders, then payments
//!
//! RULES:
//!   - All randomness flows through the RngBank; each `run()` starts every
//!     stream from its seed, so the engine is reentrant.
//!   - Order and payment ids come from run-wide counters and are never reused.
//!   - Nothing is written to disk here; export happens after the run.

use crate::{
    clock::GenerationClock,
    config::GeneratorConfig,
    customer::{Customer, CustomerGenerator},
    error::{GenError, GenResult},
    null_injector::{inject_nulls, InjectionOutcome},
    order::{Order, OrderGenerator, OrderTables},
    payment::{Payment, PaymentGenerator, PaymentTables},
    rng::{RngBank, StreamSlot},
};
use chrono::NaiveDate;

/// The three linked collections of one run, each in id order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    pub customers: Vec<Customer>,
    pub orders: Vec<Order>,
    pub payments: Vec<Payment>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NullInjectionLog {
    pub customers: Vec<InjectionOutcome>,
    pub orders: Vec<InjectionOutcome>,
    pub payments: Vec<InjectionOutcome>,
}

pub struct GenerationEngine {
    pub config: GeneratorConfig,
    pub clock: GenerationClock,
    rng_bank: RngBank,
    order_tables: OrderTables,
    payment_tables: PaymentTables,
}

impl GenerationEngine {
    /// Validate `config` and build the lookup tables. `today` is used as the
    /// run date unless the config pins one.
    pub fn build(config: GeneratorConfig, today: NaiveDate) -> GenResult<Self> {
        config.validate()?;
        let clock = GenerationClock::new(config.as_of.unwrap_or(today))?;
        Ok(Self {
            rng_bank: RngBank::new(config.seeds),
            order_tables: OrderTables::standard()?,
            payment_tables: PaymentTables::standard()?,
            clock,
            config,
        })
    }

    /// Engine over `GeneratorConfig::default_test()`.
    pub fn build_test() -> GenResult<Self> {
        let config = GeneratorConfig::default_test();
        let as_of = config.as_of.ok_or_else(|| GenError::InvalidConfig {
            reason: "test config must pin as_of".into(),
        })?;
        Self::build(config, as_of)
    }

    /// Build all records with every field populated.
    pub fn generate_records(&self) -> Dataset {
        let mut streams = self.rng_bank.record_streams();

        let n = self.config.customer_count;
        let mut dataset = Dataset {
            customers: Vec::with_capacity(n),
            orders: Vec::with_capacity(n * 3 / 2),
            payments: Vec::with_capacity(n * 3 / 2),
        };
        let mut order_seq: u64 = 0;
        let mut payment_seq: u64 = 0;

        for index in 0..n {
            let customer = CustomerGenerator::build(index, &self.clock, &mut streams);
            let order_count = self
                .order_tables
                .orders_per_customer
                .sample_copied(&mut streams.general);

            for _ in 0..order_count {
                let order = OrderGenerator::build(
                    order_seq,
                    &customer,
                    &self.order_tables,
                    &self.clock,
                    &mut streams,
                );
                order_seq += 1;

                let payment = PaymentGenerator::build(
                    payment_seq,
                    &order,
                    &self.payment_tables,
                    &mut streams.general,
                );
                payment_seq += 1;

                dataset.orders.push(order);
                dataset.payments.push(payment);
            }
            dataset.customers.push(customer);
        }

        log::info!(
            "generated {} customers, {} orders, {} payments (as_of {})",
            dataset.customers.len(),
            dataset.orders.len(),
            dataset.payments.len(),
            self.clock.as_of
        );
        dataset
    }

    /// Blank fields according to the configured null rates.
    pub fn inject_nulls(&self, dataset: &mut Dataset) -> GenResult<NullInjectionLog> {
        let mut rng = self.rng_bank.for_stream(StreamSlot::NullInjection);
        let rates = &self.config.null_rates;
        let injected = NullInjectionLog {
            customers: inject_nulls(&mut dataset.customers, &rates.customers.rules(), &mut rng)?,
            orders: inject_nulls(&mut dataset.orders, &rates.orders.rules(), &mut rng)?,
            payments: inject_nulls(&mut dataset.payments, &rates.payments.rules(), &mut rng)?,
        };
        let total = |outcomes: &[InjectionOutcome]| -> usize {
            outcomes.iter().map(|o| o.rows_nulled).sum()
        };
        log::info!(
            "injected nulls: customers={} orders={} payments={}",
            total(&injected.customers),
            total(&injected.orders),
            total(&injected.payments)
        );
        Ok(injected)
    }

    /// Generate and dirty a complete dataset.
    pub fn run(&self) -> GenResult<Dataset> {
        let mut dataset = self.generate_records();
        self.inject_nulls(&mut dataset)?;
        Ok(dataset)
    }
}

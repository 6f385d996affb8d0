use crate::{
    customer::CustomerField,
    error::{GenError, GenResult},
    null_injector::{check_probability, NullRule},
    order::OrderField,
    payment::PaymentField,
    rng::SeedPair,
    table::NullableField,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Identities generated by a default run.
pub const DEFAULT_CUSTOMER_COUNT: usize = 300_000;

// ── Null rates ─────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomerNullRates {
    pub email: f64,
    pub phone: f64,
    pub customer_age: f64,
    pub gender: f64,
    pub city: f64,
}

impl Default for CustomerNullRates {
    fn default() -> Self {
        Self {
            email: 0.08,
            phone: 0.07,
            customer_age: 0.06,
            gender: 0.05,
            city: 0.04,
        }
    }
}

impl CustomerNullRates {
    pub fn rules(&self) -> Vec<NullRule<CustomerField>> {
        vec![
            NullRule::new(CustomerField::Email, self.email),
            NullRule::new(CustomerField::Phone, self.phone),
            NullRule::new(CustomerField::Age, self.customer_age),
            NullRule::new(CustomerField::Gender, self.gender),
            NullRule::new(CustomerField::City, self.city),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderNullRates {
    pub price: f64,
    pub quantity: f64,
    pub variant: f64,
    pub dealer: f64,
}

impl Default for OrderNullRates {
    fn default() -> Self {
        Self {
            price: 0.08,
            quantity: 0.07,
            variant: 0.06,
            dealer: 0.05,
        }
    }
}

impl OrderNullRates {
    pub fn rules(&self) -> Vec<NullRule<OrderField>> {
        vec![
            NullRule::new(OrderField::Price, self.price),
            NullRule::new(OrderField::Quantity, self.quantity),
            NullRule::new(OrderField::Variant, self.variant),
            NullRule::new(OrderField::Dealer, self.dealer),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaymentNullRates {
    pub payment_status: f64,
    pub payment_type: f64,
}

impl Default for PaymentNullRates {
    fn default() -> Self {
        Self {
            payment_status: 0.09,
            payment_type: 0.04,
        }
    }
}

impl PaymentNullRates {
    pub fn rules(&self) -> Vec<NullRule<PaymentField>> {
        vec![
            NullRule::new(PaymentField::Status, self.payment_status),
            NullRule::new(PaymentField::Type, self.payment_type),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NullRates {
    pub customers: CustomerNullRates,
    pub orders: OrderNullRates,
    pub payments: PaymentNullRates,
}

impl NullRates {
    /// Every rate must be a probability.
    pub fn validate(&self) -> GenResult<()> {
        for r in self.customers.rules() {
            check_probability(r.field.column(), r.probability)?;
        }
        for r in self.orders.rules() {
            check_probability(r.field.column(), r.probability)?;
        }
        for r in self.payments.rules() {
            check_probability(r.field.column(), r.probability)?;
        }
        Ok(())
    }
}

// ── Run config ─────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub customer_count: usize,
    pub seeds: SeedPair,
    /// The run's "today". `None` means the runner's local date.
    pub as_of: Option<NaiveDate>,
    pub output_dir: String,
    pub null_rates: NullRates,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            customer_count: DEFAULT_CUSTOMER_COUNT,
            seeds: SeedPair::default(),
            as_of: None,
            output_dir: ".".into(),
            null_rates: NullRates::default(),
        }
    }
}

impl GeneratorConfig {
    /// Load from a JSON file. Omitted keys keep their defaults.
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Cannot read {path}: {e}"))?;
        let config: GeneratorConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Small, fully pinned config for tests.
    pub fn default_test() -> Self {
        Self {
            customer_count: 50,
            seeds: SeedPair { general: 42, fiction: 42 },
            as_of: NaiveDate::from_ymd_opt(2025, 6, 30),
            output_dir: ".".into(),
            null_rates: NullRates::default(),
        }
    }

    pub fn validate(&self) -> GenResult<()> {
        if self.customer_count == 0 {
            return Err(GenError::InvalidConfig {
                reason: "customer_count must be at least 1".into(),
            });
        }
        self.null_rates.validate()
    }
}

//! Synthetic vehicle-sales dataset generator: customers, orders and payments
//! with deliberate gaps and bad values, reproducible from a seed pair.

pub mod clock;
pub mod config;
pub mod contact;
pub mod customer;
pub mod distribution;
pub mod engine;
pub mod error;
pub mod export;
pub mod name_generator;
pub mod null_injector;
pub mod order;
pub mod payment;
pub mod reference;
pub mod report;
pub mod rng;
pub mod table;
pub mod types;
pub mod validator;

//! Mortgage affordability checks backed by an in-memory interest rate table.

pub mod config;
pub mod error;
pub mod mortgage;
pub mod telemetry;

//! Mortgage affordability checks.
//!
//! A request passes through the affordability rules, then the rate for its term is looked up
//! in the current [`RateRegistry`] snapshot and the level monthly payment is computed. Every
//! business-level failure ends as a rejected [`MortgageOutcome`] rather than an error.

pub mod domain;
pub mod evaluation;
pub mod rates;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{InterestRate, MortgageOutcome, MortgageRequest, RateEntry};
pub use evaluation::{
    monthly_payment, validate, ComputationUndefined, EvaluationFailure, EvaluationStage,
    MortgageEvaluator, Rejection,
};
pub use rates::{
    ConfiguredRateSource, RateNotFound, RateRegistry, RateSource, RateSourceError, RegistryError,
    SharedRates,
};
pub use router::mortgage_router;
pub use service::MortgageCheckService;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Annual interest rate offered for a given loan term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterestRate {
    pub term_years: u32,
    pub annual_rate_percent: Decimal,
    pub last_updated: DateTime<Utc>,
}

/// Raw `(term, rate)` pair as supplied by a rate source, before it is stamped and registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateEntry {
    pub term_years: u32,
    pub annual_rate_percent: Decimal,
}

impl RateEntry {
    pub fn new(term_years: u32, annual_rate_percent: Decimal) -> Self {
        Self {
            term_years,
            annual_rate_percent,
        }
    }
}

/// Borrower figures submitted for an affordability check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MortgageRequest {
    pub income: Decimal,
    pub term_years: i32,
    pub loan_value: Decimal,
    pub home_value: Decimal,
}

/// Result of a single evaluation.
///
/// A rejected request always carries `feasible = false` and a zero payment, with the
/// human-readable cause in `reason`. Feasible outcomes leave `reason` empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MortgageOutcome {
    pub feasible: bool,
    pub monthly_payment: Decimal,
    pub reason: String,
}

impl MortgageOutcome {
    pub fn feasible(monthly_payment: Decimal) -> Self {
        Self {
            feasible: true,
            monthly_payment,
            reason: String::new(),
        }
    }

    pub fn rejected(reason: impl Into<String>) -> Self {
        Self {
            feasible: false,
            monthly_payment: Decimal::ZERO,
            reason: reason.into(),
        }
    }
}

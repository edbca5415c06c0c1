mod source;

pub use source::{
    default_rate_entries, parse_rate_csv, parse_rate_list, ConfiguredRateSource, RateSource,
    RateSourceError,
};

use super::domain::{InterestRate, RateEntry};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use std::collections::HashSet;
use std::sync::{Arc, RwLock};
use tracing::{debug, warn};

/// Immutable table of interest rates keyed by loan term.
///
/// Entries keep the order they were supplied in. There is no way to change an entry once the
/// registry is built; a new table is built and swapped in through [`SharedRates`] instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateRegistry {
    rates: Vec<InterestRate>,
}

impl RateRegistry {
    pub fn new(entries: impl IntoIterator<Item = RateEntry>) -> Result<Self, RegistryError> {
        Self::loaded_at(entries, Utc::now())
    }

    pub fn loaded_at(
        entries: impl IntoIterator<Item = RateEntry>,
        last_updated: DateTime<Utc>,
    ) -> Result<Self, RegistryError> {
        let mut seen = HashSet::new();
        let mut rates = Vec::new();

        for entry in entries {
            if entry.term_years == 0 {
                return Err(RegistryError::InvalidTerm);
            }
            if !seen.insert(entry.term_years) {
                return Err(RegistryError::DuplicateTerm(entry.term_years));
            }
            if entry.annual_rate_percent <= Decimal::ZERO {
                warn!(
                    term_years = entry.term_years,
                    rate = %entry.annual_rate_percent,
                    "non-positive interest rate registered; checks for this term will fail"
                );
            }

            rates.push(InterestRate {
                term_years: entry.term_years,
                annual_rate_percent: entry.annual_rate_percent,
                last_updated,
            });
        }

        Ok(Self { rates })
    }

    pub fn rate_for(&self, term_years: u32) -> Result<Decimal, RateNotFound> {
        debug!(term_years, "looking up interest rate");
        self.rates
            .iter()
            .find(|rate| rate.term_years == term_years)
            .map(|rate| rate.annual_rate_percent)
            .ok_or(RateNotFound(term_years))
    }

    pub fn all(&self) -> &[InterestRate] {
        &self.rates
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

/// No rate is configured for the requested term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Interest rate not found for maturity period: {0}")]
pub struct RateNotFound(pub u32);

/// Reasons a rate table cannot be built.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("duplicate interest rate for maturity period {0}")]
    DuplicateTerm(u32),
    #[error("maturity period must be greater than zero")]
    InvalidTerm,
}

/// Current rate table shared between request handlers.
///
/// Readers clone the `Arc` of the current snapshot and keep evaluating against it even if a
/// reload swaps in a newer table meanwhile.
#[derive(Debug)]
pub struct SharedRates {
    current: RwLock<Arc<RateRegistry>>,
}

impl SharedRates {
    pub fn new(registry: RateRegistry) -> Self {
        Self {
            current: RwLock::new(Arc::new(registry)),
        }
    }

    pub fn snapshot(&self) -> Arc<RateRegistry> {
        match self.current.read() {
            Ok(guard) => Arc::clone(&*guard),
            Err(poisoned) => Arc::clone(&*poisoned.into_inner()),
        }
    }

    pub fn replace(&self, registry: RateRegistry) {
        let next = Arc::new(registry);
        match self.current.write() {
            Ok(mut guard) => *guard = next,
            Err(poisoned) => *poisoned.into_inner() = next,
        }
    }
}

use std::sync::Arc;

use tracing::{info, warn};

use super::domain::{InterestRate, MortgageOutcome, MortgageRequest};
use super::evaluation::MortgageEvaluator;
use super::rates::{RateRegistry, RateSource, RateSourceError, SharedRates};

/// Service composing the configured rate source, the live rate table and the evaluator.
pub struct MortgageCheckService<S> {
    source: Arc<S>,
    rates: SharedRates,
}

impl<S> MortgageCheckService<S>
where
    S: RateSource + 'static,
{
    /// Load the initial rate table from `source`.
    pub fn new(source: Arc<S>) -> Result<Self, RateSourceError> {
        let registry = RateRegistry::new(source.load()?)?;
        if registry.is_empty() {
            warn!("no interest rates configured; every check will fail the rate lookup");
        }
        info!(rates = registry.len(), "interest rates initialized");

        Ok(Self {
            source,
            rates: SharedRates::new(registry),
        })
    }

    /// Current rate table in configuration order.
    pub fn interest_rates(&self) -> Vec<InterestRate> {
        self.rates.snapshot().all().to_vec()
    }

    /// Evaluate a request against the current rate table.
    pub fn check(&self, request: &MortgageRequest) -> MortgageOutcome {
        info!(
            income = %request.income,
            term_years = request.term_years,
            loan_value = %request.loan_value,
            home_value = %request.home_value,
            "checking mortgage feasibility"
        );

        let snapshot = self.rates.snapshot();
        let outcome = MortgageEvaluator::new(&snapshot).evaluate(request);

        info!(
            feasible = outcome.feasible,
            monthly_payment = %outcome.monthly_payment,
            reason = %outcome.reason,
            "mortgage check complete"
        );
        outcome
    }

    /// Rebuild the rate table from the source and swap it in, returning the new entry count.
    ///
    /// The current table stays active when the source cannot be loaded.
    pub fn reload(&self) -> Result<usize, RateSourceError> {
        let registry = self
            .source
            .load()
            .and_then(|entries| RateRegistry::new(entries).map_err(RateSourceError::from))
            .map_err(|err| {
                warn!(error = %err, "interest rate reload failed; keeping current table");
                err
            })?;

        let count = registry.len();
        self.rates.replace(registry);
        info!(rates = count, "interest rates reloaded");
        Ok(count)
    }
}

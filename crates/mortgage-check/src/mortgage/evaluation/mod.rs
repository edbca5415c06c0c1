mod amortization;
mod rules;

pub use amortization::{monthly_payment, ComputationUndefined};
pub use rules::{validate, Rejection, MAX_INCOME_MULTIPLE};

use super::domain::{MortgageOutcome, MortgageRequest};
use super::rates::{RateNotFound, RateRegistry};
use rust_decimal::Decimal;
use tracing::debug;

/// Steps a request moves through; a failure ends the evaluation at the stage it occurred in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvaluationStage {
    Validating,
    RateLookup,
    Computing,
    Done,
}

impl EvaluationStage {
    pub fn label(&self) -> &'static str {
        match self {
            EvaluationStage::Validating => "validating",
            EvaluationStage::RateLookup => "rate lookup",
            EvaluationStage::Computing => "computing",
            EvaluationStage::Done => "done",
        }
    }
}

/// Expected negative results of an evaluation. Each one becomes a rejected outcome.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EvaluationFailure {
    #[error(transparent)]
    Rejected(#[from] Rejection),
    #[error(transparent)]
    RateNotFound(#[from] RateNotFound),
    #[error(transparent)]
    ComputationUndefined(#[from] ComputationUndefined),
}

impl EvaluationFailure {
    pub fn stage(&self) -> EvaluationStage {
        match self {
            EvaluationFailure::Rejected(_) => EvaluationStage::Validating,
            EvaluationFailure::RateNotFound(_) => EvaluationStage::RateLookup,
            EvaluationFailure::ComputationUndefined(_) => EvaluationStage::Computing,
        }
    }
}

/// Runs validation, rate lookup and payment calculation against one registry snapshot.
pub struct MortgageEvaluator<'r> {
    registry: &'r RateRegistry,
}

impl<'r> MortgageEvaluator<'r> {
    pub fn new(registry: &'r RateRegistry) -> Self {
        Self { registry }
    }

    pub fn evaluate(&self, request: &MortgageRequest) -> MortgageOutcome {
        match self.try_evaluate(request) {
            Ok(monthly_payment) => {
                debug!(
                    stage = EvaluationStage::Done.label(),
                    %monthly_payment,
                    "mortgage feasible"
                );
                MortgageOutcome::feasible(monthly_payment)
            }
            Err(failure) => {
                debug!(stage = failure.stage().label(), %failure, "mortgage not feasible");
                MortgageOutcome::rejected(failure.to_string())
            }
        }
    }

    pub fn try_evaluate(&self, request: &MortgageRequest) -> Result<Decimal, EvaluationFailure> {
        validate(request)?;

        let term_years =
            u32::try_from(request.term_years).map_err(|_| Rejection::TermNotPositive)?;
        let rate = self.registry.rate_for(term_years)?;
        debug!(term_years, %rate, "resolved interest rate");

        let payment = monthly_payment(request.loan_value, rate, term_years)?;
        Ok(payment)
    }
}

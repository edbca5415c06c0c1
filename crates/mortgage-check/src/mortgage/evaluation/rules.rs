use crate::mortgage::domain::MortgageRequest;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::debug;

/// Largest loan allowed, as a multiple of the borrower's income.
pub const MAX_INCOME_MULTIPLE: Decimal = dec!(4);

/// Affordability rule a request failed. The display text is the user-facing reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    #[error("An income must be greater than zero")]
    IncomeNotPositive,
    #[error("A home value must be greater than zero")]
    HomeValueNotPositive,
    #[error("A maturity period must be greater than zero")]
    TermNotPositive,
    #[error("A loan value must be greater than zero")]
    LoanValueNotPositive,
    #[error("A Mortgage cannot be more than 4 times the income")]
    ExceedsIncomeMultiple,
    #[error("A Mortgage cannot be more than the home value")]
    ExceedsHomeValue,
}

/// Applies the affordability rules in order and reports the first one that fails.
pub fn validate(request: &MortgageRequest) -> Result<(), Rejection> {
    if request.income <= Decimal::ZERO {
        return reject(Rejection::IncomeNotPositive);
    }
    if request.home_value <= Decimal::ZERO {
        return reject(Rejection::HomeValueNotPositive);
    }
    if request.term_years <= 0 {
        return reject(Rejection::TermNotPositive);
    }
    if request.loan_value <= Decimal::ZERO {
        return reject(Rejection::LoanValueNotPositive);
    }

    // Overflow means the limit is above any representable loan.
    let within_income = request
        .income
        .checked_mul(MAX_INCOME_MULTIPLE)
        .map_or(true, |max_loan| request.loan_value <= max_loan);
    if !within_income {
        return reject(Rejection::ExceedsIncomeMultiple);
    }
    if request.loan_value > request.home_value {
        return reject(Rejection::ExceedsHomeValue);
    }

    Ok(())
}

fn reject(rejection: Rejection) -> Result<(), Rejection> {
    debug!(%rejection, "mortgage request rejected");
    Err(rejection)
}

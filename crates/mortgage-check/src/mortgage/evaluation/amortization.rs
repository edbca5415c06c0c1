//! Fixed-rate annuity payment:
//!
//! ```text
//! M = P * r(1 + r)^n / ((1 + r)^n - 1)
//! ```
//!
//! where `P` is the principal, `r` the monthly rate (annual percent / 1200) and `n` the number
//! of monthly payments. All arithmetic is decimal; every explicit rounding step is half-up.

use rust_decimal::{Decimal, MathematicalOps, RoundingStrategy};
use rust_decimal_macros::dec;
use tracing::debug;

const MONTHS_PER_YEAR: u64 = 12;
const PERCENT_PER_MONTH: Decimal = dec!(1200);
const MONTHLY_RATE_SCALE: u32 = 10;
const PAYMENT_SCALE: u32 = 2;

/// The payment formula has no meaningful result for these inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ComputationUndefined {
    #[error("Interest rate must be greater than zero, got {0}")]
    NonPositiveRate(Decimal),
    #[error(
        "Monthly payment is undefined for {total_payments} payments at a monthly rate of {monthly_rate}"
    )]
    OutOfRange {
        monthly_rate: Decimal,
        total_payments: u64,
    },
    #[error("Monthly payment for a loan value of {0} rounds to zero")]
    RoundsToZero(Decimal),
}

/// Monthly payment for `loan_value` borrowed at `annual_rate_percent` over `term_years`.
pub fn monthly_payment(
    loan_value: Decimal,
    annual_rate_percent: Decimal,
    term_years: u32,
) -> Result<Decimal, ComputationUndefined> {
    if annual_rate_percent <= Decimal::ZERO {
        return Err(ComputationUndefined::NonPositiveRate(annual_rate_percent));
    }

    let monthly_rate = (annual_rate_percent / PERCENT_PER_MONTH)
        .round_dp_with_strategy(MONTHLY_RATE_SCALE, RoundingStrategy::MidpointAwayFromZero);
    let total_payments = u64::from(term_years) * MONTHS_PER_YEAR;
    let out_of_range = || ComputationUndefined::OutOfRange {
        monthly_rate,
        total_payments,
    };

    let growth = (Decimal::ONE + monthly_rate)
        .checked_powu(total_payments)
        .ok_or_else(out_of_range)?;
    let numerator = monthly_rate.checked_mul(growth).ok_or_else(out_of_range)?;
    // Zero when the monthly rate rounds away entirely; checked_div rejects it.
    let denominator = growth - Decimal::ONE;
    let factor = numerator.checked_div(denominator).ok_or_else(out_of_range)?;

    let payment = loan_value
        .checked_mul(factor)
        .ok_or_else(out_of_range)?
        .round_dp_with_strategy(PAYMENT_SCALE, RoundingStrategy::MidpointAwayFromZero);

    if payment.is_zero() {
        return Err(ComputationUndefined::RoundsToZero(loan_value));
    }

    debug!(
        %monthly_rate,
        total_payments,
        %payment,
        "computed monthly payment"
    );

    Ok(payment)
}

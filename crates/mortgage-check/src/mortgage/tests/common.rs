use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use axum::response::Response;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::Value;

use crate::mortgage::domain::{MortgageRequest, RateEntry};
use crate::mortgage::rates::{RateRegistry, RateSource, RateSourceError};
use crate::mortgage::service::MortgageCheckService;

pub(super) fn rate_entries() -> Vec<RateEntry> {
    vec![
        RateEntry::new(10, dec!(3.0)),
        RateEntry::new(20, dec!(3.5)),
        RateEntry::new(30, dec!(4.0)),
    ]
}

pub(super) fn registry() -> RateRegistry {
    RateRegistry::new(rate_entries()).expect("valid rate table")
}

pub(super) fn request(
    income: Decimal,
    term_years: i32,
    loan_value: Decimal,
    home_value: Decimal,
) -> MortgageRequest {
    MortgageRequest {
        income,
        term_years,
        loan_value,
        home_value,
    }
}

/// Borrower earning 30000 asking 10000 on a 50000 home over ten years.
pub(super) fn affordable_request() -> MortgageRequest {
    request(dec!(30000), 10, dec!(10000), dec!(50000))
}

/// Source whose second and later loads return a different table, or fail when `broken`.
#[derive(Default)]
pub(super) struct SwitchingSource {
    loaded: AtomicBool,
    pub(super) broken: AtomicBool,
}

impl RateSource for SwitchingSource {
    fn load(&self) -> Result<Vec<RateEntry>, RateSourceError> {
        if self.broken.load(Ordering::SeqCst) {
            return Err(RateSourceError::InvalidEntry {
                entry: "10:x".to_string(),
                reason: "invalid rate 'x'".to_string(),
            });
        }

        if self.loaded.swap(true, Ordering::SeqCst) {
            Ok(vec![
                RateEntry::new(10, dec!(4.0)),
                RateEntry::new(25, dec!(3.75)),
            ])
        } else {
            Ok(rate_entries())
        }
    }
}

pub(super) fn build_service() -> Arc<MortgageCheckService<Vec<RateEntry>>> {
    Arc::new(MortgageCheckService::new(Arc::new(rate_entries())).expect("service builds"))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 4096)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

//! End-to-end mortgage checks through the public service facade, covering the scenarios the
//! HTTP API promises: one feasible request and each way a request can be turned down.

use std::io::Cursor;
use std::sync::Arc;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use mortgage_check::mortgage::rates::parse_rate_csv;
use mortgage_check::mortgage::{
    ConfiguredRateSource, MortgageCheckService, MortgageEvaluator, MortgageOutcome,
    MortgageRequest, RateEntry, RateRegistry,
};

fn request(
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

fn service() -> MortgageCheckService<ConfiguredRateSource> {
    let source = ConfiguredRateSource::Inline("10:3.0,20:3.5,30:4.0".to_string());
    MortgageCheckService::new(Arc::new(source)).expect("inline rates load")
}

#[test]
fn feasible_request_reports_monthly_payment() {
    let outcome = service().check(&request(dec!(30000), 10, dec!(10000), dec!(50000)));

    assert_eq!(outcome, MortgageOutcome::feasible(dec!(96.56)));
}

#[test]
fn rejections_follow_rule_order() {
    let service = service();
    let cases = [
        (
            request(dec!(0), 50, dec!(10000), dec!(50000)),
            "An income must be greater than zero",
        ),
        (
            request(dec!(2000), 50, dec!(200000), dec!(0)),
            "A home value must be greater than zero",
        ),
        (
            request(dec!(2000), 0, dec!(200000), dec!(600000)),
            "A maturity period must be greater than zero",
        ),
        (
            request(dec!(2000), 50, dec!(0), dec!(50000)),
            "A loan value must be greater than zero",
        ),
        (
            request(dec!(3000), 10, dec!(100000), dec!(2000000)),
            "A Mortgage cannot be more than 4 times the income",
        ),
        (
            request(dec!(30000), 10, dec!(100000), dec!(2000)),
            "A Mortgage cannot be more than the home value",
        ),
        (
            request(dec!(30000), 50, dec!(10000), dec!(50000)),
            "Interest rate not found for maturity period: 50",
        ),
    ];

    for (req, reason) in cases {
        let outcome = service.check(&req);
        assert_eq!(
            outcome,
            MortgageOutcome::rejected(reason),
            "request {req:?}"
        );
    }
}

#[test]
fn rates_listing_matches_configuration() {
    let rates = service().interest_rates();

    let pairs: Vec<(u32, Decimal)> = rates
        .iter()
        .map(|rate| (rate.term_years, rate.annual_rate_percent))
        .collect();
    assert_eq!(
        pairs,
        vec![(10, dec!(3.0)), (20, dec!(3.5)), (30, dec!(4.0))]
    );
}

#[test]
fn csv_rate_table_drives_evaluation() {
    let csv = "term_years,annual_rate_percent\n10,4.0\n";
    let registry = RateRegistry::new(parse_rate_csv(Cursor::new(csv)).expect("csv parses"))
        .expect("table builds");

    let outcome = MortgageEvaluator::new(&registry)
        .evaluate(&request(dec!(30000), 10, dec!(10000), dec!(50000)));

    assert_eq!(outcome.monthly_payment, dec!(101.25));
}

#[test]
fn duplicate_terms_fail_service_start() {
    let source = vec![RateEntry::new(10, dec!(3.0)), RateEntry::new(10, dec!(4.0))];

    let result = MortgageCheckService::new(Arc::new(source));

    assert!(result.is_err());
}

#[test]
fn outcome_serializes_with_three_fields() {
    let outcome = service().check(&request(dec!(100000), 10, dec!(30000), dec!(2000)));

    let value = serde_json::to_value(&outcome).expect("serializes");

    assert_eq!(
        value,
        serde_json::json!({
            "feasible": false,
            "monthly_payment": "0",
            "reason": "A Mortgage cannot be more than the home value"
        })
    );
}

use metrics_exporter_prometheus::PrometheusHandle;
use mortgage_check::config::RatesConfig;
use mortgage_check::error::AppError;
use mortgage_check::mortgage::{ConfiguredRateSource, MortgageCheckService};
use rust_decimal::Decimal;
use std::str::FromStr;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) type ConfiguredService = MortgageCheckService<ConfiguredRateSource>;

pub(crate) fn build_service(config: &RatesConfig) -> Result<Arc<ConfiguredService>, AppError> {
    let source = config.source();
    info!(source = %source.describe(), "loading interest rates");
    let service = MortgageCheckService::new(Arc::new(source))?;
    Ok(Arc::new(service))
}

pub(crate) fn parse_decimal(raw: &str) -> Result<Decimal, String> {
    Decimal::from_str(raw.trim())
        .map_err(|err| format!("failed to parse '{raw}' as a decimal amount ({err})"))
}

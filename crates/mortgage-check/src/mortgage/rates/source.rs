use super::RegistryError;
use crate::mortgage::domain::RateEntry;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;
use std::io::Read;
use std::path::PathBuf;
use std::str::FromStr;

/// Supplies the `(term, rate)` pairs a registry is built from.
pub trait RateSource: Send + Sync {
    fn load(&self) -> Result<Vec<RateEntry>, RateSourceError>;
}

/// Rate sources selectable through configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfiguredRateSource {
    Defaults,
    Inline(String),
    CsvFile(PathBuf),
}

impl ConfiguredRateSource {
    pub fn describe(&self) -> String {
        match self {
            ConfiguredRateSource::Defaults => "built-in defaults".to_string(),
            ConfiguredRateSource::Inline(_) => "inline rate list".to_string(),
            ConfiguredRateSource::CsvFile(path) => format!("csv file {}", path.display()),
        }
    }
}

impl RateSource for ConfiguredRateSource {
    fn load(&self) -> Result<Vec<RateEntry>, RateSourceError> {
        match self {
            ConfiguredRateSource::Defaults => Ok(default_rate_entries()),
            ConfiguredRateSource::Inline(raw) => parse_rate_list(raw),
            ConfiguredRateSource::CsvFile(path) => {
                let file = std::fs::File::open(path)?;
                parse_rate_csv(file)
            }
        }
    }
}

impl RateSource for Vec<RateEntry> {
    fn load(&self) -> Result<Vec<RateEntry>, RateSourceError> {
        Ok(self.clone())
    }
}

pub fn default_rate_entries() -> Vec<RateEntry> {
    vec![
        RateEntry::new(10, dec!(3.0)),
        RateEntry::new(15, dec!(3.25)),
        RateEntry::new(20, dec!(3.5)),
        RateEntry::new(30, dec!(4.0)),
    ]
}

/// Parses `term:rate` pairs separated by commas, e.g. `10:3.0, 20:3.5`.
pub fn parse_rate_list(raw: &str) -> Result<Vec<RateEntry>, RateSourceError> {
    raw.split(',')
        .map(str::trim)
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let Some((term, rate)) = pair.split_once(':') else {
                return Err(RateSourceError::InvalidEntry {
                    entry: pair.to_string(),
                    reason: "expected <term>:<rate>".to_string(),
                });
            };
            parse_entry(term, rate).map_err(|reason| RateSourceError::InvalidEntry {
                entry: pair.to_string(),
                reason,
            })
        })
        .collect()
}

/// Reads a CSV table with the header `term_years,annual_rate_percent`.
pub fn parse_rate_csv<R: Read>(reader: R) -> Result<Vec<RateEntry>, RateSourceError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut entries = Vec::new();

    for record in csv_reader.deserialize::<RateRow>() {
        let row = record?;
        let entry = parse_entry(&row.term_years, &row.annual_rate_percent).map_err(|reason| {
            RateSourceError::InvalidEntry {
                entry: format!("{},{}", row.term_years, row.annual_rate_percent),
                reason,
            }
        })?;
        entries.push(entry);
    }

    Ok(entries)
}

#[derive(Debug, Deserialize)]
struct RateRow {
    term_years: String,
    annual_rate_percent: String,
}

fn parse_entry(term: &str, rate: &str) -> Result<RateEntry, String> {
    let term_years = term
        .trim()
        .parse::<u32>()
        .map_err(|err| format!("invalid term '{}': {err}", term.trim()))?;
    let annual_rate_percent = Decimal::from_str(rate.trim())
        .map_err(|err| format!("invalid rate '{}': {err}", rate.trim()))?;
    Ok(RateEntry::new(term_years, annual_rate_percent))
}

/// Failures while loading a rate table.
#[derive(Debug, thiserror::Error)]
pub enum RateSourceError {
    #[error("failed to read rate table: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid rate CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("invalid rate entry '{entry}': {reason}")]
    InvalidEntry { entry: String, reason: String },
    #[error(transparent)]
    Registry(#[from] RegistryError),
}

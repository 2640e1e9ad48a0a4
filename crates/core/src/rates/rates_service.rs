//! Loads the monthly risk-free-rate reference file and resamples it to
//! annual averages.
//!
//! The reference file is a CSV export of a monthly interest-rate series
//! (EURIBOR 3M by default): a header row, the observation date in the
//! first column and the rate in the third, quoted as a human-readable
//! percentage ("3.50" meaning 3.5%). Rows may appear in any order.

use std::collections::BTreeMap;
use std::path::Path;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use csv::ReaderBuilder;
use log::debug;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::rates_model::YearlyRate;
use crate::constants::DECIMAL_PRECISION;
use crate::errors::{Error, Result};

/// Column index of the observation date in the reference file.
const DATE_COLUMN: usize = 0;

/// Column index of the percentage rate in the reference file.
const RATE_COLUMN: usize = 2;

/// Load the reference file and produce year-indexed average rates.
///
/// Per month, only the last observation is kept; per year, the monthly
/// fractions are averaged. The yearly mean is a documented
/// approximation of an effective annual rate, deliberately not a
/// compounding calculation.
pub fn load_annual_risk_free_rates(path: &Path) -> Result<Vec<YearlyRate>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(|e| Error::RateFile(format!("{}: {}", path.display(), e)))?;

    // Last observation per calendar month, keyed for date order
    let mut monthly: BTreeMap<(i32, u32), (NaiveDate, Decimal)> = BTreeMap::new();

    for record in reader.records() {
        let record = record.map_err(|e| Error::RateFile(e.to_string()))?;

        let date_field = record.get(DATE_COLUMN).unwrap_or_default().trim();
        let rate_field = record.get(RATE_COLUMN).unwrap_or_default().trim();

        let date = match NaiveDate::parse_from_str(date_field, "%Y-%m-%d") {
            Ok(date) => date,
            Err(_) => {
                debug!("Skipping rate row with unparseable date '{}'", date_field);
                continue;
            }
        };

        let rate_pct = match Decimal::from_str(rate_field) {
            Ok(rate) => rate,
            Err(_) => {
                debug!("Skipping rate row with unparseable value '{}'", rate_field);
                continue;
            }
        };

        let key = (date.year(), date.month());
        match monthly.get(&key) {
            Some((existing_date, _)) if *existing_date >= date => {}
            _ => {
                monthly.insert(key, (date, rate_pct));
            }
        }
    }

    if monthly.is_empty() {
        return Err(Error::RateFile(format!(
            "no usable rate observations in {}",
            path.display()
        )));
    }

    // Percentage to fraction, then mean per year
    let mut yearly: BTreeMap<i32, Vec<Decimal>> = BTreeMap::new();
    for ((year, _), (_, rate_pct)) in monthly {
        yearly.entry(year).or_default().push(rate_pct / dec!(100));
    }

    Ok(yearly
        .into_iter()
        .map(|(year, fractions)| {
            let sum: Decimal = fractions.iter().sum();
            let mean = sum / Decimal::from(fractions.len());
            YearlyRate::new(year, mean.round_dp(DECIMAL_PRECISION))
        })
        .collect())
}

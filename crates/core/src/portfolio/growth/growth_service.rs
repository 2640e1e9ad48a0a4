//! Normalizes aligned prices into comparable growth indexes.
//!
//! Both operations work on the effective window of the price matrix:
//! the dense range where every portfolio asset already exists. Values
//! are rebased so the first observation equals the 10,000-unit notional
//! and rounded to whole units using round-half-to-even (the rounding
//! policy for the whole crate).

use rust_decimal::Decimal;

use super::growth_model::{GrowthPoint, GrowthSeries};
use crate::constants::GROWTH_NOTIONAL;
use crate::errors::{Error, Result};
use crate::portfolio::alignment::{PriceMatrix, PriceWindow};
use crate::portfolio::portfolio_model::{PortfolioDefinition, ResolvedHolding};

/// Label of the aggregated portfolio series.
pub const PORTFOLIO_SERIES_LABEL: &str = "Portfolio Value";

/// Growth index computations over an aligned price matrix.
pub struct GrowthService;

impl GrowthService {
    /// Per-asset growth of the notional invested at the window start.
    ///
    /// Each column is divided by its first value in the effective window
    /// and scaled to the notional; columns are relabeled from ticker to
    /// the resolved display name.
    pub fn asset_growth_index(
        matrix: &PriceMatrix,
        holdings: &[ResolvedHolding],
    ) -> Result<Vec<GrowthSeries>> {
        let window = matrix.effective_window()?;

        let mut series = Vec::with_capacity(window.tickers().len());
        for (col, ticker) in window.tickers().iter().enumerate() {
            let values = Self::rebase(&window.column(col), ticker)?;
            let label = holdings
                .iter()
                .find(|h| &h.ticker == ticker)
                .map(|h| h.name.clone())
                .unwrap_or_else(|| ticker.clone());
            series.push(GrowthSeries::new(label, Self::with_dates(&window, values)));
        }

        Ok(series)
    }

    /// Growth of the notional invested in the weighted portfolio.
    ///
    /// The weighted row-wise sum of the effective window is rebased with
    /// the same policy as the per-asset indexes. Weights are ordered
    /// ascending; the sum is commutative, so this only fixes the
    /// presentation order of contributions.
    pub fn portfolio_growth_index(
        matrix: &PriceMatrix,
        definition: &PortfolioDefinition,
    ) -> Result<GrowthSeries> {
        let window = matrix.effective_window()?;

        let mut weights = definition.weights();
        weights.sort_by(|a, b| a.1.cmp(&b.1));

        let mut columns = Vec::with_capacity(weights.len());
        for (ticker, weight) in &weights {
            let col = window.column_index(ticker).ok_or_else(|| {
                Error::Calculation(format!("Ticker '{}' missing from price matrix", ticker))
            })?;
            columns.push((col, *weight));
        }

        let weighted: Vec<Decimal> = window
            .rows()
            .iter()
            .map(|row| columns.iter().map(|(col, w)| row[*col] * *w).sum())
            .collect();

        let values = Self::rebase(&weighted, PORTFOLIO_SERIES_LABEL)?;
        Ok(GrowthSeries::new(
            PORTFOLIO_SERIES_LABEL,
            Self::with_dates(&window, values),
        ))
    }

    /// Rebase a value series to the notional at its first observation.
    ///
    /// Rounded to whole units, round-half-to-even.
    fn rebase(values: &[Decimal], label: &str) -> Result<Vec<Decimal>> {
        let first = values
            .first()
            .copied()
            .ok_or(Error::EmptyOverlapWindow)?;

        if first.is_zero() {
            return Err(Error::Calculation(format!(
                "First observation of '{}' is zero, cannot rebase",
                label
            )));
        }

        Ok(values
            .iter()
            .map(|v| (v * GROWTH_NOTIONAL / first).round())
            .collect())
    }

    fn with_dates(window: &PriceWindow, values: Vec<Decimal>) -> Vec<GrowthPoint> {
        window
            .dates()
            .iter()
            .zip(values)
            .map(|(date, value)| GrowthPoint {
                date: *date,
                value,
            })
            .collect()
    }
}

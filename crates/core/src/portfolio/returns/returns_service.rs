//! Derives annual return statistics from the portfolio value series.

use chrono::Datelike;
use num_traits::ToPrimitive;
use rust_decimal::{Decimal, MathematicalOps};
use rust_decimal_macros::dec;

use super::returns_model::{AnnualReturn, ExcessReturn, ReturnBin, ReturnSign};
use crate::constants::DECIMAL_PRECISION;
use crate::errors::{Error, Result};
use crate::portfolio::growth::GrowthSeries;
use crate::rates::YearlyRate;

/// Return and risk statistics over the portfolio value series.
pub struct ReturnsService;

impl ReturnsService {
    /// Year-over-year percentage returns of the value series.
    ///
    /// The series is resampled to yearly granularity by taking the last
    /// observation per calendar year; the first sampled year has no
    /// prior value and is dropped.
    pub fn annual_returns(value_series: &GrowthSeries) -> Vec<AnnualReturn> {
        // Last observation per calendar year (points are in date order)
        let mut year_end: Vec<(i32, Decimal)> = Vec::new();
        for point in &value_series.points {
            let year = point.date.year();
            match year_end.last_mut() {
                Some((last_year, value)) if *last_year == year => *value = point.value,
                _ => year_end.push((year, point.value)),
            }
        }

        year_end
            .windows(2)
            .filter_map(|pair| {
                let (_, prev) = pair[0];
                let (year, curr) = pair[1];
                if prev.is_zero() {
                    // A zero year-end value cannot anchor a percentage change
                    return None;
                }
                let return_pct = ((curr / prev - Decimal::ONE) * dec!(100))
                    .round_dp(DECIMAL_PRECISION);
                Some(AnnualReturn {
                    year,
                    return_pct,
                    sign: ReturnSign::of(return_pct),
                })
            })
            .collect()
    }

    /// Bin annual returns into a symmetric histogram.
    ///
    /// The bin region spans `[-r, r)` where `r` is wide enough to cover
    /// both extremes with one spare bin on each side; bins are
    /// left-closed and every bin is emitted even when empty.
    pub fn return_histogram(returns: &[AnnualReturn], bin_width: u32) -> Result<Vec<ReturnBin>> {
        if returns.is_empty() {
            return Err(Error::InsufficientHistory(
                "No annual returns to bin".to_string(),
            ));
        }
        if bin_width == 0 {
            return Err(Error::Calculation(
                "Histogram bin width must be positive".to_string(),
            ));
        }

        let width = Decimal::from(bin_width);
        let min = returns
            .iter()
            .map(|r| r.return_pct)
            .min()
            .unwrap_or(Decimal::ZERO);
        let max = returns
            .iter()
            .map(|r| r.return_pct)
            .max()
            .unwrap_or(Decimal::ZERO);

        let min_bin = ((min / width - Decimal::ONE).floor() * width)
            .to_i64()
            .ok_or_else(|| Error::Calculation("Histogram bounds overflow".to_string()))?;
        let max_bin = ((max / width + Decimal::ONE).floor() * width)
            .to_i64()
            .ok_or_else(|| Error::Calculation("Histogram bounds overflow".to_string()))?;

        let bin_region = min_bin.abs().max(max_bin.abs());

        let mut bins = Vec::new();
        let mut lower = -bin_region;
        while lower < bin_region {
            let low = Decimal::from(lower);
            let high = low + width;
            let count = returns
                .iter()
                .filter(|r| r.return_pct >= low && r.return_pct < high)
                .count();
            bins.push(ReturnBin {
                lower,
                label: format!("{} to {} %", lower, lower + i64::from(bin_width)),
                count,
                sign: ReturnSign::of(low),
            });
            lower += i64::from(bin_width);
        }

        Ok(bins)
    }

    /// Portfolio return minus risk-free rate for each common full year.
    ///
    /// Annual returns convert from percentage to fraction, join the
    /// risk-free series on year (years present on only one side drop
    /// out), and years not yet fully elapsed are excluded.
    pub fn excess_returns(
        returns: &[AnnualReturn],
        risk_free: &[YearlyRate],
        as_of_year: i32,
    ) -> Vec<ExcessReturn> {
        returns
            .iter()
            .filter(|r| r.year < as_of_year)
            .filter_map(|r| {
                let rate = risk_free.iter().find(|rf| rf.year == r.year)?;
                let portfolio_return = r.return_pct / dec!(100);
                Some(ExcessReturn {
                    year: r.year,
                    portfolio_return,
                    risk_free_rate: rate.rate,
                    excess: portfolio_return - rate.rate,
                })
            })
            .collect()
    }

    /// Simplified Sharpe statistic: mean excess return over the sample
    /// standard deviation of the joined annual returns (fractions).
    ///
    /// Sample (n-1) standard deviation, matching the reference behavior.
    /// With fewer than two full years the statistic is undefined.
    pub fn sharpe_ratio(excess_returns: &[ExcessReturn]) -> Result<Decimal> {
        let n = excess_returns.len();
        if n < 2 {
            return Err(Error::InsufficientHistory(format!(
                "Sharpe ratio requires at least 2 full years of data, got {}",
                n
            )));
        }

        let count = Decimal::from(n);
        let mean_excess: Decimal =
            excess_returns.iter().map(|e| e.excess).sum::<Decimal>() / count;

        let returns: Vec<Decimal> = excess_returns.iter().map(|e| e.portfolio_return).collect();
        let mean_return: Decimal = returns.iter().sum::<Decimal>() / count;
        let sum_squared_diff: Decimal = returns
            .iter()
            .map(|r| {
                let diff = *r - mean_return;
                diff * diff
            })
            .sum();
        let variance = sum_squared_diff / (count - Decimal::ONE);

        let stddev = variance.sqrt().unwrap_or(Decimal::ZERO);
        if stddev.is_zero() {
            return Err(Error::Calculation(
                "Annual returns have zero variance, Sharpe ratio is undefined".to_string(),
            ));
        }

        Ok((mean_excess / stddev).round_dp(DECIMAL_PRECISION))
    }
}

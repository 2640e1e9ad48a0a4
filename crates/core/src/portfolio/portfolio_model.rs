//! Portfolio definition and validation.
//!
//! A definition is the user's (ticker, allocation) input. Validation
//! happens on construction so every service downstream can rely on the
//! invariants: tickers unique, each allocation in [0, 100], allocations
//! totalling exactly 100.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::constants::ALLOCATION_TOTAL;
use crate::errors::{Error, Result};

/// One (ticker, allocation) pair as entered by the user.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Holding {
    /// Ticker symbol (e.g., "VWCE.DE")
    pub ticker: String,

    /// Percentage of portfolio value assigned to this ticker, in [0, 100]
    pub allocation: Decimal,
}

impl Holding {
    /// Create a new holding.
    pub fn new(ticker: impl Into<String>, allocation: Decimal) -> Self {
        Self {
            ticker: ticker.into(),
            allocation,
        }
    }
}

/// A validated portfolio definition.
///
/// Construction is the only way to obtain one, so holders can assume the
/// allocation invariants throughout the pipeline.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PortfolioDefinition {
    holdings: Vec<Holding>,
}

impl PortfolioDefinition {
    /// Validate and build a definition from user input.
    ///
    /// # Errors
    ///
    /// `Error::Validation` for an empty portfolio, duplicate tickers or
    /// an out-of-range allocation; `Error::AllocationSumInvalid` when
    /// the allocations do not total exactly 100.
    pub fn new(holdings: Vec<Holding>) -> Result<Self> {
        if holdings.is_empty() {
            return Err(Error::Validation(
                "Portfolio must contain at least one asset".to_string(),
            ));
        }

        for holding in &holdings {
            if holding.ticker.trim().is_empty() {
                return Err(Error::Validation("Ticker must not be empty".to_string()));
            }
            if holding.allocation < Decimal::ZERO || holding.allocation > ALLOCATION_TOTAL {
                return Err(Error::Validation(format!(
                    "Allocation of '{}' must be between 0 and 100, got {}",
                    holding.ticker, holding.allocation
                )));
            }
        }

        for (i, holding) in holdings.iter().enumerate() {
            if holdings[..i].iter().any(|h| h.ticker == holding.ticker) {
                return Err(Error::Validation(format!(
                    "Duplicate ticker '{}' in portfolio",
                    holding.ticker
                )));
            }
        }

        let total: Decimal = holdings.iter().map(|h| h.allocation).sum();
        if total != ALLOCATION_TOTAL {
            return Err(Error::AllocationSumInvalid { total });
        }

        Ok(Self { holdings })
    }

    /// Holdings in user insertion order.
    pub fn holdings(&self) -> &[Holding] {
        &self.holdings
    }

    /// Tickers in insertion order.
    pub fn tickers(&self) -> Vec<String> {
        self.holdings.iter().map(|h| h.ticker.clone()).collect()
    }

    /// Allocation weights (allocation / 100) per ticker, insertion order.
    ///
    /// For a valid definition these sum to exactly 1.
    pub fn weights(&self) -> Vec<(String, Decimal)> {
        self.holdings
            .iter()
            .map(|h| (h.ticker.clone(), h.allocation / dec!(100)))
            .collect()
    }
}

/// A holding with its provider-resolved identity joined in.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedHolding {
    /// Ticker symbol
    pub ticker: String,

    /// Display name resolved by the market data provider
    pub name: String,

    /// Trading currency
    pub currency: String,

    /// Percentage of portfolio value assigned to this ticker
    pub allocation: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_asset_holdings() -> Vec<Holding> {
        vec![
            Holding::new("VWCE.DE", dec!(90)),
            Holding::new("IUSN.DE", dec!(10)),
        ]
    }

    #[test]
    fn test_valid_definition() {
        let definition = PortfolioDefinition::new(two_asset_holdings()).unwrap();
        assert_eq!(definition.tickers(), vec!["VWCE.DE", "IUSN.DE"]);
    }

    #[test]
    fn test_weights_sum_to_one() {
        let definition = PortfolioDefinition::new(two_asset_holdings()).unwrap();
        let total: Decimal = definition.weights().iter().map(|(_, w)| *w).sum();
        assert_eq!(total, Decimal::ONE);
    }

    #[test]
    fn test_fractional_allocations_accepted() {
        let definition = PortfolioDefinition::new(vec![
            Holding::new("A", dec!(33.5)),
            Holding::new("B", dec!(66.5)),
        ])
        .unwrap();
        let total: Decimal = definition.weights().iter().map(|(_, w)| *w).sum();
        assert_eq!(total, Decimal::ONE);
    }

    #[test]
    fn test_sum_not_100_rejected() {
        let err = PortfolioDefinition::new(vec![
            Holding::new("VWCE.DE", dec!(90)),
            Holding::new("IUSN.DE", dec!(5)),
        ])
        .unwrap_err();
        assert!(matches!(err, Error::AllocationSumInvalid { total } if total == dec!(95)));
    }

    #[test]
    fn test_duplicate_ticker_rejected() {
        let err = PortfolioDefinition::new(vec![
            Holding::new("VWCE.DE", dec!(50)),
            Holding::new("VWCE.DE", dec!(50)),
        ])
        .unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[test]
    fn test_out_of_range_allocation_rejected() {
        let err = PortfolioDefinition::new(vec![
            Holding::new("VWCE.DE", dec!(150)),
            Holding::new("IUSN.DE", dec!(-50)),
        ])
        .unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[test]
    fn test_empty_portfolio_rejected() {
        let err = PortfolioDefinition::new(vec![]).unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }
}

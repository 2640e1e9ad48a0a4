//! Core error types for the Foliolens dashboard.
//!
//! Every failure the pipeline can produce is a variant here with a
//! human-readable message; the presentation layer displays `Display`
//! output directly and aborts the current render cycle. Nothing is
//! retried and there is no partial-result mode.

use rust_decimal::Decimal;
use thiserror::Error;

use foliolens_market_data::MarketDataError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the dashboard pipeline.
#[derive(Error, Debug)]
pub enum Error {
    /// The market data provider has no record for a ticker.
    #[error("Ticker '{0}' doesn't exist")]
    UnknownTicker(String),

    /// Portfolio allocations do not total 100%.
    #[error("Sum of allocation across all assets must be 100, got {total}")]
    AllocationSumInvalid {
        /// The total the submitted allocations actually add up to
        total: Decimal,
    },

    /// No common date range across all portfolio assets.
    #[error("Portfolio assets share no overlapping price history")]
    EmptyOverlapWindow,

    /// Not enough annual data for a statistic requiring variance.
    #[error("Insufficient history: {0}")]
    InsufficientHistory(String),

    /// Transport or provider failure while fetching market data.
    #[error("Failed to fetch market data: {0}")]
    DataFetch(String),

    /// Input validation failed.
    #[error("Input validation failed: {0}")]
    Validation(String),

    /// A numeric transformation hit an undefined case (zero first
    /// observation, empty bin range) and refused to emit non-finite
    /// values.
    #[error("Calculation failed: {0}")]
    Calculation(String),

    /// The risk-free-rate reference file could not be read or parsed.
    #[error("Failed to load interest rate data: {0}")]
    RateFile(String),
}

impl From<MarketDataError> for Error {
    fn from(err: MarketDataError) -> Self {
        match err {
            MarketDataError::SymbolNotFound(symbol) => Error::UnknownTicker(symbol),
            other => Error::DataFetch(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_symbol_not_found_maps_to_unknown_ticker() {
        let err: Error = MarketDataError::SymbolNotFound("NOPE.DE".to_string()).into();
        assert!(matches!(err, Error::UnknownTicker(ref s) if s == "NOPE.DE"));
    }

    #[test]
    fn test_provider_error_maps_to_data_fetch() {
        let err: Error = MarketDataError::ProviderError {
            provider: "YAHOO".to_string(),
            message: "boom".to_string(),
        }
        .into();
        assert!(matches!(err, Error::DataFetch(_)));
    }

    #[test]
    fn test_allocation_message_includes_total() {
        let err = Error::AllocationSumInvalid { total: dec!(95) };
        assert_eq!(
            format!("{}", err),
            "Sum of allocation across all assets must be 100, got 95"
        );
    }
}

//! Error types for the market data crate.

use thiserror::Error;

/// Errors that can occur during market data operations.
///
/// The dashboard surfaces "this ticker does not exist" differently from
/// "the provider is unreachable", so those cases stay separate variants
/// instead of collapsing into one transport error.
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// The requested symbol was not found by the provider.
    /// This is a terminal error - retrying won't help.
    #[error("Symbol not found: {0}")]
    SymbolNotFound(String),

    /// The symbol resolves but the provider returned zero usable quotes.
    #[error("No price history available for: {0}")]
    NoPriceHistory(String),

    /// A provider-specific error occurred.
    #[error("Provider error: {provider} - {message}")]
    ProviderError {
        /// The provider that returned the error
        provider: String,
        /// The error message from the provider
        message: String,
    },

    /// The provider returned data that failed validation checks.
    #[error("Validation failed: {message}")]
    ValidationFailed {
        /// Description of the validation failure
        message: String,
    },

    /// A network error occurred while communicating with a provider.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl MarketDataError {
    /// True when the failure means the ticker itself is unresolvable,
    /// as opposed to a transient provider or transport problem.
    pub fn is_unknown_symbol(&self) -> bool {
        matches!(self, Self::SymbolNotFound(_))
    }
}

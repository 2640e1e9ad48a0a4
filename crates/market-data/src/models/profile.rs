use serde::{Deserialize, Serialize};

/// Resolved identity for one ticker, immutable for a session.
///
/// A ticker with no resolvable display name is treated as unknown by the
/// providers, so `name` is never empty here.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TickerProfile {
    /// The ticker symbol as requested (e.g., "VWCE.DE")
    pub symbol: String,

    /// Display name resolved by the provider
    pub name: String,

    /// Trading currency (ISO 4217, e.g., "EUR")
    pub currency: String,
}

impl TickerProfile {
    /// Create a new ticker profile.
    pub fn new(
        symbol: impl Into<String>,
        name: impl Into<String>,
        currency: impl Into<String>,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            name: name.into(),
            currency: currency.into(),
        }
    }
}

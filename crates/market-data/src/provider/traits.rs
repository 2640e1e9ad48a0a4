//! Market data provider trait definition.

use async_trait::async_trait;

use crate::errors::MarketDataError;
use crate::models::{PricePoint, TickerProfile};

/// Trait for market data providers.
///
/// Implement this trait to add support for a new market data source.
/// Both operations cover one ticker at a time; the dashboard core fans
/// out over the portfolio and joins the results.
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Unique identifier for this provider.
    ///
    /// Should be a constant string like "YAHOO". Used for logging and
    /// error attribution.
    fn id(&self) -> &'static str;

    /// Resolve the profile (display name, currency) for a ticker.
    ///
    /// # Returns
    ///
    /// The resolved profile, or `MarketDataError::SymbolNotFound` when
    /// the provider has no record for the ticker. A record without a
    /// display name counts as not found.
    async fn get_profile(&self, symbol: &str) -> Result<TickerProfile, MarketDataError>;

    /// Fetch the maximal available monthly closing-price history.
    ///
    /// # Returns
    ///
    /// Price points ordered by date ascending, one per provider bar.
    /// `MarketDataError::NoPriceHistory` when the symbol resolves but
    /// yields zero usable quotes.
    async fn get_monthly_history(&self, symbol: &str)
        -> Result<Vec<PricePoint>, MarketDataError>;
}

//! Memoizing quote client - facade over the market-data crate.
//!
//! Every dashboard render re-runs the full pipeline, so without a cache
//! each parameter change would re-fetch every ticker. The client
//! memoizes provider responses per ticker for the process lifetime:
//! identical inputs within a session return identical cached outputs
//! without another network round-trip. There is no eviction; a bounded
//! or expiring map could be substituted without affecting correctness.
//!
//! Errors are never cached - a failed fetch is retried on the next
//! render cycle the user triggers.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use log::debug;
use tokio::sync::RwLock;

use foliolens_market_data::{MarketDataProvider, TickerProfile};

use super::model::PriceSeries;
use crate::errors::Result;

/// Trait for resolved, session-cached market data access.
#[async_trait]
pub trait QuoteClientTrait: Send + Sync {
    /// Resolve display name and currency for a ticker.
    async fn resolve_profile(&self, ticker: &str) -> Result<TickerProfile>;

    /// Maximal available monthly history for a ticker, month-end aligned.
    async fn monthly_history(&self, ticker: &str) -> Result<PriceSeries>;
}

/// Memoizing client wrapping a [`MarketDataProvider`].
pub struct CachedQuoteClient {
    provider: Arc<dyn MarketDataProvider>,
    profiles: RwLock<HashMap<String, TickerProfile>>,
    series: RwLock<HashMap<String, PriceSeries>>,
}

impl CachedQuoteClient {
    /// Create a client around the given provider with empty caches.
    pub fn new(provider: Arc<dyn MarketDataProvider>) -> Self {
        Self {
            provider,
            profiles: RwLock::new(HashMap::new()),
            series: RwLock::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl QuoteClientTrait for CachedQuoteClient {
    async fn resolve_profile(&self, ticker: &str) -> Result<TickerProfile> {
        {
            let cache = self.profiles.read().await;
            if let Some(profile) = cache.get(ticker) {
                debug!("Profile cache hit for {}", ticker);
                return Ok(profile.clone());
            }
        }

        let profile = self.provider.get_profile(ticker).await?;

        let mut cache = self.profiles.write().await;
        cache.insert(ticker.to_string(), profile.clone());
        Ok(profile)
    }

    async fn monthly_history(&self, ticker: &str) -> Result<PriceSeries> {
        {
            let cache = self.series.read().await;
            if let Some(series) = cache.get(ticker) {
                debug!("History cache hit for {}", ticker);
                return Ok(series.clone());
            }
        }

        let raw = self.provider.get_monthly_history(ticker).await?;
        let series = PriceSeries::from_provider_points(ticker, raw);

        let mut cache = self.series.write().await;
        cache.insert(ticker.to_string(), series.clone());
        Ok(series)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use foliolens_market_data::{MarketDataError, PricePoint};
    use rust_decimal_macros::dec;
    use std::sync::atomic::{AtomicUsize, Ordering};

    type ProviderResult<T> = std::result::Result<T, MarketDataError>;

    // =========================================================================
    // Mock Provider
    // =========================================================================

    #[derive(Default)]
    struct MockProvider {
        profile_calls: AtomicUsize,
        history_calls: AtomicUsize,
        unknown: bool,
    }

    #[async_trait]
    impl MarketDataProvider for MockProvider {
        fn id(&self) -> &'static str {
            "MOCK"
        }

        async fn get_profile(&self, symbol: &str) -> ProviderResult<TickerProfile> {
            self.profile_calls.fetch_add(1, Ordering::SeqCst);
            if self.unknown {
                return Err(MarketDataError::SymbolNotFound(symbol.to_string()));
            }
            Ok(TickerProfile::new(symbol, "Mock Fund", "EUR"))
        }

        async fn get_monthly_history(&self, symbol: &str) -> ProviderResult<Vec<PricePoint>> {
            self.history_calls.fetch_add(1, Ordering::SeqCst);
            if self.unknown {
                return Err(MarketDataError::SymbolNotFound(symbol.to_string()));
            }
            Ok(vec![PricePoint::new(
                NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                dec!(100),
            )])
        }
    }

    #[tokio::test]
    async fn test_profile_fetched_once_per_ticker() {
        let provider = Arc::new(MockProvider::default());
        let client = CachedQuoteClient::new(provider.clone());

        let first = client.resolve_profile("VWCE.DE").await.unwrap();
        let second = client.resolve_profile("VWCE.DE").await.unwrap();

        assert_eq!(first.name, second.name);
        assert_eq!(provider.profile_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_history_fetched_once_per_ticker() {
        let provider = Arc::new(MockProvider::default());
        let client = CachedQuoteClient::new(provider.clone());

        client.monthly_history("VWCE.DE").await.unwrap();
        client.monthly_history("VWCE.DE").await.unwrap();
        client.monthly_history("IUSN.DE").await.unwrap();

        assert_eq!(provider.history_calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_history_is_month_end_aligned() {
        let provider = Arc::new(MockProvider::default());
        let client = CachedQuoteClient::new(provider);

        let series = client.monthly_history("VWCE.DE").await.unwrap();
        assert_eq!(
            series.points[0].date,
            NaiveDate::from_ymd_opt(2024, 1, 31).unwrap()
        );
    }

    #[tokio::test]
    async fn test_errors_are_not_cached() {
        let provider = Arc::new(MockProvider {
            unknown: true,
            ..Default::default()
        });
        let client = CachedQuoteClient::new(provider.clone());

        assert!(client.resolve_profile("NOPE.DE").await.is_err());
        assert!(client.resolve_profile("NOPE.DE").await.is_err());
        // Both attempts reached the provider
        assert_eq!(provider.profile_calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_unknown_ticker_error_kind() {
        let provider = Arc::new(MockProvider {
            unknown: true,
            ..Default::default()
        });
        let client = CachedQuoteClient::new(provider);

        let err = client.resolve_profile("NOPE.DE").await.unwrap_err();
        assert!(matches!(err, crate::Error::UnknownTicker(ref s) if s == "NOPE.DE"));
    }
}

//! Yahoo Finance market data provider.
//!
//! Profiles come from the quoteSummary API (crumb/cookie authenticated),
//! price history from the chart API via the `yahoo_finance_api` crate at
//! monthly granularity over the maximal available range.

mod models;

use std::sync::RwLock;

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use lazy_static::lazy_static;
use num_traits::FromPrimitive;
use reqwest::header;
use rust_decimal::Decimal;
use tracing::{debug, warn};
use urlencoding::encode;
use yahoo_finance_api as yahoo;

use crate::errors::MarketDataError;
use crate::models::{PricePoint, TickerProfile};
use crate::provider::MarketDataProvider;

use models::YahooQuoteSummaryResponse;

// ============================================================================
// Crumb/Cookie Authentication
// ============================================================================

/// Cached Yahoo authentication data
#[derive(Debug, Clone)]
struct CrumbData {
    cookie: String,
    crumb: String,
}

lazy_static! {
    /// Global cache for the Yahoo authentication crumb
    static ref YAHOO_CRUMB: RwLock<Option<CrumbData>> = RwLock::default();
}

// ============================================================================
// Yahoo Provider
// ============================================================================

/// Yahoo Finance market data provider.
///
/// Resolves ticker profiles and fetches monthly closing-price history
/// for equities, ETFs and funds through the Yahoo Finance API.
pub struct YahooProvider {
    connector: yahoo::YahooConnector,
}

impl YahooProvider {
    /// Create a new Yahoo Finance provider.
    pub fn new() -> Result<Self, MarketDataError> {
        let connector =
            yahoo::YahooConnector::new().map_err(|e| MarketDataError::ProviderError {
                provider: "YAHOO".to_string(),
                message: format!("Failed to initialize Yahoo connector: {}", e),
            })?;
        Ok(Self { connector })
    }

    // ========================================================================
    // Crumb/Cookie Authentication
    // ========================================================================

    /// Ensure we have a valid Yahoo authentication crumb.
    async fn ensure_crumb(&self) -> Result<CrumbData, MarketDataError> {
        // Check if we have a cached crumb
        {
            let guard = YAHOO_CRUMB.read().unwrap();
            if let Some(crumb) = guard.as_ref() {
                return Ok(crumb.clone());
            }
        }

        // Fetch new crumb
        self.fetch_crumb().await
    }

    /// Fetch a new Yahoo authentication crumb.
    async fn fetch_crumb(&self) -> Result<CrumbData, MarketDataError> {
        let client = reqwest::Client::new();

        // Step 1: Get cookie from fc.yahoo.com
        let response = client
            .get("https://fc.yahoo.com")
            .send()
            .await
            .map_err(|e| MarketDataError::ProviderError {
                provider: "YAHOO".to_string(),
                message: format!("Failed to get cookie: {}", e),
            })?;

        let cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .and_then(|h| h.to_str().ok())
            .and_then(|s| s.split_once(';').map(|(v, _)| v.to_string()))
            .ok_or_else(|| MarketDataError::ProviderError {
                provider: "YAHOO".to_string(),
                message: "Failed to parse Yahoo cookie".to_string(),
            })?;

        // Step 2: Get crumb using cookie
        let crumb = client
            .get("https://query1.finance.yahoo.com/v1/test/getcrumb")
            .header(
                header::USER_AGENT,
                "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36",
            )
            .header(header::COOKIE, &cookie)
            .send()
            .await
            .map_err(|e| MarketDataError::ProviderError {
                provider: "YAHOO".to_string(),
                message: format!("Failed to get crumb: {}", e),
            })?
            .text()
            .await
            .map_err(|e| MarketDataError::ProviderError {
                provider: "YAHOO".to_string(),
                message: format!("Failed to read crumb: {}", e),
            })?;

        let crumb_data = CrumbData { cookie, crumb };

        // Cache it
        let mut guard = YAHOO_CRUMB.write().unwrap();
        *guard = Some(crumb_data.clone());

        Ok(crumb_data)
    }

    /// Clear the cached crumb (used when authentication fails)
    fn clear_crumb(&self) {
        let mut guard = YAHOO_CRUMB.write().unwrap();
        *guard = None;
    }

    // ========================================================================
    // Profile Fetching
    // ========================================================================

    /// Fetch the quoteSummary price module for a symbol.
    async fn fetch_quote_summary_profile(
        &self,
        symbol: &str,
    ) -> Result<TickerProfile, MarketDataError> {
        let crumb = self.ensure_crumb().await?;

        let url = format!(
            "https://query1.finance.yahoo.com/v10/finance/quoteSummary/{}?modules=price&crumb={}",
            encode(symbol),
            encode(&crumb.crumb)
        );

        let client = reqwest::Client::new();
        let response = client
            .get(&url)
            .header(
                header::USER_AGENT,
                "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36",
            )
            .header(header::COOKIE, &crumb.cookie)
            .send()
            .await
            .map_err(|e| MarketDataError::ProviderError {
                provider: "YAHOO".to_string(),
                message: format!("Profile request failed: {}", e),
            })?;

        if response.status() == reqwest::StatusCode::UNAUTHORIZED {
            self.clear_crumb();
            return Err(MarketDataError::ProviderError {
                provider: "YAHOO".to_string(),
                message: "Yahoo authentication expired".to_string(),
            });
        }

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(MarketDataError::SymbolNotFound(symbol.to_string()));
        }

        let data: YahooQuoteSummaryResponse = response.json().await.map_err(|e| {
            MarketDataError::ProviderError {
                provider: "YAHOO".to_string(),
                message: format!("Failed to parse profile response: {}", e),
            }
        })?;

        let price = data
            .quote_summary
            .result
            .into_iter()
            .next()
            .and_then(|r| r.price)
            .ok_or_else(|| MarketDataError::SymbolNotFound(symbol.to_string()))?;

        // A record with no display name is as good as no record: the
        // dashboard labels every chart column by name.
        let name = price
            .long_name
            .or(price.short_name)
            .filter(|n| !n.is_empty())
            .ok_or_else(|| MarketDataError::SymbolNotFound(symbol.to_string()))?;

        let currency = price
            .currency
            .filter(|c| !c.is_empty())
            .ok_or_else(|| MarketDataError::ValidationFailed {
                message: format!("No currency in profile response for {}", symbol),
            })?;

        Ok(TickerProfile::new(symbol, format_name(&name), currency))
    }

    /// Convert a Yahoo chart bar to a PricePoint.
    fn yahoo_quote_to_price_point(
        &self,
        yahoo_quote: yahoo::Quote,
    ) -> Result<PricePoint, MarketDataError> {
        // Validate timestamp
        let timestamp = Utc
            .timestamp_opt(yahoo_quote.timestamp as i64, 0)
            .single()
            .ok_or_else(|| MarketDataError::ValidationFailed {
                message: format!("Invalid timestamp: {}", yahoo_quote.timestamp),
            })?;

        // Close price is required
        let close = Decimal::from_f64(yahoo_quote.close).ok_or_else(|| {
            MarketDataError::ValidationFailed {
                message: format!(
                    "Failed to convert close price {} to Decimal",
                    yahoo_quote.close
                ),
            }
        })?;

        Ok(PricePoint::new(timestamp.date_naive(), close))
    }
}

// ============================================================================
// MarketDataProvider Implementation
// ============================================================================

#[async_trait]
impl MarketDataProvider for YahooProvider {
    fn id(&self) -> &'static str {
        "YAHOO"
    }

    async fn get_profile(&self, symbol: &str) -> Result<TickerProfile, MarketDataError> {
        debug!("Fetching profile for {} from Yahoo", symbol);
        self.fetch_quote_summary_profile(symbol).await
    }

    async fn get_monthly_history(
        &self,
        symbol: &str,
    ) -> Result<Vec<PricePoint>, MarketDataError> {
        debug!("Fetching monthly history for {} from Yahoo", symbol);

        let response = self
            .connector
            .get_quote_range(symbol, "1mo", "max")
            .await
            .map_err(|e| {
                if matches!(e, yahoo::YahooError::NoQuotes | yahoo::YahooError::NoResult) {
                    MarketDataError::SymbolNotFound(symbol.to_string())
                } else {
                    MarketDataError::ProviderError {
                        provider: "YAHOO".to_string(),
                        message: e.to_string(),
                    }
                }
            })?;

        match response.quotes() {
            Ok(yahoo_quotes) => {
                let mut points: Vec<PricePoint> = yahoo_quotes
                    .into_iter()
                    .filter_map(|q| match self.yahoo_quote_to_price_point(q) {
                        Ok(point) => Some(point),
                        Err(e) => {
                            warn!("Skipping quote due to conversion error: {:?}", e);
                            None
                        }
                    })
                    .collect();

                if points.is_empty() {
                    return Err(MarketDataError::NoPriceHistory(symbol.to_string()));
                }

                points.sort_by_key(|p| p.date);
                Ok(points)
            }
            Err(yahoo::YahooError::NoQuotes) => {
                warn!("No historical quotes returned for '{}'", symbol);
                Err(MarketDataError::NoPriceHistory(symbol.to_string()))
            }
            Err(e) => Err(MarketDataError::ProviderError {
                provider: "YAHOO".to_string(),
                message: e.to_string(),
            }),
        }
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Clean up fund names by removing common umbrella-company prefixes.
fn format_name(long_name: &str) -> String {
    let mut name = long_name.to_string();

    let replacements = [
        ("&amp;", "&"),
        ("iShares III Public Limited Company - ", ""),
        ("iShares VII PLC - ", ""),
        ("Multi Units Luxembourg - ", ""),
        ("Vanguard Funds Public Limited Company - ", ""),
        ("Xtrackers (IE) Plc - ", ""),
    ];

    for (from, to) in replacements {
        name = name.replace(from, to);
    }

    name.trim().to_string()
}

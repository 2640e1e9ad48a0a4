//! Market data access for the dashboard core.
//!
//! - `model` - Month-end resampled price series
//! - `client` - Memoizing facade over the market-data crate

pub mod client;
pub mod model;

pub use client::{CachedQuoteClient, QuoteClientTrait};
pub use model::PriceSeries;

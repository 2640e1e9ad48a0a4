//! Market data provider abstraction and implementations.
//!
//! This module contains:
//! - The `MarketDataProvider` trait that all providers implement
//! - The Yahoo Finance implementation
//!
//! Providers are stateless lookups: the memoization that keeps repeated
//! dashboard renders from re-fetching lives in the core crate's client,
//! not here.

mod traits;

pub mod yahoo;

// Re-exports
pub use traits::MarketDataProvider;

//! Foliolens Core - Domain entities, services, and traits.
//!
//! This crate contains the data-transformation pipeline behind the
//! Foliolens dashboard: price alignment across tickers, growth-index
//! rebasing, annual return statistics, and the risk-free-rate join.
//! It is UI-agnostic; the presentation layer consumes the outputs of
//! [`portfolio::PortfolioService`] and renders them.

pub mod constants;
pub mod errors;
pub mod portfolio;
pub mod quotes;
pub mod rates;
pub mod utils;

// Re-export common types from the portfolio module
pub use portfolio::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;

//! Foliolens Market Data Crate
//!
//! This crate provides provider-agnostic market data fetching for the
//! Foliolens dashboard: ticker identity resolution and monthly
//! closing-price history.
//!
//! # Overview
//!
//! The dashboard core needs exactly two things from a market data source:
//! - A profile for a ticker (display name and trading currency)
//! - The maximal available monthly closing-price history for a ticker
//!
//! Both live on the [`MarketDataProvider`] trait; the only shipped
//! implementation is [`YahooProvider`]. The core crate wraps the provider
//! in a memoizing client, so providers themselves stay stateless apart
//! from shared authentication state.
//!
//! # Core Types
//!
//! - [`TickerProfile`] - Resolved identity for one ticker
//! - [`PricePoint`] - One monthly closing-price observation
//! - [`MarketDataError`] - Typed failures ("unknown ticker" stays
//!   distinguishable from transport errors)

pub mod errors;
pub mod models;
pub mod provider;

// Re-export public types from models
pub use models::{PricePoint, TickerProfile};

// Re-export provider types
pub use provider::yahoo::YahooProvider;
pub use provider::MarketDataProvider;

pub use errors::MarketDataError;

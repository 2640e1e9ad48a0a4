//! Risk-free interest rate loading.
//!
//! - `rates_model` - Year-indexed rate entries
//! - `rates_service` - Reference file parsing and resampling

pub mod rates_model;
pub mod rates_service;

pub use rates_model::YearlyRate;
pub use rates_service::load_annual_risk_free_rates;

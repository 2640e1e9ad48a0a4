//! Return and risk statistics.
//!
//! - `returns_model` - Annual returns, histogram bins, excess returns
//! - `returns_service` - Derivation from the portfolio value series

pub mod returns_model;
pub mod returns_service;

pub use returns_model::{AnnualReturn, ExcessReturn, ReturnBin, ReturnSign};
pub use returns_service::ReturnsService;

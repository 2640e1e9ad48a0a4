//! Growth index engine.
//!
//! - `growth_model` - Rebased growth series
//! - `growth_service` - Normalization and weighted aggregation

pub mod growth_model;
pub mod growth_service;

pub use growth_model::{GrowthPoint, GrowthSeries};
pub use growth_service::GrowthService;

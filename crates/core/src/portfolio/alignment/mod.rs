//! Price alignment across tickers.
//!
//! - `alignment_model` - Date-indexed price matrix and its dense window
//! - `alignment_service` - Builds the matrix from fetched series

pub mod alignment_model;
pub mod alignment_service;

pub use alignment_model::{PriceMatrix, PriceWindow};
pub use alignment_service::AlignmentService;

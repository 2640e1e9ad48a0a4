//! Portfolio pipeline: definition, alignment, growth, returns.

pub mod alignment;
pub mod growth;
pub mod portfolio_model;
pub mod portfolio_service;
pub mod returns;


pub use alignment::{AlignmentService, PriceMatrix, PriceWindow};
pub use growth::{GrowthPoint, GrowthSeries, GrowthService};
pub use portfolio_model::{Holding, PortfolioDefinition, ResolvedHolding};
pub use portfolio_service::{PortfolioDashboard, PortfolioService, PortfolioServiceTrait};
pub use returns::{AnnualReturn, ExcessReturn, ReturnBin, ReturnSign, ReturnsService};

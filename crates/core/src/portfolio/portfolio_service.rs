//! Dashboard orchestration - runs the full pipeline for one portfolio.
//!
//! The pipeline is fail-fast: any unresolved ticker, empty overlap
//! window or unreadable rate file aborts the whole build. A dashboard
//! either contains every section or does not exist.

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Datelike;
use log::debug;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::alignment::AlignmentService;
use super::growth::{GrowthSeries, GrowthService};
use super::portfolio_model::{PortfolioDefinition, ResolvedHolding};
use super::returns::{AnnualReturn, ExcessReturn, ReturnBin, ReturnsService};
use crate::constants::HISTOGRAM_BIN_WIDTH;
use crate::errors::Result;
use crate::quotes::QuoteClientTrait;
use crate::rates::load_annual_risk_free_rates;

/// Everything one render of the dashboard needs.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioDashboard {
    /// Holdings with provider-resolved names and currencies
    pub holdings: Vec<ResolvedHolding>,

    /// Per-asset growth indexes over the effective window
    pub asset_growth: Vec<GrowthSeries>,

    /// Weighted portfolio growth index
    pub portfolio_growth: GrowthSeries,

    /// Year-over-year portfolio returns
    pub annual_returns: Vec<AnnualReturn>,

    /// Histogram of annual returns
    pub return_histogram: Vec<ReturnBin>,

    /// Per-year excess over the risk-free rate, full years only
    pub excess_returns: Vec<ExcessReturn>,

    /// Simplified Sharpe statistic over the excess returns
    pub sharpe_ratio: Decimal,
}

/// Trait for building portfolio dashboards.
#[async_trait]
pub trait PortfolioServiceTrait: Send + Sync {
    /// Run the full pipeline for a validated definition.
    async fn build_dashboard(
        &self,
        definition: &PortfolioDefinition,
        rates_path: &Path,
    ) -> Result<PortfolioDashboard>;
}

/// Default pipeline implementation over a quote client.
pub struct PortfolioService {
    quote_client: Arc<dyn QuoteClientTrait>,
}

impl PortfolioService {
    /// Create a new portfolio service.
    pub fn new(quote_client: Arc<dyn QuoteClientTrait>) -> Self {
        Self { quote_client }
    }

    async fn resolve_holdings(
        &self,
        definition: &PortfolioDefinition,
    ) -> Result<Vec<ResolvedHolding>> {
        let mut resolved = Vec::with_capacity(definition.holdings().len());
        for holding in definition.holdings() {
            let profile = self.quote_client.resolve_profile(&holding.ticker).await?;
            resolved.push(ResolvedHolding {
                ticker: holding.ticker.clone(),
                name: profile.name,
                currency: profile.currency,
                allocation: holding.allocation,
            });
        }
        Ok(resolved)
    }

    /// Run the pipeline with an explicit year cutoff.
    ///
    /// Returns for `as_of_year` and later are treated as partial and
    /// excluded from the excess-return join. [`build_dashboard`] passes
    /// the current calendar year.
    ///
    /// [`build_dashboard`]: PortfolioServiceTrait::build_dashboard
    pub async fn build_dashboard_as_of(
        &self,
        definition: &PortfolioDefinition,
        rates_path: &Path,
        as_of_year: i32,
    ) -> Result<PortfolioDashboard> {
        let holdings = self.resolve_holdings(definition).await?;

        let alignment = AlignmentService::new(self.quote_client.clone());
        let matrix = alignment.build_matrix(&definition.tickers()).await?;

        let asset_growth = GrowthService::asset_growth_index(&matrix, &holdings)?;
        let portfolio_growth = GrowthService::portfolio_growth_index(&matrix, definition)?;

        let annual_returns = ReturnsService::annual_returns(&portfolio_growth);
        let return_histogram =
            ReturnsService::return_histogram(&annual_returns, HISTOGRAM_BIN_WIDTH)?;

        let risk_free = load_annual_risk_free_rates(rates_path)?;
        let excess_returns =
            ReturnsService::excess_returns(&annual_returns, &risk_free, as_of_year);
        let sharpe_ratio = ReturnsService::sharpe_ratio(&excess_returns)?;

        debug!(
            "Dashboard built: {} holdings, {} annual returns, {} full years",
            holdings.len(),
            annual_returns.len(),
            excess_returns.len()
        );

        Ok(PortfolioDashboard {
            holdings,
            asset_growth,
            portfolio_growth,
            annual_returns,
            return_histogram,
            excess_returns,
            sharpe_ratio,
        })
    }
}

#[async_trait]
impl PortfolioServiceTrait for PortfolioService {
    async fn build_dashboard(
        &self,
        definition: &PortfolioDefinition,
        rates_path: &Path,
    ) -> Result<PortfolioDashboard> {
        // The current year is still running, so its return would be partial
        let as_of_year = chrono::Local::now().year();
        self.build_dashboard_as_of(definition, rates_path, as_of_year)
            .await
    }
}

//! Builds the aligned price matrix for a set of tickers.

use std::sync::Arc;

use log::debug;

use super::alignment_model::PriceMatrix;
use crate::errors::Result;
use crate::quotes::QuoteClientTrait;

/// Fetches per-ticker histories and outer-joins them into a matrix.
pub struct AlignmentService {
    quote_client: Arc<dyn QuoteClientTrait>,
}

impl AlignmentService {
    /// Create a new alignment service.
    pub fn new(quote_client: Arc<dyn QuoteClientTrait>) -> Self {
        Self { quote_client }
    }

    /// Fetch every ticker's monthly history and join on date.
    ///
    /// Column order follows the ticker order given. Any fetch failure
    /// propagates immediately - there is no partial matrix.
    pub async fn build_matrix(&self, tickers: &[String]) -> Result<PriceMatrix> {
        let mut series = Vec::with_capacity(tickers.len());
        for ticker in tickers {
            series.push(self.quote_client.monthly_history(ticker).await?);
        }

        let matrix = PriceMatrix::from_series(series);
        debug!(
            "Built price matrix: {} tickers x {} dates",
            matrix.tickers().len(),
            matrix.row_count()
        );
        Ok(matrix)
    }
}

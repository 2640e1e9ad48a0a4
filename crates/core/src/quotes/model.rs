use serde::{Deserialize, Serialize};

use foliolens_market_data::PricePoint;

use crate::utils::time_utils::month_end;

/// Monthly closing-price series for one ticker, aligned on month-end.
///
/// Series from different tickers start at different dates (fund
/// inception) and may contain gaps; alignment across tickers happens in
/// the price matrix, not here.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PriceSeries {
    /// Ticker symbol this series belongs to
    pub ticker: String,

    /// Price points, strictly ascending by date, one per month at most
    pub points: Vec<PricePoint>,
}

impl PriceSeries {
    /// Build a series from raw provider points.
    ///
    /// Each point is moved to the last calendar day of its month and only
    /// the last observation per month is kept, regardless of input order.
    pub fn from_provider_points(ticker: impl Into<String>, mut raw: Vec<PricePoint>) -> Self {
        raw.sort_by_key(|p| p.date);

        let mut points: Vec<PricePoint> = Vec::with_capacity(raw.len());
        for point in raw {
            let date = month_end(point.date);
            match points.last_mut() {
                // Later observation in the same month replaces the earlier one
                Some(last) if last.date == date => last.close = point.close,
                _ => points.push(PricePoint::new(date, point.close)),
            }
        }

        Self {
            ticker: ticker.into(),
            points,
        }
    }

    /// True when the series holds no observations.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

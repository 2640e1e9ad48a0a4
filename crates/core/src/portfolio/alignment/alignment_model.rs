//! Date-indexed price matrix.
//!
//! Per-ticker monthly series start at different dates (fund inception)
//! and may contain gaps. The matrix is their outer join on date: every
//! distinct date seen by any ticker becomes a row, missing observations
//! stay missing. Growth comparisons only make sense where every asset
//! exists, which is what [`PriceMatrix::effective_window`] extracts.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::errors::{Error, Result};
use crate::quotes::PriceSeries;

/// Outer join of per-ticker price series, one column per ticker.
///
/// Row index (dates) is strictly increasing with unique dates. Column
/// order is the insertion order of the input series. A `None` cell means
/// the ticker has no observation for that date - never zero.
#[derive(Clone, Debug)]
pub struct PriceMatrix {
    tickers: Vec<String>,
    dates: Vec<NaiveDate>,
    cells: Vec<Vec<Option<Decimal>>>,
}

impl PriceMatrix {
    /// Build the matrix by outer-joining the given series on date.
    pub fn from_series(series: Vec<PriceSeries>) -> Self {
        let tickers: Vec<String> = series.iter().map(|s| s.ticker.clone()).collect();
        let column_count = tickers.len();

        let mut rows: BTreeMap<NaiveDate, Vec<Option<Decimal>>> = BTreeMap::new();
        for (col, serie) in series.iter().enumerate() {
            for point in &serie.points {
                let row = rows
                    .entry(point.date)
                    .or_insert_with(|| vec![None; column_count]);
                row[col] = Some(point.close);
            }
        }

        let mut dates = Vec::with_capacity(rows.len());
        let mut cells = Vec::with_capacity(rows.len());
        for (date, row) in rows {
            dates.push(date);
            cells.push(row);
        }

        Self {
            tickers,
            dates,
            cells,
        }
    }

    /// Column labels (tickers) in insertion order.
    pub fn tickers(&self) -> &[String] {
        &self.tickers
    }

    /// Row index.
    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.dates.len()
    }

    /// The maximal row-subset with no missing value in any column.
    ///
    /// Equivalent to dropping every row before the latest first-valid
    /// date among all tickers, plus any sparse row inside the remaining
    /// range. An asset that does not exist yet cannot be compared, so
    /// this window is the only valid basis for growth indexes.
    ///
    /// # Errors
    ///
    /// `Error::EmptyOverlapWindow` when no row is fully populated.
    pub fn effective_window(&self) -> Result<PriceWindow> {
        let mut dates = Vec::new();
        let mut rows = Vec::new();

        for (date, row) in self.dates.iter().zip(&self.cells) {
            if let Some(dense) = row.iter().copied().collect::<Option<Vec<Decimal>>>() {
                dates.push(*date);
                rows.push(dense);
            }
        }

        if rows.is_empty() {
            return Err(Error::EmptyOverlapWindow);
        }

        Ok(PriceWindow {
            tickers: self.tickers.clone(),
            dates,
            rows,
        })
    }
}

/// Dense row-subset of a [`PriceMatrix`]: every cell is populated.
#[derive(Clone, Debug)]
pub struct PriceWindow {
    tickers: Vec<String>,
    dates: Vec<NaiveDate>,
    rows: Vec<Vec<Decimal>>,
}

impl PriceWindow {
    /// Column labels (tickers) in matrix order.
    pub fn tickers(&self) -> &[String] {
        &self.tickers
    }

    /// Row index.
    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    /// Number of rows. Never zero: an empty window never constructs.
    pub fn row_count(&self) -> usize {
        self.dates.len()
    }

    /// Dense rows, one price per ticker in column order.
    pub fn rows(&self) -> &[Vec<Decimal>] {
        &self.rows
    }

    /// All values of one column, top to bottom.
    pub fn column(&self, col: usize) -> Vec<Decimal> {
        self.rows.iter().map(|row| row[col]).collect()
    }

    /// Position of a ticker's column, if present.
    pub fn column_index(&self, ticker: &str) -> Option<usize> {
        self.tickers.iter().position(|t| t == ticker)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use foliolens_market_data::PricePoint;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, 28).unwrap()
    }

    fn series(ticker: &str, points: Vec<(NaiveDate, Decimal)>) -> PriceSeries {
        PriceSeries {
            ticker: ticker.to_string(),
            points: points
                .into_iter()
                .map(|(d, close)| PricePoint::new(d, close))
                .collect(),
        }
    }

    fn two_ticker_matrix() -> PriceMatrix {
        // A starts one month earlier than B
        PriceMatrix::from_series(vec![
            series(
                "A",
                vec![
                    (date(2024, 1), dec!(10)),
                    (date(2024, 2), dec!(11)),
                    (date(2024, 3), dec!(12)),
                ],
            ),
            series(
                "B",
                vec![(date(2024, 2), dec!(5)), (date(2024, 3), dec!(6))],
            ),
        ])
    }

    #[test]
    fn test_outer_join_keeps_every_date() {
        let matrix = two_ticker_matrix();
        assert_eq!(matrix.row_count(), 3);
        assert_eq!(matrix.tickers(), &["A".to_string(), "B".to_string()]);
    }

    #[test]
    fn test_dates_strictly_increasing() {
        let matrix = two_ticker_matrix();
        assert!(matrix.dates().windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_effective_window_drops_leading_gap() {
        let matrix = two_ticker_matrix();
        let window = matrix.effective_window().unwrap();
        assert_eq!(window.row_count(), 2);
        assert_eq!(window.dates()[0], date(2024, 2));
        assert_eq!(window.rows()[0], vec![dec!(11), dec!(5)]);
    }

    #[test]
    fn test_effective_window_drops_inner_gap_row() {
        let matrix = PriceMatrix::from_series(vec![
            series(
                "A",
                vec![(date(2024, 1), dec!(10)), (date(2024, 3), dec!(12))],
            ),
            series(
                "B",
                vec![
                    (date(2024, 1), dec!(5)),
                    (date(2024, 2), dec!(5)),
                    (date(2024, 3), dec!(6)),
                ],
            ),
        ]);
        let window = matrix.effective_window().unwrap();
        assert_eq!(window.dates(), &[date(2024, 1), date(2024, 3)]);
    }

    #[test]
    fn test_no_overlap_is_an_error() {
        let matrix = PriceMatrix::from_series(vec![
            series("A", vec![(date(2015, 6), dec!(10))]),
            series("B", vec![(date(2023, 6), dec!(5))]),
        ]);
        let err = matrix.effective_window().unwrap_err();
        assert!(matches!(err, Error::EmptyOverlapWindow));
    }

    #[test]
    fn test_column_extraction() {
        let window = two_ticker_matrix().effective_window().unwrap();
        assert_eq!(window.column(1), vec![dec!(5), dec!(6)]);
        assert_eq!(window.column_index("B"), Some(1));
        assert_eq!(window.column_index("C"), None);
    }
}

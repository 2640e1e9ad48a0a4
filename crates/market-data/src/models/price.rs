use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One monthly closing-price observation for a ticker.
///
/// Providers return these ascending by date. Gaps are allowed; the core
/// crate aligns series from different inception dates via an outer join.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Observation date as reported by the provider
    pub date: NaiveDate,

    /// Closing price in the instrument's trading currency
    pub close: Decimal,
}

impl PricePoint {
    /// Create a new price point.
    pub fn new(date: NaiveDate, close: Decimal) -> Self {
        Self { date, close }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_price_point_new() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
        let point = PricePoint::new(date, dec!(104.52));
        assert_eq!(point.date, date);
        assert_eq!(point.close, dec!(104.52));
    }
}

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Average risk-free rate for one calendar year, as a fraction.
///
/// 0.0325 means 3.25% per annum. The yearly figure is the plain mean of
/// the year's month-end rates, not a compounded effective rate; the
/// excess-return join expects exactly this approximation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearlyRate {
    /// Calendar year
    pub year: i32,

    /// Average annual rate as a fraction (not a percentage)
    pub rate: Decimal,
}

impl YearlyRate {
    /// Create a new yearly rate entry.
    pub fn new(year: i32, rate: Decimal) -> Self {
        Self { year, rate }
    }
}

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Sign classification for chart coloring.
///
/// Zero classifies as positive: the `>= 0` comparison is a preserved
/// boundary convention, not an accident of this implementation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReturnSign {
    Positive,
    Negative,
}

impl ReturnSign {
    /// Classify a value: `>= 0` is positive.
    pub fn of(value: Decimal) -> Self {
        if value >= Decimal::ZERO {
            ReturnSign::Positive
        } else {
            ReturnSign::Negative
        }
    }
}

/// Year-over-year portfolio return, sampled at year-end.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnualReturn {
    /// Calendar year
    pub year: i32,

    /// Return as a percentage (e.g., 12.5 for +12.5%)
    pub return_pct: Decimal,

    /// Sign classification of the return
    pub sign: ReturnSign,
}

/// One histogram bin over annual returns.
///
/// Bins are left-closed: a bin with lower edge `l` and width `w` counts
/// returns in `[l, l + w)`.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReturnBin {
    /// Lower edge of the bin, in percentage points
    pub lower: i64,

    /// Chart label, e.g. "-5 to 0 %"
    pub label: String,

    /// Number of annual returns falling in this bin
    pub count: usize,

    /// Sign classification of the bin's lower edge
    pub sign: ReturnSign,
}

/// Portfolio return against the risk-free rate for one full year.
///
/// All rates are fractions here, not percentages.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExcessReturn {
    /// Calendar year
    pub year: i32,

    /// Portfolio annual return as a fraction
    pub portfolio_return: Decimal,

    /// Average risk-free annual rate as a fraction
    pub risk_free_rate: Decimal,

    /// `portfolio_return - risk_free_rate`
    pub excess: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_zero_classifies_as_positive() {
        assert_eq!(ReturnSign::of(Decimal::ZERO), ReturnSign::Positive);
        assert_eq!(ReturnSign::of(dec!(3.2)), ReturnSign::Positive);
        assert_eq!(ReturnSign::of(dec!(-0.01)), ReturnSign::Negative);
    }
}

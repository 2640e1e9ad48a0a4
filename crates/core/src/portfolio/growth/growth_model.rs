use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One observation of a rebased growth index.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrowthPoint {
    /// Observation date
    pub date: NaiveDate,

    /// Index value in notional currency units, rounded to whole units
    pub value: Decimal,
}

/// A growth index series rebased to the fixed starting notional.
///
/// The first point of every series equals the notional exactly; later
/// points track the asset's (or portfolio's) relative growth.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GrowthSeries {
    /// Chart label: the resolved display name, or "Portfolio Value"
    pub label: String,

    /// Points in date order
    pub points: Vec<GrowthPoint>,
}

impl GrowthSeries {
    /// Create a new series.
    pub fn new(label: impl Into<String>, points: Vec<GrowthPoint>) -> Self {
        Self {
            label: label.into(),
            points,
        }
    }

    /// Values without dates, in order.
    pub fn values(&self) -> Vec<Decimal> {
        self.points.iter().map(|p| p.value).collect()
    }
}

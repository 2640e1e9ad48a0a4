//! Property-based tests for the return statistics.
//!
//! These verify structural invariants of the histogram and the annual
//! return sampling across randomly generated inputs, using `proptest`.

use proptest::prelude::*;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use foliolens_core::portfolio::{
    AnnualReturn, GrowthPoint, GrowthSeries, ReturnSign, ReturnsService,
};

// =============================================================================
// Generators
// =============================================================================

/// A set of annual returns with distinct years, in percent scaled by 10
/// (so -50.0% to +50.0% in 0.1 steps).
fn arb_returns() -> impl Strategy<Value = Vec<AnnualReturn>> {
    proptest::collection::vec(-500i64..=500, 1..12).prop_map(|tenths| {
        tenths
            .iter()
            .enumerate()
            .map(|(i, t)| {
                let return_pct = Decimal::new(*t, 1);
                AnnualReturn {
                    year: 2000 + i as i32,
                    return_pct,
                    sign: ReturnSign::of(return_pct),
                }
            })
            .collect()
    })
}

/// A year-end value series with strictly positive values.
fn arb_year_end_series() -> impl Strategy<Value = GrowthSeries> {
    proptest::collection::vec(1u32..1_000_000, 2..15).prop_map(|values| {
        let points = values
            .iter()
            .enumerate()
            .map(|(i, v)| GrowthPoint {
                date: NaiveDate::from_ymd_opt(2000 + i as i32, 12, 31).unwrap(),
                value: Decimal::from(*v),
            })
            .collect();
        GrowthSeries::new("Portfolio Value", points)
    })
}

// =============================================================================
// Histogram invariants
// =============================================================================

proptest! {
    /// Every return lands in exactly one bin.
    #[test]
    fn prop_histogram_counts_partition_input(returns in arb_returns()) {
        let bins = ReturnsService::return_histogram(&returns, 5).unwrap();
        let total: usize = bins.iter().map(|b| b.count).sum();
        prop_assert_eq!(total, returns.len());
    }

    /// The bin region is symmetric around zero and bins are contiguous.
    #[test]
    fn prop_histogram_symmetric_and_contiguous(returns in arb_returns()) {
        let bins = ReturnsService::return_histogram(&returns, 5).unwrap();

        let first = bins.first().unwrap();
        let last = bins.last().unwrap();
        prop_assert_eq!(first.lower, -(last.lower + 5));

        for pair in bins.windows(2) {
            prop_assert_eq!(pair[1].lower - pair[0].lower, 5);
        }
    }

    /// Bin signs follow the lower edge, with zero counting as positive.
    #[test]
    fn prop_histogram_bin_signs(returns in arb_returns()) {
        let bins = ReturnsService::return_histogram(&returns, 5).unwrap();
        for bin in &bins {
            let expected = if bin.lower >= 0 {
                ReturnSign::Positive
            } else {
                ReturnSign::Negative
            };
            prop_assert_eq!(bin.sign, expected);
        }
    }
}

// =============================================================================
// Annual return invariants
// =============================================================================

proptest! {
    /// One return per year transition; the first sampled year is dropped.
    #[test]
    fn prop_one_return_per_year_transition(series in arb_year_end_series()) {
        let returns = ReturnsService::annual_returns(&series);
        prop_assert_eq!(returns.len(), series.points.len() - 1);

        let years: Vec<i32> = returns.iter().map(|r| r.year).collect();
        let mut sorted = years.clone();
        sorted.sort_unstable();
        sorted.dedup();
        prop_assert_eq!(years, sorted);
    }

    /// Sign classification always matches the return value.
    #[test]
    fn prop_sign_matches_value(series in arb_year_end_series()) {
        for r in ReturnsService::annual_returns(&series) {
            if r.return_pct >= dec!(0) {
                prop_assert_eq!(r.sign, ReturnSign::Positive);
            } else {
                prop_assert_eq!(r.sign, ReturnSign::Negative);
            }
        }
    }
}

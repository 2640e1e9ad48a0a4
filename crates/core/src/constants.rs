use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Notional starting value every growth index is rebased to.
pub const GROWTH_NOTIONAL: Decimal = dec!(10_000);

/// Allocations across a portfolio definition must total exactly this.
pub const ALLOCATION_TOTAL: Decimal = dec!(100);

/// Default width of annual-return histogram bins, in percentage points.
pub const HISTOGRAM_BIN_WIDTH: u32 = 5;

/// Decimal precision for derived statistics (returns, rates, ratios).
pub const DECIMAL_PRECISION: u32 = 6;

/// Default location of the monthly risk-free-rate reference file.
pub const RISK_FREE_RATE_FILE: &str = "data/euribor_3m.csv";

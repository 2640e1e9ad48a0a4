use chrono::{Datelike, NaiveDate};

/// Returns the last calendar day of the month containing `date`.
///
/// Provider bars at monthly granularity are stamped anywhere inside the
/// month; the pipeline aligns them on month-end before joining series.
pub fn month_end(date: NaiveDate) -> NaiveDate {
    let (next_year, next_month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };

    // First day of the next month always exists, so does its predecessor.
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|d| d.pred_opt())
        .unwrap_or(date)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_month_end_mid_month() {
        assert_eq!(month_end(ymd(2024, 1, 2)), ymd(2024, 1, 31));
    }

    #[test]
    fn test_month_end_december_rolls_year() {
        assert_eq!(month_end(ymd(2023, 12, 15)), ymd(2023, 12, 31));
    }

    #[test]
    fn test_month_end_leap_february() {
        assert_eq!(month_end(ymd(2024, 2, 1)), ymd(2024, 2, 29));
        assert_eq!(month_end(ymd(2023, 2, 28)), ymd(2023, 2, 28));
    }

    #[test]
    fn test_month_end_is_idempotent() {
        assert_eq!(month_end(ymd(2024, 4, 30)), ymd(2024, 4, 30));
    }
}

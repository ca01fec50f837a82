//! Commission period date calculation.
//!
//! Each month is split into five commission periods. M1 runs from the 1st
//! through the first Sunday (1 to 7 days). M2, M3 and M4 are the three 7-day
//! windows that follow. M5 runs from the next day to the last day of the
//! month. No period ends after the month does.
//!
//! Months are zero-based here (0 = January) to match the selectors that
//! feed this calculation.

use chrono::{Datelike, Days, NaiveDate};
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{CommissionPeriod, PeriodDates, PeriodRange};

/// Returns the first and last day of a zero-based month, if it exists.
///
/// # Examples
///
/// ```
/// use kpi_engine::calculation::month_bounds;
/// use chrono::NaiveDate;
///
/// let (start, end) = month_bounds(2024, 1).unwrap();
/// assert_eq!(start, NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
/// assert_eq!(end, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
/// assert!(month_bounds(2024, 12).is_none());
/// ```
pub fn month_bounds(year: i32, month: u32) -> Option<(NaiveDate, NaiveDate)> {
    if month > 11 {
        return None;
    }
    let start = NaiveDate::from_ymd_opt(year, month + 1, 1)?;
    let next_month_start = if month == 11 {
        NaiveDate::from_ymd_opt(year.checked_add(1)?, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 2, 1)?
    };
    Some((start, next_month_start.pred_opt()?))
}

/// Returns the first Sunday on or after `date`.
///
/// Weekdays count Monday = 0 through Sunday = 6, so the distance is
/// `(6 - weekday + 7) % 7` days.
pub fn first_sunday_on_or_after(date: NaiveDate) -> Option<NaiveDate> {
    let weekday = date.weekday().num_days_from_monday();
    let days_until_sunday = (6 - weekday + 7) % 7;
    date.checked_add_days(Days::new(u64::from(days_until_sunday)))
}

fn offset(date: NaiveDate, days: u64) -> EngineResult<NaiveDate> {
    date.checked_add_days(Days::new(days))
        .ok_or_else(|| EngineError::CalculationError {
            message: format!("date {} + {} days is out of range", date, days),
        })
}

/// Computes the date range of one commission period.
///
/// # Errors
///
/// Returns `InvalidMonth` if `month` is not in `0..=11` or the year is outside
/// the supported calendar range.
///
/// # Examples
///
/// ```
/// use kpi_engine::calculation::period_range;
/// use kpi_engine::models::CommissionPeriod;
/// use chrono::NaiveDate;
///
/// // March 2024: the 1st is a Friday, so the first Sunday is the 3rd
/// let m1 = period_range(2024, 2, CommissionPeriod::M1).unwrap();
/// assert_eq!(m1.start, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
/// assert_eq!(m1.end, NaiveDate::from_ymd_opt(2024, 3, 3).unwrap());
///
/// let m5 = period_range(2024, 2, CommissionPeriod::M5).unwrap();
/// assert_eq!(m5.start, NaiveDate::from_ymd_opt(2024, 3, 25).unwrap());
/// assert_eq!(m5.end, NaiveDate::from_ymd_opt(2024, 3, 31).unwrap());
/// ```
pub fn period_range(year: i32, month: u32, period: CommissionPeriod) -> EngineResult<PeriodRange> {
    let (month_start, month_end) =
        month_bounds(year, month).ok_or(EngineError::InvalidMonth { year, month })?;
    let first_sunday =
        first_sunday_on_or_after(month_start).ok_or(EngineError::InvalidMonth { year, month })?;

    let (start, end) = match period {
        CommissionPeriod::M1 => (month_start, first_sunday),
        CommissionPeriod::M5 => (offset(first_sunday, 22)?, month_end),
        week => {
            // M2 covers first_sunday + 1..=7, M3 + 8..=14, M4 + 15..=21
            let weeks_after = u64::from(week.number() - 1);
            (
                offset(first_sunday, 7 * (weeks_after - 1) + 1)?,
                offset(first_sunday, 7 * weeks_after)?,
            )
        }
    };

    // A 28-day February starting on a Monday leaves M5 nothing past the
    // 28th; it collapses onto the last day rather than spilling into March.
    Ok(PeriodRange {
        period,
        start: start.min(month_end),
        end: end.min(month_end),
    })
}

/// Computes period dates from raw year and zero-based month strings.
///
/// Returns [`PeriodDates::unknown`] when either string fails to parse as an
/// integer or the pair does not name a calendar month.
///
/// # Examples
///
/// ```
/// use kpi_engine::calculation::calculate_period_dates;
/// use kpi_engine::models::CommissionPeriod;
/// use chrono::NaiveDate;
///
/// let dates = calculate_period_dates("2024", "2", CommissionPeriod::M2);
/// assert_eq!(dates.start, NaiveDate::from_ymd_opt(2024, 3, 4));
/// assert_eq!(dates.end, NaiveDate::from_ymd_opt(2024, 3, 10));
///
/// let unknown = calculate_period_dates("abcd", "2", CommissionPeriod::M1);
/// assert_eq!(unknown.start, None);
/// assert_eq!(unknown.end, None);
/// ```
pub fn calculate_period_dates(year: &str, month: &str, period: CommissionPeriod) -> PeriodDates {
    let (Ok(year_value), Ok(month_value)) = (year.trim().parse::<i32>(), month.trim().parse::<u32>())
    else {
        debug!(year, month, "Unparseable year/month for period dates");
        return PeriodDates::unknown();
    };

    match period_range(year_value, month_value, period) {
        Ok(range) => range.into(),
        Err(err) => {
            debug!(year, month, error = %err, "No period dates for year/month");
            PeriodDates::unknown()
        }
    }
}

/// Returns all five periods of a month in calendar order.
pub fn month_periods(year: i32, month: u32) -> EngineResult<Vec<PeriodRange>> {
    CommissionPeriod::ALL
        .into_iter()
        .map(|period| period_range(year, month, period))
        .collect()
}

/// Finds the commission period a date belongs to.
///
/// If two periods share the date (the collapsed M5 case) the earlier one wins.
///
/// # Examples
///
/// ```
/// use kpi_engine::calculation::find_period;
/// use kpi_engine::models::CommissionPeriod;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2024, 3, 12).unwrap();
/// assert_eq!(find_period(date).unwrap().period, CommissionPeriod::M3);
/// ```
pub fn find_period(date: NaiveDate) -> EngineResult<PeriodRange> {
    let periods = month_periods(date.year(), date.month0())?;
    periods
        .into_iter()
        .find(|range| range.contains(date))
        .ok_or_else(|| EngineError::CalculationError {
            message: format!("no commission period contains {}", date),
        })
}

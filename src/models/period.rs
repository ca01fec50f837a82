//! Commission period models.
//!
//! This module contains the [`CommissionPeriod`] label type and the date
//! range types produced by the period calculator.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// One of the five commission periods a month is divided into.
///
/// M1 runs from the 1st to the first Sunday; M2 to M4 are the following
/// 7-day windows; M5 absorbs the rest of the month.
///
/// # Example
///
/// ```
/// use kpi_engine::models::CommissionPeriod;
///
/// let period: CommissionPeriod = "m3".parse().unwrap();
/// assert_eq!(period, CommissionPeriod::M3);
/// assert_eq!(period.to_string(), "M3");
/// assert!("M6".parse::<CommissionPeriod>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CommissionPeriod {
    /// From the 1st through the first Sunday.
    M1,
    /// The 7 days after the first Sunday.
    M2,
    /// Days 8 to 14 after the first Sunday.
    M3,
    /// Days 15 to 21 after the first Sunday.
    M4,
    /// Day 22 after the first Sunday through the end of the month.
    M5,
}

impl CommissionPeriod {
    /// All periods in calendar order.
    pub const ALL: [CommissionPeriod; 5] = [
        CommissionPeriod::M1,
        CommissionPeriod::M2,
        CommissionPeriod::M3,
        CommissionPeriod::M4,
        CommissionPeriod::M5,
    ];

    /// Returns the 1-based position of the period within the month.
    pub fn number(&self) -> u32 {
        match self {
            CommissionPeriod::M1 => 1,
            CommissionPeriod::M2 => 2,
            CommissionPeriod::M3 => 3,
            CommissionPeriod::M4 => 4,
            CommissionPeriod::M5 => 5,
        }
    }

    /// Returns the label, e.g. `"M1"`.
    pub fn label(&self) -> &'static str {
        match self {
            CommissionPeriod::M1 => "M1",
            CommissionPeriod::M2 => "M2",
            CommissionPeriod::M3 => "M3",
            CommissionPeriod::M4 => "M4",
            CommissionPeriod::M5 => "M5",
        }
    }
}

impl fmt::Display for CommissionPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CommissionPeriod {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        CommissionPeriod::ALL
            .into_iter()
            .find(|p| p.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| EngineError::InvalidPeriodLabel {
                label: s.to_string(),
            })
    }
}

/// Start and end dates of a period, either of which may be unknown.
///
/// Both are `None` when the year or month could not be parsed; callers must
/// treat that as "dates unknown" and hold back anything that depends on them.
///
/// # Example
///
/// ```
/// use kpi_engine::models::PeriodDates;
///
/// let unknown = PeriodDates::unknown();
/// assert!(!unknown.is_known());
/// assert_eq!(
///     serde_json::to_string(&unknown).unwrap(),
///     r#"{"start":null,"end":null}"#
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodDates {
    /// First day of the period (inclusive).
    pub start: Option<NaiveDate>,
    /// Last day of the period (inclusive).
    pub end: Option<NaiveDate>,
}

impl PeriodDates {
    /// Dates that could not be determined.
    pub fn unknown() -> Self {
        Self {
            start: None,
            end: None,
        }
    }

    /// Returns true when both dates are present.
    pub fn is_known(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }
}

impl From<PeriodRange> for PeriodDates {
    fn from(range: PeriodRange) -> Self {
        Self {
            start: Some(range.start),
            end: Some(range.end),
        }
    }
}

/// A resolved commission period with inclusive bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodRange {
    /// Which period this is.
    pub period: CommissionPeriod,
    /// First day (inclusive).
    pub start: NaiveDate,
    /// Last day (inclusive).
    pub end: NaiveDate,
}

impl PeriodRange {
    /// Checks whether a date falls within the range, inclusive of both ends.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Number of calendar days covered, counting both ends.
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_parse_labels_case_insensitive() {
        assert_eq!("M1".parse::<CommissionPeriod>().unwrap(), CommissionPeriod::M1);
        assert_eq!("m5".parse::<CommissionPeriod>().unwrap(), CommissionPeriod::M5);
        assert_eq!(" M2 ".parse::<CommissionPeriod>().unwrap(), CommissionPeriod::M2);
    }

    #[test]
    fn test_parse_unknown_label_errors() {
        match "M0".parse::<CommissionPeriod>() {
            Err(EngineError::InvalidPeriodLabel { label }) => assert_eq!(label, "M0"),
            other => panic!("Expected InvalidPeriodLabel, got {:?}", other),
        }
        assert!("".parse::<CommissionPeriod>().is_err());
    }

    #[test]
    fn test_period_numbers_follow_calendar_order() {
        let numbers: Vec<u32> = CommissionPeriod::ALL.iter().map(|p| p.number()).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_serde_uses_label() {
        let json = serde_json::to_string(&CommissionPeriod::M4).unwrap();
        assert_eq!(json, "\"M4\"");
        let period: CommissionPeriod = serde_json::from_str("\"M2\"").unwrap();
        assert_eq!(period, CommissionPeriod::M2);
    }

    #[test]
    fn test_period_dates_serialize_as_iso_dates() {
        let dates = PeriodDates {
            start: Some(make_date("2024-03-04")),
            end: Some(make_date("2024-03-10")),
        };
        let json = serde_json::to_string(&dates).unwrap();
        assert_eq!(json, r#"{"start":"2024-03-04","end":"2024-03-10"}"#);
        assert!(dates.is_known());
    }

    #[test]
    fn test_range_contains_and_days() {
        let range = PeriodRange {
            period: CommissionPeriod::M2,
            start: make_date("2024-03-04"),
            end: make_date("2024-03-10"),
        };
        assert!(range.contains(make_date("2024-03-04")));
        assert!(range.contains(make_date("2024-03-10")));
        assert!(!range.contains(make_date("2024-03-11")));
        assert!(!range.contains(make_date("2024-03-03")));
        assert_eq!(range.days(), 7);
    }

    #[test]
    fn test_range_converts_to_known_dates() {
        let range = PeriodRange {
            period: CommissionPeriod::M1,
            start: make_date("2024-09-01"),
            end: make_date("2024-09-01"),
        };
        let dates: PeriodDates = range.into();
        assert_eq!(dates.start, dates.end);
        assert_eq!(range.days(), 1);
    }
}

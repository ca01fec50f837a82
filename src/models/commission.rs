//! Commission entry models.
//!
//! A [`CommissionDraft`] holds what the commission-entry form collects: the
//! year and month selectors as raw strings, a period label and an amount.
//! Resolving it computes the period dates and yields a [`CommissionRecord`]
//! ready for storage, or fails when the dates are unknown.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::calculate_period_dates;
use crate::error::{EngineError, EngineResult};

use super::CommissionPeriod;

/// An unsubmitted commission entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommissionDraft {
    /// Identifier of the employee earning the commission.
    pub employee_id: String,
    /// Identifier of the affiliate account the commission came from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    /// Year selector value, e.g. `"2024"`.
    pub year: String,
    /// Zero-based month selector value, e.g. `"2"` for March.
    pub month: String,
    /// The commission period within the month.
    pub period: CommissionPeriod,
    /// Commission amount in currency units.
    pub amount: Decimal,
    /// Free-form notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// A commission entry with its period dates resolved.
///
/// `period_start` and `period_end` serialize as `yyyy-MM-dd`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommissionRecord {
    /// Identifier of the employee earning the commission.
    pub employee_id: String,
    /// Identifier of the affiliate account the commission came from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    /// The commission period within the month.
    pub period: CommissionPeriod,
    /// First day of the period (inclusive).
    pub period_start: NaiveDate,
    /// Last day of the period (inclusive).
    pub period_end: NaiveDate,
    /// Commission amount in currency units.
    pub amount: Decimal,
    /// Free-form notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl CommissionDraft {
    /// Computes the period dates and builds the record to persist.
    ///
    /// # Errors
    ///
    /// Returns `PeriodDatesUnknown` when the year or month cannot be parsed.
    ///
    /// # Example
    ///
    /// ```
    /// use kpi_engine::models::{CommissionDraft, CommissionPeriod};
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    ///
    /// let draft = CommissionDraft {
    ///     employee_id: "emp_001".to_string(),
    ///     account_id: None,
    ///     year: "2024".to_string(),
    ///     month: "2".to_string(),
    ///     period: CommissionPeriod::M2,
    ///     amount: Decimal::from(250_000),
    ///     notes: None,
    /// };
    ///
    /// let record = draft.resolve().unwrap();
    /// assert_eq!(record.period_start, NaiveDate::from_ymd_opt(2024, 3, 4).unwrap());
    /// assert_eq!(record.period_end, NaiveDate::from_ymd_opt(2024, 3, 10).unwrap());
    /// ```
    pub fn resolve(&self) -> EngineResult<CommissionRecord> {
        let dates = calculate_period_dates(&self.year, &self.month, self.period);

        match (dates.start, dates.end) {
            (Some(period_start), Some(period_end)) => Ok(CommissionRecord {
                employee_id: self.employee_id.clone(),
                account_id: self.account_id.clone(),
                period: self.period,
                period_start,
                period_end,
                amount: self.amount,
                notes: self.notes.clone(),
            }),
            _ => Err(EngineError::PeriodDatesUnknown {
                year: self.year.clone(),
                month: self.month.clone(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_draft(year: &str, month: &str, period: CommissionPeriod) -> CommissionDraft {
        CommissionDraft {
            employee_id: "emp_001".to_string(),
            account_id: Some("acc_042".to_string()),
            year: year.to_string(),
            month: month.to_string(),
            period,
            amount: Decimal::from(125_000),
            notes: None,
        }
    }

    #[test]
    fn test_resolve_march_2024_m5() {
        let record = create_draft("2024", "2", CommissionPeriod::M5).resolve().unwrap();
        assert_eq!(record.period_start, NaiveDate::from_ymd_opt(2024, 3, 25).unwrap());
        assert_eq!(record.period_end, NaiveDate::from_ymd_opt(2024, 3, 31).unwrap());
        assert_eq!(record.account_id.as_deref(), Some("acc_042"));
        assert_eq!(record.amount, Decimal::from(125_000));
    }

    #[test]
    fn test_resolve_unparseable_year_blocks_submission() {
        let result = create_draft("abcd", "2", CommissionPeriod::M1).resolve();
        match result {
            Err(EngineError::PeriodDatesUnknown { year, month }) => {
                assert_eq!(year, "abcd");
                assert_eq!(month, "2");
            }
            other => panic!("Expected PeriodDatesUnknown, got {:?}", other),
        }
    }

    #[test]
    fn test_resolve_out_of_range_month_blocks_submission() {
        let result = create_draft("2024", "12", CommissionPeriod::M1).resolve();
        assert!(matches!(result, Err(EngineError::PeriodDatesUnknown { .. })));
    }

    #[test]
    fn test_record_serializes_period_fields_as_dates() {
        let record = create_draft("2024", "2", CommissionPeriod::M1).resolve().unwrap();
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["period_start"], "2024-03-01");
        assert_eq!(json["period_end"], "2024-03-03");
        assert_eq!(json["period"], "M1");
        assert!(json.get("notes").is_none());
    }
}

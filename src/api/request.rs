//! Request types for the KPI Engine API.
//!
//! This module defines the JSON bodies and query strings accepted by the
//! scoring, ranking and period endpoints.

use serde::{Deserialize, Serialize};

use crate::models::{EmployeeKpi, KpiInput};

/// Request body for the `/kpi/score` endpoint.
///
/// The KPI figures sit at the top level next to the employee fields; any of
/// them may be omitted or null and then count as zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KpiScoreRequest {
    /// Identifier of the employee.
    pub employee_id: String,
    /// Display name of the employee.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_name: Option<String>,
    /// Calendar year of the figures.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    /// Calendar month of the figures (1 = January).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub month: Option<u32>,
    /// The raw figures.
    #[serde(flatten)]
    pub input: KpiInput,
}

impl From<KpiScoreRequest> for EmployeeKpi {
    fn from(req: KpiScoreRequest) -> Self {
        EmployeeKpi {
            employee_id: req.employee_id,
            employee_name: req.employee_name,
            year: req.year,
            month: req.month,
            input: req.input,
        }
    }
}

/// Request body for the `/kpi/ranking` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KpiRankingRequest {
    /// The employee-months to rank.
    pub entries: Vec<KpiScoreRequest>,
}

/// Query string for `GET /periods`.
///
/// Year and month stay as raw strings so that unparseable values produce
/// unknown dates rather than a rejected request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodQuery {
    /// Year selector value.
    #[serde(default)]
    pub year: String,
    /// Zero-based month selector value.
    #[serde(default)]
    pub month: String,
    /// Period label, M1 to M5.
    pub period: String,
}

/// Query string for `GET /periods/month`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthQuery {
    /// Calendar year.
    pub year: i32,
    /// Zero-based month (0 = January).
    pub month: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_deserialize_score_request() {
        let json = r#"{
            "employee_id": "emp_001",
            "employee_name": "Rina",
            "year": 2024,
            "month": 3,
            "actual_sales": "5000000",
            "sales_target": "10000000",
            "actual_commission": "300000",
            "commission_target": "1000000",
            "actual_attendance": 20,
            "attendance_target": 20
        }"#;

        let request: KpiScoreRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.employee_id, "emp_001");
        assert_eq!(request.month, Some(3));
        assert_eq!(request.input.sales_target, Some(Decimal::from(10_000_000)));
        assert_eq!(request.input.attendance_target, Some(20));
    }

    #[test]
    fn test_deserialize_score_request_with_nulls() {
        let json = r#"{
            "employee_id": "emp_002",
            "actual_sales": null,
            "sales_target": "500"
        }"#;

        let request: KpiScoreRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.input.actual_sales, None);
        assert_eq!(request.input.actual_attendance, None);
        assert!(request.employee_name.is_none());
    }

    #[test]
    fn test_score_request_converts_to_employee_kpi() {
        let request = KpiScoreRequest {
            employee_id: "emp_003".to_string(),
            employee_name: Some("Dewi".to_string()),
            year: None,
            month: None,
            input: KpiInput::default(),
        };

        let record: EmployeeKpi = request.into();
        assert_eq!(record.employee_id, "emp_003");
        assert_eq!(record.employee_name.as_deref(), Some("Dewi"));
    }

    #[test]
    fn test_deserialize_ranking_request() {
        let json = r#"{
            "entries": [
                {"employee_id": "a", "actual_sales": "10", "sales_target": "10"},
                {"employee_id": "b"}
            ]
        }"#;

        let request: KpiRankingRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.entries.len(), 2);
        assert_eq!(request.entries[1].input, KpiInput::default());
    }
}

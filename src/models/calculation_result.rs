//! Calculation result models for the KPI Engine.
//!
//! This module contains the [`KpiCalculationResult`] and [`KpiRankingResult`]
//! types and the audit structures that record how each score was reached.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{KpiBreakdown, KpiRankingEntry};

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// Reference to the policy entry driving this rule (e.g., "kpi.weights").
    pub policy_ref: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings indicate inputs that were scored but may need attention, such as
/// a metric with no target set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a calculation.
///
/// # Example
///
/// ```
/// use kpi_engine::models::AuditTrace;
///
/// let trace = AuditTrace {
///     steps: vec![],
///     warnings: vec![],
///     duration_us: 12,
/// };
/// assert!(trace.steps.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

/// The result of scoring one employee-month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KpiCalculationResult {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The ID of the employee the calculation is for.
    pub employee_id: String,
    /// Calendar year of the figures, if supplied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    /// Calendar month of the figures (1 = January), if supplied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub month: Option<u32>,
    /// The scored breakdown.
    pub breakdown: KpiBreakdown,
    /// Complete audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
}

/// The result of ranking a set of employee-months.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KpiRankingResult {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// Ranked entries, highest total first.
    pub entries: Vec<KpiRankingEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_sample_breakdown() -> KpiBreakdown {
        KpiBreakdown {
            sales_percentage: dec("50"),
            commission_percentage: dec("30"),
            attendance_percentage: dec("100"),
            total_kpi: dec("54"),
        }
    }

    fn create_sample_result() -> KpiCalculationResult {
        KpiCalculationResult {
            calculation_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            engine_version: "0.1.0".to_string(),
            employee_id: "emp_001".to_string(),
            year: Some(2024),
            month: None,
            breakdown: create_sample_breakdown(),
            audit_trace: AuditTrace {
                steps: vec![AuditStep {
                    step_number: 1,
                    rule_id: "weighted_total".to_string(),
                    rule_name: "Weighted KPI Total".to_string(),
                    policy_ref: "kpi.weights".to_string(),
                    input: serde_json::json!({"sales": "50"}),
                    output: serde_json::json!({"total_kpi": "54"}),
                    reasoning: "blend".to_string(),
                }],
                warnings: vec![],
                duration_us: 3,
            },
        }
    }

    #[test]
    fn test_result_serializes_decimals_as_strings() {
        let result = create_sample_result();
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["breakdown"]["total_kpi"], "54");
        assert_eq!(json["employee_id"], "emp_001");
        assert_eq!(json["year"], 2024);
        assert!(json.get("month").is_none());
    }

    #[test]
    fn test_result_round_trips_through_json() {
        let result = create_sample_result();
        let json = serde_json::to_string(&result).unwrap();
        let parsed: KpiCalculationResult = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, result);
    }

    #[test]
    fn test_audit_warning_serialization() {
        let warning = AuditWarning {
            code: "TARGET_NOT_SET".to_string(),
            message: "Sales target is zero".to_string(),
            severity: "low".to_string(),
        };
        let json = serde_json::to_string(&warning).unwrap();
        assert!(json.contains("\"code\":\"TARGET_NOT_SET\""));
        assert!(json.contains("\"severity\":\"low\""));
    }
}

//! KPI input and output models.
//!
//! This module defines the per-employee, per-month [`KpiInput`] with its
//! explicit null-means-zero policy, and the [`KpiBreakdown`] produced by
//! scoring it.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The three metrics that make up a KPI score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KpiMetric {
    /// Sales revenue against the sales target.
    Sales,
    /// Commission earned against the commission target.
    Commission,
    /// Days attended against the attendance target.
    Attendance,
}

impl KpiMetric {
    /// All metrics in scoring order.
    pub const ALL: [KpiMetric; 3] = [KpiMetric::Sales, KpiMetric::Commission, KpiMetric::Attendance];

    /// Returns the snake_case name used in audit records.
    pub fn as_str(&self) -> &'static str {
        match self {
            KpiMetric::Sales => "sales",
            KpiMetric::Commission => "commission",
            KpiMetric::Attendance => "attendance",
        }
    }
}

impl std::fmt::Display for KpiMetric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KpiMetric::Sales => write!(f, "Sales"),
            KpiMetric::Commission => write!(f, "Commission"),
            KpiMetric::Attendance => write!(f, "Attendance"),
        }
    }
}

/// A sanitized actual/target pair for one metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricPair {
    /// The achieved value.
    pub actual: Decimal,
    /// The target value; zero means "not evaluated".
    pub target: Decimal,
}

/// Raw KPI figures for one employee in one month.
///
/// Every field is optional because the backing rows may hold nulls. A missing
/// value is treated as zero, and so is a negative one; use the accessor
/// methods rather than the fields when scoring.
///
/// # Example
///
/// ```
/// use kpi_engine::models::{KpiInput, KpiMetric};
/// use rust_decimal::Decimal;
///
/// let input = KpiInput {
///     actual_sales: Some(Decimal::from(5_000_000)),
///     sales_target: Some(Decimal::from(10_000_000)),
///     actual_commission: None,
///     commission_target: Some(Decimal::from(1_000_000)),
///     actual_attendance: Some(20),
///     attendance_target: Some(20),
/// };
///
/// assert_eq!(input.pair(KpiMetric::Commission).actual, Decimal::ZERO);
/// assert_eq!(input.pair(KpiMetric::Attendance).target, Decimal::from(20));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KpiInput {
    /// Sales achieved in the month.
    #[serde(default)]
    pub actual_sales: Option<Decimal>,
    /// Sales target for the month.
    #[serde(default)]
    pub sales_target: Option<Decimal>,
    /// Commission earned in the month.
    #[serde(default)]
    pub actual_commission: Option<Decimal>,
    /// Commission target for the month.
    #[serde(default)]
    pub commission_target: Option<Decimal>,
    /// Days attended in the month.
    #[serde(default)]
    pub actual_attendance: Option<u32>,
    /// Attendance target in days.
    #[serde(default)]
    pub attendance_target: Option<u32>,
}

impl KpiInput {
    /// Builds an input where every figure is present.
    pub fn new(
        actual_sales: Decimal,
        sales_target: Decimal,
        actual_commission: Decimal,
        commission_target: Decimal,
        actual_attendance: u32,
        attendance_target: u32,
    ) -> Self {
        Self {
            actual_sales: Some(actual_sales),
            sales_target: Some(sales_target),
            actual_commission: Some(actual_commission),
            commission_target: Some(commission_target),
            actual_attendance: Some(actual_attendance),
            attendance_target: Some(attendance_target),
        }
    }

    /// Returns the sanitized actual/target pair for a metric.
    pub fn pair(&self, metric: KpiMetric) -> MetricPair {
        match metric {
            KpiMetric::Sales => MetricPair {
                actual: non_negative(self.actual_sales),
                target: non_negative(self.sales_target),
            },
            KpiMetric::Commission => MetricPair {
                actual: non_negative(self.actual_commission),
                target: non_negative(self.commission_target),
            },
            KpiMetric::Attendance => MetricPair {
                actual: Decimal::from(self.actual_attendance.unwrap_or(0)),
                target: Decimal::from(self.attendance_target.unwrap_or(0)),
            },
        }
    }

    /// Lists the metrics whose target is zero or missing.
    pub fn unset_targets(&self) -> Vec<KpiMetric> {
        KpiMetric::ALL
            .into_iter()
            .filter(|m| self.pair(*m).target.is_zero())
            .collect()
    }
}

fn non_negative(value: Option<Decimal>) -> Decimal {
    value.unwrap_or_default().max(Decimal::ZERO)
}

/// A scored KPI: the blended total plus the capped metric percentages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KpiBreakdown {
    /// Sales percentage, capped at the component cap.
    pub sales_percentage: Decimal,
    /// Commission percentage, capped at the component cap.
    pub commission_percentage: Decimal,
    /// Attendance percentage, capped at the component cap.
    pub attendance_percentage: Decimal,
    /// The weighted total, capped at the score cap.
    pub total_kpi: Decimal,
}

impl KpiBreakdown {
    /// Returns the capped percentage for one metric.
    pub fn percentage(&self, metric: KpiMetric) -> Decimal {
        match metric {
            KpiMetric::Sales => self.sales_percentage,
            KpiMetric::Commission => self.commission_percentage,
            KpiMetric::Attendance => self.attendance_percentage,
        }
    }
}

/// KPI figures for a named employee and month, as fetched by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeKpi {
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

/// One row of a KPI ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KpiRankingEntry {
    /// 1-based position, highest total first.
    pub rank: u32,
    /// Identifier of the employee.
    pub employee_id: String,
    /// Display name of the employee.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_name: Option<String>,
    /// The scored breakdown.
    pub breakdown: KpiBreakdown,
}

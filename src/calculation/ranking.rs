//! KPI ranking functionality.
//!
//! Scores a set of employee-months and orders them for the ranking views.

use crate::config::KpiPolicy;
use crate::models::{EmployeeKpi, KpiRankingEntry};

use super::score_breakdown;

/// Scores every record and ranks them by total KPI, highest first.
///
/// Ties keep their input order and still receive distinct, consecutive ranks.
///
/// # Examples
///
/// ```
/// use kpi_engine::calculation::rank_employees;
/// use kpi_engine::config::KpiPolicy;
/// use kpi_engine::models::{EmployeeKpi, KpiInput};
/// use rust_decimal::Decimal;
///
/// let record = |id: &str, sales: i64| EmployeeKpi {
///     employee_id: id.to_string(),
///     employee_name: None,
///     year: Some(2024),
///     month: Some(3),
///     input: KpiInput::new(
///         Decimal::from(sales),
///         Decimal::from(100),
///         Decimal::ZERO,
///         Decimal::ZERO,
///         0,
///         0,
///     ),
/// };
///
/// let ranking = rank_employees(&[record("a", 40), record("b", 90)], &KpiPolicy::default());
/// assert_eq!(ranking[0].employee_id, "b");
/// assert_eq!(ranking[0].rank, 1);
/// assert_eq!(ranking[1].rank, 2);
/// ```
pub fn rank_employees(records: &[EmployeeKpi], policy: &KpiPolicy) -> Vec<KpiRankingEntry> {
    let mut scored: Vec<KpiRankingEntry> = records
        .iter()
        .map(|record| KpiRankingEntry {
            rank: 0,
            employee_id: record.employee_id.clone(),
            employee_name: record.employee_name.clone(),
            breakdown: score_breakdown(&record.input, policy),
        })
        .collect();

    scored.sort_by(|a, b| b.breakdown.total_kpi.cmp(&a.breakdown.total_kpi));

    for (position, entry) in scored.iter_mut().enumerate() {
        entry.rank = position as u32 + 1;
    }

    scored
}

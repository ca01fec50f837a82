//! KPI scoring functionality.
//!
//! This module converts raw actual/target figures into metric percentages and
//! blends them into a single weighted KPI score. Two caps apply: each reported
//! metric percentage is capped on its own, and the blended total (computed
//! from the uncapped percentages) is capped after weighting.

use rust_decimal::Decimal;

use crate::config::{KpiPolicy, KpiWeights};
use crate::models::{AuditStep, AuditWarning, KpiBreakdown, KpiInput, KpiMetric};

/// Warning code emitted when a metric has no target.
pub const TARGET_NOT_SET_WARNING: &str = "TARGET_NOT_SET";

/// The result of scoring a KPI input, including the audit record.
#[derive(Debug, Clone)]
pub struct KpiScoreResult {
    /// The scored breakdown.
    pub breakdown: KpiBreakdown,
    /// One step per metric followed by the weighting step.
    pub audit_steps: Vec<AuditStep>,
    /// A warning for each metric whose target is zero.
    pub warnings: Vec<AuditWarning>,
}

/// Computes `actual / target * 100`, or zero when the target is not positive.
///
/// A zero target means the metric is not evaluated: it contributes nothing,
/// rather than counting as fully met. Arithmetic overflow saturates at
/// [`Decimal::MAX`], which every cap then pulls back down.
///
/// # Examples
///
/// ```
/// use kpi_engine::calculation::metric_percentage;
/// use rust_decimal::Decimal;
///
/// assert_eq!(metric_percentage(Decimal::from(15), Decimal::from(20)), Decimal::from(75));
/// assert_eq!(metric_percentage(Decimal::from(15), Decimal::ZERO), Decimal::ZERO);
/// ```
pub fn metric_percentage(actual: Decimal, target: Decimal) -> Decimal {
    if target <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    actual
        .checked_div(target)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .unwrap_or(Decimal::MAX)
}

fn weighted(percentage: Decimal, weight: Decimal) -> Decimal {
    percentage
        .checked_mul(weight)
        .and_then(|v| v.checked_div(Decimal::ONE_HUNDRED))
        .unwrap_or(Decimal::MAX)
}

fn weighted_total(
    sales: Decimal,
    commission: Decimal,
    attendance: Decimal,
    weights: &KpiWeights,
) -> Decimal {
    weighted(sales, weights.sales)
        .checked_add(weighted(commission, weights.commission))
        .and_then(|v| v.checked_add(weighted(attendance, weights.attendance)))
        .unwrap_or(Decimal::MAX)
}

/// Scores an input under a policy without recording an audit trail.
pub fn score_breakdown(input: &KpiInput, policy: &KpiPolicy) -> KpiBreakdown {
    let raw = |metric| {
        let pair = input.pair(metric);
        metric_percentage(pair.actual, pair.target)
    };
    let sales = raw(KpiMetric::Sales);
    let commission = raw(KpiMetric::Commission);
    let attendance = raw(KpiMetric::Attendance);

    let total = weighted_total(sales, commission, attendance, &policy.weights);

    KpiBreakdown {
        sales_percentage: sales.min(policy.component_cap),
        commission_percentage: commission.min(policy.component_cap),
        attendance_percentage: attendance.min(policy.component_cap),
        total_kpi: total.min(policy.score_cap),
    }
}

/// Computes the total KPI using the default 50/30/20 weighting.
///
/// # Examples
///
/// ```
/// use kpi_engine::calculation::calculate_total_kpi;
/// use rust_decimal::Decimal;
///
/// // sales 50%, commission 30%, attendance 100%
/// let total = calculate_total_kpi(
///     Decimal::from(5_000_000),
///     Decimal::from(10_000_000),
///     Decimal::from(300_000),
///     Decimal::from(1_000_000),
///     20,
///     20,
/// );
/// assert_eq!(total, Decimal::from(54));
/// ```
pub fn calculate_total_kpi(
    actual_sales: Decimal,
    sales_target: Decimal,
    actual_commission: Decimal,
    commission_target: Decimal,
    actual_attendance: u32,
    attendance_target: u32,
) -> Decimal {
    let input = KpiInput::new(
        actual_sales,
        sales_target,
        actual_commission,
        commission_target,
        actual_attendance,
        attendance_target,
    );
    score_breakdown(&input, &KpiPolicy::default()).total_kpi
}

/// Scores an input under a policy and records every step.
///
/// # Arguments
///
/// * `input` - The raw figures; missing values count as zero
/// * `policy` - Weights and caps to apply
/// * `step_number` - The step number for audit trail sequencing
///
/// # Examples
///
/// ```
/// use kpi_engine::calculation::calculate_kpi;
/// use kpi_engine::config::KpiPolicy;
/// use kpi_engine::models::KpiInput;
/// use rust_decimal::Decimal;
///
/// let input = KpiInput::new(
///     Decimal::from(100),
///     Decimal::from(100),
///     Decimal::from(40),
///     Decimal::from(40),
///     22,
///     22,
/// );
/// let result = calculate_kpi(&input, &KpiPolicy::default(), 1);
///
/// assert_eq!(result.breakdown.total_kpi, Decimal::ONE_HUNDRED);
/// assert_eq!(result.audit_steps.len(), 4);
/// assert!(result.warnings.is_empty());
/// ```
pub fn calculate_kpi(input: &KpiInput, policy: &KpiPolicy, step_number: u32) -> KpiScoreResult {
    let mut audit_steps = Vec::with_capacity(KpiMetric::ALL.len() + 1);
    let mut warnings = Vec::new();
    let mut step = step_number;

    let mut raw = [Decimal::ZERO; 3];
    for (slot, metric) in raw.iter_mut().zip(KpiMetric::ALL) {
        let pair = input.pair(metric);
        let percentage = metric_percentage(pair.actual, pair.target);
        let capped = percentage.min(policy.component_cap);
        let target_set = pair.target > Decimal::ZERO;
        *slot = percentage;

        let reasoning = if target_set {
            format!(
                "{} {} / {} × 100 = {}%{}",
                metric,
                pair.actual.normalize(),
                pair.target.normalize(),
                percentage.normalize(),
                if capped < percentage {
                    format!(" (reported as {}%)", capped.normalize())
                } else {
                    String::new()
                }
            )
        } else {
            warnings.push(AuditWarning {
                code: TARGET_NOT_SET_WARNING.to_string(),
                message: format!("{} target is zero; metric contributes 0", metric),
                severity: "low".to_string(),
            });
            format!("{} target not set - contributes 0%", metric)
        };

        audit_steps.push(AuditStep {
            step_number: step,
            rule_id: format!("{}_percentage", metric.as_str()),
            rule_name: format!("{} Percentage", metric),
            policy_ref: "kpi.component_cap".to_string(),
            input: serde_json::json!({
                "actual": pair.actual.normalize().to_string(),
                "target": pair.target.normalize().to_string()
            }),
            output: serde_json::json!({
                "target_set": target_set,
                "raw_percentage": percentage.normalize().to_string(),
                "reported_percentage": capped.normalize().to_string()
            }),
            reasoning,
        });
        step += 1;
    }

    let [sales, commission, attendance] = raw;
    let weights = &policy.weights;
    let blended = weighted_total(sales, commission, attendance, weights);
    let total = blended.min(policy.score_cap);

    let reasoning = if blended > total {
        format!(
            "{}% × {} + {}% × {} + {}% × {} = {} (capped at {})",
            sales.normalize(),
            weights.sales.normalize(),
            commission.normalize(),
            weights.commission.normalize(),
            attendance.normalize(),
            weights.attendance.normalize(),
            blended.normalize(),
            policy.score_cap.normalize()
        )
    } else {
        format!(
            "{}% × {} + {}% × {} + {}% × {} = {}",
            sales.normalize(),
            weights.sales.normalize(),
            commission.normalize(),
            weights.commission.normalize(),
            attendance.normalize(),
            weights.attendance.normalize(),
            total.normalize()
        )
    };

    audit_steps.push(AuditStep {
        step_number: step,
        rule_id: "weighted_total".to_string(),
        rule_name: "Weighted KPI Total".to_string(),
        policy_ref: "kpi.weights, kpi.score_cap".to_string(),
        input: serde_json::json!({
            "sales_percentage": sales.normalize().to_string(),
            "commission_percentage": commission.normalize().to_string(),
            "attendance_percentage": attendance.normalize().to_string(),
            "sales_weight": weights.sales.normalize().to_string(),
            "commission_weight": weights.commission.normalize().to_string(),
            "attendance_weight": weights.attendance.normalize().to_string()
        }),
        output: serde_json::json!({
            "blended": blended.normalize().to_string(),
            "total_kpi": total.normalize().to_string(),
            "cap_applied": blended > total
        }),
        reasoning,
    });

    KpiScoreResult {
        breakdown: KpiBreakdown {
            sales_percentage: sales.min(policy.component_cap),
            commission_percentage: commission.min(policy.component_cap),
            attendance_percentage: attendance.min(policy.component_cap),
            total_kpi: total,
        },
        audit_steps,
        warnings,
    }
}

//! Core data models for the KPI Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod calculation_result;
mod commission;
mod kpi;
mod period;

pub use calculation_result::{
    AuditStep, AuditTrace, AuditWarning, KpiCalculationResult, KpiRankingResult,
};
pub use commission::{CommissionDraft, CommissionRecord};
pub use kpi::{EmployeeKpi, KpiBreakdown, KpiInput, KpiMetric, KpiRankingEntry, MetricPair};
pub use period::{CommissionPeriod, PeriodDates, PeriodRange};

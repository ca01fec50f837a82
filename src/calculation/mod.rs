//! Calculation logic for the KPI Engine.
//!
//! This module contains the KPI scorer (metric percentages, weighted total,
//! and ranking) and the commission period calculator that splits a month
//! into periods M1 to M5.

mod kpi_score;
mod period_dates;
mod ranking;

pub use kpi_score::{
    KpiScoreResult, TARGET_NOT_SET_WARNING, calculate_kpi, calculate_total_kpi, metric_percentage,
    score_breakdown,
};
pub use period_dates::{
    calculate_period_dates, find_period, first_sunday_on_or_after, month_bounds, month_periods,
    period_range,
};
pub use ranking::rank_employees;

//! HTTP request handlers for the KPI Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{
        Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::Utc;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{calculate_kpi, calculate_period_dates, month_periods, rank_employees};
use crate::error::EngineError;
use crate::models::{
    AuditTrace, CommissionDraft, CommissionPeriod, EmployeeKpi, KpiCalculationResult,
    KpiRankingResult,
};

use super::request::{KpiRankingRequest, KpiScoreRequest, MonthQuery, PeriodQuery};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/kpi/score", post(score_handler))
        .route("/kpi/ranking", post(ranking_handler))
        .route("/periods", get(period_dates_handler))
        .route("/periods/month", get(month_periods_handler))
        .route("/commissions/resolve", post(resolve_commission_handler))
        .with_state(state)
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn engine_error_response(err: EngineError) -> Response {
    let api_error: ApiErrorResponse = err.into();
    json_response(api_error.status, api_error.error)
}

fn json_rejection_response(rejection: JsonRejection, correlation_id: Uuid) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    json_response(StatusCode::BAD_REQUEST, error)
}

fn query_rejection_response(rejection: QueryRejection, correlation_id: Uuid) -> Response {
    let body_text = rejection.body_text();
    warn!(
        correlation_id = %correlation_id,
        error = %body_text,
        "Query string error"
    );
    json_response(StatusCode::BAD_REQUEST, ApiError::validation_error(body_text))
}

/// Handler for POST /kpi/score.
///
/// Scores one employee-month and returns the breakdown with its audit trace.
async fn score_handler(
    State(state): State<AppState>,
    payload: Result<Json<KpiScoreRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing KPI score request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return json_rejection_response(rejection, correlation_id),
    };
    let record: EmployeeKpi = request.into();

    let start_time = Instant::now();
    let scored = calculate_kpi(&record.input, state.config().kpi_policy(), 1);
    let duration = start_time.elapsed();

    info!(
        correlation_id = %correlation_id,
        employee_id = %record.employee_id,
        total_kpi = %scored.breakdown.total_kpi.normalize(),
        warnings = scored.warnings.len(),
        duration_us = duration.as_micros(),
        "KPI score calculated"
    );

    let result = KpiCalculationResult {
        calculation_id: correlation_id,
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        employee_id: record.employee_id,
        year: record.year,
        month: record.month,
        breakdown: scored.breakdown,
        audit_trace: AuditTrace {
            steps: scored.audit_steps,
            warnings: scored.warnings,
            duration_us: duration.as_micros() as u64,
        },
    };

    json_response(StatusCode::OK, result)
}

/// Handler for POST /kpi/ranking.
async fn ranking_handler(
    State(state): State<AppState>,
    payload: Result<Json<KpiRankingRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing KPI ranking request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return json_rejection_response(rejection, correlation_id),
    };
    let records: Vec<EmployeeKpi> = request.entries.into_iter().map(Into::into).collect();

    let start_time = Instant::now();
    let entries = rank_employees(&records, state.config().kpi_policy());

    info!(
        correlation_id = %correlation_id,
        employees = entries.len(),
        duration_us = start_time.elapsed().as_micros(),
        "KPI ranking calculated"
    );

    json_response(
        StatusCode::OK,
        KpiRankingResult {
            calculation_id: correlation_id,
            timestamp: Utc::now(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            entries,
        },
    )
}

/// Handler for GET /periods.
///
/// Unparseable year or month values yield `{"start": null, "end": null}`
/// with status 200; only an unknown period label is rejected.
async fn period_dates_handler(query: Result<Query<PeriodQuery>, QueryRejection>) -> Response {
    let correlation_id = Uuid::new_v4();

    let Query(query) = match query {
        Ok(q) => q,
        Err(rejection) => return query_rejection_response(rejection, correlation_id),
    };

    let period: CommissionPeriod = match query.period.parse() {
        Ok(p) => p,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Invalid period label");
            return engine_error_response(err);
        }
    };

    let dates = calculate_period_dates(&query.year, &query.month, period);
    if !dates.is_known() {
        warn!(
            correlation_id = %correlation_id,
            year = %query.year,
            month = %query.month,
            period = %period,
            "Period dates unknown"
        );
    }

    json_response(StatusCode::OK, dates)
}

/// Handler for GET /periods/month.
async fn month_periods_handler(query: Result<Query<MonthQuery>, QueryRejection>) -> Response {
    let correlation_id = Uuid::new_v4();

    let Query(query) = match query {
        Ok(q) => q,
        Err(rejection) => return query_rejection_response(rejection, correlation_id),
    };

    match month_periods(query.year, query.month) {
        Ok(periods) => json_response(StatusCode::OK, periods),
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Month periods failed");
            engine_error_response(err)
        }
    }
}

/// Handler for POST /commissions/resolve.
///
/// Fills in `period_start` and `period_end` for a commission draft, refusing
/// drafts whose period dates cannot be determined.
async fn resolve_commission_handler(
    payload: Result<Json<CommissionDraft>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing commission draft");

    let draft = match payload {
        Ok(Json(draft)) => draft,
        Err(rejection) => return json_rejection_response(rejection, correlation_id),
    };

    match draft.resolve() {
        Ok(record) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = %record.employee_id,
                period = %record.period,
                period_start = %record.period_start,
                period_end = %record.period_end,
                "Commission draft resolved"
            );
            json_response(StatusCode::OK, record)
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Commission draft rejected");
            engine_error_response(err)
        }
    }
}

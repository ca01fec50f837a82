//! HTTP API module for the KPI Engine.
//!
//! This module provides the REST API endpoints for KPI scoring, KPI ranking
//! and commission period resolution.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{KpiRankingRequest, KpiScoreRequest, MonthQuery, PeriodQuery};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;

//! HTTP API
//!
//! Read-only JSON endpoints over the stats engine:
//! - `GET /health`
//! - `GET /api/stats?birthdate=..&life_expectancy=..`
//! - `GET /api/grid?birthdate=..&life_expectancy=..`
//! - `GET /api/mastery?birthdate=..&hours_per_week=..`
//! - `GET /api/weekly-budget`
//! - `GET /api/income`

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use lifeweeks_core::LifeError;
use lifeweeks_grid::{GridRenderer, RenderConfig, WeekCounts, WeekGrid};
use lifeweeks_stats::{
    check_life_expectancy, income_breakdown, weekly_time_budget, AllStats, IncomeBreakdown,
    MasteryRow, MasteryStats, StatsEngine, WeeklyTimeBudget,
};
use lifeweeks_time::Birthdate;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::net::TcpListener;

/// Handler failures; all map to 400 with an `{ "error": .. }` body
#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Life(#[from] LifeError),

    #[error("missing query parameter '{0}'")]
    MissingParam(&'static str),

    #[error("invalid query: {0}")]
    Query(String),
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::Query(rejection.body_text())
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::debug!(error = %self, "rejecting request");
        let body = ErrorBody {
            error: self.to_string(),
        };
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}

pub type ApiResult<T> = Result<Json<T>, ApiError>;

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    engine: Arc<StatsEngine>,
}

impl AppState {
    pub fn new(engine: Arc<StatsEngine>) -> Self {
        AppState { engine }
    }

    pub fn engine(&self) -> &StatsEngine {
        &self.engine
    }

    fn birthdate(&self, raw: Option<&str>) -> Result<Birthdate, ApiError> {
        let raw = raw
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or(ApiError::MissingParam("birthdate"))?;
        Ok(self.engine.parse_birthdate(raw)?)
    }

    fn life_expectancy(&self, requested: Option<u32>) -> Result<u32, ApiError> {
        let years = requested.unwrap_or(self.engine.config().life_expectancy_years);
        check_life_expectancy(years)?;
        Ok(years)
    }
}

#[derive(Debug, Deserialize)]
pub struct LifeQuery {
    pub birthdate: Option<String>,
    pub life_expectancy: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct MasteryQuery {
    pub birthdate: Option<String>,
    pub hours_per_week: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct GridResponse {
    pub weeks_lived: u64,
    pub total_weeks: u64,
    pub rows: u32,
    pub columns: u32,
    pub counts: WeekCounts,
    pub text: String,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum MasteryResponse {
    Single(MasteryStats),
    Table(Vec<MasteryRow>),
}

#[derive(Debug, Serialize)]
pub struct Health {
    pub status: &'static str,
    pub version: &'static str,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/stats", get(stats_handler))
        .route("/api/grid", get(grid_handler))
        .route("/api/mastery", get(mastery_handler))
        .route("/api/weekly-budget", get(weekly_budget_handler))
        .route("/api/income", get(income_handler))
        .with_state(state)
}

async fn health() -> Json<Health> {
    Json(Health {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

fn compute(state: &AppState, query: &LifeQuery) -> Result<AllStats, ApiError> {
    let birth = state.birthdate(query.birthdate.as_deref())?;
    let years = state.life_expectancy(query.life_expectancy)?;
    Ok(state.engine.compute_with(&birth, years)?)
}

async fn stats_handler(
    State(state): State<AppState>,
    query: Result<Query<LifeQuery>, QueryRejection>,
) -> ApiResult<AllStats> {
    let Query(query) = query?;
    Ok(Json(compute(&state, &query)?))
}

async fn grid_handler(
    State(state): State<AppState>,
    query: Result<Query<LifeQuery>, QueryRejection>,
) -> ApiResult<GridResponse> {
    let Query(query) = query?;
    let stats = compute(&state, &query)?;
    let grid = WeekGrid::new(stats.life.weeks_lived, stats.life.total_weeks);
    let text = GridRenderer::with_config(RenderConfig::compact()).render(&grid);

    Ok(Json(GridResponse {
        weeks_lived: grid.weeks_lived(),
        total_weeks: grid.total_weeks(),
        rows: grid.row_count(),
        columns: grid.columns(),
        counts: grid.counts(),
        text,
    }))
}

async fn mastery_handler(
    State(state): State<AppState>,
    query: Result<Query<MasteryQuery>, QueryRejection>,
) -> ApiResult<MasteryResponse> {
    let Query(query) = query?;
    let birth = state.birthdate(query.birthdate.as_deref())?;

    let response = match query.hours_per_week {
        Some(hours) => MasteryResponse::Single(state.engine.mastery(&birth, hours)?),
        None => MasteryResponse::Table(state.engine.mastery_presets(&birth)?),
    };
    Ok(Json(response))
}

async fn weekly_budget_handler() -> Json<WeeklyTimeBudget> {
    Json(weekly_time_budget())
}

async fn income_handler() -> Json<IncomeBreakdown> {
    Json(income_breakdown())
}

/// Serve on `listener` until `shutdown` resolves
pub async fn serve<F>(listener: TcpListener, state: AppState, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr()?;
    tracing::info!(%addr, "lifeweeks API listening");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await?;

    tracing::info!(%addr, "lifeweeks API stopped");
    Ok(())
}

/// Bind `addr` and serve until ctrl-c
pub async fn run(addr: SocketAddr, state: AppState) -> std::io::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    serve(listener, state, shutdown_signal()).await
}

pub async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("shutdown signal received"),
        Err(err) => tracing::error!(error = %err, "failed to listen for ctrl-c"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_messages() {
        let err = ApiError::MissingParam("birthdate");
        assert_eq!(err.to_string(), "missing query parameter 'birthdate'");

        let err = ApiError::from(LifeError::BirthdateInFuture);
        assert_eq!(err.to_string(), "Birthdate must be in the past");
    }

    #[test]
    fn test_api_error_is_bad_request() {
        let response = ApiError::MissingParam("birthdate").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_mastery_response_shapes() {
        let single = MasteryResponse::Single(MasteryStats {
            hours_per_week: 10.0,
            years_to_mastery: 2.0,
            age_at_mastery: 32.0,
        });
        let value = serde_json::to_value(&single).unwrap();
        assert_eq!(value["age_at_mastery"], 32.0);

        let table = MasteryResponse::Table(Vec::new());
        assert!(serde_json::to_value(&table).unwrap().is_array());
    }
}

use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};

use crate::{
    error::AppResult,
    reports::{DashboardSummary, ReportSummary},
    response::ApiResponse,
    routes::params::ReportQuery,
    services::report_service,
    session::ActiveSession,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(report_summary))
        .route("/dashboard", get(dashboard_summary))
}

#[utoipa::path(
    get,
    path = "/api/reports/dashboard",
    responses(
        (status = 200, description = "Dashboard stat cards and charts", body = ApiResponse<DashboardSummary>),
        (status = 401, description = "Not logged in"),
    ),
    tag = "Reports"
)]
pub async fn dashboard_summary(
    State(state): State<AppState>,
    _session: ActiveSession,
) -> AppResult<Json<ApiResponse<DashboardSummary>>> {
    let resp = report_service::dashboard_summary(&state).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/reports",
    params(ReportQuery),
    responses(
        (status = 200, description = "Reports page series", body = ApiResponse<ReportSummary>),
        (status = 401, description = "Not logged in"),
    ),
    tag = "Reports"
)]
pub async fn report_summary(
    State(state): State<AppState>,
    _session: ActiveSession,
    Query(query): Query<ReportQuery>,
) -> AppResult<Json<ApiResponse<ReportSummary>>> {
    let resp = report_service::report_summary(&state, query).await?;
    Ok(Json(resp))
}

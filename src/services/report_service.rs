use crate::{
    error::AppResult,
    reports::{DashboardSummary, ReportSummary},
    response::{ApiResponse, Meta},
    routes::params::ReportQuery,
    state::AppState,
};

pub async fn dashboard_summary(state: &AppState) -> AppResult<ApiResponse<DashboardSummary>> {
    Ok(ApiResponse::success(
        "Dashboard",
        state.reports.dashboard.clone(),
        Some(Meta::empty()),
    ))
}

pub async fn report_summary(
    state: &AppState,
    query: ReportQuery,
) -> AppResult<ApiResponse<ReportSummary>> {
    let range = query.range.unwrap_or_default();
    Ok(ApiResponse::success(
        "Reports",
        state.reports.report_for(range),
        Some(Meta::empty()),
    ))
}

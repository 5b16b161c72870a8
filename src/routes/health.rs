use axum::{Json, extract::State};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    response::{ApiResponse, Meta},
    state::AppState,
};

#[derive(Debug, Serialize, ToSchema)]
pub struct RecordCounts {
    pub farmers: usize,
    pub products: usize,
    pub orders: usize,
    pub users: usize,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthData {
    pub status: String,
    pub records: RecordCounts,
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "OK", body = ApiResponse<HealthData>),
    ),
        tag = "Health"
)]
pub async fn health_check(State(state): State<AppState>) -> Json<ApiResponse<HealthData>> {
    let workspace = state.workspace.read().await;
    let data = HealthData {
        status: "ok".to_string(),
        records: RecordCounts {
            farmers: workspace.farmers.len(),
            products: workspace.products.len(),
            orders: workspace.orders.len(),
            users: workspace.users.len(),
        },
    };

    Json(ApiResponse::success(
        "Health check",
        data,
        Some(Meta::empty()),
    ))
}

use axum::{
    Json, Router,
    extract::State,
    routing::{get, post},
};

use crate::{
    dto::settings::Settings, error::AppResult, response::ApiResponse, services::settings_service,
    session::ActiveSession, state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_settings).put(save_settings))
        .route("/export", post(export_data))
}

#[utoipa::path(
    get,
    path = "/api/settings",
    responses(
        (status = 200, description = "Display preferences", body = ApiResponse<Settings>)
    ),
    tag = "Settings"
)]
pub async fn get_settings(
    State(state): State<AppState>,
    _session: ActiveSession,
) -> AppResult<Json<ApiResponse<Settings>>> {
    let resp = settings_service::get_settings(&state).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    put,
    path = "/api/settings",
    request_body = Settings,
    responses(
        (status = 200, description = "Acknowledged; nothing is stored", body = ApiResponse<Settings>)
    ),
    tag = "Settings"
)]
pub async fn save_settings(
    session: ActiveSession,
    Json(payload): Json<Settings>,
) -> AppResult<Json<ApiResponse<Settings>>> {
    let resp = settings_service::save_settings(&session, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/settings/export",
    responses(
        (status = 200, description = "Acknowledged; nothing is exported")
    ),
    tag = "Settings"
)]
pub async fn export_data(session: ActiveSession) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let resp = settings_service::export_data(&session).await?;
    Ok(Json(resp))
}

use axum::{
    Json, Router,
    extract::State,
    routing::{get, post},
};

use crate::{
    dto::session::{LoginRequest, NavigateRequest, PageView, SessionState},
    error::AppResult,
    response::ApiResponse,
    services::session_service,
    session::ActiveSession,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(current_session))
        .route("/login", post(login))
        .route("/logout", post(logout))
        .route("/navigate", post(navigate))
        .route("/view", get(current_view))
}

#[utoipa::path(
    get,
    path = "/api/session",
    responses(
        (status = 200, description = "Logged-in state and current page", body = ApiResponse<SessionState>)
    ),
    tag = "Session"
)]
pub async fn current_session(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<SessionState>>> {
    let resp = session_service::current_session(&state).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/session/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Logged in on the dashboard; credentials are not checked", body = ApiResponse<SessionState>)
    ),
    tag = "Session"
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> AppResult<Json<ApiResponse<SessionState>>> {
    let resp = session_service::login(&state, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/session/logout",
    responses(
        (status = 200, description = "Logged out", body = ApiResponse<SessionState>)
    ),
    tag = "Session"
)]
pub async fn logout(State(state): State<AppState>) -> AppResult<Json<ApiResponse<SessionState>>> {
    let resp = session_service::logout(&state).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/session/navigate",
    request_body = NavigateRequest,
    responses(
        (status = 200, description = "Page selected; unknown pages select the dashboard", body = ApiResponse<SessionState>),
        (status = 401, description = "Not logged in"),
    ),
    tag = "Session"
)]
pub async fn navigate(
    State(state): State<AppState>,
    Json(payload): Json<NavigateRequest>,
) -> AppResult<Json<ApiResponse<SessionState>>> {
    let resp = session_service::navigate(&state, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/session/view",
    responses(
        (status = 200, description = "Content of the current page", body = ApiResponse<PageView>),
        (status = 401, description = "Not logged in"),
    ),
    tag = "Session"
)]
pub async fn current_view(
    State(state): State<AppState>,
    session: ActiveSession,
) -> AppResult<Json<ApiResponse<PageView>>> {
    let resp = session_service::current_view(&state, session.page).await?;
    Ok(Json(resp))
}

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, patch},
};

use crate::{
    dto::{
        DeleteResult,
        users::{UserForm, UserList},
    },
    error::AppResult,
    models::User,
    response::ApiResponse,
    routes::params::{DeleteQuery, SearchQuery},
    services::user_service,
    session::ActiveSession,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/{id}", get(get_user).put(update_user).delete(delete_user))
        .route("/{id}/status", patch(toggle_user_status))
}

#[utoipa::path(
    get,
    path = "/api/users",
    params(SearchQuery),
    responses(
        (status = 200, description = "Staff accounts matching name or email", body = ApiResponse<UserList>),
        (status = 401, description = "Not logged in"),
    ),
    tag = "Users"
)]
pub async fn list_users(
    State(state): State<AppState>,
    _session: ActiveSession,
    Query(query): Query<SearchQuery>,
) -> AppResult<Json<ApiResponse<UserList>>> {
    let resp = user_service::list_users(&state, query).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/users/{id}",
    params(("id" = String, Path, description = "User ID, e.g. U001")),
    responses(
        (status = 200, description = "Get user", body = ApiResponse<User>),
        (status = 404, description = "Not Found"),
    ),
    tag = "Users"
)]
pub async fn get_user(
    State(state): State<AppState>,
    _session: ActiveSession,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<User>>> {
    let resp = user_service::get_user(&state, &id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/users",
    request_body = UserForm,
    responses(
        (status = 201, description = "Create user", body = ApiResponse<User>)
    ),
    tag = "Users"
)]
pub async fn create_user(
    State(state): State<AppState>,
    session: ActiveSession,
    Json(payload): Json<UserForm>,
) -> AppResult<(StatusCode, Json<ApiResponse<User>>)> {
    let resp = user_service::create_user(&state, &session, payload).await?;
    Ok((StatusCode::CREATED, Json(resp)))
}

#[utoipa::path(
    put,
    path = "/api/users/{id}",
    params(("id" = String, Path, description = "User ID")),
    request_body = UserForm,
    responses(
        (status = 200, description = "Updated user", body = ApiResponse<User>),
        (status = 404, description = "Not Found"),
    ),
    tag = "Users"
)]
pub async fn update_user(
    State(state): State<AppState>,
    session: ActiveSession,
    Path(id): Path<String>,
    Json(payload): Json<UserForm>,
) -> AppResult<Json<ApiResponse<User>>> {
    let resp = user_service::update_user(&state, &session, &id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    patch,
    path = "/api/users/{id}/status",
    params(("id" = String, Path, description = "User ID")),
    responses(
        (status = 200, description = "Toggle Active/Disabled", body = ApiResponse<User>),
        (status = 404, description = "Not Found"),
    ),
    tag = "Users"
)]
pub async fn toggle_user_status(
    State(state): State<AppState>,
    session: ActiveSession,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<User>>> {
    let resp = user_service::toggle_user_status(&state, &session, &id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    params(("id" = String, Path, description = "User ID"), DeleteQuery),
    responses(
        (status = 200, description = "Deleted, or not confirmed", body = ApiResponse<DeleteResult>),
        (status = 404, description = "Not Found"),
    ),
    tag = "Users"
)]
pub async fn delete_user(
    State(state): State<AppState>,
    session: ActiveSession,
    Path(id): Path<String>,
    Query(query): Query<DeleteQuery>,
) -> AppResult<Json<ApiResponse<DeleteResult>>> {
    let resp = user_service::delete_user(&state, &session, &id, query).await?;
    Ok(Json(resp))
}

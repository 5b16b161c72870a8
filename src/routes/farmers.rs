use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
};

use crate::{
    dto::{
        DeleteResult,
        farmers::{FarmerForm, FarmerList},
    },
    error::AppResult,
    models::Farmer,
    response::ApiResponse,
    routes::params::{DeleteQuery, SearchQuery},
    services::farmer_service,
    session::ActiveSession,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_farmers).post(create_farmer))
        .route(
            "/{id}",
            get(get_farmer).put(update_farmer).delete(delete_farmer),
        )
}

#[utoipa::path(
    get,
    path = "/api/farmers",
    params(SearchQuery),
    responses(
        (status = 200, description = "Farmers matching name or location", body = ApiResponse<FarmerList>),
        (status = 401, description = "Not logged in"),
    ),
    tag = "Farmers"
)]
pub async fn list_farmers(
    State(state): State<AppState>,
    _session: ActiveSession,
    Query(query): Query<SearchQuery>,
) -> AppResult<Json<ApiResponse<FarmerList>>> {
    let resp = farmer_service::list_farmers(&state, query).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/farmers/{id}",
    params(("id" = String, Path, description = "Farmer ID, e.g. F001")),
    responses(
        (status = 200, description = "Get farmer", body = ApiResponse<Farmer>),
        (status = 404, description = "Farmer not found"),
    ),
    tag = "Farmers"
)]
pub async fn get_farmer(
    State(state): State<AppState>,
    _session: ActiveSession,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<Farmer>>> {
    let resp = farmer_service::get_farmer(&state, &id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/farmers",
    request_body = FarmerForm,
    responses(
        (status = 201, description = "Create farmer", body = ApiResponse<Farmer>)
    ),
    tag = "Farmers"
)]
pub async fn create_farmer(
    State(state): State<AppState>,
    session: ActiveSession,
    Json(payload): Json<FarmerForm>,
) -> AppResult<(StatusCode, Json<ApiResponse<Farmer>>)> {
    let resp = farmer_service::create_farmer(&state, &session, payload).await?;
    Ok((StatusCode::CREATED, Json(resp)))
}

#[utoipa::path(
    put,
    path = "/api/farmers/{id}",
    params(("id" = String, Path, description = "Farmer ID")),
    request_body = FarmerForm,
    responses(
        (status = 200, description = "Updated farmer", body = ApiResponse<Farmer>),
        (status = 404, description = "Farmer not found"),
    ),
    tag = "Farmers"
)]
pub async fn update_farmer(
    State(state): State<AppState>,
    session: ActiveSession,
    Path(id): Path<String>,
    Json(payload): Json<FarmerForm>,
) -> AppResult<Json<ApiResponse<Farmer>>> {
    let resp = farmer_service::update_farmer(&state, &session, &id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/farmers/{id}",
    params(("id" = String, Path, description = "Farmer ID"), DeleteQuery),
    responses(
        (status = 200, description = "Deleted, or not confirmed", body = ApiResponse<DeleteResult>),
        (status = 404, description = "Farmer not found"),
    ),
    tag = "Farmers"
)]
pub async fn delete_farmer(
    State(state): State<AppState>,
    session: ActiveSession,
    Path(id): Path<String>,
    Query(query): Query<DeleteQuery>,
) -> AppResult<Json<ApiResponse<DeleteResult>>> {
    let resp = farmer_service::delete_farmer(&state, &session, &id, query).await?;
    Ok(Json(resp))
}

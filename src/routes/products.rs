use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
};

use crate::{
    dto::{
        DeleteResult,
        products::{ProductForm, ProductList},
    },
    error::AppResult,
    models::Product,
    reports::SalesPoint,
    response::ApiResponse,
    routes::params::{DeleteQuery, ProductQuery},
    services::product_service,
    session::ActiveSession,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_products).post(create_product))
        .route("/top-selling", get(top_selling_products))
        .route(
            "/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
}

#[utoipa::path(
    get,
    path = "/api/products",
    params(ProductQuery),
    responses(
        (status = 200, description = "Products matching name or category and stock status", body = ApiResponse<ProductList>),
        (status = 401, description = "Not logged in"),
    ),
    tag = "Products"
)]
pub async fn list_products(
    State(state): State<AppState>,
    _session: ActiveSession,
    Query(query): Query<ProductQuery>,
) -> AppResult<Json<ApiResponse<ProductList>>> {
    let resp = product_service::list_products(&state, query).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/products/top-selling",
    responses(
        (status = 200, description = "Top five selling products", body = ApiResponse<Vec<SalesPoint>>)
    ),
    tag = "Products"
)]
pub async fn top_selling_products(
    State(state): State<AppState>,
    _session: ActiveSession,
) -> AppResult<Json<ApiResponse<Vec<SalesPoint>>>> {
    let resp = product_service::top_selling_products(&state).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/products/{id}",
    params(("id" = String, Path, description = "Product ID, e.g. P001")),
    responses(
        (status = 200, description = "Get product", body = ApiResponse<Product>),
        (status = 404, description = "Product not found"),
    ),
    tag = "Products"
)]
pub async fn get_product(
    State(state): State<AppState>,
    _session: ActiveSession,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<Product>>> {
    let resp = product_service::get_product(&state, &id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/products",
    request_body = ProductForm,
    responses(
        (status = 201, description = "Create product", body = ApiResponse<Product>)
    ),
    tag = "Products"
)]
pub async fn create_product(
    State(state): State<AppState>,
    session: ActiveSession,
    Json(payload): Json<ProductForm>,
) -> AppResult<(StatusCode, Json<ApiResponse<Product>>)> {
    let resp = product_service::create_product(&state, &session, payload).await?;
    Ok((StatusCode::CREATED, Json(resp)))
}

#[utoipa::path(
    put,
    path = "/api/products/{id}",
    params(("id" = String, Path, description = "Product ID")),
    request_body = ProductForm,
    responses(
        (status = 200, description = "Updated product", body = ApiResponse<Product>),
        (status = 404, description = "Product not found"),
    ),
    tag = "Products"
)]
pub async fn update_product(
    State(state): State<AppState>,
    session: ActiveSession,
    Path(id): Path<String>,
    Json(payload): Json<ProductForm>,
) -> AppResult<Json<ApiResponse<Product>>> {
    let resp = product_service::update_product(&state, &session, &id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/products/{id}",
    params(("id" = String, Path, description = "Product ID"), DeleteQuery),
    responses(
        (status = 200, description = "Deleted, or not confirmed", body = ApiResponse<DeleteResult>),
        (status = 404, description = "Product not found"),
    ),
    tag = "Products"
)]
pub async fn delete_product(
    State(state): State<AppState>,
    session: ActiveSession,
    Path(id): Path<String>,
    Query(query): Query<DeleteQuery>,
) -> AppResult<Json<ApiResponse<DeleteResult>>> {
    let resp = product_service::delete_product(&state, &session, &id, query).await?;
    Ok(Json(resp))
}

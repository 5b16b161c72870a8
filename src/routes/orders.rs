use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, patch},
};

use crate::{
    dto::{
        DeleteResult,
        orders::{OrderDetails, OrderForm, OrderList, UpdateOrderStatusRequest},
    },
    error::AppResult,
    models::Order,
    response::ApiResponse,
    routes::params::{DeleteQuery, OrderListQuery},
    services::order_service,
    session::ActiveSession,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_orders).post(create_order))
        .route("/{id}", get(get_order).put(update_order).delete(delete_order))
        .route("/{id}/status", patch(update_order_status))
}

#[utoipa::path(
    get,
    path = "/api/orders",
    params(OrderListQuery),
    responses(
        (status = 200, description = "Orders matching customer or id, optionally on one date", body = ApiResponse<OrderList>),
        (status = 401, description = "Not logged in"),
    ),
    tag = "Orders"
)]
pub async fn list_orders(
    State(state): State<AppState>,
    _session: ActiveSession,
    Query(query): Query<OrderListQuery>,
) -> AppResult<Json<ApiResponse<OrderList>>> {
    let resp = order_service::list_orders(&state, query).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/orders/{id}",
    params(("id" = String, Path, description = "Order ID, e.g. ORD-001")),
    responses(
        (status = 200, description = "Order with line subtotals", body = ApiResponse<OrderDetails>),
        (status = 404, description = "Not Found"),
    ),
    tag = "Orders"
)]
pub async fn get_order(
    State(state): State<AppState>,
    _session: ActiveSession,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<OrderDetails>>> {
    let resp = order_service::get_order(&state, &id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/orders",
    request_body = OrderForm,
    responses(
        (status = 201, description = "Create order", body = ApiResponse<Order>)
    ),
    tag = "Orders"
)]
pub async fn create_order(
    State(state): State<AppState>,
    session: ActiveSession,
    Json(payload): Json<OrderForm>,
) -> AppResult<(StatusCode, Json<ApiResponse<Order>>)> {
    let resp = order_service::create_order(&state, &session, payload).await?;
    Ok((StatusCode::CREATED, Json(resp)))
}

#[utoipa::path(
    put,
    path = "/api/orders/{id}",
    params(("id" = String, Path, description = "Order ID")),
    request_body = OrderForm,
    responses(
        (status = 200, description = "Updated order", body = ApiResponse<Order>),
        (status = 404, description = "Not Found"),
    ),
    tag = "Orders"
)]
pub async fn update_order(
    State(state): State<AppState>,
    session: ActiveSession,
    Path(id): Path<String>,
    Json(payload): Json<OrderForm>,
) -> AppResult<Json<ApiResponse<Order>>> {
    let resp = order_service::update_order(&state, &session, &id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    patch,
    path = "/api/orders/{id}/status",
    params(("id" = String, Path, description = "Order ID")),
    request_body = UpdateOrderStatusRequest,
    responses(
        (status = 200, description = "Update order status", body = ApiResponse<Order>),
        (status = 404, description = "Not Found"),
        (status = 422, description = "Unknown status"),
    ),
    tag = "Orders"
)]
pub async fn update_order_status(
    State(state): State<AppState>,
    session: ActiveSession,
    Path(id): Path<String>,
    Json(payload): Json<UpdateOrderStatusRequest>,
) -> AppResult<Json<ApiResponse<Order>>> {
    let resp = order_service::update_order_status(&state, &session, &id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/orders/{id}",
    params(("id" = String, Path, description = "Order ID"), DeleteQuery),
    responses(
        (status = 200, description = "Deleted, or not confirmed", body = ApiResponse<DeleteResult>),
        (status = 404, description = "Not Found"),
    ),
    tag = "Orders"
)]
pub async fn delete_order(
    State(state): State<AppState>,
    session: ActiveSession,
    Path(id): Path<String>,
    Query(query): Query<DeleteQuery>,
) -> AppResult<Json<ApiResponse<DeleteResult>>> {
    let resp = order_service::delete_order(&state, &session, &id, query).await?;
    Ok(Json(resp))
}

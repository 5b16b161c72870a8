use crate::{
    audit::log_audit,
    dto::{
        DeleteResult,
        form::parse_date,
        orders::{OrderDetails, OrderForm, OrderList, UpdateOrderStatusRequest},
    },
    error::{AppError, AppResult},
    models::Order,
    response::{ApiResponse, Meta},
    routes::params::{DeleteQuery, OrderListQuery},
    session::ActiveSession,
    state::AppState,
};

use super::delete_response;

pub async fn list_orders(
    state: &AppState,
    query: OrderListQuery,
) -> AppResult<ApiResponse<OrderList>> {
    // A blank date shows every order; an unreadable one matches none.
    let date_filter = query
        .date
        .as_deref()
        .filter(|raw| !raw.trim().is_empty())
        .map(parse_date);

    let workspace = state.workspace.read().await;
    let items = workspace.orders.filter_where(query.text(), |order| match date_filter {
        None => true,
        Some(None) => false,
        Some(Some(date)) => order.date == Some(date),
    });
    let meta = Meta::total(items.len());
    Ok(ApiResponse::success("Orders", OrderList { items }, Some(meta)))
}

pub async fn get_order(state: &AppState, id: &str) -> AppResult<ApiResponse<OrderDetails>> {
    let workspace = state.workspace.read().await;
    let order = workspace.orders.get(id).cloned().ok_or(AppError::NotFound)?;
    Ok(ApiResponse::success(
        "Order found",
        OrderDetails::from(order),
        Some(Meta::empty()),
    ))
}

pub async fn create_order(
    state: &AppState,
    session: &ActiveSession,
    payload: OrderForm,
) -> AppResult<ApiResponse<Order>> {
    let order = state.workspace.write().await.orders.add(payload);

    log_audit(
        Some(session.session_id),
        "order_create",
        Some("orders"),
        Some(serde_json::json!({ "order_id": order.id })),
    );

    Ok(ApiResponse::success(
        "Order created",
        order,
        Some(Meta::empty()),
    ))
}

pub async fn update_order(
    state: &AppState,
    session: &ActiveSession,
    id: &str,
    payload: OrderForm,
) -> AppResult<ApiResponse<Order>> {
    let order = state
        .workspace
        .write()
        .await
        .orders
        .edit(id, payload)
        .ok_or(AppError::NotFound)?;

    log_audit(
        Some(session.session_id),
        "order_update",
        Some("orders"),
        Some(serde_json::json!({ "order_id": order.id })),
    );

    Ok(ApiResponse::success("Updated", order, Some(Meta::empty())))
}

/// Changes only the status; items and the stored total are left alone.
pub async fn update_order_status(
    state: &AppState,
    session: &ActiveSession,
    id: &str,
    payload: UpdateOrderStatusRequest,
) -> AppResult<ApiResponse<Order>> {
    let order = state
        .workspace
        .write()
        .await
        .orders
        .update(id, |order| order.status = payload.status)
        .ok_or(AppError::NotFound)?;

    log_audit(
        Some(session.session_id),
        "order_status_update",
        Some("orders"),
        Some(serde_json::json!({ "order_id": order.id, "status": order.status })),
    );

    Ok(ApiResponse::success(
        "Order updated",
        order,
        Some(Meta::empty()),
    ))
}

pub async fn delete_order(
    state: &AppState,
    session: &ActiveSession,
    id: &str,
    query: DeleteQuery,
) -> AppResult<ApiResponse<DeleteResult>> {
    let outcome = state
        .workspace
        .write()
        .await
        .orders
        .remove(id, |_| query.confirm);
    delete_response(outcome, id, session, "orders")
}

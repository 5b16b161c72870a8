use crate::{
    audit::log_audit,
    dto::{
        DeleteResult,
        products::{ProductForm, ProductList},
    },
    error::{AppError, AppResult},
    models::Product,
    reports::SalesPoint,
    response::{ApiResponse, Meta},
    routes::params::{DeleteQuery, ProductQuery},
    session::ActiveSession,
    state::AppState,
};

use super::delete_response;

pub async fn list_products(
    state: &AppState,
    query: ProductQuery,
) -> AppResult<ApiResponse<ProductList>> {
    let stock = query.status.unwrap_or_default();
    let workspace = state.workspace.read().await;
    let items = workspace
        .products
        .filter_where(query.text(), |p| stock.matches(p.status));
    let meta = Meta::total(items.len());
    Ok(ApiResponse::success("Products", ProductList { items }, Some(meta)))
}

pub async fn get_product(state: &AppState, id: &str) -> AppResult<ApiResponse<Product>> {
    let workspace = state.workspace.read().await;
    let product = workspace.products.get(id).cloned().ok_or(AppError::NotFound)?;
    Ok(ApiResponse::success("Product", product, None))
}

pub async fn top_selling_products(state: &AppState) -> AppResult<ApiResponse<Vec<SalesPoint>>> {
    let items = state.reports.top_products.clone();
    let meta = Meta::total(items.len());
    Ok(ApiResponse::success("Top selling products", items, Some(meta)))
}

pub async fn create_product(
    state: &AppState,
    session: &ActiveSession,
    payload: ProductForm,
) -> AppResult<ApiResponse<Product>> {
    let product = state.workspace.write().await.products.add(payload);

    log_audit(
        Some(session.session_id),
        "product_create",
        Some("products"),
        Some(serde_json::json!({ "product_id": product.id, "status": product.status })),
    );

    Ok(ApiResponse::success(
        "Product created",
        product,
        Some(Meta::empty()),
    ))
}

pub async fn update_product(
    state: &AppState,
    session: &ActiveSession,
    id: &str,
    payload: ProductForm,
) -> AppResult<ApiResponse<Product>> {
    let product = state
        .workspace
        .write()
        .await
        .products
        .edit(id, payload)
        .ok_or(AppError::NotFound)?;

    log_audit(
        Some(session.session_id),
        "product_update",
        Some("products"),
        Some(serde_json::json!({ "product_id": product.id, "status": product.status })),
    );

    Ok(ApiResponse::success("Updated", product, Some(Meta::empty())))
}

pub async fn delete_product(
    state: &AppState,
    session: &ActiveSession,
    id: &str,
    query: DeleteQuery,
) -> AppResult<ApiResponse<DeleteResult>> {
    let outcome = state
        .workspace
        .write()
        .await
        .products
        .remove(id, |_| query.confirm);
    delete_response(outcome, id, session, "products")
}

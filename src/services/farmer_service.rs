use crate::{
    audit::log_audit,
    dto::{
        DeleteResult,
        farmers::{FarmerForm, FarmerList},
    },
    error::{AppError, AppResult},
    models::Farmer,
    response::{ApiResponse, Meta},
    routes::params::{DeleteQuery, SearchQuery},
    session::ActiveSession,
    state::AppState,
};

use super::delete_response;

pub async fn list_farmers(
    state: &AppState,
    query: SearchQuery,
) -> AppResult<ApiResponse<FarmerList>> {
    let workspace = state.workspace.read().await;
    let items = workspace.farmers.filter(query.text());
    let meta = Meta::total(items.len());
    Ok(ApiResponse::success("Farmers", FarmerList { items }, Some(meta)))
}

pub async fn get_farmer(state: &AppState, id: &str) -> AppResult<ApiResponse<Farmer>> {
    let workspace = state.workspace.read().await;
    let farmer = workspace.farmers.get(id).cloned().ok_or(AppError::NotFound)?;
    Ok(ApiResponse::success("Farmer", farmer, None))
}

pub async fn create_farmer(
    state: &AppState,
    session: &ActiveSession,
    payload: FarmerForm,
) -> AppResult<ApiResponse<Farmer>> {
    let farmer = state.workspace.write().await.farmers.add(payload);

    log_audit(
        Some(session.session_id),
        "farmer_create",
        Some("farmers"),
        Some(serde_json::json!({ "farmer_id": farmer.id })),
    );

    Ok(ApiResponse::success(
        "Farmer created",
        farmer,
        Some(Meta::empty()),
    ))
}

pub async fn update_farmer(
    state: &AppState,
    session: &ActiveSession,
    id: &str,
    payload: FarmerForm,
) -> AppResult<ApiResponse<Farmer>> {
    let farmer = state
        .workspace
        .write()
        .await
        .farmers
        .edit(id, payload)
        .ok_or(AppError::NotFound)?;

    log_audit(
        Some(session.session_id),
        "farmer_update",
        Some("farmers"),
        Some(serde_json::json!({ "farmer_id": farmer.id })),
    );

    Ok(ApiResponse::success("Updated", farmer, Some(Meta::empty())))
}

pub async fn delete_farmer(
    state: &AppState,
    session: &ActiveSession,
    id: &str,
    query: DeleteQuery,
) -> AppResult<ApiResponse<DeleteResult>> {
    let outcome = state
        .workspace
        .write()
        .await
        .farmers
        .remove(id, |_| query.confirm);
    delete_response(outcome, id, session, "farmers")
}

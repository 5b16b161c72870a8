use crate::{
    audit::log_audit,
    dto::{
        DeleteResult,
        users::{UserForm, UserList},
    },
    error::{AppError, AppResult},
    models::User,
    response::{ApiResponse, Meta},
    routes::params::{DeleteQuery, SearchQuery},
    session::ActiveSession,
    state::AppState,
};

use super::delete_response;

pub async fn list_users(state: &AppState, query: SearchQuery) -> AppResult<ApiResponse<UserList>> {
    let workspace = state.workspace.read().await;
    let items = workspace.users.filter(query.text());
    let meta = Meta::total(items.len());
    Ok(ApiResponse::success("Users", UserList { items }, Some(meta)))
}

pub async fn get_user(state: &AppState, id: &str) -> AppResult<ApiResponse<User>> {
    let workspace = state.workspace.read().await;
    let user = workspace.users.get(id).cloned().ok_or(AppError::NotFound)?;
    Ok(ApiResponse::success("User", user, None))
}

pub async fn create_user(
    state: &AppState,
    session: &ActiveSession,
    payload: UserForm,
) -> AppResult<ApiResponse<User>> {
    let user = state.workspace.write().await.users.add(payload);

    log_audit(
        Some(session.session_id),
        "user_create",
        Some("users"),
        Some(serde_json::json!({ "user_id": user.id, "role": user.role })),
    );

    Ok(ApiResponse::success("User created", user, Some(Meta::empty())))
}

pub async fn update_user(
    state: &AppState,
    session: &ActiveSession,
    id: &str,
    payload: UserForm,
) -> AppResult<ApiResponse<User>> {
    let user = state
        .workspace
        .write()
        .await
        .users
        .edit(id, payload)
        .ok_or(AppError::NotFound)?;

    log_audit(
        Some(session.session_id),
        "user_update",
        Some("users"),
        Some(serde_json::json!({ "user_id": user.id, "role": user.role })),
    );

    Ok(ApiResponse::success("Updated", user, Some(Meta::empty())))
}

/// Flips an account between Active and Disabled.
pub async fn toggle_user_status(
    state: &AppState,
    session: &ActiveSession,
    id: &str,
) -> AppResult<ApiResponse<User>> {
    let user = state
        .workspace
        .write()
        .await
        .users
        .update(id, |user| user.status = user.status.toggled())
        .ok_or(AppError::NotFound)?;

    log_audit(
        Some(session.session_id),
        "user_status_toggle",
        Some("users"),
        Some(serde_json::json!({ "user_id": user.id, "status": user.status })),
    );

    Ok(ApiResponse::success("User updated", user, Some(Meta::empty())))
}

pub async fn delete_user(
    state: &AppState,
    session: &ActiveSession,
    id: &str,
    query: DeleteQuery,
) -> AppResult<ApiResponse<DeleteResult>> {
    let outcome = state
        .workspace
        .write()
        .await
        .users
        .remove(id, |_| query.confirm);
    delete_response(outcome, id, session, "users")
}

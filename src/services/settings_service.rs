use crate::{
    audit::log_audit,
    dto::settings::Settings,
    error::AppResult,
    response::{ApiResponse, Meta},
    session::ActiveSession,
    state::AppState,
};

pub async fn get_settings(state: &AppState) -> AppResult<ApiResponse<Settings>> {
    Ok(ApiResponse::success(
        "Settings",
        Settings::clone(&state.settings),
        Some(Meta::empty()),
    ))
}

/// Acknowledges the submitted preferences without storing or applying them.
pub async fn save_settings(
    session: &ActiveSession,
    payload: Settings,
) -> AppResult<ApiResponse<Settings>> {
    log_audit(
        Some(session.session_id),
        "settings_save",
        Some("settings"),
        Some(serde_json::json!({ "company_name": payload.company_name })),
    );
    Ok(ApiResponse::success(
        "Settings saved successfully!",
        payload,
        Some(Meta::empty()),
    ))
}

pub async fn export_data(session: &ActiveSession) -> AppResult<ApiResponse<serde_json::Value>> {
    log_audit(Some(session.session_id), "data_export", None, None);
    Ok(ApiResponse::success(
        "System data export initiated...",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}

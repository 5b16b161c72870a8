use crate::{
    audit::log_audit,
    dto::{
        farmers::FarmerList,
        orders::OrderList,
        products::ProductPage,
        session::{LoginRequest, NavigateRequest, PageView, SessionState},
        settings::Settings,
        users::UserList,
    },
    error::AppResult,
    reports::ReportRange,
    response::{ApiResponse, Meta},
    session::Page,
    state::AppState,
};

pub async fn current_session(state: &AppState) -> AppResult<ApiResponse<SessionState>> {
    let session = state.session.read().await;
    Ok(ApiResponse::success(
        "Session",
        SessionState::from(&*session),
        Some(Meta::empty()),
    ))
}

/// Accepts any credentials and opens the dashboard.
pub async fn login(state: &AppState, payload: LoginRequest) -> AppResult<ApiResponse<SessionState>> {
    let mut session = state.session.write().await;
    let active = session.login();

    log_audit(
        Some(active.session_id),
        "session_login",
        Some("session"),
        Some(serde_json::json!({ "email": payload.email, "remember_me": payload.remember_me })),
    );

    Ok(ApiResponse::success(
        "Logged in",
        SessionState::from(&*session),
        Some(Meta::empty()),
    ))
}

pub async fn logout(state: &AppState) -> AppResult<ApiResponse<SessionState>> {
    let mut session = state.session.write().await;
    if let Some(ended) = session.logout() {
        log_audit(Some(ended.session_id), "session_logout", Some("session"), None);
    }

    Ok(ApiResponse::success(
        "Logged out",
        SessionState::from(&*session),
        Some(Meta::empty()),
    ))
}

pub async fn navigate(
    state: &AppState,
    payload: NavigateRequest,
) -> AppResult<ApiResponse<SessionState>> {
    let mut session = state.session.write().await;
    let page = session.navigate(&payload.page)?;
    if page.as_str() != payload.page {
        tracing::debug!(requested = %payload.page, "unknown page, showing dashboard");
    }
    log_audit(
        session.active().ok().map(|active| active.session_id),
        "session_navigate",
        Some("session"),
        Some(serde_json::json!({ "page": page })),
    );

    Ok(ApiResponse::success(
        "Navigated",
        SessionState::from(&*session),
        Some(Meta::empty()),
    ))
}

/// Builds the payload of the page currently selected in the session.
pub async fn current_view(state: &AppState, page: Page) -> AppResult<ApiResponse<PageView>> {
    let view = match page {
        Page::Dashboard => PageView::Dashboard(state.reports.dashboard.clone()),
        Page::Reports => PageView::Reports(state.reports.report_for(ReportRange::default())),
        Page::Settings => PageView::Settings(Settings::clone(&state.settings)),
        Page::Farmers => PageView::Farmers(FarmerList {
            items: state.workspace.read().await.farmers.filter(""),
        }),
        Page::Products => PageView::Products(ProductPage {
            items: state.workspace.read().await.products.filter(""),
            top_selling: state.reports.top_products.clone(),
        }),
        Page::Orders => PageView::Orders(OrderList {
            items: state.workspace.read().await.orders.filter(""),
        }),
        Page::Users => PageView::Users(UserList {
            items: state.workspace.read().await.users.filter(""),
        }),
    };

    Ok(ApiResponse::success(page.as_str(), view, Some(Meta::empty())))
}

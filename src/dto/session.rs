use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    dto::{farmers::FarmerList, orders::OrderList, products::ProductPage, settings::Settings, users::UserList},
    reports::{DashboardSummary, ReportSummary},
    session::{Page, Session},
};

/// Login form. Nothing here is verified.
#[derive(Deserialize, Debug, Default, ToSchema)]
#[serde(default)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    pub remember_me: bool,
}

#[derive(Deserialize, Debug, ToSchema)]
pub struct NavigateRequest {
    /// Page identifier; unknown values select the dashboard.
    pub page: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SessionState {
    pub logged_in: bool,
    pub page: Option<Page>,
    pub session_id: Option<Uuid>,
    pub signed_in_at: Option<DateTime<Utc>>,
}

impl From<&Session> for SessionState {
    fn from(session: &Session) -> Self {
        match session {
            Session::LoggedOut => SessionState {
                logged_in: false,
                page: None,
                session_id: None,
                signed_in_at: None,
            },
            Session::LoggedIn(active) => SessionState {
                logged_in: true,
                page: Some(active.page),
                session_id: Some(active.session_id),
                signed_in_at: Some(active.signed_in_at),
            },
        }
    }
}

/// Payload of whichever page the session currently shows.
#[derive(Serialize, ToSchema)]
#[serde(tag = "page", content = "data", rename_all = "snake_case")]
pub enum PageView {
    Dashboard(DashboardSummary),
    Farmers(FarmerList),
    Products(ProductPage),
    Orders(OrderList),
    Reports(ReportSummary),
    Users(UserList),
    Settings(Settings),
}

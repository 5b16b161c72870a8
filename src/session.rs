//! Logged-in state and page selection for the single staff session.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    Dashboard,
    Farmers,
    Products,
    Orders,
    Reports,
    Users,
    Settings,
}

impl Page {
    pub const ALL: [Page; 7] = [
        Page::Dashboard,
        Page::Farmers,
        Page::Products,
        Page::Orders,
        Page::Reports,
        Page::Users,
        Page::Settings,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Page::Dashboard => "dashboard",
            Page::Farmers => "farmers",
            Page::Products => "products",
            Page::Orders => "orders",
            Page::Reports => "reports",
            Page::Users => "users",
            Page::Settings => "settings",
        }
    }

    /// Resolves a navigation target. Anything unrecognised lands on the dashboard.
    pub fn from_id(id: &str) -> Self {
        Page::ALL
            .into_iter()
            .find(|page| page.as_str() == id)
            .unwrap_or(Page::Dashboard)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ActiveSession {
    pub session_id: Uuid,
    pub page: Page,
    pub signed_in_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum Session {
    #[default]
    LoggedOut,
    LoggedIn(ActiveSession),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("not logged in")]
    LoggedOut,
}

impl Session {
    /// Starts a fresh session on the dashboard, replacing any current one.
    pub fn login(&mut self) -> ActiveSession {
        let active = ActiveSession {
            session_id: Uuid::new_v4(),
            page: Page::Dashboard,
            signed_in_at: Utc::now(),
        };
        *self = Session::LoggedIn(active.clone());
        active
    }

    /// Ends the session. Returns the session that was active, if any.
    pub fn logout(&mut self) -> Option<ActiveSession> {
        match std::mem::take(self) {
            Session::LoggedIn(active) => Some(active),
            Session::LoggedOut => None,
        }
    }

    pub fn navigate(&mut self, page_id: &str) -> Result<Page, SessionError> {
        match self {
            Session::LoggedIn(active) => {
                active.page = Page::from_id(page_id);
                Ok(active.page)
            }
            Session::LoggedOut => Err(SessionError::LoggedOut),
        }
    }

    pub fn active(&self) -> Result<&ActiveSession, SessionError> {
        match self {
            Session::LoggedIn(active) => Ok(active),
            Session::LoggedOut => Err(SessionError::LoggedOut),
        }
    }

    pub fn current_page(&self) -> Option<Page> {
        self.active().ok().map(|active| active.page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_lands_on_dashboard() {
        let mut session = Session::default();
        assert_eq!(session.current_page(), None);
        session.login();
        assert_eq!(session.current_page(), Some(Page::Dashboard));
    }

    #[test]
    fn navigation_falls_back_to_dashboard() {
        let mut session = Session::default();
        session.login();
        assert_eq!(session.navigate("orders"), Ok(Page::Orders));
        assert_eq!(session.navigate("billing"), Ok(Page::Dashboard));
        assert_eq!(session.navigate("Orders"), Ok(Page::Dashboard));
    }

    #[test]
    fn logout_resets_page_for_next_login() {
        let mut session = Session::default();
        session.login();
        session.navigate("reports").unwrap();
        let ended = session.logout().expect("was logged in");
        assert_eq!(ended.page, Page::Reports);
        assert_eq!(session, Session::LoggedOut);
        assert_eq!(session.logout(), None);

        session.login();
        assert_eq!(session.current_page(), Some(Page::Dashboard));
    }

    #[test]
    fn navigation_requires_login() {
        let mut session = Session::default();
        assert_eq!(session.navigate("farmers"), Err(SessionError::LoggedOut));
    }

    #[test]
    fn relogin_issues_a_new_session() {
        let mut session = Session::default();
        let first = session.login().session_id;
        let second = session.login().session_id;
        assert_ne!(first, second);
    }
}

use axum::extract::FromRequestParts;

use crate::{
    error::AppError,
    session::{ActiveSession, Session, SessionError},
    state::AppState,
};

impl From<SessionError> for AppError {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::LoggedOut => AppError::Unauthorized,
        }
    }
}

pub fn ensure_logged_in(session: &Session) -> Result<ActiveSession, AppError> {
    Ok(session.active()?.clone())
}

/// Rejects the request with `401` unless a staff session is active.
impl FromRequestParts<AppState> for ActiveSession {
    type Rejection = AppError;

    async fn from_request_parts(
        _parts: &mut axum::http::request::Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let session = state.session.read().await;
        ensure_logged_in(&session)
    }
}

use std::sync::Arc;

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::extract::CookieJar;
use tracing::warn;

use crate::{
    models::account::Account,
    utils::{
        app_error::AppError,
        session::{AuthStatus, SESSION_COOKIE},
    },
    AppState,
};

/// The current identity, or `None` when no valid session cookie is
/// presented. Extraction itself only fails on a repository error.
pub struct AuthUser(pub Option<Account>);

impl AuthUser {
    /// The resolved status; by the time an extractor instance exists
    /// the identity is never `AuthStatus::Unknown`.
    pub fn status(&self) -> AuthStatus {
        if self.0.is_some() {
            AuthStatus::Authenticated
        } else {
            AuthStatus::Unauthenticated
        }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    Arc<AppState>: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = Arc::<AppState>::from_ref(state);
        // CookieJar extraction is infallible
        let cookies = CookieJar::from_request_parts(parts, state).await.unwrap();
        let token = match cookies.get(SESSION_COOKIE) {
            Some(cookie) => cookie.value().to_string(),
            None => return Ok(AuthUser(None)),
        };
        match Account::by_token(&app_state.pool, &token).await {
            Ok(account) => Ok(AuthUser(account)),
            Err(e) => {
                warn!("Error getting auth user from database : {e}");
                Err(AppError::internal_server_error())
            }
        }
    }
}

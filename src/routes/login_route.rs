use std::sync::Arc;

use askama::Template;
use axum::{
    extract::State,
    response::{IntoResponse, Redirect, Response},
    Form,
};
use axum_extra::extract::{cookie::Cookie, CookieJar};
use tracing::warn;

use crate::{
    extractors::auth_extractor::AuthUser,
    models::account::Account,
    structs::login_form::LoginForm,
    utils::session::{guard_redirect, hash_password, new_session_token, GuardedRoute, SESSION_COOKIE},
    AppState,
};

#[derive(Template)]
#[template(path = "login.html")]
pub struct LoginTemplate {
    pub logged_in: bool,
    pub error: Option<&'static str>,
}

/// An already signed-in visitor is sent straight to the admin page.
pub async fn login_page_route(auth_user: AuthUser) -> Response {
    if let Some(target) = guard_redirect(GuardedRoute::Login, auth_user.status()) {
        return Redirect::to(target).into_response();
    }

    LoginTemplate {
        logged_in: false,
        error: None,
    }
    .into_response()
}

pub async fn login_route(
    State(app_state): State<Arc<AppState>>,
    jar: CookieJar,
    Form(login): Form<LoginForm>,
) -> Response {
    let email = login.email.trim().to_lowercase();
    let password = hash_password(&login.password);

    let account = match Account::by_credentials(&app_state.pool, &email, &password).await {
        Ok(Some(account)) => account,
        Ok(None) => {
            warn!("Failed login attempt for `{email}`");
            return login_failed("Failed to login. Check your email/password.");
        }
        Err(e) => {
            warn!("Error getting account `{email}` from database : {e}");
            return login_failed("Something went wrong. Try again.");
        }
    };

    let token = new_session_token();
    if let Err(e) = Account::set_token(&app_state.pool, account.id, Some(&token)).await {
        warn!("Error storing session token for account {} : {e}", account.id);
        return login_failed("Something went wrong. Try again.");
    }

    let cookie = Cookie::build(SESSION_COOKIE, token)
        .path("/")
        .http_only(true)
        .finish();

    (jar.add(cookie), Redirect::to("/admin")).into_response()
}

pub async fn logout_route(
    State(app_state): State<Arc<AppState>>,
    AuthUser(auth_user): AuthUser,
    jar: CookieJar,
) -> Response {
    if let Some(account) = auth_user {
        if let Err(e) = Account::set_token(&app_state.pool, account.id, None).await {
            warn!("Error clearing session token for account {} : {e}", account.id);
        }
    }

    let removal = Cookie::build(SESSION_COOKIE, "").path("/").finish();
    (jar.remove(removal), Redirect::to("/")).into_response()
}

/// Login failures stay on the page with an inline message.
fn login_failed(message: &'static str) -> Response {
    LoginTemplate {
        logged_in: false,
        error: Some(message),
    }
    .into_response()
}

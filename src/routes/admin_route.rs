use askama::Template;
use axum::response::{IntoResponse, Redirect, Response};

use crate::{
    extractors::auth_extractor::AuthUser,
    utils::session::{guard_redirect, GuardedRoute},
};

#[derive(Template)]
#[template(path = "admin.html")]
pub struct AdminTemplate {
    pub logged_in: bool,
}

/// The editor page. A signed-out visitor is sent to the login page;
/// the post list itself arrives over the snapshot stream once the page
/// is up.
pub async fn admin_route(auth_user: AuthUser) -> Response {
    if let Some(target) = guard_redirect(GuardedRoute::Admin, auth_user.status()) {
        return Redirect::to(target).into_response();
    }

    AdminTemplate { logged_in: true }.into_response()
}

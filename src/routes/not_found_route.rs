use askama::Template;
use axum::response::{IntoResponse, Response};
use hyper::StatusCode;

use crate::extractors::auth_extractor::AuthUser;

#[derive(Template)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate {
    pub logged_in: bool,
    pub message: &'static str,
}

pub fn render_not_found(logged_in: bool, message: &'static str) -> Response {
    let template = NotFoundTemplate { logged_in, message };
    (StatusCode::NOT_FOUND, template).into_response()
}

/// Catch-all for routes that match nothing.
pub async fn not_found_route(AuthUser(auth_user): AuthUser) -> Response {
    render_not_found(auth_user.is_some(), "page_not_found: no matching route")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unknown_route_renders_404() {
        let response = not_found_route(AuthUser(None)).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}

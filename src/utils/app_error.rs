use axum::response::{IntoResponse, Response};
use hyper::StatusCode;

/// Flat error type for everything a handler can fail with. Failures are
/// logged where they happen; this only carries what the client sees.
pub struct AppError {
    status: StatusCode,
    message: Option<&'static str>,
}

impl AppError {
    pub fn new(status: StatusCode, message: Option<&'static str>) -> Self {
        Self { status, message }
    }

    pub fn internal_server_error() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, None)
    }

    pub fn forbidden_error(message: Option<&'static str>) -> Self {
        Self::new(StatusCode::FORBIDDEN, message)
    }

    pub fn not_found_error(message: Option<&'static str>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn you_have_to_be_connected_to_perform_this_action_error() -> Self {
        Self::forbidden_error(Some("You have to be signed in to perform this action."))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self.message {
            Some(message) => (self.status, message).into_response(),
            None => self.status.into_response(),
        }
    }
}

use axum::{response::Html, Json};
use tracing::warn;

use crate::{
    extractors::auth_extractor::AuthUser,
    structs::post_form::PreviewRequest,
    utils::{app_error::AppError, markdown},
};

/// Server side of the editor's live preview pane.
pub async fn preview_route(
    AuthUser(auth_user): AuthUser,
    Json(request): Json<PreviewRequest>,
) -> Result<Html<String>, AppError> {
    if auth_user.is_none() {
        warn!("Unauthenticated attempt to render a preview");
        return Err(AppError::you_have_to_be_connected_to_perform_this_action_error());
    }

    Ok(Html(markdown::render(&request.content)))
}

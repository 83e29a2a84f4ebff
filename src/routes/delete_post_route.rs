use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Extension,
};
use hyper::StatusCode;
use tracing::warn;

use crate::{
    extractors::auth_extractor::AuthUser,
    models::post::Post,
    utils::{
        app_error::AppError,
        post_events::{broadcast_snapshot, PostEvents},
    },
    AppState,
};

pub async fn delete_post_route(
    State(app_state): State<Arc<AppState>>,
    AuthUser(auth_user): AuthUser,
    Extension(post_events): Extension<PostEvents>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    let Some(auth_user) = auth_user else {
        warn!("Unauthenticated attempt to delete post {id}");
        return Err(AppError::you_have_to_be_connected_to_perform_this_action_error());
    };

    match Post::delete(&app_state.pool, id).await {
        Ok(0) => {
            warn!(
                "Account {} tried to delete post {id} which does not exist",
                auth_user.id
            );
            return Err(AppError::not_found_error(Some("This post does not exist.")));
        }
        Ok(_) => {}
        Err(e) => {
            warn!("Error deleting post {id} : {e}");
            return Err(AppError::internal_server_error());
        }
    }

    broadcast_snapshot(&app_state.pool, &post_events).await;

    Ok(StatusCode::OK)
}

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Extension, Json,
};
use hyper::StatusCode;
use tracing::warn;

use crate::{
    extractors::auth_extractor::AuthUser,
    models::post::Post,
    structs::post_form::PostForm,
    utils::{
        app_error::AppError,
        post::{check_post_data, parse_tags},
        post_events::{broadcast_snapshot, PostEvents},
    },
    AppState,
};

pub async fn update_post_route(
    State(app_state): State<Arc<AppState>>,
    AuthUser(auth_user): AuthUser,
    Extension(post_events): Extension<PostEvents>,
    Path(id): Path<i64>,
    Json(post): Json<PostForm>,
) -> Result<StatusCode, AppError> {
    let Some(auth_user) = auth_user else {
        warn!("Unauthenticated attempt to update post {id}");
        return Err(AppError::you_have_to_be_connected_to_perform_this_action_error());
    };

    let title = post.title.trim();
    let content = post.content.trim();

    check_post_data(title, content)?;
    let tags = parse_tags(&post.tags);

    match Post::update(&app_state.pool, id, title, content, &tags).await {
        Ok(0) => {
            warn!(
                "Account {} tried to update post {id} which does not exist",
                auth_user.id
            );
            return Err(AppError::not_found_error(Some("This post does not exist.")));
        }
        Ok(_) => {}
        Err(e) => {
            warn!("Error updating post {id} : {e}");
            return Err(AppError::internal_server_error());
        }
    }

    broadcast_snapshot(&app_state.pool, &post_events).await;

    Ok(StatusCode::OK)
}

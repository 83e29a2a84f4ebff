use std::sync::Arc;

use axum::{extract::State, Extension, Json};
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

pub async fn create_post_route(
    State(app_state): State<Arc<AppState>>,
    AuthUser(auth_user): AuthUser,
    Extension(post_events): Extension<PostEvents>,
    Json(post): Json<PostForm>,
) -> Result<String, AppError> {
    let Some(auth_user) = auth_user else {
        warn!("Unauthenticated attempt to create a post");
        return Err(AppError::you_have_to_be_connected_to_perform_this_action_error());
    };

    let title = post.title.trim();
    let content = post.content.trim();

    check_post_data(title, content)?;
    let tags = parse_tags(&post.tags);

    let id = match Post::create(&app_state.pool, title, content, &tags).await {
        Ok(id) => id,
        Err(e) => {
            warn!("Error inserting post for account {} : {e}", auth_user.id);
            return Err(AppError::internal_server_error());
        }
    };

    broadcast_snapshot(&app_state.pool, &post_events).await;

    Ok(id.to_string())
}

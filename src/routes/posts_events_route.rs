use std::{convert::Infallible, sync::Arc};

use axum::{
    extract::State,
    response::{
        sse::{Event, KeepAlive},
        Sse,
    },
    Extension,
};
use futures_util::{Stream, StreamExt};
use tracing::warn;

use crate::{
    extractors::auth_extractor::AuthUser,
    models::post::Post,
    utils::{
        app_error::AppError,
        post_events::{snapshot_data, snapshot_event, PostEvents},
    },
    AppState,
};

/// Live post-list stream for the admin editor: the current snapshot is
/// delivered immediately, then a fresh one after every mutation.
pub async fn posts_events_route(
    State(app_state): State<Arc<AppState>>,
    AuthUser(auth_user): AuthUser,
    Extension(post_events): Extension<PostEvents>,
) -> Result<Sse<impl Stream<Item = Result<Event, Infallible>>>, AppError> {
    if auth_user.is_none() {
        warn!("Unauthenticated attempt to subscribe to post snapshots");
        return Err(AppError::you_have_to_be_connected_to_perform_this_action_error());
    }

    let (sender, receiver) = post_events.subscribe();

    // Initial snapshot; a failed fetch degrades to an empty list
    let data = match Post::list(&app_state.pool).await {
        Ok(posts) => snapshot_data(&posts),
        Err(e) => {
            warn!("Error fetching posts for initial snapshot : {e}");
            "[]".to_string()
        }
    };
    let _ = sender.unbounded_send(snapshot_event(&data));

    let stream = receiver.map(Ok::<Event, Infallible>);

    Ok(Sse::new(stream).keep_alive(KeepAlive::default()))
}

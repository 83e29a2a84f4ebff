use std::sync::Arc;

use askama::Template;
use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use time::macros::format_description;
use tracing::warn;

use crate::{
    extractors::auth_extractor::AuthUser,
    models::post::Post,
    routes::not_found_route::render_not_found,
    utils::{feed::estimate_reading_time, markdown},
    AppState,
};

#[derive(Template)]
#[template(path = "post.html")]
pub struct PostTemplate {
    pub logged_in: bool,
    pub title: String,
    pub date: String,
    pub read_time: u64,
    pub tags: Vec<String>,
    pub body_html: String,
}

pub async fn post_detail_route(
    State(app_state): State<Arc<AppState>>,
    AuthUser(auth_user): AuthUser,
    Path(id): Path<i64>,
) -> Response {
    let logged_in = auth_user.is_some();

    // A failed or empty fetch degrades to the not-found page
    let post = match Post::get(&app_state.pool, id).await {
        Ok(Some(post)) => post,
        Ok(None) => return render_not_found(logged_in, "Post not found."),
        Err(e) => {
            warn!("Error fetching post {id} : {e}");
            return render_not_found(logged_in, "Post not found.");
        }
    };

    let format = format_description!("[weekday repr:short] [month repr:short] [day] [year]");
    let date = post
        .created_at
        .format(&format)
        .unwrap_or_else(|_| String::new());

    PostTemplate {
        logged_in,
        date,
        read_time: estimate_reading_time(&post.content),
        body_html: markdown::render(&post.content),
        title: post.title,
        tags: post.tags,
    }
    .into_response()
}

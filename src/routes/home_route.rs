use std::sync::Arc;

use askama::Template;
use axum::extract::{Query, State};
use tracing::warn;

use crate::{
    extractors::auth_extractor::AuthUser,
    models::post::Post,
    structs::feed_params::FeedParams,
    utils::feed::{collect_tags, estimate_reading_time, extract_thumbnail, filter_posts},
    AppState,
};

pub struct TagChip {
    pub name: String,
    pub active: bool,
}

pub struct PostCard {
    pub id: i64,
    pub title: String,
    pub thumbnail: Option<String>,
    pub read_time: u64,
    pub tags: Vec<String>,
}

#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub logged_in: bool,
    pub search_query: String,
    pub active_tag: String,
    pub tag_chips: Vec<TagChip>,
    pub cards: Vec<PostCard>,
    pub subscribed_ok: bool,
    pub subscribed_err: bool,
}

pub async fn home_route(
    State(app_state): State<Arc<AppState>>,
    AuthUser(auth_user): AuthUser,
    Query(params): Query<FeedParams>,
) -> HomeTemplate {
    // A failed fetch degrades to an empty feed
    let posts = match Post::list(&app_state.pool).await {
        Ok(posts) => posts,
        Err(e) => {
            warn!("Error fetching posts : {e}");
            Vec::new()
        }
    };

    let active_tag = params.tag.filter(|tag| !tag.is_empty());
    let search_query = params.q.unwrap_or_default();

    let tag_chips = collect_tags(&posts)
        .into_iter()
        .map(|name| TagChip {
            active: active_tag.as_deref() == Some(name.as_str()),
            name,
        })
        .collect();

    let cards = filter_posts(&posts, active_tag.as_deref(), &search_query)
        .into_iter()
        .map(|post| PostCard {
            id: post.id,
            title: post.title.clone(),
            thumbnail: extract_thumbnail(&post.content),
            read_time: estimate_reading_time(&post.content),
            tags: post.tags.iter().take(3).cloned().collect(),
        })
        .collect();

    HomeTemplate {
        logged_in: auth_user.is_some(),
        search_query,
        active_tag: active_tag.unwrap_or_default(),
        tag_chips,
        cards,
        subscribed_ok: params.subscribed.as_deref() == Some("ok"),
        subscribed_err: params.subscribed.as_deref() == Some("err"),
    }
}

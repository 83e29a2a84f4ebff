pub mod app_error;
pub mod feed;
pub mod markdown;
pub mod post;
pub mod post_events;
pub mod session;

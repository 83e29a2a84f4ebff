pub mod admin_route;
pub mod create_post_route;
pub mod delete_post_route;
pub mod home_route;
pub mod login_route;
pub mod not_found_route;
pub mod post_detail_route;
pub mod posts_events_route;
pub mod preview_route;
pub mod subscribe_route;
pub mod update_post_route;

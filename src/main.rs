mod extractors;
mod middleware;
mod models;
mod routes;
mod structs;
mod utils;

use std::{net::SocketAddr, sync::Arc};

use axum::{
    middleware as axum_middleware,
    routing::{get, patch, post},
    Extension, Router,
};
use sqlx::PgPool;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use middleware::logger_middleware::logger_middleware;
use models::account::Account;
use routes::admin_route::admin_route;
use routes::create_post_route::create_post_route;
use routes::delete_post_route::delete_post_route;
use routes::home_route::home_route;
use routes::login_route::{login_page_route, login_route, logout_route};
use routes::not_found_route::not_found_route;
use routes::post_detail_route::post_detail_route;
use routes::posts_events_route::posts_events_route;
use routes::preview_route::preview_route;
use routes::subscribe_route::subscribe_route;
use routes::update_post_route::update_post_route;
use utils::post_events::PostEvents;
use utils::session::hash_password;

pub struct AppState {
    pub pool: PgPool,
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let pool = PgPool::connect(&database_url)
        .await
        .expect("Failed to connect to the database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    seed_operator(&pool).await;

    let app_state = Arc::new(AppState { pool });

    let router = Router::new()
        .route("/", get(home_route))
        .route("/post/:id", get(post_detail_route))
        .route("/login", get(login_page_route).post(login_route))
        .route("/logout", post(logout_route))
        .route("/admin", get(admin_route))
        .route("/admin/posts", post(create_post_route))
        .route("/admin/posts/events", get(posts_events_route))
        .route(
            "/admin/posts/:id",
            patch(update_post_route).delete(delete_post_route),
        )
        .route("/admin/preview", post(preview_route))
        .route("/subscribe", post(subscribe_route))
        .fallback(not_found_route)
        .layer(axum_middleware::from_fn(logger_middleware))
        .layer(Extension(PostEvents::default()))
        .with_state(app_state);

    let addr: SocketAddr = std::env::var("BIND_ADDR")
        .unwrap_or_else(|_| "127.0.0.1:8000".to_string())
        .parse()
        .expect("Invalid BIND_ADDR");

    info!("Listening on {addr}");

    axum::Server::bind(&addr)
        .serve(router.into_make_service())
        .await
        .expect("Server error");
}

/// Single-operator tool: the one account is provisioned from the
/// environment, there is no registration surface.
async fn seed_operator(pool: &PgPool) {
    let (Ok(email), Ok(password)) = (
        std::env::var("ADMIN_EMAIL"),
        std::env::var("ADMIN_PASSWORD"),
    ) else {
        warn!("ADMIN_EMAIL and ADMIN_PASSWORD not set, skipping operator seeding");
        return;
    };

    let email = email.trim().to_lowercase();
    match Account::upsert_operator(pool, &email, &hash_password(&password)).await {
        Ok(()) => info!("Operator account `{email}` ready"),
        Err(e) => warn!("Error seeding operator account : {e}"),
    }
}

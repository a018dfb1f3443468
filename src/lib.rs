use std::sync::Arc;

use axum::{Router, routing::post};
use redis::Client as RedisClient;
use sqlx::PgPool;

pub mod auth;
pub mod cache;
pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod session;
pub mod store;

use cache::SessionCache;
use config::Config;
use session::SessionManager;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub sessions: SessionManager,
}

impl AppState {
    pub fn new(pool: PgPool, redis: Arc<RedisClient>, config: Config) -> Self {
        let cache = SessionCache::new(redis);
        let sessions = SessionManager::new(pool, cache, config.clone());
        AppState { config, sessions }
    }
}

// 组装路由，认证路由挂在 API 前缀下
pub fn app(state: AppState) -> Router {
    let auth_routes = Router::new()
        .route("/auth/login", post(routes::auth::login))
        .route("/auth/logout", post(routes::auth::logout));

    let base = state.config.api_base_uri.clone();

    Router::new()
        .nest(&base, auth_routes)
        .layer(axum::middleware::from_fn(middleware::log_errors))
        .with_state(state)
}

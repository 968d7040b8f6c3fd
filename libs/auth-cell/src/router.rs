use std::sync::Arc;

use axum::{middleware, routing::{get, post}, Router};

use shared_config::AppConfig;
use shared_utils::extractor::auth_middleware;

use crate::handlers;
use crate::repository::UserRepository;
use crate::service::AuthService;

/// Public routes, mounted under `/auth`.
pub fn auth_routes(config: Arc<AppConfig>, repository: Arc<dyn UserRepository>) -> Router {
    let service = Arc::new(AuthService::new(repository, config));

    Router::new()
        .route("/register", post(handlers::register))
        .route("/login", post(handlers::login))
        .with_state(service)
}

/// Protected account lookups, mounted under `/api/v1`.
pub fn user_routes(config: Arc<AppConfig>, repository: Arc<dyn UserRepository>) -> Router {
    let service = Arc::new(AuthService::new(repository, config.clone()));

    Router::new()
        .route("/users/{id}", get(handlers::get_user))
        .layer(middleware::from_fn_with_state(config, auth_middleware))
        .with_state(service)
}

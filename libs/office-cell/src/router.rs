use std::sync::Arc;

use axum::{middleware, routing::get, Router};

use shared_config::AppConfig;
use shared_utils::extractor::auth_middleware;

use crate::handlers::*;
use crate::repository::OfficeRepository;
use crate::services::OfficeService;

pub fn office_routes(config: Arc<AppConfig>, repository: Arc<dyn OfficeRepository>) -> Router {
    let service = Arc::new(OfficeService::new(repository));

    Router::new()
        .route("/offices", get(list_offices).post(create_office))
        .route("/offices/{id}", get(get_office).patch(update_office))
        .layer(middleware::from_fn_with_state(config, auth_middleware))
        .with_state(service)
}

use std::sync::Arc;

use axum::{middleware, routing::get, Router};

use shared_config::AppConfig;
use shared_utils::extractor::auth_middleware;

use crate::handlers::*;
use crate::repository::TimetableRepository;
use crate::service::TimetableService;

pub fn timetable_routes(
    config: Arc<AppConfig>,
    repository: Arc<dyn TimetableRepository>,
) -> Router {
    let service = Arc::new(TimetableService::new(repository));

    Router::new()
        .route("/locations", get(get_locations_by_doctor))
        .route(
            "/doctors/{id}/workdays",
            get(get_workdays_by_doctor).post(add_workday),
        )
        .route("/offices/{id}/doctors", get(get_doctors_by_office))
        .layer(middleware::from_fn_with_state(config, auth_middleware))
        .with_state(service)
}

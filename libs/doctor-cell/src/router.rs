use std::sync::Arc;

use axum::{middleware, routing::get, Router};

use shared_config::AppConfig;
use shared_utils::extractor::auth_middleware;

use crate::handlers::*;
use crate::repository::DoctorRepository;
use crate::services::DoctorService;

pub fn doctor_routes(config: Arc<AppConfig>, repository: Arc<dyn DoctorRepository>) -> Router {
    let service = Arc::new(DoctorService::new(repository));

    Router::new()
        .route("/doctors", get(list_doctors).post(create_doctor))
        .route("/doctors/{id}", get(get_doctor).patch(update_doctor))
        .layer(middleware::from_fn_with_state(config, auth_middleware))
        .with_state(service)
}

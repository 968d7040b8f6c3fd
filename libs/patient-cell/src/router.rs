use std::sync::Arc;

use axum::{middleware, routing::get, Router};

use shared_config::AppConfig;
use shared_utils::extractor::auth_middleware;

use crate::handlers::*;
use crate::repository::PatientRepository;
use crate::services::PatientService;

pub fn patient_routes(config: Arc<AppConfig>, repository: Arc<dyn PatientRepository>) -> Router {
    let service = Arc::new(PatientService::new(repository));

    Router::new()
        .route("/patients", get(list_patients).post(create_patient))
        .route("/patients/{id}", get(get_patient).patch(update_patient))
        .layer(middleware::from_fn_with_state(config, auth_middleware))
        .with_state(service)
}

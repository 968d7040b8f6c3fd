use std::sync::Arc;

use axum::{middleware, routing::get, Router};

use shared_config::AppConfig;
use shared_utils::extractor::auth_middleware;

use crate::handlers::*;
use crate::repository::MedicalHistoryRepository;
use crate::services::MedicalHistoryService;

pub fn medical_history_routes(
    config: Arc<AppConfig>,
    repository: Arc<dyn MedicalHistoryRepository>,
) -> Router {
    let service = Arc::new(MedicalHistoryService::new(repository));

    Router::new()
        .route(
            "/patients/{id}/medical_history",
            get(get_medical_history)
                .post(create_medical_history)
                .patch(update_medical_history),
        )
        .layer(middleware::from_fn_with_state(config, auth_middleware))
        .with_state(service)
}

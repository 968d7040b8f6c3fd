use std::sync::Arc;

use axum::{middleware, routing::get, Router};

use shared_config::AppConfig;
use shared_utils::extractor::auth_middleware;

use crate::handlers::*;
use crate::repository::AppointmentRepository;
use crate::services::AppointmentBookingService;

pub fn appointment_routes(
    config: Arc<AppConfig>,
    repository: Arc<dyn AppointmentRepository>,
) -> Router {
    let service = Arc::new(AppointmentBookingService::new(repository));

    Router::new()
        .route("/appointments", get(search_appointments).post(book_appointment))
        .route(
            "/appointments/{id}",
            get(get_appointment)
                .put(update_appointment)
                .delete(cancel_appointment),
        )
        .layer(middleware::from_fn_with_state(config, auth_middleware))
        .with_state(service)
}

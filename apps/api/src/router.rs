use std::sync::Arc;

use axum::{routing::get, Router};

use appointment_cell::{appointment_routes, PgAppointmentRepository};
use auth_cell::{auth_routes, user_routes, PgUserRepository, UserRepository};
use doctor_cell::{doctor_routes, PgDoctorRepository};
use medical_history_cell::{medical_history_routes, PgMedicalHistoryRepository};
use office_cell::{office_routes, PgOfficeRepository};
use patient_cell::{patient_routes, PgPatientRepository};
use shared_config::AppConfig;
use shared_database::PgPool;
use timetable_cell::{timetable_routes, PgTimetableRepository};

pub fn create_router(config: Arc<AppConfig>, pool: PgPool) -> Router {
    let users: Arc<dyn UserRepository> = Arc::new(PgUserRepository::new(pool.clone()));

    let api = Router::new()
        .merge(user_routes(config.clone(), users.clone()))
        .merge(patient_routes(config.clone(), Arc::new(PgPatientRepository::new(pool.clone()))))
        .merge(doctor_routes(config.clone(), Arc::new(PgDoctorRepository::new(pool.clone()))))
        .merge(office_routes(config.clone(), Arc::new(PgOfficeRepository::new(pool.clone()))))
        .merge(appointment_routes(
            config.clone(),
            Arc::new(PgAppointmentRepository::new(pool.clone())),
        ))
        .merge(timetable_routes(
            config.clone(),
            Arc::new(PgTimetableRepository::new(pool.clone())),
        ))
        .merge(medical_history_routes(
            config.clone(),
            Arc::new(PgMedicalHistoryRepository::new(pool)),
        ));

    Router::new()
        .route("/", get(|| async { "Clinic API is running!" }))
        .nest("/auth", auth_routes(config, users))
        .nest("/api/v1", api)
}

pub mod handlers;
pub mod models;
pub mod repository;
pub mod router;
pub mod services;

pub use models::*;
pub use repository::{MedicalHistoryRepository, PgMedicalHistoryRepository};
pub use router::medical_history_routes;
pub use services::MedicalHistoryService;

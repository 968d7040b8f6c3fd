pub mod handlers;
pub mod models;
pub mod repository;
pub mod router;
pub mod services;

pub use models::*;
pub use repository::{insert_doctor, DoctorRepository, PgDoctorRepository};
pub use router::doctor_routes;
pub use services::DoctorService;

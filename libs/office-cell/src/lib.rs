pub mod handlers;
pub mod models;
pub mod repository;
pub mod router;
pub mod services;

pub use models::*;
pub use repository::{OfficeRepository, PgOfficeRepository};
pub use router::office_routes;
pub use services::OfficeService;

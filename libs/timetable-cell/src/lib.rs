pub mod handlers;
pub mod models;
pub mod repository;
pub mod router;
pub mod service;

pub use models::*;
pub use repository::{PgTimetableRepository, TimetableRepository};
pub use router::timetable_routes;
pub use service::TimetableService;

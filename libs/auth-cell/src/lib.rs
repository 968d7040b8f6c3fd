pub mod handlers;
pub mod models;
pub mod password;
pub mod repository;
pub mod router;
pub mod service;

pub use models::*;
pub use repository::{PgUserRepository, UserRepository};
pub use router::{auth_routes, user_routes};
pub use service::AuthService;

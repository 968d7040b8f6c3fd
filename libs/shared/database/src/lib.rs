pub mod error;
pub mod postgres;

pub use error::RepositoryError;
pub use postgres::{connect, run_migrations, DbConnector};
pub use sqlx::PgPool;

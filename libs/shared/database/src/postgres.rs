use std::time::Duration;

use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::{debug, error, info, warn};

use shared_config::DatabaseConfig;

pub const DEFAULT_MAX_ATTEMPTS: u32 = 25;
pub const DEFAULT_RETRY_INTERVAL: Duration = Duration::from_secs(5);
const MAX_POOL_CONNECTIONS: u32 = 10;

/// Opens the connection pool, retrying at a fixed interval until the
/// database answers or the attempt budget runs out.
pub struct DbConnector {
    url: String,
    max_attempts: u32,
    retry_interval: Duration,
}

impl DbConnector {
    pub fn new(config: &DatabaseConfig) -> Self {
        Self {
            url: config.connection_url(),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            retry_interval: DEFAULT_RETRY_INTERVAL,
        }
    }

    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    pub fn with_retry_interval(mut self, retry_interval: Duration) -> Self {
        self.retry_interval = retry_interval;
        self
    }

    pub async fn connect(&self) -> Result<PgPool, sqlx::Error> {
        let mut attempt = 1;

        loop {
            debug!("Connecting to database (attempt {}/{})", attempt, self.max_attempts);

            match self.try_connect().await {
                Ok(pool) => {
                    info!("Database connection established");
                    return Ok(pool);
                }
                Err(e) if attempt < self.max_attempts => {
                    warn!(
                        "Database connection failed: {}. Retrying in {:?}",
                        e, self.retry_interval
                    );
                    attempt += 1;
                    tokio::time::sleep(self.retry_interval).await;
                }
                Err(e) => {
                    error!("Database connection failed after {} attempts: {}", attempt, e);
                    return Err(e);
                }
            }
        }
    }

    async fn try_connect(&self) -> Result<PgPool, sqlx::Error> {
        let pool = PgPoolOptions::new()
            .max_connections(MAX_POOL_CONNECTIONS)
            .acquire_timeout(Duration::from_secs(5))
            .connect(&self.url)
            .await?;

        sqlx::query("SELECT 1").execute(&pool).await?;
        Ok(pool)
    }
}

pub async fn connect(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    DbConnector::new(config).connect().await
}

pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    info!("Applying database migrations");
    sqlx::migrate!("./migrations").run(pool).await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unreachable_config() -> DatabaseConfig {
        DatabaseConfig {
            host: "127.0.0.1".to_string(),
            port: "1".to_string(),
            name: "clinic".to_string(),
            user: "postgres".to_string(),
            password: String::new(),
            url: None,
        }
    }

    #[test]
    fn test_attempts_never_drop_below_one() {
        let connector = DbConnector::new(&unreachable_config()).with_max_attempts(0);
        assert_eq!(connector.max_attempts, 1);
        assert_eq!(connector.retry_interval, DEFAULT_RETRY_INTERVAL);
    }

    #[tokio::test]
    async fn test_connect_gives_up_after_budget() {
        let connector = DbConnector::new(&unreachable_config())
            .with_max_attempts(2)
            .with_retry_interval(Duration::from_millis(10));

        assert!(connector.connect().await.is_err());
    }
}

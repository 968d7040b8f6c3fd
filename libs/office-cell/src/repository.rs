use async_trait::async_trait;
use sqlx::PgPool;

use shared_database::RepositoryError;

use crate::models::{CreateOfficeRequest, Office};

#[async_trait]
pub trait OfficeRepository: Send + Sync {
    async fn create(&self, office: &CreateOfficeRequest) -> Result<i64, RepositoryError>;
    async fn find_by_id(&self, id: i64) -> Result<Office, RepositoryError>;
    async fn find_all(&self) -> Result<Vec<Office>, RepositoryError>;
    async fn update(&self, office: &Office) -> Result<(), RepositoryError>;
}

pub struct PgOfficeRepository {
    pool: PgPool,
}

impl PgOfficeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OfficeRepository for PgOfficeRepository {
    async fn create(&self, office: &CreateOfficeRequest) -> Result<i64, RepositoryError> {
        let id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO offices (number, floor) VALUES ($1, $2) RETURNING id",
        )
        .bind(office.number)
        .bind(office.floor)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    async fn find_by_id(&self, id: i64) -> Result<Office, RepositoryError> {
        sqlx::query_as::<_, Office>("SELECT id, number, floor FROM offices WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(RepositoryError::NotFound)
    }

    async fn find_all(&self) -> Result<Vec<Office>, RepositoryError> {
        let offices =
            sqlx::query_as::<_, Office>("SELECT id, number, floor FROM offices ORDER BY id")
                .fetch_all(&self.pool)
                .await?;

        Ok(offices)
    }

    async fn update(&self, office: &Office) -> Result<(), RepositoryError> {
        let result = sqlx::query("UPDATE offices SET number = $1, floor = $2 WHERE id = $3")
            .bind(office.number)
            .bind(office.floor)
            .bind(office.id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}

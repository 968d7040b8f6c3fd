use async_trait::async_trait;
use sqlx::{PgExecutor, PgPool};

use shared_database::RepositoryError;

use crate::models::{CreateDoctorRequest, Doctor};

#[async_trait]
pub trait DoctorRepository: Send + Sync {
    async fn create(&self, doctor: &CreateDoctorRequest) -> Result<i64, RepositoryError>;
    async fn find_by_id(&self, id: i64) -> Result<Doctor, RepositoryError>;
    async fn find_all(&self) -> Result<Vec<Doctor>, RepositoryError>;
    async fn update(&self, doctor: &Doctor) -> Result<(), RepositoryError>;
}

pub async fn insert_doctor<'e, E>(
    executor: E,
    doctor: &CreateDoctorRequest,
) -> Result<i64, RepositoryError>
where
    E: PgExecutor<'e>,
{
    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO doctors (name, phone_number, email, specialization) \
         VALUES ($1, $2, $3, $4) RETURNING id",
    )
    .bind(&doctor.name)
    .bind(&doctor.phone_number)
    .bind(&doctor.email)
    .bind(&doctor.specialization)
    .fetch_one(executor)
    .await?;

    Ok(id)
}

pub struct PgDoctorRepository {
    pool: PgPool,
}

impl PgDoctorRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DoctorRepository for PgDoctorRepository {
    async fn create(&self, doctor: &CreateDoctorRequest) -> Result<i64, RepositoryError> {
        insert_doctor(&self.pool, doctor).await
    }

    async fn find_by_id(&self, id: i64) -> Result<Doctor, RepositoryError> {
        sqlx::query_as::<_, Doctor>(
            "SELECT id, name, phone_number, email, specialization FROM doctors WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(RepositoryError::NotFound)
    }

    async fn find_all(&self) -> Result<Vec<Doctor>, RepositoryError> {
        let doctors = sqlx::query_as::<_, Doctor>(
            "SELECT id, name, phone_number, email, specialization FROM doctors ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(doctors)
    }

    async fn update(&self, doctor: &Doctor) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            "UPDATE doctors SET name = $1, phone_number = $2, email = $3, specialization = $4 \
             WHERE id = $5",
        )
        .bind(&doctor.name)
        .bind(&doctor.phone_number)
        .bind(&doctor.email)
        .bind(&doctor.specialization)
        .bind(doctor.id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}

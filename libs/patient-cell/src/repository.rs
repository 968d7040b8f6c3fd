use async_trait::async_trait;
use sqlx::{PgExecutor, PgPool};

use shared_database::RepositoryError;

use crate::models::{CreatePatientRequest, Patient};

#[async_trait]
pub trait PatientRepository: Send + Sync {
    async fn create(&self, patient: &CreatePatientRequest) -> Result<i64, RepositoryError>;
    async fn find_by_id(&self, id: i64) -> Result<Patient, RepositoryError>;
    async fn find_all(&self) -> Result<Vec<Patient>, RepositoryError>;
    async fn update(&self, patient: &Patient) -> Result<(), RepositoryError>;
}

/// Inserts a patient row; shared with user registration, which runs it
/// inside its own transaction.
pub async fn insert_patient<'e, E>(
    executor: E,
    patient: &CreatePatientRequest,
) -> Result<i64, RepositoryError>
where
    E: PgExecutor<'e>,
{
    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO patients (name, phone_number, email, insurance) \
         VALUES ($1, $2, $3, $4) RETURNING id",
    )
    .bind(&patient.name)
    .bind(&patient.phone_number)
    .bind(&patient.email)
    .bind(&patient.insurance)
    .fetch_one(executor)
    .await?;

    Ok(id)
}

pub struct PgPatientRepository {
    pool: PgPool,
}

impl PgPatientRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PatientRepository for PgPatientRepository {
    async fn create(&self, patient: &CreatePatientRequest) -> Result<i64, RepositoryError> {
        insert_patient(&self.pool, patient).await
    }

    async fn find_by_id(&self, id: i64) -> Result<Patient, RepositoryError> {
        let patient = sqlx::query_as::<_, Patient>(
            "SELECT id, name, phone_number, email, insurance FROM patients WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(RepositoryError::NotFound)?;

        Ok(patient)
    }

    async fn find_all(&self) -> Result<Vec<Patient>, RepositoryError> {
        let patients = sqlx::query_as::<_, Patient>(
            "SELECT id, name, phone_number, email, insurance FROM patients ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(patients)
    }

    async fn update(&self, patient: &Patient) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            "UPDATE patients SET name = $1, phone_number = $2, email = $3, insurance = $4 \
             WHERE id = $5",
        )
        .bind(&patient.name)
        .bind(&patient.phone_number)
        .bind(&patient.email)
        .bind(&patient.insurance)
        .bind(patient.id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}

use async_trait::async_trait;
use sqlx::PgPool;

use shared_database::RepositoryError;

use crate::models::MedicalHistory;

#[async_trait]
pub trait MedicalHistoryRepository: Send + Sync {
    async fn find_by_patient(&self, patient_id: i64) -> Result<MedicalHistory, RepositoryError>;
    async fn create(&self, history: &MedicalHistory) -> Result<i64, RepositoryError>;
    async fn update(&self, history: &MedicalHistory) -> Result<(), RepositoryError>;
}

pub struct PgMedicalHistoryRepository {
    pool: PgPool,
}

impl PgMedicalHistoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Empty strings are written as NULL so "not recorded" has one representation.
fn nullable(value: &str) -> Option<&str> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

#[async_trait]
impl MedicalHistoryRepository for PgMedicalHistoryRepository {
    async fn find_by_patient(&self, patient_id: i64) -> Result<MedicalHistory, RepositoryError> {
        sqlx::query_as::<_, MedicalHistory>(
            "SELECT id, patient_id, \
                    COALESCE(chronic_diseases, '') AS chronic_diseases, \
                    COALESCE(allergies, '') AS allergies, \
                    COALESCE(blood_type, '') AS blood_type, \
                    COALESCE(vaccination, '') AS vaccination \
             FROM medical_histories WHERE patient_id = $1",
        )
        .bind(patient_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(RepositoryError::NotFound)
    }

    async fn create(&self, history: &MedicalHistory) -> Result<i64, RepositoryError> {
        let id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO medical_histories \
             (patient_id, chronic_diseases, allergies, blood_type, vaccination) \
             VALUES ($1, $2, $3, $4, $5) RETURNING id",
        )
        .bind(history.patient_id)
        .bind(nullable(&history.chronic_diseases))
        .bind(nullable(&history.allergies))
        .bind(nullable(&history.blood_type))
        .bind(nullable(&history.vaccination))
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    async fn update(&self, history: &MedicalHistory) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            "UPDATE medical_histories \
             SET chronic_diseases = $2, allergies = $3, blood_type = $4, vaccination = $5 \
             WHERE patient_id = $1",
        )
        .bind(history.patient_id)
        .bind(nullable(&history.chronic_diseases))
        .bind(nullable(&history.allergies))
        .bind(nullable(&history.blood_type))
        .bind(nullable(&history.vaccination))
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}

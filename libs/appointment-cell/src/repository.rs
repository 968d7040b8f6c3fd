use async_trait::async_trait;
use sqlx::PgPool;

use shared_database::RepositoryError;

use crate::models::{Appointment, AppointmentFilter, CreateAppointmentRequest};

#[async_trait]
pub trait AppointmentRepository: Send + Sync {
    async fn create(&self, appointment: &CreateAppointmentRequest) -> Result<i64, RepositoryError>;
    async fn find_by_id(&self, id: i64) -> Result<Appointment, RepositoryError>;
    async fn find(&self, filter: AppointmentFilter) -> Result<Vec<Appointment>, RepositoryError>;
    async fn update(&self, appointment: &Appointment) -> Result<(), RepositoryError>;
    async fn delete(&self, id: i64) -> Result<(), RepositoryError>;
}

pub struct PgAppointmentRepository {
    pool: PgPool,
}

impl PgAppointmentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AppointmentRepository for PgAppointmentRepository {
    async fn create(&self, appointment: &CreateAppointmentRequest) -> Result<i64, RepositoryError> {
        let id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO appointments (patient_id, doctor_id, date_time) \
             VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(appointment.patient_id)
        .bind(appointment.doctor_id)
        .bind(appointment.date_time)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    async fn find_by_id(&self, id: i64) -> Result<Appointment, RepositoryError> {
        sqlx::query_as::<_, Appointment>(
            "SELECT id, patient_id, doctor_id, date_time FROM appointments WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(RepositoryError::NotFound)
    }

    async fn find(&self, filter: AppointmentFilter) -> Result<Vec<Appointment>, RepositoryError> {
        let appointments = sqlx::query_as::<_, Appointment>(
            "SELECT id, patient_id, doctor_id, date_time FROM appointments \
             WHERE ($1::BIGINT IS NULL OR doctor_id = $1) \
               AND ($2::BIGINT IS NULL OR patient_id = $2) \
             ORDER BY date_time, id",
        )
        .bind(filter.doctor_id)
        .bind(filter.patient_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(appointments)
    }

    async fn update(&self, appointment: &Appointment) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            "UPDATE appointments SET patient_id = $1, doctor_id = $2, date_time = $3 WHERE id = $4",
        )
        .bind(appointment.patient_id)
        .bind(appointment.doctor_id)
        .bind(appointment.date_time)
        .bind(appointment.id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM appointments WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

use shared_database::RepositoryError;

use crate::models::UpcomingAppointment;

#[async_trait]
pub trait ReminderRepository: Send + Sync {
    /// Appointments with `start <= date_time < end`. Rows that fail to
    /// decode come back as individual errors so the rest can still be sent.
    async fn find_in_window(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Result<UpcomingAppointment, RepositoryError>>, RepositoryError>;
}

pub struct PgReminderRepository {
    pool: PgPool,
}

impl PgReminderRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReminderRepository for PgReminderRepository {
    async fn find_in_window(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Result<UpcomingAppointment, RepositoryError>>, RepositoryError> {
        let rows = sqlx::query(
            "SELECT a.id, a.doctor_id, a.patient_id, a.date_time, \
                    p.name AS patient_name, p.email AS patient_email \
             FROM appointments a \
             JOIN patients p ON a.patient_id = p.id \
             WHERE a.date_time >= $1 AND a.date_time < $2 \
             ORDER BY a.date_time",
        )
        .bind(start)
        .bind(end)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .iter()
            .map(|row| UpcomingAppointment::from_row(row).map_err(RepositoryError::from))
            .collect())
    }
}

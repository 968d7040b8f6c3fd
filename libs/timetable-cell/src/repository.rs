use async_trait::async_trait;
use sqlx::PgPool;

use doctor_cell::Doctor;
use office_cell::Office;
use shared_database::RepositoryError;

use crate::models::Timetable;

#[async_trait]
pub trait TimetableRepository: Send + Sync {
    async fn find_locations_by_doctor(&self, doctor_id: i64) -> Result<Vec<Office>, RepositoryError>;
    async fn find_doctors_by_location(&self, office_id: i64) -> Result<Vec<Doctor>, RepositoryError>;
    async fn find_workdays_by_doctor(&self, doctor_id: i64) -> Result<Vec<Timetable>, RepositoryError>;
    async fn create_workday(
        &self,
        doctor_id: i64,
        office_id: i64,
        work_day: i32,
    ) -> Result<i64, RepositoryError>;
}

pub struct PgTimetableRepository {
    pool: PgPool,
}

impl PgTimetableRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TimetableRepository for PgTimetableRepository {
    async fn find_locations_by_doctor(&self, doctor_id: i64) -> Result<Vec<Office>, RepositoryError> {
        let offices = sqlx::query_as::<_, Office>(
            "SELECT DISTINCT o.id, o.number, o.floor \
             FROM timetable t JOIN offices o ON t.office_id = o.id \
             WHERE t.doctor_id = $1 ORDER BY o.id",
        )
        .bind(doctor_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(offices)
    }

    async fn find_doctors_by_location(&self, office_id: i64) -> Result<Vec<Doctor>, RepositoryError> {
        let doctors = sqlx::query_as::<_, Doctor>(
            "SELECT DISTINCT d.id, d.name, d.phone_number, d.email, d.specialization \
             FROM timetable t JOIN doctors d ON t.doctor_id = d.id \
             WHERE t.office_id = $1 ORDER BY d.id",
        )
        .bind(office_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(doctors)
    }

    async fn find_workdays_by_doctor(&self, doctor_id: i64) -> Result<Vec<Timetable>, RepositoryError> {
        let workdays = sqlx::query_as::<_, Timetable>(
            "SELECT id, doctor_id, office_id, work_day FROM timetable \
             WHERE doctor_id = $1 ORDER BY work_day, id",
        )
        .bind(doctor_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(workdays)
    }

    async fn create_workday(
        &self,
        doctor_id: i64,
        office_id: i64,
        work_day: i32,
    ) -> Result<i64, RepositoryError> {
        let id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO timetable (doctor_id, office_id, work_day) VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(doctor_id)
        .bind(office_id)
        .bind(work_day)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }
}

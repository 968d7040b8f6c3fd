use std::sync::Arc;

use tracing::debug;

use doctor_cell::Doctor;
use office_cell::Office;
use shared_database::RepositoryError;
use shared_models::error::AppError;

use crate::models::{is_valid_work_day, CreateWorkdayRequest, Timetable, FIRST_WORK_DAY, LAST_WORK_DAY};
use crate::repository::TimetableRepository;

pub struct TimetableService {
    repository: Arc<dyn TimetableRepository>,
}

impl TimetableService {
    pub fn new(repository: Arc<dyn TimetableRepository>) -> Self {
        Self { repository }
    }

    pub async fn locations_by_doctor(&self, doctor_id: i64) -> Result<Vec<Office>, AppError> {
        debug!("Fetching locations for doctor: {}", doctor_id);
        Ok(self.repository.find_locations_by_doctor(doctor_id).await?)
    }

    pub async fn doctors_by_location(&self, office_id: i64) -> Result<Vec<Doctor>, AppError> {
        debug!("Fetching doctors for office: {}", office_id);
        Ok(self.repository.find_doctors_by_location(office_id).await?)
    }

    pub async fn workdays_by_doctor(&self, doctor_id: i64) -> Result<Vec<Timetable>, AppError> {
        debug!("Fetching workdays for doctor: {}", doctor_id);
        Ok(self.repository.find_workdays_by_doctor(doctor_id).await?)
    }

    pub async fn add_workday(
        &self,
        doctor_id: i64,
        request: CreateWorkdayRequest,
    ) -> Result<i64, AppError> {
        if !is_valid_work_day(request.work_day) {
            return Err(AppError::ValidationError(format!(
                "workDay must be between {} and {}",
                FIRST_WORK_DAY, LAST_WORK_DAY
            )));
        }

        self.repository
            .create_workday(doctor_id, request.office_id, request.work_day)
            .await
            .map_err(|e| match e {
                RepositoryError::InvalidReference => AppError::BadRequest(format!(
                    "Doctor {} or office {} does not exist",
                    doctor_id, request.office_id
                )),
                other => other.into(),
            })
    }
}

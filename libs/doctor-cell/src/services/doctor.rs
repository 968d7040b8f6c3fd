use std::sync::Arc;

use tracing::debug;

use shared_database::RepositoryError;
use shared_models::error::AppError;
use shared_utils::validation::{require_non_empty, validate_optional_email};

use crate::models::{CreateDoctorRequest, Doctor, UpdateDoctorRequest};
use crate::repository::DoctorRepository;

pub struct DoctorService {
    repository: Arc<dyn DoctorRepository>,
}

impl DoctorService {
    pub fn new(repository: Arc<dyn DoctorRepository>) -> Self {
        Self { repository }
    }

    /// Create a new doctor profile
    pub async fn create_doctor(&self, request: CreateDoctorRequest) -> Result<i64, AppError> {
        debug!("Creating new doctor profile for: {}", request.name);

        require_non_empty("name", &request.name)?;
        validate_optional_email(&request.email)?;

        Ok(self.repository.create(&request).await?)
    }

    /// Get doctor by ID
    pub async fn get_doctor(&self, doctor_id: i64) -> Result<Doctor, AppError> {
        debug!("Fetching doctor: {}", doctor_id);

        self.repository
            .find_by_id(doctor_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => {
                    AppError::NotFound(format!("Doctor {} not found", doctor_id))
                }
                other => other.into(),
            })
    }

    /// List every doctor, ordered by id
    pub async fn list_doctors(&self) -> Result<Vec<Doctor>, AppError> {
        Ok(self.repository.find_all().await?)
    }

    /// Update doctor profile; blank fields keep their stored value
    pub async fn update_doctor(
        &self,
        doctor_id: i64,
        request: UpdateDoctorRequest,
    ) -> Result<i64, AppError> {
        debug!("Updating doctor profile: {}", doctor_id);

        if let Some(email) = &request.email {
            validate_optional_email(email)?;
        }

        let current = self.get_doctor(doctor_id).await?;
        self.repository.update(&current.apply_update(request)).await?;

        Ok(doctor_id)
    }
}

use std::sync::Arc;

use tracing::debug;

use shared_database::RepositoryError;
use shared_models::error::AppError;
use shared_utils::validation::{require_non_empty, validate_optional_email};

use crate::models::{CreatePatientRequest, Patient, UpdatePatientRequest};
use crate::repository::PatientRepository;

pub struct PatientService {
    repository: Arc<dyn PatientRepository>,
}

impl PatientService {
    pub fn new(repository: Arc<dyn PatientRepository>) -> Self {
        Self { repository }
    }

    pub async fn create_patient(&self, request: CreatePatientRequest) -> Result<i64, AppError> {
        debug!("Creating patient: {}", request.name);

        require_non_empty("name", &request.name)?;
        validate_optional_email(&request.email)?;

        let id = self.repository.create(&request).await?;
        debug!("Patient created with ID: {}", id);

        Ok(id)
    }

    pub async fn get_patient(&self, patient_id: i64) -> Result<Patient, AppError> {
        debug!("Fetching patient: {}", patient_id);

        self.repository
            .find_by_id(patient_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => {
                    AppError::NotFound(format!("Patient {} not found", patient_id))
                }
                other => other.into(),
            })
    }

    pub async fn list_patients(&self) -> Result<Vec<Patient>, AppError> {
        Ok(self.repository.find_all().await?)
    }

    pub async fn update_patient(
        &self,
        patient_id: i64,
        request: UpdatePatientRequest,
    ) -> Result<i64, AppError> {
        debug!("Updating patient: {}", patient_id);

        if let Some(email) = &request.email {
            validate_optional_email(email)?;
        }

        let current = self.get_patient(patient_id).await?;
        let updated = current.apply_update(request);
        self.repository.update(&updated).await?;

        Ok(patient_id)
    }
}

use std::sync::Arc;

use tracing::debug;

use shared_database::RepositoryError;
use shared_models::error::AppError;

use crate::models::{MedicalHistory, MedicalHistoryRequest};
use crate::repository::MedicalHistoryRepository;

pub struct MedicalHistoryService {
    repository: Arc<dyn MedicalHistoryRepository>,
}

impl MedicalHistoryService {
    pub fn new(repository: Arc<dyn MedicalHistoryRepository>) -> Self {
        Self { repository }
    }

    pub async fn get_history(&self, patient_id: i64) -> Result<MedicalHistory, AppError> {
        debug!("Fetching medical history for patient: {}", patient_id);

        self.repository
            .find_by_patient(patient_id)
            .await
            .map_err(|e| not_found(e, patient_id))
    }

    /// A patient has at most one history; a second create is a `409`.
    pub async fn create_history(
        &self,
        patient_id: i64,
        request: MedicalHistoryRequest,
    ) -> Result<i64, AppError> {
        debug!("Creating medical history for patient: {}", patient_id);

        let history = MedicalHistory::new(patient_id, request);
        self.repository.create(&history).await.map_err(|e| match e {
            RepositoryError::AlreadyExists => AppError::Conflict(format!(
                "Medical history for patient {} already exists",
                patient_id
            )),
            RepositoryError::InvalidReference => {
                AppError::BadRequest(format!("Patient {} does not exist", patient_id))
            }
            other => other.into(),
        })
    }

    pub async fn update_history(
        &self,
        patient_id: i64,
        request: MedicalHistoryRequest,
    ) -> Result<i64, AppError> {
        debug!("Updating medical history for patient: {}", patient_id);

        let current = self.get_history(patient_id).await?;
        let updated = current.apply_update(request);
        self.repository
            .update(&updated)
            .await
            .map_err(|e| not_found(e, patient_id))?;

        Ok(updated.id)
    }
}

fn not_found(err: RepositoryError, patient_id: i64) -> AppError {
    match err {
        RepositoryError::NotFound => AppError::NotFound(format!(
            "Medical history for patient {} not found",
            patient_id
        )),
        other => other.into(),
    }
}

use std::sync::Arc;

use tracing::debug;

use shared_database::RepositoryError;
use shared_models::error::AppError;

use crate::models::{CreateOfficeRequest, Office, UpdateOfficeRequest};
use crate::repository::OfficeRepository;

pub struct OfficeService {
    repository: Arc<dyn OfficeRepository>,
}

impl OfficeService {
    pub fn new(repository: Arc<dyn OfficeRepository>) -> Self {
        Self { repository }
    }

    pub async fn create_office(&self, request: CreateOfficeRequest) -> Result<i64, AppError> {
        debug!("Creating office {} on floor {}", request.number, request.floor);

        if request.number <= 0 {
            return Err(AppError::ValidationError(
                "Office number must be positive".to_string(),
            ));
        }

        Ok(self.repository.create(&request).await?)
    }

    pub async fn get_office(&self, office_id: i64) -> Result<Office, AppError> {
        self.repository
            .find_by_id(office_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => {
                    AppError::NotFound(format!("Office {} not found", office_id))
                }
                other => other.into(),
            })
    }

    pub async fn list_offices(&self) -> Result<Vec<Office>, AppError> {
        Ok(self.repository.find_all().await?)
    }

    pub async fn update_office(
        &self,
        office_id: i64,
        request: UpdateOfficeRequest,
    ) -> Result<i64, AppError> {
        debug!("Updating office: {}", office_id);

        let current = self.get_office(office_id).await?;
        self.repository.update(&current.apply_update(request)).await?;

        Ok(office_id)
    }
}

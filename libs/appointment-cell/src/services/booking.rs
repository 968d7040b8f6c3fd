use std::sync::Arc;

use tracing::{debug, info};

use shared_database::RepositoryError;
use shared_models::error::AppError;

use crate::models::{
    Appointment, AppointmentFilter, CreateAppointmentRequest, UpdateAppointmentRequest,
};
use crate::repository::AppointmentRepository;

pub struct AppointmentBookingService {
    repository: Arc<dyn AppointmentRepository>,
}

impl AppointmentBookingService {
    pub fn new(repository: Arc<dyn AppointmentRepository>) -> Self {
        Self { repository }
    }

    /// Book a new appointment. Unknown patients or doctors are rejected by the
    /// store's foreign keys and surface as `400`.
    pub async fn book_appointment(
        &self,
        request: CreateAppointmentRequest,
    ) -> Result<i64, AppError> {
        debug!(
            "Booking appointment for patient {} with doctor {} at {}",
            request.patient_id, request.doctor_id, request.date_time
        );

        if request.patient_id <= 0 || request.doctor_id <= 0 {
            return Err(AppError::ValidationError(
                "patientId and doctorId are required".to_string(),
            ));
        }

        let id = self.repository.create(&request).await.map_err(|e| match e {
            RepositoryError::InvalidReference => AppError::BadRequest(format!(
                "Patient {} or doctor {} does not exist",
                request.patient_id, request.doctor_id
            )),
            other => other.into(),
        })?;

        info!("Appointment {} booked", id);
        Ok(id)
    }

    pub async fn get_appointment(&self, appointment_id: i64) -> Result<Appointment, AppError> {
        self.repository
            .find_by_id(appointment_id)
            .await
            .map_err(|e| not_found(e, appointment_id))
    }

    pub async fn list_appointments(
        &self,
        filter: AppointmentFilter,
    ) -> Result<Vec<Appointment>, AppError> {
        debug!("Listing appointments with filter: {:?}", filter);

        Ok(self.repository.find(filter).await?)
    }

    pub async fn reschedule_appointment(
        &self,
        appointment_id: i64,
        request: UpdateAppointmentRequest,
    ) -> Result<i64, AppError> {
        debug!("Updating appointment: {}", appointment_id);

        let current = self.get_appointment(appointment_id).await?;
        let updated = current.apply_update(request);

        self.repository
            .update(&updated)
            .await
            .map_err(|e| match e {
                RepositoryError::InvalidReference => AppError::BadRequest(format!(
                    "Patient {} or doctor {} does not exist",
                    updated.patient_id, updated.doctor_id
                )),
                other => not_found(other, appointment_id),
            })?;

        Ok(appointment_id)
    }

    pub async fn cancel_appointment(&self, appointment_id: i64) -> Result<(), AppError> {
        debug!("Cancelling appointment: {}", appointment_id);

        self.repository
            .delete(appointment_id)
            .await
            .map_err(|e| not_found(e, appointment_id))?;

        info!("Appointment {} cancelled", appointment_id);
        Ok(())
    }
}

fn not_found(err: RepositoryError, appointment_id: i64) -> AppError {
    match err {
        RepositoryError::NotFound => {
            AppError::NotFound(format!("Appointment {} not found", appointment_id))
        }
        other => other.into(),
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use shared_models::error::AppError;
use shared_utils::validation::parse_optional_id;

// ==============================================================================
// CORE APPOINTMENT MODELS
// ==============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: i64,
    pub patient_id: i64,
    pub doctor_id: i64,
    pub date_time: DateTime<Utc>,
}

impl Appointment {
    /// Rebooks the appointment; zero ids and a missing date keep the
    /// current values.
    pub fn apply_update(self, update: UpdateAppointmentRequest) -> Self {
        Self {
            id: self.id,
            patient_id: keep_unless_zero(self.patient_id, update.patient_id),
            doctor_id: keep_unless_zero(self.doctor_id, update.doctor_id),
            date_time: update.date_time.unwrap_or(self.date_time),
        }
    }
}

fn keep_unless_zero(current: i64, replacement: Option<i64>) -> i64 {
    match replacement {
        Some(id) if id != 0 => id,
        _ => current,
    }
}

// ==============================================================================
// REQUEST MODELS
// ==============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAppointmentRequest {
    pub patient_id: i64,
    pub doctor_id: i64,
    pub date_time: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAppointmentRequest {
    pub patient_id: Option<i64>,
    pub doctor_id: Option<i64>,
    pub date_time: Option<DateTime<Utc>>,
}

/// Raw query string; ids stay strings so a bad value becomes a JSON 400
/// instead of axum's plain-text query rejection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppointmentQuery {
    pub doctor_id: Option<String>,
    pub patient_id: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AppointmentFilter {
    pub doctor_id: Option<i64>,
    pub patient_id: Option<i64>,
}

impl TryFrom<AppointmentQuery> for AppointmentFilter {
    type Error = AppError;

    fn try_from(query: AppointmentQuery) -> Result<Self, Self::Error> {
        let doctor_id = parse_optional_id(query.doctor_id.as_deref())?;
        let patient_id = parse_optional_id(query.patient_id.as_deref())?;

        Ok(Self {
            doctor_id: doctor_id.filter(|id| *id != 0),
            patient_id: patient_id.filter(|id| *id != 0),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use chrono::TimeZone;

    #[test]
    fn test_filter_from_query() {
        let filter = AppointmentFilter::try_from(AppointmentQuery {
            doctor_id: Some("4".to_string()),
            patient_id: Some("0".to_string()),
        })
        .unwrap();
        assert_eq!(
            filter,
            AppointmentFilter {
                doctor_id: Some(4),
                patient_id: None
            }
        );

        assert_matches!(
            AppointmentFilter::try_from(AppointmentQuery {
                doctor_id: None,
                patient_id: Some("seven".to_string()),
            }),
            Err(AppError::BadRequest(_))
        );
    }

    #[test]
    fn test_reschedule_keeps_participants() {
        let booked = Appointment {
            id: 1,
            patient_id: 2,
            doctor_id: 3,
            date_time: Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap(),
        };
        let moved_to = Utc.with_ymd_and_hms(2024, 5, 2, 11, 30, 0).unwrap();

        let updated = booked.apply_update(UpdateAppointmentRequest {
            patient_id: Some(0),
            doctor_id: None,
            date_time: Some(moved_to),
        });

        assert_eq!(updated.patient_id, 2);
        assert_eq!(updated.doctor_id, 3);
        assert_eq!(updated.date_time, moved_to);
    }
}

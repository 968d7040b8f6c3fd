use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// An appointment inside the reminder window, joined with its patient's
/// contact details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct UpcomingAppointment {
    pub id: i64,
    pub doctor_id: i64,
    pub patient_id: i64,
    pub date_time: DateTime<Utc>,
    pub patient_name: String,
    pub patient_email: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReminderEmail {
    pub to: String,
    pub subject: String,
    pub body: String,
}

/// Outcome of one scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ReminderReport {
    pub found: usize,
    pub sent: usize,
    pub failed: usize,
}

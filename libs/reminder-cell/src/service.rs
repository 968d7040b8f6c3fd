use std::sync::Arc;

use chrono::{DateTime, Duration, FixedOffset, Offset, Utc};
use tracing::{error, info, warn};

use crate::models::{ReminderEmail, ReminderReport, UpcomingAppointment};
use crate::repository::ReminderRepository;
use crate::sender::ReminderSender;

pub const REMINDER_SUBJECT: &str = "Appointment reminder";

/// How far ahead reminders are sent.
pub const REMINDER_LEAD_HOURS: i64 = 24;
/// Half-width of the window around the lead time.
pub const WINDOW_HALF_WIDTH_MINUTES: i64 = 30;

/// Half-open `[start, end)` range; consecutive hourly windows never overlap.
pub fn reminder_window(now: DateTime<Utc>) -> (DateTime<Utc>, DateTime<Utc>) {
    let target = now + Duration::hours(REMINDER_LEAD_HOURS);
    let half_width = Duration::minutes(WINDOW_HALF_WIDTH_MINUTES);

    (target - half_width, target + half_width)
}

/// Renders the email with the appointment time in the clinic's local offset.
pub fn format_reminder(
    appointment: &UpcomingAppointment,
    utc_offset: &FixedOffset,
) -> ReminderEmail {
    let body = format!(
        "Dear {},\n\n\
         This is a reminder of your appointment tomorrow, {}.\n\n\
         Kind regards,\n\
         Your clinic\n",
        appointment.patient_name,
        appointment
            .date_time
            .with_timezone(utc_offset)
            .format("%d.%m.%Y %H:%M"),
    );

    ReminderEmail {
        to: appointment.patient_email.clone(),
        subject: REMINDER_SUBJECT.to_string(),
        body,
    }
}

pub struct ReminderService {
    repository: Arc<dyn ReminderRepository>,
    sender: Arc<dyn ReminderSender>,
    utc_offset: FixedOffset,
}

impl ReminderService {
    pub fn new(repository: Arc<dyn ReminderRepository>, sender: Arc<dyn ReminderSender>) -> Self {
        Self {
            repository,
            sender,
            utc_offset: Utc.fix(),
        }
    }

    pub fn with_utc_offset(mut self, utc_offset: FixedOffset) -> Self {
        self.utc_offset = utc_offset;
        self
    }

    /// Emails every patient whose appointment falls in the window around
    /// `now + 24h`. Failures are logged per row and never abort the scan.
    pub async fn check_appointments(&self, now: DateTime<Utc>) -> ReminderReport {
        let (start, end) = reminder_window(now);
        info!(
            "Checking appointments scheduled for {}",
            (now + Duration::hours(REMINDER_LEAD_HOURS)).format("%Y-%m-%d %H:%M:%S")
        );

        let rows = match self.repository.find_in_window(start, end).await {
            Ok(rows) => rows,
            Err(e) => {
                error!("Failed to query upcoming appointments: {}", e);
                return ReminderReport::default();
            }
        };

        let mut report = ReminderReport {
            found: rows.len(),
            ..Default::default()
        };

        for row in rows {
            let appointment = match row {
                Ok(appointment) => appointment,
                Err(e) => {
                    warn!("Skipping unreadable appointment row: {}", e);
                    report.failed += 1;
                    continue;
                }
            };

            match self
                .sender
                .send_reminder(&format_reminder(&appointment, &self.utc_offset))
                .await {
                Ok(()) => {
                    info!(
                        "Reminder sent to patient {} at {}",
                        appointment.patient_id, appointment.patient_email
                    );
                    report.sent += 1;
                }
                Err(e) => {
                    error!(
                        "Failed to send reminder to patient {}: {}",
                        appointment.patient_id, e
                    );
                    report.failed += 1;
                }
            }
        }

        info!(
            "Reminder scan finished: {} found, {} sent, {} failed",
            report.found, report.sent, report.failed
        );
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn appointment() -> UpcomingAppointment {
        UpcomingAppointment {
            id: 1,
            doctor_id: 2,
            patient_id: 3,
            date_time: Utc.with_ymd_and_hms(2024, 3, 5, 9, 7, 0).unwrap(),
            patient_name: "Anna Petrova".to_string(),
            patient_email: "anna@example.com".to_string(),
        }
    }

    #[test]
    fn test_window_is_centred_on_next_day() {
        let now = Utc.with_ymd_and_hms(2024, 3, 4, 12, 0, 0).unwrap();

        let (start, end) = reminder_window(now);

        assert_eq!(start, Utc.with_ymd_and_hms(2024, 3, 5, 11, 30, 0).unwrap());
        assert_eq!(end, Utc.with_ymd_and_hms(2024, 3, 5, 12, 30, 0).unwrap());
    }

    #[test]
    fn test_format_reminder() {
        let email = format_reminder(&appointment(), &Utc.fix());

        assert_eq!(email.to, "anna@example.com");
        assert_eq!(email.subject, "Appointment reminder");
        assert!(email.body.starts_with("Dear Anna Petrova,"));
        assert!(email.body.contains("05.03.2024 09:07"));
    }

    #[test]
    fn test_format_reminder_uses_clinic_offset() {
        let moscow = FixedOffset::east_opt(3 * 3600).unwrap();

        let email = format_reminder(&appointment(), &moscow);

        assert!(email.body.contains("05.03.2024 12:07"));
    }

    #[test]
    fn test_consecutive_windows_meet_without_overlap() {
        let now = Utc.with_ymd_and_hms(2024, 3, 4, 12, 0, 0).unwrap();

        let (_, first_end) = reminder_window(now);
        let (second_start, _) = reminder_window(now + Duration::hours(1));

        assert_eq!(first_end, second_start);
    }
}

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Duration, FixedOffset, TimeZone, Utc};
use mockall::mock;

use reminder_cell::{
    reminder_window, ReminderEmail, ReminderError, ReminderRepository, ReminderReport,
    ReminderSender, ReminderService, UpcomingAppointment,
};
use shared_database::RepositoryError;

mock! {
    pub ReminderRepo {}

    #[async_trait]
    impl ReminderRepository for ReminderRepo {
        async fn find_in_window(
            &self,
            start: DateTime<Utc>,
            end: DateTime<Utc>,
        ) -> Result<Vec<Result<UpcomingAppointment, RepositoryError>>, RepositoryError>;
    }
}

mock! {
    pub Sender {}

    #[async_trait]
    impl ReminderSender for Sender {
        async fn send_reminder(&self, email: &ReminderEmail) -> Result<(), ReminderError>;
    }
}

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 4, 12, 0, 0).unwrap()
}

fn upcoming(id: i64, email: &str) -> UpcomingAppointment {
    UpcomingAppointment {
        id,
        doctor_id: 1,
        patient_id: id * 10,
        date_time: now() + Duration::hours(24),
        patient_name: format!("Patient {}", id),
        patient_email: email.to_string(),
    }
}

#[tokio::test]
async fn test_queries_the_reminder_window() {
    let (expected_start, expected_end) = reminder_window(now());
    let mut repo = MockReminderRepo::new();
    repo.expect_find_in_window()
        .withf(move |start, end| *start == expected_start && *end == expected_end)
        .times(1)
        .returning(|_, _| Ok(vec![]));
    let mut sender = MockSender::new();
    sender.expect_send_reminder().never();

    let service = ReminderService::new(Arc::new(repo), Arc::new(sender));
    let report = service.check_appointments(now()).await;

    assert_eq!(report, ReminderReport::default());
}

#[tokio::test]
async fn test_sends_one_email_per_appointment() {
    let mut repo = MockReminderRepo::new();
    repo.expect_find_in_window().returning(|_, _| {
        Ok(vec![
            Ok(upcoming(1, "one@example.com")),
            Ok(upcoming(2, "two@example.com")),
        ])
    });
    let mut sender = MockSender::new();
    sender
        .expect_send_reminder()
        .withf(|email| email.subject == "Appointment reminder")
        .times(2)
        .returning(|_| Ok(()));

    let service = ReminderService::new(Arc::new(repo), Arc::new(sender));
    let report = service.check_appointments(now()).await;

    assert_eq!(report, ReminderReport { found: 2, sent: 2, failed: 0 });
}

#[tokio::test]
async fn test_failed_send_does_not_stop_remaining() {
    let mut repo = MockReminderRepo::new();
    repo.expect_find_in_window().returning(|_, _| {
        Ok(vec![
            Ok(upcoming(1, "broken")),
            Err(RepositoryError::ConstraintViolation("bad row".to_string())),
            Ok(upcoming(3, "three@example.com")),
        ])
    });
    let mut sender = MockSender::new();
    sender
        .expect_send_reminder()
        .withf(|email| email.to == "broken")
        .times(1)
        .returning(|email| {
            Err(ReminderError::Address {
                address: email.to.clone(),
                source: "broken".parse::<lettre::Address>().unwrap_err(),
            })
        });
    sender
        .expect_send_reminder()
        .withf(|email| email.to == "three@example.com")
        .times(1)
        .returning(|_| Ok(()));

    let service = ReminderService::new(Arc::new(repo), Arc::new(sender));
    let report = service.check_appointments(now()).await;

    assert_eq!(report, ReminderReport { found: 3, sent: 1, failed: 2 });
}

#[tokio::test]
async fn test_query_failure_ends_the_tick() {
    let mut repo = MockReminderRepo::new();
    repo.expect_find_in_window()
        .returning(|_, _| Err(RepositoryError::Database(sqlx::Error::PoolTimedOut)));
    let mut sender = MockSender::new();
    sender.expect_send_reminder().never();

    let service = ReminderService::new(Arc::new(repo), Arc::new(sender));
    let report = service.check_appointments(now()).await;

    assert_eq!(report, ReminderReport::default());
}

#[tokio::test]
async fn test_email_shows_clinic_local_time() {
    let mut repo = MockReminderRepo::new();
    repo.expect_find_in_window()
        .returning(|_, _| Ok(vec![Ok(upcoming(1, "one@example.com"))]));
    let mut sender = MockSender::new();
    // 12:00 UTC on the next day is 15:00 at +03:00.
    sender
        .expect_send_reminder()
        .withf(|email| email.body.contains("05.03.2024 15:00"))
        .times(1)
        .returning(|_| Ok(()));

    let offset = FixedOffset::east_opt(3 * 3600).unwrap();
    let service =
        ReminderService::new(Arc::new(repo), Arc::new(sender)).with_utc_offset(offset);
    let report = service.check_appointments(now()).await;

    assert_eq!(report.sent, 1);
}

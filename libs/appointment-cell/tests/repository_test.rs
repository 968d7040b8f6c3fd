use assert_matches::assert_matches;
use chrono::{DateTime, TimeZone, Utc};
use sqlx::PgPool;

use appointment_cell::{
    AppointmentFilter, AppointmentRepository, CreateAppointmentRequest, PgAppointmentRepository,
};
use shared_database::RepositoryError;

async fn seed_patient(pool: &PgPool, name: &str) -> i64 {
    sqlx::query_scalar::<_, i64>("INSERT INTO patients (name) VALUES ($1) RETURNING id")
        .bind(name)
        .fetch_one(pool)
        .await
        .unwrap()
}

async fn seed_doctor(pool: &PgPool, name: &str) -> i64 {
    sqlx::query_scalar::<_, i64>("INSERT INTO doctors (name) VALUES ($1) RETURNING id")
        .bind(name)
        .fetch_one(pool)
        .await
        .unwrap()
}

fn at(day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, day, hour, 0, 0).unwrap()
}

fn booking(patient_id: i64, doctor_id: i64, date_time: DateTime<Utc>) -> CreateAppointmentRequest {
    CreateAppointmentRequest {
        patient_id,
        doctor_id,
        date_time,
    }
}

#[sqlx::test(migrations = "../shared/database/migrations")]
async fn test_unknown_doctor_is_invalid_reference(pool: PgPool) {
    let patient = seed_patient(&pool, "Anna").await;
    let repo = PgAppointmentRepository::new(pool);

    assert_matches!(
        repo.create(&booking(patient, 999, at(1, 9))).await,
        Err(RepositoryError::InvalidReference)
    );
}

#[sqlx::test(migrations = "../shared/database/migrations")]
async fn test_filter_combinations(pool: PgPool) {
    let anna = seed_patient(&pool, "Anna").await;
    let ivan = seed_patient(&pool, "Ivan").await;
    let sidorov = seed_doctor(&pool, "Sidorov").await;
    let petrova = seed_doctor(&pool, "Petrova").await;
    let repo = PgAppointmentRepository::new(pool);

    let late = repo.create(&booking(anna, sidorov, at(3, 9))).await.unwrap();
    let early = repo.create(&booking(anna, petrova, at(1, 9))).await.unwrap();
    let other = repo.create(&booking(ivan, sidorov, at(2, 9))).await.unwrap();

    let ids = |appointments: Vec<appointment_cell::Appointment>| {
        appointments.into_iter().map(|a| a.id).collect::<Vec<_>>()
    };

    let all = repo.find(AppointmentFilter::default()).await.unwrap();
    assert_eq!(ids(all), vec![early, other, late]);

    let by_doctor = repo
        .find(AppointmentFilter {
            doctor_id: Some(sidorov),
            patient_id: None,
        })
        .await
        .unwrap();
    assert_eq!(ids(by_doctor), vec![other, late]);

    let by_patient = repo
        .find(AppointmentFilter {
            doctor_id: None,
            patient_id: Some(anna),
        })
        .await
        .unwrap();
    assert_eq!(ids(by_patient), vec![early, late]);

    let by_both = repo
        .find(AppointmentFilter {
            doctor_id: Some(sidorov),
            patient_id: Some(anna),
        })
        .await
        .unwrap();
    assert_eq!(ids(by_both), vec![late]);
}

#[sqlx::test(migrations = "../shared/database/migrations")]
async fn test_reschedule_then_cancel(pool: PgPool) {
    let anna = seed_patient(&pool, "Anna").await;
    let sidorov = seed_doctor(&pool, "Sidorov").await;
    let repo = PgAppointmentRepository::new(pool);
    let id = repo.create(&booking(anna, sidorov, at(1, 9))).await.unwrap();

    let mut appointment = repo.find_by_id(id).await.unwrap();
    appointment.date_time = at(2, 11);
    repo.update(&appointment).await.unwrap();
    assert_eq!(repo.find_by_id(id).await.unwrap().date_time, at(2, 11));

    repo.delete(id).await.unwrap();
    assert_matches!(repo.find_by_id(id).await, Err(RepositoryError::NotFound));
    assert_matches!(repo.delete(id).await, Err(RepositoryError::NotFound));
}

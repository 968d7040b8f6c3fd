use assert_matches::assert_matches;
use sqlx::PgPool;

use doctor_cell::{insert_doctor, CreateDoctorRequest, DoctorRepository, PgDoctorRepository};
use shared_database::RepositoryError;

fn cardiologist() -> CreateDoctorRequest {
    CreateDoctorRequest {
        name: "Petr Sidorov".to_string(),
        phone_number: "+7 911 111 11 11".to_string(),
        email: "sidorov@clinic.org".to_string(),
        specialization: "Cardiology".to_string(),
    }
}

#[sqlx::test(migrations = "../shared/database/migrations")]
async fn test_create_then_find(pool: PgPool) {
    let repo = PgDoctorRepository::new(pool);

    let id = repo.create(&cardiologist()).await.unwrap();
    let doctor = repo.find_by_id(id).await.unwrap();

    assert_eq!(doctor.name, "Petr Sidorov");
    assert_eq!(doctor.specialization, "Cardiology");
}

#[sqlx::test(migrations = "../shared/database/migrations")]
async fn test_insert_inside_rolled_back_transaction_leaves_nothing(pool: PgPool) {
    let mut tx = pool.begin().await.unwrap();
    let id = insert_doctor(&mut *tx, &cardiologist()).await.unwrap();
    tx.rollback().await.unwrap();

    let repo = PgDoctorRepository::new(pool);
    assert_matches!(repo.find_by_id(id).await, Err(RepositoryError::NotFound));
    assert!(repo.find_all().await.unwrap().is_empty());
}

#[sqlx::test(migrations = "../shared/database/migrations")]
async fn test_update_and_missing_doctor(pool: PgPool) {
    let repo = PgDoctorRepository::new(pool);
    let id = repo.create(&cardiologist()).await.unwrap();

    let mut doctor = repo.find_by_id(id).await.unwrap();
    doctor.specialization = "Neurology".to_string();
    repo.update(&doctor).await.unwrap();
    assert_eq!(repo.find_by_id(id).await.unwrap().specialization, "Neurology");

    doctor.id = id + 100;
    assert_matches!(repo.update(&doctor).await, Err(RepositoryError::NotFound));
}

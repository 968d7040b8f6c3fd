use assert_matches::assert_matches;
use sqlx::PgPool;

use medical_history_cell::{
    MedicalHistory, MedicalHistoryRepository, MedicalHistoryRequest, PgMedicalHistoryRepository,
};
use shared_database::RepositoryError;

async fn seed_patient(pool: &PgPool) -> i64 {
    sqlx::query_scalar::<_, i64>("INSERT INTO patients (name) VALUES ('Anna') RETURNING id")
        .fetch_one(pool)
        .await
        .unwrap()
}

fn history(patient_id: i64) -> MedicalHistory {
    MedicalHistory::new(
        patient_id,
        MedicalHistoryRequest {
            allergies: Some("penicillin".to_string()),
            blood_type: Some("A+".to_string()),
            ..Default::default()
        },
    )
}

#[sqlx::test(migrations = "../shared/database/migrations")]
async fn test_unset_fields_read_back_as_empty(pool: PgPool) {
    let patient = seed_patient(&pool).await;
    let repo = PgMedicalHistoryRepository::new(pool.clone());

    let id = repo.create(&history(patient)).await.unwrap();
    let stored = repo.find_by_patient(patient).await.unwrap();

    assert_eq!(stored.id, id);
    assert_eq!(stored.allergies, "penicillin");
    assert_eq!(stored.chronic_diseases, "");
    assert_eq!(stored.vaccination, "");

    let raw: Option<String> =
        sqlx::query_scalar("SELECT chronic_diseases FROM medical_histories WHERE id = $1")
            .bind(id)
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(raw, None);
}

#[sqlx::test(migrations = "../shared/database/migrations")]
async fn test_second_history_is_already_exists(pool: PgPool) {
    let patient = seed_patient(&pool).await;
    let repo = PgMedicalHistoryRepository::new(pool);

    repo.create(&history(patient)).await.unwrap();

    assert_matches!(
        repo.create(&history(patient)).await,
        Err(RepositoryError::AlreadyExists)
    );
}

#[sqlx::test(migrations = "../shared/database/migrations")]
async fn test_unknown_patient_is_invalid_reference(pool: PgPool) {
    let repo = PgMedicalHistoryRepository::new(pool);

    assert_matches!(
        repo.create(&history(404)).await,
        Err(RepositoryError::InvalidReference)
    );
}

#[sqlx::test(migrations = "../shared/database/migrations")]
async fn test_update_and_missing_history(pool: PgPool) {
    let patient = seed_patient(&pool).await;
    let repo = PgMedicalHistoryRepository::new(pool);
    repo.create(&history(patient)).await.unwrap();

    let updated = repo
        .find_by_patient(patient)
        .await
        .unwrap()
        .apply_update(MedicalHistoryRequest {
            vaccination: Some("measles 2020".to_string()),
            allergies: Some(String::new()),
            ..Default::default()
        });
    repo.update(&updated).await.unwrap();

    let stored = repo.find_by_patient(patient).await.unwrap();
    assert_eq!(stored.vaccination, "measles 2020");
    assert_eq!(stored.allergies, "penicillin");

    assert_matches!(repo.find_by_patient(404).await, Err(RepositoryError::NotFound));
    assert_matches!(
        repo.update(&MedicalHistory::new(404, MedicalHistoryRequest::default())).await,
        Err(RepositoryError::NotFound)
    );
}

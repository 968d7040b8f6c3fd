use assert_matches::assert_matches;
use sqlx::PgPool;

use auth_cell::{NewUser, PgUserRepository, Profile, UserRepository};
use doctor_cell::CreateDoctorRequest;
use patient_cell::CreatePatientRequest;
use shared_database::RepositoryError;
use shared_models::auth::Role;

fn patient_user(login: &str) -> NewUser {
    NewUser {
        login: login.to_string(),
        password_hash: "$argon2id$stub".to_string(),
        profile: Profile::Patient(CreatePatientRequest {
            name: "Anna Petrova".to_string(),
            email: "anna@example.com".to_string(),
            ..Default::default()
        }),
    }
}

async fn count(pool: &PgPool, table: &str) -> i64 {
    sqlx::query_scalar::<_, i64>(&format!("SELECT COUNT(*) FROM {}", table))
        .fetch_one(pool)
        .await
        .unwrap()
}

#[sqlx::test(migrations = "../shared/database/migrations")]
async fn test_patient_registration_links_profile(pool: PgPool) {
    let repo = PgUserRepository::new(pool.clone());

    let id = repo.create(&patient_user("anna")).await.unwrap();
    let user = repo.find_by_login("anna").await.unwrap();

    assert_eq!(user.id, id);
    assert_eq!(user.role, Role::Patient);
    assert_eq!(user.doctor_id, None);

    let name: String = sqlx::query_scalar("SELECT name FROM patients WHERE id = $1")
        .bind(user.patient_id.unwrap())
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(name, "Anna Petrova");
}

#[sqlx::test(migrations = "../shared/database/migrations")]
async fn test_doctor_and_admin_registration(pool: PgPool) {
    let repo = PgUserRepository::new(pool);

    let doctor_id = repo
        .create(&NewUser {
            login: "dr.sidorov".to_string(),
            password_hash: "$argon2id$stub".to_string(),
            profile: Profile::Doctor(CreateDoctorRequest {
                name: "Petr Sidorov".to_string(),
                ..Default::default()
            }),
        })
        .await
        .unwrap();
    let admin_id = repo
        .create(&NewUser {
            login: "root".to_string(),
            password_hash: "$argon2id$stub".to_string(),
            profile: Profile::Admin,
        })
        .await
        .unwrap();

    let doctor = repo.find_by_id(doctor_id).await.unwrap();
    assert_eq!(doctor.role, Role::Doctor);
    assert!(doctor.doctor_id.is_some());
    assert_eq!(doctor.patient_id, None);

    let admin = repo.find_by_id(admin_id).await.unwrap();
    assert_eq!(admin.role, Role::Admin);
    assert_eq!((admin.patient_id, admin.doctor_id), (None, None));
}

#[sqlx::test(migrations = "../shared/database/migrations")]
async fn test_taken_login_rolls_back_profile(pool: PgPool) {
    let repo = PgUserRepository::new(pool.clone());
    repo.create(&patient_user("anna")).await.unwrap();

    assert_matches!(
        repo.create(&patient_user("anna")).await,
        Err(RepositoryError::AlreadyExists)
    );

    assert_eq!(count(&pool, "users").await, 1);
    assert_eq!(count(&pool, "patients").await, 1);
}

#[sqlx::test(migrations = "../shared/database/migrations")]
async fn test_role_must_match_linked_profile(pool: PgPool) {
    let err = sqlx::query(
        "INSERT INTO users (login, password, role, patient_id, doctor_id) \
         VALUES ('orphan', 'x', 'patient', NULL, NULL)",
    )
    .execute(&pool)
    .await
    .unwrap_err();

    assert_matches!(
        RepositoryError::from(err),
        RepositoryError::ConstraintViolation(_)
    );
}

#[sqlx::test(migrations = "../shared/database/migrations")]
async fn test_unknown_user_is_not_found(pool: PgPool) {
    let repo = PgUserRepository::new(pool);

    assert_matches!(repo.find_by_login("ghost").await, Err(RepositoryError::NotFound));
    assert_matches!(repo.find_by_id(42).await, Err(RepositoryError::NotFound));
}

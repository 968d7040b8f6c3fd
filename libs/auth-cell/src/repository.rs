use std::str::FromStr;

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

use doctor_cell::insert_doctor;
use patient_cell::insert_patient;
use shared_database::RepositoryError;
use shared_models::auth::Role;

use crate::models::{NewUser, Profile, User};

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Creates the account together with its patient or doctor profile.
    async fn create(&self, user: &NewUser) -> Result<i64, RepositoryError>;
    async fn find_by_login(&self, login: &str) -> Result<User, RepositoryError>;
    async fn find_by_id(&self, id: i64) -> Result<User, RepositoryError>;
}

#[derive(FromRow)]
struct UserRow {
    id: i64,
    login: String,
    password: String,
    role: String,
    patient_id: Option<i64>,
    doctor_id: Option<i64>,
}

impl TryFrom<UserRow> for User {
    type Error = RepositoryError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        let role = Role::from_str(&row.role)
            .map_err(|e| RepositoryError::Database(sqlx::Error::Decode(e.into())))?;

        Ok(User {
            id: row.id,
            login: row.login,
            password_hash: row.password,
            role,
            patient_id: row.patient_id,
            doctor_id: row.doctor_id,
        })
    }
}

pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn create(&self, user: &NewUser) -> Result<i64, RepositoryError> {
        let mut tx = self.pool.begin().await?;

        let (patient_id, doctor_id) = match &user.profile {
            Profile::Admin => (None, None),
            Profile::Patient(patient) => (Some(insert_patient(&mut *tx, patient).await?), None),
            Profile::Doctor(doctor) => (None, Some(insert_doctor(&mut *tx, doctor).await?)),
        };

        let id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO users (login, password, role, patient_id, doctor_id) \
             VALUES ($1, $2, $3, $4, $5) RETURNING id",
        )
        .bind(&user.login)
        .bind(&user.password_hash)
        .bind(user.profile.role().as_str())
        .bind(patient_id)
        .bind(doctor_id)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(id)
    }

    async fn find_by_login(&self, login: &str) -> Result<User, RepositoryError> {
        let row = sqlx::query_as::<_, UserRow>(
            "SELECT id, login, password, role, patient_id, doctor_id FROM users WHERE login = $1",
        )
        .bind(login)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(RepositoryError::NotFound)?;

        User::try_from(row)
    }

    async fn find_by_id(&self, id: i64) -> Result<User, RepositoryError> {
        let row = sqlx::query_as::<_, UserRow>(
            "SELECT id, login, password, role, patient_id, doctor_id FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(RepositoryError::NotFound)?;

        User::try_from(row)
    }
}

use sqlx::error::ErrorKind;
use thiserror::Error;

use shared_models::error::AppError;

#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("record was not found")]
    NotFound,

    #[error("record with this data already exists")]
    AlreadyExists,

    #[error("referenced record does not exist")]
    InvalidReference,

    #[error("record violates a constraint: {0}")]
    ConstraintViolation(String),

    #[error("database error: {0}")]
    Database(sqlx::Error),
}

impl From<sqlx::Error> for RepositoryError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => RepositoryError::NotFound,
            sqlx::Error::Database(db_err) => match db_err.kind() {
                ErrorKind::UniqueViolation => RepositoryError::AlreadyExists,
                ErrorKind::ForeignKeyViolation => RepositoryError::InvalidReference,
                ErrorKind::CheckViolation | ErrorKind::NotNullViolation => {
                    RepositoryError::ConstraintViolation(db_err.message().to_string())
                }
                _ => RepositoryError::Database(err),
            },
            _ => RepositoryError::Database(err),
        }
    }
}

impl From<RepositoryError> for AppError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => AppError::NotFound("Record not found".to_string()),
            RepositoryError::AlreadyExists => {
                AppError::Conflict("Record with this data already exists".to_string())
            }
            RepositoryError::InvalidReference => {
                AppError::BadRequest("Referenced record does not exist".to_string())
            }
            RepositoryError::ConstraintViolation(msg) => AppError::ValidationError(msg),
            RepositoryError::Database(e) => AppError::Database(e.to_string()),
        }
    }
}

use std::sync::Arc;

use tokio::task;
use tracing::{debug, error, info, warn};

use shared_config::AppConfig;
use shared_database::RepositoryError;
use shared_models::auth::Role;
use shared_models::error::AppError;
use shared_utils::jwt::create_session_token;
use shared_utils::validation::{require_non_empty, validate_optional_email};

use crate::models::{LoginRequest, LoginResponse, NewUser, RegisterRequest, User};
use crate::password::{hash_password, verify_password};
use crate::repository::UserRepository;

const INVALID_CREDENTIALS: &str = "Invalid login or password";

pub struct AuthService {
    repository: Arc<dyn UserRepository>,
    config: Arc<AppConfig>,
}

impl AuthService {
    pub fn new(repository: Arc<dyn UserRepository>, config: Arc<AppConfig>) -> Self {
        Self { repository, config }
    }

    /// Register an account and, for patients and doctors, the linked profile.
    pub async fn register(&self, request: RegisterRequest) -> Result<i64, AppError> {
        debug!("Registering user: {}", request.login);

        require_non_empty("login", &request.login)?;
        require_non_empty("password", &request.password)?;
        validate_optional_email(&request.email)?;

        let role = request.role.unwrap_or(Role::Patient);
        if role != Role::Admin {
            require_non_empty("name", &request.name)?;
        }

        let password = request.password.clone();
        let password_hash = task::spawn_blocking(move || hash_password(&password))
            .await
            .map_err(|e| {
                error!("Password hashing task failed: {}", e);
                AppError::Internal("Failed to hash password".to_string())
            })?
            .map_err(|e| {
                error!("Password hashing failed: {}", e);
                AppError::Internal("Failed to hash password".to_string())
            })?;

        let user = NewUser {
            login: request.login.trim().to_string(),
            password_hash,
            profile: request.profile(role),
        };

        let id = self.repository.create(&user).await.map_err(|e| match e {
            RepositoryError::AlreadyExists => {
                AppError::Conflict(format!("Login {} is already taken", user.login))
            }
            other => other.into(),
        })?;

        info!("User {} registered with role {}", id, role);
        Ok(id)
    }

    /// Check credentials and issue a session token.
    pub async fn login(&self, request: LoginRequest) -> Result<LoginResponse, AppError> {
        debug!("Login attempt: {}", request.login);

        let user = match self.repository.find_by_login(request.login.trim()).await {
            Ok(user) => user,
            Err(RepositoryError::NotFound) => {
                warn!("Login with unknown user: {}", request.login);
                return Err(AppError::Auth(INVALID_CREDENTIALS.to_string()));
            }
            Err(e) => return Err(e.into()),
        };

        // Argon2 is CPU-bound; keep it off the async workers.
        let password = request.password.clone();
        let stored_hash = user.password_hash.clone();
        let valid = task::spawn_blocking(move || verify_password(&password, &stored_hash))
            .await
            .map_err(|e| {
                error!("Password verification task failed: {}", e);
                AppError::Internal("Failed to verify password".to_string())
            })?
            .map_err(|e| {
                error!("Stored password hash for user {} is unreadable: {}", user.id, e);
                AppError::Internal("Failed to verify password".to_string())
            })?;
        if !valid {
            warn!("Wrong password for user: {}", user.id);
            return Err(AppError::Auth(INVALID_CREDENTIALS.to_string()));
        }

        if !self.config.is_configured() {
            return Err(AppError::Internal("JWT secret is not configured".to_string()));
        }

        let jwt_token = create_session_token(
            user.id,
            user.role,
            user.patient_id,
            user.doctor_id,
            &self.config.jwt_secret,
        )
        .map_err(AppError::Internal)?;

        Ok(LoginResponse { jwt_token, user })
    }

    pub async fn get_user(&self, user_id: i64) -> Result<User, AppError> {
        self.repository
            .find_by_id(user_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => {
                    AppError::NotFound(format!("User {} not found", user_id))
                }
                other => other.into(),
            })
    }
}

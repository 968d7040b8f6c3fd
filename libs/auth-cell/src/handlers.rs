use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use serde_json::{json, Value};

use shared_models::auth::{AuthUser, Role};
use shared_models::error::AppError;
use shared_utils::extractor::JsonBody;
use shared_utils::validation::parse_id;

use crate::models::{LoginRequest, LoginResponse, RegisterRequest};
use crate::service::AuthService;

#[axum::debug_handler]
pub async fn register(
    State(service): State<Arc<AuthService>>,
    JsonBody(request): JsonBody<RegisterRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let id = service.register(request).await?;

    Ok((StatusCode::CREATED, Json(json!({ "id": id }))))
}

#[axum::debug_handler]
pub async fn login(
    State(service): State<Arc<AuthService>>,
    JsonBody(request): JsonBody<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    Ok(Json(service.login(request).await?))
}

#[axum::debug_handler]
pub async fn get_user(
    State(service): State<Arc<AuthService>>,
    Extension(user): Extension<AuthUser>,
    Path(user_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    user.require_role(&[Role::Admin])?;

    let found = service.get_user(parse_id(&user_id)?).await?;

    Ok(Json(json!(found)))
}

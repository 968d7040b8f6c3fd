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

use crate::models::{CreateOfficeRequest, UpdateOfficeRequest};
use crate::services::OfficeService;

#[axum::debug_handler]
pub async fn create_office(
    State(service): State<Arc<OfficeService>>,
    Extension(user): Extension<AuthUser>,
    JsonBody(request): JsonBody<CreateOfficeRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    user.require_role(&[Role::Admin])?;

    let id = service.create_office(request).await?;

    Ok((StatusCode::CREATED, Json(json!({ "id": id }))))
}

#[axum::debug_handler]
pub async fn list_offices(
    State(service): State<Arc<OfficeService>>,
    Extension(_user): Extension<AuthUser>,
) -> Result<Json<Value>, AppError> {
    Ok(Json(json!(service.list_offices().await?)))
}

#[axum::debug_handler]
pub async fn get_office(
    State(service): State<Arc<OfficeService>>,
    Extension(_user): Extension<AuthUser>,
    Path(office_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let office = service.get_office(parse_id(&office_id)?).await?;

    Ok(Json(json!(office)))
}

#[axum::debug_handler]
pub async fn update_office(
    State(service): State<Arc<OfficeService>>,
    Extension(user): Extension<AuthUser>,
    Path(office_id): Path<String>,
    JsonBody(request): JsonBody<UpdateOfficeRequest>,
) -> Result<Json<Value>, AppError> {
    user.require_role(&[Role::Admin])?;
    let office_id = parse_id(&office_id)?;

    let id = service.update_office(office_id, request).await?;

    Ok(Json(json!({ "id": id })))
}

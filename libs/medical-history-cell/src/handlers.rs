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

use crate::models::MedicalHistoryRequest;
use crate::services::MedicalHistoryService;

#[axum::debug_handler]
pub async fn get_medical_history(
    State(service): State<Arc<MedicalHistoryService>>,
    Extension(user): Extension<AuthUser>,
    Path(patient_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    user.require_role(&[Role::Doctor, Role::Patient])?;

    let history = service.get_history(parse_id(&patient_id)?).await?;

    Ok(Json(json!(history)))
}

#[axum::debug_handler]
pub async fn create_medical_history(
    State(service): State<Arc<MedicalHistoryService>>,
    Extension(_user): Extension<AuthUser>,
    Path(patient_id): Path<String>,
    JsonBody(request): JsonBody<MedicalHistoryRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let patient_id = parse_id(&patient_id)?;

    let id = service.create_history(patient_id, request).await?;

    Ok((StatusCode::CREATED, Json(json!({ "id": id }))))
}

#[axum::debug_handler]
pub async fn update_medical_history(
    State(service): State<Arc<MedicalHistoryService>>,
    Extension(user): Extension<AuthUser>,
    Path(patient_id): Path<String>,
    JsonBody(request): JsonBody<MedicalHistoryRequest>,
) -> Result<Json<Value>, AppError> {
    user.require_role(&[Role::Doctor])?;
    let patient_id = parse_id(&patient_id)?;

    let id = service.update_history(patient_id, request).await?;

    Ok(Json(json!({ "id": id })))
}

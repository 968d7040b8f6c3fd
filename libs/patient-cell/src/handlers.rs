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

use crate::models::{CreatePatientRequest, UpdatePatientRequest};
use crate::services::PatientService;

#[axum::debug_handler]
pub async fn create_patient(
    State(service): State<Arc<PatientService>>,
    Extension(_user): Extension<AuthUser>,
    JsonBody(request): JsonBody<CreatePatientRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let id = service.create_patient(request).await?;

    Ok((StatusCode::CREATED, Json(json!({ "id": id }))))
}

#[axum::debug_handler]
pub async fn list_patients(
    State(service): State<Arc<PatientService>>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<Value>, AppError> {
    user.require_role(&[Role::Admin])?;

    let patients = service.list_patients().await?;

    Ok(Json(json!(patients)))
}

#[axum::debug_handler]
pub async fn get_patient(
    State(service): State<Arc<PatientService>>,
    Extension(user): Extension<AuthUser>,
    Path(patient_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    user.forbid_role(Role::Patient)?;
    let patient_id = parse_id(&patient_id)?;

    let patient = service.get_patient(patient_id).await?;

    Ok(Json(json!(patient)))
}

#[axum::debug_handler]
pub async fn update_patient(
    State(service): State<Arc<PatientService>>,
    Extension(user): Extension<AuthUser>,
    Path(patient_id): Path<String>,
    JsonBody(request): JsonBody<UpdatePatientRequest>,
) -> Result<Json<Value>, AppError> {
    user.forbid_role(Role::Doctor)?;
    let patient_id = parse_id(&patient_id)?;

    let id = service.update_patient(patient_id, request).await?;

    Ok(Json(json!({ "id": id })))
}

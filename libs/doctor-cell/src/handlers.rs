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

use crate::models::{CreateDoctorRequest, UpdateDoctorRequest};
use crate::services::DoctorService;

#[axum::debug_handler]
pub async fn create_doctor(
    State(service): State<Arc<DoctorService>>,
    Extension(user): Extension<AuthUser>,
    JsonBody(request): JsonBody<CreateDoctorRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    user.require_role(&[Role::Admin])?;

    let id = service.create_doctor(request).await?;

    Ok((StatusCode::CREATED, Json(json!({ "id": id }))))
}

#[axum::debug_handler]
pub async fn list_doctors(
    State(service): State<Arc<DoctorService>>,
    Extension(_user): Extension<AuthUser>,
) -> Result<Json<Value>, AppError> {
    let doctors = service.list_doctors().await?;

    Ok(Json(json!(doctors)))
}

#[axum::debug_handler]
pub async fn get_doctor(
    State(service): State<Arc<DoctorService>>,
    Extension(_user): Extension<AuthUser>,
    Path(doctor_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let doctor = service.get_doctor(parse_id(&doctor_id)?).await?;

    Ok(Json(json!(doctor)))
}

#[axum::debug_handler]
pub async fn update_doctor(
    State(service): State<Arc<DoctorService>>,
    Extension(user): Extension<AuthUser>,
    Path(doctor_id): Path<String>,
    JsonBody(request): JsonBody<UpdateDoctorRequest>,
) -> Result<Json<Value>, AppError> {
    user.forbid_role(Role::Patient)?;
    let doctor_id = parse_id(&doctor_id)?;

    let id = service.update_doctor(doctor_id, request).await?;

    Ok(Json(json!({ "id": id })))
}

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Extension, Json,
};
use serde_json::{json, Value};

use shared_models::auth::{AuthUser, Role};
use shared_models::error::AppError;
use shared_utils::extractor::JsonBody;
use shared_utils::validation::{parse_id, parse_optional_id};

use crate::models::{CreateWorkdayRequest, LocationQuery};
use crate::service::TimetableService;

#[axum::debug_handler]
pub async fn get_locations_by_doctor(
    State(service): State<Arc<TimetableService>>,
    Extension(_user): Extension<AuthUser>,
    Query(query): Query<LocationQuery>,
) -> Result<Json<Value>, AppError> {
    let doctor_id = parse_optional_id(query.doctor_id.as_deref())?
        .ok_or_else(|| AppError::BadRequest("doctor_id query parameter is required".to_string()))?;

    let offices = service.locations_by_doctor(doctor_id).await?;

    Ok(Json(json!(offices)))
}

#[axum::debug_handler]
pub async fn get_workdays_by_doctor(
    State(service): State<Arc<TimetableService>>,
    Extension(_user): Extension<AuthUser>,
    Path(doctor_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let workdays = service.workdays_by_doctor(parse_id(&doctor_id)?).await?;

    Ok(Json(json!(workdays)))
}

#[axum::debug_handler]
pub async fn get_doctors_by_office(
    State(service): State<Arc<TimetableService>>,
    Extension(_user): Extension<AuthUser>,
    Path(office_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let doctors = service.doctors_by_location(parse_id(&office_id)?).await?;

    Ok(Json(json!(doctors)))
}

#[axum::debug_handler]
pub async fn add_workday(
    State(service): State<Arc<TimetableService>>,
    Extension(user): Extension<AuthUser>,
    Path(doctor_id): Path<String>,
    JsonBody(request): JsonBody<CreateWorkdayRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    user.require_role(&[Role::Admin])?;
    let doctor_id = parse_id(&doctor_id)?;

    let id = service.add_workday(doctor_id, request).await?;

    Ok((StatusCode::CREATED, Json(json!({ "id": id }))))
}

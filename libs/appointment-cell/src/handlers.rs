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
use shared_utils::validation::parse_id;

use crate::models::{
    AppointmentFilter, AppointmentQuery, CreateAppointmentRequest, UpdateAppointmentRequest,
};
use crate::services::AppointmentBookingService;

#[axum::debug_handler]
pub async fn book_appointment(
    State(service): State<Arc<AppointmentBookingService>>,
    Extension(_user): Extension<AuthUser>,
    JsonBody(request): JsonBody<CreateAppointmentRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let id = service.book_appointment(request).await?;

    Ok((StatusCode::CREATED, Json(json!({ "id": id }))))
}

#[axum::debug_handler]
pub async fn search_appointments(
    State(service): State<Arc<AppointmentBookingService>>,
    Extension(_user): Extension<AuthUser>,
    Query(query): Query<AppointmentQuery>,
) -> Result<Json<Value>, AppError> {
    let filter = AppointmentFilter::try_from(query)?;
    let appointments = service.list_appointments(filter).await?;

    Ok(Json(json!(appointments)))
}

#[axum::debug_handler]
pub async fn get_appointment(
    State(service): State<Arc<AppointmentBookingService>>,
    Extension(_user): Extension<AuthUser>,
    Path(appointment_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let appointment = service.get_appointment(parse_id(&appointment_id)?).await?;

    Ok(Json(json!(appointment)))
}

#[axum::debug_handler]
pub async fn update_appointment(
    State(service): State<Arc<AppointmentBookingService>>,
    Extension(user): Extension<AuthUser>,
    Path(appointment_id): Path<String>,
    JsonBody(request): JsonBody<UpdateAppointmentRequest>,
) -> Result<Json<Value>, AppError> {
    user.forbid_role(Role::Doctor)?;
    let appointment_id = parse_id(&appointment_id)?;

    let id = service.reschedule_appointment(appointment_id, request).await?;

    Ok(Json(json!({ "id": id })))
}

#[axum::debug_handler]
pub async fn cancel_appointment(
    State(service): State<Arc<AppointmentBookingService>>,
    Extension(_user): Extension<AuthUser>,
    Path(appointment_id): Path<String>,
) -> Result<StatusCode, AppError> {
    service.cancel_appointment(parse_id(&appointment_id)?).await?;

    Ok(StatusCode::NO_CONTENT)
}

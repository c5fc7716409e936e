//! Driver Handlers
//!
//! HTTP handlers for driver CRUD operations.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use validator::Validate;

use crate::domain::models::driver::{DriverData, DriverId};
use crate::infrastructure::driving_adapters::api_rest::dto::driver::{
    DriverDto, DriverResponseDto, MessageResponseDto,
};
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::{ApiError, UseCaseError};

/// Create the router for driver endpoints
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_all_drivers).post(create_driver))
        .route(
            "/{id}",
            get(get_driver_by_id).put(update_driver).delete(delete_driver),
        )
}

/// A path id that is not a UUID cannot name a stored driver.
fn parse_driver_id(raw: &str) -> Result<DriverId, ApiError> {
    DriverId::try_from(raw).map_err(|_| {
        tracing::debug!(driver_id = raw, "Malformed driver id");
        ApiError::from(UseCaseError::driver_not_found(raw))
    })
}

fn validated_body(payload: Result<Json<DriverDto>, JsonRejection>) -> Result<DriverData, ApiError> {
    let Json(dto) = payload.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
    dto.validate()?;
    Ok(dto.into())
}

/// GET /api/drivers - List every driver
///
/// # Responses
///
/// * 200 OK - Array of drivers
/// * 500 Internal Server Error - Store failure
#[axum::debug_handler]
async fn get_all_drivers(
    State(state): State<AppState>,
) -> Result<Json<Vec<DriverResponseDto>>, ApiError> {
    let drivers = state.get_all_drivers_use_case.execute().await?;

    let response: Vec<DriverResponseDto> = drivers.into_iter().map(DriverResponseDto::from).collect();
    Ok(Json(response))
}

/// GET /api/drivers/{id} - Get a driver by ID
///
/// # Responses
///
/// * 200 OK - Driver found
/// * 404 Not Found - Driver does not exist
/// * 500 Internal Server Error - Store failure
#[axum::debug_handler]
async fn get_driver_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DriverResponseDto>, ApiError> {
    let driver_id = parse_driver_id(&id)?;

    let driver = state.get_driver_by_id_use_case.execute(&driver_id).await?;

    Ok(Json(DriverResponseDto::from(driver)))
}

/// POST /api/drivers - Register a new driver
///
/// # Responses
///
/// * 201 Created - Driver created
/// * 400 Bad Request - Malformed body or missing field
/// * 500 Internal Server Error - Store failure
#[axum::debug_handler]
async fn create_driver(
    State(state): State<AppState>,
    payload: Result<Json<DriverDto>, JsonRejection>,
) -> Result<(StatusCode, Json<DriverResponseDto>), ApiError> {
    let data = validated_body(payload)?;

    let driver = state.create_driver_use_case.execute(data).await?;

    Ok((StatusCode::CREATED, Json(DriverResponseDto::from(driver))))
}

/// PUT /api/drivers/{id} - Replace all fields of a driver
///
/// # Responses
///
/// * 200 OK - Driver updated
/// * 400 Bad Request - Malformed body or missing field
/// * 404 Not Found - Driver does not exist
/// * 500 Internal Server Error - Store failure
#[axum::debug_handler]
async fn update_driver(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<DriverDto>, JsonRejection>,
) -> Result<Json<DriverResponseDto>, ApiError> {
    let data = validated_body(payload)?;
    let driver_id = parse_driver_id(&id)?;

    let driver = state.update_driver_use_case.execute(&driver_id, data).await?;

    Ok(Json(DriverResponseDto::from(driver)))
}

/// DELETE /api/drivers/{id} - Delete a driver
///
/// # Responses
///
/// * 200 OK - `{"message": "Driver deleted successfully"}`
/// * 404 Not Found - Driver does not exist
/// * 500 Internal Server Error - Store failure
#[axum::debug_handler]
async fn delete_driver(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponseDto>, ApiError> {
    let driver_id = parse_driver_id(&id)?;

    state.delete_driver_use_case.execute(&driver_id).await?;

    Ok(Json(MessageResponseDto::new("Driver deleted successfully")))
}

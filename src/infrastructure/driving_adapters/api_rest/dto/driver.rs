//! Driver DTOs
//!
//! Data transfer objects for driver API endpoints.

use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

use crate::domain::models::driver::{Driver, DriverData};

/// Rejects empty values; whitespace counts as present
fn validate_present(value: &str) -> Result<(), validator::ValidationError> {
    if value.is_empty() {
        let mut error = validator::ValidationError::new("required");
        error.message = Some("is required".into());
        return Err(error);
    }
    Ok(())
}

/// Reads `null` as an empty string
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Request body for creating (POST) or replacing (PUT) a driver
///
/// Missing and `null` fields deserialize to empty strings so that
/// validation, not the JSON extractor, reports them.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct DriverDto {
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(custom(function = "validate_present"))]
    pub name: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(custom(function = "validate_present"))]
    pub id_number: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(custom(function = "validate_present"))]
    pub email: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(custom(function = "validate_present"))]
    pub phone_number: String,
}

impl From<DriverDto> for DriverData {
    fn from(dto: DriverDto) -> Self {
        Self {
            name: dto.name,
            id_number: dto.id_number,
            email: dto.email,
            phone_number: dto.phone_number,
        }
    }
}

/// Driver response DTO
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverResponseDto {
    pub id: String,
    pub name: String,
    pub id_number: String,
    pub email: String,
    pub phone_number: String,
}

impl From<Driver> for DriverResponseDto {
    fn from(driver: Driver) -> Self {
        let id = driver.id().to_string();
        let data = driver.into_data();
        Self {
            id,
            name: data.name,
            id_number: data.id_number,
            email: data.email,
            phone_number: data.phone_number,
        }
    }
}

/// Plain confirmation message
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponseDto {
    pub message: String,
}

impl MessageResponseDto {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

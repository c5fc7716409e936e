//! Driver Domain Model
//!
//! Represents a driver record in the registry.

use uuid::Uuid;

/// Newtype wrapper for Driver ID providing type safety
///
/// Identifiers are generated by the store when a driver is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DriverId(Uuid);

impl DriverId {
    /// Create a DriverId from an existing UUID
    #[must_use]
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Get the underlying UUID
    #[must_use]
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl std::fmt::Display for DriverId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<&str> for DriverId {
    type Error = uuid::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Ok(Self(Uuid::parse_str(value)?))
    }
}

/// The business fields of a driver, used for both creation and full replacement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverData {
    pub name: String,
    pub id_number: String,
    pub email: String,
    pub phone_number: String,
}

/// Driver domain entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Driver {
    id: DriverId,
    name: String,
    id_number: String,
    email: String,
    phone_number: String,
}

impl Driver {
    /// Build a Driver from its store-assigned id and business fields
    #[must_use]
    pub fn new(id: DriverId, data: DriverData) -> Self {
        Self {
            id,
            name: data.name,
            id_number: data.id_number,
            email: data.email,
            phone_number: data.phone_number,
        }
    }

    /// Split off the business fields, dropping the id
    #[must_use]
    pub fn into_data(self) -> DriverData {
        DriverData {
            name: self.name,
            id_number: self.id_number,
            email: self.email,
            phone_number: self.phone_number,
        }
    }

    // Getters

    #[must_use]
    pub fn id(&self) -> &DriverId {
        &self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn id_number(&self) -> &str {
        &self.id_number
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }
}

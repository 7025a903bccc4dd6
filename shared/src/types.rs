//! Common types used across the platform

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type UserId = Uuid;
pub type FarmerId = Uuid;
pub type FarmId = Uuid;
pub type HerbId = Uuid;
pub type PlantId = Uuid;
pub type PackageId = Uuid;

/// GPS coordinates
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GpsCoordinates {
    pub latitude: Decimal,
    pub longitude: Decimal,
}

impl GpsCoordinates {
    pub fn new(latitude: Decimal, longitude: Decimal) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Contact details of a farm owner
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OwnerContact {
    pub name: String,
    pub phone_number: String,
    pub email: String,
}

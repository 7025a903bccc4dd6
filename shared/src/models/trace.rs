//! Supply-chain trace events

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::QualityGrade;
use crate::types::{FarmId, GpsCoordinates, HerbId, PackageId, PlantId};

/// A recorded step in a herb's journey from farm to shelf
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraceEvent {
    pub id: Uuid,
    pub herb_id: HerbId,
    pub herb: String,
    pub event: String,
    pub timestamp: DateTime<Utc>,
    pub location: GpsCoordinates,
    pub farm_id: FarmId,
    pub batch_number: String,
    pub quantity: Decimal,
    pub unit: String,
    pub quality_grade: QualityGrade,
    pub verified_by: String,
    #[serde(default)]
    pub certifications: Vec<String>,
    pub temperature: Option<Decimal>,
    pub humidity: Option<Decimal>,
    pub moisture_level: Option<Decimal>,
    pub notes: Option<String>,
    pub reference_code: Option<String>,
    pub plant_id: Option<PlantId>,
    pub package_id: Option<PackageId>,
    /// Plants covered by a package-level event
    #[serde(default)]
    pub related_plant_ids: Vec<PlantId>,
}

impl TraceEvent {
    pub fn concerns_plant(&self, plant_id: PlantId) -> bool {
        self.plant_id == Some(plant_id) || self.related_plant_ids.contains(&plant_id)
    }
}

/// Count of records in a given status, grouped by category
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusCount {
    pub category: String,
    pub status: String,
    pub count: u64,
}

//! Lab result models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::PlantId;

/// Types of lab tests run on harvested plants
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum LabTestType {
    #[serde(rename = "Quality Control")]
    QualityControl,
    Contamination,
    Potency,
    #[serde(rename = "Heavy Metals")]
    HeavyMetals,
}

/// A lab result for a single plant
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabResult {
    pub id: Uuid,
    pub plant_id: PlantId,
    pub test_date: NaiveDate,
    pub test_type: LabTestType,
    /// Raw measurements as reported by the lab
    #[serde(default)]
    pub results: serde_json::Map<String, serde_json::Value>,
    pub passed: bool,
    pub certified_by: String,
}

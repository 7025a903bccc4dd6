//! Individual plant tracking models

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::LabResult;
use crate::types::{FarmId, GpsCoordinates, HerbId, PlantId};

/// Plant lifecycle status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PlantStatus {
    Seedling,
    Growing,
    Mature,
    Harvested,
    #[serde(rename = "Lab Testing")]
    LabTesting,
    Packaged,
}

impl PlantStatus {
    pub const ALL: [PlantStatus; 6] = [
        PlantStatus::Seedling,
        PlantStatus::Growing,
        PlantStatus::Mature,
        PlantStatus::Harvested,
        PlantStatus::LabTesting,
        PlantStatus::Packaged,
    ];

    /// The following lifecycle stage, if any
    pub fn next(&self) -> Option<PlantStatus> {
        match self {
            PlantStatus::Seedling => Some(PlantStatus::Growing),
            PlantStatus::Growing => Some(PlantStatus::Mature),
            PlantStatus::Mature => Some(PlantStatus::Harvested),
            PlantStatus::Harvested => Some(PlantStatus::LabTesting),
            PlantStatus::LabTesting => Some(PlantStatus::Packaged),
            PlantStatus::Packaged => None,
        }
    }
}

impl std::fmt::Display for PlantStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlantStatus::Seedling => write!(f, "Seedling"),
            PlantStatus::Growing => write!(f, "Growing"),
            PlantStatus::Mature => write!(f, "Mature"),
            PlantStatus::Harvested => write!(f, "Harvested"),
            PlantStatus::LabTesting => write!(f, "Lab Testing"),
            PlantStatus::Packaged => write!(f, "Packaged"),
        }
    }
}

/// Observed growth stage
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GrowthStage {
    Seeding,
    Germination,
    Vegetative,
    Flowering,
    Harvesting,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EnvironmentalConditions {
    /// Degrees Celsius
    pub temperature: Decimal,
    /// Relative humidity in percent
    pub humidity: Decimal,
    pub soil_ph: Decimal,
}

/// A growth stage observation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlantGrowthStage {
    pub id: Uuid,
    pub plant_id: PlantId,
    pub stage: GrowthStage,
    pub date: NaiveDate,
    #[serde(default)]
    pub photos: Vec<String>,
    pub notes: Option<String>,
    pub environmental_conditions: Option<EnvironmentalConditions>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum FacilityType {
    Farm,
    Lab,
    Processing,
    Warehouse,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlantLocation {
    pub coordinates: GpsCoordinates,
    pub facility_type: FacilityType,
}

/// An individually tracked plant, identified by its QR code
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Plant {
    pub id: PlantId,
    pub qr_code: String,
    /// Mother plant, when propagated from a cutting
    pub parent_plant_id: Option<PlantId>,
    pub seed_source: Option<String>,
    pub planting_date: NaiveDate,
    pub farm_id: FarmId,
    pub herb_id: HerbId,
    pub status: PlantStatus,
    pub current_location: PlantLocation,
    #[serde(default)]
    pub growth_stages: Vec<PlantGrowthStage>,
    #[serde(default)]
    pub lab_results: Vec<LabResult>,
}

impl Plant {
    /// Most recent growth observation by date
    pub fn latest_stage(&self) -> Option<&PlantGrowthStage> {
        self.growth_stages.iter().max_by_key(|stage| (stage.date, stage.stage))
    }

    /// True when the plant has lab results and every one of them passed
    pub fn has_passed_lab_testing(&self) -> bool {
        !self.lab_results.is_empty() && self.lab_results.iter().all(|result| result.passed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LabTestType;

    fn plant() -> Plant {
        let id = Uuid::new_v4();
        Plant {
            id,
            qr_code: "HTR-PLANT-0001".to_string(),
            parent_plant_id: None,
            seed_source: Some("Chiang Mai seed bank".to_string()),
            planting_date: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
            farm_id: Uuid::new_v4(),
            herb_id: Uuid::new_v4(),
            status: PlantStatus::Growing,
            current_location: PlantLocation {
                coordinates: GpsCoordinates::new(Decimal::new(1879, 2), Decimal::new(9898, 2)),
                facility_type: FacilityType::Farm,
            },
            growth_stages: vec![],
            lab_results: vec![],
        }
    }

    fn stage(plant_id: PlantId, stage: GrowthStage, day: u32) -> PlantGrowthStage {
        PlantGrowthStage {
            id: Uuid::new_v4(),
            plant_id,
            stage,
            date: NaiveDate::from_ymd_opt(2024, 2, day).unwrap(),
            photos: vec![],
            notes: None,
            environmental_conditions: None,
        }
    }

    fn lab_result(plant_id: PlantId, passed: bool) -> LabResult {
        LabResult {
            id: Uuid::new_v4(),
            plant_id,
            test_date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            test_type: LabTestType::HeavyMetals,
            results: serde_json::Map::new(),
            passed,
            certified_by: "Central Lab Thailand".to_string(),
        }
    }

    #[test]
    fn test_lifecycle_order() {
        let mut status = PlantStatus::Seedling;
        let mut seen = vec![status];
        while let Some(next) = status.next() {
            assert!(next > status);
            seen.push(next);
            status = next;
        }
        assert_eq!(seen, PlantStatus::ALL.to_vec());
    }

    #[test]
    fn test_latest_stage() {
        let mut p = plant();
        assert!(p.latest_stage().is_none());
        p.growth_stages = vec![
            stage(p.id, GrowthStage::Vegetative, 20),
            stage(p.id, GrowthStage::Germination, 5),
        ];
        assert_eq!(p.latest_stage().map(|s| s.stage), Some(GrowthStage::Vegetative));
    }

    #[test]
    fn test_lab_testing_requires_results() {
        let mut p = plant();
        assert!(!p.has_passed_lab_testing());
        p.lab_results = vec![lab_result(p.id, true), lab_result(p.id, true)];
        assert!(p.has_passed_lab_testing());
        p.lab_results.push(lab_result(p.id, false));
        assert!(!p.has_passed_lab_testing());
    }
}

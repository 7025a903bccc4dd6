//! Package-level tracking models

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{PackageId, PlantId};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PackageType {
    #[serde(rename = "Dried Herbs")]
    DriedHerbs,
    Extract,
    Powder,
    Capsules,
}

/// Quality grade assigned at packaging
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum QualityGrade {
    A,
    B,
    C,
    Premium,
}

impl std::fmt::Display for QualityGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QualityGrade::A => write!(f, "A"),
            QualityGrade::B => write!(f, "B"),
            QualityGrade::C => write!(f, "C"),
            QualityGrade::Premium => write!(f, "Premium"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DestinationInfo {
    pub retailer: Option<String>,
    pub distributor_id: Option<String>,
    pub export_country: Option<String>,
}

/// A package aggregating several tracked plants
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Package {
    pub id: PackageId,
    pub qr_code: String,
    pub package_type: PackageType,
    pub plant_ids: Vec<PlantId>,
    /// Total weight in grams
    pub total_weight: Decimal,
    pub package_date: NaiveDate,
    pub expiry_date: NaiveDate,
    pub batch_number: String,
    pub quality_grade: QualityGrade,
    pub packaged_by: String,
    pub destination_info: Option<DestinationInfo>,
}

impl Package {
    pub fn contains_plant(&self, plant_id: PlantId) -> bool {
        self.plant_ids.contains(&plant_id)
    }

    pub fn is_expired(&self, on: NaiveDate) -> bool {
        self.expiry_date < on
    }

    pub fn validate(&self) -> Result<(), &'static str> {
        if self.plant_ids.is_empty() {
            return Err("Package must contain at least one plant");
        }
        if self.total_weight <= Decimal::ZERO {
            return Err("Package weight must be positive");
        }
        if self.expiry_date <= self.package_date {
            return Err("Expiry date must be after package date");
        }
        Ok(())
    }
}

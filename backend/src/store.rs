//! In-memory record store
//!
//! Records are read once from a JSON seed file at startup and served
//! read-only afterwards.

use std::path::Path;

use serde::Deserialize;
use shared::{
    Farm, FarmerRecord, FarmerSource, GacpApplication, Herb, InspectionProcessData,
    OptionalCertificationApplication, Package, Plant, TraceEvent, Transaction,
};
use uuid::Uuid;

use crate::error::{AppError, AppResult};

/// Shape of the seed file
#[derive(Debug, Default, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub farms: Vec<Farm>,
    #[serde(default)]
    pub herbs: Vec<Herb>,
    #[serde(default)]
    pub plants: Vec<Plant>,
    #[serde(default)]
    pub packages: Vec<Package>,
    #[serde(default)]
    pub gacp_applications: Vec<GacpApplication>,
    #[serde(default)]
    pub optional_applications: Vec<OptionalCertificationApplication>,
    #[serde(default)]
    pub inspections: Vec<InspectionProcessData>,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    #[serde(default)]
    pub trace_events: Vec<TraceEvent>,
}

/// Read-only store of dashboard records
#[derive(Debug, Default)]
pub struct DataStore {
    farms: Vec<Farm>,
    farmers: Vec<FarmerRecord>,
    herbs: Vec<Herb>,
    plants: Vec<Plant>,
    packages: Vec<Package>,
    gacp_applications: Vec<GacpApplication>,
    optional_applications: Vec<OptionalCertificationApplication>,
    inspections: Vec<InspectionProcessData>,
    transactions: Vec<Transaction>,
    trace_events: Vec<TraceEvent>,
}

impl DataStore {
    /// Load and validate the seed file at `path`
    pub async fn load(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let raw = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| AppError::SeedData(format!("cannot read {}: {}", path.display(), e)))?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> AppResult<Self> {
        let seed: SeedData =
            serde_json::from_str(raw).map_err(|e| AppError::SeedData(e.to_string()))?;
        Self::from_seed(seed)
    }

    pub fn from_seed(seed: SeedData) -> AppResult<Self> {
        for farm in &seed.farms {
            farm.validate()
                .map_err(|msg| seed_invalid("farms", farm.id, msg))?;
        }
        for package in &seed.packages {
            package
                .validate()
                .map_err(|msg| seed_invalid("packages", package.id, msg))?;
        }
        for application in &seed.optional_applications {
            application.validate()?;
        }

        let farmers = seed.farms.as_slice().farmers();

        Ok(Self {
            farms: seed.farms,
            farmers,
            herbs: seed.herbs,
            plants: seed.plants,
            packages: seed.packages,
            gacp_applications: seed.gacp_applications,
            optional_applications: seed.optional_applications,
            inspections: seed.inspections,
            transactions: seed.transactions,
            trace_events: seed.trace_events,
        })
    }

    pub fn farms(&self) -> &[Farm] {
        &self.farms
    }

    /// Farmer rows in seed order
    pub fn farmer_rows(&self) -> &[FarmerRecord] {
        &self.farmers
    }

    pub fn farm(&self, id: Uuid) -> Option<&Farm> {
        self.farms.iter().find(|farm| farm.id == id)
    }

    pub fn herb(&self, id: Uuid) -> Option<&Herb> {
        self.herbs.iter().find(|herb| herb.id == id)
    }

    pub fn plants(&self) -> &[Plant] {
        &self.plants
    }

    pub fn plant(&self, id: Uuid) -> Option<&Plant> {
        self.plants.iter().find(|plant| plant.id == id)
    }

    pub fn packages(&self) -> &[Package] {
        &self.packages
    }

    pub fn package(&self, id: Uuid) -> Option<&Package> {
        self.packages.iter().find(|package| package.id == id)
    }

    pub fn gacp_applications(&self) -> &[GacpApplication] {
        &self.gacp_applications
    }

    pub fn optional_applications(&self) -> &[OptionalCertificationApplication] {
        &self.optional_applications
    }

    pub fn inspections(&self) -> &[InspectionProcessData] {
        &self.inspections
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn trace_events(&self) -> &[TraceEvent] {
        &self.trace_events
    }
}

impl FarmerSource for DataStore {
    fn farmers(&self) -> Vec<FarmerRecord> {
        self.farmers.clone()
    }
}

fn seed_invalid(collection: &str, id: Uuid, message: &str) -> AppError {
    AppError::Validation {
        field: format!("{}[{}]", collection, id),
        message: message.to_string(),
        message_th: format!("ข้อมูลตั้งต้นไม่ถูกต้อง: {}", message),
    }
}

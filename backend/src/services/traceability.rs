//! Seed-to-sale traceability service
//!
//! Assembles plant and package histories from the record store.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use serde::Serialize;
use shared::{
    Badge, Herb, Package, Plant, PlantGrowthStage, PlantStatus, StatusBadge, TraceEvent,
};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::store::DataStore;

/// Traceability service over the shared record store
#[derive(Clone)]
pub struct TraceabilityService {
    store: Arc<DataStore>,
}

/// Full history of one plant
#[derive(Debug, Clone, Serialize)]
pub struct PlantTrace {
    pub plant: Plant,
    pub herb: Option<Herb>,
    pub badge: Badge,
    pub next_status: Option<PlantStatus>,
    pub latest_stage: Option<PlantGrowthStage>,
    pub lab_passed: bool,
    /// Packages the plant ended up in
    pub packages: Vec<Package>,
    /// Events touching the plant, oldest first
    pub events: Vec<TraceEvent>,
}

/// A package with the plants it was made from
#[derive(Debug, Clone, Serialize)]
pub struct PackageTrace {
    pub package: Package,
    pub expired: bool,
    pub plants: Vec<Plant>,
    /// Plant ids listed on the package but absent from the records
    pub missing_plant_ids: Vec<Uuid>,
    pub events: Vec<TraceEvent>,
}

impl TraceabilityService {
    pub fn new(store: Arc<DataStore>) -> Self {
        Self { store }
    }

    pub fn plant_trace(&self, plant_id: Uuid) -> AppResult<PlantTrace> {
        let plant = self
            .store
            .plant(plant_id)
            .ok_or_else(|| AppError::NotFound("Plant".to_string()))?;

        let packages = self
            .store
            .packages()
            .iter()
            .filter(|package| package.contains_plant(plant_id))
            .cloned()
            .collect();

        let mut events: Vec<TraceEvent> = self
            .store
            .trace_events()
            .iter()
            .filter(|event| event.concerns_plant(plant_id))
            .cloned()
            .collect();
        events.sort_by_key(|event| event.timestamp);

        tracing::debug!(%plant_id, events = events.len(), "assembled plant trace");

        Ok(PlantTrace {
            herb: self.store.herb(plant.herb_id).cloned(),
            badge: plant.status.badge(),
            next_status: plant.status.next(),
            latest_stage: plant.latest_stage().cloned(),
            lab_passed: plant.has_passed_lab_testing(),
            plant: plant.clone(),
            packages,
            events,
        })
    }

    /// Package view evaluated for expiry on today's date
    pub fn package_trace(&self, package_id: Uuid) -> AppResult<PackageTrace> {
        self.package_trace_on(package_id, Utc::now().date_naive())
    }

    pub fn package_trace_on(&self, package_id: Uuid, today: NaiveDate) -> AppResult<PackageTrace> {
        let package = self
            .store
            .package(package_id)
            .ok_or_else(|| AppError::NotFound("Package".to_string()))?;

        let mut plants = Vec::with_capacity(package.plant_ids.len());
        let mut missing_plant_ids = Vec::new();
        for plant_id in &package.plant_ids {
            match self.store.plant(*plant_id) {
                Some(plant) => plants.push(plant.clone()),
                None => missing_plant_ids.push(*plant_id),
            }
        }
        if !missing_plant_ids.is_empty() {
            tracing::warn!(%package_id, missing = missing_plant_ids.len(), "package lists unknown plants");
        }

        let mut events: Vec<TraceEvent> = self
            .store
            .trace_events()
            .iter()
            .filter(|event| event.package_id == Some(package_id))
            .cloned()
            .collect();
        events.sort_by_key(|event| event.timestamp);

        Ok(PackageTrace {
            expired: package.is_expired(today),
            package: package.clone(),
            plants,
            missing_plant_ids,
            events,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEED: &str = include_str!("../../../data/seed.json");

    fn service() -> (TraceabilityService, Arc<DataStore>) {
        let store = Arc::new(DataStore::from_json(SEED).unwrap());
        (TraceabilityService::new(store.clone()), store)
    }

    #[test]
    fn test_plant_trace_events_are_chronological() {
        let (service, store) = service();
        for plant in store.plants() {
            let trace = service.plant_trace(plant.id).unwrap();
            assert!(trace
                .events
                .windows(2)
                .all(|pair| pair[0].timestamp <= pair[1].timestamp));
            assert!(trace.packages.iter().all(|p| p.contains_plant(plant.id)));
        }
    }

    #[test]
    fn test_package_trace_resolves_plants() {
        let (service, store) = service();
        let package = &store.packages()[0];
        let trace = service
            .package_trace_on(package.id, package.package_date)
            .unwrap();
        assert!(!trace.expired);
        assert_eq!(
            trace.plants.len() + trace.missing_plant_ids.len(),
            package.plant_ids.len()
        );

        let later = service
            .package_trace_on(package.id, package.expiry_date.succ_opt().unwrap())
            .unwrap();
        assert!(later.expired);
    }

    #[test]
    fn test_unknown_plant() {
        let (service, _) = service();
        assert!(matches!(
            service.plant_trace(Uuid::nil()),
            Err(AppError::NotFound(_))
        ));
    }
}

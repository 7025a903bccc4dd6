//! HTTP handlers for plant and package traceability

use axum::{
    extract::{Path, State},
    Json,
};

use crate::{
    error::AppResult,
    services::traceability::{PackageTrace, PlantTrace, TraceabilityService},
    AppState,
};

use super::parse_id;

/// Trace a plant from planting through packaging
pub async fn get_plant_trace(
    State(state): State<AppState>,
    Path(plant_id): Path<String>,
) -> AppResult<Json<PlantTrace>> {
    let plant_id = parse_id("plant_id", &plant_id)?;
    let service = TraceabilityService::new(state.store);
    Ok(Json(service.plant_trace(plant_id)?))
}

/// Trace a package back to its plants
pub async fn get_package_trace(
    State(state): State<AppState>,
    Path(package_id): Path<String>,
) -> AppResult<Json<PackageTrace>> {
    let package_id = parse_id("package_id", &package_id)?;
    let service = TraceabilityService::new(state.store);
    Ok(Json(service.package_trace(package_id)?))
}

//! HTTP handlers for the certification dashboard

use axum::{
    extract::{Path, Query, State},
    http::header,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use shared::{Farm, FarmerQuery, StatusCount, StatusFilter};

use crate::error::AppResult;
use crate::middleware::Viewer;
use crate::services::certification::{CertificationService, CertificationView};
use crate::AppState;

use super::{parse_id, parse_param};

/// Query parameters for the certified farmers table
#[derive(Debug, Deserialize)]
pub struct FarmersQuery {
    pub search: Option<String>,
    /// One of All, Passed, Failed, Pending, Other
    pub status: Option<String>,
}

impl FarmersQuery {
    fn into_query(self) -> AppResult<FarmerQuery> {
        let status: StatusFilter =
            parse_param("status", self.status.as_deref())?.unwrap_or_default();
        Ok(FarmerQuery::new(self.search.unwrap_or_default(), status))
    }
}

/// Certified farmers table, filtered and shaped for the viewer
pub async fn list_certified_farmers(
    State(state): State<AppState>,
    viewer: Viewer,
    Query(query): Query<FarmersQuery>,
) -> AppResult<Json<CertificationView>> {
    let query = query.into_query()?;
    let service = CertificationService::new(state.store);
    Ok(Json(service.farmer_view(&query, &viewer.policy())))
}

/// Filtered farmers table as a CSV download
pub async fn export_certified_farmers(
    State(state): State<AppState>,
    Query(query): Query<FarmersQuery>,
) -> AppResult<impl IntoResponse> {
    let query = query.into_query()?;
    let service = CertificationService::new(state.store);
    let body = service.export_csv(&query)?;
    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"certified-farmers.csv\"",
            ),
        ],
        body,
    ))
}

/// Status counts per certification kind and inspection process
pub async fn certification_summary(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<StatusCount>>> {
    let service = CertificationService::new(state.store);
    Ok(Json(service.status_summary()))
}

/// Get a farm by ID
pub async fn get_farm(
    State(state): State<AppState>,
    Path(farm_id): Path<String>,
) -> AppResult<Json<Farm>> {
    let farm_id = parse_id("farm_id", &farm_id)?;
    let service = CertificationService::new(state.store);
    Ok(Json(service.get_farm(farm_id)?))
}

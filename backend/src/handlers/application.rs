//! HTTP handlers for certification applications

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use shared::{CertificationKind, GacpApplicationStatus};

use crate::error::AppResult;
use crate::services::application::{
    ApplicationService, GacpApplicationView, OptionalApplicationView,
};
use crate::AppState;

use super::{parse_id, parse_param};

#[derive(Debug, Deserialize)]
pub struct GacpApplicationsQuery {
    pub status: Option<String>,
}

/// List GACP applications
pub async fn list_gacp_applications(
    State(state): State<AppState>,
    Query(query): Query<GacpApplicationsQuery>,
) -> AppResult<Json<Vec<GacpApplicationView>>> {
    let status: Option<GacpApplicationStatus> = parse_param("status", query.status.as_deref())?;
    let service = ApplicationService::new(state.store);
    Ok(Json(service.list_gacp(status)))
}

/// Get a GACP application by ID
pub async fn get_gacp_application(
    State(state): State<AppState>,
    Path(application_id): Path<String>,
) -> AppResult<Json<GacpApplicationView>> {
    let application_id = parse_id("application_id", &application_id)?;
    let service = ApplicationService::new(state.store);
    Ok(Json(service.get_gacp(application_id)?))
}

#[derive(Debug, Deserialize)]
pub struct OptionalApplicationsQuery {
    /// EU-GMP, DTTM or TIS
    pub kind: Option<String>,
}

/// List optional certification applications
pub async fn list_optional_applications(
    State(state): State<AppState>,
    Query(query): Query<OptionalApplicationsQuery>,
) -> AppResult<Json<Vec<OptionalApplicationView>>> {
    let kind: Option<CertificationKind> = parse_param("kind", query.kind.as_deref())?;
    let service = ApplicationService::new(state.store);
    Ok(Json(service.list_optional(kind)?))
}

//! HTTP handler for page permission checks

use axum::{extract::Query, Json};
use serde::{Deserialize, Serialize};
use shared::{AccessPolicy, Page, PagePermission, Role};

use crate::error::{AppError, AppResult};
use crate::middleware::Viewer;

use super::parse_param;

#[derive(Debug, Deserialize)]
pub struct AccessQuery {
    pub page: Option<String>,
    pub permission: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AccessResponse {
    pub page: Page,
    pub permission: PagePermission,
    pub role: Role,
    pub allowed: bool,
}

/// Whether the current viewer holds a permission on a page
pub async fn check_access(
    viewer: Viewer,
    Query(query): Query<AccessQuery>,
) -> AppResult<Json<AccessResponse>> {
    let page: Page = parse_param("page", query.page.as_deref())?
        .ok_or_else(|| AppError::invalid_parameter("page", ""))?;
    let permission: PagePermission = parse_param("permission", query.permission.as_deref())?
        .unwrap_or(PagePermission::View);

    Ok(Json(AccessResponse {
        page,
        permission,
        role: viewer.role,
        allowed: viewer.policy().allows(page, permission),
    }))
}

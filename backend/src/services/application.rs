//! Certification application service
//!
//! Read-only views over GACP and optional certification applications,
//! annotated with the workflow steps each one may take next.

use std::sync::Arc;

use serde::Serialize;
use shared::{
    Badge, CertificationKind, GacpApplication, GacpApplicationStatus,
    OptionalCertificationApplication, StatusBadge,
};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::store::DataStore;

/// Application service over the shared record store
#[derive(Clone)]
pub struct ApplicationService {
    store: Arc<DataStore>,
}

/// GACP application with its workflow position
#[derive(Debug, Clone, Serialize)]
pub struct GacpApplicationView {
    #[serde(flatten)]
    pub application: GacpApplication,
    pub badge: Badge,
    pub is_terminal: bool,
    /// Every status the workflow allows next
    pub next_statuses: Vec<GacpApplicationStatus>,
    /// The subset whose stage payload is already recorded
    pub available_transitions: Vec<GacpApplicationStatus>,
}

impl From<&GacpApplication> for GacpApplicationView {
    fn from(application: &GacpApplication) -> Self {
        Self {
            badge: application.status.badge(),
            is_terminal: application.status.is_terminal(),
            next_statuses: application.status.next_statuses().to_vec(),
            available_transitions: application.available_transitions(),
            application: application.clone(),
        }
    }
}

/// Optional certification application with its badge
#[derive(Debug, Clone, Serialize)]
pub struct OptionalApplicationView {
    #[serde(flatten)]
    pub application: OptionalCertificationApplication,
    pub badge: Badge,
    pub ministry_synced: bool,
}

impl ApplicationService {
    pub fn new(store: Arc<DataStore>) -> Self {
        Self { store }
    }

    /// List GACP applications, optionally restricted to one status
    pub fn list_gacp(&self, status: Option<GacpApplicationStatus>) -> Vec<GacpApplicationView> {
        self.store
            .gacp_applications()
            .iter()
            .filter(|application| status.map_or(true, |s| application.status == s))
            .map(GacpApplicationView::from)
            .collect()
    }

    pub fn get_gacp(&self, application_id: Uuid) -> AppResult<GacpApplicationView> {
        self.store
            .gacp_applications()
            .iter()
            .find(|application| application.id == application_id)
            .map(GacpApplicationView::from)
            .ok_or_else(|| AppError::NotFound("GACP application".to_string()))
    }

    /// List optional certification applications, optionally for one kind
    pub fn list_optional(
        &self,
        kind: Option<CertificationKind>,
    ) -> AppResult<Vec<OptionalApplicationView>> {
        if let Some(kind) = kind {
            if !kind.is_optional() {
                return Err(AppError::Validation {
                    field: "kind".to_string(),
                    message: format!("{} is not an optional certification", kind),
                    message_th: format!("{} ไม่ใช่การรับรองเพิ่มเติม", kind.display_name_th()),
                });
            }
        }

        Ok(self
            .store
            .optional_applications()
            .iter()
            .filter(|application| kind.map_or(true, |k| application.certification_type == k))
            .map(|application| OptionalApplicationView {
                badge: application.status.badge(),
                ministry_synced: application.is_ministry_synced(),
                application: application.clone(),
            })
            .collect())
    }
}

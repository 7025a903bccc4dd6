//! Certification dashboard service
//!
//! Builds the certified farmers table: filtering, badges, and the
//! affordances the viewer's role unlocks.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::Serialize;
use shared::{
    badge_for_optional, filter_farmers, row_action, AccessPolicy, Badge, CertificationKind,
    Farm, FarmerQuery, FarmerRecord, Page, PagePermission, RowAction, StatusBadge, StatusCount,
    StatusFilter, NOT_EVALUATED,
};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::store::DataStore;

/// Certification service over the shared record store
#[derive(Clone)]
pub struct CertificationService {
    store: Arc<DataStore>,
}

/// One row of the certified farmers table
#[derive(Debug, Clone, Serialize)]
pub struct CertificationRow {
    pub id: Uuid,
    pub name: String,
    pub farm_name: String,
    pub herb: String,
    pub gacp: Badge,
    pub eu_gmp: Badge,
    pub dttm: Badge,
    pub tis: Badge,
    /// Present only when the viewer may edit certifications
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<RowAction>,
}

impl CertificationRow {
    fn from_record(record: &FarmerRecord, show_actions: bool) -> Self {
        Self {
            id: record.id,
            name: record.name.clone(),
            farm_name: record.farm_name.clone(),
            herb: record.herb.clone(),
            gacp: record.gacp.badge(),
            eu_gmp: badge_for_optional(record.eu_gmp.as_ref()),
            dttm: badge_for_optional(record.dttm.as_ref()),
            tis: badge_for_optional(record.tis.as_ref()),
            action: show_actions.then(|| row_action(record)),
        }
    }
}

/// View model for the certification page
#[derive(Debug, Clone, Serialize)]
pub struct CertificationView {
    pub search: String,
    pub status: StatusFilter,
    pub show_review_button: bool,
    pub show_actions: bool,
    pub show_export: bool,
    pub total: usize,
    pub matched: usize,
    pub rows: Vec<CertificationRow>,
}

impl CertificationService {
    pub fn new(store: Arc<DataStore>) -> Self {
        Self { store }
    }

    /// Filter the farmers table and shape it for the given viewer
    pub fn farmer_view(&self, query: &FarmerQuery, policy: &dyn AccessPolicy) -> CertificationView {
        let show_review_button = policy.allows(Page::Certification, PagePermission::Approve);
        let show_actions = policy.allows(Page::Certification, PagePermission::Edit);
        let show_export = policy.allows(Page::Certification, PagePermission::Export);

        let farmers = self.store.farmer_rows();
        let rows: Vec<CertificationRow> = filter_farmers(farmers, query)
            .into_iter()
            .map(|record| CertificationRow::from_record(record, show_actions))
            .collect();

        tracing::debug!(
            search = %query.search,
            status = %query.status,
            matched = rows.len(),
            "filtered certified farmers"
        );

        CertificationView {
            search: query.search.clone(),
            status: query.status,
            show_review_button,
            show_actions,
            show_export,
            total: farmers.len(),
            matched: rows.len(),
            rows,
        }
    }

    /// Filtered farmer rows as CSV, one column per certification
    ///
    /// Unevaluated certifications are left empty.
    pub fn export_csv(&self, query: &FarmerQuery) -> AppResult<String> {
        let mut wtr = csv::Writer::from_writer(vec![]);
        for record in filter_farmers(self.store.farmer_rows(), query) {
            wtr.serialize(record)
                .map_err(|e| AppError::Internal(format!("CSV serialization error: {}", e)))?;
        }
        let bytes = wtr
            .into_inner()
            .map_err(|e| AppError::Internal(format!("CSV writer error: {}", e)))?;
        String::from_utf8(bytes)
            .map_err(|e| AppError::Internal(format!("UTF-8 conversion error: {}", e)))
    }

    /// Status counts per certification kind, then per inspection process
    ///
    /// Optional certifications that were never evaluated are counted under
    /// the "Not Evaluated" label.
    pub fn status_summary(&self) -> Vec<StatusCount> {
        let mut counts: BTreeMap<(usize, String, &'static str), u64> = BTreeMap::new();

        for record in self.store.farmer_rows() {
            for (position, (kind, status)) in record.statuses().enumerate() {
                let label = status.map(|s| s.label()).unwrap_or(NOT_EVALUATED.label);
                *counts
                    .entry((position, kind.display_name().to_string(), label))
                    .or_default() += 1;
            }
        }

        let offset = CertificationKind::ALL.len();
        for inspection in self.store.inspections() {
            let process = inspection.process_type.to_string();
            *counts
                .entry((offset, process, inspection.status.label()))
                .or_default() += 1;
        }

        counts
            .into_iter()
            .map(|((_, category, status), count)| StatusCount {
                category,
                status: status.to_string(),
                count,
            })
            .collect()
    }

    /// Detailed farm record
    pub fn get_farm(&self, farm_id: Uuid) -> AppResult<Farm> {
        self.store
            .farm(farm_id)
            .cloned()
            .ok_or_else(|| AppError::NotFound("Farm".to_string()))
    }
}

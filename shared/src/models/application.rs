//! Certification application workflows
//!
//! GACP is the primary certification and follows a multi-stage review:
//! document review, AI-assisted pre-approval with a video call, an on-site
//! inspection and finally certificate issuance. Optional certifications
//! (EU-GMP, DTTM, TIS) follow a shorter apply/approve cycle.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::models::{CertificateSource, CertificationKind};
use crate::types::{FarmerId, GpsCoordinates, UserId};

/// Errors raised when moving an application through its workflow
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WorkflowError {
    #[error("cannot move application from {from} to {to}")]
    InvalidTransition { from: String, to: String },

    #[error("{status} requires {payload}")]
    MissingPayload {
        status: String,
        payload: &'static str,
    },

    #[error("{0} is not an optional certification")]
    NotOptional(CertificationKind),
}

/// GACP application status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum GacpApplicationStatus {
    Draft,
    Submitted,
    #[serde(rename = "Under Review")]
    UnderReview,
    #[serde(rename = "Pre-Approved")]
    PreApproved,
    Rejected,
    #[serde(rename = "Site Inspection Scheduled")]
    SiteInspectionScheduled,
    #[serde(rename = "Site Inspection Complete")]
    SiteInspectionComplete,
    Approved,
    #[serde(rename = "Certificate Issued")]
    CertificateIssued,
}

impl GacpApplicationStatus {
    pub const ALL: [GacpApplicationStatus; 9] = [
        GacpApplicationStatus::Draft,
        GacpApplicationStatus::Submitted,
        GacpApplicationStatus::UnderReview,
        GacpApplicationStatus::PreApproved,
        GacpApplicationStatus::Rejected,
        GacpApplicationStatus::SiteInspectionScheduled,
        GacpApplicationStatus::SiteInspectionComplete,
        GacpApplicationStatus::Approved,
        GacpApplicationStatus::CertificateIssued,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GacpApplicationStatus::Draft => "Draft",
            GacpApplicationStatus::Submitted => "Submitted",
            GacpApplicationStatus::UnderReview => "Under Review",
            GacpApplicationStatus::PreApproved => "Pre-Approved",
            GacpApplicationStatus::Rejected => "Rejected",
            GacpApplicationStatus::SiteInspectionScheduled => "Site Inspection Scheduled",
            GacpApplicationStatus::SiteInspectionComplete => "Site Inspection Complete",
            GacpApplicationStatus::Approved => "Approved",
            GacpApplicationStatus::CertificateIssued => "Certificate Issued",
        }
    }

    /// Statuses reachable in one step
    pub fn next_statuses(&self) -> &'static [GacpApplicationStatus] {
        use GacpApplicationStatus::*;
        match self {
            Draft => &[Submitted],
            Submitted => &[UnderReview],
            UnderReview => &[PreApproved, Rejected],
            PreApproved => &[SiteInspectionScheduled],
            SiteInspectionScheduled => &[SiteInspectionComplete],
            SiteInspectionComplete => &[Approved, Rejected],
            Approved => &[CertificateIssued],
            // Rejected applications go back to the farmer for resubmission
            Rejected => &[Draft],
            CertificateIssued => &[],
        }
    }

    pub fn can_transition_to(&self, next: GacpApplicationStatus) -> bool {
        self.next_statuses().contains(&next)
    }

    pub fn is_terminal(&self) -> bool {
        self.next_statuses().is_empty()
    }
}

impl std::fmt::Display for GacpApplicationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for GacpApplicationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GacpApplicationStatus::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown GACP application status: {}", s))
    }
}

/// Optional certification status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum OptionalCertificationStatus {
    #[serde(rename = "Not Applied")]
    NotApplied,
    Applied,
    Approved,
    Rejected,
    Expired,
}

impl OptionalCertificationStatus {
    pub const ALL: [OptionalCertificationStatus; 5] = [
        OptionalCertificationStatus::NotApplied,
        OptionalCertificationStatus::Applied,
        OptionalCertificationStatus::Approved,
        OptionalCertificationStatus::Rejected,
        OptionalCertificationStatus::Expired,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OptionalCertificationStatus::NotApplied => "Not Applied",
            OptionalCertificationStatus::Applied => "Applied",
            OptionalCertificationStatus::Approved => "Approved",
            OptionalCertificationStatus::Rejected => "Rejected",
            OptionalCertificationStatus::Expired => "Expired",
        }
    }

    pub fn next_statuses(&self) -> &'static [OptionalCertificationStatus] {
        use OptionalCertificationStatus::*;
        match self {
            NotApplied => &[Applied],
            Applied => &[Approved, Rejected],
            Approved => &[Expired],
            Rejected | Expired => &[Applied],
        }
    }

    pub fn can_transition_to(&self, next: OptionalCertificationStatus) -> bool {
        self.next_statuses().contains(&next)
    }
}

impl std::fmt::Display for OptionalCertificationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Farm details submitted with a GACP application
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationFarmData {
    pub name: String,
    pub location: GpsCoordinates,
    pub province: String,
    /// Area in rai
    pub cultivation_area: Decimal,
    pub crops: Vec<String>,
    pub farm_images: Vec<String>,
}

/// Lab result files attached to an application
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LabResultFiles {
    pub files: Vec<String>,
    pub upload_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum VideoCallStatus {
    Scheduled,
    Completed,
    Failed,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PreApprovalResult {
    Approved,
    Rejected,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum InspectionResult {
    Passed,
    Failed,
}

/// Pre-approval stage payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreApprovalData {
    pub ai_analysis_result: String,
    pub video_call_date: Option<DateTime<Utc>>,
    pub video_call_status: Option<VideoCallStatus>,
    pub pre_approval_result: Option<PreApprovalResult>,
    pub rejection_reason: Option<String>,
}

/// Site inspection stage payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteInspection {
    pub scheduled_date: Option<DateTime<Utc>>,
    pub inspectors: Vec<String>,
    pub inspection_result: Option<InspectionResult>,
    pub notes: Option<String>,
}

/// Certificate stage payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CertificateData {
    pub certificate_number: Option<String>,
    pub issue_date: Option<NaiveDate>,
    pub expiry_date: Option<NaiveDate>,
    pub certificate_file: Option<String>,
}

/// A GACP certification application
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GacpApplication {
    pub id: Uuid,
    pub farmer_id: FarmerId,
    pub user_id: UserId,
    pub status: GacpApplicationStatus,
    pub submitted_date: Option<DateTime<Utc>>,
    pub farm_data: ApplicationFarmData,
    #[serde(default)]
    pub lab_results: LabResultFiles,
    pub pre_approval: Option<PreApprovalData>,
    pub site_inspection: Option<SiteInspection>,
    pub certificate: Option<CertificateData>,
}

impl GacpApplication {
    /// Check that the payload needed to enter `status` is present
    pub fn check_stage_payload(&self, status: GacpApplicationStatus) -> Result<(), WorkflowError> {
        let missing = |payload| WorkflowError::MissingPayload {
            status: status.to_string(),
            payload,
        };

        match status {
            GacpApplicationStatus::PreApproved => {
                let approved = self
                    .pre_approval
                    .as_ref()
                    .and_then(|p| p.pre_approval_result)
                    == Some(PreApprovalResult::Approved);
                if !approved {
                    return Err(missing("an approved pre-approval result"));
                }
            }
            GacpApplicationStatus::SiteInspectionScheduled => {
                if self
                    .site_inspection
                    .as_ref()
                    .and_then(|s| s.scheduled_date)
                    .is_none()
                {
                    return Err(missing("a scheduled inspection date"));
                }
            }
            GacpApplicationStatus::SiteInspectionComplete => {
                if self
                    .site_inspection
                    .as_ref()
                    .and_then(|s| s.inspection_result)
                    .is_none()
                {
                    return Err(missing("a site inspection result"));
                }
            }
            GacpApplicationStatus::Approved => {
                let passed = self
                    .site_inspection
                    .as_ref()
                    .and_then(|s| s.inspection_result)
                    == Some(InspectionResult::Passed);
                if !passed {
                    return Err(missing("a passed site inspection"));
                }
            }
            GacpApplicationStatus::CertificateIssued => {
                if self
                    .certificate
                    .as_ref()
                    .and_then(|c| c.certificate_number.as_deref())
                    .is_none()
                {
                    return Err(missing("a certificate number"));
                }
            }
            _ => {}
        }

        Ok(())
    }

    /// Move the application to `next`, enforcing transitions and stage payloads
    pub fn advance_to(&mut self, next: GacpApplicationStatus) -> Result<(), WorkflowError> {
        if !self.status.can_transition_to(next) {
            return Err(WorkflowError::InvalidTransition {
                from: self.status.to_string(),
                to: next.to_string(),
            });
        }
        self.check_stage_payload(next)?;
        self.status = next;
        Ok(())
    }

    /// Next statuses whose stage payload is already in place
    pub fn available_transitions(&self) -> Vec<GacpApplicationStatus> {
        self.status
            .next_statuses()
            .iter()
            .copied()
            .filter(|next| self.check_stage_payload(*next).is_ok())
            .collect()
    }
}

/// Result of the last ministry API sync
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SyncStatus {
    Success,
    Failed,
    Pending,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiSyncData {
    pub last_sync_date: DateTime<Utc>,
    pub ministry_api_endpoint: String,
    pub sync_status: SyncStatus,
}

/// An application for one of the optional certifications
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionalCertificationApplication {
    pub id: Uuid,
    pub farmer_id: FarmerId,
    pub certification_type: CertificationKind,
    pub status: OptionalCertificationStatus,
    pub submitted_date: Option<DateTime<Utc>>,
    pub source: CertificateSource,
    pub certificate_number: Option<String>,
    pub issue_date: Option<NaiveDate>,
    pub expiry_date: Option<NaiveDate>,
    pub document_file: Option<String>,
    pub api_sync_data: Option<ApiSyncData>,
}

impl OptionalCertificationApplication {
    pub fn validate(&self) -> Result<(), WorkflowError> {
        if !self.certification_type.is_optional() {
            return Err(WorkflowError::NotOptional(self.certification_type));
        }
        Ok(())
    }

    pub fn advance_to(&mut self, next: OptionalCertificationStatus) -> Result<(), WorkflowError> {
        if !self.status.can_transition_to(next) {
            return Err(WorkflowError::InvalidTransition {
                from: self.status.to_string(),
                to: next.to_string(),
            });
        }
        self.status = next;
        Ok(())
    }

    /// Whether the status was synchronized from a ministry system
    pub fn is_ministry_synced(&self) -> bool {
        self.source == CertificateSource::MinistryApi
            && self
                .api_sync_data
                .as_ref()
                .is_some_and(|sync| sync.sync_status == SyncStatus::Success)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn application(status: GacpApplicationStatus) -> GacpApplication {
        GacpApplication {
            id: Uuid::new_v4(),
            farmer_id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            status,
            submitted_date: None,
            farm_data: ApplicationFarmData {
                name: "Mae Rim Cannabis Farm".to_string(),
                location: GpsCoordinates::new(Decimal::new(1893, 2), Decimal::new(9893, 2)),
                province: "Chiang Mai".to_string(),
                cultivation_area: Decimal::from(5),
                crops: vec!["Cannabis".to_string()],
                farm_images: vec![],
            },
            lab_results: LabResultFiles::default(),
            pre_approval: None,
            site_inspection: None,
            certificate: None,
        }
    }

    #[test]
    fn test_happy_path_to_certificate() {
        let mut app = application(GacpApplicationStatus::Draft);
        app.advance_to(GacpApplicationStatus::Submitted).unwrap();
        app.advance_to(GacpApplicationStatus::UnderReview).unwrap();

        app.pre_approval = Some(PreApprovalData {
            ai_analysis_result: "documents complete".to_string(),
            video_call_date: None,
            video_call_status: Some(VideoCallStatus::Completed),
            pre_approval_result: Some(PreApprovalResult::Approved),
            rejection_reason: None,
        });
        app.advance_to(GacpApplicationStatus::PreApproved).unwrap();

        app.site_inspection = Some(SiteInspection {
            scheduled_date: Some(Utc::now()),
            inspectors: vec!["Inspector Malee".to_string()],
            inspection_result: None,
            notes: None,
        });
        app.advance_to(GacpApplicationStatus::SiteInspectionScheduled).unwrap();

        if let Some(inspection) = app.site_inspection.as_mut() {
            inspection.inspection_result = Some(InspectionResult::Passed);
        }
        app.advance_to(GacpApplicationStatus::SiteInspectionComplete).unwrap();
        app.advance_to(GacpApplicationStatus::Approved).unwrap();

        app.certificate = Some(CertificateData {
            certificate_number: Some("GACP-2024-00042".to_string()),
            issue_date: None,
            expiry_date: None,
            certificate_file: None,
        });
        app.advance_to(GacpApplicationStatus::CertificateIssued).unwrap();
        assert!(app.status.is_terminal());
    }

    #[test]
    fn test_skipping_stages_is_rejected() {
        let mut app = application(GacpApplicationStatus::Draft);
        let err = app.advance_to(GacpApplicationStatus::Approved).unwrap_err();
        assert!(matches!(err, WorkflowError::InvalidTransition { .. }));
        assert_eq!(app.status, GacpApplicationStatus::Draft);
    }

    #[test]
    fn test_pre_approval_requires_payload() {
        let mut app = application(GacpApplicationStatus::UnderReview);
        let err = app.advance_to(GacpApplicationStatus::PreApproved).unwrap_err();
        assert!(matches!(err, WorkflowError::MissingPayload { .. }));

        // Rejection needs no payload
        assert_eq!(
            app.available_transitions(),
            vec![GacpApplicationStatus::Rejected]
        );
        app.advance_to(GacpApplicationStatus::Rejected).unwrap();
        app.advance_to(GacpApplicationStatus::Draft).unwrap();
    }

    #[test]
    fn test_failed_inspection_cannot_be_approved() {
        let mut app = application(GacpApplicationStatus::SiteInspectionComplete);
        app.site_inspection = Some(SiteInspection {
            scheduled_date: None,
            inspectors: vec![],
            inspection_result: Some(InspectionResult::Failed),
            notes: Some("pesticide storage non-compliant".to_string()),
        });
        assert!(app.advance_to(GacpApplicationStatus::Approved).is_err());
        assert!(app.advance_to(GacpApplicationStatus::Rejected).is_ok());
    }

    #[test]
    fn test_status_parsing_and_labels() {
        for status in GacpApplicationStatus::ALL {
            assert_eq!(status.as_str().parse::<GacpApplicationStatus>(), Ok(status));
        }
        let json = serde_json::to_string(&GacpApplicationStatus::SiteInspectionScheduled).unwrap();
        assert_eq!(json, "\"Site Inspection Scheduled\"");
    }

    #[test]
    fn test_optional_workflow() {
        let mut app = OptionalCertificationApplication {
            id: Uuid::new_v4(),
            farmer_id: Uuid::new_v4(),
            certification_type: CertificationKind::Dttm,
            status: OptionalCertificationStatus::NotApplied,
            submitted_date: None,
            source: CertificateSource::MinistryApi,
            certificate_number: None,
            issue_date: None,
            expiry_date: None,
            document_file: None,
            api_sync_data: Some(ApiSyncData {
                last_sync_date: Utc::now(),
                ministry_api_endpoint: "https://api.dttm.go.th/v1/certificates".to_string(),
                sync_status: SyncStatus::Success,
            }),
        };

        assert!(app.validate().is_ok());
        assert!(app.is_ministry_synced());
        assert!(app.advance_to(OptionalCertificationStatus::Approved).is_err());
        app.advance_to(OptionalCertificationStatus::Applied).unwrap();
        app.advance_to(OptionalCertificationStatus::Approved).unwrap();
        app.advance_to(OptionalCertificationStatus::Expired).unwrap();
        app.advance_to(OptionalCertificationStatus::Applied).unwrap();

        app.certification_type = CertificationKind::Gacp;
        assert_eq!(app.validate(), Err(WorkflowError::NotOptional(CertificationKind::Gacp)));
    }
}

//! Inspection process models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::{FarmerId, HerbId};

/// Status of an inspection process
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ProcessStatus {
    Pending,
    #[serde(rename = "In Progress")]
    InProgress,
    Passed,
    Failed,
    Expired,
}

impl ProcessStatus {
    pub const ALL: [ProcessStatus; 5] = [
        ProcessStatus::Pending,
        ProcessStatus::InProgress,
        ProcessStatus::Passed,
        ProcessStatus::Failed,
        ProcessStatus::Expired,
    ];
}

impl std::fmt::Display for ProcessStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProcessStatus::Pending => write!(f, "Pending"),
            ProcessStatus::InProgress => write!(f, "In Progress"),
            ProcessStatus::Passed => write!(f, "Passed"),
            ProcessStatus::Failed => write!(f, "Failed"),
            ProcessStatus::Expired => write!(f, "Expired"),
        }
    }
}

/// Inspection processes run by the platform
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum InspectionProcess {
    #[serde(rename = "GACP Certification")]
    GacpCertification,
    #[serde(rename = "EU-GMP Certification")]
    EuGmpCertification,
    #[serde(rename = "DTTM Certification")]
    DttmCertification,
    #[serde(rename = "TIS Certification")]
    TisCertification,
    #[serde(rename = "Quality Control")]
    QualityControl,
}

impl InspectionProcess {
    /// GACP is the primary certification; every other process is optional
    pub fn is_primary(&self) -> bool {
        matches!(self, InspectionProcess::GacpCertification)
    }
}

impl std::fmt::Display for InspectionProcess {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InspectionProcess::GacpCertification => write!(f, "GACP Certification"),
            InspectionProcess::EuGmpCertification => write!(f, "EU-GMP Certification"),
            InspectionProcess::DttmCertification => write!(f, "DTTM Certification"),
            InspectionProcess::TisCertification => write!(f, "TIS Certification"),
            InspectionProcess::QualityControl => write!(f, "Quality Control"),
        }
    }
}

/// An inspection carried out for a farmer's herb
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InspectionProcessData {
    pub id: Uuid,
    pub farmer_id: FarmerId,
    pub herb_id: HerbId,
    pub herb_name: String,
    pub process_type: InspectionProcess,
    pub status: ProcessStatus,
    pub start_date: NaiveDate,
    pub completion_date: Option<NaiveDate>,
    pub inspector_name: Option<String>,
    pub farmer_name: Option<String>,
}

impl InspectionProcessData {
    pub fn is_primary(&self) -> bool {
        self.process_type.is_primary()
    }
}

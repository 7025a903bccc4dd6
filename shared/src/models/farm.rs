//! Farm and farmer certification models

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{OptionalCertificationStatus, ProcessStatus};
use crate::types::{FarmId, GpsCoordinates, OwnerContact, UserId};
use crate::validation::{
    validate_coordinates, validate_cultivation_area, validate_email, validate_gacp_certificate,
    validate_thai_phone,
};

/// Summary certification status shown in the certified farmers table
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum CertificationStatus {
    Passed,
    Failed,
    Pending,
    Other,
}

impl CertificationStatus {
    pub const ALL: [CertificationStatus; 4] = [
        CertificationStatus::Passed,
        CertificationStatus::Failed,
        CertificationStatus::Pending,
        CertificationStatus::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CertificationStatus::Passed => "Passed",
            CertificationStatus::Failed => "Failed",
            CertificationStatus::Pending => "Pending",
            CertificationStatus::Other => "Other",
        }
    }
}

impl std::fmt::Display for CertificationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for CertificationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CertificationStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| format!("unknown certification status: {}", s))
    }
}

impl From<ProcessStatus> for CertificationStatus {
    fn from(status: ProcessStatus) -> Self {
        match status {
            ProcessStatus::Passed => CertificationStatus::Passed,
            ProcessStatus::Failed => CertificationStatus::Failed,
            ProcessStatus::Pending | ProcessStatus::InProgress => CertificationStatus::Pending,
            ProcessStatus::Expired => CertificationStatus::Other,
        }
    }
}

impl OptionalCertificationStatus {
    /// Summary status, or `None` when the farmer never applied
    pub fn summary(&self) -> Option<CertificationStatus> {
        match self {
            OptionalCertificationStatus::NotApplied => None,
            OptionalCertificationStatus::Applied => Some(CertificationStatus::Pending),
            OptionalCertificationStatus::Approved => Some(CertificationStatus::Passed),
            OptionalCertificationStatus::Rejected => Some(CertificationStatus::Failed),
            OptionalCertificationStatus::Expired => Some(CertificationStatus::Other),
        }
    }
}

/// Certification schemes tracked per farm
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum CertificationKind {
    #[serde(rename = "GACP")]
    Gacp,
    #[serde(rename = "EU-GMP")]
    EuGmp,
    #[serde(rename = "DTTM")]
    Dttm,
    #[serde(rename = "TIS")]
    Tis,
}

impl CertificationKind {
    /// Column order of the certified farmers table
    pub const ALL: [CertificationKind; 4] = [
        CertificationKind::Gacp,
        CertificationKind::EuGmp,
        CertificationKind::Dttm,
        CertificationKind::Tis,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            CertificationKind::Gacp => "GACP",
            CertificationKind::EuGmp => "EU-GMP",
            CertificationKind::Dttm => "DTTM",
            CertificationKind::Tis => "TIS",
        }
    }

    pub fn display_name_th(&self) -> &'static str {
        match self {
            CertificationKind::Gacp => "มาตรฐาน GACP",
            CertificationKind::EuGmp => "มาตรฐาน EU-GMP",
            CertificationKind::Dttm => "กรมการแพทย์แผนไทยฯ",
            CertificationKind::Tis => "มาตรฐานผลิตภัณฑ์อุตสาหกรรม",
        }
    }

    pub fn is_optional(&self) -> bool {
        !matches!(self, CertificationKind::Gacp)
    }
}

impl std::fmt::Display for CertificationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

impl std::str::FromStr for CertificationKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GACP" => Ok(CertificationKind::Gacp),
            "EU-GMP" | "EU_GMP" | "EUGMP" => Ok(CertificationKind::EuGmp),
            "DTTM" => Ok(CertificationKind::Dttm),
            "TIS" => Ok(CertificationKind::Tis),
            _ => Err(format!("unknown certification kind: {}", s)),
        }
    }
}

/// Where an optional certification status came from
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CertificateSource {
    FarmerEntered,
    MinistryApi,
}

/// Row of the certified farmers table
///
/// `eu_gmp`, `dttm` and `tis` are `None` when the certification has not
/// been evaluated. That is not a failure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FarmerRecord {
    pub id: FarmId,
    pub name: String,
    pub farm_name: String,
    pub herb: String,
    pub gacp: CertificationStatus,
    pub eu_gmp: Option<CertificationStatus>,
    pub dttm: Option<CertificationStatus>,
    pub tis: Option<CertificationStatus>,
}

impl FarmerRecord {
    pub fn status_of(&self, kind: CertificationKind) -> Option<CertificationStatus> {
        match kind {
            CertificationKind::Gacp => Some(self.gacp),
            CertificationKind::EuGmp => self.eu_gmp,
            CertificationKind::Dttm => self.dttm,
            CertificationKind::Tis => self.tis,
        }
    }

    /// All four statuses in table column order
    pub fn statuses(&self) -> impl Iterator<Item = (CertificationKind, Option<CertificationStatus>)> + '_ {
        CertificationKind::ALL
            .into_iter()
            .map(move |kind| (kind, self.status_of(kind)))
    }

    pub fn has_status(&self, status: CertificationStatus) -> bool {
        self.statuses().any(|(_, s)| s == Some(status))
    }

    pub fn has_pending(&self) -> bool {
        self.has_status(CertificationStatus::Pending)
    }
}

/// Supplier of farmer rows for the certification view
pub trait FarmerSource {
    fn farmers(&self) -> Vec<FarmerRecord>;
}

impl FarmerSource for [Farm] {
    fn farmers(&self) -> Vec<FarmerRecord> {
        self.iter().map(Farm::summary).collect()
    }
}

/// Detail of an optional certification held by a farm
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OptionalCertificationRecord {
    pub status: OptionalCertificationStatus,
    pub certificate_number: Option<String>,
    pub expiry_date: Option<NaiveDate>,
    pub source: Option<CertificateSource>,
}

/// Optional certifications; each may be farmer-entered or synced from a ministry API
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct OptionalCertifications {
    pub eu_gmp: Option<OptionalCertificationRecord>,
    pub dttm: Option<OptionalCertificationRecord>,
    pub tis: Option<OptionalCertificationRecord>,
}

impl OptionalCertifications {
    pub fn get(&self, kind: CertificationKind) -> Option<&OptionalCertificationRecord> {
        match kind {
            CertificationKind::Gacp => None,
            CertificationKind::EuGmp => self.eu_gmp.as_ref(),
            CertificationKind::Dttm => self.dttm.as_ref(),
            CertificationKind::Tis => self.tis.as_ref(),
        }
    }

    fn summary(&self, kind: CertificationKind) -> Option<CertificationStatus> {
        self.get(kind).and_then(|record| record.status.summary())
    }
}

/// A cultivation site and its certification state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Farm {
    pub id: FarmId,
    pub name: String,
    pub herb: String,
    pub user_id: UserId,
    pub gacp: ProcessStatus,
    pub gacp_certificate_number: Option<String>,
    pub gacp_expiry_date: Option<NaiveDate>,
    #[serde(default)]
    pub optional_certifications: OptionalCertifications,
    pub location: GpsCoordinates,
    pub owner: OwnerContact,
    pub province: String,
    pub organic_certified: bool,
    pub last_inspection_date: NaiveDate,
    /// Area in rai (Thai unit: 1 rai = 1,600 m²)
    pub cultivation_area: Decimal,
    pub registration_number: Option<String>,
    pub established_year: Option<i32>,
    pub next_inspection_date: Option<NaiveDate>,
}

impl Farm {
    /// Project the farm onto a row of the certified farmers table
    pub fn summary(&self) -> FarmerRecord {
        let optional = &self.optional_certifications;
        FarmerRecord {
            id: self.id,
            name: self.owner.name.clone(),
            farm_name: self.name.clone(),
            herb: self.herb.clone(),
            gacp: self.gacp.into(),
            eu_gmp: optional.summary(CertificationKind::EuGmp),
            dttm: optional.summary(CertificationKind::Dttm),
            tis: optional.summary(CertificationKind::Tis),
        }
    }

    pub fn validate(&self) -> Result<(), &'static str> {
        validate_email(&self.owner.email)?;
        validate_thai_phone(&self.owner.phone_number)?;
        validate_coordinates(&self.location)?;
        validate_cultivation_area(self.cultivation_area)?;
        if let Some(certificate) = &self.gacp_certificate_number {
            validate_gacp_certificate(certificate)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn optional(status: OptionalCertificationStatus) -> Option<OptionalCertificationRecord> {
        Some(OptionalCertificationRecord {
            status,
            certificate_number: None,
            expiry_date: None,
            source: Some(CertificateSource::FarmerEntered),
        })
    }

    fn farm() -> Farm {
        Farm {
            id: Uuid::new_v4(),
            name: "Doi Saket Herb Garden".to_string(),
            herb: "Aloe Vera".to_string(),
            user_id: Uuid::new_v4(),
            gacp: ProcessStatus::InProgress,
            gacp_certificate_number: None,
            gacp_expiry_date: None,
            optional_certifications: OptionalCertifications {
                eu_gmp: optional(OptionalCertificationStatus::Approved),
                dttm: optional(OptionalCertificationStatus::NotApplied),
                tis: None,
            },
            location: GpsCoordinates::new(Decimal::new(188, 1), Decimal::new(991, 1)),
            owner: OwnerContact {
                name: "Somchai Jaidee".to_string(),
                phone_number: "081-234-5678".to_string(),
                email: "somchai@example.co.th".to_string(),
            },
            province: "Chiang Mai".to_string(),
            organic_certified: true,
            last_inspection_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            cultivation_area: Decimal::from(12),
            registration_number: Some("HTR-0001".to_string()),
            established_year: Some(2015),
            next_inspection_date: None,
        }
    }

    #[test]
    fn test_summary_maps_statuses() {
        let summary = farm().summary();
        assert_eq!(summary.name, "Somchai Jaidee");
        assert_eq!(summary.farm_name, "Doi Saket Herb Garden");
        assert_eq!(summary.gacp, CertificationStatus::Pending);
        assert_eq!(summary.eu_gmp, Some(CertificationStatus::Passed));
        // Not applied and missing both mean "not evaluated"
        assert_eq!(summary.dttm, None);
        assert_eq!(summary.tis, None);
    }

    #[test]
    fn test_process_status_mapping() {
        assert_eq!(CertificationStatus::from(ProcessStatus::Passed), CertificationStatus::Passed);
        assert_eq!(CertificationStatus::from(ProcessStatus::Failed), CertificationStatus::Failed);
        assert_eq!(CertificationStatus::from(ProcessStatus::Pending), CertificationStatus::Pending);
        assert_eq!(CertificationStatus::from(ProcessStatus::Expired), CertificationStatus::Other);
    }

    #[test]
    fn test_statuses_in_column_order() {
        let summary = farm().summary();
        let kinds: Vec<_> = summary.statuses().map(|(kind, _)| kind).collect();
        assert_eq!(kinds, CertificationKind::ALL.to_vec());
        assert!(summary.has_pending());
    }

    #[test]
    fn test_farm_validation() {
        assert!(farm().validate().is_ok());

        let mut bad = farm();
        bad.owner.email = "not-an-email".to_string();
        assert!(bad.validate().is_err());

        let mut bad = farm();
        bad.cultivation_area = Decimal::ZERO;
        assert!(bad.validate().is_err());

        let mut bad = farm();
        bad.gacp_certificate_number = Some("GAP-2024-1".to_string());
        assert!(bad.validate().is_err());
    }

    #[test]
    fn test_certification_status_parsing() {
        for status in CertificationStatus::ALL {
            assert_eq!(status.as_str().parse::<CertificationStatus>(), Ok(status));
        }
        assert!("passed".parse::<CertificationStatus>().is_err());
        assert!("All".parse::<CertificationStatus>().is_err());
    }

    #[test]
    fn test_certification_kind_parsing() {
        assert_eq!("eu-gmp".parse::<CertificationKind>(), Ok(CertificationKind::EuGmp));
        assert_eq!("TIS".parse::<CertificationKind>(), Ok(CertificationKind::Tis));
        assert!("organic".parse::<CertificationKind>().is_err());
    }

    #[test]
    fn test_status_serializes_as_label() {
        let json = serde_json::to_string(&CertificationKind::EuGmp).unwrap();
        assert_eq!(json, "\"EU-GMP\"");
    }
}

//! Status badge mapping
//!
//! Every status value maps to a distinct label and one of a small set of
//! visual variants. Pure lookup, no computed state.

use serde::{Deserialize, Serialize};

use crate::models::{
    CertificationStatus, GacpApplicationStatus, OptionalCertificationStatus, PlantStatus,
    ProcessStatus, TransactionStatus,
};

/// Visual category of a badge
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum BadgeVariant {
    Success,
    Danger,
    Warning,
    Info,
    Neutral,
}

/// A rendered status badge
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Badge {
    pub label: &'static str,
    pub variant: BadgeVariant,
}

pub const NOT_EVALUATED: Badge = Badge {
    label: "Not Evaluated",
    variant: BadgeVariant::Neutral,
};

pub trait StatusBadge {
    fn label(&self) -> &'static str;
    fn variant(&self) -> BadgeVariant;

    fn badge(&self) -> Badge {
        Badge {
            label: self.label(),
            variant: self.variant(),
        }
    }
}

/// Badge for an optional certification; absent means not evaluated
pub fn badge_for_optional<S: StatusBadge>(status: Option<&S>) -> Badge {
    status.map(StatusBadge::badge).unwrap_or(NOT_EVALUATED)
}

impl StatusBadge for CertificationStatus {
    fn label(&self) -> &'static str {
        self.as_str()
    }

    fn variant(&self) -> BadgeVariant {
        match self {
            CertificationStatus::Passed => BadgeVariant::Success,
            CertificationStatus::Failed => BadgeVariant::Danger,
            CertificationStatus::Pending => BadgeVariant::Warning,
            CertificationStatus::Other => BadgeVariant::Info,
        }
    }
}

impl StatusBadge for ProcessStatus {
    fn label(&self) -> &'static str {
        match self {
            ProcessStatus::Pending => "Pending",
            ProcessStatus::InProgress => "In Progress",
            ProcessStatus::Passed => "Passed",
            ProcessStatus::Failed => "Failed",
            ProcessStatus::Expired => "Expired",
        }
    }

    fn variant(&self) -> BadgeVariant {
        match self {
            ProcessStatus::Pending => BadgeVariant::Warning,
            ProcessStatus::InProgress => BadgeVariant::Info,
            ProcessStatus::Passed => BadgeVariant::Success,
            ProcessStatus::Failed => BadgeVariant::Danger,
            ProcessStatus::Expired => BadgeVariant::Neutral,
        }
    }
}

impl StatusBadge for GacpApplicationStatus {
    fn label(&self) -> &'static str {
        self.as_str()
    }

    fn variant(&self) -> BadgeVariant {
        match self {
            GacpApplicationStatus::Draft => BadgeVariant::Neutral,
            GacpApplicationStatus::Submitted
            | GacpApplicationStatus::UnderReview
            | GacpApplicationStatus::SiteInspectionScheduled => BadgeVariant::Warning,
            GacpApplicationStatus::PreApproved | GacpApplicationStatus::SiteInspectionComplete => {
                BadgeVariant::Info
            }
            GacpApplicationStatus::Rejected => BadgeVariant::Danger,
            GacpApplicationStatus::Approved | GacpApplicationStatus::CertificateIssued => {
                BadgeVariant::Success
            }
        }
    }
}

impl StatusBadge for OptionalCertificationStatus {
    fn label(&self) -> &'static str {
        self.as_str()
    }

    fn variant(&self) -> BadgeVariant {
        match self {
            OptionalCertificationStatus::NotApplied => BadgeVariant::Neutral,
            OptionalCertificationStatus::Applied => BadgeVariant::Warning,
            OptionalCertificationStatus::Approved => BadgeVariant::Success,
            OptionalCertificationStatus::Rejected => BadgeVariant::Danger,
            OptionalCertificationStatus::Expired => BadgeVariant::Info,
        }
    }
}

impl StatusBadge for PlantStatus {
    fn label(&self) -> &'static str {
        match self {
            PlantStatus::Seedling => "Seedling",
            PlantStatus::Growing => "Growing",
            PlantStatus::Mature => "Mature",
            PlantStatus::Harvested => "Harvested",
            PlantStatus::LabTesting => "Lab Testing",
            PlantStatus::Packaged => "Packaged",
        }
    }

    fn variant(&self) -> BadgeVariant {
        match self {
            PlantStatus::Seedling | PlantStatus::Growing | PlantStatus::Mature => BadgeVariant::Info,
            PlantStatus::Harvested => BadgeVariant::Neutral,
            PlantStatus::LabTesting => BadgeVariant::Warning,
            PlantStatus::Packaged => BadgeVariant::Success,
        }
    }
}

impl StatusBadge for TransactionStatus {
    fn label(&self) -> &'static str {
        match self {
            TransactionStatus::Completed => "Completed",
            TransactionStatus::Pending => "Pending",
            TransactionStatus::Failed => "Failed",
        }
    }

    fn variant(&self) -> BadgeVariant {
        match self {
            TransactionStatus::Completed => BadgeVariant::Success,
            TransactionStatus::Pending => BadgeVariant::Warning,
            TransactionStatus::Failed => BadgeVariant::Danger,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn labels_are_distinct<S: StatusBadge>(values: &[S]) -> bool {
        let labels: HashSet<_> = values.iter().map(StatusBadge::label).collect();
        labels.len() == values.len()
    }

    #[test]
    fn test_every_value_renders_distinctly() {
        assert!(labels_are_distinct(&CertificationStatus::ALL));
        assert!(labels_are_distinct(&ProcessStatus::ALL));
        assert!(labels_are_distinct(&GacpApplicationStatus::ALL));
        assert!(labels_are_distinct(&OptionalCertificationStatus::ALL));
        assert!(labels_are_distinct(&PlantStatus::ALL));
        assert!(labels_are_distinct(&[
            TransactionStatus::Completed,
            TransactionStatus::Pending,
            TransactionStatus::Failed,
        ]));
    }

    #[test]
    fn test_certification_badges() {
        assert_eq!(
            CertificationStatus::Passed.badge(),
            Badge {
                label: "Passed",
                variant: BadgeVariant::Success
            }
        );
        assert_eq!(CertificationStatus::Failed.variant(), BadgeVariant::Danger);
        assert_eq!(CertificationStatus::Pending.variant(), BadgeVariant::Warning);
    }

    #[test]
    fn test_missing_optional_is_not_a_failure() {
        let badge = badge_for_optional::<CertificationStatus>(None);
        assert_eq!(badge, NOT_EVALUATED);
        assert_ne!(badge.variant, BadgeVariant::Danger);
        assert_eq!(
            badge_for_optional(Some(&CertificationStatus::Other)).label,
            "Other"
        );
    }

    #[test]
    fn test_labels_match_display() {
        for status in PlantStatus::ALL {
            assert_eq!(status.label(), status.to_string());
        }
        for status in ProcessStatus::ALL {
            assert_eq!(status.label(), status.to_string());
        }
    }
}

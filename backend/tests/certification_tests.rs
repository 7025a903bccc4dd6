//! Certification dashboard view tests
//!
//! Properties of the farmers view model over the bundled seed data.

use std::sync::Arc;

use herb_trace_backend::{services::CertificationService, DataStore};
use proptest::prelude::*;
use shared::{CertificationStatus, FarmerQuery, Role, StatusFilter};

const SEED: &str = include_str!("../../data/seed.json");

fn service() -> CertificationService {
    CertificationService::new(Arc::new(DataStore::from_json(SEED).unwrap()))
}

fn role_strategy() -> impl Strategy<Value = Role> {
    prop_oneof![
        Just(Role::Admin),
        Just(Role::Inspector),
        Just(Role::Farmer),
        Just(Role::LabTechnician),
        Just(Role::Manufacturer),
        Just(Role::Guest),
    ]
}

fn filter_strategy() -> impl Strategy<Value = StatusFilter> {
    prop_oneof![
        Just(StatusFilter::All),
        Just(StatusFilter::Only(CertificationStatus::Passed)),
        Just(StatusFilter::Only(CertificationStatus::Failed)),
        Just(StatusFilter::Only(CertificationStatus::Pending)),
        Just(StatusFilter::Only(CertificationStatus::Other)),
    ]
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn test_other_matches_expired_certifications() {
        let view = service().farmer_view(
            &FarmerQuery::new("", StatusFilter::Only(CertificationStatus::Other)),
            &Role::Guest.policy(),
        );
        let names: Vec<_> = view.rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Pranee Kaewmanee", "Wichai Thongdee"]);
    }

    #[test]
    fn test_whitespace_query_is_not_trimmed() {
        let view = service().farmer_view(
            &FarmerQuery::new("  ", StatusFilter::All),
            &Role::Guest.policy(),
        );
        // No name or herb holds a double space
        assert_eq!(view.total, 8);
        assert_eq!(view.matched, 0);
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod property_tests {
    use super::*;

    proptest! {
        /// The view never invents rows and reports consistent counts
        #[test]
        fn prop_matched_never_exceeds_total(
            search in "[a-zA-Z ]{0,6}",
            status in filter_strategy(),
            role in role_strategy(),
        ) {
            let view = service().farmer_view(&FarmerQuery::new(search, status), &role.policy());
            prop_assert!(view.matched <= view.total);
            prop_assert_eq!(view.matched, view.rows.len());
        }

        /// Row actions appear exactly when the edit affordance does
        #[test]
        fn prop_actions_follow_edit_permission(role in role_strategy()) {
            let view = service().farmer_view(&FarmerQuery::default(), &role.policy());
            prop_assert!(view.rows.iter().all(|r| r.action.is_some() == view.show_actions));
        }

        /// The role never changes which rows are returned
        #[test]
        fn prop_role_does_not_hide_rows(
            status in filter_strategy(),
            role in role_strategy(),
        ) {
            let query = FarmerQuery::new("", status);
            let as_guest = service().farmer_view(&query, &Role::Guest.policy());
            let as_role = service().farmer_view(&query, &role.policy());
            let guest_ids: Vec<_> = as_guest.rows.iter().map(|r| r.id).collect();
            let role_ids: Vec<_> = as_role.rows.iter().map(|r| r.id).collect();
            prop_assert_eq!(guest_ids, role_ids);
        }
    }
}

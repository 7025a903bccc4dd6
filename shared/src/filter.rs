//! Search and status filtering for the certified farmers table

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{CertificationStatus, FarmerRecord};

/// Status filter selected in the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(CertificationStatus),
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown status filter: {0}")]
pub struct ParseStatusFilterError(pub String);

impl std::str::FromStr for StatusFilter {
    type Err = ParseStatusFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "All" {
            return Ok(StatusFilter::All);
        }
        s.parse::<CertificationStatus>()
            .map(StatusFilter::Only)
            .map_err(|_| ParseStatusFilterError(s.to_string()))
    }
}

impl std::fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatusFilter::All => f.write_str("All"),
            StatusFilter::Only(status) => f.write_str(status.as_str()),
        }
    }
}

impl Serialize for StatusFilter {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for StatusFilter {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Search text plus status filter
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FarmerQuery {
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub status: StatusFilter,
}

impl FarmerQuery {
    pub fn new(search: impl Into<String>, status: StatusFilter) -> Self {
        Self {
            search: search.into(),
            status,
        }
    }

    pub fn matches(&self, farmer: &FarmerRecord) -> bool {
        matches_search(farmer, &self.search) && matches_status(farmer, self.status)
    }
}

/// Case-insensitive substring match on farmer name or herb; empty query matches all
pub fn matches_search(farmer: &FarmerRecord, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    farmer.name.to_lowercase().contains(&needle) || farmer.herb.to_lowercase().contains(&needle)
}

/// True when ANY of the four certifications has the selected status
///
/// Certifications that were never evaluated never match.
pub fn matches_status(farmer: &FarmerRecord, filter: StatusFilter) -> bool {
    match filter {
        StatusFilter::All => true,
        StatusFilter::Only(status) => farmer.has_status(status),
    }
}

/// Filter farmers, preserving input order
pub fn filter_farmers<'a>(farmers: &'a [FarmerRecord], query: &FarmerQuery) -> Vec<&'a FarmerRecord> {
    farmers.iter().filter(|farmer| query.matches(farmer)).collect()
}

/// Per-row action offered to users allowed to edit certifications
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RowAction {
    Review,
    View,
}

impl RowAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            RowAction::Review => "Review",
            RowAction::View => "View",
        }
    }
}

impl std::fmt::Display for RowAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn row_action(farmer: &FarmerRecord) -> RowAction {
    if farmer.has_pending() {
        RowAction::Review
    } else {
        RowAction::View
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    use CertificationStatus::*;

    fn farmer(
        name: &str,
        herb: &str,
        gacp: CertificationStatus,
        others: [Option<CertificationStatus>; 3],
    ) -> FarmerRecord {
        let [eu_gmp, dttm, tis] = others;
        FarmerRecord {
            id: Uuid::new_v4(),
            name: name.to_string(),
            farm_name: format!("{} Farm", name),
            herb: herb.to_string(),
            gacp,
            eu_gmp,
            dttm,
            tis,
        }
    }

    #[test]
    fn test_status_filter_parsing() {
        assert_eq!("All".parse::<StatusFilter>(), Ok(StatusFilter::All));
        assert_eq!("Pending".parse::<StatusFilter>(), Ok(StatusFilter::Only(Pending)));
        assert_eq!("Other".parse::<StatusFilter>(), Ok(StatusFilter::Only(Other)));
        assert!("Approved".parse::<StatusFilter>().is_err());
    }

    #[test]
    fn test_passed_matches_on_any_field() {
        let f = farmer("Somchai", "Turmeric", Passed, [Some(Pending), Some(Pending), Some(Pending)]);
        assert!(matches_status(&f, StatusFilter::Only(Passed)));
        assert!(matches_status(&f, StatusFilter::Only(Pending)));
        assert!(!matches_status(&f, StatusFilter::Only(Failed)));
    }

    #[test]
    fn test_optional_status_matches() {
        let f = farmer("Malee", "Kratom", Pending, [None, Some(Failed), None]);
        assert!(matches_status(&f, StatusFilter::Only(Failed)));
    }

    #[test]
    fn test_unevaluated_fields_never_match() {
        let f = farmer("Anan", "Ginger", Passed, [None, None, None]);
        assert!(!matches_status(&f, StatusFilter::Only(Other)));
        assert!(!matches_status(&f, StatusFilter::Only(Pending)));
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let f = farmer("Somchai", "aloe vera", Passed, [None, None, None]);
        assert!(matches_search(&f, "ALOE"));
        assert!(matches_search(&f, "somCHAI"));
        assert!(!matches_search(&f, "cannabis"));
        assert!(matches_search(&f, ""));
    }

    #[test]
    fn test_search_and_status_must_both_hold() {
        let farmers = vec![
            farmer("Somchai", "Aloe Vera", Passed, [None, None, None]),
            farmer("Malee", "Cannabis", Failed, [None, None, None]),
        ];
        let query = FarmerQuery::new("zzz", StatusFilter::Only(Passed));
        assert!(filter_farmers(&farmers, &query).is_empty());

        let query = FarmerQuery::new("cannabis", StatusFilter::Only(Passed));
        assert!(filter_farmers(&farmers, &query).is_empty());

        let query = FarmerQuery::new("aloe", StatusFilter::Only(Passed));
        let result = filter_farmers(&farmers, &query);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Somchai");
    }

    #[test]
    fn test_filter_preserves_order() {
        let farmers = vec![
            farmer("C", "Basil", Pending, [None, None, None]),
            farmer("A", "Basil", Passed, [None, None, None]),
            farmer("B", "Basil", Pending, [None, None, None]),
        ];
        let names: Vec<_> = filter_farmers(&farmers, &FarmerQuery::new("basil", StatusFilter::All))
            .into_iter()
            .map(|f| f.name.as_str())
            .collect();
        assert_eq!(names, vec!["C", "A", "B"]);
    }

    #[test]
    fn test_empty_input() {
        let result = filter_farmers(&[], &FarmerQuery::new("aloe", StatusFilter::Only(Passed)));
        assert!(result.is_empty());
    }

    #[test]
    fn test_row_action() {
        let pending = farmer("A", "Basil", Passed, [None, Some(Pending), None]);
        let settled = farmer("B", "Basil", Passed, [Some(Failed), None, Some(Other)]);
        assert_eq!(row_action(&pending), RowAction::Review);
        assert_eq!(row_action(&settled), RowAction::View);
        assert_eq!(RowAction::Review.to_string(), "Review");
        assert_eq!(
            serde_json::to_string(&RowAction::View).unwrap(),
            format!("\"{}\"", RowAction::View.as_str())
        );
    }

    #[test]
    fn test_query_deserializes_with_defaults() {
        let query: FarmerQuery = serde_json::from_str(r#"{"status":"Failed"}"#).unwrap();
        assert_eq!(query, FarmerQuery::new("", StatusFilter::Only(Failed)));
        let query: FarmerQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(query.status, StatusFilter::All);
    }
}

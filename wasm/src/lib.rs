//! WebAssembly module for the Herb Trace Platform
//!
//! Lets the browser dashboard run the same logic as the backend:
//! - Certified farmer filtering
//! - Status badges and row actions
//! - Role permission checks
//! - GACP workflow and certificate number checks

use shared::{
    badge_for_optional, filter_farmers as filter_records, row_action as record_action,
    validate_gacp_certificate, AccessPolicy, CertificationStatus, FarmerQuery, FarmerRecord,
    GacpApplicationStatus, Page, PagePermission, Role, StatusFilter,
};
use wasm_bindgen::prelude::*;

fn to_js(message: String) -> JsValue {
    JsValue::from_str(&message)
}

fn filter_json(farmers_json: &str, search: &str, status: &str) -> Result<String, String> {
    let farmers: Vec<FarmerRecord> =
        serde_json::from_str(farmers_json).map_err(|e| format!("Invalid farmers JSON: {}", e))?;
    let status: StatusFilter = status.parse().map_err(|e| format!("{}", e))?;

    let query = FarmerQuery::new(search, status);
    serde_json::to_string(&filter_records(&farmers, &query)).map_err(|e| e.to_string())
}

fn badge_json(status: &str) -> Result<String, String> {
    let status = match status {
        "" => None,
        label => Some(label.parse::<CertificationStatus>()?),
    };
    serde_json::to_string(&badge_for_optional(status.as_ref())).map_err(|e| e.to_string())
}

fn action_for(farmer_json: &str) -> Result<String, String> {
    let farmer: FarmerRecord =
        serde_json::from_str(farmer_json).map_err(|e| format!("Invalid farmer JSON: {}", e))?;
    Ok(record_action(&farmer).to_string())
}

/// Filter a JSON array of farmer rows by search text and status label
///
/// `status` is one of All, Passed, Failed, Pending, Other. Returns the
/// matching rows as JSON, in input order.
#[wasm_bindgen]
pub fn filter_farmers(farmers_json: &str, search: &str, status: &str) -> Result<String, JsValue> {
    filter_json(farmers_json, search, status).map_err(to_js)
}

/// Badge JSON for a certification status; an empty status is "Not Evaluated"
#[wasm_bindgen]
pub fn certification_badge(status: &str) -> Result<String, JsValue> {
    badge_json(status).map_err(to_js)
}

/// "Review" when any certification of the row is pending, else "View"
#[wasm_bindgen]
pub fn row_action(farmer_json: &str) -> Result<String, JsValue> {
    action_for(farmer_json).map_err(to_js)
}

/// Whether a role holds a permission on a page; unknown names are denied
#[wasm_bindgen]
pub fn role_allows(role: &str, page: &str, permission: &str) -> bool {
    match (
        role.parse::<Role>(),
        page.parse::<Page>(),
        permission.parse::<PagePermission>(),
    ) {
        (Ok(role), Ok(page), Ok(permission)) => role.policy().allows(page, permission),
        _ => false,
    }
}

/// Whether a GACP application may move from one status to another
#[wasm_bindgen]
pub fn can_advance_gacp(from: &str, to: &str) -> bool {
    match (
        from.parse::<GacpApplicationStatus>(),
        to.parse::<GacpApplicationStatus>(),
    ) {
        (Ok(from), Ok(to)) => from.can_transition_to(to),
        _ => false,
    }
}

/// Check a GACP certificate number (GACP-YYYY-NNNNN)
#[wasm_bindgen]
pub fn is_valid_gacp_certificate(certificate_number: &str) -> bool {
    validate_gacp_certificate(certificate_number).is_ok()
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn test_exported_filter_rejects_unknown_status() {
        assert!(filter_farmers("[]", "", "Approved").is_err());
        assert_eq!(filter_farmers("[]", "", "All").unwrap(), "[]");
    }
}

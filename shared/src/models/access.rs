//! Role and page permission models
//!
//! These checks only decide which dashboard affordances are shown (a
//! column, a button). They do not guard data access.

use serde::{Deserialize, Serialize};

/// Dashboard pages
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    Dashboard,
    Certification,
    Tracking,
    Inspection,
    Lab,
    Marketplace,
    Settings,
}

/// Permissions that can be granted on a page
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PagePermission {
    View,
    Edit,
    Approve,
    Export,
}

/// Platform roles
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    Inspector,
    Farmer,
    LabTechnician,
    Manufacturer,
    #[default]
    Guest,
}

/// A set of permissions on one page
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PageGrant {
    pub page: Page,
    pub permissions: Vec<PagePermission>,
}

/// Capability check used to gate dashboard affordances
pub trait AccessPolicy {
    fn allows(&self, page: Page, permission: PagePermission) -> bool;
}

/// Grants attached to a role
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RolePolicy {
    pub role: Role,
    pub grants: Vec<PageGrant>,
}

impl RolePolicy {
    pub fn for_role(role: Role) -> Self {
        Self {
            role,
            grants: default_grants(role),
        }
    }
}

impl AccessPolicy for RolePolicy {
    fn allows(&self, page: Page, permission: PagePermission) -> bool {
        self.grants
            .iter()
            .any(|grant| grant.page == page && grant.permissions.contains(&permission))
    }
}

impl Role {
    pub fn policy(&self) -> RolePolicy {
        RolePolicy::for_role(*self)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Inspector => "inspector",
            Role::Farmer => "farmer",
            Role::LabTechnician => "lab_technician",
            Role::Manufacturer => "manufacturer",
            Role::Guest => "guest",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Role::Admin),
            "inspector" => Ok(Role::Inspector),
            "farmer" => Ok(Role::Farmer),
            "lab_technician" => Ok(Role::LabTechnician),
            "manufacturer" => Ok(Role::Manufacturer),
            "guest" => Ok(Role::Guest),
            _ => Err(format!("unknown role: {}", s)),
        }
    }
}

impl std::str::FromStr for Page {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dashboard" => Ok(Page::Dashboard),
            "certification" => Ok(Page::Certification),
            "tracking" => Ok(Page::Tracking),
            "inspection" => Ok(Page::Inspection),
            "lab" => Ok(Page::Lab),
            "marketplace" => Ok(Page::Marketplace),
            "settings" => Ok(Page::Settings),
            _ => Err(format!("unknown page: {}", s)),
        }
    }
}

impl std::str::FromStr for PagePermission {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "view" => Ok(PagePermission::View),
            "edit" => Ok(PagePermission::Edit),
            "approve" => Ok(PagePermission::Approve),
            "export" => Ok(PagePermission::Export),
            _ => Err(format!("unknown permission: {}", s)),
        }
    }
}

fn grant(page: Page, permissions: &[PagePermission]) -> PageGrant {
    PageGrant {
        page,
        permissions: permissions.to_vec(),
    }
}

/// Default grants for each role
pub fn default_grants(role: Role) -> Vec<PageGrant> {
    use PagePermission::*;

    match role {
        Role::Admin => [
            Page::Dashboard,
            Page::Certification,
            Page::Tracking,
            Page::Inspection,
            Page::Lab,
            Page::Marketplace,
            Page::Settings,
        ]
        .into_iter()
        .map(|page| grant(page, &[View, Edit, Approve, Export]))
        .collect(),
        Role::Inspector => vec![
            grant(Page::Dashboard, &[View]),
            grant(Page::Certification, &[View, Edit, Approve]),
            grant(Page::Inspection, &[View, Edit, Approve]),
            grant(Page::Tracking, &[View]),
            grant(Page::Lab, &[View]),
        ],
        Role::Farmer => vec![
            grant(Page::Dashboard, &[View]),
            grant(Page::Certification, &[View]),
            grant(Page::Tracking, &[View, Edit]),
            grant(Page::Marketplace, &[View, Edit]),
        ],
        Role::LabTechnician => vec![
            grant(Page::Dashboard, &[View]),
            grant(Page::Lab, &[View, Edit, Approve]),
            grant(Page::Tracking, &[View]),
        ],
        Role::Manufacturer => vec![
            grant(Page::Dashboard, &[View]),
            grant(Page::Tracking, &[View, Edit]),
            grant(Page::Marketplace, &[View, Edit, Export]),
        ],
        Role::Guest => vec![
            grant(Page::Dashboard, &[View]),
            grant(Page::Certification, &[View]),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_has_everything() {
        let policy = Role::Admin.policy();
        assert!(policy.allows(Page::Settings, PagePermission::Edit));
        assert!(policy.allows(Page::Certification, PagePermission::Approve));
    }

    #[test]
    fn test_inspector_can_review_certifications() {
        let policy = Role::Inspector.policy();
        assert!(policy.allows(Page::Certification, PagePermission::Edit));
        assert!(policy.allows(Page::Certification, PagePermission::Approve));
        assert!(!policy.allows(Page::Marketplace, PagePermission::View));
    }

    #[test]
    fn test_farmer_and_guest_are_read_only_on_certification() {
        for role in [Role::Farmer, Role::Guest] {
            let policy = role.policy();
            assert!(policy.allows(Page::Certification, PagePermission::View));
            assert!(!policy.allows(Page::Certification, PagePermission::Edit));
            assert!(!policy.allows(Page::Certification, PagePermission::Approve));
        }
    }

    #[test]
    fn test_role_parsing() {
        assert_eq!("lab_technician".parse::<Role>(), Ok(Role::LabTechnician));
        assert!("superuser".parse::<Role>().is_err());
        assert_eq!(Role::default(), Role::Guest);
    }
}

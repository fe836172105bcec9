// ============================================================================
// Environment Setup Core - Group Entity
// File: crates/envsetup-core/src/domain/group.rs
// Description: Platform groups (sites, organizations, user groups)
// ============================================================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// What a platform group stands for. Membership of each kind lives in a
/// different service, so callers dispatch on this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GroupKind {
    /// Backing group of an organization; `has_site` when the organization
    /// also publishes a site.
    Organization { organization_id: Uuid, has_site: bool },
    /// A plain site with its own member list.
    RegularSite,
    /// Backing group of a user group.
    UserGroup { user_group_id: Uuid },
    /// The tenant-wide (global) group.
    Company,
    /// Layout prototypes, control panel and other internal groups.
    Other,
}

impl GroupKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            GroupKind::Organization { .. } => "organization",
            GroupKind::RegularSite => "regular_site",
            GroupKind::UserGroup { .. } => "user_group",
            GroupKind::Company => "company",
            GroupKind::Other => "other",
        }
    }
}

/// Group entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Group {
    pub id: Uuid,
    pub tenant_id: Uuid,
    pub name: String,
    pub kind: GroupKind,
    pub is_active: bool,

    // Audit fields
    pub created_at: DateTime<Utc>,
}

impl Group {
    pub fn new(tenant_id: Uuid, name: String, kind: GroupKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            tenant_id,
            name,
            kind,
            is_active: true,
            created_at: Utc::now(),
        }
    }

    /// Whether pages can be published in this group.
    pub fn is_site(&self) -> bool {
        match self.kind {
            GroupKind::RegularSite | GroupKind::Company => true,
            GroupKind::Organization { has_site, .. } => has_site,
            GroupKind::UserGroup { .. } | GroupKind::Other => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_site() {
        let tenant_id = Uuid::new_v4();

        assert!(Group::new(tenant_id, "Guest".into(), GroupKind::RegularSite).is_site());
        assert!(Group::new(tenant_id, "Global".into(), GroupKind::Company).is_site());
        assert!(!Group::new(tenant_id, "Control Panel".into(), GroupKind::Other).is_site());
        assert!(!Group::new(
            tenant_id,
            "Testers".into(),
            GroupKind::UserGroup { user_group_id: Uuid::new_v4() }
        )
        .is_site());

        let org = |has_site| {
            Group::new(
                tenant_id,
                "Acme".into(),
                GroupKind::Organization { organization_id: Uuid::new_v4(), has_site },
            )
        };
        assert!(org(true).is_site());
        assert!(!org(false).is_site());
    }
}

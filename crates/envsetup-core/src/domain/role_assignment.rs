// ============================================================================
// Environment Setup Core - Role Assignment Entity
// File: crates/envsetup-core/src/domain/role_assignment.rs
// Description: Role granted to every member of a user group
// ============================================================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Role Assignment entity (UserGroup-Role relationship)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleAssignment {
    pub id: Uuid,
    pub tenant_id: Uuid,
    pub user_group_id: Uuid,
    pub role_id: Uuid,

    /// User the assignment was made as; `None` for anonymous upgrades.
    pub assigned_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl RoleAssignment {
    pub fn new(tenant_id: Uuid, user_group_id: Uuid, role_id: Uuid, assigned_by: Option<Uuid>) -> Self {
        Self {
            id: Uuid::new_v4(),
            tenant_id,
            user_group_id,
            role_id,
            assigned_by,
            created_at: Utc::now(),
        }
    }

    pub fn links(&self, user_group_id: Uuid, role_id: Uuid) -> bool {
        self.user_group_id == user_group_id && self.role_id == role_id
    }
}

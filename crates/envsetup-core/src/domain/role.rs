// ============================================================================
// Environment Setup Core - Role Entity
// File: crates/envsetup-core/src/domain/role.rs
// Description: Named permission grouping, unique per tenant
// ============================================================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use envsetup_shared::LocalizedMap;

/// Role type. Environment setup only creates regular (tenant-wide) roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoleType {
    Regular,
}

/// Role entity
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Role {
    pub id: Uuid,
    pub tenant_id: Uuid,

    #[validate(length(min = 1, max = 75, message = "Role name must be between 1 and 75 characters"))]
    pub name: String,

    pub title_map: LocalizedMap,
    pub description_map: LocalizedMap,
    pub role_type: RoleType,
    pub subtype: Option<String>,

    // Audit fields
    pub created_at: DateTime<Utc>,
    pub created_by: Option<Uuid>,
    pub modified_at: Option<DateTime<Utc>>,
}

impl Role {
    pub fn new(
        tenant_id: Uuid,
        name: String,
        title_map: LocalizedMap,
        description_map: LocalizedMap,
        role_type: RoleType,
        created_by: Option<Uuid>,
    ) -> Result<Self, validator::ValidationErrors> {
        let now = Utc::now();
        let role = Self {
            id: Uuid::new_v4(),
            tenant_id,
            name: name.trim().to_string(),
            title_map,
            description_map,
            role_type,
            subtype: None,
            created_at: now,
            created_by,
            modified_at: Some(now),
        };

        role.validate()?;
        Ok(role)
    }
}

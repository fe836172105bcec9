// ============================================================================
// Environment Setup Core - User Group Entity
// File: crates/envsetup-core/src/domain/user_group.rs
// Description: Named collection of users, unique per tenant
// ============================================================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// User Group entity
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UserGroup {
    pub id: Uuid,
    pub tenant_id: Uuid,
    /// Id of the backing [`Group`](super::Group) of kind `UserGroup`.
    pub group_id: Uuid,

    #[validate(length(min = 1, max = 75, message = "User group name must be between 1 and 75 characters"))]
    pub name: String,

    #[validate(length(max = 4000, message = "Description too long"))]
    pub description: Option<String>,

    // Audit fields
    pub created_at: DateTime<Utc>,
    pub created_by: Option<Uuid>,
    pub modified_at: Option<DateTime<Utc>>,
}

impl UserGroup {
    pub fn new(
        tenant_id: Uuid,
        name: String,
        description: Option<String>,
        created_by: Option<Uuid>,
    ) -> Result<Self, validator::ValidationErrors> {
        let now = Utc::now();
        let user_group = Self {
            id: Uuid::new_v4(),
            tenant_id,
            group_id: Uuid::new_v4(),
            name: name.trim().to_string(),
            description: description.map(|d| d.trim().to_string()),
            created_at: now,
            created_by,
            modified_at: Some(now),
        };

        user_group.validate()?;
        Ok(user_group)
    }
}

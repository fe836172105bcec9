//! Portal user domain entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use envsetup_shared::utils::is_blank;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PortalUser {
    pub id: Uuid,
    pub tenant_id: Uuid,

    pub screen_name: String,

    #[validate(email)]
    pub email: String,

    pub first_name: Option<String>,
    pub last_name: Option<String>,

    pub is_active: bool,
    /// The tenant's built-in guest/system account.
    pub is_default_user: bool,

    // Audit fields
    pub created_at: DateTime<Utc>,
    pub modified_at: Option<DateTime<Utc>>,
}

impl PortalUser {
    pub fn new(
        tenant_id: Uuid,
        screen_name: String,
        email: String,
        first_name: Option<String>,
        last_name: Option<String>,
    ) -> Result<Self, validator::ValidationErrors> {
        let user = Self {
            id: Uuid::new_v4(),
            tenant_id,
            screen_name,
            email: email.trim().to_lowercase(),
            first_name,
            last_name,
            is_active: true,
            is_default_user: false,
            created_at: Utc::now(),
            modified_at: None,
        };

        user.validate()?;
        Ok(user)
    }

    /// Whether this account can stand in as the tenant administrator: active,
    /// fully named, and not the default user.
    pub fn is_qualified_admin(&self) -> bool {
        self.is_active
            && !is_blank(self.first_name.as_deref())
            && !is_blank(self.last_name.as_deref())
            && !self.is_default_user
    }
}

//! Tenant domain entity (a portal "company")

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tenant {
    pub id: Uuid,
    pub web_id: String,
    pub name: String,
    pub is_active: bool,
    pub is_default: bool,

    // Audit
    pub created_at: DateTime<Utc>,
}

impl Tenant {
    pub fn new(web_id: String, name: String, is_default: bool) -> Self {
        Self {
            id: Uuid::new_v4(),
            web_id,
            name,
            is_active: true,
            is_default,
            created_at: Utc::now(),
        }
    }
}

//! Request context handed to every facade call made by an upgrade step

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceContext {
    pub tenant_id: Uuid,
    /// Acting user; `None` when the step runs anonymously.
    pub user_id: Option<Uuid>,
    pub create_date: DateTime<Utc>,
    pub modified_date: DateTime<Utc>,
    /// Left unset by the upgrade scope; steps that need a site set it.
    pub scope_group_id: Option<Uuid>,
}

impl ServiceContext {
    pub fn new(tenant_id: Uuid, user_id: Option<Uuid>) -> Self {
        let now = Utc::now();
        Self {
            tenant_id,
            user_id,
            create_date: now,
            modified_date: now,
            scope_group_id: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_and_modify_dates_match() {
        let ctx = ServiceContext::new(Uuid::new_v4(), None);
        assert_eq!(ctx.create_date, ctx.modified_date);
        assert!(ctx.scope_group_id.is_none());
    }
}

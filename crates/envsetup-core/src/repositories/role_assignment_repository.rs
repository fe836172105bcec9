//! Role assignment repository trait (port)

use async_trait::async_trait;
use uuid::Uuid;
use crate::domain::RoleAssignment;
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RoleAssignmentRepository: Send + Sync {
    /// Grants every role in `role_ids` to the user group, recorded as made
    /// by `acting_user_id`.
    async fn assign_roles(
        &self,
        tenant_id: &Uuid,
        acting_user_id: Option<Uuid>,
        user_group_id: &Uuid,
        role_ids: &[Uuid],
    ) -> Result<Vec<RoleAssignment>, DomainError>;
}

//! User group repository trait (port)

use async_trait::async_trait;
use uuid::Uuid;
use crate::domain::UserGroup;
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserGroupRepository: Send + Sync {
    async fn find_by_name(&self, tenant_id: &Uuid, name: &str) -> Result<Option<UserGroup>, DomainError>;
    /// Fails with `UserGroupNameAlreadyExists` when the name is taken.
    async fn create(&self, user_group: &UserGroup) -> Result<UserGroup, DomainError>;
    async fn find_member_ids(&self, user_group_id: &Uuid) -> Result<Vec<Uuid>, DomainError>;
}

//! Group repository trait (port)

use async_trait::async_trait;
use uuid::Uuid;
use crate::domain::Group;
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GroupRepository: Send + Sync {
    async fn find_by_name(&self, tenant_id: &Uuid, name: &str) -> Result<Option<Group>, DomainError>;
    /// The tenant-wide group.
    async fn find_company_group(&self, tenant_id: &Uuid) -> Result<Option<Group>, DomainError>;
    /// Groups the role is granted to, in platform order.
    async fn find_by_role(&self, role_id: &Uuid) -> Result<Vec<Group>, DomainError>;
    /// Direct members of a site group.
    async fn find_member_ids(&self, group_id: &Uuid) -> Result<Vec<Uuid>, DomainError>;
}

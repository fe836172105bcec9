//! Role repository trait (port)

use async_trait::async_trait;
use uuid::Uuid;
use crate::domain::Role;
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RoleRepository: Send + Sync {
    async fn find_by_name(&self, tenant_id: &Uuid, name: &str) -> Result<Option<Role>, DomainError>;
    /// Fails with `RoleNameAlreadyExists` when the name is taken.
    async fn create(&self, role: &Role) -> Result<Role, DomainError>;
}

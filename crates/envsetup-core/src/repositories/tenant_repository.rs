//! Tenant repository trait (port)

use async_trait::async_trait;
use crate::domain::Tenant;
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TenantRepository: Send + Sync {
    /// The tenant the portal was first installed with.
    async fn find_default(&self) -> Result<Option<Tenant>, DomainError>;
}

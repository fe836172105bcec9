//! Organization repository trait (port)

use async_trait::async_trait;
use uuid::Uuid;
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrganizationRepository: Send + Sync {
    async fn find_member_ids(&self, organization_id: &Uuid) -> Result<Vec<Uuid>, DomainError>;
}

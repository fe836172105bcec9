// ============================================================================
// Environment Setup Infrastructure - In-Memory User Repository
// File: crates/envsetup-infrastructure/src/memory/user_repo_impl.rs
// ============================================================================
//! In-memory user repository

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use envsetup_core::domain::PortalUser;
use envsetup_core::error::DomainError;
use envsetup_core::repositories::UserRepository;

use super::store::PortalStore;

pub struct MemUserRepository {
    store: Arc<PortalStore>,
}

impl MemUserRepository {
    pub fn new(store: Arc<PortalStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl UserRepository for MemUserRepository {
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<PortalUser>, DomainError> {
        Ok(self.store.state.read().users.get(id).cloned())
    }

    async fn find_ids_by_role(&self, role_id: &Uuid) -> Result<Vec<Uuid>, DomainError> {
        Ok(self
            .store
            .state
            .read()
            .role_users
            .get(role_id)
            .cloned()
            .unwrap_or_default())
    }
}

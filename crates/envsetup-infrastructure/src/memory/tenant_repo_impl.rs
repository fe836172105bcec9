// ============================================================================
// Environment Setup Infrastructure - In-Memory Tenant Repository
// File: crates/envsetup-infrastructure/src/memory/tenant_repo_impl.rs
// ============================================================================
//! In-memory tenant repository

use std::sync::Arc;

use async_trait::async_trait;

use envsetup_core::domain::Tenant;
use envsetup_core::error::DomainError;
use envsetup_core::repositories::TenantRepository;

use super::store::PortalStore;

pub struct MemTenantRepository {
    store: Arc<PortalStore>,
}

impl MemTenantRepository {
    pub fn new(store: Arc<PortalStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl TenantRepository for MemTenantRepository {
    async fn find_default(&self) -> Result<Option<Tenant>, DomainError> {
        Ok(self.store.state.read().tenants.iter().find(|t| t.is_default).cloned())
    }
}

// ============================================================================
// Environment Setup Infrastructure - In-Memory Group Repositories
// File: crates/envsetup-infrastructure/src/memory/group_repo_impl.rs
// ============================================================================
//! In-memory group and organization repositories

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use envsetup_core::domain::{Group, GroupKind};
use envsetup_core::error::DomainError;
use envsetup_core::repositories::{GroupRepository, OrganizationRepository};

use super::store::PortalStore;

pub struct MemGroupRepository {
    store: Arc<PortalStore>,
}

impl MemGroupRepository {
    pub fn new(store: Arc<PortalStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl GroupRepository for MemGroupRepository {
    async fn find_by_name(&self, tenant_id: &Uuid, name: &str) -> Result<Option<Group>, DomainError> {
        Ok(self
            .store
            .state
            .read()
            .groups
            .iter()
            .find(|g| g.tenant_id == *tenant_id && g.name == name)
            .cloned())
    }

    async fn find_company_group(&self, tenant_id: &Uuid) -> Result<Option<Group>, DomainError> {
        Ok(self
            .store
            .state
            .read()
            .groups
            .iter()
            .find(|g| g.tenant_id == *tenant_id && g.kind == GroupKind::Company)
            .cloned())
    }

    async fn find_by_role(&self, role_id: &Uuid) -> Result<Vec<Group>, DomainError> {
        let state = self.store.state.read();
        let Some(group_ids) = state.role_groups.get(role_id) else {
            return Ok(Vec::new());
        };

        Ok(group_ids
            .iter()
            .filter_map(|id| state.groups.iter().find(|g| g.id == *id))
            .cloned()
            .collect())
    }

    async fn find_member_ids(&self, group_id: &Uuid) -> Result<Vec<Uuid>, DomainError> {
        Ok(self
            .store
            .state
            .read()
            .site_members
            .get(group_id)
            .cloned()
            .unwrap_or_default())
    }
}

pub struct MemOrganizationRepository {
    store: Arc<PortalStore>,
}

impl MemOrganizationRepository {
    pub fn new(store: Arc<PortalStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl OrganizationRepository for MemOrganizationRepository {
    async fn find_member_ids(&self, organization_id: &Uuid) -> Result<Vec<Uuid>, DomainError> {
        Ok(self
            .store
            .state
            .read()
            .organization_members
            .get(organization_id)
            .cloned()
            .unwrap_or_default())
    }
}

// ============================================================================
// Environment Setup Infrastructure - In-Memory Role Repository
// File: crates/envsetup-infrastructure/src/memory/role_repo_impl.rs
// ============================================================================
//! In-memory role repository

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, info};
use uuid::Uuid;

use envsetup_core::domain::Role;
use envsetup_core::error::DomainError;
use envsetup_core::repositories::RoleRepository;

use super::store::{PortalChange, PortalStore};

pub struct MemRoleRepository {
    store: Arc<PortalStore>,
}

impl MemRoleRepository {
    pub fn new(store: Arc<PortalStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl RoleRepository for MemRoleRepository {
    async fn find_by_name(&self, tenant_id: &Uuid, name: &str) -> Result<Option<Role>, DomainError> {
        Ok(self.store.state.read().find_role(tenant_id, name).cloned())
    }

    async fn create(&self, role: &Role) -> Result<Role, DomainError> {
        info!("Creating role: {}", role.name);

        let mut state = self.store.state.write();

        if state.find_role(&role.tenant_id, &role.name).is_some() {
            error!(tenant_id = %role.tenant_id, "Duplicate role name: {}", role.name);
            return Err(DomainError::RoleNameAlreadyExists {
                tenant_id: role.tenant_id,
                name: role.name.clone(),
            });
        }

        state.roles.push(role.clone());
        state.changes.push(PortalChange::RoleCreated {
            role_id: role.id,
            name: role.name.clone(),
            role_type: role.role_type,
        });

        info!("Role created successfully: {}", role.id);
        Ok(role.clone())
    }
}

// ============================================================================
// Environment Setup Infrastructure - In-Memory Role Assignment Repository
// File: crates/envsetup-infrastructure/src/memory/role_assignment_repo_impl.rs
// ============================================================================
//! In-memory role assignment repository

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};
use uuid::Uuid;

use envsetup_core::domain::RoleAssignment;
use envsetup_core::error::DomainError;
use envsetup_core::repositories::RoleAssignmentRepository;

use super::store::{PortalChange, PortalStore};

pub struct MemRoleAssignmentRepository {
    store: Arc<PortalStore>,
}

impl MemRoleAssignmentRepository {
    pub fn new(store: Arc<PortalStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl RoleAssignmentRepository for MemRoleAssignmentRepository {
    async fn assign_roles(
        &self,
        tenant_id: &Uuid,
        acting_user_id: Option<Uuid>,
        user_group_id: &Uuid,
        role_ids: &[Uuid],
    ) -> Result<Vec<RoleAssignment>, DomainError> {
        let mut state = self.store.state.write();

        if !state.user_groups.iter().any(|g| g.id == *user_group_id) {
            return Err(DomainError::PlatformError(format!("No user group exists with id {}", user_group_id)));
        }

        if let Some(missing) = role_ids.iter().find(|id| !state.roles.iter().any(|r| r.id == **id)) {
            return Err(DomainError::PlatformError(format!("No role exists with id {}", missing)));
        }

        let mut created = Vec::new();
        for role_id in role_ids {
            if state.role_assignments.iter().any(|a| a.links(*user_group_id, *role_id)) {
                debug!(%user_group_id, %role_id, "Role already assigned");
                continue;
            }

            let assignment = RoleAssignment::new(*tenant_id, *user_group_id, *role_id, acting_user_id);
            state.role_assignments.push(assignment.clone());
            created.push(assignment);
        }

        state.changes.push(PortalChange::RolesAssigned {
            user_group_id: *user_group_id,
            role_ids: role_ids.to_vec(),
            acting_user_id,
        });

        info!(%user_group_id, roles = role_ids.len(), "Roles assigned to user group");
        Ok(created)
    }
}

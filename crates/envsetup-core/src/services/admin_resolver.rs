// ============================================================================
// Environment Setup Core - Admin Resolver
// File: crates/envsetup-core/src/services/admin_resolver.rs
// ============================================================================
//! Finds a real administrator account to run upgrade steps as

use tracing::{debug, error, info};
use uuid::Uuid;

use envsetup_shared::constants::ADMINISTRATOR_ROLE_NAME;

use crate::domain::{Group, GroupKind};
use crate::error::DomainError;
use crate::repositories::PlatformServices;

/// Walks the tenant's `Administrator` role: direct members first, then the
/// members of every group the role is granted to.
pub struct AdminResolver {
    services: PlatformServices,
}

impl AdminResolver {
    pub fn new(services: PlatformServices) -> Self {
        Self { services }
    }

    /// Resolve an administrator of the platform's default tenant.
    pub async fn resolve_default_tenant_admin(&self) -> Result<Uuid, DomainError> {
        let tenant = self
            .services
            .tenants
            .find_default()
            .await?
            .ok_or(DomainError::TenantNotFound)?;

        self.resolve_admin(&tenant.id).await
    }

    /// Resolve the first active, named, non-default administrator of a tenant.
    pub async fn resolve_admin(&self, tenant_id: &Uuid) -> Result<Uuid, DomainError> {
        let role = self
            .services
            .roles
            .find_by_name(tenant_id, ADMINISTRATOR_ROLE_NAME)
            .await?
            .ok_or_else(|| DomainError::RoleNotFound {
                tenant_id: *tenant_id,
                name: ADMINISTRATOR_ROLE_NAME.to_string(),
            })?;

        // 1. Users holding the role directly
        let user_ids = self.services.users.find_ids_by_role(&role.id).await?;

        if let Some(user_id) = self.first_qualified(&user_ids).await? {
            debug!(%user_id, "Administrator found among direct role members");
            return Ok(user_id);
        }

        // 2. Members of groups holding the role, first group wins
        let groups = self.services.groups.find_by_role(&role.id).await?;

        for group in &groups {
            let Some(member_ids) = self.expand_members(group).await? else {
                debug!(group = %group.name, kind = group.kind.as_str(), "Skipping group");
                continue;
            };

            if let Some(user_id) = self.first_qualified(&member_ids).await? {
                debug!(%user_id, group = %group.name, "Administrator found through group");
                return Ok(user_id);
            }
        }

        Err(DomainError::AdminNotFound { tenant_id: *tenant_id })
    }

    /// Like [`resolve_admin`](Self::resolve_admin), but a missing tenant,
    /// administrator role, or administrator is logged and reported as `None`
    /// so the caller can fall back to running anonymously.
    pub async fn find_admin(&self, tenant_id: &Uuid) -> Result<Option<Uuid>, DomainError> {
        match self.resolve_admin(tenant_id).await {
            Ok(user_id) => {
                info!(%tenant_id, %user_id, "Resolved tenant administrator");
                Ok(Some(user_id))
            }
            Err(e @ (DomainError::TenantNotFound
            | DomainError::RoleNotFound { .. }
            | DomainError::AdminNotFound { .. })) => {
                error!("Unable to find an administrator user in tenant {}: {}", tenant_id, e);
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    /// User exists, is active, has both names, and is not the default user.
    pub async fn is_qualified_admin(&self, user_id: &Uuid) -> Result<bool, DomainError> {
        let user = self.services.users.find_by_id(user_id).await?;

        Ok(user.map_or(false, |u| u.is_qualified_admin()))
    }

    async fn first_qualified(&self, user_ids: &[Uuid]) -> Result<Option<Uuid>, DomainError> {
        for user_id in user_ids {
            if self.is_qualified_admin(user_id).await? {
                return Ok(Some(*user_id));
            }
        }

        Ok(None)
    }

    /// Member ids of a group, or `None` for kinds that carry no members.
    async fn expand_members(&self, group: &Group) -> Result<Option<Vec<Uuid>>, DomainError> {
        let member_ids = match group.kind {
            GroupKind::Organization { organization_id, .. } => {
                self.services.organizations.find_member_ids(&organization_id).await?
            }
            GroupKind::RegularSite => self.services.groups.find_member_ids(&group.id).await?,
            GroupKind::UserGroup { user_group_id } => {
                self.services.user_groups.find_member_ids(&user_group_id).await?
            }
            GroupKind::Company | GroupKind::Other => return Ok(None),
        };

        Ok(Some(member_ids))
    }
}

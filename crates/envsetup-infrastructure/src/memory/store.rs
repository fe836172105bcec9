// ============================================================================
// Environment Setup Infrastructure - In-Memory Portal Store
// File: crates/envsetup-infrastructure/src/memory/store.rs
// ============================================================================
//! Shared state behind the in-memory repositories. Lists keep insertion
//! order, which stands in for the platform's return order.

use std::collections::HashMap;

use parking_lot::RwLock;
use tracing::info;
use uuid::Uuid;

use envsetup_core::domain::{Group, GroupKind, PortalUser, Role, RoleAssignment, RoleType, Tenant, UserGroup};
use envsetup_shared::constants::ADMINISTRATOR_ROLE_NAME;
use envsetup_shared::LocalizedMap;

/// Writes made through the repositories, in the order they happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PortalChange {
    RoleCreated { role_id: Uuid, name: String, role_type: RoleType },
    UserGroupCreated { user_group_id: Uuid, name: String },
    RolesAssigned { user_group_id: Uuid, role_ids: Vec<Uuid>, acting_user_id: Option<Uuid> },
}

#[derive(Default)]
pub(crate) struct PortalState {
    pub tenants: Vec<Tenant>,
    pub users: HashMap<Uuid, PortalUser>,
    pub roles: Vec<Role>,
    /// role id → directly assigned user ids
    pub role_users: HashMap<Uuid, Vec<Uuid>>,
    pub groups: Vec<Group>,
    /// role id → group ids the role is granted to
    pub role_groups: HashMap<Uuid, Vec<Uuid>>,
    pub site_members: HashMap<Uuid, Vec<Uuid>>,
    pub organization_members: HashMap<Uuid, Vec<Uuid>>,
    pub user_groups: Vec<UserGroup>,
    pub user_group_members: HashMap<Uuid, Vec<Uuid>>,
    pub role_assignments: Vec<RoleAssignment>,
    pub changes: Vec<PortalChange>,
}

impl PortalState {
    pub fn find_role(&self, tenant_id: &Uuid, name: &str) -> Option<&Role> {
        self.roles
            .iter()
            .find(|r| r.tenant_id == *tenant_id && r.name.eq_ignore_ascii_case(name))
    }

    pub fn find_user_group(&self, tenant_id: &Uuid, name: &str) -> Option<&UserGroup> {
        self.user_groups
            .iter()
            .find(|g| g.tenant_id == *tenant_id && g.name.eq_ignore_ascii_case(name))
    }
}

/// In-memory portal shared by every `Mem*Repository`.
#[derive(Default)]
pub struct PortalStore {
    pub(crate) state: RwLock<PortalState>,
}

impl PortalStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a tenant the way a fresh portal install does: the tenant, its
    /// company group, its `Administrator` role and its default user.
    pub fn bootstrap_tenant(&self, web_id: &str, is_default: bool) -> Tenant {
        let tenant = Tenant::new(web_id.to_string(), web_id.to_string(), is_default);

        let company_group = Group::new(tenant.id, "Global".to_string(), GroupKind::Company);
        let default_user = PortalUser {
            id: Uuid::new_v4(),
            tenant_id: tenant.id,
            screen_name: tenant.id.to_string(),
            email: format!("default@{}", web_id),
            first_name: None,
            last_name: None,
            is_active: true,
            is_default_user: true,
            created_at: tenant.created_at,
            modified_at: None,
        };

        let admin_role = Role {
            id: Uuid::new_v4(),
            tenant_id: tenant.id,
            name: ADMINISTRATOR_ROLE_NAME.to_string(),
            title_map: LocalizedMap::new(),
            description_map: LocalizedMap::new(),
            role_type: RoleType::Regular,
            subtype: None,
            created_at: tenant.created_at,
            created_by: None,
            modified_at: None,
        };

        let mut state = self.state.write();
        state.tenants.push(tenant.clone());
        state.groups.push(company_group);
        state.users.insert(default_user.id, default_user);
        state.roles.push(admin_role);

        info!(tenant_id = %tenant.id, web_id, "Bootstrapped tenant");
        tenant
    }

    pub fn add_user(&self, user: PortalUser) -> PortalUser {
        self.state.write().users.insert(user.id, user.clone());
        user
    }

    pub fn add_group(&self, group: Group) -> Group {
        self.state.write().groups.push(group.clone());
        group
    }

    pub fn add_user_group(&self, user_group: UserGroup) -> UserGroup {
        let mut state = self.state.write();
        state.groups.push(backing_group(&user_group));
        state.user_groups.push(user_group.clone());
        user_group
    }

    pub fn grant_role_to_user(&self, role_id: Uuid, user_id: Uuid) {
        self.state.write().role_users.entry(role_id).or_default().push(user_id);
    }

    pub fn grant_role_to_group(&self, role_id: Uuid, group_id: Uuid) {
        self.state.write().role_groups.entry(role_id).or_default().push(group_id);
    }

    pub fn add_site_member(&self, group_id: Uuid, user_id: Uuid) {
        self.state.write().site_members.entry(group_id).or_default().push(user_id);
    }

    pub fn add_organization_member(&self, organization_id: Uuid, user_id: Uuid) {
        self.state
            .write()
            .organization_members
            .entry(organization_id)
            .or_default()
            .push(user_id);
    }

    pub fn add_user_group_member(&self, user_group_id: Uuid, user_id: Uuid) {
        self.state
            .write()
            .user_group_members
            .entry(user_group_id)
            .or_default()
            .push(user_id);
    }

    pub fn role(&self, tenant_id: &Uuid, name: &str) -> Option<Role> {
        self.state.read().find_role(tenant_id, name).cloned()
    }

    pub fn user_group(&self, tenant_id: &Uuid, name: &str) -> Option<UserGroup> {
        self.state.read().find_user_group(tenant_id, name).cloned()
    }

    pub fn role_assignments(&self) -> Vec<RoleAssignment> {
        self.state.read().role_assignments.clone()
    }

    pub fn changes(&self) -> Vec<PortalChange> {
        self.state.read().changes.clone()
    }
}

/// Group of kind `UserGroup` that backs a user group.
pub(crate) fn backing_group(user_group: &UserGroup) -> Group {
    Group {
        id: user_group.group_id,
        tenant_id: user_group.tenant_id,
        name: user_group.name.clone(),
        kind: GroupKind::UserGroup {
            user_group_id: user_group.id,
        },
        is_active: true,
        created_at: user_group.created_at,
    }
}

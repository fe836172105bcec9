//! Mock platform shared by the unit tests

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::PortalUser;
use crate::repositories::group_repository::MockGroupRepository;
use crate::repositories::organization_repository::MockOrganizationRepository;
use crate::repositories::role_assignment_repository::MockRoleAssignmentRepository;
use crate::repositories::role_repository::MockRoleRepository;
use crate::repositories::tenant_repository::MockTenantRepository;
use crate::repositories::user_group_repository::MockUserGroupRepository;
use crate::repositories::user_repository::MockUserRepository;
use crate::repositories::{DefaultPermissionCheckerFactory, PermissionCheckerFactory, PlatformServices};

pub(crate) struct MockPlatform {
    pub tenants: MockTenantRepository,
    pub users: MockUserRepository,
    pub roles: MockRoleRepository,
    pub groups: MockGroupRepository,
    pub organizations: MockOrganizationRepository,
    pub user_groups: MockUserGroupRepository,
    pub role_assignments: MockRoleAssignmentRepository,
    pub permission_checkers: Arc<dyn PermissionCheckerFactory>,
}

impl MockPlatform {
    pub fn new() -> Self {
        Self {
            tenants: MockTenantRepository::new(),
            users: MockUserRepository::new(),
            roles: MockRoleRepository::new(),
            groups: MockGroupRepository::new(),
            organizations: MockOrganizationRepository::new(),
            user_groups: MockUserGroupRepository::new(),
            role_assignments: MockRoleAssignmentRepository::new(),
            permission_checkers: Arc::new(DefaultPermissionCheckerFactory),
        }
    }

    pub fn into_services(self) -> PlatformServices {
        PlatformServices {
            tenants: Arc::new(self.tenants),
            users: Arc::new(self.users),
            roles: Arc::new(self.roles),
            groups: Arc::new(self.groups),
            organizations: Arc::new(self.organizations),
            user_groups: Arc::new(self.user_groups),
            role_assignments: Arc::new(self.role_assignments),
            permission_checkers: self.permission_checkers,
        }
    }
}

/// Active, fully named, non-default user.
pub(crate) fn named_user(tenant_id: Uuid) -> PortalUser {
    let screen_name = format!("user{}", &Uuid::new_v4().simple().to_string()[..8]);
    PortalUser::new(
        tenant_id,
        screen_name.clone(),
        format!("{}@liferay.com", screen_name),
        Some("Test".to_string()),
        Some("Test".to_string()),
    )
    .unwrap()
}

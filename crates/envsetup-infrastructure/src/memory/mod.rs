//! In-memory platform (adapters)

pub mod store;
pub mod tenant_repo_impl;
pub mod user_repo_impl;
pub mod role_repo_impl;
pub mod group_repo_impl;
pub mod user_group_repo_impl;
pub mod role_assignment_repo_impl;
pub mod release_repo_impl;

use std::sync::Arc;

use envsetup_core::repositories::{DefaultPermissionCheckerFactory, PlatformServices};

pub use store::{PortalChange, PortalStore};
pub use tenant_repo_impl::MemTenantRepository;
pub use user_repo_impl::MemUserRepository;
pub use role_repo_impl::MemRoleRepository;
pub use group_repo_impl::{MemGroupRepository, MemOrganizationRepository};
pub use user_group_repo_impl::MemUserGroupRepository;
pub use role_assignment_repo_impl::MemRoleAssignmentRepository;
pub use release_repo_impl::MemReleaseRepository;

/// Wire every port to the same store.
pub fn platform_services(store: Arc<PortalStore>) -> PlatformServices {
    PlatformServices {
        tenants: Arc::new(MemTenantRepository::new(store.clone())),
        users: Arc::new(MemUserRepository::new(store.clone())),
        roles: Arc::new(MemRoleRepository::new(store.clone())),
        groups: Arc::new(MemGroupRepository::new(store.clone())),
        organizations: Arc::new(MemOrganizationRepository::new(store.clone())),
        user_groups: Arc::new(MemUserGroupRepository::new(store.clone())),
        role_assignments: Arc::new(MemRoleAssignmentRepository::new(store)),
        permission_checkers: Arc::new(DefaultPermissionCheckerFactory),
    }
}

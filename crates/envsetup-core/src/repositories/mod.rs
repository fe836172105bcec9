//! Repository traits (ports)
//!
//! The host platform's service layer, reached only through these traits.

pub mod tenant_repository;
pub mod user_repository;
pub mod role_repository;
pub mod group_repository;
pub mod organization_repository;
pub mod user_group_repository;
pub mod role_assignment_repository;
pub mod permission_checker;
pub mod release_repository;

use std::sync::Arc;

pub use tenant_repository::TenantRepository;
pub use user_repository::UserRepository;
pub use role_repository::RoleRepository;
pub use group_repository::GroupRepository;
pub use organization_repository::OrganizationRepository;
pub use user_group_repository::UserGroupRepository;
pub use role_assignment_repository::RoleAssignmentRepository;
pub use permission_checker::{
    DefaultPermissionCheckerFactory, PermissionChecker, PermissionCheckerFactory, UserPermissionChecker,
};
pub use release_repository::ReleaseRepository;

/// Every platform service an upgrade step may call, handed over at
/// construction.
#[derive(Clone)]
pub struct PlatformServices {
    pub tenants: Arc<dyn TenantRepository>,
    pub users: Arc<dyn UserRepository>,
    pub roles: Arc<dyn RoleRepository>,
    pub groups: Arc<dyn GroupRepository>,
    pub organizations: Arc<dyn OrganizationRepository>,
    pub user_groups: Arc<dyn UserGroupRepository>,
    pub role_assignments: Arc<dyn RoleAssignmentRepository>,
    pub permission_checkers: Arc<dyn PermissionCheckerFactory>,
}

//! # Environment Setup Infrastructure
//! 
//! In-memory adapters for the platform service ports and the host's release
//! bookkeeping.

pub mod memory;

pub use memory::{
    platform_services, MemGroupRepository, MemOrganizationRepository, MemReleaseRepository,
    MemRoleAssignmentRepository, MemRoleRepository, MemTenantRepository, MemUserGroupRepository,
    MemUserRepository, PortalChange, PortalStore,
};

//! # Environment Setup Core - Domain Module
//! 
//! Domain entities mirrored from the host platform.

pub mod tenant;
pub mod user;
pub mod role;
pub mod group;
pub mod user_group;
pub mod role_assignment;
pub mod service_context;
pub mod version;

// Re-export all entities and enums
pub use tenant::Tenant;
pub use user::PortalUser;
pub use role::{Role, RoleType};
pub use group::{Group, GroupKind};
pub use user_group::UserGroup;
pub use role_assignment::RoleAssignment;
pub use service_context::ServiceContext;
pub use version::{SchemaVersion, VersionRange};

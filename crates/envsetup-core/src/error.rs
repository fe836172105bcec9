//! Domain errors

use thiserror::Error;
use uuid::Uuid;

use crate::domain::VersionRange;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Tenant not found")]
    TenantNotFound,

    #[error("Role {name} not found in tenant {tenant_id}")]
    RoleNotFound { tenant_id: Uuid, name: String },

    #[error("No active administrator found in tenant {tenant_id}")]
    AdminNotFound { tenant_id: Uuid },

    #[error("Group {name} not found in tenant {tenant_id}")]
    GroupNotFound { tenant_id: Uuid, name: String },

    #[error("Role name already exists in tenant {tenant_id}: {name}")]
    RoleNameAlreadyExists { tenant_id: Uuid, name: String },

    #[error("User group name already exists in tenant {tenant_id}: {name}")]
    UserGroupNameAlreadyExists { tenant_id: Uuid, name: String },

    #[error("Invalid schema version: {0}")]
    InvalidVersion(String),

    #[error("Invalid upgrade range {range}: {reason}")]
    InvalidUpgradeRange { range: VersionRange, reason: String },

    #[error("No upgrade path for bundle {bundle} from schema version {installed}")]
    UpgradePathNotFound { bundle: String, installed: String },

    #[error("Upgrade step {step} ({range}) failed: {source}")]
    UpgradeStepFailed {
        step: &'static str,
        range: VersionRange,
        #[source]
        source: Box<DomainError>,
    },

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Platform error: {0}")]
    PlatformError(String),
}

impl From<validator::ValidationErrors> for DomainError {
    fn from(errors: validator::ValidationErrors) -> Self {
        DomainError::ValidationError(errors.to_string())
    }
}

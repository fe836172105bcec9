//! Release repository trait (port)
//!
//! Per-bundle schema version bookkeeping owned by the host platform.

use async_trait::async_trait;
use crate::domain::SchemaVersion;
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReleaseRepository: Send + Sync {
    /// `None` when the bundle has never been installed.
    async fn schema_version(&self, bundle: &str) -> Result<Option<SchemaVersion>, DomainError>;
    async fn set_schema_version(&self, bundle: &str, version: SchemaVersion) -> Result<(), DomainError>;
}

//! In-memory release (schema version) bookkeeping

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;
use tracing::info;

use envsetup_core::domain::SchemaVersion;
use envsetup_core::error::DomainError;
use envsetup_core::repositories::ReleaseRepository;

#[derive(Default)]
pub struct MemReleaseRepository {
    versions: RwLock<HashMap<String, SchemaVersion>>,
}

impl MemReleaseRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Repository that already has `bundle` installed at `version`.
    pub fn with_version(bundle: &str, version: SchemaVersion) -> Self {
        let repo = Self::new();
        repo.versions.write().insert(bundle.to_string(), version);
        repo
    }
}

#[async_trait]
impl ReleaseRepository for MemReleaseRepository {
    async fn schema_version(&self, bundle: &str) -> Result<Option<SchemaVersion>, DomainError> {
        Ok(self.versions.read().get(bundle).copied())
    }

    async fn set_schema_version(&self, bundle: &str, version: SchemaVersion) -> Result<(), DomainError> {
        info!(bundle, %version, "Recording schema version");
        self.versions.write().insert(bundle.to_string(), version);
        Ok(())
    }
}

// ============================================================================
// Environment Setup Core - Upgrade Runner
// File: crates/envsetup-core/src/upgrade/runner.rs
// ============================================================================
//! Applies the ranges a bundle has not reached yet, in registration order

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, error, info};

use crate::domain::{SchemaVersion, VersionRange};
use crate::error::DomainError;
use crate::repositories::ReleaseRepository;
use crate::services::ActorContext;
use crate::upgrade::registry::UpgradeStepRegistry;

/// Outcome of a successful run.
#[derive(Debug, Clone, Serialize)]
pub struct UpgradeReport {
    pub bundle: String,
    /// Schema version found before the run.
    pub installed: SchemaVersion,
    /// Schema version after the run.
    pub current: SchemaVersion,
    pub applied: Vec<VersionRange>,
}

impl UpgradeReport {
    pub fn is_up_to_date(&self) -> bool {
        self.applied.is_empty()
    }
}

pub struct UpgradeRunner<R: ReleaseRepository> {
    releases: Arc<R>,
}

impl<R: ReleaseRepository> UpgradeRunner<R> {
    pub fn new(releases: Arc<R>) -> Self {
        Self { releases }
    }

    /// Run every unapplied range. The installed version is recorded after
    /// each completed range; the first failing step stops the run.
    pub async fn run(
        &self,
        registry: &UpgradeStepRegistry,
        actor: &mut ActorContext,
    ) -> Result<UpgradeReport, DomainError> {
        let bundle = registry.bundle();
        let installed = self
            .releases
            .schema_version(bundle)
            .await?
            .unwrap_or(SchemaVersion::INITIAL);

        let mut current = installed;
        let mut applied = Vec::new();

        for upgrade in registry.upgrades() {
            let range = upgrade.range;

            if range.is_applied(current) {
                debug!(bundle, %range, "Skipping applied range");
                continue;
            }

            if range.from != current {
                error!(bundle, %range, installed = %current, "No upgrade path from installed version");
                return Err(DomainError::UpgradePathNotFound {
                    bundle: bundle.to_string(),
                    installed: current.to_string(),
                });
            }

            info!(bundle, from = %range.from, to = %range.to, "Upgrading bundle");

            for step in &upgrade.steps {
                if let Err(e) = step.upgrade(actor).await {
                    error!(bundle, step = step.name(), %range, "Upgrade step failed: {}", e);
                    return Err(DomainError::UpgradeStepFailed {
                        step: step.name(),
                        range,
                        source: Box::new(e),
                    });
                }
            }

            self.releases.set_schema_version(bundle, range.to).await?;
            current = range.to;
            applied.push(range);
        }

        if applied.is_empty() {
            info!(bundle, version = %current, "Bundle is up to date");
        } else {
            info!(bundle, from = %installed, to = %current, ranges = applied.len(), "Bundle upgraded");
        }

        Ok(UpgradeReport {
            bundle: bundle.to_string(),
            installed,
            current,
            applied,
        })
    }
}

// ============================================================================
// Environment Setup Core - Upgrade Step Registry
// File: crates/envsetup-core/src/upgrade/registry.rs
// ============================================================================
//! Ordered (from, to) → steps mapping for one bundle

use tracing::debug;

use crate::domain::{SchemaVersion, VersionRange};
use crate::error::DomainError;
use crate::upgrade::step::UpgradeStep;

/// Steps registered under one version range, run in order.
pub struct RegisteredUpgrade {
    pub range: VersionRange,
    pub steps: Vec<Box<dyn UpgradeStep>>,
}

impl RegisteredUpgrade {
    pub fn step_names(&self) -> Vec<&'static str> {
        self.steps.iter().map(|s| s.name()).collect()
    }
}

/// Ranges must chain from `0.0.0` upward, each starting where the previous
/// one ended. Registration order is application order.
pub struct UpgradeStepRegistry {
    bundle: String,
    upgrades: Vec<RegisteredUpgrade>,
}

impl UpgradeStepRegistry {
    pub fn new(bundle: impl Into<String>) -> Self {
        Self {
            bundle: bundle.into(),
            upgrades: Vec::new(),
        }
    }

    pub fn register(
        &mut self,
        from: &str,
        to: &str,
        steps: Vec<Box<dyn UpgradeStep>>,
    ) -> Result<(), DomainError> {
        let range = VersionRange::parse(from, to)?;
        let invalid = |reason: &str| DomainError::InvalidUpgradeRange {
            range,
            reason: reason.to_string(),
        };

        if range.to <= range.from {
            return Err(invalid("target version must be greater than the source version"));
        }

        if steps.is_empty() {
            return Err(invalid("at least one step is required"));
        }

        let expected_from = self.target_version();
        if range.from != expected_from {
            return Err(DomainError::InvalidUpgradeRange {
                range,
                reason: format!("must start at {}", expected_from),
            });
        }

        debug!(bundle = %self.bundle, %range, steps = steps.len(), "Registered upgrade");
        self.upgrades.push(RegisteredUpgrade { range, steps });
        Ok(())
    }

    pub fn bundle(&self) -> &str {
        &self.bundle
    }

    pub fn upgrades(&self) -> &[RegisteredUpgrade] {
        &self.upgrades
    }

    pub fn ranges(&self) -> Vec<VersionRange> {
        self.upgrades.iter().map(|u| u.range).collect()
    }

    /// Schema version reached once every registered range has run.
    pub fn target_version(&self) -> SchemaVersion {
        self.upgrades
            .last()
            .map_or(SchemaVersion::INITIAL, |u| u.range.to)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use async_trait::async_trait;
    use crate::domain::ServiceContext;
    use crate::test_support::MockPlatform;
    use crate::upgrade::step::StepBinding;
    use uuid::Uuid;

    /// Step that does nothing but succeed (or fail when told to).
    pub(crate) struct NoopStep {
        pub binding: StepBinding,
        pub fail: bool,
    }

    impl NoopStep {
        pub fn boxed(fail: bool) -> Box<dyn UpgradeStep> {
            Box::new(Self {
                binding: StepBinding::new(Uuid::new_v4(), None, MockPlatform::new().into_services()),
                fail,
            })
        }
    }

    #[async_trait]
    impl UpgradeStep for NoopStep {
        fn name(&self) -> &'static str {
            if self.fail { "FailingStep" } else { "NoopStep" }
        }

        fn binding(&self) -> &StepBinding {
            &self.binding
        }

        async fn setup_environment(&self, _: &ServiceContext) -> Result<(), DomainError> {
            if self.fail {
                return Err(DomainError::PlatformError("step failed".into()));
            }
            Ok(())
        }
    }

    #[test]
    fn test_register_chain() {
        let mut registry = UpgradeStepRegistry::new("com.example.bundle");
        registry.register("0.0.0", "1.0.0", vec![NoopStep::boxed(false)]).unwrap();
        registry
            .register("1.0.0", "1.1.0", vec![NoopStep::boxed(false), NoopStep::boxed(false)])
            .unwrap();

        assert_eq!(registry.bundle(), "com.example.bundle");
        assert_eq!(registry.ranges(), vec![
            VersionRange::parse("0.0.0", "1.0.0").unwrap(),
            VersionRange::parse("1.0.0", "1.1.0").unwrap(),
        ]);
        assert_eq!(registry.upgrades()[1].step_names(), vec!["NoopStep", "NoopStep"]);
        assert_eq!(registry.target_version(), SchemaVersion::new(1, 1, 0));
    }

    #[test]
    fn test_reject_backwards_range() {
        let mut registry = UpgradeStepRegistry::new("b");
        let result = registry.register("1.0.0", "0.9.0", vec![NoopStep::boxed(false)]);
        assert!(matches!(result, Err(DomainError::InvalidUpgradeRange { .. })));
    }

    #[test]
    fn test_reject_gap() {
        let mut registry = UpgradeStepRegistry::new("b");
        registry.register("0.0.0", "1.0.0", vec![NoopStep::boxed(false)]).unwrap();

        let result = registry.register("1.1.0", "1.2.0", vec![NoopStep::boxed(false)]);
        assert!(matches!(result, Err(DomainError::InvalidUpgradeRange { reason, .. }) if reason == "must start at 1.0.0"));
        assert_eq!(registry.upgrades().len(), 1);
    }

    #[test]
    fn test_reject_empty_steps_and_bad_versions() {
        let mut registry = UpgradeStepRegistry::new("b");
        assert!(matches!(
            registry.register("0.0.0", "1.0.0", Vec::new()),
            Err(DomainError::InvalidUpgradeRange { .. })
        ));
        assert!(matches!(
            registry.register("0.0", "1.0.0", vec![NoopStep::boxed(false)]),
            Err(DomainError::InvalidVersion(_))
        ));
    }

    #[test]
    fn test_empty_registry_targets_initial_version() {
        assert_eq!(UpgradeStepRegistry::new("b").target_version(), SchemaVersion::INITIAL);
    }
}

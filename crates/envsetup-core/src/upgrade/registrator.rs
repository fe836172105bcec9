// ============================================================================
// Environment Setup Core - Step Registrator
// File: crates/envsetup-core/src/upgrade/registrator.rs
// ============================================================================
//! Binds the environment setup steps to the default tenant and its
//! administrator, and registers them under the bundle's version ranges.

use tracing::info;
use uuid::Uuid;

use crate::error::DomainError;
use crate::repositories::PlatformServices;
use crate::services::AdminResolver;
use crate::upgrade::registry::UpgradeStepRegistry;
use crate::upgrade::step::StepBinding;
use crate::upgrade::v1_0_0::InitialEnvironmentSetup;
use crate::upgrade::v1_1_0::UserGroupEnvironmentSetup;
use crate::upgrade::v1_2_0::UserGroupRoleEnvironmentSetup;

pub struct EnvironmentSetupRegistrator {
    bundle_symbolic_name: String,
    services: PlatformServices,
}

impl EnvironmentSetupRegistrator {
    pub fn new(bundle_symbolic_name: impl Into<String>, services: PlatformServices) -> Self {
        Self {
            bundle_symbolic_name: bundle_symbolic_name.into(),
            services,
        }
    }

    /// Register the steps for the platform's default tenant. A tenant
    /// without a usable administrator still gets its steps; they run
    /// anonymously.
    pub async fn register(&self) -> Result<UpgradeStepRegistry, DomainError> {
        let tenant = self
            .services
            .tenants
            .find_default()
            .await?
            .ok_or(DomainError::TenantNotFound)?;

        let admin_user_id = AdminResolver::new(self.services.clone())
            .find_admin(&tenant.id)
            .await?;

        self.register_for(tenant.id, admin_user_id)
    }

    pub fn register_for(
        &self,
        tenant_id: Uuid,
        admin_user_id: Option<Uuid>,
    ) -> Result<UpgradeStepRegistry, DomainError> {
        let binding = StepBinding::new(tenant_id, admin_user_id, self.services.clone());
        let mut registry = UpgradeStepRegistry::new(self.bundle_symbolic_name.clone());

        registry.register("0.0.0", "1.0.0", vec![Box::new(InitialEnvironmentSetup::new(binding.clone()))])?;
        registry.register("1.0.0", "1.1.0", vec![Box::new(UserGroupEnvironmentSetup::new(binding.clone()))])?;
        registry.register("1.1.0", "1.2.0", vec![Box::new(UserGroupRoleEnvironmentSetup::new(binding))])?;

        info!(
            bundle = %self.bundle_symbolic_name,
            %tenant_id,
            admin_user_id = ?admin_user_id,
            target = %registry.target_version(),
            "Registered environment setup steps"
        );
        Ok(registry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{SchemaVersion, Tenant, VersionRange};
    use crate::test_support::MockPlatform;

    #[test]
    fn test_register_for_fixed_ranges() {
        let registrator =
            EnvironmentSetupRegistrator::new("com.example.environment.setup", MockPlatform::new().into_services());
        let registry = registrator.register_for(Uuid::new_v4(), None).unwrap();

        assert_eq!(registry.bundle(), "com.example.environment.setup");
        assert_eq!(registry.ranges(), vec![
            VersionRange::parse("0.0.0", "1.0.0").unwrap(),
            VersionRange::parse("1.0.0", "1.1.0").unwrap(),
            VersionRange::parse("1.1.0", "1.2.0").unwrap(),
        ]);

        let names: Vec<_> = registry.upgrades().iter().flat_map(|u| u.step_names()).collect();
        assert_eq!(names, vec![
            "InitialEnvironmentSetup",
            "UserGroupEnvironmentSetup",
            "UserGroupRoleEnvironmentSetup",
        ]);
        assert_eq!(registry.target_version(), SchemaVersion::new(1, 2, 0));
    }

    #[test]
    fn test_steps_share_binding() {
        let tenant_id = Uuid::new_v4();
        let admin_id = Uuid::new_v4();
        let registrator = EnvironmentSetupRegistrator::new("b", MockPlatform::new().into_services());
        let registry = registrator.register_for(tenant_id, Some(admin_id)).unwrap();

        for upgrade in registry.upgrades() {
            for step in &upgrade.steps {
                assert_eq!(step.binding().tenant_id, tenant_id);
                assert_eq!(step.binding().admin_user_id, Some(admin_id));
            }
        }
    }

    #[tokio::test]
    async fn test_register_without_admin_role_falls_back_to_anonymous() {
        let tenant = Tenant::new("liferay.com".into(), "Liferay".into(), true);
        let tenant_id = tenant.id;

        let mut platform = MockPlatform::new();
        platform.tenants.expect_find_default().returning(move || Ok(Some(tenant.clone())));
        platform.roles.expect_find_by_name().returning(|_, _| Ok(None));

        let registrator = EnvironmentSetupRegistrator::new("b", platform.into_services());
        let registry = registrator.register().await.unwrap();

        let step = &registry.upgrades()[0].steps[0];
        assert_eq!(step.binding().tenant_id, tenant_id);
        assert_eq!(step.binding().admin_user_id, None);
    }

    #[tokio::test]
    async fn test_register_without_default_tenant() {
        let mut platform = MockPlatform::new();
        platform.tenants.expect_find_default().returning(|| Ok(None));

        let registrator = EnvironmentSetupRegistrator::new("b", platform.into_services());
        assert!(matches!(registrator.register().await, Err(DomainError::TenantNotFound)));
    }
}

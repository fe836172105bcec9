//! Things known up front: the UI tester role

use async_trait::async_trait;
use tracing::info;

use envsetup_shared::LocalizedMap;

use crate::domain::{Role, RoleType, ServiceContext};
use crate::error::DomainError;
use crate::upgrade::step::{StepBinding, UpgradeStep};

pub const UI_TESTER_ROLE_NAME: &str = "UI Tester";

pub struct InitialEnvironmentSetup {
    binding: StepBinding,
}

impl InitialEnvironmentSetup {
    pub fn new(binding: StepBinding) -> Self {
        Self { binding }
    }
}

#[async_trait]
impl UpgradeStep for InitialEnvironmentSetup {
    fn name(&self) -> &'static str {
        "InitialEnvironmentSetup"
    }

    fn binding(&self) -> &StepBinding {
        &self.binding
    }

    async fn setup_environment(&self, service_context: &ServiceContext) -> Result<(), DomainError> {
        // No existence check: this range only ever runs once per installation.
        let role = Role::new(
            service_context.tenant_id,
            UI_TESTER_ROLE_NAME.to_string(),
            LocalizedMap::new(),
            LocalizedMap::new(),
            RoleType::Regular,
            service_context.user_id,
        )?;

        let role = self.binding.services.roles.create(&role).await?;

        info!(role_id = %role.id, tenant_id = %role.tenant_id, "Created role {}", role.name);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::ActorContext;
    use crate::test_support::MockPlatform;
    use uuid::Uuid;

    #[tokio::test]
    async fn test_creates_regular_role() {
        let tenant_id = Uuid::new_v4();
        let mut platform = MockPlatform::new();
        platform
            .roles
            .expect_create()
            .withf(move |role| {
                role.name == UI_TESTER_ROLE_NAME
                    && role.tenant_id == tenant_id
                    && role.role_type == RoleType::Regular
                    && role.title_map.is_empty()
                    && role.description_map.is_empty()
            })
            .times(1)
            .returning(|role| Ok(role.clone()));

        let step = InitialEnvironmentSetup::new(StepBinding::new(tenant_id, None, platform.into_services()));
        step.upgrade(&mut ActorContext::anonymous()).await.unwrap();
    }

    #[tokio::test]
    async fn test_duplicate_role_propagates() {
        let tenant_id = Uuid::new_v4();
        let mut platform = MockPlatform::new();
        platform.roles.expect_create().returning(|role| {
            Err(DomainError::RoleNameAlreadyExists {
                tenant_id: role.tenant_id,
                name: role.name.clone(),
            })
        });

        let step = InitialEnvironmentSetup::new(StepBinding::new(tenant_id, None, platform.into_services()));
        let result = step.upgrade(&mut ActorContext::anonymous()).await;
        assert!(matches!(result, Err(DomainError::RoleNameAlreadyExists { .. })));
    }
}

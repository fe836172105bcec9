//! Creates the UI testers user group

use async_trait::async_trait;
use tracing::info;

use crate::domain::{ServiceContext, UserGroup};
use crate::error::DomainError;
use crate::upgrade::step::{StepBinding, UpgradeStep};

pub const UI_TESTERS_USER_GROUP_NAME: &str = "UI Testers";
pub const UI_TESTERS_USER_GROUP_DESCRIPTION: &str = "User group that contains all UI Tester users.";

pub struct UserGroupEnvironmentSetup {
    binding: StepBinding,
}

impl UserGroupEnvironmentSetup {
    pub fn new(binding: StepBinding) -> Self {
        Self { binding }
    }
}

#[async_trait]
impl UpgradeStep for UserGroupEnvironmentSetup {
    fn name(&self) -> &'static str {
        "UserGroupEnvironmentSetup"
    }

    fn binding(&self) -> &StepBinding {
        &self.binding
    }

    async fn setup_environment(&self, service_context: &ServiceContext) -> Result<(), DomainError> {
        let user_group = UserGroup::new(
            service_context.tenant_id,
            UI_TESTERS_USER_GROUP_NAME.to_string(),
            Some(UI_TESTERS_USER_GROUP_DESCRIPTION.to_string()),
            service_context.user_id,
        )?;

        let user_group = self.binding.services.user_groups.create(&user_group).await?;

        info!(user_group_id = %user_group.id, "Created user group {}", user_group.name);
        Ok(())
    }
}

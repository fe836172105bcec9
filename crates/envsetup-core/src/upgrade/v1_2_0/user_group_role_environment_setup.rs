//! Links the role from 1.0.0 to the user group from 1.1.0

use async_trait::async_trait;
use tracing::info;

use crate::domain::ServiceContext;
use crate::error::DomainError;
use crate::upgrade::step::{StepBinding, UpgradeStep};
use crate::upgrade::v1_0_0::UI_TESTER_ROLE_NAME;
use crate::upgrade::v1_1_0::UI_TESTERS_USER_GROUP_NAME;

pub struct UserGroupRoleEnvironmentSetup {
    binding: StepBinding,
}

impl UserGroupRoleEnvironmentSetup {
    pub fn new(binding: StepBinding) -> Self {
        Self { binding }
    }
}

#[async_trait]
impl UpgradeStep for UserGroupRoleEnvironmentSetup {
    fn name(&self) -> &'static str {
        "UserGroupRoleEnvironmentSetup"
    }

    fn binding(&self) -> &StepBinding {
        &self.binding
    }

    async fn setup_environment(&self, service_context: &ServiceContext) -> Result<(), DomainError> {
        let services = &self.binding.services;
        let tenant_id = service_context.tenant_id;

        // Both exist once 1.0.0 and 1.1.0 have run; a miss means they did not.
        let role = services
            .roles
            .find_by_name(&tenant_id, UI_TESTER_ROLE_NAME)
            .await?
            .ok_or_else(|| DomainError::RoleNotFound {
                tenant_id,
                name: UI_TESTER_ROLE_NAME.to_string(),
            })?;

        let user_group = services
            .user_groups
            .find_by_name(&tenant_id, UI_TESTERS_USER_GROUP_NAME)
            .await?
            .ok_or_else(|| DomainError::GroupNotFound {
                tenant_id,
                name: UI_TESTERS_USER_GROUP_NAME.to_string(),
            })?;

        services
            .role_assignments
            .assign_roles(&tenant_id, service_context.user_id, &user_group.id, &[role.id])
            .await?;

        info!(
            role_id = %role.id,
            user_group_id = %user_group.id,
            "Assigned role {} to user group {}", role.name, user_group.name
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Role, RoleAssignment, RoleType, UserGroup};
    use crate::services::ActorContext;
    use crate::test_support::MockPlatform;
    use envsetup_shared::LocalizedMap;
    use uuid::Uuid;

    fn ui_tester_role(tenant_id: Uuid) -> Role {
        Role::new(
            tenant_id,
            UI_TESTER_ROLE_NAME.to_string(),
            LocalizedMap::new(),
            LocalizedMap::new(),
            RoleType::Regular,
            None,
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_assigns_role_to_user_group() {
        let tenant_id = Uuid::new_v4();
        let role = ui_tester_role(tenant_id);
        let user_group = UserGroup::new(tenant_id, UI_TESTERS_USER_GROUP_NAME.to_string(), None, None).unwrap();
        let (role_id, user_group_id) = (role.id, user_group.id);

        let mut platform = MockPlatform::new();
        platform.roles.expect_find_by_name().returning(move |_, _| Ok(Some(role.clone())));
        platform
            .user_groups
            .expect_find_by_name()
            .returning(move |_, _| Ok(Some(user_group.clone())));
        platform
            .role_assignments
            .expect_assign_roles()
            .withf(move |tenant, acting, group, roles| {
                *tenant == tenant_id && acting.is_none() && *group == user_group_id && roles == [role_id]
            })
            .times(1)
            .returning(move |tenant, acting, group, roles| {
                Ok(roles
                    .iter()
                    .map(|role_id| RoleAssignment::new(*tenant, *group, *role_id, acting))
                    .collect())
            });

        let step = UserGroupRoleEnvironmentSetup::new(StepBinding::new(tenant_id, None, platform.into_services()));
        step.upgrade(&mut ActorContext::anonymous()).await.unwrap();
    }

    #[tokio::test]
    async fn test_missing_role_fails_fast() {
        let tenant_id = Uuid::new_v4();
        let mut platform = MockPlatform::new();
        platform.roles.expect_find_by_name().returning(|_, _| Ok(None));
        platform.user_groups.expect_find_by_name().never();
        platform.role_assignments.expect_assign_roles().never();

        let step = UserGroupRoleEnvironmentSetup::new(StepBinding::new(tenant_id, None, platform.into_services()));
        let result = step.upgrade(&mut ActorContext::anonymous()).await;

        assert!(matches!(result, Err(DomainError::RoleNotFound { name, .. }) if name == UI_TESTER_ROLE_NAME));
    }

    #[tokio::test]
    async fn test_missing_user_group_fails_fast() {
        let tenant_id = Uuid::new_v4();
        let role = ui_tester_role(tenant_id);

        let mut platform = MockPlatform::new();
        platform.roles.expect_find_by_name().returning(move |_, _| Ok(Some(role.clone())));
        platform.user_groups.expect_find_by_name().returning(|_, _| Ok(None));
        platform.role_assignments.expect_assign_roles().never();

        let step = UserGroupRoleEnvironmentSetup::new(StepBinding::new(tenant_id, None, platform.into_services()));
        let result = step.upgrade(&mut ActorContext::anonymous()).await;

        assert!(matches!(result, Err(DomainError::GroupNotFound { name, .. }) if name == UI_TESTERS_USER_GROUP_NAME));
    }
}

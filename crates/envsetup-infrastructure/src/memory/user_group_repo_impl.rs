// ============================================================================
// Environment Setup Infrastructure - In-Memory User Group Repository
// File: crates/envsetup-infrastructure/src/memory/user_group_repo_impl.rs
// ============================================================================
//! In-memory user group repository

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, info};
use uuid::Uuid;

use envsetup_core::domain::UserGroup;
use envsetup_core::error::DomainError;
use envsetup_core::repositories::UserGroupRepository;

use super::store::{backing_group, PortalChange, PortalStore};

pub struct MemUserGroupRepository {
    store: Arc<PortalStore>,
}

impl MemUserGroupRepository {
    pub fn new(store: Arc<PortalStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl UserGroupRepository for MemUserGroupRepository {
    async fn find_by_name(&self, tenant_id: &Uuid, name: &str) -> Result<Option<UserGroup>, DomainError> {
        Ok(self.store.state.read().find_user_group(tenant_id, name).cloned())
    }

    async fn create(&self, user_group: &UserGroup) -> Result<UserGroup, DomainError> {
        info!("Creating user group: {}", user_group.name);

        let mut state = self.store.state.write();

        if state.find_user_group(&user_group.tenant_id, &user_group.name).is_some() {
            error!(tenant_id = %user_group.tenant_id, "Duplicate user group name: {}", user_group.name);
            return Err(DomainError::UserGroupNameAlreadyExists {
                tenant_id: user_group.tenant_id,
                name: user_group.name.clone(),
            });
        }

        state.groups.push(backing_group(user_group));
        state.user_groups.push(user_group.clone());
        state.changes.push(PortalChange::UserGroupCreated {
            user_group_id: user_group.id,
            name: user_group.name.clone(),
        });

        info!("User group created successfully: {}", user_group.id);
        Ok(user_group.clone())
    }

    async fn find_member_ids(&self, user_group_id: &Uuid) -> Result<Vec<Uuid>, DomainError> {
        Ok(self
            .store
            .state
            .read()
            .user_group_members
            .get(user_group_id)
            .cloned()
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use envsetup_core::domain::GroupKind;
    use envsetup_core::repositories::GroupRepository;
    use crate::memory::MemGroupRepository;

    #[tokio::test]
    async fn test_create_registers_backing_group() {
        let store = Arc::new(PortalStore::new());
        let tenant_id = Uuid::new_v4();
        let repo = MemUserGroupRepository::new(store.clone());

        let user_group = UserGroup::new(tenant_id, "UI Testers".into(), None, None).unwrap();
        repo.create(&user_group).await.unwrap();

        let group = MemGroupRepository::new(store.clone())
            .find_by_name(&tenant_id, "UI Testers")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(group.id, user_group.group_id);
        assert_eq!(group.kind, GroupKind::UserGroup { user_group_id: user_group.id });

        let again = UserGroup::new(tenant_id, "ui testers".into(), None, None).unwrap();
        assert!(matches!(
            repo.create(&again).await,
            Err(DomainError::UserGroupNameAlreadyExists { .. })
        ));
        assert_eq!(store.changes().len(), 1);
    }
}

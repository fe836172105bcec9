//! Site id resolution for steps that scope their work to a site

use tracing::warn;
use uuid::Uuid;

use crate::error::DomainError;
use crate::repositories::PlatformServices;

/// Group id of the named site, falling back to the tenant's company group
/// when no group has that name. `None` when the resolved group is not a site.
pub async fn resolve_site_id(
    services: &PlatformServices,
    tenant_id: &Uuid,
    site_name: &str,
) -> Result<Option<Uuid>, DomainError> {
    let group = match services.groups.find_by_name(tenant_id, site_name).await? {
        Some(group) => group,
        None => {
            warn!(%tenant_id, site_name, "Site not found, using the company group");
            services
                .groups
                .find_company_group(tenant_id)
                .await?
                .ok_or_else(|| DomainError::GroupNotFound {
                    tenant_id: *tenant_id,
                    name: site_name.to_string(),
                })?
        }
    };

    if !group.is_site() {
        warn!(%tenant_id, group = %group.name, kind = group.kind.as_str(), "Resolved group is not a site");
        return Ok(None);
    }

    Ok(Some(group.id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Group, GroupKind};
    use crate::test_support::MockPlatform;

    #[tokio::test]
    async fn test_named_site() {
        let tenant_id = Uuid::new_v4();
        let site = Group::new(tenant_id, "Intranet".into(), GroupKind::RegularSite);
        let site_id = site.id;

        let mut platform = MockPlatform::new();
        platform
            .groups
            .expect_find_by_name()
            .withf(|_, name| name == "Intranet")
            .returning(move |_, _| Ok(Some(site.clone())));
        platform.groups.expect_find_company_group().never();

        let services = platform.into_services();
        assert_eq!(resolve_site_id(&services, &tenant_id, "Intranet").await.unwrap(), Some(site_id));
    }

    #[tokio::test]
    async fn test_falls_back_to_company_group() {
        let tenant_id = Uuid::new_v4();
        let global = Group::new(tenant_id, "Global".into(), GroupKind::Company);
        let global_id = global.id;

        let mut platform = MockPlatform::new();
        platform.groups.expect_find_by_name().returning(|_, _| Ok(None));
        platform
            .groups
            .expect_find_company_group()
            .returning(move |_| Ok(Some(global.clone())));

        let services = platform.into_services();
        assert_eq!(resolve_site_id(&services, &tenant_id, "Missing").await.unwrap(), Some(global_id));
    }

    #[tokio::test]
    async fn test_non_site_group() {
        let tenant_id = Uuid::new_v4();
        let testers = Group::new(
            tenant_id,
            "UI Testers".into(),
            GroupKind::UserGroup { user_group_id: Uuid::new_v4() },
        );

        let mut platform = MockPlatform::new();
        platform
            .groups
            .expect_find_by_name()
            .returning(move |_, _| Ok(Some(testers.clone())));

        let services = platform.into_services();
        assert_eq!(resolve_site_id(&services, &tenant_id, "UI Testers").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_no_group_at_all() {
        let mut platform = MockPlatform::new();
        platform.groups.expect_find_by_name().returning(|_, _| Ok(None));
        platform.groups.expect_find_company_group().returning(|_| Ok(None));

        let services = platform.into_services();
        let result = resolve_site_id(&services, &Uuid::new_v4(), "Intranet").await;
        assert!(matches!(result, Err(DomainError::GroupNotFound { .. })));
    }
}

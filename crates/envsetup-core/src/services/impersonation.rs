// ============================================================================
// Environment Setup Core - Impersonation Scope
// File: crates/envsetup-core/src/services/impersonation.rs
// Description: Runs an upgrade step as the tenant administrator
// ============================================================================
//! Remote (permission-checked) services authorize against the actor context.
//! Upgrades start anonymous, so each step borrows the administrator's
//! identity for its duration through an [`ImpersonationGuard`].

use std::future::Future;
use std::sync::Arc;

use tracing::{debug, warn};
use uuid::Uuid;

use crate::domain::ServiceContext;
use crate::error::DomainError;
use crate::repositories::{PermissionChecker, PlatformServices};

/// Identity and permission checker that facade calls are authorized against.
#[derive(Debug, Default)]
pub struct ActorContext {
    principal: Option<Uuid>,
    permission_checker: Option<Arc<dyn PermissionChecker>>,
    checker_swaps: u64,
}

impl ActorContext {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn signed_in(user_id: Uuid, permission_checker: Arc<dyn PermissionChecker>) -> Self {
        Self {
            principal: Some(user_id),
            permission_checker: Some(permission_checker),
            checker_swaps: 0,
        }
    }

    pub fn principal(&self) -> Option<Uuid> {
        self.principal
    }

    pub fn is_anonymous(&self) -> bool {
        self.principal.is_none()
    }

    pub fn set_principal(&mut self, user_id: Option<Uuid>) -> Option<Uuid> {
        std::mem::replace(&mut self.principal, user_id)
    }

    pub fn permission_checker(&self) -> Option<&Arc<dyn PermissionChecker>> {
        self.permission_checker.as_ref()
    }

    /// Install a checker, returning the one it replaces.
    pub fn replace_permission_checker(
        &mut self,
        checker: Option<Arc<dyn PermissionChecker>>,
    ) -> Option<Arc<dyn PermissionChecker>> {
        self.checker_swaps += 1;
        std::mem::replace(&mut self.permission_checker, checker)
    }

    /// Number of times a checker has been installed or restored.
    pub fn checker_swaps(&self) -> u64 {
        self.checker_swaps
    }
}

/// Holds the actor context while a step runs as the administrator. Dropping
/// the guard puts the previous permission checker back; the principal stays
/// on the administrator.
#[must_use = "the previous permission checker is restored when the guard is dropped"]
pub struct ImpersonationGuard<'a> {
    context: &'a mut ActorContext,
    previous_checker: Option<Option<Arc<dyn PermissionChecker>>>,
}

impl<'a> ImpersonationGuard<'a> {
    /// Switch an anonymous context to `admin_user_id`. A signed-in context is
    /// left alone, and without a usable administrator the step runs
    /// anonymously.
    pub async fn enter(
        context: &'a mut ActorContext,
        services: &PlatformServices,
        admin_user_id: Option<Uuid>,
    ) -> Result<ImpersonationGuard<'a>, DomainError> {
        let mut guard = Self {
            context,
            previous_checker: None,
        };

        if !guard.context.is_anonymous() {
            debug!(principal = ?guard.context.principal(), "Actor already set, running as current user");
            return Ok(guard);
        }

        let Some(admin_user_id) = admin_user_id else {
            warn!("No administrator available, running upgrade step anonymously");
            return Ok(guard);
        };

        let Some(admin) = services.users.find_by_id(&admin_user_id).await? else {
            warn!(%admin_user_id, "Administrator no longer exists, running upgrade step anonymously");
            return Ok(guard);
        };

        guard.context.set_principal(Some(admin.id));
        let admin_checker = services.permission_checkers.create(&admin);
        let previous = guard.context.replace_permission_checker(Some(admin_checker));
        guard.previous_checker = Some(previous);

        debug!(%admin_user_id, "Impersonating administrator");
        Ok(guard)
    }

    pub fn is_impersonating(&self) -> bool {
        self.previous_checker.is_some()
    }
}

impl Drop for ImpersonationGuard<'_> {
    fn drop(&mut self) {
        if let Some(previous) = self.previous_checker.take() {
            self.context.replace_permission_checker(previous);
            debug!("Restored previous permission checker");
        }
    }
}

/// Run `body` as the tenant administrator with a fresh [`ServiceContext`].
pub async fn with_admin_context<F, Fut, T>(
    context: &mut ActorContext,
    services: &PlatformServices,
    tenant_id: Uuid,
    admin_user_id: Option<Uuid>,
    body: F,
) -> Result<T, DomainError>
where
    F: FnOnce(ServiceContext) -> Fut,
    Fut: Future<Output = Result<T, DomainError>>,
{
    let guard = ImpersonationGuard::enter(context, services, admin_user_id).await?;

    let service_context = ServiceContext::new(tenant_id, admin_user_id);
    let result = body(service_context).await;

    drop(guard);
    result
}

// ============================================================================
// Environment Setup Core - Upgrade Step
// File: crates/envsetup-core/src/upgrade/step.rs
// ============================================================================
//! Base of every environment setup step

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::ServiceContext;
use crate::error::DomainError;
use crate::repositories::PlatformServices;
use crate::services::{resolve_site_id, with_admin_context, ActorContext};

/// Tenant, administrator and services a step is bound to at registration.
#[derive(Clone)]
pub struct StepBinding {
    pub tenant_id: Uuid,
    /// `None` when no administrator could be resolved.
    pub admin_user_id: Option<Uuid>,
    pub services: PlatformServices,
}

impl StepBinding {
    pub fn new(tenant_id: Uuid, admin_user_id: Option<Uuid>, services: PlatformServices) -> Self {
        Self {
            tenant_id,
            admin_user_id,
            services,
        }
    }

    /// See [`resolve_site_id`].
    pub async fn resolve_site_id(&self, site_name: &str) -> Result<Option<Uuid>, DomainError> {
        resolve_site_id(&self.services, &self.tenant_id, site_name).await
    }
}

/// One unit of environment setup work. Implementors provide
/// [`setup_environment`](Self::setup_environment); the host calls
/// [`upgrade`](Self::upgrade), which runs it as the tenant administrator.
#[async_trait]
pub trait UpgradeStep: Send + Sync {
    fn name(&self) -> &'static str;

    fn binding(&self) -> &StepBinding;

    async fn setup_environment(&self, service_context: &ServiceContext) -> Result<(), DomainError>;

    async fn upgrade(&self, actor: &mut ActorContext) -> Result<(), DomainError> {
        let binding = self.binding();

        with_admin_context(
            actor,
            &binding.services,
            binding.tenant_id,
            binding.admin_user_id,
            |service_context| async move { self.setup_environment(&service_context).await },
        )
        .await
    }
}

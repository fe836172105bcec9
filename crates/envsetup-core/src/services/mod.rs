//! Domain services

pub mod admin_resolver;
pub mod impersonation;
pub mod site_lookup;

pub use admin_resolver::AdminResolver;
pub use impersonation::{with_admin_context, ActorContext, ImpersonationGuard};
pub use site_lookup::resolve_site_id;

use std::sync::Arc;

use anyhow::Context;
use tracing::{error, info};

use envsetup_core::domain::PortalUser;
use envsetup_core::services::ActorContext;
use envsetup_core::upgrade::{EnvironmentSetupRegistrator, UpgradeRunner};
use envsetup_infrastructure::{platform_services, MemReleaseRepository, PortalStore};
use envsetup_shared::config::{AppConfig, SeedSettings};
use envsetup_shared::constants::ADMINISTRATOR_ROLE_NAME;
use envsetup_shared::utils::mask_email;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load().context("failed to load configuration")?;

    // Initialize telemetry
    envsetup_shared::telemetry::init_telemetry(config.app.log_format)?;

    info!(env = %config.app.env, "{} starting...", config.app.name);

    // Seed the portal
    let store = Arc::new(PortalStore::new());
    seed_portal(&store, &config.seed)?;

    // Register steps against the default tenant
    let registrator = EnvironmentSetupRegistrator::new(
        config.upgrade.bundle_symbolic_name.clone(),
        platform_services(store.clone()),
    );
    let registry = registrator.register().await?;

    // Apply
    let runner = UpgradeRunner::new(Arc::new(MemReleaseRepository::new()));
    let mut actor = ActorContext::anonymous();

    let report = match runner.run(&registry, &mut actor).await {
        Ok(report) => report,
        Err(e) => {
            error!("Environment setup failed: {}", e);
            return Err(e.into());
        }
    };

    println!("{}", serde_json::to_string_pretty(&report)?);
    info!(changes = store.changes().len(), "Environment setup finished");

    Ok(())
}

/// Default tenant plus one administrator granted the `Administrator` role.
fn seed_portal(store: &PortalStore, seed: &SeedSettings) -> anyhow::Result<()> {
    let tenant = store.bootstrap_tenant(&seed.tenant_web_id, true);

    let screen_name = seed
        .admin_email
        .split('@')
        .next()
        .unwrap_or_default()
        .to_string();

    let admin = PortalUser::new(
        tenant.id,
        screen_name,
        seed.admin_email.clone(),
        Some(seed.admin_first_name.clone()),
        Some(seed.admin_last_name.clone()),
    )
    .context("invalid seed administrator")?;
    let admin = store.add_user(admin);

    let role = store
        .role(&tenant.id, ADMINISTRATOR_ROLE_NAME)
        .context("bootstrapped tenant has no administrator role")?;
    store.grant_role_to_user(role.id, admin.id);

    info!(
        tenant_id = %tenant.id,
        admin = %mask_email(&admin.email),
        "Seeded portal"
    );
    Ok(())
}

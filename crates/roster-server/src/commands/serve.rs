use anyhow::Context;

use roster_config::RosterConfig;
use roster_db::service::RosterService;
use roster_schema::SchemaRegistry;
use roster_server::{AppState, router, server};

use crate::cli::ServeArgs;

/// Handle `roster serve`.
pub async fn handle(args: &ServeArgs) -> anyhow::Result<()> {
    let config = load_config(args)?;
    tracing::info!(
        environment = %config.general.environment,
        database = %config.database.path,
        "starting roster"
    );

    let registry = SchemaRegistry::new().context("failed to build schema registry")?;
    let service = RosterService::new_local(&config.database.path)
        .await
        .with_context(|| format!("failed to open database at {}", config.database.path))?;

    let app = router(AppState::new(service, registry));
    server::serve(&config.server, app)
        .await
        .with_context(|| format!("server on {} failed", config.server.socket_addr()))
}

fn load_config(args: &ServeArgs) -> anyhow::Result<RosterConfig> {
    let mut config = RosterConfig::load_with_dotenv(args.config.as_deref())
        .context("failed to load config")?;

    if let Some(host) = &args.host {
        config.server.host.clone_from(host);
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(database) = &args.database {
        config.database.path.clone_from(database);
    }
    config.validate().context("invalid configuration")?;
    Ok(config)
}

//! Handler for the `serve` command.

use tracing::info;

use crate::adapter::inbound::cli::command::ServeArgs;
use crate::adapter::inbound::http;
use crate::error::Result;
use crate::infrastructure::bootstrap::build_store;
use crate::infrastructure::config::settings::{ENV_DATABASE_URL, ENV_HOST, ENV_PORT};
use crate::infrastructure::config::Config;

/// Load configuration, apply CLI overrides, and run the server.
pub async fn execute(args: &ServeArgs) -> Result<()> {
    let config = resolve_config(args)?;
    config.init_logging();

    info!(
        database = %config.database.url,
        host = %config.server.host,
        port = config.server.port,
        "todopad starting"
    );

    let store = build_store(&config.database)?;
    http::serve(&config.server, store).await
}

/// Config file, then environment, then command-line flags.
pub fn resolve_config(args: &ServeArgs) -> Result<Config> {
    resolve_config_with(args, |key| std::env::var(key).ok())
}

/// [`resolve_config`] reading environment variables through `lookup`.
///
/// Variables shadowed by a flag are not read, and validation runs once on
/// the merged result.
pub fn resolve_config_with<F>(args: &ServeArgs, lookup: F) -> Result<Config>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = Config::read(args.config.config.as_ref())?;
    config.apply_env(|key| {
        let shadowed = match key {
            ENV_HOST => args.host.is_some(),
            ENV_PORT => args.port.is_some(),
            ENV_DATABASE_URL => args.database.is_some(),
            _ => false,
        };
        if shadowed {
            None
        } else {
            lookup(key)
        }
    })?;

    if let Some(ref host) = args.host {
        config.server.host = host.clone();
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(ref database) = args.database {
        config.database.url = database.clone();
    }
    if let Some(ref level) = args.log_level {
        config.logging.level = level.clone();
    }
    if args.json_logs {
        config.logging.format = "json".to_string();
    }

    config.validate()?;
    Ok(config)
}

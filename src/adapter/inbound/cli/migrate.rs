//! Handler for the `migrate` command.

use crate::adapter::inbound::cli::command::MigrateArgs;
use crate::adapter::inbound::cli::output;
use crate::error::Result;
use crate::infrastructure::bootstrap::prepare_database;
use crate::infrastructure::config::settings::ENV_DATABASE_URL;
use crate::infrastructure::config::Config;

/// Bring the configured database schema up to date.
pub fn execute(args: &MigrateArgs) -> Result<()> {
    let config = resolve_config_with(args, |key| std::env::var(key).ok())?;
    config.init_logging();

    prepare_database(&config.database)?;
    output::success(&format!("Database {} is up to date", config.database.url));
    Ok(())
}

/// Config file, then `TODOPAD_DATABASE_URL`, then `--database`.
///
/// Listener settings play no part in migrating, so only the database and
/// logging sections are validated.
pub fn resolve_config_with<F>(args: &MigrateArgs, lookup: F) -> Result<Config>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = Config::read(args.config.config.as_ref())?;
    config.apply_env(|key| {
        if key == ENV_DATABASE_URL && args.database.is_none() {
            lookup(key)
        } else {
            None
        }
    })?;
    if let Some(ref database) = args.database {
        config.database.url = database.clone();
    }

    config.validate_database()?;
    config.validate_logging()?;
    Ok(config)
}

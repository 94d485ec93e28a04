//! Handler for the `check` command.

use crate::adapter::inbound::cli::command::ConfigPathArg;
use crate::adapter::inbound::cli::output;
use crate::error::Result;
use crate::infrastructure::config::Config;

/// Validate configuration and print the effective settings.
pub fn execute(args: &ConfigPathArg) -> Result<()> {
    let config = Config::load_or_default(args.config.as_ref())?;

    output::section("Configuration Check");
    match &args.config {
        Some(path) => output::field("Config", path.display()),
        None => output::field("Config", "(defaults)"),
    }
    output::success("Configuration is valid");

    output::section("Summary");
    output::field("Listen", format!("{}:{}", config.server.host, config.server.port));
    output::field(
        "Workers",
        config
            .server
            .workers
            .map_or_else(|| "auto".to_string(), |w| w.to_string()),
    );
    output::field("Database", &config.database.url);
    output::field("Pool size", config.database.pool_size);
    output::field("Log level", &config.logging.level);
    output::field("Log format", &config.logging.format);

    Ok(())
}

//! Command-line interface definitions.
//!
//! Defines the CLI structure for the todopad application using `clap`.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Server-rendered todo list backed by SQLite
#[derive(Parser, Debug)]
#[command(name = "todopad")]
#[command(version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands for the todopad CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the web server (foreground)
    Serve(ServeArgs),

    /// Apply pending database migrations and exit
    Migrate(MigrateArgs),

    /// Validate configuration without starting the server
    Check(ConfigPathArg),
}

/// Shared argument for commands that only need a config path.
#[derive(Args, Debug, Clone, Default)]
pub struct ConfigPathArg {
    /// Path to configuration file (defaults apply when omitted)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Arguments for the `serve` subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct ServeArgs {
    #[command(flatten)]
    pub config: ConfigPathArg,

    /// Override listen interface
    #[arg(long)]
    pub host: Option<String>,

    /// Override listen port
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Override database path (or ":memory:")
    #[arg(long)]
    pub database: Option<String>,

    /// Override log level (trace, debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Use JSON log format instead of pretty
    #[arg(long)]
    pub json_logs: bool,
}

/// Arguments for the `migrate` subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct MigrateArgs {
    #[command(flatten)]
    pub config: ConfigPathArg,

    /// Override database path
    #[arg(long)]
    pub database: Option<String>,
}

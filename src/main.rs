use clap::Parser;
use todopad::adapter::inbound::cli::{check, migrate, output, serve, Cli, Commands};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    let result = match &cli.command {
        Commands::Serve(args) => serve::execute(args).await,
        Commands::Migrate(args) => migrate::execute(args),
        Commands::Check(args) => check::execute(args),
    };

    match result {
        Ok(()) => {
            if matches!(cli.command, Commands::Serve(_)) {
                info!("todopad stopped");
            }
        }
        Err(e) => {
            error!(error = %e, "Fatal error");
            output::error(&e.to_string());
            std::process::exit(1);
        }
    }
}

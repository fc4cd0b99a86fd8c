//! vetta - AI-assisted interview client
//!
//! Entry point for the vetta CLI application.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use vetta::cli::{Cli, Commands};
use vetta::config::Settings;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    // Parse CLI arguments
    let cli = Cli::parse();

    match cli.command {
        Commands::Completions { shell } => {
            vetta::cli::completions::print(shell);
        }
        command => {
            // Load configuration only for runtime commands.
            let settings = Settings::load()?;

            // Execute command
            match command {
                Commands::Upload {
                    name,
                    email,
                    resume,
                } => {
                    vetta::cli::commands::upload_resume(&settings, &name, &email, &resume).await?;
                }
                Commands::Results { candidate_id } => {
                    vetta::cli::commands::show_results(&settings, candidate_id).await?;
                }
                Commands::Candidates => {
                    vetta::cli::commands::list_candidates(&settings).await?;
                }
                Commands::Candidate { candidate_id } => {
                    vetta::cli::commands::show_candidate(&settings, &candidate_id).await?;
                }
                Commands::Tui => {
                    vetta::tui::run(&settings).await?;
                }
                Commands::Config(config_cmd) => {
                    vetta::cli::commands::config_command(&settings, config_cmd)?;
                }
                Commands::Completions { .. } => unreachable!(),
            }
        }
    }

    Ok(())
}

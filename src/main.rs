use clap::{Parser, Subcommand};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod cli;

#[derive(Parser)]
#[command(name = "strata")]
#[command(about = "Dependency change detection for runtime layer packaging")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Report whether dependencies changed since the last publish
    Changed,
    /// Print the layer cache key for the local manifest
    Checksum,
    /// Verify the host runtime against the required version
    VerifyRuntime {
        /// Runtime specifier (e.g., "python3.11"); defaults to the configured one
        specifier: Option<String>,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Changed => cli::changed::run().await,
        Commands::Checksum => cli::checksum::run(),
        Commands::VerifyRuntime { specifier } => cli::verify_runtime::run(specifier).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

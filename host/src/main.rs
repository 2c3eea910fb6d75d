//! Roast proof service: CLI and HTTP server
//!
//! Usage:
//!   roast-prover serve [--port <port>] [prover options]
//!   roast-prover prove --name <name> [prover options]

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use roast_proof_host::{
    cli,
    config::ProverConfig,
    runner::CommandRunner,
    server::{self, AppState},
};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "roast-prover", about = "SP1 Roast Proof Service")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP proving service
    Serve {
        /// Port to listen on
        #[arg(short, long, env = "PORT", default_value = "3000")]
        port: u16,
        #[command(flatten)]
        prover: ProverConfig,
    },
    /// Run the prover once and print the response
    Prove {
        /// Name to prove
        #[arg(short, long)]
        name: String,
        #[command(flatten)]
        prover: ProverConfig,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Cli::parse();

    match args.command {
        Commands::Serve { port, prover } => {
            let runner = CommandRunner::from_config(&prover);
            tracing::info!(working_dir = %runner.working_dir().display(), "Prover configured");

            let app = server::build_router(AppState {
                runner: Arc::new(runner),
            });

            let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port))
                .await
                .with_context(|| format!("Failed to bind port {}", port))?;
            tracing::info!("Proof Server running on http://localhost:{}", port);
            axum::serve(listener, app).await?;
        }
        Commands::Prove { name, prover } => {
            let runner = CommandRunner::from_config(&prover);
            cli::prove_once(&runner, &name, &mut std::io::stdout()).await?;
        }
    }

    Ok(())
}

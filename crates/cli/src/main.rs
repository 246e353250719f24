//! Basket CLI - Tools for exercising the basket engine without a server.
//!
//! # Usage
//!
//! ```bash
//! # Replay a scripted scenario and log every result
//! basket-cli replay crates/cli/scenarios/checkout.yaml
//!
//! # Also log the final state of every basket
//! basket-cli replay crates/cli/scenarios/checkout.yaml --snapshot
//! ```
//!
//! # Commands
//!
//! - `replay` - Run a YAML script of add/remove/basket/checkout steps

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "basket-cli")]
#[command(author, version, about = "Basket engine CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a YAML script against a fresh basket store
    Replay {
        /// Path to the script file
        file: String,

        /// Log every stored basket after the last step
        #[arg(long)]
        snapshot: bool,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Replay { file, snapshot } => {
            commands::replay::replay(&file, snapshot).await?;
        }
    }
    Ok(())
}

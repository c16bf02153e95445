//! tokenctl - operator tool for bank session tokens
//!
//! Issues and inspects tokens with the same configuration the service uses.

use anyhow::Context;
use bank_token::utils::logging::init_logging;
use bank_token::{AppState, Config};
use clap::{Parser, Subcommand};
use rand::distributions::Alphanumeric;
use rand::{Rng, thread_rng};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "tokenctl", version, about = "Issue and verify bank session tokens")]
struct Cli {
    /// YAML configuration file; environment variables are used when absent
    #[arg(short, long, env = "TOKENCTL_CONFIG", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Issue an access token for a subject
    Issue {
        /// Principal the token asserts
        #[arg(short, long)]
        subject: String,
        /// Lifetime in seconds, overriding the configured access token duration
        #[arg(short, long)]
        duration: Option<u64>,
    },
    /// Verify a token and print its payload
    Verify {
        /// Token to verify
        token: String,
    },
    /// Generate a random 32-character symmetric key
    GenKey,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    match cli.command {
        Command::GenKey => {
            println!("{}", generate_symmetric_key());
            Ok(ExitCode::SUCCESS)
        }
        Command::Issue { subject, duration } => {
            let mut config = load_config(cli.config.as_deref()).await?;
            if let Some(duration) = duration {
                config.token.access_token_duration = duration;
                config.validate().context("invalid duration")?;
            }

            let state = AppState::new(config).context("cannot create token maker")?;
            let response = state.issue_access_token(&subject)?;
            println!("{}", serde_json::to_string_pretty(&response)?);
            Ok(ExitCode::SUCCESS)
        }
        Command::Verify { token } => {
            let config = load_config(cli.config.as_deref()).await?;
            let state = AppState::new(config).context("cannot create token maker")?;

            match state.verify_access_token(token.trim()) {
                Ok(payload) => {
                    println!("{}", serde_json::to_string_pretty(&payload)?);
                    Ok(ExitCode::SUCCESS)
                }
                Err(e) => {
                    eprintln!("Rejected: {} ({})", e, e.code());
                    Ok(ExitCode::FAILURE)
                }
            }
        }
    }
}

async fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let config = match path {
        Some(path) => Config::from_file(path).await,
        None => Config::from_env(),
    }
    .context("cannot load config")?;

    init_logging(&config.logging);
    Ok(config)
}

/// Random alphanumeric key, valid for both makers
fn generate_symmetric_key() -> String {
    thread_rng()
        .sample_iter(&Alphanumeric)
        .take(bank_token::token::SYMMETRIC_KEY_LEN)
        .map(char::from)
        .collect()
}

use std::process;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use wpsmoke::{client, config, smoke};
use wpsmoke::models::{AuthMode, Credentials};

#[derive(Parser)]
#[command(name = "wpsmoke", about = "Smoke-test a wavepipe music server API")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Log in and exercise the fixed list of JSON endpoints
    Smoke {
        /// Server host, e.g. localhost:8080 (falls back to config/env)
        host: Option<String>,

        /// Authenticate with the bare session key instead of per-request
        /// HMAC signatures
        #[arg(long)]
        session_key: bool,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Smoke { host, session_key } => {
            let mode = if session_key {
                AuthMode::SessionKey
            } else {
                AuthMode::Signed
            };
            if let Err(e) = run_smoke(host, mode).await {
                eprintln!("Error: {e:#}");
                process::exit(1);
            }
        }
    }
}

async fn run_smoke(host: Option<String>, mode: AuthMode) -> Result<()> {
    // 1. Load config
    let cfg = config::load_config()?;

    let host = host
        .or(cfg.host)
        .context("No host provided. Pass one as an argument or set WPSMOKE_HOST")?;
    let base_url = if host.contains("://") {
        host
    } else {
        format!("http://{host}")
    };

    let username = match cfg.username {
        Some(u) => u,
        None => config::prompt_username()?,
    };
    let password = match cfg.password {
        Some(p) => p,
        None => config::prompt_password()?,
    };

    let http = reqwest::Client::new();

    // 2. Login
    eprintln!("Logging in to {base_url}...");
    let session = client::login(&http, &base_url, &username, &password).await?;

    // 3. Derive credentials for the requested auth mode
    let credentials = Credentials::from_session(&session, mode)?;

    // 4. Walk the endpoint list
    let wavepipe = client::WavepipeClient::new(http, base_url, credentials);
    smoke::run(&wavepipe).await
}

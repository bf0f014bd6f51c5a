//! msfchat - assistant function-call backend for Marvel Strike Force
//!
//! Main entry point for the CLI.

use anyhow::Context;
use clap::Parser;
use msfchat_app::utils::init_tracing;
use msfchat_app::{run_call, run_serve, run_tools, AppContext, Cli, Command};
use tokio::io::BufReader;
use tracing::{debug, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load environment variables from .env before anything reads MSF_*
    let dotenv = dotenvy::dotenv();

    init_tracing(cli.json_logs).map_err(|e| anyhow::anyhow!("failed to initialize logging: {e}"))?;

    match dotenv {
        Ok(path) => info!(path = %path.display(), "Loaded .env"),
        Err(e) => debug!(error = %e, "No .env file loaded"),
    }

    let mut stdout = tokio::io::stdout();

    match cli.command {
        Command::Tools => run_tools(&mut stdout).await.context("failed to write tool catalog")?,
        Command::Call { name, args } => {
            let ctx = AppContext::load(cli.config).context("failed to initialize msfchat")?;
            run_call(&ctx.dispatcher, &name, &args, &mut stdout)
                .await
                .context("failed to write call output")?;
        }
        Command::Serve => {
            let ctx = AppContext::load(cli.config).context("failed to initialize msfchat")?;
            let stdin = BufReader::new(tokio::io::stdin());
            run_serve(&ctx.dispatcher, stdin, &mut stdout)
                .await
                .context("tool-call stream failed")?;
        }
    }

    Ok(())
}

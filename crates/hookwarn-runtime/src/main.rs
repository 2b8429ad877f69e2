//! hookwarn: warning-banner poller daemon.
//! Polls configured endpoints at adaptive intervals and mirrors
//! response changes into banner surfaces.

use clap::Parser;

use hookwarn_runtime::{cli, cmd_check, daemon};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = cli::Cli::parse();

    match args.command {
        cli::Command::Run(opts) => {
            let filter = std::env::var("HOOKWARN_LOG")
                .or_else(|_| std::env::var("RUST_LOG"))
                .unwrap_or_else(|_| "info".to_string());
            tracing_subscriber::fmt()
                .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
                .init();

            tracing::info!("hookwarn daemon starting");
            daemon::run_daemon(opts).await?;
        }
        cli::Command::Check(opts) => {
            cmd_check::cmd_check(&opts).await?;
        }
    }

    Ok(())
}

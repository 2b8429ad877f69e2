//! CLI definition using clap derive.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "hookwarn", about = "adaptive warning-banner poller")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Start the daemon (bootstrap + one poll loop per banner)
    Run(RunOpts),
    /// Fetch an endpoint once and print the body
    Check(CheckOpts),
}

#[derive(clap::Args)]
pub struct RunOpts {
    /// Page manifest path
    #[arg(long, env = "HOOKWARN_MANIFEST", default_value = "hookwarn.json")]
    pub manifest: String,

    /// Directory where banner surfaces are written
    #[arg(long, env = "HOOKWARN_SURFACE_DIR", default_value = ".")]
    pub surface_dir: String,
}

#[derive(clap::Args)]
pub struct CheckOpts {
    /// Endpoint URL (quoted-concatenation markers are normalized)
    pub url: String,
}

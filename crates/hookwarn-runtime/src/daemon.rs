//! Daemon lifecycle: one poller task per activation, shutdown on
//! ctrl-c / SIGTERM.

use std::path::{Path, PathBuf};

use hookwarn_poller::engine::Poller;
use hookwarn_poller::fetch::HttpFetcher;
use hookwarn_poller::surface::FileSurface;

use crate::bootstrap;
use crate::cli::RunOpts;

/// Run the daemon: bootstrap the manifest, spawn a poller per
/// activation, wait for a shutdown signal.
pub async fn run_daemon(opts: RunOpts) -> anyhow::Result<()> {
    let activations = bootstrap::load_activations(Path::new(&opts.manifest));
    if activations.is_empty() {
        tracing::info!("no banner activations, daemon idle");
    }

    let surface_dir = PathBuf::from(&opts.surface_dir);
    std::fs::create_dir_all(&surface_dir)?;

    let fetcher = HttpFetcher::new()?;

    let mut handles = Vec::with_capacity(activations.len());
    for activation in activations {
        let target_id = activation.config.target_id.clone();
        let surface = FileSurface::new(&surface_dir, &target_id);
        let poller = Poller::configure(activation.config, fetcher.clone(), surface);

        tracing::info!(
            %target_id,
            gate_checked = activation.gate_checked,
            "banner poller configured"
        );
        handles.push(tokio::spawn(poller.start(activation.gate_checked)));
    }

    // Wait for shutdown signal (ctrl-c or SIGTERM)
    let shutdown = async {
        let ctrl_c = tokio::signal::ctrl_c();

        #[cfg(unix)]
        {
            let mut sigterm =
                tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
                    .expect("failed to register SIGTERM handler");
            tokio::select! {
                _ = ctrl_c => tracing::info!("received ctrl-c, shutting down"),
                _ = sigterm.recv() => tracing::info!("received SIGTERM, shutting down"),
            }
        }

        #[cfg(not(unix))]
        {
            ctrl_c.await.ok();
            tracing::info!("received ctrl-c, shutting down");
        }
    };

    shutdown.await;

    for handle in &handles {
        handle.abort();
    }
    tracing::info!("daemon stopped");
    Ok(())
}

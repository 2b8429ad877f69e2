//! Bootstrap: page manifest → gated poller activations.
//!
//! Mirrors the page-ready hook of the original widget: a missing
//! manifest, missing element, or missing attribute is a diagnostic,
//! never a fatal error — the banner simply does not activate.

use std::path::Path;

use hookwarn_core::manifest::{BootstrapSkip, PageManifest};
use hookwarn_core::types::PollerConfig;

/// One activated banner: configuration plus the gating control's state
/// as read from the manifest at bootstrap time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activation {
    pub config: PollerConfig,
    pub gate_checked: bool,
}

/// Read the manifest file and compute activations. Returns an empty
/// list on any bootstrap problem, after logging the reason.
pub fn load_activations(manifest_path: &Path) -> Vec<Activation> {
    let raw = match std::fs::read_to_string(manifest_path) {
        Ok(raw) => raw,
        Err(e) => {
            tracing::error!(
                "cannot read page manifest {}: {e}",
                manifest_path.display()
            );
            return Vec::new();
        }
    };

    let manifest = match PageManifest::from_json(&raw) {
        Ok(manifest) => manifest,
        Err(e) => {
            tracing::error!("invalid page manifest: {e}");
            return Vec::new();
        }
    };

    activations_from(&manifest)
}

/// Compute activations from a parsed manifest. Pure apart from logging.
pub fn activations_from(manifest: &PageManifest) -> Vec<Activation> {
    let (bindings, skips) = manifest.discover();

    for skip in &skips {
        match skip {
            BootstrapSkip::ElementMissing => {
                tracing::error!("warning element not found in page manifest");
            }
            BootstrapSkip::AttributesMissing { target_id } => {
                tracing::error!(%target_id, "warning element is missing data-url or data-input");
            }
        }
    }

    bindings
        .into_iter()
        .map(|binding| {
            if !manifest.controls.contains_key(&binding.input) {
                tracing::warn!(
                    input = %binding.input,
                    "gating control not present, treating as unchecked"
                );
            }
            let gate_checked = manifest.control_checked(&binding.input);
            Activation {
                config: PollerConfig {
                    target_id: binding.target_id,
                    url: binding.url,
                    input: binding.input,
                },
                gate_checked,
            }
        })
        .collect()
}

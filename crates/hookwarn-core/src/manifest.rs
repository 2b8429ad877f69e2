//! Page manifest: the bootstrap environment as a document.
//!
//! Stands in for the page the original widget lived on: a list of
//! elements with `data-url` / `data-input` attributes plus the checked
//! state of the page's boolean controls. Discovery finds warning-banner
//! mounts and reports a skip reason for anything declared but unusable.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fixed element id the bootstrap looks for.
pub const WARNING_ELEMENT_ID: &str = "gh-hooks-warn";

/// Id suffix accepted for additional banner mounts on the same page.
const WARNING_ID_SUFFIX: &str = "-hooks-warn";

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("failed to parse page manifest: {0}")]
    Parse(#[from] serde_json::Error),
}

// ─── Manifest model ─────────────────────────────────────────────────

/// One element declaration: id plus the data attributes a banner uses.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ElementDecl {
    pub id: String,
    #[serde(rename = "data-url", default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(
        rename = "data-input",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub input: Option<String>,
}

/// The page environment read once at bootstrap.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageManifest {
    /// Elements present on the page.
    #[serde(default)]
    pub elements: Vec<ElementDecl>,
    /// Boolean controls keyed by selector (e.g. `"#gh-trigger"`).
    #[serde(default)]
    pub controls: HashMap<String, bool>,
}

// ─── Discovery ──────────────────────────────────────────────────────

/// A usable warning-banner mount discovered in the manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WarningBinding {
    pub target_id: String,
    pub url: String,
    pub input: String,
}

/// Why a declared mount (or the whole page) yielded no binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BootstrapSkip {
    /// No warning element exists on the page.
    ElementMissing,
    /// Element found, but `data-url` or `data-input` is absent.
    AttributesMissing {
        target_id: String,
    },
}

impl PageManifest {
    /// Parse a manifest document.
    pub fn from_json(raw: &str) -> Result<Self, ManifestError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Checked state of the control at `selector`. A missing control
    /// reads as unchecked.
    pub fn control_checked(&self, selector: &str) -> bool {
        self.controls.get(selector).copied().unwrap_or(false)
    }

    /// Discover banner mounts: the fixed `gh-hooks-warn` id plus any
    /// element whose id ends in `-hooks-warn`. Returns bindings for the
    /// usable mounts and a skip reason per unusable one.
    pub fn discover(&self) -> (Vec<WarningBinding>, Vec<BootstrapSkip>) {
        let mut bindings = Vec::new();
        let mut skips = Vec::new();
        let mut saw_candidate = false;

        for element in &self.elements {
            if element.id != WARNING_ELEMENT_ID && !element.id.ends_with(WARNING_ID_SUFFIX) {
                continue;
            }
            saw_candidate = true;

            match (&element.url, &element.input) {
                (Some(url), Some(input)) => bindings.push(WarningBinding {
                    target_id: element.id.clone(),
                    url: url.clone(),
                    input: input.clone(),
                }),
                _ => skips.push(BootstrapSkip::AttributesMissing {
                    target_id: element.id.clone(),
                }),
            }
        }

        if !saw_candidate {
            skips.push(BootstrapSkip::ElementMissing);
        }

        (bindings, skips)
    }
}

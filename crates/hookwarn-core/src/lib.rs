//! hookwarn-core: pure logic for the banner poller.
//! Adaptive schedule state machine, endpoint URL normalization, and the
//! page manifest model. No IO, no async — callers pass every input in.

pub mod manifest;
pub mod normalize;
pub mod schedule;
pub mod types;

pub use manifest::{BootstrapSkip, ManifestError, PageManifest, WARNING_ELEMENT_ID, WarningBinding};
pub use normalize::normalize_url;
pub use schedule::{AdaptiveSchedule, DECAY_FACTOR, INITIAL_INTERVAL_SECS};
pub use types::{CycleOutcome, CycleRecord, PollerConfig};

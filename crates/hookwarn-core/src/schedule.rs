//! Adaptive polling schedule.
//!
//! The wait interval doubles while the polled resource is stable and
//! snaps back to the initial value the moment a change is observed:
//!
//! - **Reset on change**: any changed body returns the interval to
//!   `INITIAL_INTERVAL_SECS`.
//! - **Decay on stability**: each unchanged cycle multiplies the
//!   interval by `DECAY_FACTOR`, with no upper cap.
//! - **Hold on failure**: a failed cycle leaves the interval untouched;
//!   the schedule tracks content stability, and a transport failure
//!   says nothing about it.
//!
//! Pure state machine with no clock access — the runtime layer owns
//! sleeping.

use serde::{Deserialize, Serialize};

use crate::types::CycleOutcome;

/// Initial (and minimum) wait interval in seconds.
pub const INITIAL_INTERVAL_SECS: u64 = 10;

/// Multiplier applied to the interval after an unchanged cycle.
pub const DECAY_FACTOR: u64 = 2;

/// Per-poller wait interval state.
///
/// The interval is monotonically non-decreasing while consecutive
/// responses stay identical. Growth saturates at `u64::MAX` seconds,
/// which is unreachable in practice and introduces no behavioral cap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdaptiveSchedule {
    interval_secs: u64,
}

impl Default for AdaptiveSchedule {
    fn default() -> Self {
        Self::new()
    }
}

impl AdaptiveSchedule {
    pub fn new() -> Self {
        Self {
            interval_secs: INITIAL_INTERVAL_SECS,
        }
    }

    /// Current wait interval in seconds.
    pub fn interval_secs(&self) -> u64 {
        self.interval_secs
    }

    /// Fold one cycle outcome into the schedule and return the delay in
    /// seconds to wait before the next cycle.
    pub fn observe(&mut self, outcome: &CycleOutcome) -> u64 {
        match outcome {
            CycleOutcome::Changed { .. } => self.interval_secs = INITIAL_INTERVAL_SECS,
            CycleOutcome::Unchanged => {
                self.interval_secs = self.interval_secs.saturating_mul(DECAY_FACTOR);
            }
            CycleOutcome::Failed { .. } => {}
        }
        self.interval_secs
    }
}

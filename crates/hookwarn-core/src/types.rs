//! Shared types for the banner poller pipeline.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Immutable-after-setup configuration for one poller instance.
///
/// Mirrors the three bootstrap attributes of a banner mount: the id of
/// the render target, the endpoint to poll, and the selector of the
/// gating control. No validation happens here — the caller validates;
/// empty fields simply fail to fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PollerConfig {
    /// Id of the surface whose content is replaced with fetched text.
    pub target_id: String,
    /// Endpoint polled each cycle.
    pub url: String,
    /// Selector of the boolean control gating this poller.
    pub input: String,
}

/// Outcome of one poll cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleOutcome {
    /// Body differed from the previous observation and was rendered.
    Changed {
        body: String,
    },
    /// Body identical to the previous observation; nothing rendered.
    Unchanged,
    /// The cycle failed before a comparison could complete.
    Failed {
        reason: String,
    },
}

impl CycleOutcome {
    /// Short label for logging.
    pub fn label(&self) -> &'static str {
        match self {
            CycleOutcome::Changed { .. } => "changed",
            CycleOutcome::Unchanged => "unchanged",
            CycleOutcome::Failed { .. } => "failed",
        }
    }
}

/// One completed cycle with the delay chosen for the next one.
#[derive(Debug, Clone)]
pub struct CycleRecord {
    /// When the cycle started.
    pub observed_at: DateTime<Utc>,
    pub outcome: CycleOutcome,
    /// Seconds to wait before the next cycle.
    pub next_delay_secs: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_labels() {
        let changed = CycleOutcome::Changed {
            body: "warn".to_string(),
        };
        let failed = CycleOutcome::Failed {
            reason: "boom".to_string(),
        };
        assert_eq!(changed.label(), "changed");
        assert_eq!(CycleOutcome::Unchanged.label(), "unchanged");
        assert_eq!(failed.label(), "failed");
    }
}

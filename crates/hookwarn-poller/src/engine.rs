//! Per-banner poller instance.
//!
//! One `Poller` owns its configuration, its adaptive schedule, and the
//! last observed body — no module-global state, so any number of banner
//! mounts can poll independently in one process.

use chrono::{DateTime, Utc};
use tokio::time::{Duration, sleep};

use hookwarn_core::normalize::normalize_url;
use hookwarn_core::schedule::AdaptiveSchedule;
use hookwarn_core::types::{CycleOutcome, CycleRecord, PollerConfig};

use crate::fetch::Fetch;
use crate::surface::Surface;

/// Adaptive poller bound to one banner mount.
pub struct Poller<F, S> {
    config: PollerConfig,
    schedule: AdaptiveSchedule,
    last_body: Option<String>,
    last_change_at: Option<DateTime<Utc>>,
    fetcher: F,
    surface: S,
}

impl<F: Fetch, S: Surface> Poller<F, S> {
    /// Store the configuration, normalizing the endpoint URL once.
    ///
    /// No validation happens here: an empty url or target simply fails
    /// to fetch or render, and the failure is handled like any other
    /// cycle failure.
    pub fn configure(mut config: PollerConfig, fetcher: F, surface: S) -> Self {
        config.url = normalize_url(&config.url);
        Self {
            config,
            schedule: AdaptiveSchedule::new(),
            last_body: None,
            last_change_at: None,
            fetcher,
            surface,
        }
    }

    pub fn config(&self) -> &PollerConfig {
        &self.config
    }

    /// Current wait interval in seconds.
    pub fn interval_secs(&self) -> u64 {
        self.schedule.interval_secs()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Start polling. `gate_checked` is the gating control's state as
    /// read from the environment at call time: when unchecked the
    /// poller does nothing and returns — terminal, nothing re-checks
    /// the gate later. When checked, polls until the task is dropped.
    pub async fn start(mut self, gate_checked: bool) {
        if !gate_checked {
            tracing::debug!(
                target_id = %self.config.target_id,
                input = %self.config.input,
                "gating control unchecked, poller not started"
            );
            return;
        }

        loop {
            let record = self.cycle().await;
            tracing::debug!(
                target_id = %self.config.target_id,
                outcome = record.outcome.label(),
                next_delay_secs = record.next_delay_secs,
                "poll cycle complete"
            );
            sleep(Duration::from_secs(record.next_delay_secs)).await;
        }
    }

    /// Run one poll cycle: fetch, compare, render on change, adapt the
    /// schedule. Failures are folded into the outcome — they never
    /// propagate, so the loop cannot stall on a bad cycle.
    pub async fn cycle(&mut self) -> CycleRecord {
        let observed_at = Utc::now();
        let outcome = self.run_cycle().await;
        if let CycleOutcome::Failed { reason } = &outcome {
            tracing::warn!(
                target_id = %self.config.target_id,
                "poll cycle failed: {reason}"
            );
        }
        let next_delay_secs = self.schedule.observe(&outcome);
        CycleRecord {
            observed_at,
            outcome,
            next_delay_secs,
        }
    }

    async fn run_cycle(&mut self) -> CycleOutcome {
        let body = match self.fetcher.fetch_text(&self.config.url).await {
            Ok(body) => body,
            Err(e) => {
                return CycleOutcome::Failed {
                    reason: e.to_string(),
                };
            }
        };

        if self.last_body.as_deref() == Some(body.as_str()) {
            return CycleOutcome::Unchanged;
        }

        // Render before recording the body: a failed render leaves
        // `last_body` stale so the next successful cycle re-renders.
        if let Err(e) = self.surface.replace(&body) {
            return CycleOutcome::Failed {
                reason: e.to_string(),
            };
        }

        let now = Utc::now();
        if let Some(prev) = self.last_change_at {
            tracing::debug!(
                target_id = %self.config.target_id,
                stable_for_secs = (now - prev).num_seconds(),
                "banner content changed"
            );
        }
        self.last_change_at = Some(now);
        self.last_body = Some(body.clone());
        CycleOutcome::Changed { body }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;

    use crate::fetch::FetchError;
    use crate::surface::{MemorySurface, SurfaceError};

    use super::*;

    /// Pops scripted responses in order; exhaustion is a test bug.
    #[derive(Default)]
    struct ScriptedFetcher {
        responses: Arc<Mutex<VecDeque<Result<String, FetchError>>>>,
        urls: Arc<Mutex<Vec<String>>>,
    }

    impl ScriptedFetcher {
        fn push_ok(&self, body: &str) {
            self.responses
                .lock()
                .unwrap()
                .push_back(Ok(body.to_string()));
        }

        fn push_status(&self, status: u16) {
            self.responses
                .lock()
                .unwrap()
                .push_back(Err(FetchError::Status {
                    status,
                    url: "https://x/y".to_string(),
                }));
        }
    }

    #[async_trait]
    impl Fetch for ScriptedFetcher {
        async fn fetch_text(&self, url: &str) -> Result<String, FetchError> {
            self.urls.lock().unwrap().push(url.to_string());
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .expect("scripted fetcher exhausted")
        }
    }

    /// Always succeeds with the same body, counting calls.
    #[derive(Clone, Default)]
    struct CountingFetcher {
        calls: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl Fetch for CountingFetcher {
        async fn fetch_text(&self, _url: &str) -> Result<String, FetchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok("OK".to_string())
        }
    }

    /// Fails the first `failures_left` renders, then behaves normally.
    struct FlakySurface {
        failures_left: usize,
        inner: MemorySurface,
    }

    impl Surface for FlakySurface {
        fn replace(&mut self, text: &str) -> Result<(), SurfaceError> {
            if self.failures_left > 0 {
                self.failures_left -= 1;
                return Err(SurfaceError::Write {
                    path: "surface".to_string(),
                    source: std::io::Error::other("render refused"),
                });
            }
            self.inner.replace(text)
        }
    }

    fn config() -> PollerConfig {
        PollerConfig {
            target_id: "gh-hooks-warn".to_string(),
            url: "https://x/y".to_string(),
            input: "#chk".to_string(),
        }
    }

    // ── 1. First cycle renders and schedules the initial delay ──────

    #[tokio::test]
    async fn first_cycle_renders_body() {
        let fetcher = ScriptedFetcher::default();
        fetcher.push_ok("OK");
        let mut poller = Poller::configure(config(), fetcher, MemorySurface::new());

        let record = poller.cycle().await;

        assert_eq!(
            record.outcome,
            CycleOutcome::Changed {
                body: "OK".to_string()
            }
        );
        assert_eq!(record.next_delay_secs, 10);
        assert_eq!(poller.surface().content(), "OK");
    }

    // ── 2. Identical bodies double the delay and skip the render ────

    #[tokio::test]
    async fn stable_bodies_back_off_without_rendering() {
        let fetcher = ScriptedFetcher::default();
        for _ in 0..4 {
            fetcher.push_ok("same");
        }
        let mut poller = Poller::configure(config(), fetcher, MemorySurface::new());

        let mut delays = Vec::new();
        for _ in 0..4 {
            delays.push(poller.cycle().await.next_delay_secs);
        }

        assert_eq!(delays, vec![10, 20, 40, 80]);
        assert_eq!(poller.surface().replaced(), 1);
    }

    // ── 3. A change renders and resets the delay ────────────────────

    #[tokio::test]
    async fn change_resets_delay_and_rerenders() {
        let fetcher = ScriptedFetcher::default();
        fetcher.push_ok("old");
        fetcher.push_ok("old");
        fetcher.push_ok("old");
        fetcher.push_ok("new");
        let mut poller = Poller::configure(config(), fetcher, MemorySurface::new());

        for _ in 0..3 {
            poller.cycle().await;
        }
        assert_eq!(poller.interval_secs(), 40);

        let record = poller.cycle().await;
        assert_eq!(record.next_delay_secs, 10);
        assert_eq!(poller.surface().content(), "new");
        assert_eq!(poller.surface().replaced(), 2);
    }

    // ── 4. Failed fetch holds the delay and the loop survives ───────

    #[tokio::test]
    async fn failed_fetch_holds_delay_and_recovers() {
        let fetcher = ScriptedFetcher::default();
        fetcher.push_ok("body");
        fetcher.push_ok("body");
        fetcher.push_status(503);
        fetcher.push_ok("body");
        let mut poller = Poller::configure(config(), fetcher, MemorySurface::new());

        poller.cycle().await;
        poller.cycle().await;
        assert_eq!(poller.interval_secs(), 20);

        let failed = poller.cycle().await;
        assert_eq!(failed.outcome.label(), "failed");
        assert_eq!(failed.next_delay_secs, 20);
        assert_eq!(poller.surface().replaced(), 1);

        // Next cycle proceeds normally: still the same body, decay resumes.
        let record = poller.cycle().await;
        assert_eq!(record.outcome, CycleOutcome::Unchanged);
        assert_eq!(record.next_delay_secs, 40);
    }

    // ── 5. Failed render leaves last_body stale for a re-render ─────

    #[tokio::test]
    async fn failed_render_is_retried_as_change() {
        let fetcher = ScriptedFetcher::default();
        fetcher.push_ok("warn");
        fetcher.push_ok("warn");
        let surface = FlakySurface {
            failures_left: 1,
            inner: MemorySurface::new(),
        };
        let mut poller = Poller::configure(config(), fetcher, surface);

        let record = poller.cycle().await;
        assert_eq!(record.outcome.label(), "failed");
        assert_eq!(record.next_delay_secs, 10);

        // Same body again: still a change, because the failed render
        // never recorded it.
        let record = poller.cycle().await;
        assert_eq!(
            record.outcome,
            CycleOutcome::Changed {
                body: "warn".to_string()
            }
        );
        assert_eq!(poller.surface().inner.content(), "warn");
    }

    // ── 6. configure normalizes the endpoint URL once ───────────────

    #[tokio::test]
    async fn configure_normalizes_url() {
        let fetcher = ScriptedFetcher::default();
        fetcher.push_ok("OK");
        let urls = Arc::clone(&fetcher.urls);

        let mut cfg = config();
        cfg.url = "https://a.example/'+'endpoint".to_string();
        let mut poller = Poller::configure(cfg, fetcher, MemorySurface::new());

        assert_eq!(poller.config().url, "https://a.example/endpoint");
        poller.cycle().await;
        assert_eq!(
            urls.lock().unwrap().clone(),
            vec!["https://a.example/endpoint".to_string()]
        );
    }

    // ── 7. Unchecked gate never fetches ─────────────────────────────

    #[tokio::test]
    async fn unchecked_gate_never_fetches() {
        let fetcher = CountingFetcher::default();
        let calls = Arc::clone(&fetcher.calls);

        Poller::configure(config(), fetcher, MemorySurface::new())
            .start(false)
            .await;

        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    // ── 8. Checked gate polls repeatedly on the schedule ────────────

    #[tokio::test(start_paused = true)]
    async fn checked_gate_keeps_polling() {
        let fetcher = CountingFetcher::default();
        let calls = Arc::clone(&fetcher.calls);

        let handle = tokio::spawn(
            Poller::configure(config(), fetcher, MemorySurface::new()).start(true),
        );

        // Cycles land at t=0, 10, 30 (10 → 20 → 40 on a stable body).
        sleep(Duration::from_secs(35)).await;
        handle.abort();

        assert!(calls.load(Ordering::SeqCst) >= 3);
    }
}

// Wait - Network-idle detection for client-side navigation
//
// `goto()` can wait for `networkidle` on its own, but clicking a tab in a
// client-side router never triggers a navigation the driver can wait on.
// Instead the page is probed until it has been quiet for the idle window:
// - document.readyState is "complete"
// - no fetch()/XMLHttpRequest is in flight (counted by NETWORK_TRACKER_SCRIPT)
// - no new resource timing entries appeared

use crate::error::{Error, Result};
use playwright_rs::Page;
use serde::Deserialize;
use std::time::{Duration, Instant};

/// Init script that counts in-flight fetch and XHR requests.
///
/// Installed on every browser context before the application's own scripts
/// run, so requests issued during hydration are counted too.
pub const NETWORK_TRACKER_SCRIPT: &str = r#"(() => {
  if (window.__e2eNetwork) return;
  const state = { inflight: 0 };
  window.__e2eNetwork = state;
  const settle = () => { state.inflight = Math.max(0, state.inflight - 1); };
  if (typeof window.fetch === "function") {
    const originalFetch = window.fetch;
    window.fetch = function (...args) {
      state.inflight += 1;
      try {
        return originalFetch.apply(this, args).finally(settle);
      } catch (err) {
        settle();
        throw err;
      }
    };
  }
  if (typeof XMLHttpRequest === "function") {
    const originalSend = XMLHttpRequest.prototype.send;
    XMLHttpRequest.prototype.send = function (...args) {
      state.inflight += 1;
      this.addEventListener("loadend", settle, { once: true });
      return originalSend.apply(this, args);
    };
  }
})();"#;

const PROBE_SCRIPT: &str = r#"() => ({
  readyState: document.readyState,
  inflight: window.__e2eNetwork ? window.__e2eNetwork.inflight : 0,
  resources: performance.getEntriesByType("resource").length
})"#;

/// Snapshot of the page's network activity.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkProbe {
    pub ready_state: String,
    pub inflight: u32,
    pub resources: u64,
}

impl NetworkProbe {
    fn is_quiet(&self) -> bool {
        self.ready_state == "complete" && self.inflight == 0
    }
}

/// Tracks how long the page has been quiet.
#[derive(Debug)]
pub struct IdleTracker {
    window: Duration,
    quiet_since: Option<Instant>,
    last_resources: Option<u64>,
}

impl IdleTracker {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            quiet_since: None,
            last_resources: None,
        }
    }

    /// Records a probe taken at `now` and reports whether the page is idle.
    pub fn observe(&mut self, probe: &NetworkProbe, now: Instant) -> bool {
        let resources_settled = self.last_resources == Some(probe.resources);
        self.last_resources = Some(probe.resources);

        if !probe.is_quiet() || !resources_settled {
            self.quiet_since = probe.is_quiet().then_some(now);
            return false;
        }

        let since = *self.quiet_since.get_or_insert(now);
        now.duration_since(since) >= self.window
    }

    /// Forgets any quiet period, e.g. after the probe itself failed.
    pub fn reset(&mut self) {
        self.quiet_since = None;
        self.last_resources = None;
    }
}

/// Blocks until the page has had no network activity for `window`.
///
/// # Errors
///
/// Returns [`Error::Timeout`] if the page is still busy after `timeout`.
pub async fn wait_for_network_idle(
    page: &Page,
    window: Duration,
    poll_interval: Duration,
    timeout: Duration,
) -> Result<()> {
    let start = Instant::now();
    let mut tracker = IdleTracker::new(window);
    let mut last_probe = None;

    loop {
        // The execution context is torn down while a document navigation is
        // in flight; a failed probe just means "not idle yet".
        match page.evaluate::<(), NetworkProbe>(PROBE_SCRIPT, None).await {
            Ok(probe) => {
                if tracker.observe(&probe, Instant::now()) {
                    tracing::debug!(url = %page.url(), elapsed = ?start.elapsed(), "Network idle");
                    return Ok(());
                }
                last_probe = Some(probe);
            }
            Err(e) => {
                tracing::debug!("Network probe failed, retrying: {}", e);
                tracker.reset();
            }
        }

        if start.elapsed() >= timeout {
            return Err(Error::Timeout(format!(
                "page '{}' did not reach network idle within {:?} (last probe: {:?})",
                page.url(),
                timeout,
                last_probe
            )));
        }

        tokio::time::sleep(poll_interval).await;
    }
}

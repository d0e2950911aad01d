//! # Page-lifecycle trigger.
//!
//! The bootstrap runs once per page load, after the configured [`ReadyEvent`].
//! Hosts that cannot signal structure readiness natively use
//! [`poll_until_ready`], which checks a readiness probe on a fixed interval and
//! stops as soon as it passes.
//!
//! ```text
//! native:   host event ──► Trigger::fire() ──► start (first time only)
//! fallback: interval tick ──► probe()? ──► yes ──► Trigger::fire() ──► start
//!                               └─ no ──► wait next tick (or cancelled → stop)
//! ```

use std::cell::Cell;
use std::fmt;
use std::time::Duration;

use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

/// Page-lifecycle event that starts the bootstrap.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReadyEvent {
    /// Document structure is ready (default).
    #[default]
    DomContentLoaded,
    /// Document and all resources are loaded.
    Load,
}

impl ReadyEvent {
    /// Returns the host event name.
    pub fn as_str(self) -> &'static str {
        match self {
            ReadyEvent::DomContentLoaded => "DOMContentLoaded",
            ReadyEvent::Load => "load",
        }
    }

    /// Parses a host event name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "DOMContentLoaded" => Some(ReadyEvent::DomContentLoaded),
            "load" => Some(ReadyEvent::Load),
            _ => None,
        }
    }
}

impl fmt::Display for ReadyEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fire-at-most-once guard for one page load.
#[derive(Debug, Default)]
pub struct Trigger {
    fired: Cell<bool>,
}

impl Trigger {
    /// Creates an unfired trigger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true exactly once: for the first call.
    pub fn fire(&self) -> bool {
        !self.fired.replace(true)
    }

    /// Returns true once the trigger has fired.
    pub fn has_fired(&self) -> bool {
        self.fired.get()
    }
}

/// Polls `probe` every `period` until it returns true.
///
/// The first check happens immediately. Returns `false` if `token` is cancelled
/// before the probe passes.
pub async fn poll_until_ready<P>(mut probe: P, period: Duration, token: &CancellationToken) -> bool
where
    P: FnMut() -> bool,
{
    let mut ticker = tokio::time::interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            biased;
            _ = token.cancelled() => return false,
            _ = ticker.tick() => {
                if probe() {
                    return true;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trigger_fires_once() {
        let trigger = Trigger::new();
        assert!(!trigger.has_fired());
        assert!(trigger.fire());
        assert!(!trigger.fire());
        assert!(trigger.has_fired());
    }

    #[test]
    fn test_event_names_round_trip() {
        for ev in [ReadyEvent::DomContentLoaded, ReadyEvent::Load] {
            assert_eq!(ReadyEvent::from_name(ev.as_str()), Some(ev));
        }
        assert_eq!(ReadyEvent::from_name("readystatechange"), None);
    }

    #[tokio::test]
    async fn test_poll_stops_once_probe_passes() {
        let token = CancellationToken::new();
        let mut checks = 0;
        let ready = poll_until_ready(
            || {
                checks += 1;
                checks == 3
            },
            Duration::from_millis(1),
            &token,
        )
        .await;

        assert!(ready);
        assert_eq!(checks, 3);
    }

    #[tokio::test]
    async fn test_poll_cancelled() {
        let token = CancellationToken::new();
        token.cancel();
        let ready = poll_until_ready(|| true, Duration::from_millis(1), &token).await;
        assert!(!ready);
    }
}

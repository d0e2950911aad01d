//! # Bootstrap configuration.
//!
//! Provides [`Config`] centralized settings for the registry and the page glue.
//!
//! Config is used in two ways:
//! 1. **Registry creation**: `Registry::with_config(config)`
//! 2. **Page creation**: `Page::builder(config)`
//!
//! ## Sentinel values
//! - `bus_capacity = 0` → clamped to 1
//! - `poll_interval = 0s` → clamped to 1ms (a zero period would spin)
//!
//! # Example
//! ```
//! use std::time::Duration;
//! use pageboot::{Config, ReadyEvent, ResetPolicy};
//!
//! let mut cfg = Config::default();
//! cfg.ready_event = ReadyEvent::Load;
//! cfg.reset = ResetPolicy::Ignore;
//! cfg.poll_interval = Duration::ZERO;
//!
//! assert_eq!(cfg.poll_interval_clamped(), Duration::from_millis(1));
//! ```

use std::time::Duration;

use crate::page::ReadyEvent;
use crate::policies::ResetPolicy;

/// Global configuration for a bootstrap session.
///
/// ## Field semantics
/// - `ready_event`: Which page-lifecycle event starts the page
/// - `poll_interval`: Period of the legacy readiness polling fallback
/// - `controller_attribute`: Root attribute naming the controller
/// - `modules_attribute`: Root attribute listing modules (space separated)
/// - `bus_capacity`: Event bus ring buffer size (min 1)
/// - `reset`: What `reset` does with unregistered identifiers
#[derive(Clone, Debug)]
pub struct Config {
    /// Page-lifecycle event that triggers `init` + `run`.
    pub ready_event: ReadyEvent,

    /// Polling period used when the host cannot signal structure readiness natively.
    pub poll_interval: Duration,

    /// Name of the root attribute carrying the controller identifier.
    pub controller_attribute: String,

    /// Name of the root attribute carrying the declared module list.
    pub modules_attribute: String,

    /// Capacity of the event bus broadcast channel ring buffer.
    ///
    /// Slow receivers that lag behind more than `bus_capacity` events
    /// skip older items.
    pub bus_capacity: usize,

    /// Policy for `reset` on an unregistered identifier.
    pub reset: ResetPolicy,
}

impl Config {
    /// Returns a bus capacity clamped to a minimum of 1.
    #[inline]
    pub fn bus_capacity_clamped(&self) -> usize {
        self.bus_capacity.max(1)
    }

    /// Returns the polling period clamped to a minimum of 1ms.
    #[inline]
    pub fn poll_interval_clamped(&self) -> Duration {
        self.poll_interval.max(Duration::from_millis(1))
    }
}

impl Default for Config {
    /// Default configuration:
    ///
    /// - `ready_event = DomContentLoaded`
    /// - `poll_interval = 10ms`
    /// - `controller_attribute = "id"`, `modules_attribute = "data-modules"`
    /// - `bus_capacity = 1024`
    /// - `reset = ResetPolicy::Fail`
    fn default() -> Self {
        Self {
            ready_event: ReadyEvent::default(),
            poll_interval: Duration::from_millis(10),
            controller_attribute: "id".to_string(),
            modules_attribute: "data-modules".to_string(),
            bus_capacity: 1024,
            reset: ResetPolicy::default(),
        }
    }
}

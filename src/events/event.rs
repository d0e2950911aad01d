//! # Lifecycle events emitted by the registry and the page glue.
//!
//! The [`EventKind`] enum classifies event types across three categories:
//! - **Unit events**: registration, resolution, initialization, reset, failure
//! - **Page events**: readiness observed, bootstrap started/completed
//! - **Subscriber events**: delivery problems inside the fan-out
//!
//! The [`Event`] struct carries additional metadata such as timestamps, the unit
//! identifier and a reason.
//!
//! ## Ordering guarantees
//! Each event has a globally unique sequence number (`seq`) that increases monotonically.
//! Use `seq` to restore the exact order when events are delivered out of order.
//!
//! ## Example
//! ```rust
//! use pageboot::{Event, EventKind};
//!
//! let ev = Event::new(EventKind::UnitSkipped)
//!     .with_unit("ghost")
//!     .with_reason("unknown");
//!
//! assert_eq!(ev.kind, EventKind::UnitSkipped);
//! assert_eq!(ev.unit.as_deref(), Some("ghost"));
//! assert_eq!(ev.reason.as_deref(), Some("unknown"));
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::time::SystemTime;

/// Global sequence counter for event ordering.
static EVENT_SEQ: AtomicU64 = AtomicU64::new(1);

/// Classification of lifecycle events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    // === Unit events ===
    /// A unit was registered.
    ///
    /// Sets:
    /// - `unit`: identifier
    /// - `reason`: `"always_run"` for always-run modules
    UnitRegistered,

    /// A producer ran and its object replaced the stored factory.
    ///
    /// Sets:
    /// - `unit`: identifier
    UnitResolved,

    /// A unit's `init` hook returned successfully.
    ///
    /// Sets:
    /// - `unit`: identifier
    UnitInitialized,

    /// An identifier in a work list was not registered and was skipped.
    ///
    /// Sets:
    /// - `unit`: identifier
    /// - `reason`: `"unknown"`
    UnitSkipped,

    /// `run` declined to invoke the controller.
    ///
    /// Sets:
    /// - `unit`: identifier
    /// - `reason`: `"unknown"` or `"already_initialized"`
    ControllerSkipped,

    /// A unit went back to the registered (not initialized) state.
    ///
    /// Sets:
    /// - `unit`: identifier
    UnitReset,

    /// Resolution or a unit hook failed.
    ///
    /// Sets:
    /// - `unit`: identifier
    /// - `reason`: error label
    UnitFailed,

    // === Page events ===
    /// The page-lifecycle trigger fired.
    ///
    /// Sets:
    /// - `reason`: ready event name
    PageReady,

    /// The page bootstrap began.
    ///
    /// Sets:
    /// - `unit`: controller identifier (may be empty)
    PageStarted,

    /// Modules and controller were processed without error.
    ///
    /// Sets:
    /// - `unit`: controller identifier (may be empty)
    PageCompleted,

    // === Subscriber events ===
    /// Subscriber dropped an event (queue full or worker closed).
    ///
    /// Sets:
    /// - `unit`: subscriber name
    /// - `reason`: `"full"` or `"closed"`
    SubscriberOverflow,

    /// Subscriber panicked during event processing.
    ///
    /// Sets:
    /// - `unit`: subscriber name
    /// - `reason`: panic message
    SubscriberPanicked,
}

/// Lifecycle event with optional metadata.
///
/// - `seq`: monotonic global sequence for ordering
/// - `at`: wall-clock timestamp (for logs)
/// - other optional fields are set depending on the [`EventKind`]
#[derive(Clone, Debug)]
pub struct Event {
    /// Globally unique, monotonically increasing sequence number.
    pub seq: u64,
    /// Wall-clock timestamp.
    pub at: SystemTime,
    /// Event classification.
    pub kind: EventKind,
    /// Identifier of the unit (or subscriber), if applicable.
    pub unit: Option<Arc<str>>,
    /// Human-readable reason (skip cause, error label, etc.).
    pub reason: Option<Arc<str>>,
}

impl Event {
    /// Creates a new event of the given kind with current timestamp and next sequence number.
    pub fn new(kind: EventKind) -> Self {
        Self {
            seq: EVENT_SEQ.fetch_add(1, AtomicOrdering::Relaxed),
            at: SystemTime::now(),
            kind,
            unit: None,
            reason: None,
        }
    }

    /// Attaches a unit identifier.
    #[inline]
    pub fn with_unit(mut self, unit: impl Into<Arc<str>>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    /// Attaches a human-readable reason.
    #[inline]
    pub fn with_reason(mut self, reason: impl Into<Arc<str>>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    /// Creates a subscriber overflow event.
    #[inline]
    pub fn subscriber_overflow(subscriber: &'static str, reason: &'static str) -> Self {
        Event::new(EventKind::SubscriberOverflow)
            .with_unit(subscriber)
            .with_reason(reason)
    }

    /// Creates a subscriber panic event.
    #[inline]
    pub fn subscriber_panicked(subscriber: &'static str, info: String) -> Self {
        Event::new(EventKind::SubscriberPanicked)
            .with_unit(subscriber)
            .with_reason(info)
    }

    #[inline]
    pub fn is_subscriber_overflow(&self) -> bool {
        matches!(self.kind, EventKind::SubscriberOverflow)
    }

    #[inline]
    pub fn is_subscriber_panic(&self) -> bool {
        matches!(self.kind, EventKind::SubscriberPanicked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seq_is_monotonic() {
        let a = Event::new(EventKind::UnitRegistered);
        let b = Event::new(EventKind::UnitRegistered);
        assert!(b.seq > a.seq);
    }

    #[test]
    fn test_overflow_helper() {
        let ev = Event::subscriber_overflow("log", "full");
        assert!(ev.is_subscriber_overflow());
        assert_eq!(ev.unit.as_deref(), Some("log"));
        assert_eq!(ev.reason.as_deref(), Some("full"));
    }
}

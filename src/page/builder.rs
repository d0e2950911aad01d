use std::sync::Arc;

use tokio::sync::broadcast::error::RecvError;
use tokio_util::sync::CancellationToken;

use super::bootstrap::{Page, Relay};
use crate::{
    config::Config,
    core::Registry,
    events::Bus,
    subscribers::{Subscribe, SubscriberSet},
};

/// Builder for constructing a [`Page`] with optional subscribers.
pub struct PageBuilder {
    cfg: Config,
    subscribers: Vec<Arc<dyn Subscribe>>,
}

impl PageBuilder {
    /// Creates a new builder with the given configuration.
    pub fn new(cfg: Config) -> Self {
        Self {
            cfg,
            subscribers: Vec::new(),
        }
    }

    /// Sets event subscribers for observability.
    ///
    /// Subscribers receive lifecycle events through dedicated workers with
    /// bounded queues. With at least one subscriber, [`build`](Self::build) must be
    /// called inside a Tokio runtime.
    pub fn with_subscribers(mut self, subscribers: Vec<Arc<dyn Subscribe>>) -> Self {
        self.subscribers = subscribers;
        self
    }

    /// Builds the page and its registry.
    ///
    /// Initializes:
    /// - Event bus for broadcasting
    /// - Registry publishing on that bus
    /// - Subscriber workers and the bus relay (only if subscribers were given)
    pub fn build(self) -> Page {
        let bus = Bus::new(self.cfg.bus_capacity_clamped());
        let registry = Registry::with_bus(self.cfg.clone(), bus.clone());

        let relay = if self.subscribers.is_empty() {
            None
        } else {
            Some(spawn_relay(self.subscribers, &bus))
        };

        Page::new_internal(self.cfg, bus, registry, relay)
    }
}

/// Forwards bus events to the subscriber set until cancelled, then drains what is
/// already queued and shuts the set down.
///
/// Panic reports are not fed back to the set: a subscriber that panics on every
/// event would otherwise loop.
fn spawn_relay(subscribers: Vec<Arc<dyn Subscribe>>, bus: &Bus) -> Relay {
    let mut rx = bus.subscribe();
    let set = SubscriberSet::new(subscribers, bus.clone());
    let token = CancellationToken::new();
    let stop = token.clone();

    let join = tokio::spawn(async move {
        loop {
            tokio::select! {
                biased;
                msg = rx.recv() => match msg {
                    Ok(ev) if ev.is_subscriber_panic() => continue,
                    Ok(ev) => set.emit(&ev),
                    Err(RecvError::Lagged(_)) => continue,
                    Err(RecvError::Closed) => break,
                },
                _ = stop.cancelled() => break,
            }
        }
        while let Ok(ev) = rx.try_recv() {
            if !ev.is_subscriber_panic() {
                set.emit(&ev);
            }
        }
        set.shutdown().await;
    });

    Relay { token, join }
}

//! # Page: one page load's bootstrap.
//!
//! [`Page`] owns the [`Registry`], the configuration and the once-only
//! [`Trigger`]. When the configured ready event arrives it reads the root element
//! and runs the declared modules, the always-run modules and then the controller.
//!
//! ## Flow
//! ```text
//! dispatch(event, root)
//!   ├─ event != cfg.ready_event      → Ok(false)
//!   ├─ trigger already fired         → Ok(false)
//!   └─ publish(PageReady) ──► start(root)
//!                               ├─► PageSpec::read(root)
//!                               ├─► publish(PageStarted)
//!                               ├─► registry.init(spec.modules)?
//!                               ├─► registry.run(spec.controller)?
//!                               └─► publish(PageCompleted)
//!
//! listen(root, probe, token)          (hosts without native readiness)
//!   └─► poll_until_ready(probe, cfg.poll_interval) ──► dispatch(cfg.ready_event, root)
//! ```
//!
//! ## Example
//! ```rust
//! use pageboot::{Attributes, Config, Factory, Page, ReadyEvent, Scope, UnitFn};
//!
//! let mut page = Page::new(Config::default());
//! let flag = || UnitFn::new(false).on_init(|ran: &mut bool| {
//!     *ran = true;
//!     Ok(())
//! });
//! page.registry_mut().register_module("nav", Factory::object(flag()), Scope::Declared)?;
//! page.registry_mut().register_controller("home", Factory::object(flag()))?;
//!
//! let root = Attributes::new().with("id", "home").with("data-modules", "nav");
//! assert!(page.dispatch(ReadyEvent::DomContentLoaded, &root)?);
//! assert!(!page.dispatch(ReadyEvent::DomContentLoaded, &root)?);
//!
//! assert_eq!(page.registry().initialized(), vec!["home", "nav"]);
//! # Ok::<(), pageboot::RegistryError>(())
//! ```

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use super::builder::PageBuilder;
use super::root::{PageSpec, RootElement};
use super::trigger::{ReadyEvent, Trigger, poll_until_ready};
use crate::{
    config::Config,
    core::Registry,
    error::RegistryError,
    events::{Bus, Event, EventKind},
};

/// Background bus → subscriber relay.
pub(super) struct Relay {
    pub(super) token: CancellationToken,
    pub(super) join: JoinHandle<()>,
}

/// Bootstrap state for a single page load.
pub struct Page {
    cfg: Config,
    bus: Bus,
    registry: Registry,
    trigger: Trigger,
    relay: Option<Relay>,
}

impl Page {
    /// Creates a page without subscribers. Does not need a runtime.
    pub fn new(cfg: Config) -> Self {
        PageBuilder::new(cfg).build()
    }

    /// Returns a builder for a page with subscribers.
    pub fn builder(cfg: Config) -> PageBuilder {
        PageBuilder::new(cfg)
    }

    pub(super) fn new_internal(
        cfg: Config,
        bus: Bus,
        registry: Registry,
        relay: Option<Relay>,
    ) -> Self {
        Self {
            cfg,
            bus,
            registry,
            trigger: Trigger::new(),
            relay,
        }
    }

    /// Returns the page's registry.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Returns the page's registry for registration during page setup.
    pub fn registry_mut(&mut self) -> &mut Registry {
        &mut self.registry
    }

    /// Returns the bus shared by the page and its registry.
    pub fn bus(&self) -> &Bus {
        &self.bus
    }

    /// Returns the configuration.
    pub fn config(&self) -> &Config {
        &self.cfg
    }

    /// Returns true once the bootstrap has been triggered.
    pub fn has_started(&self) -> bool {
        self.trigger.has_fired()
    }

    /// Handles a host lifecycle event.
    ///
    /// Starts the page the first time the configured event arrives and returns
    /// `Ok(true)`; every other call returns `Ok(false)` without side effects.
    /// A failing start still consumes the trigger.
    pub fn dispatch(
        &mut self,
        event: ReadyEvent,
        root: &dyn RootElement,
    ) -> Result<bool, RegistryError> {
        if event != self.cfg.ready_event || !self.trigger.fire() {
            return Ok(false);
        }
        self.bus
            .publish(Event::new(EventKind::PageReady).with_reason(event.as_str()));
        self.start(root)?;
        Ok(true)
    }

    /// Runs the bootstrap for `root` unconditionally.
    pub fn start(&mut self, root: &dyn RootElement) -> Result<(), RegistryError> {
        let spec = PageSpec::read(root, &self.cfg);
        self.bus
            .publish(Event::new(EventKind::PageStarted).with_unit(spec.controller.as_str()));

        self.registry.init(&spec.modules)?;
        self.registry.run(&spec.controller)?;

        self.bus
            .publish(Event::new(EventKind::PageCompleted).with_unit(spec.controller.as_str()));
        Ok(())
    }

    /// Polling fallback: waits for `probe` to report readiness, then dispatches the
    /// configured ready event.
    ///
    /// Returns `Ok(false)` if `token` is cancelled first or the page already started.
    pub async fn listen<P>(
        &mut self,
        root: &dyn RootElement,
        probe: P,
        token: &CancellationToken,
    ) -> Result<bool, RegistryError>
    where
        P: FnMut() -> bool,
    {
        if !poll_until_ready(probe, self.cfg.poll_interval_clamped(), token).await {
            return Ok(false);
        }
        self.dispatch(self.cfg.ready_event, root)
    }

    /// Stops the subscriber relay after delivering the events published so far.
    ///
    /// Dropping the page also stops the relay, but without waiting for it.
    pub async fn shutdown(mut self) {
        if let Some(relay) = self.relay.take() {
            relay.token.cancel();
            let _ = relay.join.await;
        }
    }
}

impl Drop for Page {
    fn drop(&mut self) {
        if let Some(relay) = &self.relay {
            relay.token.cancel();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use super::*;
    use crate::error::UnitError;
    use crate::page::Attributes;
    use crate::subscribers::{InitTracker, Subscribe};
    use crate::units::{Factory, Scope, UnitFn};

    fn flag() -> UnitFn<bool> {
        UnitFn::new(false).on_init(|ran: &mut bool| {
            *ran = true;
            Ok(())
        })
    }

    fn ran(page: &Page, id: &str) -> Option<bool> {
        page.registry()
            .get_unit(id)
            .and_then(|rec| rec.unit::<UnitFn<bool>>())
            .map(|u| *u.state())
    }

    #[test]
    fn test_other_event_is_ignored() {
        let mut page = Page::new(Config::default());
        page.registry_mut()
            .register_controller("home", Factory::object(flag()))
            .unwrap();
        let root = Attributes::new().with("id", "home");

        assert!(!page.dispatch(ReadyEvent::Load, &root).unwrap());
        assert!(!page.has_started());
        assert_eq!(ran(&page, "home"), Some(false));

        assert!(page.dispatch(ReadyEvent::DomContentLoaded, &root).unwrap());
        assert_eq!(ran(&page, "home"), Some(true));
    }

    #[test]
    fn test_empty_root_runs_only_always_run() {
        let mut page = Page::new(Config::default());
        page.registry_mut()
            .register_module("nav", Factory::object(flag()), Scope::Always)
            .unwrap();
        page.registry_mut()
            .register_module("gallery", Factory::object(flag()), Scope::Declared)
            .unwrap();

        page.start(&Attributes::new()).unwrap();
        assert_eq!(ran(&page, "nav"), Some(true));
        assert_eq!(ran(&page, "gallery"), Some(false));
    }

    #[test]
    fn test_failing_module_skips_controller() {
        let mut page = Page::new(Config::default());
        let broken = UnitFn::new(()).on_init(|_: &mut ()| Err(UnitError::fail("boom")));
        page.registry_mut()
            .register_module("broken", Factory::object(broken), Scope::Declared)
            .unwrap();
        page.registry_mut()
            .register_controller("home", Factory::object(flag()))
            .unwrap();
        let root = Attributes::new()
            .with("id", "home")
            .with("data-modules", "broken");

        let err = page
            .dispatch(ReadyEvent::DomContentLoaded, &root)
            .unwrap_err();
        assert_eq!(err.identifier(), Some("broken"));
        assert_eq!(ran(&page, "home"), Some(false));
        assert!(page.has_started());
    }

    #[tokio::test]
    async fn test_listen_polls_then_starts_once() {
        let cfg = Config {
            poll_interval: Duration::from_millis(1),
            ..Config::default()
        };
        let mut page = Page::new(cfg);
        page.registry_mut()
            .register_controller("home", Factory::object(flag()))
            .unwrap();
        let root = Attributes::new().with("id", "home");
        let token = CancellationToken::new();

        let mut polls = 0;
        let started = page
            .listen(
                &root,
                || {
                    polls += 1;
                    polls > 2
                },
                &token,
            )
            .await
            .unwrap();
        assert!(started);
        assert_eq!(ran(&page, "home"), Some(true));

        let again = page.listen(&root, || true, &token).await.unwrap();
        assert!(!again);
    }

    #[tokio::test]
    async fn test_listen_cancelled_does_not_start() {
        let mut page = Page::new(Config::default());
        let token = CancellationToken::new();
        token.cancel();

        let started = page
            .listen(&Attributes::new(), || true, &token)
            .await
            .unwrap();
        assert!(!started);
        assert!(!page.has_started());
    }

    #[tokio::test]
    async fn test_subscribers_observe_bootstrap() {
        let tracker = Arc::new(InitTracker::new());
        let mut page = Page::builder(Config::default())
            .with_subscribers(vec![tracker.clone() as Arc<dyn Subscribe>])
            .build();
        page.registry_mut()
            .register_module("nav", Factory::object(flag()), Scope::Always)
            .unwrap();
        page.registry_mut()
            .register_controller("home", Factory::object(flag()))
            .unwrap();

        page.start(&Attributes::new().with("id", "home")).unwrap();
        page.registry_mut().reset("nav").unwrap();
        page.shutdown().await;

        assert_eq!(tracker.snapshot().await, vec!["home"]);
    }

    #[tokio::test]
    async fn test_drop_releases_subscribers() {
        let tracker = Arc::new(InitTracker::new());
        let page = Page::builder(Config::default())
            .with_subscribers(vec![tracker.clone() as Arc<dyn Subscribe>])
            .build();
        assert!(Arc::strong_count(&tracker) > 1);

        drop(page);
        let released = tokio::time::timeout(Duration::from_secs(1), async {
            while Arc::strong_count(&tracker) > 1 {
                tokio::task::yield_now().await;
            }
        })
        .await;

        assert!(released.is_ok(), "relay kept the subscriber alive");
        assert_eq!(Arc::strong_count(&tracker), 1);
    }
}

//! # pageboot
//!
//! **Pageboot** is a minimal module/controller bootstrapper for pages.
//!
//! A page declares, on its root element, which controller it belongs to and which
//! modules it needs. Pageboot keeps a registry of named units, invokes the declared
//! modules (plus every always-run module) and then the controller, and guards the
//! controller against being started twice.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!  <body id="home" data-modules="nav gallery">
//!            │
//!            ▼
//! ┌───────────────────────────────────────────────────────────────────┐
//! │  Page (one page load)                                             │
//! │  - Trigger (fires once, on the configured ReadyEvent)             │
//! │  - PageSpec::read(root) → controller + declared modules           │
//! │  - Registry (identifier → Record, always-run list)                │
//! └──────┬──────────────────────────────────────────────────┬─────────┘
//!        ▼                                                  │
//!   registry.init(["nav", "gallery"])                       │
//!        ├─► invoke("nav")      ─► resolve ─► init()        │
//!        ├─► invoke("gallery")  ─► resolve ─► init()        │
//!        └─► invoke(always-run) ─► resolve ─► init()        │
//!   registry.run("home")                                    │
//!        └─► skip if initialized, else invoke("home")       │
//!                                                           ▼
//! ┌───────────────────────────────────────────────────────────────────┐
//! │                   Bus (broadcast channel of Events)               │
//! └─────────────────────────────────┬─────────────────────────────────┘
//!                                   ▼
//!                             SubscriberSet
//!                       ┌───────────┼───────────┐
//!                       ▼           ▼           ▼
//!                  InitTracker  LogWriter    custom
//! ```
//!
//! ### Unit lifecycle
//! ```text
//! Unregistered ──register──► Registered ──invoke──► Initialized
//!                                 ▲                      │
//!                                 └────────reset─────────┘
//! ```
//! A producer registered with [`Factory::producer`] runs on the first invoke only;
//! its object is kept across resets.
//!
//! ## Features
//! | Area              | Description                                                   | Key types / traits                        |
//! |-------------------|---------------------------------------------------------------|-------------------------------------------|
//! | **Registry**      | Register, invoke, run and reset units by identifier.          | [`Registry`], [`with_registry`]           |
//! | **Units**         | Capability contract, closure-backed units, lazy producers.    | [`Unit`], [`UnitFn`], [`Factory`]         |
//! | **Page glue**     | Root attributes, ready events, polling fallback.              | [`Page`], [`PageSpec`], [`ReadyEvent`]    |
//! | **Subscriber API**| Observe lifecycle events.                                     | [`Subscribe`], [`InitTracker`]            |
//! | **Errors**        | Typed errors for the registry and for unit hooks.             | [`RegistryError`], [`UnitError`]          |
//! | **Configuration** | Attribute names, ready event, reset policy.                   | [`Config`], [`ResetPolicy`]               |
//!
//! ## Optional features
//! - `logging`: exports a simple built-in [`LogWriter`] _(demo/reference only)_.
//!
//! ## Example
//! ```rust
//! use pageboot::{Attributes, Config, Factory, Page, ReadyEvent, Scope, Unit, UnitError};
//!
//! #[derive(Default)]
//! struct Nav {
//!     open: bool,
//! }
//!
//! impl Unit for Nav {
//!     fn init(&mut self) -> Result<(), UnitError> {
//!         self.open = true;
//!         Ok(())
//!     }
//! }
//!
//! let mut page = Page::new(Config::default());
//! page.registry_mut().register_module("nav", Factory::producer(Nav::default), Scope::Always)?;
//!
//! let root = Attributes::new().with("id", "home");
//! page.dispatch(ReadyEvent::DomContentLoaded, &root)?;
//!
//! let nav = page.registry().get_unit("nav").and_then(|r| r.unit::<Nav>());
//! assert!(nav.is_some_and(|n| n.open));
//! # Ok::<(), pageboot::RegistryError>(())
//! ```
mod config;
mod core;
mod error;
mod events;
mod page;
mod policies;
mod subscribers;
mod units;

// ---- Public re-exports ----

pub use config::Config;
pub use crate::core::{Registry, with_registry};
pub use error::{RegistryError, UnitError};
pub use events::{Bus, Event, EventKind};
pub use page::{
    Attributes, Page, PageBuilder, PageSpec, ReadyEvent, RootElement, Trigger, poll_until_ready,
};
pub use policies::ResetPolicy;
pub use subscribers::{InitTracker, Subscribe, SubscriberSet};
pub use units::{Capabilities, Factory, Producer, Record, Scope, Unit, UnitFn};

// Optional: expose a simple built-in logger subscriber (demo/reference).
// Enable with: `--features logging`
#[cfg(feature = "logging")]
pub use subscribers::LogWriter;

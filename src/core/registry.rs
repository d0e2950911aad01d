//! # Unit registry - registration, lazy resolution and idempotent start-up.
//!
//! The registry maps identifiers to [`Record`]s and keeps the ordered list of
//! always-run modules. Every state transition is published on the [`Bus`].
//!
//! ## Architecture
//! ```text
//! register_module(id, factory, scope) ──► units[id] = Record { initialized: false }
//!                                         └─► Scope::Always → always_run.push(id)
//!
//! init(declared) ──► work = declared ++ always_run
//!                     └─► for id in work: unknown → UnitSkipped, else invoke(id)?
//!
//! run(controller) ──► unknown / initialized → ControllerSkipped
//!                     └─► invoke(controller)
//!
//! invoke(id) ──► resolve producer (once) ──► check init capability ──► unit.init()?
//!                                                                     └─► initialized = true
//!
//! reset(id) ──► initialized = false ──► unit.reset()? (if exposed) ──► initialized = false
//! ```
//!
//! ## Rules
//! - `invoke` performs no idempotency check; `run` is the only guard.
//! - A unit listed both in the declared list and in `always_run` is initialized twice.
//! - The first error aborts the rest of the work list; nothing is rolled back.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Arc;

use crate::config::Config;
use crate::error::RegistryError;
use crate::events::{Bus, Event, EventKind};
use crate::units::{Factory, Record, Scope};

/// Registry of modules and controllers for one page session.
///
/// # Example
/// ```
/// use pageboot::{Factory, Registry, Scope, UnitFn};
///
/// let mut registry = Registry::new();
/// let flag = || UnitFn::new(false).on_init(|ran: &mut bool| {
///     *ran = true;
///     Ok(())
/// });
///
/// registry.register_module("nav", Factory::object(flag()), Scope::Always)?;
/// registry.register_controller("home", Factory::object(flag()))?;
///
/// registry.init(Vec::<String>::new())?;
/// registry.run("home")?;
///
/// for id in ["nav", "home"] {
///     let rec = registry.get_unit(id).unwrap();
///     assert!(rec.is_initialized());
///     assert_eq!(rec.unit::<UnitFn<bool>>().map(|u| *u.state()), Some(true));
/// }
/// # Ok::<(), pageboot::RegistryError>(())
/// ```
pub struct Registry {
    units: HashMap<String, Record>,
    always_run: Vec<String>,
    cfg: Config,
    bus: Bus,
}

impl Registry {
    /// Creates an empty registry with the default configuration.
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Creates an empty registry with its own bus.
    pub fn with_config(cfg: Config) -> Self {
        let bus = Bus::new(cfg.bus_capacity_clamped());
        Self::with_bus(cfg, bus)
    }

    /// Creates an empty registry publishing on an existing bus.
    pub fn with_bus(cfg: Config, bus: Bus) -> Self {
        Self {
            units: HashMap::new(),
            always_run: Vec::new(),
            cfg,
            bus,
        }
    }

    /// Registers a module.
    ///
    /// Fails with [`RegistryError::DuplicateIdentifier`] if `id` is taken, in which
    /// case nothing changes. [`Scope::Always`] appends `id` to the always-run list.
    pub fn register_module(
        &mut self,
        id: impl Into<String>,
        factory: Factory,
        scope: Scope,
    ) -> Result<(), RegistryError> {
        let id = id.into();
        let slot = match self.units.entry(id) {
            Entry::Occupied(taken) => {
                return Err(RegistryError::DuplicateIdentifier {
                    id: taken.key().clone(),
                });
            }
            Entry::Vacant(slot) => slot,
        };

        let key: Arc<str> = Arc::from(slot.key().as_str());
        if scope == Scope::Always {
            self.always_run.push(slot.key().clone());
        }
        slot.insert(Record::new(key.clone(), factory));

        let mut ev = Event::new(EventKind::UnitRegistered).with_unit(key);
        if scope == Scope::Always {
            ev = ev.with_reason("always_run");
        }
        self.bus.publish(ev);
        Ok(())
    }

    /// Registers a controller.
    ///
    /// Controllers share the modules' namespace and registration path; they differ
    /// only in being started through [`Registry::run`].
    pub fn register_controller(
        &mut self,
        id: impl Into<String>,
        factory: Factory,
    ) -> Result<(), RegistryError> {
        self.register_module(id, factory, Scope::Declared)
    }

    /// Returns the record stored for `id`.
    pub fn get_unit(&self, id: &str) -> Option<&Record> {
        self.units.get(id)
    }

    /// Returns the record stored for `id` mutably.
    pub fn get_unit_mut(&mut self, id: &str) -> Option<&mut Record> {
        self.units.get_mut(id)
    }

    /// Invokes the declared modules followed by every always-run module.
    ///
    /// Unknown identifiers are skipped. Already-initialized units are invoked again.
    pub fn init<I, S>(&mut self, declared: I) -> Result<(), RegistryError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut work: Vec<String> = declared
            .into_iter()
            .map(|id| id.as_ref().to_string())
            .collect();
        work.extend(self.always_run.iter().cloned());

        for id in &work {
            if !self.units.contains_key(id.as_str()) {
                self.bus.publish(
                    Event::new(EventKind::UnitSkipped)
                        .with_unit(id.as_str())
                        .with_reason("unknown"),
                );
                continue;
            }
            self.invoke(id)?;
        }
        Ok(())
    }

    /// Starts the page controller unless it is unknown or already initialized.
    pub fn run(&mut self, id: &str) -> Result<(), RegistryError> {
        let skip = match self.units.get(id) {
            None => Some("unknown"),
            Some(rec) if rec.is_initialized() => Some("already_initialized"),
            Some(_) => None,
        };
        if let Some(reason) = skip {
            self.bus.publish(
                Event::new(EventKind::ControllerSkipped)
                    .with_unit(id)
                    .with_reason(reason),
            );
            return Ok(());
        }
        self.invoke(id)
    }

    /// Resolves and initializes one unit.
    ///
    /// No-op for unknown identifiers. Runs a pending producer once and keeps its
    /// object, fails with [`RegistryError::InvalidUnit`] if the object has no `init`
    /// capability, then calls `init` and marks the unit initialized.
    pub fn invoke(&mut self, id: &str) -> Result<(), RegistryError> {
        let Some(record) = self.units.get_mut(id) else {
            return Ok(());
        };
        let bus = &self.bus;

        if record.resolve() {
            bus.publish(Event::new(EventKind::UnitResolved).with_unit(record.id().clone()));
        }

        let Some(unit) = record.resolved_mut().filter(|u| u.capabilities().init) else {
            let err = RegistryError::InvalidUnit { id: id.to_string() };
            bus.publish(
                Event::new(EventKind::UnitFailed)
                    .with_unit(id)
                    .with_reason(err.as_label()),
            );
            return Err(err);
        };

        if let Err(source) = unit.init() {
            bus.publish(
                Event::new(EventKind::UnitFailed)
                    .with_unit(id)
                    .with_reason(source.as_label()),
            );
            return Err(RegistryError::UnitFailed {
                id: id.to_string(),
                source,
            });
        }

        record.set_initialized(true);
        bus.publish(Event::new(EventKind::UnitInitialized).with_unit(record.id().clone()));
        Ok(())
    }

    /// Returns a unit to the registered state.
    ///
    /// Calls the object's `reset` hook if it exposes one. The resolved object is kept:
    /// the next invocation calls `init` on the same instance. A unit whose producer has
    /// not run yet is not resolved here.
    ///
    /// Unknown identifiers fail with [`RegistryError::UnknownUnit`] under
    /// [`ResetPolicy::Fail`](crate::ResetPolicy::Fail) and are ignored otherwise.
    pub fn reset(&mut self, id: &str) -> Result<(), RegistryError> {
        let Some(record) = self.units.get_mut(id) else {
            if self.cfg.reset.is_strict() {
                return Err(RegistryError::UnknownUnit { id: id.to_string() });
            }
            self.bus.publish(
                Event::new(EventKind::UnitSkipped)
                    .with_unit(id)
                    .with_reason("unknown"),
            );
            return Ok(());
        };
        let bus = &self.bus;

        record.set_initialized(false);
        if let Some(unit) = record.resolved_mut() {
            if unit.capabilities().reset {
                if let Err(source) = unit.reset() {
                    bus.publish(
                        Event::new(EventKind::UnitFailed)
                            .with_unit(id)
                            .with_reason(source.as_label()),
                    );
                    return Err(RegistryError::UnitFailed {
                        id: id.to_string(),
                        source,
                    });
                }
            }
        }
        record.set_initialized(false);

        bus.publish(Event::new(EventKind::UnitReset).with_unit(record.id().clone()));
        Ok(())
    }

    /// Returns the always-run identifiers in registration order.
    pub fn always_run(&self) -> &[String] {
        &self.always_run
    }

    /// Returns sorted list of registered identifiers.
    pub fn identifiers(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.units.keys().cloned().collect();
        ids.sort_unstable();
        ids
    }

    /// Returns sorted list of initialized identifiers.
    pub fn initialized(&self) -> Vec<String> {
        let mut ids: Vec<String> = self
            .units
            .iter()
            .filter(|(_, rec)| rec.is_initialized())
            .map(|(id, _)| id.clone())
            .collect();
        ids.sort_unstable();
        ids
    }

    /// Number of registered units.
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// True if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Returns the configuration.
    pub fn config(&self) -> &Config {
        &self.cfg
    }

    /// Returns the bus this registry publishes on.
    pub fn bus(&self) -> &Bus {
        &self.bus
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

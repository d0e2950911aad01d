//! # Registration payloads.
//!
//! A unit is registered either as a ready object ([`Factory::Object`]) or as a
//! zero-argument producer ([`Factory::Producer`]) that builds the object on first
//! invocation. The producer runs at most once; its result replaces it for the rest
//! of the unit's life, `reset` included.
//!
//! ```text
//! Factory::Object(unit)     ──────────────────────────► resolved
//! Factory::Producer(f)      ── first invoke: f() ─────► resolved
//! ```

use std::fmt;

use crate::units::unit::Unit;

/// Boxed zero-argument producer of a unit.
pub type Producer = Box<dyn FnOnce() -> Box<dyn Unit>>;

/// Ready object or lazy producer.
pub enum Factory {
    /// Object used as-is.
    Object(Box<dyn Unit>),
    /// Producer resolved lazily, once.
    Producer(Producer),
}

impl Factory {
    /// Wraps a ready object.
    pub fn object<U: Unit>(unit: U) -> Self {
        Factory::Object(Box::new(unit))
    }

    /// Wraps a producer; it runs on the first invocation of the unit.
    pub fn producer<F, U>(f: F) -> Self
    where
        F: FnOnce() -> U + 'static,
        U: Unit,
    {
        Factory::Producer(Box::new(move || Box::new(f()) as Box<dyn Unit>))
    }

    /// Returns true if the factory still has to be resolved.
    pub fn is_producer(&self) -> bool {
        matches!(self, Factory::Producer(_))
    }
}

impl fmt::Debug for Factory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Factory::Object(_) => f.write_str("Factory::Object"),
            Factory::Producer(_) => f.write_str("Factory::Producer"),
        }
    }
}

/// Which call sites invoke a module.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Scope {
    /// Invoked only when a page declares it (or, for controllers, names it).
    #[default]
    Declared,
    /// Appended to every `init` work list.
    Always,
}

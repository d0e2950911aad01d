//! # Per-identifier registry record.
//!
//! [`Record`] holds a unit's resolution slot and its `initialized` flag.
//!
//! ## Rules
//! - `initialized == true` implies the object is resolved and exposes `init`.
//! - The producer is consumed by the first resolution; it is never restored.
//! - A producer that panics leaves the record with no object; later invocations
//!   fail with `InvalidUnit`.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use crate::units::factory::{Factory, Producer};
use crate::units::unit::Unit;

/// Registered unit as seen through [`Registry::get_unit`](crate::Registry::get_unit).
pub struct Record {
    id: Arc<str>,
    unit: Option<Box<dyn Unit>>,
    producer: Option<Producer>,
    initialized: bool,
}

impl Record {
    pub(crate) fn new(id: Arc<str>, factory: Factory) -> Self {
        let (unit, producer) = match factory {
            Factory::Object(unit) => (Some(unit), None),
            Factory::Producer(produce) => (None, Some(produce)),
        };
        Self {
            id,
            unit,
            producer,
            initialized: false,
        }
    }

    /// Returns the unit's identifier.
    pub fn identifier(&self) -> &str {
        &self.id
    }

    /// Returns true once `init` completed and until the next `reset`.
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Returns true if the stored factory is a concrete object.
    pub fn is_resolved(&self) -> bool {
        self.unit.is_some()
    }

    /// Returns the resolved object as its concrete type.
    ///
    /// `None` before resolution or if `T` is not the object's type.
    pub fn unit<T: Unit>(&self) -> Option<&T> {
        let unit: &dyn Unit = self.unit.as_deref()?;
        (unit as &dyn Any).downcast_ref::<T>()
    }

    /// Mutable variant of [`Record::unit`].
    pub fn unit_mut<T: Unit>(&mut self) -> Option<&mut T> {
        let unit: &mut dyn Unit = self.unit.as_deref_mut()?;
        (unit as &mut dyn Any).downcast_mut::<T>()
    }

    pub(crate) fn id(&self) -> &Arc<str> {
        &self.id
    }

    /// Runs the producer if one is pending. Returns true if it ran.
    pub(crate) fn resolve(&mut self) -> bool {
        if self.unit.is_some() {
            return false;
        }
        match self.producer.take() {
            Some(produce) => {
                self.unit = Some(produce());
                true
            }
            None => false,
        }
    }

    pub(crate) fn resolved_mut(&mut self) -> Option<&mut (dyn Unit + 'static)> {
        self.unit.as_deref_mut()
    }

    pub(crate) fn set_initialized(&mut self, initialized: bool) {
        self.initialized = initialized;
    }
}

impl fmt::Debug for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Record")
            .field("id", &self.id)
            .field("resolved", &self.is_resolved())
            .field("initialized", &self.initialized)
            .finish()
    }
}

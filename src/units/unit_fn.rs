//! # Closure-backed unit (`UnitFn`)
//!
//! [`UnitFn`] bundles a user state `S` with optional `init` / `reset` hooks. Each hook
//! receives `&mut S`, the Rust counterpart of a method reaching sibling fields through
//! its receiver. A `UnitFn` built without an `on_init` hook resolves fine but is
//! rejected when invoked.
//!
//! ## Example
//! ```rust
//! use pageboot::{Unit, UnitFn};
//!
//! let mut nav = UnitFn::new(false).on_init(|ran: &mut bool| {
//!     *ran = true;
//!     Ok(())
//! });
//!
//! assert!(nav.capabilities().init);
//! assert!(!nav.capabilities().reset);
//! nav.init().unwrap();
//! assert!(*nav.state());
//! ```

use std::fmt;

use crate::error::UnitError;
use crate::units::unit::{Capabilities, Unit};

type Hook<S> = Box<dyn FnMut(&mut S) -> Result<(), UnitError>>;

/// Function-backed unit over a user state.
pub struct UnitFn<S> {
    state: S,
    on_init: Option<Hook<S>>,
    on_reset: Option<Hook<S>>,
}

impl<S: 'static> UnitFn<S> {
    /// Creates a unit with no hooks installed.
    pub fn new(state: S) -> Self {
        Self {
            state,
            on_init: None,
            on_reset: None,
        }
    }

    /// Installs the `init` hook.
    pub fn on_init<F>(mut self, f: F) -> Self
    where
        F: FnMut(&mut S) -> Result<(), UnitError> + 'static,
    {
        self.on_init = Some(Box::new(f));
        self
    }

    /// Installs the `reset` hook.
    pub fn on_reset<F>(mut self, f: F) -> Self
    where
        F: FnMut(&mut S) -> Result<(), UnitError> + 'static,
    {
        self.on_reset = Some(Box::new(f));
        self
    }

    /// Returns the unit's state.
    pub fn state(&self) -> &S {
        &self.state
    }

    /// Returns the unit's state mutably.
    pub fn state_mut(&mut self) -> &mut S {
        &mut self.state
    }
}

impl<S: 'static> Unit for UnitFn<S> {
    fn init(&mut self) -> Result<(), UnitError> {
        match &mut self.on_init {
            Some(hook) => hook(&mut self.state),
            None => Err(UnitError::fail("no init hook installed")),
        }
    }

    fn reset(&mut self) -> Result<(), UnitError> {
        match &mut self.on_reset {
            Some(hook) => hook(&mut self.state),
            None => Ok(()),
        }
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities {
            init: self.on_init.is_some(),
            reset: self.on_reset.is_some(),
        }
    }
}

impl<S: fmt::Debug> fmt::Debug for UnitFn<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnitFn")
            .field("state", &self.state)
            .field("on_init", &self.on_init.is_some())
            .field("on_reset", &self.on_reset.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_init_hook_reports_no_capability() {
        let mut unit = UnitFn::new(0u32);
        assert_eq!(unit.capabilities(), Capabilities::NONE);
        assert!(unit.init().is_err());
        assert!(unit.reset().is_ok());
    }

    #[test]
    fn test_hooks_share_state() {
        let mut unit = UnitFn::new(0u32)
            .on_init(|n: &mut u32| {
                *n += 1;
                Ok(())
            })
            .on_reset(|n: &mut u32| {
                *n = 0;
                Ok(())
            });

        unit.init().unwrap();
        unit.init().unwrap();
        assert_eq!(*unit.state(), 2);
        unit.reset().unwrap();
        assert_eq!(*unit.state(), 0);
        assert_eq!(unit.capabilities(), Capabilities::ALL);
    }
}

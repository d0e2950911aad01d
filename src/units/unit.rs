//! # Unit capability contract.
//!
//! A unit is one piece of page behavior: a module (run through `init`) or a
//! controller (run through `run`). Both implement [`Unit`]; the registry makes no
//! structural distinction between them.
//!
//! The registry checks [`Unit::capabilities`] once, right after resolution. A unit
//! without the `init` capability is a configuration defect and fails with
//! [`RegistryError::InvalidUnit`](crate::RegistryError::InvalidUnit).

use std::any::Any;

use crate::error::UnitError;

/// Hooks exposed by a resolved unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Capabilities {
    /// `init` may be called.
    pub init: bool,
    /// `reset` should be called when the unit is reset.
    pub reset: bool,
}

impl Capabilities {
    /// Both hooks.
    pub const ALL: Capabilities = Capabilities {
        init: true,
        reset: true,
    };

    /// No hooks at all.
    pub const NONE: Capabilities = Capabilities {
        init: false,
        reset: false,
    };
}

/// # Unit of page behavior.
///
/// `init` receives the unit itself, so it can read and write sibling state on the
/// same object. `reset` is optional and defaults to a no-op.
///
/// # Example
/// ```
/// use pageboot::{Unit, UnitError};
///
/// #[derive(Default)]
/// struct Gallery {
///     slides: usize,
/// }
///
/// impl Unit for Gallery {
///     fn init(&mut self) -> Result<(), UnitError> {
///         self.slides = 3;
///         Ok(())
///     }
///
///     fn reset(&mut self) -> Result<(), UnitError> {
///         self.slides = 0;
///         Ok(())
///     }
/// }
///
/// let mut g = Gallery::default();
/// g.init().unwrap();
/// assert_eq!(g.slides, 3);
/// ```
pub trait Unit: Any {
    /// Starts the unit's behavior on the current page.
    fn init(&mut self) -> Result<(), UnitError>;

    /// Tears down the unit's running state so a later `init` can start it again.
    fn reset(&mut self) -> Result<(), UnitError> {
        Ok(())
    }

    /// Reports which hooks this object exposes.
    ///
    /// Statically typed units expose both; dynamic units such as
    /// [`UnitFn`](crate::UnitFn) report what was actually installed.
    fn capabilities(&self) -> Capabilities {
        Capabilities::ALL
    }
}

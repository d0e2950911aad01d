//! # Default page-session registry.
//!
//! Most pages need exactly one registry. [`with_registry`] gives access to a
//! thread-local instance created on first use; it lives as long as the thread.
//! Independent sessions (tests, several documents) should build their own
//! [`Registry`] instead.
//!
//! ## Rules
//! - Access is exclusive for the duration of the closure.
//! - Re-entering from inside a unit hook returns [`RegistryError::Busy`].

use std::cell::RefCell;

use crate::core::registry::Registry;
use crate::error::RegistryError;

thread_local! {
    static DEFAULT: RefCell<Registry> = RefCell::new(Registry::new());
}

/// Runs `f` against the default registry.
///
/// # Example
/// ```
/// use pageboot::{Factory, Scope, UnitFn, with_registry};
///
/// with_registry(|r| {
///     let unit = UnitFn::new(()).on_init(|_: &mut ()| Ok(()));
///     r.register_module("doc-example", Factory::object(unit), Scope::Declared)
/// })??;
///
/// let known = with_registry(|r| r.get_unit("doc-example").is_some())?;
/// assert!(known);
/// # Ok::<(), pageboot::RegistryError>(())
/// ```
pub fn with_registry<R>(f: impl FnOnce(&mut Registry) -> R) -> Result<R, RegistryError> {
    DEFAULT.with(|cell| -> Result<R, RegistryError> {
        let mut registry = cell.try_borrow_mut().map_err(|_| RegistryError::Busy)?;
        Ok(f(&mut registry))
    })
}

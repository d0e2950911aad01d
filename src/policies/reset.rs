//! # Reset policy for unknown identifiers.
//!
//! [`ResetPolicy`] decides what [`Registry::reset`](crate::Registry::reset) does when
//! asked to reset an identifier that was never registered.
//!
//! - [`ResetPolicy::Fail`] returns [`RegistryError::UnknownUnit`](crate::RegistryError::UnknownUnit) (default).
//! - [`ResetPolicy::Ignore`] returns `Ok(())` without touching any state.
//!
//! ```text
//! reset("ghost")
//!   ├─ ResetPolicy::Fail   → Err(UnknownUnit { id: "ghost" })
//!   └─ ResetPolicy::Ignore → Ok(()), UnitSkipped published
//! ```

/// Policy controlling `reset` on an unregistered identifier.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ResetPolicy {
    /// Fail with `UnknownUnit` (default).
    #[default]
    Fail,
    /// Silently return.
    Ignore,
}

impl ResetPolicy {
    /// Returns true if an unknown identifier must be reported as an error.
    #[inline]
    pub fn is_strict(self) -> bool {
        matches!(self, ResetPolicy::Fail)
    }
}

//! Error types used by the registry and by units.
//!
//! This module defines two main error enums:
//!
//! - [`RegistryError`]: errors raised by the registry itself (registration, resolution, reset).
//! - [`UnitError`]: errors raised by a unit's own `init` / `reset` hooks.
//!
//! Both types provide helper methods (`as_label`, `as_message`) for logging.
//! Nothing is recovered internally: every error aborts the current operation
//! and propagates to whoever triggered it.

use thiserror::Error;

/// # Errors produced by the registry.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum RegistryError {
    /// An identifier was registered twice (modules and controllers share one namespace).
    #[error("unit already registered: {id}")]
    DuplicateIdentifier {
        /// The offending identifier.
        id: String,
    },

    /// The resolved unit does not expose an `init` capability.
    #[error("invalid unit: no init capability found in: {id}")]
    InvalidUnit {
        /// Identifier of the defective unit.
        id: String,
    },

    /// `reset` was called for an identifier that was never registered.
    #[error("trying to reset non-existing unit: {id}")]
    UnknownUnit {
        /// The unknown identifier.
        id: String,
    },

    /// A unit hook returned an error; the remaining work list was abandoned.
    #[error("unit {id} failed: {source}")]
    UnitFailed {
        /// Identifier of the failing unit.
        id: String,
        /// The error returned by the hook.
        #[source]
        source: UnitError,
    },

    /// The default registry was accessed again from inside one of its own unit hooks.
    #[error("default registry is busy")]
    Busy,
}

impl RegistryError {
    /// Returns a short stable label (snake_case) for use in logs.
    ///
    /// # Example
    /// ```
    /// use pageboot::RegistryError;
    ///
    /// let err = RegistryError::UnknownUnit { id: "nav".into() };
    /// assert_eq!(err.as_label(), "registry_unknown_unit");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            RegistryError::DuplicateIdentifier { .. } => "registry_duplicate_identifier",
            RegistryError::InvalidUnit { .. } => "registry_invalid_unit",
            RegistryError::UnknownUnit { .. } => "registry_unknown_unit",
            RegistryError::UnitFailed { .. } => "registry_unit_failed",
            RegistryError::Busy => "registry_busy",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            RegistryError::DuplicateIdentifier { id } => format!("duplicate identifier: {id}"),
            RegistryError::InvalidUnit { id } => format!("no init capability: {id}"),
            RegistryError::UnknownUnit { id } => format!("unknown unit: {id}"),
            RegistryError::UnitFailed { id, source } => {
                format!("unit={id} {}", source.as_message())
            }
            RegistryError::Busy => "default registry re-entered".to_string(),
        }
    }

    /// Returns the identifier the error refers to, if any.
    pub fn identifier(&self) -> Option<&str> {
        match self {
            RegistryError::DuplicateIdentifier { id }
            | RegistryError::InvalidUnit { id }
            | RegistryError::UnknownUnit { id }
            | RegistryError::UnitFailed { id, .. } => Some(id),
            RegistryError::Busy => None,
        }
    }
}

/// # Errors raised by unit hooks.
///
/// The registry never retries a unit; the distinction between the variants is
/// informational and survives into logs through [`UnitError::as_label`].
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UnitError {
    /// The hook failed.
    #[error("execution failed: {error}")]
    Fail {
        /// The underlying error message.
        error: String,
    },

    /// The hook failed in a way that leaves the page unusable.
    #[error("fatal error: {error}")]
    Fatal {
        /// The underlying error message.
        error: String,
    },
}

impl UnitError {
    /// Shorthand for [`UnitError::Fail`].
    pub fn fail(error: impl Into<String>) -> Self {
        UnitError::Fail {
            error: error.into(),
        }
    }

    /// Shorthand for [`UnitError::Fatal`].
    pub fn fatal(error: impl Into<String>) -> Self {
        UnitError::Fatal {
            error: error.into(),
        }
    }

    /// Returns a short stable label (snake_case) for use in logs.
    ///
    /// # Example
    /// ```
    /// use pageboot::UnitError;
    ///
    /// assert_eq!(UnitError::fail("boom").as_label(), "unit_failed");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            UnitError::Fail { .. } => "unit_failed",
            UnitError::Fatal { .. } => "unit_fatal",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            UnitError::Fail { error } => format!("error: {error}"),
            UnitError::Fatal { error } => format!("fatal: {error}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_failed_carries_source() {
        let err = RegistryError::UnitFailed {
            id: "nav".into(),
            source: UnitError::fail("boom"),
        };
        assert_eq!(err.identifier(), Some("nav"));
        assert_eq!(err.as_message(), "unit=nav error: boom");
        assert_eq!(err.to_string(), "unit nav failed: execution failed: boom");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_busy_has_no_identifier() {
        assert_eq!(RegistryError::Busy.identifier(), None);
        assert_eq!(RegistryError::Busy.as_label(), "registry_busy");
    }
}

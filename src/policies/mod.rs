//! Registry policies.
//!
//! This module groups the knobs that change how the registry treats edge cases.
//!
//! ## Contents
//! - [`ResetPolicy`] what `reset` does with an identifier that was never registered
//!
//! ## Defaults
//! - `ResetPolicy::Fail` (strict contract: resetting a ghost is a programming error).

mod reset;

pub use reset::ResetPolicy;

//! Registry core: state, lifecycle and the default instance.
//!
//! Internal modules:
//! - [`registry`]: identifier → record mapping, `init`/`run`/`invoke`/`reset`;
//! - [`global`]: thread-local default registry for the page-session use case.

mod global;
mod registry;

pub use global::with_registry;
pub use registry::Registry;

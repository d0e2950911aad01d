//! Page-lifecycle glue.
//!
//! Everything between the host page and the [`Registry`](crate::Registry):
//! - [`root`]: reading the controller and module list from the root element;
//! - [`trigger`]: ready events, the fire-once guard and the polling fallback;
//! - [`bootstrap`]: [`Page`], which ties them to a registry;
//! - [`builder`]: [`PageBuilder`], for pages with subscribers.

mod bootstrap;
mod builder;
mod root;
mod trigger;

pub use bootstrap::Page;
pub use builder::PageBuilder;
pub use root::{Attributes, PageSpec, RootElement};
pub use trigger::{ReadyEvent, Trigger, poll_until_ready};

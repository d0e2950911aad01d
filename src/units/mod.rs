//! # Unit abstractions and registration records.
//!
//! This module provides the core unit-related types:
//! - [`Unit`] - capability contract (`init`, optional `reset`)
//! - [`Capabilities`] - which hooks a resolved object exposes
//! - [`UnitFn`] - closure-backed unit over user state
//! - [`Factory`] - ready object or lazy producer, given at registration
//! - [`Scope`] - declared-only or always-run membership
//! - [`Record`] - what the registry stores per identifier

mod factory;
mod record;
mod unit;
mod unit_fn;

pub use factory::{Factory, Producer, Scope};
pub use record::Record;
pub use unit::{Capabilities, Unit};
pub use unit_fn::UnitFn;

//! Core types for the Roster contact manager.
//!
//! Persons, roles and the `Model` abstraction the commands run against. This
//! crate does no I/O; loading records and driving commands happen elsewhere.

pub mod error;
pub mod model;
pub mod person;
pub mod role;

pub use error::{Error, Result};

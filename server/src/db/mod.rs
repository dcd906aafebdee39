//! # Persistence layer
//!
//! [`interface::DatabaseClient`] is the storage abstraction the API handlers are written against.
//! Concrete backends live in [`clients`].

pub mod clients;
pub mod interface;

//! # Notes server
//!
//! REST backend for short text notes and the users who write them. The HTTP handlers in [`api`]
//! are written against the [`db::interface::DatabaseClient`] trait; [`db::clients`] provides the
//! SQLite implementation.

pub mod api;
pub mod config;
pub mod db;
pub mod models;
pub mod password;
pub mod router;
pub mod ui;

//! SQLite persistence layer for the repotrack settings module.
//!
//! The whole durable state is a single `source_packages` table keyed by an
//! integer position. Reads return rows ordered by position; writes replace
//! the entire table contents in one transaction.

pub mod connection;
pub mod error;
pub mod migration;
pub mod models;
pub mod repository;
pub mod schema;

pub use connection::DbConnection;
pub use error::{DbError, Result};

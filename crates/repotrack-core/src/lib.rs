//! Core library for the repotrack settings module.
//!
//! Tracks a list of source code packages (name, projects, repository URL,
//! description) on behalf of a host application. The host provides
//! authentication and page plumbing; this crate owns the record model, the
//! persistent store, and the validation rules.

pub mod auth;
pub mod config;
pub mod context;
pub mod error;
pub mod package;
pub mod store;
pub mod validator;

pub use auth::{Authorizer, Subject};
pub use config::TrackerConfig;
pub use context::TrackerContext;
pub use error::{Result, TrackerError};
pub use package::SourcePackage;
pub use store::PackageStore;

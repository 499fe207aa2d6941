//! # Media Catalog
//!
//! A small in-memory catalog of media records behind a single
//! structured-query endpoint.
//!
//! ## Core Concepts
//!
//! - **Store**: ordered, lock-guarded media records; by-id operations act on
//!   the first match
//! - **Credentials**: a static registry checked with pattern containment
//! - **Resolver**: a closed set of operations (`media`, `mediaList`,
//!   `create`, `update`, `delete`) with typed arguments
//! - **Executor**: parses a query document, resolves each field on its own,
//!   and builds the `{"data", "errors"}` envelope
//!
//! ## Example
//!
//! ```ignore
//! use media_catalog::{Catalog, Executor, Resolver};
//! use std::sync::Arc;
//!
//! let executor = Executor::new(Resolver::new(Arc::new(Catalog::default())));
//! let response = executor.execute(r#"{mediaList(username:"hawk",password:"123"){id,name}}"#);
//! println!("{}", serde_json::to_string(&response)?);
//! ```

pub mod catalog;
pub mod config;
pub mod credentials;
pub mod document;
pub mod error;
pub mod executor;
pub mod pattern;
pub mod resolver;
pub mod server;
pub mod store;
pub mod types;

// Re-exports
pub use catalog::Catalog;
pub use config::ServerConfig;
pub use credentials::{CredentialRegistry, Verification};
pub use error::{DocumentError, ResolveError, Result};
pub use executor::{ErrorEntry, Executor, Response};
pub use pattern::PatternMode;
pub use resolver::{
    CreateArgs, DeleteArgs, MediaArgs, MediaListArgs, Operation, OperationKind, Resolved, Resolver,
    UpdateArgs, OPERATIONS,
};
pub use store::MediaStore;
pub use types::*;

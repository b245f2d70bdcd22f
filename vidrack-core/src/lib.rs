//! # Vidrack Core
//!
//! Core library for the vidrack video catalog, providing the repository and
//! data-access layer: identifier validation, domain/record mapping, and
//! pooled PostgreSQL access behind a uniform value-or-error contract.
//!
//! ## Architecture
//!
//! - [`database`]: the connection pool manager, the [`database::VideoDao`]
//!   port, and its PostgreSQL implementation
//! - [`repository`]: the validation-then-delegate facade callers use
//! - [`error`]: the classified error type shared across the layer
//!
//! Data flows caller → [`repository::VideoRepository`] → validate →
//! transform → [`database::VideoDao`] → transform back. The DAO is the only
//! component that touches the pool; the pool is the only component that
//! touches the network.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(missing_docs)]

/// Database abstraction layer and implementations
pub mod database;
/// Classified errors for the catalog layer
pub mod error;
/// Validation-then-delegate facades over the DAO ports
pub mod repository;

pub use error::{CatalogError, Result};

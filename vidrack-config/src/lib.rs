//! Shared configuration library for vidrack.
//!
//! Centralizes environment/`.env` resolution so the server binary and the
//! `vidrack-init` bootstrapper agree on key names, defaults, and the
//! database-URL composition rules.
#![allow(missing_docs)]

pub mod env_writer;
pub mod settings;

pub use settings::{
    ConfigError, DatabaseSettings, ServerSettings, Settings,
};

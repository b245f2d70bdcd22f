use thiserror::Error;

use vidrack_model::ValidationError;

/// Every failure the catalog layer can surface.
///
/// Validation failures are the caller's fault and are raised before any
/// storage contact; storage failures are the store's. Not-found is never an
/// error, read operations report it as an absent value.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Operation '{0}' is not implemented")]
    Unimplemented(&'static str),
}

pub type Result<T> = std::result::Result<T, CatalogError>;

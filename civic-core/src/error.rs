//! Error types for the event catalog.

use thiserror::Error;
use uuid::Uuid;

/// Errors that can occur in catalog operations.
///
/// Lookups on unknown categories or dates are not errors; they return empty
/// results. The only reportable failure is a broken insertion contract.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Event id already present in catalog: {0}")]
    DuplicateId(Uuid),
}

/// Result type alias for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

//! Catalog Error Types
//!
//! Construction-time validation errors. Lookup and selection never fail:
//! unknown task types resolve to the fallback entry, so the only way to
//! get a bad catalog is to build one.

use thiserror::Error;

use crate::catalog::FALLBACK_TASK_TYPE;

/// Errors raised when assembling a custom catalog
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// The entries did not include the fallback task type
    #[error("catalog is missing the \"{fallback}\" fallback entry", fallback = FALLBACK_TASK_TYPE)]
    MissingFallback,
    /// A task type mapped to an empty variant list
    #[error("task type \"{task_type}\" has no prompt variants")]
    EmptyVariants {
        /// The offending task type
        task_type: String,
    },
}

/// Result type alias for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

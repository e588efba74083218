//! Error types for the Department store.

use store_actor::FrameworkError;
use thiserror::Error;

/// Errors that can occur during department operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DepartmentError {
    /// The requested department was not found.
    #[error("Department not found: {0}")]
    NotFound(String),

    /// The department store could not be reached.
    #[error("Department store unavailable: {0}")]
    StoreUnavailable(String),
}

impl From<FrameworkError> for DepartmentError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(id) => DepartmentError::NotFound(id),
            other => DepartmentError::StoreUnavailable(other.to_string()),
        }
    }
}

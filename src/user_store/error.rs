//! Error types for the User store.

use crate::department_store::DepartmentError;
use crate::model::DepartmentId;
use store_actor::FrameworkError;
use thiserror::Error;

/// Errors that can occur during user operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum UserError {
    /// The requested user was not found.
    #[error("User not found: {0}")]
    NotFound(String),

    /// A patch referenced a department that does not exist.
    ///
    /// Only raised when strict department references are enabled.
    #[error("Unknown department: {0}")]
    UnknownDepartment(DepartmentId),

    /// The user store could not be reached.
    #[error("User store unavailable: {0}")]
    StoreUnavailable(String),

    /// A department lookup made on behalf of a user operation failed.
    #[error(transparent)]
    Department(#[from] DepartmentError),
}

impl From<FrameworkError> for UserError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(id) => UserError::NotFound(id),
            other => UserError::StoreUnavailable(other.to_string()),
        }
    }
}

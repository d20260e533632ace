//! Structural rejection shared by every storage and view

use mxstore_core::MatrixError;

/// Build the structural error for `operation` on `storage`, logging the rejection
pub(crate) fn illegal(operation: &'static str, storage: &'static str) -> MatrixError {
    tracing::debug!(storage, operation, "rejected structural mutation");
    MatrixError::illegal(operation, storage)
}

/// `Err(illegal(..))`, for storages that never allow `operation`
pub(crate) fn reject<T>(operation: &'static str, storage: &'static str) -> mxstore_core::Result<T> {
    Err(illegal(operation, storage))
}

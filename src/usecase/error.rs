//! UseCase layer error definitions.

use thiserror::Error;

use crate::domain::ExecutionError;

/// Errors from room mutation use cases
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UpdateRoomError {
    /// The targeted room is not present in the store
    #[error("room not found: {0}")]
    RoomNotFound(String),
}

/// Errors from the code execution use case
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExecuteCodeError {
    /// The requesting room is not present in the store
    #[error("room not found: {0}")]
    RoomNotFound(String),

    /// The execution service call failed
    #[error(transparent)]
    Service(#[from] ExecutionError),
}

//! Domain layer error definitions.

use thiserror::Error;

/// Errors related to Value Objects validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueObjectError {
    /// RoomId validation error
    #[error("RoomId cannot be empty")]
    RoomIdEmpty,

    /// RoomId too long error
    #[error("RoomId cannot exceed {max} characters (got {actual})")]
    RoomIdTooLong { max: usize, actual: usize },

    /// UserName validation error
    #[error("UserName cannot be empty")]
    UserNameEmpty,

    /// UserName too long error
    #[error("UserName cannot exceed {max} characters (got {actual})")]
    UserNameTooLong { max: usize, actual: usize },

    /// Language validation error
    #[error("Language cannot be empty")]
    LanguageEmpty,

    /// Language too long error
    #[error("Language cannot exceed {max} characters (got {actual})")]
    LanguageTooLong { max: usize, actual: usize },

    /// ConnectionId validation error
    #[error("ConnectionId cannot be empty")]
    ConnectionIdEmpty,
}

/// Errors returned by the Room Store and Connection Registry
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// The referenced room is not present in the store
    #[error("Room not found: {0}")]
    RoomNotFound(String),

    /// The referenced connection is not present in the registry
    #[error("Connection not found: {0}")]
    ConnectionNotFound(String),
}

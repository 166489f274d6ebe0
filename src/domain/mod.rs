//! Domain layer for the collaborative editor.
//!
//! This module contains business logic that is independent of
//! data transfer objects (DTOs) and infrastructure concerns.

pub mod entity;
pub mod error;
pub mod execution;
pub mod factory;
pub mod repository;
pub mod value_object;

pub use entity::{DEFAULT_LANGUAGE, PLACEHOLDER_DOCUMENT, Participant, Room};
pub use error::{RepositoryError, ValueObjectError};
pub use execution::{ExecutionError, ExecutionOutcome, ExecutionRequest, ExecutionService};
pub use factory::ConnectionIdFactory;
pub use repository::{ConnectionBinding, ConnectionRegistry, RoomStore};
pub use value_object::{ConnectionId, Language, RoomId, Timestamp, UserName};

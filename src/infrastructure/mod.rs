//! Infrastructure layer: DTOs, in-memory repositories and the HTTP client
//! for the external execution service.

pub mod dto;
pub mod execution;
pub mod repository;

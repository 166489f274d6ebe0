//! HTTP DTOs: admin API responses and the execution service wire format.

use serde::{Deserialize, Serialize};

/// Room summary for list endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomSummaryDto {
    pub id: String,
    pub users: Vec<String>,
    pub language: String,
    pub created_at: String, // ISO 8601
}

/// Room detail for detail endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomDetailDto {
    pub id: String,
    pub participants: Vec<ParticipantDetailDto>,
    pub document: String,
    pub language: String,
    pub last_output: Option<String>,
    pub created_at: String, // ISO 8601
}

/// Participant detail for room detail endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticipantDetailDto {
    pub connection_id: String,
    pub name: String,
    pub joined_at: String, // ISO 8601
}

/// Request body for the execution service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecuteRequestDto {
    pub language: String,
    pub version: String,
    pub files: Vec<ExecuteFileDto>,
}

/// One source file in an execution request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecuteFileDto {
    pub content: String,
}

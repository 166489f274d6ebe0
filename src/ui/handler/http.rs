//! HTTP API endpoint handlers.
//!
//! Read-only views over the Room Store for health checks and debugging;
//! the editing protocol itself lives on the WebSocket endpoint.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    common::time::timestamp_to_rfc3339,
    infrastructure::dto::http::{ParticipantDetailDto, RoomDetailDto, RoomSummaryDto},
    ui::state::AppState,
};

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

/// Get list of live rooms
pub async fn get_rooms(State(state): State<Arc<AppState>>) -> Json<Vec<RoomSummaryDto>> {
    let mut summaries: Vec<RoomSummaryDto> = state
        .rooms
        .list_rooms()
        .await
        .iter()
        .map(|room| RoomSummaryDto {
            id: room.id.as_str().to_string(),
            users: room.user_names(),
            language: room.language.as_str().to_string(),
            created_at: timestamp_to_rfc3339(room.created_at.value()),
        })
        .collect();

    // Sort by id for consistent ordering
    summaries.sort_by(|a, b| a.id.cmp(&b.id));

    Json(summaries)
}

/// Get room detail by ID
pub async fn get_room_detail(
    State(state): State<Arc<AppState>>,
    Path(room_id): Path<String>,
) -> Result<Json<RoomDetailDto>, StatusCode> {
    let room_id =
        crate::domain::RoomId::new(room_id).map_err(|_| StatusCode::BAD_REQUEST)?;

    let room = state
        .rooms
        .get(&room_id)
        .await
        .ok_or(StatusCode::NOT_FOUND)?;

    let room_detail = RoomDetailDto {
        id: room.id.as_str().to_string(),
        participants: room
            .participants
            .iter()
            .map(|p| ParticipantDetailDto {
                connection_id: p.connection_id.as_str().to_string(),
                name: p.name.as_str().to_string(),
                joined_at: timestamp_to_rfc3339(p.joined_at.value()),
            })
            .collect(),
        document: room.document.clone(),
        language: room.language.as_str().to_string(),
        last_output: room.last_output.clone(),
        created_at: timestamp_to_rfc3339(room.created_at.value()),
    };

    Ok(Json(room_detail))
}

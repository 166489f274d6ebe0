//! WebSocket connection handler: the session coordinator's event loop.
//!
//! Each connection runs its own receive loop; per-room mutation is
//! serialized inside the Room Store, so handlers run their effects to
//! completion without interleaving. The compile path is the one operation
//! allowed to suspend: it runs in a detached task so a slow execution
//! service never blocks event processing.

use std::sync::Arc;

use axum::{
    extract::{
        State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    response::IntoResponse,
};
use futures_util::{sink::SinkExt, stream::StreamExt};
use tokio::sync::mpsc;

use crate::{
    domain::{ConnectionId, ConnectionIdFactory, ExecutionRequest, Language, RoomId, UserName},
    infrastructure::dto::websocket::{ClientEvent, ServerEvent},
    ui::{broadcast::Broadcaster, state::AppState},
    usecase::{
        ExecuteCodeUseCase, JoinRoomUseCase, LeaveRoomUseCase, UpdateDocumentUseCase,
        UpdateLanguageUseCase,
    },
};

pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(|socket| handle_socket(socket, state))
}

async fn handle_socket(socket: WebSocket, state: Arc<AppState>) {
    let connection_id = ConnectionIdFactory::generate();
    let (mut sender, mut receiver) = socket.split();

    // Channel other tasks use to reach this connection
    let (tx, mut rx) = mpsc::unbounded_channel();
    state.connections.register(connection_id.clone(), tx).await;
    tracing::info!("Connection '{}' opened", connection_id);

    let recv_state = state.clone();
    let recv_connection_id = connection_id.clone();

    // Receive events from this client and dispatch them in arrival order
    let mut recv_task = tokio::spawn(async move {
        while let Some(msg) = receiver.next().await {
            let msg = match msg {
                Ok(msg) => msg,
                Err(e) => {
                    tracing::error!("WebSocket error: {}", e);
                    break;
                }
            };

            match msg {
                Message::Text(text) => {
                    match serde_json::from_str::<ClientEvent>(&text) {
                        Ok(event) => {
                            handle_event(&recv_state, &recv_connection_id, event).await;
                        }
                        Err(e) => {
                            tracing::warn!("Failed to parse client event: {}", e);
                            let broadcaster = Broadcaster::new(recv_state.connections.clone());
                            broadcaster
                                .send_to(
                                    &recv_connection_id,
                                    &ServerEvent::Error {
                                        message: format!("unrecognized event: {e}"),
                                    },
                                )
                                .await;
                        }
                    }
                }
                Message::Ping(_) => {
                    tracing::debug!("Received ping");
                    // Ping/pong is handled automatically by the WebSocket protocol
                }
                Message::Close(_) => {
                    tracing::info!("Connection '{}' requested close", recv_connection_id);
                    break;
                }
                _ => {}
            }
        }
    });

    // Forward events addressed to this connection out to the socket
    let mut send_task = tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            if sender.send(Message::Text(msg.into())).await.is_err() {
                break;
            }
        }
    });

    // If any one of the tasks completes, abort the other
    tokio::select! {
        _ = &mut recv_task => send_task.abort(),
        _ = &mut send_task => recv_task.abort(),
    };

    // Transport closed: same transition as leaveRoom, then drop the
    // registry entry entirely.
    let leave_usecase = LeaveRoomUseCase::new(state.rooms.clone(), state.connections.clone());
    if let Some(outcome) = leave_usecase.execute(&connection_id).await
        && !outcome.remaining_users.is_empty()
    {
        let broadcaster = Broadcaster::new(state.connections.clone());
        broadcaster
            .broadcast_room(
                &outcome.room_id,
                &ServerEvent::UserJoined {
                    users: outcome.remaining_users,
                },
            )
            .await;
    }
    state.connections.remove(&connection_id).await;
    tracing::info!("Connection '{}' closed", connection_id);
}

/// Dispatch one client event. Events from a single connection are processed
/// in the order they were sent.
async fn handle_event(state: &Arc<AppState>, connection_id: &ConnectionId, event: ClientEvent) {
    let broadcaster = Broadcaster::new(state.connections.clone());

    match event {
        ClientEvent::Join { room_id, user_name } => {
            let (room_id, name) =
                match (RoomId::try_from(room_id), UserName::try_from(user_name)) {
                    (Ok(room_id), Ok(name)) => (room_id, name),
                    (Err(e), _) | (_, Err(e)) => {
                        broadcaster
                            .send_to(
                                connection_id,
                                &ServerEvent::Error {
                                    message: e.to_string(),
                                },
                            )
                            .await;
                        return;
                    }
                };

            let usecase = JoinRoomUseCase::new(state.rooms.clone(), state.connections.clone());
            let outcome = usecase
                .execute(connection_id, room_id.clone(), name.clone())
                .await;

            // Survivors of a room the connection implicitly left
            if let Some(previous) = outcome.previous_room {
                broadcaster
                    .broadcast_room(
                        &previous.room_id,
                        &ServerEvent::UserJoined {
                            users: previous.remaining_users,
                        },
                    )
                    .await;
            }

            // Room snapshot to the joining connection only
            broadcaster
                .send_to(
                    connection_id,
                    &ServerEvent::RoomState {
                        users: outcome.room.user_names(),
                        code: outcome.room.document.clone(),
                        language: outcome.room.language.as_str().to_string(),
                    },
                )
                .await;

            // Updated member list to the room, joiner included
            broadcaster
                .broadcast_room(
                    &room_id,
                    &ServerEvent::UserJoined {
                        users: outcome.room.user_names(),
                    },
                )
                .await;

            tracing::info!("Connection '{}' joined room '{}' as '{}'", connection_id, room_id, name);
        }

        ClientEvent::CodeChange { room_id, code } => {
            let Ok(room_id) = RoomId::try_from(room_id) else {
                broadcaster
                    .send_to(
                        connection_id,
                        &ServerEvent::Error {
                            message: "invalid room id".to_string(),
                        },
                    )
                    .await;
                return;
            };

            let usecase = UpdateDocumentUseCase::new(state.rooms.clone());
            match usecase.execute(&room_id, code.clone()).await {
                Ok(()) => {
                    broadcaster
                        .broadcast_room_except(
                            &room_id,
                            connection_id,
                            &ServerEvent::CodeUpdate { code },
                        )
                        .await;
                }
                Err(e) => {
                    broadcaster
                        .send_to(
                            connection_id,
                            &ServerEvent::Error {
                                message: e.to_string(),
                            },
                        )
                        .await;
                }
            }
        }

        ClientEvent::LanguageChange { room_id, language } => {
            let (room_id, language) =
                match (RoomId::try_from(room_id), Language::try_from(language)) {
                    (Ok(room_id), Ok(language)) => (room_id, language),
                    (Err(e), _) | (_, Err(e)) => {
                        broadcaster
                            .send_to(
                                connection_id,
                                &ServerEvent::Error {
                                    message: e.to_string(),
                                },
                            )
                            .await;
                        return;
                    }
                };

            let usecase = UpdateLanguageUseCase::new(state.rooms.clone());
            match usecase.execute(&room_id, language.clone()).await {
                Ok(()) => {
                    broadcaster
                        .broadcast_room_except(
                            &room_id,
                            connection_id,
                            &ServerEvent::LanguageUpdate {
                                language: language.into_string(),
                            },
                        )
                        .await;
                }
                Err(e) => {
                    broadcaster
                        .send_to(
                            connection_id,
                            &ServerEvent::Error {
                                message: e.to_string(),
                            },
                        )
                        .await;
                }
            }
        }

        ClientEvent::Typing {
            room_id,
            user_name,
            socket_id,
        } => {
            // Presence is best-effort: a signal without a name is dropped
            if user_name.is_empty() {
                return;
            }
            let Ok(room_id) = RoomId::try_from(room_id) else {
                return;
            };
            broadcaster
                .broadcast_room_except(
                    &room_id,
                    connection_id,
                    &ServerEvent::UserTyping {
                        user_name,
                        socket_id,
                    },
                )
                .await;
        }

        ClientEvent::CompileCode {
            code,
            room_id,
            language,
            version,
        } => {
            let Ok(room_id) = RoomId::try_from(room_id) else {
                broadcaster
                    .send_to(
                        connection_id,
                        &ServerEvent::Error {
                            message: "invalid room id".to_string(),
                        },
                    )
                    .await;
                return;
            };

            let usecase = ExecuteCodeUseCase::new(state.rooms.clone(), state.executor.clone());
            let request = ExecutionRequest {
                language,
                version,
                code,
            };

            // Detached so the connection keeps processing events while the
            // execution service call is in flight.
            let task_state = state.clone();
            let task_connection_id = connection_id.clone();
            tokio::spawn(async move {
                let broadcaster = Broadcaster::new(task_state.connections.clone());
                match usecase.execute(&room_id, request).await {
                    Ok(outcome) => {
                        broadcaster
                            .broadcast_room(
                                &room_id,
                                &ServerEvent::CodeResponse {
                                    response: outcome.payload,
                                },
                            )
                            .await;
                    }
                    Err(crate::usecase::ExecuteCodeError::RoomNotFound(_)) => {
                        broadcaster
                            .send_to(
                                &task_connection_id,
                                &ServerEvent::Error {
                                    message: format!("room not found: {room_id}"),
                                },
                            )
                            .await;
                    }
                    Err(crate::usecase::ExecuteCodeError::Service(e)) => {
                        tracing::warn!("Execution failed for room '{}': {}", room_id, e);
                        broadcaster
                            .broadcast_room(
                                &room_id,
                                &ServerEvent::ExecutionError {
                                    message: e.to_string(),
                                },
                            )
                            .await;
                    }
                }
            });
        }

        ClientEvent::LeaveRoom => {
            let usecase = LeaveRoomUseCase::new(state.rooms.clone(), state.connections.clone());
            if let Some(outcome) = usecase.execute(connection_id).await {
                tracing::info!("Connection '{}' left room '{}'", connection_id, outcome.room_id);
                if !outcome.remaining_users.is_empty() {
                    broadcaster
                        .broadcast_room(
                            &outcome.room_id,
                            &ServerEvent::UserJoined {
                                users: outcome.remaining_users,
                            },
                        )
                        .await;
                }
            }
        }
    }
}

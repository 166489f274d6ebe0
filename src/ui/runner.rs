//! Server assembly and main loop.

use std::{net::SocketAddr, sync::Arc, time::Duration};

use axum::{Router, routing::get};
use thiserror::Error;
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::{
    config::ServerConfig,
    domain::{ConnectionRegistry, ExecutionService, RoomStore},
    infrastructure::{
        execution::PistonClient,
        repository::{InMemoryConnectionRegistry, InMemoryRoomStore},
    },
    ui::{
        handler::{get_room_detail, get_rooms, health_check, websocket_handler},
        signal::shutdown_signal,
        state::AppState,
    },
};

/// Errors that prevent the server from starting or keep running
#[derive(Debug, Error)]
pub enum ServerError {
    /// Failed to bind or serve
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to construct the execution service client
    #[error("startup error: {0}")]
    Startup(String),
}

/// Build the application state and run the server until shutdown.
pub async fn run(config: ServerConfig) -> Result<(), ServerError> {
    let rooms: Arc<dyn RoomStore> = Arc::new(InMemoryRoomStore::new());
    let connections: Arc<dyn ConnectionRegistry> = Arc::new(InMemoryConnectionRegistry::new());
    let executor: Arc<dyn ExecutionService> = Arc::new(
        PistonClient::new(
            config.execution_url.clone(),
            Duration::from_secs(config.execution_timeout_secs),
        )
        .map_err(|e| ServerError::Startup(e.to_string()))?,
    );

    let state = Arc::new(AppState {
        rooms,
        connections,
        executor,
    });

    let app = Router::new()
        .route("/ws", get(websocket_handler))
        .route("/api/health", get(health_check))
        .route("/api/rooms", get(get_rooms))
        .route("/api/rooms/{room_id}", get(get_room_detail))
        .fallback_service(ServeDir::new(&config.static_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

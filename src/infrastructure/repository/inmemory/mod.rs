//! In-memory repository implementations backed by `HashMap`.

pub mod connection;
pub mod room;

pub use connection::InMemoryConnectionRegistry;
pub use room::InMemoryRoomStore;

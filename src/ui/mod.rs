//! WebSocket session coordinator and HTTP surface.

mod broadcast;
mod handler;
mod runner;
mod signal;
pub mod state;

pub use broadcast::Broadcaster;
pub use runner::{ServerError, run};

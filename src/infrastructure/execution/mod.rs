//! HTTP client for the external code execution service.

pub mod piston;

pub use piston::PistonClient;

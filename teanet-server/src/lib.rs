//! # Teanet Server Library
//!
//! Session loop, command dispatch and listener for the Teanet line server.
//! The binary in `main.rs` only wires logging and the lookup client together.

pub mod dispatch;
pub mod server;

pub use dispatch::Flow;

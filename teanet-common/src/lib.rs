// teanet-common - Shared protocol text, command model and lookup types for Teanet
//
// This crate defines what crosses the wire and what a lookup returns

pub mod command;
pub mod error;
pub mod protocol;
pub mod summary;

// Re-export for convenience
pub use command::*;
pub use error::*;
pub use summary::*;

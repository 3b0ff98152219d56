//! Remote-control bridge between the OS command center and the player.
//!
//! Architecture:
//! - `command.rs` - raw native command codes and their typed representation
//! - `bridge.rs` - command translation and player event subscription
//! - `metadata.rs` - now-playing record construction
//! - `registry.rs` - process-wide recipient slot and the context-free
//!   dispatch entry point the native callback targets

mod bridge;
mod command;
mod metadata;
mod registry;

#[cfg(test)]
pub(crate) mod testing;

pub use bridge::RemoteBridge;
pub use command::{codes, RemoteCommand};
pub use registry::{deregister, dispatch_raw, register, RegisterError};

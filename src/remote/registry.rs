//! Process-wide command recipient slot.
//!
//! The native command callback is a free-standing function with no
//! user-data parameter, so inbound commands cannot carry an owning
//! instance across the boundary. Routing instead goes through a single
//! slot: written once at registration, read on every inbound command.

use std::sync::Arc;

use parking_lot::RwLock;
use thiserror::Error;

use crate::center::{CenterError, MediaCenter};
use crate::config::BridgeConfig;
use crate::player::ControlledPlayer;

use super::bridge::RemoteBridge;
use super::command::RemoteCommand;

static RECIPIENT: RwLock<Option<Arc<RemoteBridge>>> = RwLock::new(None);

/// Errors from bridge registration.
#[derive(Error, Debug)]
pub enum RegisterError {
  /// A bridge is already the active recipient. Registration is rejected
  /// rather than silently replacing the previous recipient.
  #[error("A remote bridge is already registered")]
  AlreadyRegistered,

  #[error("Native command registration failed: {0}")]
  Native(#[from] CenterError),
}

/// Create a bridge, register native interest in media commands, and
/// install the bridge as the process-wide command recipient.
///
/// A native-side refusal leaves the slot empty, so the application can
/// continue without remote-control support and retry later if it wants.
/// The write lock is held across native registration so concurrent
/// registration attempts serialize instead of racing for the slot.
pub fn register(
  player: Arc<dyn ControlledPlayer>,
  center: Arc<dyn MediaCenter>,
  config: &BridgeConfig,
) -> Result<Arc<RemoteBridge>, RegisterError> {
  let mut slot = RECIPIENT.write();
  if slot.is_some() {
    return Err(RegisterError::AlreadyRegistered);
  }

  center.register_remote_commands()?;

  let bridge = RemoteBridge::new(player, center, config);
  bridge.attach_player_listeners();
  *slot = Some(bridge.clone());

  log::info!("remote bridge registered");
  Ok(bridge)
}

/// Clear the recipient slot.
///
/// The production lifecycle never tears the bridge down; this exists for
/// orderly shutdown and for tests. Only inbound dispatch stops: listeners
/// already attached to the player stay attached, so the old bridge keeps
/// mirroring player events to its `MediaCenter`. Registering a new bridge
/// for the same player adds a second set of listeners alongside the old
/// one; it does not stop the old outbound flow.
pub fn deregister() {
  RECIPIENT.write().take();
}

/// Entry point for the context-free native command callback.
///
/// Dispatch is best-effort: unrecognized codes are logged and dropped, and
/// commands arriving before registration (or after deregistration) are
/// dropped quietly. The recipient is cloned out of the slot before
/// dispatch so no lock is held across player calls.
pub fn dispatch_raw(code: u32, value: f64) {
  let recipient = RECIPIENT.read().clone();
  let Some(bridge) = recipient else {
    log::debug!("remote command {} dropped: no bridge registered", code);
    return;
  };

  match RemoteCommand::decode(code, value) {
    Some(command) => bridge.handle_command(command),
    None => log::warn!("unknown remote command code: {}", code),
  }
}

//! Bridge between the host OS media command center and a controlled player.
//!
//! Inbound OS playback commands (hardware media keys, lock-screen and
//! remote controls) are translated into calls on a [`ControlledPlayer`];
//! player lifecycle events are propagated back out as now-playing metadata
//! and playback-state flags through a [`MediaCenter`].
//!
//! The native command source invokes a free-standing callback with no
//! attached context, so command routing goes through a process-wide
//! recipient slot (see [`remote::dispatch_raw`]). Register exactly once at
//! startup with [`enable_remote_control`].

use std::sync::Arc;

mod center;
mod config;
pub mod player;
pub mod remote;

pub use center::{CenterError, MediaCenter, NowPlayingInfo};
pub use config::BridgeConfig;
pub use player::{ControlledPlayer, PlaybackState, PlayerError, TrackInfo};
pub use remote::{RegisterError, RemoteBridge, RemoteCommand};

/// Enable remote-control support for `player`, honoring the configuration.
///
/// Returns `Ok(None)` when remote control is disabled in `config`. A native
/// registration failure is surfaced so the application can continue without
/// remote-control support.
pub fn enable_remote_control(
  player: Arc<dyn ControlledPlayer>,
  center: Arc<dyn MediaCenter>,
  config: &BridgeConfig,
) -> Result<Option<Arc<RemoteBridge>>, RegisterError> {
  if !config.enabled {
    log::info!("remote control disabled by configuration");
    return Ok(None);
  }
  remote::register(player, center, config).map(Some)
}

//! The active bridge instance.
//!
//! Inbound: translates system media commands into player-control calls.
//! Outbound: subscribes to the player's lifecycle events and mirrors state
//! and metadata into the media command center.

use std::sync::Arc;

use crate::center::MediaCenter;
use crate::config::BridgeConfig;
use crate::player::{ControlledPlayer, PlaybackState, PlayerError, TrackInfo};

use super::command::RemoteCommand;
use super::metadata::build_now_playing;

/// Bridge between the media command center and the player.
///
/// Exactly one instance is the active command recipient at a time; see
/// [`super::register`].
pub struct RemoteBridge {
  player: Arc<dyn ControlledPlayer>,
  center: Arc<dyn MediaCenter>,
  artwork_url: String,
}

impl std::fmt::Debug for RemoteBridge {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("RemoteBridge")
      .field("artwork_url", &self.artwork_url)
      .finish_non_exhaustive()
  }
}

impl RemoteBridge {
  pub(crate) fn new(
    player: Arc<dyn ControlledPlayer>,
    center: Arc<dyn MediaCenter>,
    config: &BridgeConfig,
  ) -> Arc<Self> {
    Arc::new(Self {
      player,
      center,
      artwork_url: config.artwork_url.clone(),
    })
  }

  /// Translate one inbound command into exactly one player-control call.
  ///
  /// Commands are fire-and-forget from the OS's perspective: a failing
  /// player call is logged with the operation name and never propagated.
  pub fn handle_command(&self, command: RemoteCommand) {
    match command {
      RemoteCommand::Play => self.control("Play", self.player.play()),
      RemoteCommand::Pause => self.control("Pause", self.player.pause()),
      RemoteCommand::Stop => self.control("Stop", self.player.stop()),
      // TODO: flip on the player's actual pause state; remotes sending
      // TOGGLE currently only ever pause.
      RemoteCommand::TogglePlayPause => self.control("Pause", self.player.pause()),
      RemoteCommand::PreviousTrack => {
        self.control("PreviousTrack", self.player.previous_track())
      }
      RemoteCommand::NextTrack => self.control("NextTrack", self.player.next_track()),
      RemoteCommand::SeekAbsolute(seconds) => {
        self.control("SeekAbsolute", self.player.seek_absolute(seconds))
      }
    }
  }

  fn control(&self, operation: &str, result: Result<(), PlayerError>) {
    if let Err(e) = result {
      log::error!("{} failed: {}", operation, e);
    }
  }

  /// Attach one listener per player lifecycle event.
  ///
  /// Listeners run synchronously on the player's emitting context, so they
  /// only mirror state outward and return; nothing here blocks.
  pub(crate) fn attach_player_listeners(self: &Arc<Self>) {
    let bridge = self.clone();
    self.player.on_song_change(Box::new(move |track: Option<&dyn TrackInfo>| {
      log::debug!("player event: song change");
      bridge.publish_metadata(track);
    }));

    let bridge = self.clone();
    self.player.on_stopped(Box::new(move || {
      log::debug!("player event: stopped");
      bridge.center.set_playback_state(PlaybackState::Stopped);
    }));

    let bridge = self.clone();
    self.player.on_seek(Box::new(move || {
      log::debug!("player event: seek");
      bridge.center.update_position(bridge.player.time_pos());
    }));

    let bridge = self.clone();
    self.player.on_playing(Box::new(move || {
      log::debug!("player event: playing");
      bridge.center.set_playback_state(PlaybackState::Playing);
      bridge.center.update_position(bridge.player.time_pos());
    }));

    let bridge = self.clone();
    self.player.on_paused(Box::new(move || {
      log::debug!("player event: paused");
      bridge.center.set_playback_state(PlaybackState::Paused);
      bridge.center.update_position(bridge.player.time_pos());
    }));
  }

  fn publish_metadata(&self, track: Option<&dyn TrackInfo>) {
    let info = build_now_playing(track, &self.artwork_url);
    self.center.set_now_playing(&info);
  }
}

//! Player control abstraction consumed by the remote bridge.
//!
//! The transport behind [`ControlledPlayer`] (IPC to an external player
//! process, an in-process decoder, ...) is out of scope here; the bridge
//! only needs the control surface and the lifecycle event stream.

mod events;

pub use events::PlayerEvents;

use thiserror::Error;

/// Errors from player control calls.
///
/// The underlying transport is opaque at this boundary, so failures carry
/// a message rather than a structured cause. The bridge only consumes
/// these; host player implementations construct them.
#[derive(Error, Debug)]
pub enum PlayerError {
  #[error("Player command failed: {0}")]
  Command(String),

  /// For host implementations whose player is a separate process or
  /// connection that may not be up when a command arrives.
  #[error("Player is not running")]
  NotRunning,
}

/// Playback state as owned and transitioned by the player.
///
/// The bridge mirrors this outward and never decides transitions itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
  Playing,
  Paused,
  Stopped,
}

/// Metadata of the track a player currently holds.
///
/// A track may be invalid (nothing loaded, metadata not yet known), in
/// which case all display fields resolve to empty/zero.
pub trait TrackInfo: Send + Sync {
  fn is_valid(&self) -> bool;
  fn title(&self) -> String;
  fn artist(&self) -> String;
  /// Track length in whole seconds.
  fn duration(&self) -> i64;
}

/// Handler for song-change events. `None` means no track is loaded.
pub type SongChangeHandler = Box<dyn Fn(Option<&dyn TrackInfo>) + Send + Sync>;

/// Handler for the remaining lifecycle events.
pub type LifecycleHandler = Box<dyn Fn() + Send + Sync>;

/// Control surface of the audio player.
///
/// Lifecycle handlers are invoked synchronously on the player's emitting
/// context at the moment of the transition and must not block.
pub trait ControlledPlayer: Send + Sync {
  fn play(&self) -> Result<(), PlayerError>;
  fn pause(&self) -> Result<(), PlayerError>;
  fn stop(&self) -> Result<(), PlayerError>;
  fn next_track(&self) -> Result<(), PlayerError>;
  fn previous_track(&self) -> Result<(), PlayerError>;

  /// Seek to an absolute position in seconds.
  fn seek_absolute(&self, seconds: f64) -> Result<(), PlayerError>;

  /// Current playback position in seconds.
  fn time_pos(&self) -> f64;

  fn on_song_change(&self, handler: SongChangeHandler);
  fn on_stopped(&self, handler: LifecycleHandler);
  fn on_seek(&self, handler: LifecycleHandler);
  fn on_playing(&self, handler: LifecycleHandler);
  fn on_paused(&self, handler: LifecycleHandler);
}

//! Recording mocks for the player and media-center boundaries.

use parking_lot::Mutex;

use crate::center::{CenterError, MediaCenter, NowPlayingInfo};
use crate::player::{
  ControlledPlayer, LifecycleHandler, PlaybackState, PlayerError, PlayerEvents,
  SongChangeHandler, TrackInfo,
};

/// Player mock recording control calls and exposing its event hub.
pub(crate) struct MockPlayer {
  pub(crate) calls: Mutex<Vec<String>>,
  pub(crate) events: PlayerEvents,
  fail_next: Mutex<Option<String>>,
  time_pos: Mutex<f64>,
}

impl MockPlayer {
  pub(crate) fn new() -> Self {
    Self {
      calls: Mutex::new(Vec::new()),
      events: PlayerEvents::new(),
      fail_next: Mutex::new(None),
      time_pos: Mutex::new(0.0),
    }
  }

  /// Make the next control call fail with the given message.
  pub(crate) fn fail_next(&self, message: &str) {
    *self.fail_next.lock() = Some(message.to_string());
  }

  pub(crate) fn set_time_pos(&self, seconds: f64) {
    *self.time_pos.lock() = seconds;
  }

  fn record(&self, call: String) -> Result<(), PlayerError> {
    self.calls.lock().push(call);
    match self.fail_next.lock().take() {
      Some(message) => Err(PlayerError::Command(message)),
      None => Ok(()),
    }
  }
}

impl ControlledPlayer for MockPlayer {
  fn play(&self) -> Result<(), PlayerError> {
    self.record("play".to_string())
  }

  fn pause(&self) -> Result<(), PlayerError> {
    self.record("pause".to_string())
  }

  fn stop(&self) -> Result<(), PlayerError> {
    self.record("stop".to_string())
  }

  fn next_track(&self) -> Result<(), PlayerError> {
    self.record("next_track".to_string())
  }

  fn previous_track(&self) -> Result<(), PlayerError> {
    self.record("previous_track".to_string())
  }

  fn seek_absolute(&self, seconds: f64) -> Result<(), PlayerError> {
    self.record(format!("seek_absolute({})", seconds))
  }

  fn time_pos(&self) -> f64 {
    *self.time_pos.lock()
  }

  fn on_song_change(&self, handler: SongChangeHandler) {
    self.events.on_song_change(handler);
  }

  fn on_stopped(&self, handler: LifecycleHandler) {
    self.events.on_stopped(handler);
  }

  fn on_seek(&self, handler: LifecycleHandler) {
    self.events.on_seek(handler);
  }

  fn on_playing(&self, handler: LifecycleHandler) {
    self.events.on_playing(handler);
  }

  fn on_paused(&self, handler: LifecycleHandler) {
    self.events.on_paused(handler);
  }
}

/// Media-center mock recording outbound pushes in arrival order.
pub(crate) struct MockCenter {
  pub(crate) ops: Mutex<Vec<String>>,
  refuse_registration: bool,
}

impl MockCenter {
  pub(crate) fn new() -> Self {
    Self {
      ops: Mutex::new(Vec::new()),
      refuse_registration: false,
    }
  }

  /// A center that refuses command registration.
  pub(crate) fn refusing() -> Self {
    Self {
      ops: Mutex::new(Vec::new()),
      refuse_registration: true,
    }
  }
}

impl MediaCenter for MockCenter {
  fn register_remote_commands(&self) -> Result<(), CenterError> {
    if self.refuse_registration {
      return Err(CenterError::RegistrationRefused("denied".to_string()));
    }
    self.ops.lock().push("register".to_string());
    Ok(())
  }

  fn set_playback_state(&self, state: PlaybackState) {
    self.ops.lock().push(format!("state:{:?}", state));
  }

  fn update_position(&self, seconds: f64) {
    self.ops.lock().push(format!("position:{}", seconds));
  }

  fn set_now_playing(&self, info: &NowPlayingInfo) {
    self.ops.lock().push(format!(
      "now_playing:{}|{}|{}|{}",
      info.title, info.artist, info.artwork_url, info.duration_seconds
    ));
  }
}

/// Track mock with fixed metadata.
pub(crate) struct MockTrack {
  valid: bool,
  title: String,
  artist: String,
  duration: i64,
}

impl MockTrack {
  pub(crate) fn new(title: &str, artist: &str, duration: i64) -> Self {
    Self {
      valid: true,
      title: title.to_string(),
      artist: artist.to_string(),
      duration,
    }
  }

  /// A track whose metadata must not be displayed.
  pub(crate) fn invalid() -> Self {
    Self {
      valid: false,
      title: "ignored".to_string(),
      artist: "ignored".to_string(),
      duration: 999,
    }
  }
}

impl TrackInfo for MockTrack {
  fn is_valid(&self) -> bool {
    self.valid
  }

  fn title(&self) -> String {
    self.title.clone()
  }

  fn artist(&self) -> String {
    self.artist.clone()
  }

  fn duration(&self) -> i64 {
    self.duration
  }
}

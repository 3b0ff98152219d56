//! Per-kind listener lists for player lifecycle events.

use std::sync::Arc;

use parking_lot::RwLock;

use super::{LifecycleHandler, SongChangeHandler, TrackInfo};

type SharedSongChange = Arc<dyn Fn(Option<&dyn TrackInfo>) + Send + Sync>;
type SharedLifecycle = Arc<dyn Fn() + Send + Sync>;

/// Listener lists a player implementation embeds to drive its event stream.
///
/// `emit_*` walks the matching list synchronously on the calling context.
/// Handlers are cloned out before invocation, so a handler may register
/// further handlers without deadlocking, and emission never holds a lock
/// across user code.
#[derive(Default)]
pub struct PlayerEvents {
  song_change: RwLock<Vec<SharedSongChange>>,
  stopped: RwLock<Vec<SharedLifecycle>>,
  seek: RwLock<Vec<SharedLifecycle>>,
  playing: RwLock<Vec<SharedLifecycle>>,
  paused: RwLock<Vec<SharedLifecycle>>,
}

impl PlayerEvents {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn on_song_change(&self, handler: SongChangeHandler) {
    self.song_change.write().push(Arc::from(handler));
  }

  pub fn on_stopped(&self, handler: LifecycleHandler) {
    self.stopped.write().push(Arc::from(handler));
  }

  pub fn on_seek(&self, handler: LifecycleHandler) {
    self.seek.write().push(Arc::from(handler));
  }

  pub fn on_playing(&self, handler: LifecycleHandler) {
    self.playing.write().push(Arc::from(handler));
  }

  pub fn on_paused(&self, handler: LifecycleHandler) {
    self.paused.write().push(Arc::from(handler));
  }

  pub fn emit_song_change(&self, track: Option<&dyn TrackInfo>) {
    for handler in Self::snapshot(&self.song_change) {
      handler(track);
    }
  }

  pub fn emit_stopped(&self) {
    Self::emit(&self.stopped);
  }

  pub fn emit_seek(&self) {
    Self::emit(&self.seek);
  }

  pub fn emit_playing(&self) {
    Self::emit(&self.playing);
  }

  pub fn emit_paused(&self) {
    Self::emit(&self.paused);
  }

  fn snapshot<T: Clone>(list: &RwLock<Vec<T>>) -> Vec<T> {
    list.read().clone()
  }

  fn emit(list: &RwLock<Vec<SharedLifecycle>>) {
    for handler in Self::snapshot(list) {
      handler();
    }
  }
}

//! Native media command center call contract.
//!
//! The adapter behind this trait is platform code owned by the host
//! application (MPNowPlayingInfoCenter on macOS, SMTC on Windows, MPRIS on
//! Linux). The bridge only consumes the contract: outbound pushes are
//! fire-and-forget and never report failure back; only command
//! registration at startup can fail.

use thiserror::Error;

use crate::player::PlaybackState;

/// Errors from the native command center adapter.
///
/// Constructed by host [`MediaCenter`] implementations; the bridge only
/// consumes them during registration.
#[derive(Error, Debug)]
pub enum CenterError {
  #[error("Command registration refused: {0}")]
  RegistrationRefused(String),

  /// For host adapters on platforms or sessions with no media command
  /// center to register with (headless session, missing session bus).
  #[error("Media command center unavailable")]
  Unavailable,
}

/// Fully-resolved now-playing record handed to the native layer.
///
/// Every field is populated before the record crosses the boundary; an
/// absent or invalid track resolves to empty strings and zero duration.
#[derive(Debug, Clone, PartialEq)]
pub struct NowPlayingInfo {
  pub title: String,
  pub artist: String,
  pub artwork_url: String,
  pub duration_seconds: f64,
}

/// Outbound surface of the OS media command center.
///
/// Implementations must tolerate calls from arbitrary threads: playback
/// state and position updates arrive on whatever context the player emits
/// its events from.
pub trait MediaCenter: Send + Sync {
  /// Register interest in system media commands. Called once at startup;
  /// a refusal is surfaced to the caller so the application can continue
  /// without remote-control support.
  fn register_remote_commands(&self) -> Result<(), CenterError>;

  /// Mirror the player's playback state outward.
  fn set_playback_state(&self, state: PlaybackState);

  /// Push the current playback position, in seconds.
  fn update_position(&self, seconds: f64);

  /// Replace the OS-visible now-playing metadata.
  fn set_now_playing(&self, info: &NowPlayingInfo);
}

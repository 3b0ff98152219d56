//! Now-playing record construction.

use crate::center::NowPlayingInfo;
use crate::player::TrackInfo;

/// Build a fully-resolved now-playing record from the current track.
///
/// An absent or invalid track resolves to empty display fields and zero
/// duration, never a partially populated record. Artwork is not derived
/// from the track; the configured placeholder is always substituted.
pub(crate) fn build_now_playing(
  track: Option<&dyn TrackInfo>,
  artwork_url: &str,
) -> NowPlayingInfo {
  let (title, artist, duration) = match track {
    Some(track) if track.is_valid() => (track.title(), track.artist(), track.duration()),
    _ => (String::new(), String::new(), 0),
  };

  NowPlayingInfo {
    title,
    artist,
    artwork_url: artwork_url.to_string(),
    duration_seconds: duration as f64,
  }
}

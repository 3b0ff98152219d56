//! Inbound media command codes and their typed representation.

/// Raw command codes as delivered by the native layer.
pub mod codes {
  pub const PLAY: u32 = 0;
  pub const PAUSE: u32 = 1;
  pub const STOP: u32 = 2;
  pub const TOGGLE: u32 = 3;
  pub const PREVIOUS_TRACK: u32 = 4;
  pub const NEXT_TRACK: u32 = 5;
  pub const SEEK: u32 = 6;
}

/// A system media command, fully formed before dispatch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RemoteCommand {
  Play,
  Pause,
  Stop,
  TogglePlayPause,
  PreviousTrack,
  NextTrack,
  /// Seek to an absolute position in seconds.
  SeekAbsolute(f64),
}

impl RemoteCommand {
  /// Decode a raw native command. `value` only carries meaning for seek,
  /// where it is the target position in seconds. Returns `None` for codes
  /// this bridge does not recognize.
  pub fn decode(code: u32, value: f64) -> Option<Self> {
    match code {
      codes::PLAY => Some(Self::Play),
      codes::PAUSE => Some(Self::Pause),
      codes::STOP => Some(Self::Stop),
      codes::TOGGLE => Some(Self::TogglePlayPause),
      codes::PREVIOUS_TRACK => Some(Self::PreviousTrack),
      codes::NEXT_TRACK => Some(Self::NextTrack),
      codes::SEEK => Some(Self::SeekAbsolute(value)),
      _ => None,
    }
  }
}

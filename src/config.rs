//! Bridge configuration.

use serde::{Deserialize, Serialize};

/// Remote-control bridge configuration.
///
/// Persistence belongs to the host application; this struct only carries
/// the knobs the bridge itself reads.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BridgeConfig {
  /// Whether to register with the OS media command center at startup.
  #[serde(default = "default_enabled")]
  pub enabled: bool,

  /// Artwork shown for every track. There is no cover-art source, so a
  /// fixed placeholder is substituted for all tracks.
  #[serde(default = "default_artwork_url")]
  pub artwork_url: String,
}

fn default_enabled() -> bool {
  true
}

fn default_artwork_url() -> String {
  "https://placehold.co/512x512.png?text=No+Cover".to_string()
}

impl Default for BridgeConfig {
  fn default() -> Self {
    Self {
      enabled: default_enabled(),
      artwork_url: default_artwork_url(),
    }
  }
}

impl BridgeConfig {
  /// Validate configuration values.
  pub fn validate(&self) -> Result<(), String> {
    if self.artwork_url.trim().is_empty() {
      return Err("Artwork URL cannot be empty".to_string());
    }
    Ok(())
  }
}

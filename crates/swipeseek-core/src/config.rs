//! Persistent default overrides for swipe behavior.
//!
//! Stores user settings in `~/.swipeseek/config.json`. Every field is
//! optional: a set field overrides the corresponding library default when a
//! [`SwipeProperties`](crate::swipe::SwipeProperties) is built via
//! `SwipeProperties::from_defaults`, unset fields leave it untouched.
//!
//! # Example
//!
//! ```no_run
//! use swipeseek_core::config::SwipeDefaults;
//! use swipeseek_core::swipe::SwipeProperties;
//!
//! // Load (returns defaults if the file doesn't exist).
//! let defaults = SwipeDefaults::load();
//! let props = SwipeProperties::from_defaults(&defaults);
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

const CONFIG_FILENAME: &str = "config.json";

/// Returns the swipeseek data directory, creating it if needed.
///
/// Falls back to the current directory when no home directory can be
/// determined.
pub fn swipeseek_dir() -> PathBuf {
    let dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".swipeseek");
    std::fs::create_dir_all(&dir).ok();
    dir
}

/// Optional overrides for the built-in swipe defaults.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SwipeDefaults {
    /// Override for the cumulative search distance budget, in pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_distance_to_swipe_px: Option<u64>,

    /// Override for the swipe length as a fraction of the swipe-area side.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub swipe_length_percent: Option<f64>,

    /// Override for the maximum number of swipes (reserved).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_number_of_swipes: Option<u32>,

    /// Override for the press-to-drag delay, in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_delay_ms: Option<u64>,

    /// Override for the drag duration, in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub swipe_time_ms: Option<u64>,

    /// Override for the per-iteration probe wait, in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wait_time_ms: Option<u64>,
}

impl SwipeDefaults {
    /// Load overrides from `~/.swipeseek/config.json`.
    ///
    /// Returns [`Default`] if the file does not exist or cannot be parsed.
    pub fn load() -> Self {
        let path = swipeseek_dir().join(CONFIG_FILENAME);
        std::fs::read_to_string(&path)
            .ok()
            .and_then(|s| serde_json::from_str(&s).ok())
            .unwrap_or_default()
    }

    /// Save overrides to `~/.swipeseek/config.json`.
    pub fn save(&self) -> std::io::Result<()> {
        let path = swipeseek_dir().join(CONFIG_FILENAME);
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
        std::fs::write(path, json)
    }
}

//! Configuration loading for meshglow.
//!
//! Settings live in `config.toml` under the platform config directory
//! (for example `~/.config/meshglow/config.toml` on Linux). A missing
//! file yields the defaults; a present but invalid file is an error so
//! typos don't silently fall back.

use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use meshglow_core::AnimationSpeed;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default milliseconds between frames (roughly 30 fps).
const DEFAULT_FRAME_INTERVAL_MS: u64 = 33;

/// User-tunable settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Animation speed multiplier.
    pub speed: AnimationSpeed,
    /// Milliseconds between frames.
    pub frame_interval_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            speed: AnimationSpeed::default(),
            frame_interval_ms: DEFAULT_FRAME_INTERVAL_MS,
        }
    }
}

/// Errors from reading or parsing the config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Read(#[from] io::Error),
    #[error("invalid config file: {0}")]
    Parse(#[from] toml::de::Error),
}

impl Config {
    /// Load the config file, falling back to defaults when it is absent
    /// or when no config directory can be determined.
    pub fn load() -> Result<Self, ConfigError> {
        match Self::path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// The platform config file path, if a home directory exists.
    pub fn path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "meshglow").map(|dirs| dirs.config_dir().join("config.toml"))
    }

    fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(e.into()),
        };
        Ok(toml::from_str(&contents)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_medium_at_thirty_fps() {
        let config = Config::default();
        assert_eq!(config.speed, AnimationSpeed::Medium);
        assert_eq!(config.frame_interval_ms, 33);
    }

    #[test]
    fn parses_a_full_file() {
        let config: Config = toml::from_str(
            "speed = \"fast\"\nframe_interval_ms = 16\n",
        )
        .unwrap();
        assert_eq!(config.speed, AnimationSpeed::Fast);
        assert_eq!(config.frame_interval_ms, 16);
    }

    #[test]
    fn missing_fields_take_defaults() {
        let config: Config = toml::from_str("speed = \"slow\"\n").unwrap();
        assert_eq!(config.speed, AnimationSpeed::Slow);
        assert_eq!(config.frame_interval_ms, 33);
    }

    #[test]
    fn unknown_speed_is_rejected() {
        assert!(toml::from_str::<Config>("speed = \"ludicrous\"\n").is_err());
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = Config::load_from(Path::new("/nonexistent/meshglow/config.toml")).unwrap();
        assert_eq!(config, Config::default());
    }
}

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::i18n::Language;

const APP_DIR_NAME: &str = "NetizenTrivia";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Interface language for messages and topic labels
    pub language: Language,

    /// Master sound switch
    pub sound_on: bool,

    /// Sound effect volume (0.0-1.0)
    pub sfx_volume: f32,

    /// Ambient tone volume (0.0-1.0)
    pub music_volume: f32,

    /// Number of turns before the winner is decided
    pub max_turns: u32,

    /// Seconds a player has to answer a question
    pub question_seconds: u32,

    /// How long turn-lost / no-question messages stay up before the turn advances
    pub message_delay_ms: u64,

    /// Reshuffle the board when a turn is skipped for lack of questions
    pub reshuffle_on_skip: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: Language::Vietnamese,
            sound_on: true,
            sfx_volume: 0.5,
            music_volume: 0.2,
            max_turns: 10,
            question_seconds: 15,
            message_delay_ms: 2000,
            reshuffle_on_skip: false,
        }
    }
}

impl Config {
    /// Load configuration from the platform-specific config directory.
    /// Creates default config if file doesn't exist.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path()?;
        Self::load_from(&config_path)
    }

    /// Load configuration from an explicit path, writing defaults if it is missing
    pub fn load_from(config_path: &Path) -> Result<Self, ConfigError> {
        if config_path.exists() {
            let content =
                fs::read_to_string(config_path).map_err(|e| ConfigError::LoadFailed {
                    path: config_path.display().to_string(),
                    source: Box::new(e),
                })?;
            let config: Config =
                serde_json::from_str(&content).map_err(|e| ConfigError::LoadFailed {
                    path: config_path.display().to_string(),
                    source: Box::new(e),
                })?;
            config.validate()?;

            tracing::info!("Loaded config from: {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save_to(config_path)?;
            tracing::info!("Created default config at: {}", config_path.display());
            Ok(config)
        }
    }

    /// Save configuration to disk
    pub fn save(&self) -> Result<(), ConfigError> {
        let config_path = Self::config_path()?;
        self.save_to(&config_path)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::DirectoryCreationFailed {
                path: parent.display().to_string(),
                source: e,
            })?;
        }

        let json = serde_json::to_string_pretty(self).map_err(|e| ConfigError::SaveFailed {
            path: config_path.display().to_string(),
            source: Box::new(e),
        })?;
        fs::write(config_path, json).map_err(|e| ConfigError::SaveFailed {
            path: config_path.display().to_string(),
            source: Box::new(e),
        })?;

        Ok(())
    }

    /// Reject values the game cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.sfx_volume) {
            return Err(ConfigError::Invalid(format!(
                "sfx_volume {} must be within 0.0-1.0",
                self.sfx_volume
            )));
        }
        if !(0.0..=1.0).contains(&self.music_volume) {
            return Err(ConfigError::Invalid(format!(
                "music_volume {} must be within 0.0-1.0",
                self.music_volume
            )));
        }
        if self.max_turns == 0 {
            return Err(ConfigError::Invalid(
                "max_turns must be at least 1".to_string(),
            ));
        }
        if self.question_seconds == 0 {
            return Err(ConfigError::Invalid(
                "question_seconds must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Directory holding the config file and logs
    pub fn app_dir() -> Result<PathBuf, ConfigError> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR_NAME))
            .ok_or(ConfigError::NoConfigDir)
    }

    fn config_path() -> Result<PathBuf, ConfigError> {
        Ok(Self::app_dir()?.join("config.json"))
    }

    /// Get the config file path (for display purposes)
    pub fn config_path_display() -> String {
        Self::config_path()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|_| "unknown".to_string())
    }
}

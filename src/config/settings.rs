//! Application settings management

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// General settings
    #[serde(default)]
    pub general: GeneralSettings,

    /// Audio capture settings
    #[serde(default)]
    pub audio: AudioSettings,

    /// Interview API settings
    #[serde(default)]
    pub api: ApiSettings,

    /// Interview flow settings
    #[serde(default)]
    pub interview: InterviewSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralSettings {
    /// Data directory for recorded answers and completion metadata
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudioSettings {
    /// Sample rate for answer recordings
    #[serde(default = "default_sample_rate")]
    pub sample_rate: u32,

    /// Number of audio channels (1 = mono, 2 = stereo)
    #[serde(default = "default_channels")]
    pub channels: u16,

    /// Preferred input device (empty = default)
    #[serde(default)]
    pub device: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiSettings {
    /// Base URL of the interview API
    #[serde(default = "default_api_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_api_timeout")]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterviewSettings {
    /// Whether a question must be recorded before moving to the next one
    #[serde(default = "default_true")]
    pub require_recording_to_advance: bool,
}

// Default value functions

fn default_data_dir() -> PathBuf {
    ProjectDirs::from("com", "vetta", "vetta")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("~/.local/share/vetta"))
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_sample_rate() -> u32 {
    16000
}

fn default_channels() -> u16 {
    1
}

fn default_api_base_url() -> String {
    "http://127.0.0.1:5001".to_string()
}

fn default_api_timeout() -> u64 {
    60
}

fn default_true() -> bool {
    true
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_level: default_log_level(),
        }
    }
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            sample_rate: default_sample_rate(),
            channels: default_channels(),
            device: String::new(),
        }
    }
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: default_api_base_url(),
            timeout_secs: default_api_timeout(),
        }
    }
}

impl Default for InterviewSettings {
    fn default() -> Self {
        Self {
            require_recording_to_advance: true,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            general: GeneralSettings::default(),
            audio: AudioSettings::default(),
            api: ApiSettings::default(),
            interview: InterviewSettings::default(),
        }
    }
}

impl Settings {
    /// Load settings from the configuration file
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            tracing::info!("No config file found, using defaults");
            let mut settings = Self::default();
            settings.apply_env_overrides();
            return Ok(settings);
        }

        let content = std::fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;

        let mut settings: Settings = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", config_path.display()))?;

        settings.apply_env_overrides();

        Ok(settings)
    }

    /// Apply environment variable overrides.
    fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var("VETTA_API_URL") {
            self.override_base_url(&url);
        }
    }

    /// Replace the API base URL unless the override is blank
    fn override_base_url(&mut self, url: &str) {
        if !url.trim().is_empty() {
            self.api.base_url = url.to_string();
        }
    }

    /// Get the path to the configuration file
    pub fn config_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("com", "vetta", "vetta")
            .context("Could not determine config directory")?;

        let config_dir = dirs.config_dir();
        Ok(config_dir.join("config.toml"))
    }

    /// Write default configuration to a file
    pub fn write_default(path: &PathBuf) -> Result<()> {
        let settings = Self::default();
        let content = toml::to_string_pretty(&settings)?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get the directory that holds recorded answers for a candidate
    pub fn answers_dir(&self, candidate_id: &str) -> PathBuf {
        self.general.data_dir.join("answers").join(candidate_id)
    }

    /// Get the path of the completion metadata handed from the interview
    /// step to the results step
    pub fn completion_path(&self) -> PathBuf {
        self.general.data_dir.join("last_interview.json")
    }

    /// Ensure all required directories exist
    pub fn ensure_dirs(&self) -> Result<()> {
        std::fs::create_dir_all(&self.general.data_dir)?;
        std::fs::create_dir_all(self.general.data_dir.join("answers"))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_require_recording_before_advance() {
        let settings = Settings::default();
        assert!(settings.interview.require_recording_to_advance);
    }

    #[test]
    fn override_replaces_base_url() {
        let mut settings = Settings::default();
        settings.override_base_url("http://api.example.test:9000");
        assert_eq!(settings.api.base_url, "http://api.example.test:9000");
    }

    #[test]
    fn blank_override_keeps_configured_base_url() {
        let mut settings = Settings::default();
        settings.override_base_url("   ");
        assert_eq!(settings.api.base_url, default_api_base_url());
    }
}

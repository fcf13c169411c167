use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use super::error::{ResumeError, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_window_width")]
    pub window_width: i32,

    #[serde(default = "default_window_height")]
    pub window_height: i32,

    #[serde(default)]
    pub last_file: Option<String>,
}

fn default_window_width() -> i32 {
    640
}

fn default_window_height() -> i32 {
    480
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            window_width: default_window_width(),
            window_height: default_window_height(),
            last_file: None,
        }
    }
}

impl AppSettings {
    /// Load settings from disk, or create default if not exists
    pub fn load() -> Self {
        let config_path = Self::config_path();

        match fs::read_to_string(&config_path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(settings) => settings,
                Err(e) => {
                    eprintln!("Failed to parse settings: {}. Using defaults.", e);
                    Self::default()
                }
            },
            Err(_) => {
                // File doesn't exist, use defaults
                let default = Self::default();
                // Try to save defaults for next time
                let _ = default.save();
                default
            }
        }
    }

    /// Save settings to disk
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path();

        // Ensure parent directory exists
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).map_err(|e| ResumeError::WriteFailure {
                path: config_path.clone(),
                source: e,
            })?;
        }

        let json = serde_json::to_string_pretty(self).map_err(|e| ResumeError::WriteFailure {
            path: config_path.clone(),
            source: e.into(),
        })?;
        fs::write(&config_path, json).map_err(|e| ResumeError::WriteFailure {
            path: config_path.clone(),
            source: e,
        })?;

        Ok(())
    }

    /// Get config file path (cross-platform)
    pub fn config_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("rusume");
        path.push("settings.json");
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = AppSettings::default();
        assert_eq!(settings.window_width, 640);
        assert_eq!(settings.window_height, 480);
        assert!(settings.last_file.is_none());
    }

    #[test]
    fn test_serialize_deserialize() {
        let settings = AppSettings {
            window_width: 800,
            window_height: 600,
            last_file: Some("/home/jane/resume.json".to_string()),
        };
        let json = serde_json::to_string(&settings).unwrap();
        let loaded: AppSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(settings, loaded);
    }

    #[test]
    fn test_partial_config() {
        // Simulate old config missing new fields
        let json = r#"{"window_width": 1024}"#;
        let settings: AppSettings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.window_width, 1024); // Should use file value
        assert_eq!(settings.window_height, 480); // Should use default
        assert!(settings.last_file.is_none());
    }
}

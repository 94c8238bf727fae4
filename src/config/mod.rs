use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::PathBuf;

/// Default weekday row, Sunday first (Domingo, Lunes, ..., Sábado).
pub const DEFAULT_WEEKDAYS: [&str; 7] = ["D", "L", "M", "X", "J", "V", "S"];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default = "default_data_file")]
    pub data_file: String,
    #[serde(default = "default_title_prefix")]
    pub title_prefix: String,
    #[serde(default = "default_placeholder_image")]
    pub placeholder_image: String,
    #[serde(default = "default_weekday_labels")]
    pub weekday_labels: Vec<String>,
    #[serde(default = "default_color")]
    pub color: bool,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_data_file() -> String {
    "events.json".to_string()
}
fn default_title_prefix() -> String {
    "CALENDARIO CARRERITAS".to_string()
}
fn default_placeholder_image() -> String {
    "img/placeholder.webp".to_string()
}
fn default_weekday_labels() -> Vec<String> {
    DEFAULT_WEEKDAYS.iter().map(|s| s.to_string()).collect()
}
fn default_color() -> bool {
    true
}
fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            title_prefix: default_title_prefix(),
            placeholder_image: default_placeholder_image(),
            weekday_labels: default_weekday_labels(),
            color: default_color(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Platform config directory (`~/.config/calendario` on Linux)
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("calendario")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("calendario.conf")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        let cfg: Config = serde_yaml::from_str(content)?;
        cfg.check()?;
        Ok(cfg)
    }

    /// Weekday labels must line up with the Sunday-anchored weekday index.
    pub fn check(&self) -> AppResult<()> {
        if self.weekday_labels.len() != 7 {
            return Err(AppError::Config(format!(
                "weekday_labels must contain 7 entries (Sunday first), found {}",
                self.weekday_labels.len()
            )));
        }
        Ok(())
    }

    /// Write the default configuration file. Nothing is written in test mode.
    pub fn init(is_test: bool) -> AppResult<PathBuf> {
        let path = Self::config_file();
        if is_test {
            return Ok(path);
        }

        fs::create_dir_all(Self::config_dir())?;
        let yaml = serde_yaml::to_string(&Self::default())?;
        let mut file = fs::File::create(&path)?;
        file.write_all(yaml.as_bytes())?;
        Ok(path)
    }
}

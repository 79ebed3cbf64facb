use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_append_file")]
    pub append_file: String,
    #[serde(default = "default_export_file")]
    pub export_file: String,
    #[serde(default = "default_true")]
    pub reminder_enabled: bool,
    #[serde(default = "default_reminder_interval")]
    pub reminder_interval_minutes: u64,
    #[serde(default = "default_true")]
    pub open_after_export: bool,
}

fn default_append_file() -> String {
    "class_wellness_data.xlsx".to_string()
}
fn default_export_file() -> String {
    "mental_wellness_log.xlsx".to_string()
}
fn default_true() -> bool {
    true
}
fn default_reminder_interval() -> u64 {
    8 * 60
}

impl Default for Config {
    fn default() -> Self {
        Self {
            append_file: default_append_file(),
            export_file: default_export_file(),
            reminder_enabled: true,
            reminder_interval_minutes: default_reminder_interval(),
            open_after_export: true,
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("wellnesslog")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".wellnesslog")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("wellnesslog.conf")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        let cfg: Config = serde_yaml::from_str(content)
            .map_err(|e| AppError::Config(format!("invalid configuration: {e}")))?;

        if cfg.reminder_interval_minutes == 0 {
            return Err(AppError::Config(
                "reminder_interval_minutes must be greater than zero".to_string(),
            ));
        }

        Ok(cfg)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)
    }

    pub fn append_path(&self) -> PathBuf {
        expand_tilde(&self.append_file)
    }

    pub fn export_path(&self) -> PathBuf {
        expand_tilde(&self.export_file)
    }

    pub fn reminder_interval(&self) -> Duration {
        Duration::from_secs(self.reminder_interval_minutes * 60)
    }

    /// Create the configuration directory and write a default config file.
    ///
    /// An existing file is left untouched. In test mode nothing is written.
    pub fn init_all(is_test: bool) -> AppResult<PathBuf> {
        let file = Self::config_file();

        if is_test || file.exists() {
            return Ok(file);
        }

        fs::create_dir_all(Self::config_dir())?;

        let yaml = Config::default().to_yaml()?;
        let mut out = fs::File::create(&file)?;
        out.write_all(yaml.as_bytes())?;

        Ok(file)
    }
}

use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Keys every config file is expected to carry (`config --check`).
pub const CONFIG_KEYS: [&str; 3] = ["data_file", "check_image_exists", "currency_symbol"];

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_data_file")]
    pub data_file: String,
    /// When true, `add`/`edit` only accept image paths that exist on disk.
    #[serde(default)]
    pub check_image_exists: bool,
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

fn default_data_file() -> String {
    Config::default_data_file().to_string_lossy().to_string()
}

fn default_currency_symbol() -> String {
    "$".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            check_image_exists: false,
            currency_symbol: default_currency_symbol(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("acmehr")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".acmehr")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("acmehr.conf")
    }

    /// Default location of the employee data file
    pub fn default_data_file() -> PathBuf {
        Self::config_dir().join("employee.data.csv")
    }

    /// Data file path with `~` expanded
    pub fn data_path(&self) -> PathBuf {
        Self::resolve_data_file(&self.data_file)
    }

    /// Where a data file name points: `~` is expanded and a relative name
    /// stays relative to the working directory. Used for the configured
    /// value, the `--data` override and `init` alike.
    pub fn resolve_data_file(name: &str) -> PathBuf {
        expand_tilde(name)
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| AppError::ConfigLoad(format!("{}: {}", path.display(), e)))?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::ConfigLoad(format!("{}: {}", path.display(), e)))
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        let yaml = serde_yaml::to_string(self).map_err(|e| AppError::ConfigSave(e.to_string()))?;
        fs::write(path, yaml).map_err(|e| AppError::ConfigSave(format!("{}: {}", path.display(), e)))
    }

    /// Initialize configuration and data files.
    ///
    /// `custom_data` overrides the data file location and resolves like every
    /// other command's `--data`. With `is_test` the config file is left
    /// untouched.
    /// Returns the data file path.
    pub fn init_all(custom_data: Option<&str>, is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();

        let data_path = match custom_data {
            Some(name) => Self::resolve_data_file(name),
            None => Self::default_data_file(),
        };

        if !is_test {
            fs::create_dir_all(&dir)?;
            // stored absolute so later runs from another directory agree
            let stored = std::path::absolute(&data_path)?;
            let config = Config {
                data_file: stored.to_string_lossy().to_string(),
                ..Config::default()
            };
            config.save_to(&Self::config_file())?;
        }

        if let Some(parent) = data_path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        // Create empty data file if not exists
        if !data_path.exists() {
            fs::File::create(&data_path)?;
        }

        Ok(data_path)
    }
}

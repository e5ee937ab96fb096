use crate::core::classifier::{
    DEFAULT_HEADER_KEYWORDS, DEFAULT_HOLIDAY_KEYWORDS, DEFAULT_ROLE_KEYWORDS,
    DEFAULT_TITLE_KEYWORDS,
};
use crate::errors::{AppError, AppResult};
use crate::export::OutputFormat;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_role_keywords")]
    pub role_keywords: Vec<String>,
    #[serde(default = "default_holiday_keywords")]
    pub holiday_keywords: Vec<String>,
    #[serde(default = "default_header_keywords")]
    pub header_keywords: Vec<String>,
    #[serde(default = "default_title_keywords")]
    pub title_keywords: Vec<String>,
    #[serde(default)]
    pub default_format: OutputFormat,
}

fn to_owned(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

fn default_role_keywords() -> Vec<String> {
    to_owned(DEFAULT_ROLE_KEYWORDS)
}
fn default_holiday_keywords() -> Vec<String> {
    to_owned(DEFAULT_HOLIDAY_KEYWORDS)
}
fn default_header_keywords() -> Vec<String> {
    to_owned(DEFAULT_HEADER_KEYWORDS)
}
fn default_title_keywords() -> Vec<String> {
    to_owned(DEFAULT_TITLE_KEYWORDS)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            role_keywords: default_role_keywords(),
            holiday_keywords: default_holiday_keywords(),
            header_keywords: default_header_keywords(),
            title_keywords: default_title_keywords(),
            default_format: OutputFormat::default(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("shiftscan")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".shiftscan")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("shiftscan.conf")
    }

    /// Load configuration from `custom` or the standard location.
    /// A missing standard file yields the defaults; a missing custom file is an error.
    pub fn load(custom: Option<&Path>) -> AppResult<Self> {
        let path = match custom {
            Some(p) => {
                if !p.exists() {
                    return Err(AppError::Config(format!(
                        "configuration file not found: {}",
                        p.display()
                    )));
                }
                p.to_path_buf()
            }
            None => Self::config_file(),
        };

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        let cfg: Config = serde_yaml::from_str(content)?;
        if cfg.role_keywords.iter().all(|k| k.trim().is_empty()) {
            return Err(AppError::Config("role_keywords must not be empty".into()));
        }
        Ok(cfg)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Write the default configuration to `target` (or the standard location).
    /// An existing file is kept unless `force` is set.
    pub fn init(target: Option<&Path>, force: bool) -> AppResult<PathBuf> {
        let path = target
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::config_file);

        if path.exists() && !force {
            return Err(AppError::Config(format!(
                "{} already exists (use --force to overwrite)",
                path.display()
            )));
        }

        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }
        fs::write(&path, Self::default().to_yaml()?)?;
        Ok(path)
    }
}

use crate::error::{HtmlScrubError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub target: TargetConfig,
    pub write: WriteConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TargetConfig {
    /// HTML file the cleanup runs against.
    pub file: PathBuf,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WriteConfig {
    /// Keep a copy of the original file before overwriting it.
    pub backup: bool,
    pub backup_suffix: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            target: TargetConfig::default(),
            write: WriteConfig::default(),
        }
    }
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from("bwa-upload-working.html"),
        }
    }
}

impl Default for WriteConfig {
    fn default() -> Self {
        Self {
            backup: false,
            backup_suffix: ".bak".to_string(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(HtmlScrubError::Config {
                message: format!("Configuration file not found: {}", path.display()),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| HtmlScrubError::Config {
            message: format!("Failed to read config file {}: {}", path.display(), e),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| HtmlScrubError::Config {
            message: format!("Failed to parse config file {}: {}", path.display(), e),
        })?;

        Ok(config)
    }

    pub fn load_with_defaults<P: AsRef<Path>>(config_path: Option<P>) -> Result<Self> {
        match config_path {
            Some(path) => Self::load_from_file(path),
            None => {
                // Try to load from default locations
                let default_paths = ["htmlscrub.toml", ".htmlscrub.toml"];

                for default_path in &default_paths {
                    if Path::new(default_path).exists() {
                        return Self::load_from_file(default_path);
                    }
                }

                // If no config file found, use defaults
                Ok(Self::default())
            }
        }
    }

    pub fn merge_with_cli_args(&mut self, cli_args: &CliOverrides) {
        if let Some(ref file) = cli_args.file {
            self.target.file = file.clone();
        }

        if let Some(backup) = cli_args.backup {
            self.write.backup = backup;
        }

        if let Some(ref suffix) = cli_args.backup_suffix {
            self.write.backup_suffix = suffix.clone();
        }
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(self).map_err(|e| HtmlScrubError::Config {
            message: format!("Failed to serialize config: {}", e),
        })?;

        std::fs::write(path, content).map_err(|e| HtmlScrubError::Config {
            message: format!("Failed to write config file {}: {}", path.display(), e),
        })?;

        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.target.file.as_os_str().is_empty() {
            return Err(HtmlScrubError::Config {
                message: "Target file path must not be empty".to_string(),
            });
        }

        if self.write.backup_suffix.is_empty() {
            return Err(HtmlScrubError::Config {
                message: "Backup suffix must not be empty".to_string(),
            });
        }

        // The suffix is appended to the target's file name
        if self.write.backup_suffix.contains('/') || self.write.backup_suffix.contains('\\') {
            return Err(HtmlScrubError::Config {
                message: "Backup suffix must not contain path separators".to_string(),
            });
        }

        Ok(())
    }

    pub fn create_sample_config() -> String {
        let sample_config = Self::default();
        toml::to_string_pretty(&sample_config).unwrap_or_else(|_| String::new())
    }
}

#[derive(Debug, Default)]
pub struct CliOverrides {
    pub file: Option<PathBuf>,
    pub backup: Option<bool>,
    pub backup_suffix: Option<String>,
}

impl CliOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, file: Option<PathBuf>) -> Self {
        self.file = file;
        self
    }

    pub fn with_backup(mut self, backup: Option<bool>) -> Self {
        self.backup = backup;
        self
    }

    pub fn with_backup_suffix(mut self, suffix: Option<String>) -> Self {
        self.backup_suffix = suffix;
        self
    }
}

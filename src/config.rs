//! Application configuration
//!
//! Loaded from `termcv.config.toml`, falling back to an embedded default.
//! Environment variables override file values.

use anyhow::{anyhow, Context, Result};
use directories::BaseDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::theme::Palette;

/// Embedded default configuration file
const DEFAULT_CONFIG: &str = include_str!("../termcv.config.toml");

/// Configuration file name
pub const CONFIG_FILE_NAME: &str = "termcv.config.toml";

/// Directory under the home directory holding the user config
const HOME_CONFIG_DIR: &str = ".termcv";

/// Top-level application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub resume: ResumeConfig,
    #[serde(default)]
    pub theme: ThemeConfig,
    #[serde(default)]
    pub layout: LayoutConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration, trying in order: `./termcv.config.toml`,
    /// `~/.termcv/termcv.config.toml`, the file named by `TERMCV_CONFIG`, and
    /// finally the embedded default.
    pub fn load() -> Result<Self> {
        if let Ok(content) = std::fs::read_to_string(CONFIG_FILE_NAME) {
            return Self::parse(&content, Path::new(CONFIG_FILE_NAME));
        }

        if let Some(base_dirs) = BaseDirs::new() {
            let home_config = base_dirs
                .home_dir()
                .join(HOME_CONFIG_DIR)
                .join(CONFIG_FILE_NAME);
            if let Ok(content) = std::fs::read_to_string(&home_config) {
                return Self::parse(&content, &home_config);
            }
        }

        if let Ok(config_path) = std::env::var("TERMCV_CONFIG") {
            let path = PathBuf::from(config_path);
            if let Ok(content) = std::fs::read_to_string(&path) {
                return Self::parse(&content, &path);
            }
        }

        Self::embedded()
    }

    /// Load configuration from a specific file, which must exist
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::parse(&content, path)
    }

    /// The built-in default configuration
    pub fn embedded() -> Result<Self> {
        toml::from_str(DEFAULT_CONFIG)
            .map_err(|e| anyhow!("Failed to parse embedded default config: {}", e))
    }

    fn parse(content: &str, path: &Path) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| anyhow!("Failed to parse config file {}: {}", path.display(), e))
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        match self.logging.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => return Err(anyhow!("Invalid log level: {}", self.logging.level)),
        }

        Palette::from_config(&self.theme).context("Invalid theme configuration")?;

        if self.layout.mouse_wheel_delta == 0 {
            return Err(anyhow!("mouse_wheel_delta must be at least 1"));
        }

        Ok(())
    }

    /// Apply environment variable overrides to the configuration
    pub fn apply_env_overrides(&mut self) {
        if let Ok(path) = std::env::var("TERMCV_RESUME") {
            self.resume.path = Some(PathBuf::from(path));
        }
        if let Ok(palette) = std::env::var("TERMCV_PALETTE") {
            self.theme.palette = palette;
        }
        if let Ok(level) = std::env::var("TERMCV_LOG_LEVEL") {
            self.logging.level = level.to_lowercase();
        }
        if let Ok(file) = std::env::var("TERMCV_LOG_FILE") {
            self.logging.file = Some(PathBuf::from(file));
        }
    }

    /// Get a summary of the configuration
    pub fn summary(&self) -> String {
        let mut summary = String::new();
        summary.push_str("Configuration loaded:\n");
        match &self.resume.path {
            Some(path) => summary.push_str(&format!("Résumé: {}\n", path.display())),
            None => summary.push_str("Résumé: built-in sample\n"),
        }
        summary.push_str(&format!("Palette: {}\n", self.theme.palette));
        summary.push_str(&format!("Skill Columns: {}\n", self.layout.skill_columns));
        summary.push_str(&format!("Logging Level: {}\n", self.logging.level));
        if let Some(file) = &self.logging.file {
            summary.push_str(&format!("Log File: {}\n", file.display()));
        }
        summary
    }
}

/// Where the résumé document comes from
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResumeConfig {
    /// JSON résumé path; the built-in sample is used when unset
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Colour theme
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Built-in palette: "default" or "simple"
    #[serde(default = "default_palette")]
    pub palette: String,
    #[serde(default)]
    pub primary: Option<String>,
    #[serde(default)]
    pub secondary: Option<String>,
    #[serde(default)]
    pub foreground: Option<String>,
    #[serde(default)]
    pub muted_foreground: Option<String>,
}

fn default_palette() -> String {
    "default".to_string()
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            palette: default_palette(),
            primary: None,
            secondary: None,
            foreground: None,
            muted_foreground: None,
        }
    }
}

/// Layout tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Skill grid columns when the document gives none
    #[serde(default = "default_skill_columns")]
    pub skill_columns: usize,
    /// Lines scrolled per mouse wheel notch
    #[serde(default = "default_mouse_wheel_delta")]
    pub mouse_wheel_delta: usize,
}

fn default_skill_columns() -> usize {
    5
}

fn default_mouse_wheel_delta() -> usize {
    3
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            skill_columns: default_skill_columns(),
            mouse_wheel_delta: default_mouse_wheel_delta(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file used while the viewer owns the screen
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

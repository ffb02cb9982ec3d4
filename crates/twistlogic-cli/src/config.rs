//! Configuration file support for the TwistLogic CLI
//!
//! Supports loading configuration from .twistlogicrc files in:
//! - Current directory
//! - User home directory
//! - Custom path via environment variable

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use twistlogic_ir::Dialect;

use crate::cli::OutputFormat;

/// Name of the configuration file looked up in the working and home directories.
pub const CONFIG_FILE_NAME: &str = ".twistlogicrc";

/// Environment variable naming an explicit configuration file.
pub const CONFIG_ENV_VAR: &str = "TWISTLOGIC_CONFIG";

/// Configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Formula dialect used when parsing
    pub dialect: Dialect,

    /// Default output format
    pub output_format: OutputFormat,

    /// Enable colored output
    pub colored: bool,

    /// Log level used when neither RUST_LOG nor -v is given
    pub log_level: String,

    /// Workspace document loaded when --workspace is absent
    pub workspace: Option<PathBuf>,

    /// REPL settings
    pub repl: ReplConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReplConfig {
    /// REPL prompt string
    pub prompt: String,

    /// History file path (relative to home)
    pub history_file: String,

    /// Maximum history entries
    pub max_history: usize,

    /// Auto-save history
    pub auto_save: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dialect: Dialect::Material,
            output_format: OutputFormat::Text,
            colored: true,
            log_level: "warn".to_string(),
            workspace: None,
            repl: ReplConfig::default(),
        }
    }
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            prompt: "twistlogic> ".to_string(),
            history_file: ".twistlogic_history".to_string(),
            max_history: 1000,
            auto_save: true,
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Save configuration to file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))
    }

    /// Find and load configuration file
    ///
    /// Search order:
    /// 1. TWISTLOGIC_CONFIG environment variable
    /// 2. .twistlogicrc in current directory
    /// 3. .twistlogicrc in user home directory
    ///
    /// A file that fails to parse is skipped with a warning.
    pub fn load_default() -> Self {
        let (config, problems) = Self::discover();
        for problem in &problems {
            tracing::warn!("{:#}", problem);
        }
        config
    }

    /// Same search as [`Config::load_default`], returning the errors of the
    /// skipped files instead of logging them.
    pub fn discover() -> (Self, Vec<anyhow::Error>) {
        let mut problems = Vec::new();
        for path in Self::candidates() {
            if !path.exists() {
                continue;
            }
            match Self::load(&path) {
                Ok(config) => return (config, problems),
                Err(e) => problems.push(e),
            }
        }

        (Self::default(), problems)
    }

    fn candidates() -> Vec<PathBuf> {
        let mut paths = Vec::new();
        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            paths.push(PathBuf::from(path));
        }
        paths.push(PathBuf::from(CONFIG_FILE_NAME));
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(CONFIG_FILE_NAME));
        }
        paths
    }

    /// Get configuration file path (env override, current or home)
    pub fn config_path() -> PathBuf {
        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            return PathBuf::from(path);
        }

        let current = PathBuf::from(CONFIG_FILE_NAME);
        if current.exists() {
            return current;
        }

        match dirs::home_dir() {
            Some(home) => home.join(CONFIG_FILE_NAME),
            None => current,
        }
    }

    /// Create a default configuration file
    pub fn create_default() -> Result<PathBuf> {
        let path = Self::config_path();
        Self::default().save(&path)?;
        Ok(path)
    }

    /// Absolute location of the REPL history file.
    pub fn history_path(&self) -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(&self.repl.history_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.dialect, Dialect::Material);
        assert_eq!(config.output_format, OutputFormat::Text);
        assert!(config.colored);
        assert!(config.workspace.is_none());
        assert_eq!(config.repl.prompt, "twistlogic> ");
    }

    #[test]
    fn test_serialize_deserialize() {
        let mut config = Config::default();
        config.dialect = Dialect::Residuated;
        config.workspace = Some(PathBuf::from("models.yaml"));
        let toml_str = toml::to_string(&config).unwrap();
        let deserialized: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config: Config = toml::from_str(
            r#"
            dialect = "residuated"
            output_format = "json"

            [repl]
            prompt = "> "
            "#,
        )
        .unwrap();
        assert_eq!(config.dialect, Dialect::Residuated);
        assert_eq!(config.output_format, OutputFormat::Json);
        assert_eq!(config.repl.prompt, "> ");
        assert_eq!(config.repl.max_history, 1000);
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_unknown_dialect_rejected() {
        let result: std::result::Result<Config, _> = toml::from_str("dialect = \"fuzzy\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_save_and_load() {
        let path = std::env::temp_dir().join(format!("twistlogicrc-{}", std::process::id()));
        let mut config = Config::default();
        config.colored = false;
        config.save(&path).unwrap();
        let loaded = Config::load(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(loaded, config);
    }
}

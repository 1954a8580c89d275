// file: src/config.rs
// version: 1.0.0
// guid: aa7c1bc9-fcb2-4458-8cd3-575b0c0a84b3

use crate::cli::args::Cli;
use crate::error::{Result, WrapperError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info};

/// Binary the wrapper forwards to when nothing else is configured
pub const DEFAULT_BINARY: &str = "target/release/pact-broker-cli";

/// Project-local configuration file name
pub const PROJECT_CONFIG_FILE: &str = ".pact-cli-wrapper.toml";

/// How the wrapper turns its own arguments into the child's arguments
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ForwardMode {
    /// Join with spaces, then split on whitespace
    #[default]
    Retokenize,
    /// Pass arguments through untouched
    Verbatim,
}

/// What happens to the child's standard streams
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Child shares the wrapper's stdio
    #[default]
    Inherit,
    /// Child output is collected and replayed after it exits
    Capture,
}

/// Wrapper configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub binary: String,
    pub forward_mode: ForwardMode,
    pub output_mode: OutputMode,
    pub print_exit_code: bool,
    pub log_level: String,
}

/// One configuration file; every key is optional so files layer cleanly
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    binary: Option<String>,
    forward_mode: Option<ForwardMode>,
    output_mode: Option<OutputMode>,
    print_exit_code: Option<bool>,
    log_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            binary: DEFAULT_BINARY.to_string(),
            forward_mode: ForwardMode::Retokenize,
            output_mode: OutputMode::Inherit,
            print_exit_code: true,
            log_level: "warn".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from the user and project files, or from `explicit`
    /// alone when given
    pub async fn load(explicit: Option<&Path>) -> Result<Self> {
        let paths = match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(WrapperError::config(format!(
                        "Config file not found: {}",
                        path.display()
                    )));
                }
                vec![path.to_path_buf()]
            }
            None => Self::default_paths()
                .into_iter()
                .filter(|p| p.exists())
                .collect(),
        };

        Self::load_layers(&paths).await
    }

    /// Apply each file in order on top of the defaults
    pub async fn load_layers(paths: &[PathBuf]) -> Result<Self> {
        let mut config = Self::default();

        for path in paths {
            info!("Loading configuration from: {}", path.display());
            let layer = Self::load_file(path).await?;
            config.merge(layer);
        }

        debug!("Configuration after files: {:?}", config);
        Ok(config)
    }

    /// Apply command-line flags and their environment equivalents
    pub fn apply_cli(&mut self, cli: &Cli) {
        if let Some(ref binary) = cli.binary {
            self.binary = binary.clone();
        }
        if cli.verbatim {
            self.forward_mode = ForwardMode::Verbatim;
        }
        if cli.capture {
            self.output_mode = OutputMode::Capture;
        }
        if cli.quiet_exit {
            self.print_exit_code = false;
        }
        if cli.verbose {
            self.log_level = "debug".to_string();
        }
    }

    /// Configured binary with `~` and environment variables expanded
    pub fn binary_path(&self) -> Result<String> {
        shellexpand::full(&self.binary)
            .map(|expanded| expanded.into_owned())
            .map_err(|e| {
                WrapperError::config(format!("Failed to expand binary path {}: {}", self.binary, e))
            })
    }

    fn default_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();
        if let Some(user) = Self::user_config_path() {
            paths.push(user);
        }
        paths.push(PathBuf::from(PROJECT_CONFIG_FILE));
        paths
    }

    /// Get the user configuration file path
    fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("pact-cli-wrapper").join("config.toml"))
    }

    async fn load_file(path: &Path) -> Result<ConfigFile> {
        let content = fs::read_to_string(path).await.map_err(|e| {
            WrapperError::config(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        toml::from_str(&content).map_err(|e| {
            WrapperError::config(format!(
                "Failed to parse config file {}: {}",
                path.display(),
                e
            ))
        })
    }

    fn merge(&mut self, layer: ConfigFile) {
        if let Some(binary) = layer.binary {
            self.binary = binary;
        }
        if let Some(mode) = layer.forward_mode {
            self.forward_mode = mode;
        }
        if let Some(mode) = layer.output_mode {
            self.output_mode = mode;
        }
        if let Some(print) = layer.print_exit_code {
            self.print_exit_code = print;
        }
        if let Some(level) = layer.log_level {
            self.log_level = level;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.binary, DEFAULT_BINARY);
        assert_eq!(config.forward_mode, ForwardMode::Retokenize);
        assert_eq!(config.output_mode, OutputMode::Inherit);
        assert!(config.print_exit_code);
    }

    #[tokio::test]
    async fn test_later_files_override_earlier_ones() {
        let temp_dir = TempDir::new().unwrap();
        let user = temp_dir.path().join("user.toml");
        let project = temp_dir.path().join("project.toml");

        tokio::fs::write(&user, "binary = \"/opt/pact/bin/pact-broker-cli\"\nlog_level = \"info\"\n")
            .await
            .unwrap();
        tokio::fs::write(&project, "forward_mode = \"verbatim\"\nlog_level = \"debug\"\n")
            .await
            .unwrap();

        let config = Config::load_layers(&[user, project]).await.unwrap();

        assert_eq!(config.binary, "/opt/pact/bin/pact-broker-cli");
        assert_eq!(config.forward_mode, ForwardMode::Verbatim);
        assert_eq!(config.output_mode, OutputMode::Inherit);
        assert_eq!(config.log_level, "debug");
    }

    #[tokio::test]
    async fn test_unknown_keys_are_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bad.toml");
        tokio::fs::write(&path, "timeout = 30\n").await.unwrap();

        let result = Config::load_layers(&[path]).await;

        assert!(matches!(result, Err(WrapperError::Config(_))));
    }

    #[tokio::test]
    async fn test_missing_explicit_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.toml");

        let result = Config::load(Some(path.as_path())).await;

        assert!(matches!(result, Err(WrapperError::Config(_))));
    }

    #[tokio::test]
    async fn test_explicit_file_is_loaded() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("wrapper.toml");
        tokio::fs::write(&path, "output_mode = \"capture\"\nprint_exit_code = false\n")
            .await
            .unwrap();

        let config = Config::load(Some(path.as_path())).await.unwrap();

        assert_eq!(config.output_mode, OutputMode::Capture);
        assert!(!config.print_exit_code);
    }

    #[test]
    fn test_flags_override_files() {
        let mut config = Config {
            binary: "/from/file".to_string(),
            ..Config::default()
        };
        let cli = Cli::try_parse_from([
            "pact-cli-wrapper",
            "--wrapper-binary",
            "/from/flag",
            "--wrapper-capture",
            "--wrapper-quiet-exit",
            "pact-broker",
        ])
        .unwrap();

        config.apply_cli(&cli);

        assert_eq!(config.binary, "/from/flag");
        assert_eq!(config.output_mode, OutputMode::Capture);
        assert_eq!(config.forward_mode, ForwardMode::Retokenize);
        assert!(!config.print_exit_code);
    }

    #[test]
    fn test_binary_path_expands_home() {
        let config = Config {
            binary: "~/bin/pact-broker-cli".to_string(),
            ..Config::default()
        };

        let expanded = config.binary_path().unwrap();

        if dirs::home_dir().is_some() {
            assert!(!expanded.starts_with('~'));
        }
        assert!(expanded.ends_with("/bin/pact-broker-cli"));
    }

    #[test]
    fn test_binary_path_rejects_unknown_variable() {
        let config = Config {
            binary: "$PACT_WRAPPER_SURELY_UNSET_VARIABLE/pact-broker-cli".to_string(),
            ..Config::default()
        };

        assert!(config.binary_path().is_err());
    }
}

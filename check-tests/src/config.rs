use anyhow::{Context, Result};
use config::{Config as ConfigBuilder, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

/// Environment variable naming an extra configuration file
pub const CONFIG_FILE_VAR: &str = "CHECK_TESTS_CONFIG";

const ENV_PREFIX: &str = "CHECK_TESTS";

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    pub report: ReportConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ReportConfig {
    /// LCOV tracefile written by the coverage run
    pub path: PathBuf,
    /// Glob patterns selecting the test source files
    pub include: Vec<String>,
    /// Directory recorded paths are made relative to. Defaults to the
    /// current directory.
    #[serde(default)]
    pub root: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Log format (pretty, json, compact)
    pub format: LogFormat,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
    Compact,
}

impl Config {
    /// Load the embedded defaults, then the file named by
    /// `CHECK_TESTS_CONFIG` if any, then `CHECK_TESTS_*` variables
    pub fn from_env() -> Result<Self> {
        let file = env::var(CONFIG_FILE_VAR).ok();
        Self::load(file.as_deref(), false)
    }

    /// Like [`Config::from_env`], with `path` as the configuration file.
    /// The file must exist.
    pub fn from_file(path: &str) -> Result<Self> {
        Self::load(Some(path), true)
    }

    fn load(file: Option<&str>, required: bool) -> Result<Self> {
        let mut builder = ConfigBuilder::builder().add_source(File::from_str(
            include_str!("../config/default.toml"),
            FileFormat::Toml,
        ));

        if let Some(file) = file {
            builder = builder.add_source(File::with_name(file).required(required).format(FileFormat::Toml));
        }

        // CHECK_TESTS_REPORT_PATH, CHECK_TESTS_REPORT_INCLUDE="tests/**,*/tests/**", ...
        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("_")
                .try_parsing(true)
                .list_separator(",")
                .with_list_parse_key("report.include"),
        );

        let config = builder.build().context("Failed to build configuration")?;

        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        match self.logging.level.to_lowercase().as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(anyhow::anyhow!(
                    "Invalid log level: {}. Must be one of: trace, debug, info, warn, error",
                    self.logging.level
                ));
            }
        }

        if self.report.include.is_empty() {
            return Err(anyhow::anyhow!("At least one include pattern is required"));
        }

        if self.report.include.iter().any(|pattern| pattern.trim().is_empty()) {
            return Err(anyhow::anyhow!("Include patterns cannot be empty"));
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            report: ReportConfig {
                path: PathBuf::from("lcov.info"),
                include: vec!["tests/**".to_string()],
                root: None,
            },
            logging: LoggingConfig {
                level: "warn".to_string(),
                format: LogFormat::Compact,
            },
        }
    }
}

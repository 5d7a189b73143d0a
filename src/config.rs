use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const DEFAULT_CONFIG_PATH: &str = "./parselab.toml";
const DEFAULT_API_URL: &str = "https://core.calyptia.com/api";
const DEFAULT_TIMEOUT_MS: u64 = 10_000;
const DEFAULT_REQUEST_DELAY_MS: u64 = 500;
const DEFAULT_REPORT_PATH: &str = "parser-validation-report.json";

#[derive(Parser, Debug)]
#[clap(name = "parselab", version, about)]
pub struct Cli {
    /// Path to configuration file
    #[clap(long)]
    pub config: Option<PathBuf>,

    /// Override parser API base URL
    #[clap(long)]
    pub api_url: Option<String>,

    /// Override request timeout in milliseconds
    #[clap(long)]
    pub timeout_ms: Option<u64>,

    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Test a regex pattern against a log line
    Test(TestArgs),

    /// Run every catalog pattern against the API and report failures
    Validate(ValidateArgs),

    /// List the built-in pattern catalog
    List {
        /// Only list patterns from this category
        #[clap(long)]
        category: Option<String>,
    },

    /// Show a single catalog entry in full
    Show {
        /// Catalog entry id, e.g. apache-common
        id: String,
    },
}

#[derive(Args, Debug)]
pub struct TestArgs {
    /// Start from a catalog entry id
    #[clap(long)]
    pub example: Option<String>,

    /// Regex pattern, with or without wrapping slashes
    #[clap(long)]
    pub pattern: Option<String>,

    /// Time format passed through to the API
    #[clap(long)]
    pub time_format: Option<String>,

    /// Log line to parse
    #[clap(long)]
    pub sample: Option<String>,
}

#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Only validate patterns from this category
    #[clap(long)]
    pub category: Option<String>,

    /// Pause between API calls in milliseconds
    #[clap(long)]
    pub delay_ms: Option<u64>,

    /// Where to write the JSON report
    #[clap(long)]
    pub report: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_url: String,
    pub timeout_ms: u64,
    pub request_delay_ms: u64,
    pub report_path: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            request_delay_ms: DEFAULT_REQUEST_DELAY_MS,
            report_path: DEFAULT_REPORT_PATH.to_string(),
        }
    }
}

pub fn load_config(cli: &Cli) -> Result<Config> {
    // An explicit --config must exist; the default path is optional.
    let mut config = match &cli.config {
        Some(path) => read_config(path)?,
        None => {
            let default_path = Path::new(DEFAULT_CONFIG_PATH);
            if default_path.exists() {
                read_config(default_path)?
            } else {
                Config::default()
            }
        }
    };

    // Apply CLI overrides
    if let Some(ref api_url) = cli.api_url {
        config.api_url = api_url.clone();
    }

    if let Some(timeout_ms) = cli.timeout_ms {
        config.timeout_ms = timeout_ms;
    }

    Ok(config)
}

fn read_config(path: &Path) -> Result<Config> {
    let config_content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    toml::from_str(&config_content).context("Failed to parse config file")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn cli(config: Option<PathBuf>) -> Cli {
        Cli {
            config,
            api_url: None,
            timeout_ms: None,
            command: Command::List { category: None },
        }
    }

    #[test]
    fn defaults_apply_without_config_file() {
        let config = load_config(&cli(None)).expect("defaults");

        assert_eq!(config.api_url, "https://core.calyptia.com/api");
        assert_eq!(config.timeout_ms, 10_000);
        assert_eq!(config.request_delay_ms, 500);
        assert_eq!(config.report_path, "parser-validation-report.json");
    }

    #[test]
    fn reads_config_file_and_applies_overrides() {
        let mut file = NamedTempFile::new().expect("temp file");
        writeln!(file, "api_url = \"http://localhost:9999\"").expect("write");
        writeln!(file, "timeout_ms = 2500").expect("write");

        let mut cli = cli(Some(file.path().to_path_buf()));
        cli.timeout_ms = Some(7000);

        let config = load_config(&cli).expect("load");
        assert_eq!(config.api_url, "http://localhost:9999");
        assert_eq!(config.timeout_ms, 7000);
        assert_eq!(config.request_delay_ms, 500);
    }

    #[test]
    fn missing_explicit_config_file_is_an_error() {
        let err = load_config(&cli(Some(PathBuf::from("/nonexistent/parselab.toml"))))
            .expect_err("must fail");

        assert!(err.to_string().contains("Failed to read config file"));
    }
}

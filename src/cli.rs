//! Command-line interface.

use std::path::PathBuf;

use clap::Parser;

use crate::config::{load_config, validate_config, ConfigError, InspectorConfig};

#[derive(Debug, Parser)]
#[command(name = "post-inspector")]
#[command(about = "Log every incoming POST request to the console", long_about = None)]
pub struct Cli {
    /// TOML config file; built-in defaults are used when omitted
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Listen address as host:port, overriding the config file
    #[arg(short, long)]
    pub bind: Option<String>,

    /// Reject bodies larger than this many bytes with 413
    #[arg(long)]
    pub max_body_bytes: Option<usize>,
}

impl Cli {
    /// Merge the config file (if any) with command-line overrides and validate.
    pub fn resolve(&self) -> Result<InspectorConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => InspectorConfig::default(),
        };

        if let Some(bind) = &self.bind {
            config.listener.bind_address = bind.clone();
        }
        if let Some(max) = self.max_body_bytes {
            config.body.max_bytes = Some(max);
        }

        validate_config(&config).map_err(ConfigError::Validation)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_gives_defaults() {
        let cli = Cli::try_parse_from(["post-inspector"]).unwrap();
        assert_eq!(cli.resolve().unwrap(), InspectorConfig::default());
    }

    #[test]
    fn flags_override_defaults() {
        let cli = Cli::try_parse_from([
            "post-inspector",
            "--bind",
            "0.0.0.0:9999",
            "--max-body-bytes",
            "2048",
        ])
        .unwrap();

        let config = cli.resolve().unwrap();
        assert_eq!(config.listener.bind_address, "0.0.0.0:9999");
        assert_eq!(config.body.max_bytes, Some(2048));
    }

    #[test]
    fn overrides_are_validated() {
        let cli = Cli::try_parse_from(["post-inspector", "-b", "no-port"]).unwrap();
        assert!(matches!(cli.resolve(), Err(ConfigError::Validation(_))));
    }
}

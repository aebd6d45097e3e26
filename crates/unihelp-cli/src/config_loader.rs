//! Configuration loading for CLI commands

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use unihelp_client::{Session, UniHelpClient};
use unihelp_core::config::{CliConfigOverrides, LayeredConfig};
use unihelp_core::models::Coordinate;

use crate::cli::Cli;

/// Default config file name, searched in the current directory
const CONFIG_FILE: &str = "unihelp.toml";

/// Load the layered configuration for this invocation
///
/// Precedence: CLI flags > environment > config file > defaults. A config
/// file given with `--config` must exist; the implicit `unihelp.toml` in the
/// current directory is optional.
pub fn load_config(cli: &Cli) -> Result<LayeredConfig> {
    let mut config = LayeredConfig::with_defaults();

    match &cli.config {
        Some(path) => {
            config = config
                .load_from_file(path)
                .with_context(|| format!("Failed to load config file {}", path.display()))?;
        }
        None => {
            let default_path = PathBuf::from(CONFIG_FILE);
            if Path::new(CONFIG_FILE).exists() {
                config = config
                    .load_from_file(&default_path)
                    .with_context(|| format!("Failed to load {}", CONFIG_FILE))?;
            }
        }
    }

    let mut config = config.load_from_env();

    let origin = match (cli.lat, cli.lon) {
        (Some(latitude), Some(longitude)) => Some(Coordinate::new(latitude, longitude)),
        _ => None,
    };

    config.update_from_cli(CliConfigOverrides {
        api_url: cli.api_url.clone(),
        token: cli.token.clone(),
        page_size: None,
        origin,
    });

    Ok(config)
}

/// Build an API client from the effective configuration
pub fn build_client(config: &LayeredConfig) -> UniHelpClient {
    let session = match &config.token.value {
        Some(token) => Session::authenticated(&config.api_url.value, token),
        None => Session::anonymous(&config.api_url.value),
    };
    UniHelpClient::new(session)
}

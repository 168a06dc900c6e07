//! Configuration loading for the binaries.

use std::path::Path;
use strictly_rps_server::{ConfigError, ServerConfig};
use tracing::{debug, instrument};

/// Loads the config file (defaults if missing), then applies `PORT`.
///
/// `port_env` is the raw value of the `PORT` variable, if set.
#[instrument(skip(path), fields(path = %path.as_ref().display()))]
pub fn load_config(
    path: impl AsRef<Path>,
    port_env: Option<&str>,
) -> Result<ServerConfig, ConfigError> {
    let mut config = ServerConfig::load_or_default(path)?;
    config.apply_port_env(port_env);
    debug!(?config, "Resolved configuration");
    Ok(config)
}

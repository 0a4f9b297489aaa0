use anyhow::Context;
use nullroute_domain::{CliOverrides, Config};
use tracing::info;

pub fn load_config(
    config_path: Option<&str>,
    cli_overrides: CliOverrides,
) -> anyhow::Result<Config> {
    let config = Config::load(config_path, cli_overrides).context("loading configuration")?;
    config.validate().context("validating configuration")?;
    Ok(config)
}

/// Called once logging is up, since loading happens before it.
pub fn log_config_summary(config_path: Option<&str>, config: &Config) {
    info!(
        config_file = config_path.unwrap_or("default"),
        dns_bind = %config.server.dns_bind(),
        upstream = ?config.upstream.protocol,
        cache_ttl_secs = config.cache.ttl_secs,
        cache_max_entries = config.cache.max_entries,
        "Configuration loaded"
    );
}

use nullroute_domain::config::{LogFormat, LoggingConfig};
use nullroute_domain::Config;
use tracing::info;
use tracing_subscriber::EnvFilter;

const OWN_CRATES: &[&str] = &[
    "nullroute",
    "nullroute_domain",
    "nullroute_application",
    "nullroute_infrastructure",
    "nullroute_api",
];

/// Install the global subscriber. `RUST_LOG` wins over the configured level.
pub fn init_logging(config: &Config) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| filter_for(&config.logging));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_level(true);

    match config.logging.format {
        LogFormat::Text => builder.with_ansi(true).init(),
        LogFormat::Json => builder.json().init(),
    }

    info!("Logging initialized at level: {}", config.logging.level);
}

/// A plain level applies to this workspace only; dependencies stay at `warn`.
/// Anything else is taken as a full filter directive.
fn filter_for(logging: &LoggingConfig) -> EnvFilter {
    if logging.is_plain_level() {
        let level = logging.level.to_ascii_lowercase();
        let others = if level == "error" { "error" } else { "warn" };
        let directives = OWN_CRATES
            .iter()
            .map(|krate| format!("{krate}={level}"))
            .fold(others.to_string(), |acc, d| acc + "," + &d);
        return EnvFilter::new(directives);
    }

    EnvFilter::try_new(&logging.level).unwrap_or_else(|_| EnvFilter::new("info"))
}

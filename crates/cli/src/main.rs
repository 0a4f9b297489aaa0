//! # Nullroute
//!
//! Local DNS filtering engine: answers blocked names with NXDOMAIN, forwards
//! the rest upstream, and takes live commands over a loopback HTTP surface.

mod bootstrap;
mod di;
mod server;

use clap::Parser;
use nullroute_domain::CliOverrides;
use std::sync::atomic::Ordering;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "nullroute")]
#[command(version)]
#[command(about = "Local DNS filtering engine")]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(short = 'c', long)]
    config: Option<String>,

    /// DNS server port
    #[arg(short = 'd', long)]
    dns_port: Option<u16>,

    /// Bind address for the DNS listener
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short = 'l', long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let overrides = CliOverrides {
        dns_port: cli.dns_port,
        bind_address: cli.bind,
        log_level: cli.log_level,
    };
    let config = bootstrap::load_config(cli.config.as_deref(), overrides)?;
    bootstrap::init_logging(&config);
    bootstrap::log_config_summary(cli.config.as_deref(), &config);

    info!(version = env!("CARGO_PKG_VERSION"), "Nullroute starting");

    let services = di::Services::build(&config)?;

    match services.reload_rules.execute().await {
        Ok(counts) => info!(
            blocked = counts.blocked,
            whitelisted = counts.whitelisted,
            "Initial rules loaded"
        ),
        Err(e) => error!(error = %e, "Initial rule load failed, starting with no rules"),
    }

    let shutdown = CancellationToken::new();

    let dns_task = tokio::spawn(server::start_dns_server(
        config.server.clone(),
        services.handle_query.clone(),
        shutdown.clone(),
    ));

    let control_task = if config.control.enabled {
        Some(tokio::spawn(server::start_control_server(
            config.control.bind(),
            services.app_state(),
            shutdown.clone(),
        )))
    } else {
        info!("Control surface disabled");
        None
    };

    tokio::select! {
        result = tokio::signal::ctrl_c() => {
            if let Err(e) = result {
                error!(error = %e, "Failed to listen for shutdown signal");
            }
            info!("Shutdown signal received");
        }
        _ = shutdown.cancelled() => {}
    }
    shutdown.cancel();

    if let Ok(Err(e)) = dns_task.await {
        error!(error = %e, "DNS server exited with error");
    }
    if let Some(task) = control_task {
        if let Ok(Err(e)) = task.await {
            error!(error = %e, "Control server exited with error");
        }
    }

    let stats = services.get_statistics.execute();
    let cache = services.cache.metrics();
    info!(
        total_queries = stats.total_queries,
        queries_blocked = stats.queries_blocked,
        block_rate = stats.block_rate(),
        cache_hit_rate = cache.hit_rate(),
        cache_evictions = cache.evictions.load(Ordering::Relaxed),
        "Nullroute stopped"
    );

    Ok(())
}

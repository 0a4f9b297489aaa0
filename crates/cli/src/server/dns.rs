use anyhow::Context;
use nullroute_application::use_cases::HandleDnsQueryUseCase;
use nullroute_domain::config::ServerConfig;
use nullroute_infrastructure::dns::UdpDnsServer;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::info;

/// Run the UDP listener until `shutdown` fires. Cancels `shutdown` on exit,
/// whether the listener stopped cleanly or failed.
pub async fn start_dns_server(
    config: ServerConfig,
    handler: Arc<HandleDnsQueryUseCase>,
    shutdown: CancellationToken,
) -> anyhow::Result<()> {
    let result = serve(&config, handler, shutdown.clone()).await;
    shutdown.cancel();
    result
}

async fn serve(
    config: &ServerConfig,
    handler: Arc<HandleDnsQueryUseCase>,
    shutdown: CancellationToken,
) -> anyhow::Result<()> {
    let bind_addr = config.dns_bind();
    let socket_addr: SocketAddr = bind_addr
        .parse()
        .with_context(|| format!("invalid DNS bind address {}", bind_addr))?;

    info!(
        bind_address = %socket_addr,
        max_in_flight = config.max_in_flight,
        "Starting DNS server"
    );

    let server = UdpDnsServer::bind(socket_addr, handler, config.max_in_flight)
        .await
        .with_context(|| format!("binding DNS listener on {}", socket_addr))?
        .with_cancellation(shutdown);

    server.run().await.context("DNS listener failed")
}

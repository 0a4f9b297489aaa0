use anyhow::Context;
use nullroute_api::{create_control_routes, AppState};
use std::net::SocketAddr;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

pub async fn start_control_server(
    bind_addr: String,
    state: AppState,
    shutdown: CancellationToken,
) -> anyhow::Result<()> {
    let socket_addr: SocketAddr = bind_addr
        .parse()
        .with_context(|| format!("invalid control bind address {}", bind_addr))?;

    if !socket_addr.ip().is_loopback() {
        warn!(bind_address = %socket_addr, "Control surface is not bound to loopback");
    }

    let app = create_control_routes(state);
    let listener = tokio::net::TcpListener::bind(socket_addr)
        .await
        .with_context(|| format!("binding control listener on {}", socket_addr))?;

    info!(bind_address = %socket_addr, "Control server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(async move { shutdown.cancelled().await })
        .await
        .context("control server failed")?;

    info!("Control server stopped");
    Ok(())
}

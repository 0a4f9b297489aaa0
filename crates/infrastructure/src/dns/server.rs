use bytes::Bytes;
use nullroute_application::use_cases::{DropReason, HandleDnsQueryUseCase, QueryOutcome};
use nullroute_domain::DomainError;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::UdpSocket;
use tokio::sync::Semaphore;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Largest inbound query accepted, matching the EDNS(0) payload size.
const MAX_QUERY_SIZE: usize = 4096;

/// UDP listener for the dispatcher pipeline.
///
/// One receive loop per socket. Each datagram is handled on its own task so a
/// slow upstream never delays unrelated queries; a semaphore bounds how many
/// are in flight. When the cancellation token fires the loop stops and
/// in-flight tasks are abandoned without answering.
pub struct UdpDnsServer {
    socket: Arc<UdpSocket>,
    handler: Arc<HandleDnsQueryUseCase>,
    in_flight: Arc<Semaphore>,
    shutdown: CancellationToken,
}

impl UdpDnsServer {
    pub async fn bind(
        addr: SocketAddr,
        handler: Arc<HandleDnsQueryUseCase>,
        max_in_flight: usize,
    ) -> Result<Self, DomainError> {
        let socket = UdpSocket::bind(addr)
            .await
            .map_err(|e| DomainError::IoError(format!("Failed to bind {}: {}", addr, e)))?;
        Ok(Self::from_socket(socket, handler, max_in_flight))
    }

    pub fn from_socket(
        socket: UdpSocket,
        handler: Arc<HandleDnsQueryUseCase>,
        max_in_flight: usize,
    ) -> Self {
        Self {
            socket: Arc::new(socket),
            handler,
            in_flight: Arc::new(Semaphore::new(max_in_flight.max(1))),
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub fn local_addr(&self) -> Result<SocketAddr, DomainError> {
        self.socket
            .local_addr()
            .map_err(|e| DomainError::IoError(e.to_string()))
    }

    pub async fn run(self) -> Result<(), DomainError> {
        info!(bind_address = %self.local_addr()?, protocol = "UDP", "DNS server listening");

        let mut buf = vec![0u8; MAX_QUERY_SIZE];
        loop {
            // Take a permit before reading so a saturated engine stops
            // draining the socket instead of queueing unbounded tasks.
            let permit = tokio::select! {
                _ = self.shutdown.cancelled() => break,
                permit = Arc::clone(&self.in_flight).acquire_owned() => match permit {
                    Ok(permit) => permit,
                    Err(_) => break,
                },
            };

            let (len, peer) = tokio::select! {
                _ = self.shutdown.cancelled() => break,
                received = self.socket.recv_from(&mut buf) => match received {
                    Ok(received) => received,
                    Err(e) => {
                        warn!(error = %e, "UDP receive failed");
                        continue;
                    }
                },
            };

            let packet = Bytes::copy_from_slice(&buf[..len]);
            let socket = Arc::clone(&self.socket);
            let handler = Arc::clone(&self.handler);
            let shutdown = self.shutdown.clone();

            tokio::spawn(async move {
                let _permit = permit;
                let outcome = tokio::select! {
                    _ = shutdown.cancelled() => return,
                    outcome = handler.execute(packet) => outcome,
                };
                respond(&socket, peer, outcome).await;
            });
        }

        info!("DNS server stopped");
        Ok(())
    }
}

async fn respond(socket: &UdpSocket, peer: SocketAddr, outcome: QueryOutcome) {
    match outcome {
        QueryOutcome::Answered { response, .. } => {
            if let Err(e) = socket.send_to(&response, peer).await {
                debug!(peer = %peer, error = %e, "Failed to send response");
            }
        }
        QueryOutcome::Dropped(DropReason::Malformed(_)) => {
            debug!(peer = %peer, "Malformed datagram dropped");
        }
        QueryOutcome::Dropped(DropReason::UpstreamFailed) => {
            debug!(peer = %peer, "Query dropped after upstream failure");
        }
    }
}
